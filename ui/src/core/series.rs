//! Projection of record collections into renderer-agnostic chart series.

use crate::core::aggregate::{relative_intensity, share_of_total};
use crate::core::format::truncate;
use crate::core::model::FlowRecord;

/// One named, ordered value array of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Aligned labels and value arrays for one chart.
///
/// The source records ride along so tooltip builders can look a row up by
/// chart index instead of capturing the dataset in closures. Every array in
/// a descriptor has the same length.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SeriesDescriptor {
    pub labels: Vec<String>,
    pub series: Vec<ValueSeries>,
    pub records: Vec<FlowRecord>,
}

impl SeriesDescriptor {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Source record behind one chart index.
    pub fn record(&self, index: usize) -> Option<&FlowRecord> {
        self.records.get(index)
    }
}

/// Duration ranking plus the per-item visual weight.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DurationSeries {
    pub descriptor: SeriesDescriptor,
    /// `duration / max(durations)` in `[0, 1]`, aligned with the labels.
    pub intensity: Vec<f64>,
}

/// Category breakdown, or an explicit no-data marker the renderer branches
/// on instead of drawing an empty chart.
#[derive(Debug, Clone, PartialEq)]
pub enum CategorySeries {
    NoData,
    Ready(CategoryBreakdown),
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CategoryBreakdown {
    pub descriptor: SeriesDescriptor,
    pub intensity: Vec<f64>,
    /// Share of the category's duration total per item, in percent.
    pub share_pct: Vec<f64>,
}

/// Dual-series ranking: one truncated label per record, initiated and
/// completed counts aligned by index.
pub fn build_ranking(records: &[FlowRecord], label_max: usize) -> SeriesDescriptor {
    let labels = records
        .iter()
        .map(|record| truncate(&record.template_name, label_max))
        .collect();
    let initiated = records.iter().map(|record| record.initiated).collect();
    let completed = records.iter().map(|record| record.completed).collect();

    SeriesDescriptor {
        labels,
        series: vec![
            ValueSeries {
                name: "发起流程数".to_string(),
                values: initiated,
            },
            ValueSeries {
                name: "完成流程数".to_string(),
                values: completed,
            },
        ],
        records: records.to_vec(),
    }
}

/// Single-series duration ranking with per-item intensity weights.
pub fn build_duration_ranking(records: &[FlowRecord], label_max: usize) -> DurationSeries {
    let labels = records
        .iter()
        .map(|record| truncate(&record.template_name, label_max))
        .collect();
    let durations: Vec<f64> = records
        .iter()
        .map(|record| record.avg_duration_hours)
        .collect();
    let intensity = relative_intensity(&durations);

    DurationSeries {
        descriptor: SeriesDescriptor {
            labels,
            series: vec![ValueSeries {
                name: "平均运行时长(小时)".to_string(),
                values: durations,
            }],
            records: records.to_vec(),
        },
        intensity,
    }
}

/// Duration breakdown for one category, with each item's share of the
/// category total. Empty input yields [`CategorySeries::NoData`].
pub fn build_category_series(records: &[FlowRecord], label_max: usize) -> CategorySeries {
    if records.is_empty() {
        return CategorySeries::NoData;
    }

    let ranking = build_duration_ranking(records, label_max);
    let durations = &ranking.descriptor.series[0].values;
    let share_pct = durations
        .iter()
        .map(|duration| share_of_total(*duration, durations))
        .collect();

    CategorySeries::Ready(CategoryBreakdown {
        share_pct,
        descriptor: ranking.descriptor,
        intensity: ranking.intensity,
    })
}

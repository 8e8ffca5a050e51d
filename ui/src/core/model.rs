//! Wire payload and validated dataset for the flow performance dashboard.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display order for the category breakdown charts.
///
/// The exporter writes `category_rankings` as a JSON object; rendering must
/// never depend on its key order, so the dataset re-orders categories against
/// this list and appends anything unexpected after it, sorted by name.
pub const CATEGORY_ORDER: [&str; 3] = ["销售类流程", "采购类流程", "项目&产品管理类流程"];

/// One process template's metrics row.
///
/// Field keys follow the upstream Excel → JSON exporter. Counts arrive as
/// JSON floats (pandas writes `12.0`), so the numeric fields stay `f64` and
/// absent ones default to zero. Columns the dashboard doesn't chart
/// (环比, 同比, …) are ignored on decode. Well-formed data keeps
/// `completed <= initiated`; this is not enforced.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowRecord {
    #[serde(rename = "模板名称")]
    pub template_name: String,
    #[serde(rename = "发起流程数", default)]
    pub initiated: f64,
    #[serde(rename = "完成流程数", default)]
    pub completed: f64,
    #[serde(rename = "未结束流程数", default)]
    pub unfinished: f64,
    #[serde(rename = "平均运行时长_数值", default)]
    pub avg_duration_hours: f64,
    #[serde(rename = "分类", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Raw fetch payload as written by the exporter.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ChartPayload {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub data: Option<PayloadData>,
}

/// The four record views inside a successful payload.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PayloadData {
    #[serde(default)]
    pub flow_ranking: Vec<FlowRecord>,
    #[serde(default)]
    pub duration_ranking: Vec<FlowRecord>,
    #[serde(default)]
    pub category_rankings: HashMap<String, Vec<FlowRecord>>,
    #[serde(default)]
    pub raw_data: Vec<FlowRecord>,
}

/// One category's ordered ranking rows.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRanking {
    pub name: String,
    pub records: Vec<FlowRecord>,
}

/// Validated, immutable snapshot of one dashboard load.
///
/// `flow_ranking` and `duration_ranking` come pre-sorted from the exporter;
/// `raw_data` is the full unordered collection backing the summary strip.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Dataset {
    pub flow_ranking: Vec<FlowRecord>,
    pub duration_ranking: Vec<FlowRecord>,
    pub categories: Vec<CategoryRanking>,
    pub raw_data: Vec<FlowRecord>,
    pub generated_at: Option<String>,
}

impl Dataset {
    /// Validate a fetched payload.
    ///
    /// A `success: false` payload fails with its own message; a missing
    /// `data` block counts as a payload failure too. Every category named in
    /// [`CATEGORY_ORDER`] gets an entry even when the exporter omitted it, so
    /// the dashboard always shows the same chart areas and an empty category
    /// renders as a local "no data" card instead of vanishing.
    pub fn from_payload(payload: ChartPayload) -> Result<Self, String> {
        if !payload.success {
            return Err(payload.error.unwrap_or_else(|| "数据加载失败".to_string()));
        }
        let data = payload.data.ok_or_else(|| "数据内容缺失".to_string())?;

        let mut rankings = data.category_rankings;
        let mut categories = Vec::with_capacity(rankings.len().max(CATEGORY_ORDER.len()));
        for name in CATEGORY_ORDER {
            categories.push(CategoryRanking {
                name: name.to_string(),
                records: rankings.remove(name).unwrap_or_default(),
            });
        }
        let mut leftovers: Vec<(String, Vec<FlowRecord>)> = rankings.into_iter().collect();
        leftovers.sort_by(|a, b| a.0.cmp(&b.0));
        categories.extend(
            leftovers
                .into_iter()
                .map(|(name, records)| CategoryRanking { name, records }),
        );

        Ok(Self {
            flow_ranking: data.flow_ranking,
            duration_ranking: data.duration_ranking,
            categories,
            raw_data: data.raw_data,
            generated_at: payload.generated_at,
        })
    }

    /// Ranking rows for one category; unknown names yield an empty slice.
    pub fn category(&self, name: &str) -> &[FlowRecord] {
        self.categories
            .iter()
            .find(|category| category.name == name)
            .map(|category| category.records.as_slice())
            .unwrap_or(&[])
    }
}

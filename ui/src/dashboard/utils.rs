use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::core::aggregate::completion_rate;
use crate::core::format::{format_completion, format_duration, format_share};
use crate::core::series::{CategoryBreakdown, SeriesDescriptor};

/// Label truncation widths, matching the upstream dashboard.
pub(crate) const RANKING_LABEL_MAX: usize = 10;
pub(crate) const CATEGORY_LABEL_MAX: usize = 8;

/// Accent color per known category; anything else falls back to the default
/// dashboard blue.
static CATEGORY_THEMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("销售类流程", "rgba(155, 89, 182, 0.8)"),
        ("采购类流程", "rgba(241, 196, 15, 0.8)"),
        ("项目&产品管理类流程", "rgba(26, 188, 156, 0.8)"),
    ])
});

pub(crate) fn category_theme(name: &str) -> &'static str {
    CATEGORY_THEMES
        .get(name)
        .copied()
        .unwrap_or("rgba(52, 152, 219, 0.8)")
}

/// Donut segment hue, rotated per index like the upstream charts.
pub(crate) fn segment_color(index: usize, count: usize) -> String {
    let hue = if count == 0 {
        0
    } else {
        (index * 360 / count) % 360
    };
    format!("hsla({hue}, 70%, 60%, 0.8)")
}

/// Tooltip lines for one flow ranking row: completion rate (with the `n/a`
/// sentinel) and still-open count.
pub(crate) fn ranking_tooltip(descriptor: &SeriesDescriptor, index: usize) -> Vec<String> {
    match descriptor.record(index) {
        Some(record) => vec![
            format!(
                "完成率: {}",
                format_completion(completion_rate(record.initiated, record.completed))
            ),
            format!("未完成: {}", record.unfinished.round() as u64),
        ],
        None => Vec::new(),
    }
}

/// Tooltip lines for one duration ranking row.
pub(crate) fn duration_tooltip(descriptor: &SeriesDescriptor, index: usize) -> Vec<String> {
    match descriptor.record(index) {
        Some(record) => vec![
            format!("平均时长: {}", format_duration(record.avg_duration_hours)),
            format!("发起数: {}", record.initiated.round() as u64),
            format!("完成数: {}", record.completed.round() as u64),
        ],
        None => Vec::new(),
    }
}

/// Tooltip lines for one category segment: duration, share of the category
/// total, initiated count.
pub(crate) fn category_tooltip(breakdown: &CategoryBreakdown, index: usize) -> Vec<String> {
    match breakdown.descriptor.record(index) {
        Some(record) => {
            let share = breakdown.share_pct.get(index).copied().unwrap_or(0.0);
            vec![
                format!("时长: {}", format_duration(record.avg_duration_hours)),
                format!("占比: {}", format_share(share)),
                format!("发起数: {}", record.initiated.round() as u64),
            ]
        }
        None => Vec::new(),
    }
}

/// Compact stamp for the dataset's generation time.
///
/// The exporter writes a naive ISO timestamp (`2025-07-01T08:30:15.123456`,
/// no offset), so this trims rather than parses: date part plus `HH:MM`.
pub(crate) fn format_generated_at(raw: &str) -> String {
    let (date, time_segment) = raw.split_once('T').unwrap_or((raw, ""));
    let clock: String = time_segment
        .split(['.', 'Z', '+'])
        .next()
        .unwrap_or(time_segment)
        .chars()
        .take(5)
        .collect();

    if clock.is_empty() {
        date.to_string()
    } else {
        format!("{date} {clock}")
    }
}

use dioxus::prelude::*;

use crate::core::format::{format_duration, format_share};
use crate::core::model::FlowRecord;
use crate::core::series::{
    build_category_series, build_duration_ranking, build_ranking, CategorySeries,
};
use crate::dashboard::{
    category_theme, category_tooltip, duration_tooltip, ranking_tooltip, segment_color,
    CATEGORY_LABEL_MAX, RANKING_LABEL_MAX,
};

// Radius with a circumference of 100, so dash lengths are percentages.
const DONUT_RADIUS: &str = "15.91549430918954";

fn bar_width(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        (value / max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Dual horizontal bars: initiated vs completed counts per template.
#[component]
pub fn FlowRankingChart(records: Vec<FlowRecord>) -> Element {
    let descriptor = build_ranking(&records, RANKING_LABEL_MAX);
    let max = descriptor
        .series
        .iter()
        .flat_map(|series| series.values.iter())
        .copied()
        .fold(0.0, f64::max);

    let rows: Vec<RankingRow> = (0..descriptor.len())
        .map(|idx| {
            let initiated = descriptor.series[0].values[idx];
            let completed = descriptor.series[1].values[idx];
            RankingRow {
                label: descriptor.labels[idx].clone(),
                initiated_label: format!("{}", initiated.round() as u64),
                completed_label: format!("{}", completed.round() as u64),
                initiated_pct: bar_width(initiated, max),
                completed_pct: bar_width(completed, max),
                tooltip: ranking_tooltip(&descriptor, idx).join("\n"),
            }
        })
        .collect();

    rsx! {
        section { class: "dashboard-card chart-card",
            div { class: "dashboard-card__header",
                h2 { "发起流程数 vs 完成流程数 (前10名)" }
            }

            div { class: "bar-chart__legend",
                span { class: "bar-chart__legend-item",
                    span { class: "bar-chart__legend-swatch bar-chart__legend-swatch--initiated" }
                    "发起流程数"
                }
                span { class: "bar-chart__legend-item",
                    span { class: "bar-chart__legend-swatch bar-chart__legend-swatch--completed" }
                    "完成流程数"
                }
            }

            if rows.is_empty() {
                p { class: "dashboard-card__empty", "暂无数据" }
            } else {
                div { class: "bar-chart",
                    for row in rows.into_iter() {
                        {render_ranking_row(row)}
                    }
                }
            }
        }
    }
}

#[derive(Clone)]
struct RankingRow {
    label: String,
    initiated_label: String,
    completed_label: String,
    initiated_pct: f64,
    completed_pct: f64,
    tooltip: String,
}

fn render_ranking_row(row: RankingRow) -> Element {
    rsx! {
        div { class: "bar-chart__row", title: "{row.tooltip}",
            span { class: "bar-chart__label", "{row.label}" }
            div { class: "bar-chart__track",
                div {
                    class: "bar-chart__bar bar-chart__bar--initiated",
                    style: "width: {row.initiated_pct}%",
                    span { class: "bar-chart__value", "{row.initiated_label}" }
                }
                div {
                    class: "bar-chart__bar bar-chart__bar--completed",
                    style: "width: {row.completed_pct}%",
                    span { class: "bar-chart__value", "{row.completed_label}" }
                }
            }
        }
    }
}

/// Single horizontal bars weighted by how long a template runs relative to
/// the slowest one.
#[component]
pub fn DurationRankingChart(records: Vec<FlowRecord>) -> Element {
    let ranking = build_duration_ranking(&records, RANKING_LABEL_MAX);
    let durations = &ranking.descriptor.series[0].values;
    let max = durations.iter().copied().fold(0.0, f64::max);

    let rows: Vec<DurationRow> = (0..ranking.descriptor.len())
        .map(|idx| {
            let hours = durations[idx];
            // Same ramp as the upstream gradient: 0.3 floor, intensity on top.
            let alpha = 0.3 + ranking.intensity[idx] * 0.7;
            DurationRow {
                label: ranking.descriptor.labels[idx].clone(),
                value_label: format_duration(hours),
                pct: bar_width(hours, max),
                background: format!("rgba(231, 76, 60, {alpha:.2})"),
                tooltip: duration_tooltip(&ranking.descriptor, idx).join("\n"),
            }
        })
        .collect();

    rsx! {
        section { class: "dashboard-card chart-card",
            div { class: "dashboard-card__header",
                h2 { "流程平均运行时长排名 (前10名)" }
            }

            if rows.is_empty() {
                p { class: "dashboard-card__empty", "暂无数据" }
            } else {
                div { class: "bar-chart",
                    for row in rows.into_iter() {
                        {render_duration_row(row)}
                    }
                }
            }
        }
    }
}

#[derive(Clone)]
struct DurationRow {
    label: String,
    value_label: String,
    pct: f64,
    background: String,
    tooltip: String,
}

fn render_duration_row(row: DurationRow) -> Element {
    rsx! {
        div { class: "bar-chart__row", title: "{row.tooltip}",
            span { class: "bar-chart__label", "{row.label}" }
            div { class: "bar-chart__track",
                div {
                    class: "bar-chart__bar bar-chart__bar--duration",
                    style: "width: {row.pct}%; background: {row.background}",
                    span { class: "bar-chart__value", "{row.value_label}" }
                }
            }
        }
    }
}

/// Donut breakdown of one category's durations, or a local "no data" notice
/// when the category has no ranked templates.
#[component]
pub fn CategoryDurationChart(name: String, records: Vec<FlowRecord>) -> Element {
    let accent = category_theme(&name);

    let body = match build_category_series(&records, CATEGORY_LABEL_MAX) {
        CategorySeries::NoData => rsx! {
            p { class: "dashboard-card__empty", "该分类暂无数据" }
        },
        CategorySeries::Ready(breakdown) => {
            let count = breakdown.descriptor.len();
            let mut start = 25.0_f64;
            let segments: Vec<DonutSegment> = (0..count)
                .map(|idx| {
                    let share = breakdown.share_pct[idx];
                    let segment = DonutSegment {
                        color: segment_color(idx, count),
                        dash: format!("{share:.4} {:.4}", 100.0 - share),
                        offset: format!("{start:.4}"),
                        label: breakdown.descriptor.labels[idx].clone(),
                        share_label: format_share(share),
                        tooltip: category_tooltip(&breakdown, idx).join("\n"),
                    };
                    start -= share;
                    segment
                })
                .collect();

            rsx! {
                div { class: "donut-chart",
                    svg { class: "donut", view_box: "0 0 42 42", role: "img",
                        circle {
                            class: "donut__ring",
                            cx: "21",
                            cy: "21",
                            r: DONUT_RADIUS,
                            fill: "none",
                            stroke_width: "6",
                        }
                        for segment in segments.iter() {
                            circle {
                                class: "donut__segment",
                                cx: "21",
                                cy: "21",
                                r: DONUT_RADIUS,
                                fill: "none",
                                stroke: "{segment.color}",
                                stroke_width: "6",
                                stroke_dasharray: "{segment.dash}",
                                stroke_dashoffset: "{segment.offset}",
                            }
                        }
                    }

                    ul { class: "donut-chart__legend",
                        for segment in segments.iter() {
                            li { class: "donut-chart__legend-item", title: "{segment.tooltip}",
                                span {
                                    class: "donut-chart__legend-swatch",
                                    style: "background: {segment.color}",
                                }
                                span { class: "donut-chart__legend-label", "{segment.label}" }
                                span { class: "donut-chart__legend-share", "{segment.share_label}" }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section {
            class: "dashboard-card chart-card chart-card--category",
            style: "--category-accent: {accent}",
            div { class: "dashboard-card__header",
                h2 { "{name}时长分布" }
            }
            {body}
        }
    }
}

#[derive(Clone)]
struct DonutSegment {
    color: String,
    dash: String,
    offset: String,
    label: String,
    share_label: String,
    tooltip: String,
}

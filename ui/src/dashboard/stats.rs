use dioxus::prelude::*;

use crate::core::{aggregate, format, model::Dataset};
use crate::dashboard::format_generated_at;

/// Four-tile summary strip over the full record collection.
#[component]
pub fn SummaryStrip(dataset: Dataset) -> Element {
    let stats = aggregate::summarize(&dataset.raw_data);
    let generated = dataset.generated_at.as_deref().map(format_generated_at);

    let total_flows = format::format_count(stats.total_flows as u64);
    let total_initiated = format::format_count(stats.total_initiated);
    let total_completed = format::format_count(stats.total_completed);
    let avg_duration = format::format_duration(stats.avg_duration_hours);

    rsx! {
        section { class: "dashboard-card dashboard-stats",
            div { class: "dashboard-card__header",
                h2 { "整体概览" }
                if let Some(stamp) = generated {
                    span { class: "dashboard-card__meta", "数据生成于 {stamp}" }
                }
            }

            div { class: "dashboard-highlights",
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", "总流程数" }
                    strong { class: "dashboard-highlight__value", "{total_flows}" }
                    span { class: "dashboard-highlight__meta", "全部流程模板" }
                }
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", "总发起数" }
                    strong { class: "dashboard-highlight__value", "{total_initiated}" }
                    span { class: "dashboard-highlight__meta", "累计发起流程" }
                }
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", "总完成数" }
                    strong { class: "dashboard-highlight__value", "{total_completed}" }
                    span { class: "dashboard-highlight__meta", "累计完成流程" }
                }
                div { class: "dashboard-highlight",
                    span { class: "dashboard-highlight__label", "平均运行时长" }
                    strong { class: "dashboard-highlight__value", "{avg_duration}" }
                    span { class: "dashboard-highlight__meta", "仅统计有时长数据的流程" }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::core::loader::DATA_SOURCE;
use crate::dashboard::{
    CategoryDurationChart, DashboardState, DurationRankingChart, ExportPanel, FlowRankingChart,
    LoadStatus, SummaryStrip,
};

#[cfg(debug_assertions)]
fn log_dashboard_render(status: &str) {
    // Lightweight render trace for diagnosing load/refresh issues.
    println!("[data] Dashboard render (status={status})");
}

/// The dashboard page: loads the dataset once, renders the summary strip and
/// the five configured charts, and lets the user re-trigger the load
/// (replacing the in-flight state wholesale).
#[component]
pub fn Dashboard(data_source: Option<String>) -> Element {
    let source = data_source.unwrap_or_else(|| DATA_SOURCE.to_string());
    let mut state = use_resource(move || {
        let source = source.clone();
        async move { DashboardState::load(&source).await }
    });

    let loaded = state.read_unchecked();

    #[cfg(debug_assertions)]
    {
        let status = match &*loaded {
            None => "loading",
            Some(state) => match &state.status {
                LoadStatus::Ready(_) => "ready",
                LoadStatus::Failed(_) => "failed",
            },
        };
        log_dashboard_render(status);
    }

    let body = match &*loaded {
        None => rsx! {
            div { class: "dashboard__notice dashboard__notice--loading", "正在加载数据" }
        },
        Some(state) => match &state.status {
            LoadStatus::Failed(message) => rsx! {
                div { class: "dashboard__notice dashboard__notice--error",
                    "数据加载失败: {message}"
                }
            },
            LoadStatus::Ready(dataset) => rsx! {
                SummaryStrip { dataset: dataset.clone() }

                div { class: "dashboard__charts",
                    FlowRankingChart { records: dataset.flow_ranking.clone() }
                    DurationRankingChart { records: dataset.duration_ranking.clone() }
                    for category in dataset.categories.iter() {
                        CategoryDurationChart {
                            key: "{category.name}",
                            name: category.name.clone(),
                            records: category.records.clone(),
                        }
                    }
                }

                ExportPanel { dataset: dataset.clone() }
            },
        },
    };

    rsx! {
        section { class: "page page-dashboard",
            header { class: "dashboard__header",
                div {
                    h1 { "营销平台流程绩效分析" }
                    p { class: "dashboard__tagline", "流程发起、完成与运行时长概览" }
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| state.restart(),
                    "刷新数据"
                }
            }

            {body}
        }
    }
}

mod charts;
pub use charts::{CategoryDurationChart, DurationRankingChart, FlowRankingChart};

mod stats;
pub use stats::SummaryStrip;

mod export;
pub use export::ExportPanel;

mod utils;
pub(crate) use utils::*;

use crate::core::loader;
use crate::core::model::Dataset;

/// Outcome of one dashboard load pass.
///
/// Transport and payload failures land in `Failed` with their message and
/// the view renders them identically, as a single full-surface error card.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Ready(Dataset),
    Failed(String),
}

/// Shared state for the dashboard view: one load's validated dataset or its
/// failure message. Recomputed wholesale on every refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub status: LoadStatus,
}

impl DashboardState {
    /// Fetch `source` and validate the payload into a dataset.
    pub async fn load(source: &str) -> Self {
        let status = match loader::load_payload(source).await {
            Ok(payload) => match Dataset::from_payload(payload) {
                Ok(dataset) => LoadStatus::Ready(dataset),
                Err(err) => LoadStatus::Failed(err),
            },
            Err(err) => LoadStatus::Failed(err),
        };

        if let LoadStatus::Failed(message) = &status {
            eprintln!("[data] 数据加载失败: {message}");
        }

        DashboardState { status }
    }
}

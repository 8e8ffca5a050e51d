//! End-to-end flow over the public API: decode a realistic exporter payload,
//! validate it into a dataset, and build every configured chart's series.

use ui::core::aggregate::{completion_rate, summarize};
use ui::core::loader::load_payload;
use ui::core::model::{ChartPayload, Dataset, CATEGORY_ORDER};
use ui::core::series::{
    build_category_series, build_duration_ranking, build_ranking, CategorySeries,
};

const FIXTURE: &str = r#"{
    "success": true,
    "generated_at": "2025-07-01T08:30:15.123456",
    "data": {
        "flow_ranking": [
            {
                "模板名称": "销售合同审批流程模板",
                "发起流程数": 220.0,
                "完成流程数": 180.0,
                "未结束流程数": 40.0,
                "平均运行时长_数值": 18.5,
                "环比": "+12%"
            },
            {
                "模板名称": "采购合同审批流程模板",
                "发起流程数": 128.0,
                "完成流程数": 97.0,
                "未结束流程数": 31.0,
                "平均运行时长_数值": 30.25
            },
            {
                "模板名称": "新上线流程",
                "发起流程数": 0.0,
                "完成流程数": 0.0
            }
        ],
        "duration_ranking": [
            {
                "模板名称": "采购合同审批流程模板",
                "发起流程数": 128.0,
                "完成流程数": 97.0,
                "平均运行时长_数值": 30.25
            },
            {
                "模板名称": "销售合同审批流程模板",
                "发起流程数": 220.0,
                "完成流程数": 180.0,
                "平均运行时长_数值": 18.5
            }
        ],
        "category_rankings": {
            "项目&产品管理类流程": [
                {
                    "模板名称": "项目立项流程",
                    "发起流程数": 45.0,
                    "完成流程数": 40.0,
                    "平均运行时长_数值": 52.0
                }
            ],
            "销售类流程": [
                {
                    "模板名称": "销售合同审批流程模板",
                    "发起流程数": 220.0,
                    "完成流程数": 180.0,
                    "平均运行时长_数值": 18.5
                },
                {
                    "模板名称": "销售回款流程",
                    "发起流程数": 95.0,
                    "完成流程数": 90.0,
                    "平均运行时长_数值": 6.0
                }
            ]
        },
        "raw_data": [
            {
                "模板名称": "销售合同审批流程模板",
                "发起流程数": 220.0,
                "完成流程数": 180.0,
                "平均运行时长_数值": 18.5
            },
            {
                "模板名称": "采购合同审批流程模板",
                "发起流程数": 128.0,
                "完成流程数": 97.0,
                "平均运行时长_数值": 30.25
            },
            {
                "模板名称": "新上线流程",
                "发起流程数": 0.0,
                "完成流程数": 0.0,
                "平均运行时长_数值": 0.0
            }
        ]
    }
}"#;

fn load_fixture() -> Dataset {
    let payload: ChartPayload = serde_json::from_str(FIXTURE).expect("fixture decodes");
    Dataset::from_payload(payload).expect("fixture validates")
}

#[test]
fn categories_come_back_in_display_order_with_gaps_filled() {
    let dataset = load_fixture();
    let names: Vec<&str> = dataset
        .categories
        .iter()
        .map(|category| category.name.as_str())
        .collect();
    assert_eq!(names, CATEGORY_ORDER);

    // 采购类流程 is absent from the payload: present as an empty chart area.
    assert!(dataset.category("采购类流程").is_empty());
    assert_eq!(dataset.category("销售类流程").len(), 2);
    assert!(dataset.category("不存在的分类").is_empty());
}

#[test]
fn every_configured_chart_builds_aligned_series() {
    let dataset = load_fixture();

    let ranking = build_ranking(&dataset.flow_ranking, 10);
    assert_eq!(ranking.len(), dataset.flow_ranking.len());
    for series in &ranking.series {
        assert_eq!(series.values.len(), ranking.labels.len());
    }
    // Labels truncate at ten characters for the ranking charts.
    assert!(ranking.labels.iter().all(|label| {
        label.trim_end_matches("...").chars().count() <= 10
    }));

    let durations = build_duration_ranking(&dataset.duration_ranking, 10);
    assert_eq!(durations.intensity.len(), durations.descriptor.len());
    assert_eq!(durations.intensity[0], 1.0);

    for category in &dataset.categories {
        match build_category_series(&category.records, 8) {
            CategorySeries::NoData => assert!(category.records.is_empty()),
            CategorySeries::Ready(breakdown) => {
                assert!(!breakdown.descriptor.is_empty());
                assert_eq!(breakdown.share_pct.len(), breakdown.descriptor.len());
                let total: f64 = breakdown.share_pct.iter().sum();
                assert!((total - 100.0).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn summary_strip_numbers_match_the_raw_view() {
    let dataset = load_fixture();
    let stats = summarize(&dataset.raw_data);

    assert_eq!(stats.total_flows, 3);
    assert_eq!(stats.total_initiated, 348);
    assert_eq!(stats.total_completed, 277);
    // Only the two records with timing data count toward the mean.
    assert!((stats.avg_duration_hours - 24.375).abs() < 1e-9);

    // The template with nothing initiated has no defined completion rate.
    let idle = &dataset.raw_data[2];
    assert_eq!(completion_rate(idle.initiated, idle.completed), None);
}

#[test]
fn generated_at_rides_along() {
    let dataset = load_fixture();
    assert_eq!(
        dataset.generated_at.as_deref(),
        Some("2025-07-01T08:30:15.123456")
    );
}

#[test]
fn failed_payload_surfaces_its_message() {
    let payload: ChartPayload =
        serde_json::from_str(r#"{"success": false, "error": "Failed to process data"}"#)
            .expect("failure payload decodes");
    assert_eq!(
        Dataset::from_payload(payload).unwrap_err(),
        "Failed to process data"
    );
}

#[test]
fn loader_reads_a_payload_file_from_disk() {
    let path = std::env::temp_dir().join(format!("flowlens-fixture-{}.json", std::process::id()));
    std::fs::write(&path, FIXTURE).expect("fixture written");

    let payload = futures::executor::block_on(load_payload(path.to_str().expect("utf-8 path")))
        .expect("payload loads");
    assert!(payload.success);
    assert!(payload.data.is_some());

    std::fs::remove_file(&path).ok();
}

#[test]
fn loader_reports_malformed_payloads() {
    let path = std::env::temp_dir().join(format!("flowlens-broken-{}.json", std::process::id()));
    std::fs::write(&path, "{ not json").expect("fixture written");

    let err = futures::executor::block_on(load_payload(path.to_str().expect("utf-8 path")))
        .expect_err("malformed payload fails");
    assert!(err.contains("数据格式错误"), "unexpected error: {err}");

    std::fs::remove_file(&path).ok();
}

#[test]
fn loader_reports_missing_files() {
    let err = futures::executor::block_on(load_payload("/definitely/not/here/chart_data.json"))
        .expect_err("missing file fails");
    assert!(err.contains("读取"), "unexpected error: {err}");
}

//! Payload loading. Web builds fetch over HTTP with a timeout; native builds
//! read the data file from disk.

use crate::core::model::ChartPayload;

/// Data file name, served next to the app (web) or resolved by the shell
/// (desktop).
pub const DATA_SOURCE: &str = "chart_data.json";

/// Upper bound on one fetch attempt.
#[cfg(target_arch = "wasm32")]
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

/// Fetch and decode the chart payload from `source`.
///
/// Transport failures, non-success HTTP statuses, timeouts, and malformed
/// JSON all surface as a displayable message; payload-level validation
/// (`success: false`) is the caller's job.
pub async fn load_payload(source: &str) -> Result<ChartPayload, String> {
    let body = fetch_text(source).await?;
    serde_json::from_str(&body).map_err(|err| format!("数据格式错误: {err}"))
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(source: &str) -> Result<String, String> {
    use futures::future::{select, Either};
    use gloo_timers::future::TimeoutFuture;

    let fetch = Box::pin(fetch_text_inner(source));
    let timeout = TimeoutFuture::new(FETCH_TIMEOUT_MS);
    match select(fetch, timeout).await {
        Either::Left((outcome, _)) => outcome,
        Either::Right(_) => Err(format!("请求超时 ({}秒)", FETCH_TIMEOUT_MS / 1000)),
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text_inner(source: &str) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Response;

    let window = web_sys::window().ok_or("window unavailable")?;
    let response = JsFuture::from(window.fetch_with_str(source))
        .await
        .map_err(|_| "网络请求失败".to_string())?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "Response cast failed".to_string())?;

    if !response.ok() {
        return Err(format!("HTTP error! status: {}", response.status()));
    }

    let text = response.text().map_err(|_| "响应读取失败".to_string())?;
    let text = JsFuture::from(text)
        .await
        .map_err(|_| "响应读取失败".to_string())?;
    text.as_string().ok_or_else(|| "响应不是文本".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(source: &str) -> Result<String, String> {
    std::fs::read_to_string(source).map_err(|err| format!("读取 {source} 失败: {err}"))
}

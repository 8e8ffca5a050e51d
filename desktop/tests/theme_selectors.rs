#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (the summary
  strip, chart cards, and export panel in particular) remain present in the
  unified shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes,
  preventing a silent styling regression in packaged (embedded) desktop
  builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to
  the shared `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS
  relied upon by Rust components (charts, notices, export actions, etc).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Dashboard frame
    ".dashboard__header",
    ".dashboard__tagline",
    ".dashboard__notice",
    ".dashboard__notice--loading",
    ".dashboard__notice--error",
    ".dashboard__charts",
    // Cards
    ".dashboard-card",
    ".dashboard-card__header",
    ".dashboard-card__meta",
    ".dashboard-card__meta--success",
    ".dashboard-card__meta--error",
    ".dashboard-card__empty",
    // Summary strip
    ".dashboard-highlights",
    ".dashboard-highlight",
    ".dashboard-highlight__label",
    ".dashboard-highlight__value",
    ".dashboard-highlight__meta",
    // Bar charts
    ".chart-card--category",
    ".bar-chart__row",
    ".bar-chart__label",
    ".bar-chart__track",
    ".bar-chart__bar--initiated",
    ".bar-chart__bar--completed",
    ".bar-chart__bar--duration",
    ".bar-chart__value",
    ".bar-chart__legend-swatch--initiated",
    ".bar-chart__legend-swatch--completed",
    // Donut charts
    ".donut-chart",
    ".donut__ring",
    ".donut__segment",
    ".donut-chart__legend-item",
    ".donut-chart__legend-swatch",
    ".donut-chart__legend-share",
    // Export panel
    ".dashboard-export__summary",
    ".dashboard-export__actions",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_500,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn notice_block_consistency() {
    // Loading and error notices share the base class; both modifiers must exist.
    let has_loading = THEME_CSS.contains(".dashboard__notice--loading");
    let has_error = THEME_CSS.contains(".dashboard__notice--error");
    assert!(
        has_loading && has_error,
        "Dashboard notice modifiers missing (loading: {has_loading}, error: {has_error})"
    );
}

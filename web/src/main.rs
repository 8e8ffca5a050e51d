use dioxus::prelude::*;

use ui::views::Dashboard;

// Single shared theme, embedded so the deployed bundle has no separate CSS
// fetch to race against the data load.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Dashboard {}
    }
}

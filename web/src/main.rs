use dioxus::prelude::*;

use ui::core::config::AppConfig;
use ui::views::LucidRoot;

const MAIN_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    ui::core::logging::init();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Style { "{MAIN_CSS}" }
        LucidRoot { config: AppConfig::from_build_env() }
    }
}

use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::tokens;
use ui::views::{ShoeDetail, ShoeIndex};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    ShoeIndex {},
    #[route("/shoe/:slug")]
    ShoeDetail { slug: String },
}

const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(class: &'static str, label: &str) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::ShoeIndex {},
        "{label}"
    })
}

fn nav_shoe(class: &'static str, slug: &str, body: Element) -> Element {
    rsx!(Link {
        class: "{class}",
        to: Route::ShoeDetail { slug: slug.to_string() },
        {body}
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        shoe: nav_shoe,
    });

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    let token_css = tokens::css_custom_properties();

    rsx! {
        // Global app resources
        document::Style { "{token_css}" }
        document::Style { "{THEME_CSS_INLINE}" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}

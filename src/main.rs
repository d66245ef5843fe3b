use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod consent;
mod contact;
mod i18n;
mod reveal;
mod storage;

mod components {
    pub mod about;
    pub mod benefits;
    pub mod contact_form;
    pub mod cookie_consent;
    pub mod faq;
    pub mod floating_buttons;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod partners;
    pub mod products;
    pub mod showcase;
    pub mod testimonials;
    pub mod why_us;
}
mod pages {
    pub mod landing;
    pub mod privacy;
}

use components::{cookie_consent::CookieConsent, floating_buttons::FloatingButtons, footer::Footer, header::Header};
use i18n::{LanguageContext, LanguageStore, NavigatorLocale};
use pages::{landing::Landing, privacy::PrivacyPage};
use storage::BrowserStorage;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::Privacy => {
            info!("Rendering privacy policy");
            html! { <PrivacyPage /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component]
fn App() -> Html {
    let language = use_reducer_eq(|| LanguageStore::init(Rc::new(BrowserStorage), &NavigatorLocale));

    html! {
        <ContextProvider<LanguageContext> context={language}>
            <BrowserRouter>
                <style>{ GLOBAL_CSS }</style>
                <Header />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
                <FloatingButtons />
                <CookieConsent />
            </BrowserRouter>
        </ContextProvider<LanguageContext>>
    }
}

const GLOBAL_CSS: &str = r#"
    :root {
        --primary: #37b6ff;
        --primary-dark: #1e90d6;
        --bg-dark: #0b0f14;
        --bg-card: #121820;
        --bg-elevated: #18202a;
        --text-primary: #f4f7fa;
        --text-secondary: #a9b4c0;
        --text-muted: #6b7785;
        --border-light: rgba(255, 255, 255, 0.08);
        --radius-md: 12px;
        --radius-lg: 20px;
        --transition-fast: 0.15s ease;
        --transition-base: 0.3s ease;
    }
    * { box-sizing: border-box; }
    html { scroll-behavior: smooth; }
    body {
        margin: 0;
        background: var(--bg-dark);
        color: var(--text-primary);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        line-height: 1.6;
    }
    a { color: inherit; text-decoration: none; }
    main { min-height: 100vh; }
    .container { max-width: 1280px; margin: 0 auto; padding: 0 1.5rem; }
    .section { padding: 6rem 0; }
    .section-title { font-size: 2.5rem; margin: 0 0 1.5rem; }
    .text-center { text-align: center; }
    .card {
        background: var(--bg-card);
        border: 1px solid var(--border-light);
        border-radius: var(--radius-lg);
        padding: 2rem;
        transition: border-color var(--transition-base);
    }
    .card:hover { border-color: var(--primary); }
    .glass {
        background: rgba(24, 32, 42, 0.7);
        backdrop-filter: blur(12px);
        border: 1px solid var(--border-light);
    }
    .btn {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.875rem 1.75rem;
        border-radius: var(--radius-md);
        font-weight: 600;
        font-size: 1rem;
        cursor: pointer;
        border: 1px solid transparent;
        transition: all var(--transition-fast);
    }
    .btn-primary { background: var(--primary); color: #001220; }
    .btn-primary:hover { background: var(--primary-dark); }
    .btn-primary:disabled { opacity: 0.7; cursor: default; }
    .btn-outline { border-color: var(--primary); color: var(--primary); background: transparent; }
    .btn-outline:hover { background: rgba(55, 182, 255, 0.1); }
"#;

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

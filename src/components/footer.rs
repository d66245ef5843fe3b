use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::MAIN_SITE_URL;
use crate::i18n::use_language;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let language = use_language();
    let t = &language.content().footer;
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <style>{ FOOTER_CSS }</style>
            <div class="container footer-inner">
                <div class="footer-brand">
                    <span class="logo-text">{"HIBORG"}</span>
                    <p>{ format!("© {} {}. {}", year, t.company, t.rights) }</p>
                </div>
                <div class="footer-links">
                    <a href={MAIN_SITE_URL} target="_blank" rel="noopener">{ t.main_site }</a>
                    <Link<Route> to={Route::Privacy}>{ t.privacy }</Link<Route>>
                </div>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .footer {
        padding: 2.5rem 0;
        border-top: 1px solid var(--border-light);
        background: var(--bg-card);
    }
    .footer-inner { display: flex; align-items: center; justify-content: space-between; gap: 2rem; }
    .footer-brand p { margin: 0.25rem 0 0; color: var(--text-muted); font-size: 0.875rem; }
    .footer-links { display: flex; gap: 1.5rem; }
    .footer-links a { color: var(--text-secondary); }
    .footer-links a:hover { color: var(--primary); }
    @media (max-width: 640px) {
        .footer-inner { flex-direction: column; text-align: center; }
    }
"#;

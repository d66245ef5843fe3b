use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{use_language, PolicySection};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct PolicyBodyProps {
    pub sections: &'static [PolicySection],
}

/// The policy text itself, shared by this page and the cookie banner's modal.
#[function_component(PolicyBody)]
pub fn policy_body(props: &PolicyBodyProps) -> Html {
    html! {
        <>
            { for props.sections.iter().map(|section| html! {
                <section>
                    <h3>{ section.heading }</h3>
                    <p>{ section.body }</p>
                    if !section.bullets.is_empty() {
                        <ul>
                            { for section.bullets.iter().map(|bullet| html! { <li>{ *bullet }</li> }) }
                        </ul>
                    }
                </section>
            }) }
        </>
    }
}

#[function_component(PrivacyPage)]
pub fn privacy_page() -> Html {
    let language = use_language();
    let t = language.content();

    use_effect_with_deps(
        |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="legal-content">
            <style>{ PRIVACY_CSS }</style>
            <div class="container">
                <h1>{ t.cookie.policy_title }</h1>
                <PolicyBody sections={t.cookie.policy} />
                <div class="legal-links">
                    <Link<Route> to={Route::Home}>{ t.footer.company }</Link<Route>>
                </div>
            </div>
        </div>
    }
}

const PRIVACY_CSS: &str = r#"
    .legal-content {
        min-height: 100vh;
        padding: 8rem 0 4rem;
    }
    .legal-content .container { max-width: 820px; }
    .legal-content h1 {
        font-size: 2rem;
        background: linear-gradient(45deg, #fff, var(--primary));
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        margin-bottom: 2.5rem;
    }
    .legal-content section {
        background: var(--bg-card);
        border: 1px solid var(--border-light);
        border-radius: var(--radius-md);
        padding: 1.5rem 2rem;
        margin-bottom: 1.25rem;
    }
    .legal-content h3 { color: var(--primary); margin: 0 0 0.75rem; }
    .legal-content p, .legal-content li { color: var(--text-secondary); line-height: 1.6; }
    .legal-content ul { padding-left: 1.25rem; margin: 0.5rem 0 0; }
    .legal-links { margin-top: 2rem; text-align: center; }
    .legal-links a { color: var(--primary); }
"#;

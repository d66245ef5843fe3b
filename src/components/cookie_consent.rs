use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::BANNER_SHOW_DELAY_MS;
use crate::consent::{read_consent, record_consent, ConsentChoice};
use crate::i18n::use_language;
use crate::pages::privacy::PolicyBody;
use crate::storage::BrowserStorage;

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let language = use_language();
    let t = &language.content().cookie;
    let visible = use_state(|| false);
    let show_policy = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = match read_consent(&BrowserStorage) {
                    Some(choice) => {
                        debug!("Cookie consent already given: {}", choice.as_str());
                        None
                    }
                    None => Some(Timeout::new(BANNER_SHOW_DELAY_MS, move || visible.set(true))),
                };
                move || drop(timeout)
            },
            (),
        );
    }

    let answer = |choice: ConsentChoice| {
        let visible = visible.clone();
        let show_policy = show_policy.clone();
        Callback::from(move |_: MouseEvent| {
            record_consent(&BrowserStorage, choice);
            info!("Cookie consent {}", choice.as_str());
            visible.set(false);
            show_policy.set(false);
        })
    };
    let on_accept = answer(ConsentChoice::Accepted);
    let on_decline = answer(ConsentChoice::Declined);

    let open_policy = {
        let show_policy = show_policy.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            show_policy.set(true);
        })
    };
    let close_policy = {
        let show_policy = show_policy.clone();
        Callback::from(move |_: MouseEvent| show_policy.set(false))
    };

    if !*visible {
        return html! {};
    }

    html! {
        <>
            <style>{ COOKIE_CSS }</style>
            <div class="cookie-banner glass">
                <div class="container cookie-inner">
                    <p class="cookie-text">
                        { t.text }{" "}
                        <a href="#" class="cookie-link" onclick={open_policy}>{ t.policy_link }</a>
                    </p>
                    <div class="cookie-actions">
                        <button class="btn btn-outline" onclick={on_decline.clone()}>{ t.decline }</button>
                        <button class="btn btn-primary" onclick={on_accept.clone()}>{ t.accept }</button>
                    </div>
                </div>
            </div>

            if *show_policy {
                <div class="cookie-modal-overlay" onclick={close_policy.clone()}>
                    <div class="cookie-modal" onclick={|e: MouseEvent| e.stop_propagation()}>
                        <button class="cookie-modal-close" onclick={close_policy} aria-label={t.close}>
                            {"×"}
                        </button>
                        <h2>{ t.policy_title }</h2>
                        <div class="cookie-modal-body">
                            <PolicyBody sections={t.policy} />
                        </div>
                        <div class="cookie-actions">
                            <button class="btn btn-outline" onclick={on_decline}>{ t.decline }</button>
                            <button class="btn btn-primary" onclick={on_accept}>{ t.accept }</button>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}

const COOKIE_CSS: &str = r#"
    .cookie-banner {
        position: fixed;
        left: 0;
        right: 0;
        bottom: 0;
        z-index: 900;
        padding: 1.25rem 0;
        border-top: 1px solid var(--border-light);
        animation: slide-up 0.4s ease-out;
    }
    .cookie-inner { display: flex; align-items: center; justify-content: space-between; gap: 2rem; }
    .cookie-text { margin: 0; color: var(--text-secondary); font-size: 0.925rem; }
    .cookie-link { color: var(--primary); text-decoration: underline; }
    .cookie-actions { display: flex; gap: 0.75rem; flex-shrink: 0; }
    .cookie-modal-overlay {
        position: fixed;
        inset: 0;
        z-index: 1000;
        background: rgba(0, 0, 0, 0.7);
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1.5rem;
    }
    .cookie-modal {
        position: relative;
        max-width: 720px;
        max-height: 85vh;
        overflow-y: auto;
        background: var(--bg-elevated);
        border: 1px solid var(--border-light);
        border-radius: var(--radius-lg);
        padding: 2.5rem 2rem 2rem;
    }
    .cookie-modal h2 { margin-top: 0; }
    .cookie-modal h3 { color: var(--primary); font-size: 1rem; }
    .cookie-modal p, .cookie-modal li { color: var(--text-secondary); line-height: 1.6; }
    .cookie-modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        background: none;
        border: none;
        color: var(--text-secondary);
        font-size: 1.75rem;
        cursor: pointer;
    }
    .cookie-modal .cookie-actions { justify-content: flex-end; margin-top: 1.5rem; }
    @keyframes slide-up {
        from { transform: translateY(100%); }
        to { transform: translateY(0); }
    }
    @media (max-width: 768px) {
        .cookie-inner { flex-direction: column; text-align: center; gap: 1rem; }
    }
"#;

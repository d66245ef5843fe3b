use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_bool_toggle;

use crate::config::{PHONE_HREF, WHATSAPP_URL};
use crate::i18n::use_language;

#[function_component(FloatingButtons)]
pub fn floating_buttons() -> Html {
    let language = use_language();
    let t = &language.content().floating;
    let expanded = use_bool_toggle(false);

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.toggle())
    };

    html! {
        <div class={classes!("floating-buttons", (*expanded).then(|| "expanded"))}>
            <style>{ FLOATING_CSS }</style>
            <div class="floating-actions">
                <a
                    href={WHATSAPP_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="floating-btn whatsapp"
                    aria-label={t.whatsapp}
                    title={t.whatsapp}
                >
                    <svg viewBox="0 0 24 24" fill="currentColor">
                        <path d="M17.47 14.38c-.3-.15-1.76-.87-2.03-.97-.27-.1-.47-.15-.67.15-.2.3-.77.97-.94 1.17-.17.2-.35.22-.64.07-.3-.15-1.26-.46-2.39-1.47-.88-.79-1.48-1.76-1.65-2.06-.17-.3-.02-.46.13-.61.13-.13.3-.35.45-.52.15-.17.2-.3.3-.5.1-.2.05-.37-.02-.52-.08-.15-.67-1.61-.92-2.2-.24-.58-.49-.5-.67-.51h-.57c-.2 0-.52.07-.79.37-.27.3-1.04 1.02-1.04 2.48s1.07 2.88 1.21 3.07c.15.2 2.1 3.2 5.08 4.49.71.31 1.26.49 1.7.63.71.23 1.36.19 1.87.12.57-.09 1.76-.72 2.01-1.41.25-.7.25-1.29.17-1.41-.07-.13-.27-.2-.57-.35zM12.05 21.79h-.01a9.87 9.87 0 0 1-5.03-1.38l-.36-.21-3.74.98 1-3.65-.24-.37a9.86 9.86 0 0 1-1.51-5.26c0-5.45 4.44-9.88 9.89-9.88 2.64 0 5.12 1.03 6.99 2.9a9.83 9.83 0 0 1 2.89 6.99c0 5.45-4.44 9.88-9.88 9.88z"/>
                    </svg>
                </a>
                <a href={PHONE_HREF} class="floating-btn phone" aria-label={t.call} title={t.call}>
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"/>
                    </svg>
                </a>
            </div>
            <button
                class="floating-btn main-btn"
                onclick={toggle}
                aria-expanded={(*expanded).to_string()}
                aria-label={t.toggle}
            >
                <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>
                </svg>
            </button>
        </div>
    }
}

const FLOATING_CSS: &str = r#"
    .floating-buttons {
        position: fixed;
        right: 1.5rem;
        bottom: 1.5rem;
        z-index: 800;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.75rem;
    }
    .floating-actions {
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        opacity: 0;
        transform: translateY(20px);
        pointer-events: none;
        transition: all var(--transition-base);
    }
    .floating-buttons.expanded .floating-actions {
        opacity: 1;
        transform: translateY(0);
        pointer-events: auto;
    }
    .floating-btn {
        width: 56px;
        height: 56px;
        border-radius: 50%;
        border: none;
        display: flex;
        align-items: center;
        justify-content: center;
        cursor: pointer;
        color: #fff;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.35);
        transition: transform var(--transition-fast);
    }
    .floating-btn:hover { transform: scale(1.08); }
    .floating-btn svg { width: 26px; height: 26px; }
    .floating-btn.whatsapp { background: #25d366; }
    .floating-btn.phone { background: var(--primary-dark); }
    .floating-btn.main-btn { background: var(--primary); color: #001220; }
"#;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::use_bool_toggle;

use crate::i18n::{use_language, Language, LanguageAction};

#[function_component(Header)]
pub fn header() -> Html {
    let language = use_language();
    let t = language.content();
    let menu_open = use_bool_toggle(false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let window = window.clone();
                        move || {
                            if let Ok(scroll_y) = window.scroll_y() {
                                is_scrolled.set(scroll_y > 50.0);
                            }
                        }
                    });
                    let _ = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let toggle_language = {
        let language = language.clone();
        Callback::from(move |_: MouseEvent| language.dispatch(LanguageAction::Toggle))
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.toggle())
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let pick_language = |lang: Language| {
        let language = language.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            language.dispatch(LanguageAction::Set(lang));
            menu_open.set(false);
        })
    };
    let current = language.current_language();

    let links = [
        ("/#about", t.nav.about),
        ("/#benefits", t.nav.benefits),
        ("/#products", t.nav.products),
        ("/#why-us", t.nav.why_us),
        ("/#faq", t.nav.faq),
        ("/#contact", t.nav.contact),
    ];

    html! {
        <header class={classes!("header", "glass", (*is_scrolled).then(|| "scrolled"))}>
            <style>{ HEADER_CSS }</style>
            <div class="container header-inner">
                <a href="/" class="logo">
                    <span class="logo-text">{"HIBORG"}</span>
                    <span class="logo-pro">{"PRO"}</span>
                </a>

                <nav class={classes!("nav", (*menu_open).then(|| "nav-open"))}>
                    { for links.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{ *label }</a>
                    }) }
                    <div class="nav-langs">
                        { for Language::ALL.iter().map(|&lang| html! {
                            <button
                                class={classes!("nav-lang", (lang == current).then(|| "active"))}
                                onclick={pick_language(lang)}
                            >
                                { lang.code().to_uppercase() }
                            </button>
                        }) }
                    </div>
                </nav>

                <div class="header-actions">
                    <button class="lang-switcher" onclick={toggle_language}>
                        { language.current_language().opposite().code().to_uppercase() }
                    </button>
                    <button
                        class="mobile-toggle"
                        onclick={toggle_menu}
                        aria-expanded={(*menu_open).to_string()}
                        aria-label={t.nav.toggle_menu}
                    >
                        <span class={classes!("hamburger", (*menu_open).then(|| "active"))}></span>
                    </button>
                </div>
            </div>
        </header>
    }
}

const HEADER_CSS: &str = r#"
    .header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        padding: 1rem 0;
        border-width: 0 0 1px 0;
        transition: all var(--transition-base);
    }
    .header.scrolled { padding: 0.5rem 0; }
    .header-inner {
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .logo { display: flex; align-items: center; gap: 0.5rem; }
    .logo-text {
        font-size: 1.5rem;
        font-weight: 700;
        color: var(--primary);
        letter-spacing: 0.1em;
    }
    .logo-pro {
        font-size: 0.75rem;
        font-weight: 700;
        padding: 0.125rem 0.5rem;
        border: 1px solid var(--primary);
        border-radius: 4px;
        color: var(--primary);
    }
    .nav { display: flex; gap: 2rem; }
    .nav-link {
        color: var(--text-secondary);
        font-weight: 500;
        transition: color var(--transition-fast);
    }
    .nav-link:hover { color: var(--primary); }
    .header-actions { display: flex; align-items: center; gap: 1rem; }
    .lang-switcher {
        background: transparent;
        border: 1px solid var(--border-light);
        border-radius: 8px;
        color: var(--text-primary);
        padding: 0.375rem 0.75rem;
        font-weight: 600;
        cursor: pointer;
    }
    .nav-langs { display: none; }
    .nav-lang {
        background: transparent;
        border: 1px solid var(--border-light);
        border-radius: 8px;
        color: var(--text-secondary);
        padding: 0.375rem 0.875rem;
        font-weight: 600;
        cursor: pointer;
    }
    .nav-lang.active { border-color: var(--primary); color: var(--primary); }
    .lang-switcher:hover { border-color: var(--primary); color: var(--primary); }
    .mobile-toggle {
        display: none;
        background: transparent;
        border: none;
        width: 32px;
        height: 32px;
        cursor: pointer;
        position: relative;
    }
    .hamburger,
    .hamburger::before,
    .hamburger::after {
        display: block;
        position: absolute;
        width: 24px;
        height: 2px;
        background: var(--text-primary);
        transition: all var(--transition-fast);
    }
    .hamburger { top: 15px; left: 4px; }
    .hamburger::before { content: ''; top: -8px; }
    .hamburger::after { content: ''; top: 8px; }
    .hamburger.active { background: transparent; }
    .hamburger.active::before { top: 0; transform: rotate(45deg); }
    .hamburger.active::after { top: 0; transform: rotate(-45deg); }
    @media (max-width: 968px) {
        .mobile-toggle { display: block; }
        .nav {
            position: fixed;
            top: 64px;
            left: 0;
            right: 0;
            flex-direction: column;
            gap: 0;
            background: var(--bg-elevated);
            max-height: 0;
            overflow: hidden;
            transition: max-height var(--transition-base);
        }
        .nav.nav-open { max-height: 480px; }
        .nav-langs { display: flex; gap: 0.5rem; padding: 1rem 1.5rem; }
        .header-actions .lang-switcher { display: none; }
        .nav-link { padding: 1rem 1.5rem; border-bottom: 1px solid var(--border-light); }
    }
"#;

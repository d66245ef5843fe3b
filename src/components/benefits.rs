use yew::prelude::*;

use crate::i18n::use_language;
use crate::reveal::{AnimationStyle, Reveal};

fn benefit_icon(index: usize) -> Html {
    match index {
        0 => html! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14"/>
                <polyline points="22 4 12 14.01 9 11.01"/>
            </svg>
        },
        1 => html! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>
            </svg>
        },
        2 => html! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <line x1="12" y1="1" x2="12" y2="23"/>
                <path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"/>
            </svg>
        },
        _ => html! {
            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <rect x="3" y="3" width="7" height="7"/>
                <rect x="14" y="3" width="7" height="7"/>
                <rect x="14" y="14" width="7" height="7"/>
                <rect x="3" y="14" width="7" height="7"/>
            </svg>
        },
    }
}

#[function_component(Benefits)]
pub fn benefits() -> Html {
    let language = use_language();
    let benefits = &language.content().benefits;

    html! {
        <section id="benefits" class="section benefits">
            <style>{ BENEFITS_CSS }</style>
            <div class="container">
                <Reveal>
                    <h2 class="section-title text-center">{ benefits.title }</h2>
                </Reveal>
                <div class="benefits-grid">
                    { for benefits.items.iter().enumerate().map(|(i, item)| html! {
                        <Reveal
                            class="benefit-card card"
                            animation={AnimationStyle::ScaleIn}
                            delay_ms={i as u32 * 100}
                        >
                            <div class="benefit-icon">{ benefit_icon(i) }</div>
                            <h3>{ item.title }</h3>
                            <p>{ item.description }</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

const BENEFITS_CSS: &str = r#"
    .benefits-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1.5rem;
        margin-top: 3rem;
    }
    .benefit-card { text-align: center; }
    .benefit-icon {
        width: 64px;
        height: 64px;
        margin: 0 auto 1.5rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 50%;
        background: rgba(55, 182, 255, 0.1);
        color: var(--primary);
    }
    .benefit-icon svg { width: 32px; height: 32px; }
    .benefit-card h3 { margin: 0 0 0.5rem; font-size: 1.125rem; }
    .benefit-card p { margin: 0; color: var(--text-secondary); }
    @media (max-width: 968px) { .benefits-grid { grid-template-columns: repeat(2, 1fr); } }
    @media (max-width: 640px) { .benefits-grid { grid-template-columns: 1fr; } }
"#;

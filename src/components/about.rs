use yew::prelude::*;

use crate::i18n::{use_language, Card};
use crate::reveal::{AnimationStyle, Reveal};

fn value_card(card: &Card, icon: Html, delay_ms: u32) -> Html {
    html! {
        <Reveal class="value-card card" animation={AnimationStyle::FadeLeft} delay_ms={delay_ms}>
            <div class="value-icon">{ icon }</div>
            <h3>{ card.title }</h3>
            <p>{ card.description }</p>
        </Reveal>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let language = use_language();
    let about = &language.content().about;

    html! {
        <section id="about" class="section about">
            <style>{ ABOUT_CSS }</style>
            <div class="container about-grid">
                <Reveal class="about-content" animation={AnimationStyle::FadeRight}>
                    <h2 class="section-title">{ about.title }</h2>
                    <p class="about-description">{ about.description }</p>
                    <p class="about-mission">{ about.mission }</p>
                </Reveal>
                <div class="about-values">
                    { value_card(&about.values.quality, html! {
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"/>
                        </svg>
                    }, 0) }
                    { value_card(&about.values.reliability, html! {
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>
                        </svg>
                    }, 100) }
                    { value_card(&about.values.affordability, html! {
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <circle cx="12" cy="12" r="10"/>
                            <path d="M12 6v6l4 2"/>
                        </svg>
                    }, 200) }
                </div>
            </div>
        </section>
    }
}

const ABOUT_CSS: &str = r#"
    .about { background: var(--bg-card); }
    .about-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
        align-items: center;
    }
    .about-description { color: var(--text-secondary); font-size: 1.125rem; }
    .about-mission {
        color: var(--primary);
        font-style: italic;
        padding-left: 1rem;
        border-left: 3px solid var(--primary);
    }
    .about-values { display: flex; flex-direction: column; gap: 1rem; }
    .value-card { display: grid; grid-template-columns: 48px 1fr; column-gap: 1.25rem; }
    .value-card h3 { margin: 0; }
    .value-card p { grid-column: 2; margin: 0.25rem 0 0; color: var(--text-secondary); }
    .value-icon { grid-row: span 2; color: var(--primary); }
    .value-icon svg { width: 40px; height: 40px; }
    @media (max-width: 968px) {
        .about-grid { grid-template-columns: 1fr; gap: 3rem; }
    }
"#;

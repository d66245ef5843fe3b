use yew::prelude::*;

use crate::i18n::use_language;
use crate::reveal::Reveal;

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    let language = use_language();
    let why_us = &language.content().why_us;

    html! {
        <section id="why-us" class="section why-us">
            <style>{ WHY_US_CSS }</style>
            <div class="container">
                <Reveal>
                    <h2 class="section-title text-center">{ why_us.title }</h2>
                </Reveal>
                <div class="reasons-grid">
                    { for why_us.reasons.iter().enumerate().map(|(i, reason)| html! {
                        <Reveal class="reason-card" delay_ms={i as u32 * 150}>
                            <div class="reason-number">{ format!("{:02}", i + 1) }</div>
                            <div class="reason-content">
                                <h3>{ reason.title }</h3>
                                <p>{ reason.description }</p>
                            </div>
                            <div class="reason-line"></div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

const WHY_US_CSS: &str = r#"
    .why-us .section-title { margin-bottom: 4rem; }
    .reasons-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 2rem;
    }
    .reason-card {
        position: relative;
        display: flex;
        gap: 1.5rem;
        padding: 2rem;
        border-radius: var(--radius-lg);
        background: var(--bg-card);
        overflow: hidden;
    }
    .reason-number {
        font-size: 3rem;
        font-weight: 800;
        line-height: 1;
        color: transparent;
        -webkit-text-stroke: 1px var(--primary);
    }
    .reason-content h3 { margin: 0 0 0.5rem; }
    .reason-content p { margin: 0; color: var(--text-secondary); }
    .reason-line {
        position: absolute;
        left: 0;
        bottom: 0;
        width: 0;
        height: 3px;
        background: var(--primary);
        transition: width var(--transition-base);
    }
    .reason-card:hover .reason-line { width: 100%; }
    @media (max-width: 768px) { .reasons-grid { grid-template-columns: 1fr; } }
"#;

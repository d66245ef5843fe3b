use yew::prelude::*;

use crate::config::MAIN_SITE_URL;
use crate::i18n::use_language;
use crate::reveal::{AnimationStyle, Reveal};

const PARTNER_NAMES: [&str; 4] = ["Hoegert Technik", "Ремоколор", "ERA", "GAZ"];

#[function_component(Partners)]
pub fn partners() -> Html {
    let language = use_language();
    let partners = &language.content().partners;

    html! {
        <section id="partners" class="section partners">
            <style>{ PARTNERS_CSS }</style>
            <div class="container">
                <h2 class="section-title text-center">{ partners.title }</h2>
                <p class="partners-description text-center">{ partners.description }</p>

                <div class="partners-logos">
                    { for PARTNER_NAMES.iter().enumerate().map(|(i, name)| html! {
                        <Reveal class="partner-logo" animation={AnimationStyle::FadeIn} delay_ms={i as u32 * 100}>
                            <span>{ *name }</span>
                        </Reveal>
                    }) }
                </div>

                <Reveal class="where-to-buy glass" threshold={0.3}>
                    <div class="wtb-content">
                        <h3>{ partners.where_to_buy }</h3>
                        <p>{ partners.where_to_buy_desc }</p>
                    </div>
                    <a href={MAIN_SITE_URL} target="_blank" rel="noopener" class="btn btn-primary">
                        { partners.main_site }
                    </a>
                </Reveal>
            </div>
        </section>
    }
}

const PARTNERS_CSS: &str = r#"
    .partners-description { color: var(--text-secondary); margin-bottom: 3rem; }
    .partners-logos {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 1.5rem;
        margin-bottom: 3rem;
    }
    .partner-logo {
        display: flex;
        align-items: center;
        justify-content: center;
        height: 100px;
        border-radius: var(--radius-md);
        border: 1px solid var(--border-light);
        background: var(--bg-card);
        font-size: 1.25rem;
        font-weight: 700;
        color: var(--text-secondary);
    }
    .where-to-buy {
        display: flex;
        align-items: center;
        justify-content: space-between;
        gap: 2rem;
        padding: 2rem;
        border-radius: var(--radius-lg);
    }
    .wtb-content h3 { margin: 0 0 0.5rem; color: var(--primary); }
    .wtb-content p { margin: 0; color: var(--text-secondary); }
    @media (max-width: 768px) {
        .partners-logos { grid-template-columns: repeat(2, 1fr); }
        .where-to-buy { flex-direction: column; text-align: center; }
    }
"#;

use yew::prelude::*;

use crate::config::MAIN_SITE_URL;
use crate::i18n::use_language;
use crate::reveal::{AnimationStyle, Reveal};

#[function_component(Products)]
pub fn products() -> Html {
    let language = use_language();
    let products = &language.content().products;

    html! {
        <section id="products" class="section products">
            <style>{ PRODUCTS_CSS }</style>
            <div class="container">
                <Reveal class="products-header text-center">
                    <h2 class="section-title">{ products.title }</h2>
                    <p class="products-description">{ products.description }</p>
                </Reveal>

                <div class="products-grid">
                    { for products.categories.iter().enumerate().map(|(i, category)| html! {
                        <Reveal
                            class="product-card card"
                            animation={AnimationStyle::FadeIn}
                            delay_ms={i as u32 * 100}
                        >
                            <span class="product-count">{ category.count }</span>
                            <h3 class="product-name">{ category.name }</h3>
                        </Reveal>
                    }) }
                </div>

                <div class="products-cta text-center">
                    <a href={MAIN_SITE_URL} target="_blank" rel="noopener" class="btn btn-primary">
                        { products.cta }
                    </a>
                </div>
            </div>
        </section>
    }
}

const PRODUCTS_CSS: &str = r#"
    .products { background: var(--bg-card); }
    .products-description { color: var(--text-secondary); margin-bottom: 3rem; }
    .products-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
    }
    .product-card { background: var(--bg-elevated); }
    .product-count { font-size: 2rem; font-weight: 700; color: var(--primary); }
    .product-name { margin: 0.5rem 0 0; font-size: 1.125rem; }
    .products-cta { margin-top: 3rem; }
    @media (max-width: 968px) { .products-grid { grid-template-columns: repeat(2, 1fr); } }
    @media (max-width: 640px) { .products-grid { grid-template-columns: 1fr; } }
"#;

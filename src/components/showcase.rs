use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::carousel::Carousel;
use crate::config::SHOWCASE_ROTATE_INTERVAL_MS;
use crate::i18n::use_language;

pub enum Slide {
    Next,
    Prev,
    GoTo(usize),
}

impl Reducible for Carousel {
    type Action = Slide;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(match action {
            Slide::Next => self.next(),
            Slide::Prev => self.prev(),
            Slide::GoTo(index) => self.go_to(index),
        })
    }
}

#[function_component(Showcase)]
pub fn showcase() -> Html {
    let language = use_language();
    let showcase = &language.content().showcase;
    let carousel = use_reducer_eq(|| Carousel::new(showcase.items.len()));
    // Bumped on manual navigation so the autoplay timer starts over.
    let restarts = use_state(|| 0u32);

    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(SHOWCASE_ROTATE_INTERVAL_MS, move || {
                    carousel.dispatch(Slide::Next);
                });
                move || drop(interval)
            },
            *restarts,
        );
    }

    let on_slide = {
        let carousel = carousel.clone();
        let restarts = restarts.clone();
        move |slide: Slide| {
            carousel.dispatch(slide);
            restarts.set(restarts.wrapping_add(1));
        }
    };
    let on_prev = {
        let on_slide = on_slide.clone();
        Callback::from(move |_: MouseEvent| on_slide(Slide::Prev))
    };
    let on_next = {
        let on_slide = on_slide.clone();
        Callback::from(move |_: MouseEvent| on_slide(Slide::Next))
    };
    let current = carousel.index();

    let slides = carousel
        .visible()
        .map(|indices| {
            indices
                .iter()
                .zip(["prev", "active", "next"])
                .map(|(&index, position)| {
                    let item = &showcase.items[index];
                    html! {
                        <div key={format!("{}-{}", position, index)} class={classes!("carousel-item", position)}>
                            <div class="product-card">
                                <div class="product-image-wrapper">
                                    <div class="product-glow"></div>
                                    <img src={item.image} alt={item.name} class="product-image" />
                                </div>
                                <h3 class="product-name">{ item.name }</h3>
                            </div>
                        </div>
                    }
                })
                .collect::<Html>()
        })
        .unwrap_or_default();

    html! {
        <section class="showcase">
            <style>{ SHOWCASE_CSS }</style>
            <div class="container">
                <div class="showcase-header">
                    <h2 class="showcase-title">{ showcase.title }</h2>
                    <p class="showcase-subtitle">{ showcase.subtitle }</p>
                </div>

                <div class="carousel-container">
                    <button class="carousel-btn prev" onclick={on_prev} aria-label={showcase.previous}>
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <polyline points="15 18 9 12 15 6"/>
                        </svg>
                    </button>
                    <div class="carousel-track">{ slides }</div>
                    <button class="carousel-btn next" onclick={on_next} aria-label={showcase.next}>
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                            <polyline points="9 18 15 12 9 6"/>
                        </svg>
                    </button>
                </div>

                <div class="carousel-dots">
                    { for (0..carousel.len()).map(|i| {
                        let on_slide = on_slide.clone();
                        html! {
                            <button
                                class={classes!("dot", (i == current).then(|| "active"))}
                                onclick={Callback::from(move |_: MouseEvent| on_slide(Slide::GoTo(i)))}
                                aria-label={format!("{} {}", showcase.go_to_slide, i + 1)}
                            ></button>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

const SHOWCASE_CSS: &str = r#"
    .showcase {
        padding: 6rem 0;
        background: linear-gradient(180deg, var(--bg-dark) 0%, var(--bg-card) 50%, var(--bg-dark) 100%);
        overflow: hidden;
    }
    .showcase-header { text-align: center; margin-bottom: 3rem; }
    .showcase-title { font-size: 2.5rem; margin: 0 0 0.5rem; }
    .showcase-subtitle { color: var(--text-secondary); margin: 0; }
    .carousel-container { display: flex; align-items: center; gap: 1rem; }
    .carousel-track {
        flex: 1;
        display: grid;
        grid-template-columns: 1fr 1.4fr 1fr;
        gap: 1.5rem;
        align-items: center;
    }
    .carousel-item { transition: all var(--transition-base); opacity: 0.4; transform: scale(0.85); }
    .carousel-item.active { opacity: 1; transform: scale(1); }
    .product-card { text-align: center; }
    .product-image-wrapper { position: relative; aspect-ratio: 1; }
    .product-glow {
        position: absolute;
        inset: 15%;
        border-radius: 50%;
        background: radial-gradient(circle, rgba(55, 182, 255, 0.25) 0%, transparent 70%);
        animation: pulse-glow 3s ease-in-out infinite;
    }
    .product-image {
        position: relative;
        width: 100%;
        height: 100%;
        object-fit: contain;
        animation: float 4s ease-in-out infinite;
    }
    .product-name { margin: 1rem 0 0; font-size: 1.125rem; }
    .carousel-btn {
        flex-shrink: 0;
        width: 48px;
        height: 48px;
        border-radius: 50%;
        border: 1px solid var(--border-light);
        background: var(--bg-elevated);
        color: var(--text-primary);
        cursor: pointer;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .carousel-btn:hover { border-color: var(--primary); color: var(--primary); }
    .carousel-btn svg { width: 24px; height: 24px; }
    .carousel-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 2rem; }
    .dot {
        width: 10px;
        height: 10px;
        border-radius: 50%;
        border: none;
        background: var(--border-light);
        cursor: pointer;
        transition: all var(--transition-fast);
    }
    .dot.active { background: var(--primary); width: 28px; border-radius: 5px; }
    @keyframes pulse-glow {
        0%, 100% { opacity: 0.5; }
        50% { opacity: 1; }
    }
    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-10px); }
    }
    @media (max-width: 768px) {
        .carousel-track { grid-template-columns: 1fr; }
        .carousel-item:not(.active) { display: none; }
    }
"#;

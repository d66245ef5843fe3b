use yew::prelude::*;

use crate::i18n::use_language;
use crate::reveal::Reveal;

const STAR_PATH: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let language = use_language();
    let testimonials = &language.content().testimonials;

    html! {
        <section id="testimonials" class="section testimonials">
            <style>{ TESTIMONIALS_CSS }</style>
            <div class="container">
                <Reveal class="testimonials-header">
                    <h2 class="section-title">{ testimonials.title }</h2>
                    <p class="testimonials-subtitle">{ testimonials.subtitle }</p>
                </Reveal>

                <div class="testimonials-grid">
                    { for testimonials.items.iter().enumerate().map(|(i, t)| html! {
                        <Reveal class="testimonial-card card" delay_ms={i as u32 * 150}>
                            <div class="testimonial-header">
                                <div class="avatar">{ t.avatar }</div>
                                <div class="author-info">
                                    <h4 class="author-name">{ t.name }</h4>
                                    <span class="author-role">{ t.role }</span>
                                </div>
                            </div>
                            <div class="rating">
                                { for (1..=5u8).map(|star| html! {
                                    <svg
                                        class={classes!("star", (star <= t.rating).then(|| "filled"))}
                                        viewBox="0 0 24 24"
                                        fill="currentColor"
                                    >
                                        <path d={STAR_PATH}/>
                                    </svg>
                                }) }
                            </div>
                            <p class="testimonial-text">{ t.text }</p>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

const TESTIMONIALS_CSS: &str = r#"
    .testimonials-header { text-align: center; margin-bottom: 3rem; }
    .testimonials-subtitle { color: var(--text-secondary); }
    .testimonials-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 1.5rem;
    }
    .testimonial-header { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
    .avatar {
        width: 48px;
        height: 48px;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(55, 182, 255, 0.15);
        color: var(--primary);
        font-weight: 700;
    }
    .author-name { margin: 0; }
    .author-role { color: var(--text-muted); font-size: 0.875rem; }
    .rating { display: flex; gap: 0.25rem; margin-bottom: 1rem; }
    .star { width: 18px; height: 18px; color: var(--border-light); }
    .star.filled { color: #ffc107; }
    .testimonial-text { color: var(--text-secondary); margin: 0; }
    @media (max-width: 968px) { .testimonials-grid { grid-template-columns: repeat(2, 1fr); } }
    @media (max-width: 640px) { .testimonials-grid { grid-template-columns: 1fr; } }
"#;

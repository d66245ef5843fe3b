use yew::prelude::*;

use crate::i18n::use_language;

#[function_component(Hero)]
pub fn hero() -> Html {
    let language = use_language();
    let t = language.content();

    html! {
        <section class="hero">
            <style>{ HERO_CSS }</style>
            <div class="hero-bg">
                <img src="/assets/images/hero-bg.jpg" alt="" class="hero-bg-image" />
                <div class="hero-overlay"></div>
            </div>
            <div class="hero-glow"></div>

            <div class="container hero-content">
                <div class="hero-logo animate-fade-in-up">
                    <div class="logo-badge">
                        <span class="logo-text">{ t.hero.title }</span>
                    </div>
                </div>
                <h1 class="hero-title animate-fade-in-up" style="animation-delay: 0.1s">
                    { t.hero.subtitle }
                </h1>
                <p class="hero-description animate-fade-in-up" style="animation-delay: 0.2s">
                    { t.hero.description }
                </p>
                <div class="hero-actions animate-fade-in-up" style="animation-delay: 0.3s">
                    <a href="#products" class="btn btn-primary">{ t.hero.cta }</a>
                    <a href="#contact" class="btn btn-outline">{ t.hero.cta_secondary }</a>
                </div>
                <div class="hero-stats animate-fade-in-up" style="animation-delay: 0.4s">
                    <div class="stat">
                        <span class="stat-value">{"500+"}</span>
                        <span class="stat-label">{ t.products.categories.first().map(|c| c.name).unwrap_or_default() }</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value">{"10+"}</span>
                        <span class="stat-label">{ t.hero.years }</span>
                    </div>
                    <div class="stat">
                        <span class="stat-value">{"1000+"}</span>
                        <span class="stat-label">{ t.hero.clients }</span>
                    </div>
                </div>
            </div>

            <div class="hero-scroll">
                <span>{ t.hero.scroll_hint }</span>
                <div class="scroll-indicator"></div>
            </div>
        </section>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        overflow: hidden;
        padding-top: 80px;
    }
    .hero-bg { position: absolute; inset: 0; }
    .hero-bg-image { width: 100%; height: 100%; object-fit: cover; opacity: 0.35; }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(180deg, rgba(11, 15, 20, 0.4) 0%, var(--bg-dark) 100%);
    }
    .hero-glow {
        position: absolute;
        top: 20%;
        left: 50%;
        width: 600px;
        height: 600px;
        transform: translateX(-50%);
        background: radial-gradient(circle, rgba(55, 182, 255, 0.15) 0%, transparent 70%);
        animation: pulse 4s ease-in-out infinite;
    }
    .hero-content { position: relative; text-align: center; }
    .logo-badge {
        display: inline-block;
        padding: 0.75rem 2rem;
        border: 2px solid var(--primary);
        border-radius: var(--radius-md);
        margin-bottom: 2rem;
    }
    .logo-badge .logo-text {
        font-size: 2.5rem;
        font-weight: 800;
        letter-spacing: 0.2em;
        color: var(--primary);
    }
    .hero-title { font-size: 3.5rem; margin: 0 0 1rem; }
    .hero-description {
        font-size: 1.25rem;
        color: var(--text-secondary);
        max-width: 640px;
        margin: 0 auto 2.5rem;
    }
    .hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
    .hero-stats { display: flex; gap: 4rem; justify-content: center; margin-top: 4rem; }
    .stat { display: flex; flex-direction: column; }
    .stat-value { font-size: 2rem; font-weight: 700; color: var(--primary); }
    .stat-label { color: var(--text-muted); font-size: 0.875rem; }
    .hero-scroll {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        color: var(--text-muted);
        font-size: 0.75rem;
    }
    .scroll-indicator {
        width: 2px;
        height: 40px;
        background: linear-gradient(180deg, var(--primary), transparent);
        animation: scroll 1.5s ease-in-out infinite;
    }
    .animate-fade-in-up { opacity: 0; animation: fadeInUp 0.8s ease-out forwards; }
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(30px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes pulse {
        0%, 100% { opacity: 0.6; }
        50% { opacity: 1; }
    }
    @keyframes scroll {
        0% { transform: scaleY(0); transform-origin: top; }
        50% { transform: scaleY(1); transform-origin: top; }
        51% { transform-origin: bottom; }
        100% { transform: scaleY(0); transform-origin: bottom; }
    }
    @media (max-width: 768px) {
        .hero-title { font-size: 2.25rem; }
        .hero-stats { gap: 2rem; }
    }
"#;

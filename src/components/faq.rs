use web_sys::MouseEvent;
use yew::prelude::*;

use crate::i18n::use_language;
use crate::reveal::Reveal;

/// Opens `index`, or closes it if it is already the open item.
fn toggled(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) {
        None
    } else {
        Some(index)
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let language = use_language();
    let faq = &language.content().faq;
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="section faq">
            <style>{ FAQ_CSS }</style>
            <div class="container">
                <Reveal class="faq-header">
                    <h2 class="section-title">{ faq.title }</h2>
                    <p class="faq-subtitle">{ faq.subtitle }</p>
                </Reveal>

                <div class="faq-list">
                    { for faq.items.iter().enumerate().map(|(i, item)| {
                        let is_open = *open == Some(i);
                        let toggle = {
                            let open = open.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                open.set(toggled(*open, i));
                            })
                        };
                        html! {
                            <Reveal
                                class={classes!("faq-item", is_open.then(|| "active"))}
                                delay_ms={i as u32 * 100}
                            >
                                <button class="faq-question" onclick={toggle}>
                                    <span>{ item.question }</span>
                                    <svg
                                        class={classes!("faq-icon", is_open.then(|| "rotated"))}
                                        viewBox="0 0 24 24"
                                        fill="none"
                                        stroke="currentColor"
                                        stroke-width="2"
                                    >
                                        <polyline points="6 9 12 15 18 9"/>
                                    </svg>
                                </button>
                                <div class={classes!("faq-answer", is_open.then(|| "open"))}>
                                    <p>{ item.answer }</p>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

const FAQ_CSS: &str = r#"
    .faq { background: var(--bg-card); }
    .faq-header { text-align: center; margin-bottom: 3rem; }
    .faq-subtitle { color: var(--text-secondary); }
    .faq-list { max-width: 820px; margin: 0 auto; display: flex; flex-direction: column; gap: 1rem; }
    .faq-item {
        border: 1px solid var(--border-light);
        border-radius: var(--radius-md);
        background: var(--bg-elevated);
        overflow: hidden;
    }
    .faq-item.active { border-color: var(--primary); }
    .faq-question {
        width: 100%;
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
        padding: 1.25rem 1.5rem;
        background: transparent;
        border: none;
        color: var(--text-primary);
        font-size: 1rem;
        font-weight: 600;
        text-align: left;
        cursor: pointer;
    }
    .faq-icon { width: 20px; height: 20px; flex-shrink: 0; transition: transform var(--transition-base); }
    .faq-icon.rotated { transform: rotate(180deg); color: var(--primary); }
    .faq-answer { max-height: 0; overflow: hidden; transition: max-height var(--transition-base); }
    .faq-answer.open { max-height: 400px; }
    .faq-answer p { margin: 0; padding: 0 1.5rem 1.25rem; color: var(--text-secondary); line-height: 1.8; }
"#;

#[cfg(test)]
mod tests {
    use super::toggled;

    #[test]
    fn at_most_one_item_open() {
        assert_eq!(toggled(None, 2), Some(2));
        assert_eq!(toggled(Some(2), 4), Some(4));
        assert_eq!(toggled(Some(4), 4), None);
    }
}

use gloo_timers::callback::Timeout;
use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::config::{CONTACT_EMAIL, CONTACT_RESET_DELAY_MS};
use crate::contact::{compose_mailto, ContactForm};
use crate::i18n::use_language;
use crate::reveal::{AnimationStyle, Reveal};

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let language = use_language();
    let t = language.content();
    let form = use_state(ContactForm::default);
    let submitted = use_state(|| false);
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    {
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    reset_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let update = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_input = |update: Callback<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update.emit(input.value());
        })
    };
    let on_name = on_input(update(|f, v| f.name = v));
    let on_email = on_input(update(|f, v| f.email = v));
    let on_phone = on_input(update(|f, v| f.phone = v));
    let on_message = {
        let update = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            update.emit(input.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitted = submitted.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !form.is_complete() {
                return;
            }
            let link = compose_mailto(&form, t);
            match web_sys::window() {
                Some(window) => {
                    if let Err(e) = window.location().set_href(&link) {
                        warn!("Could not open mail client: {:?}", e);
                    }
                }
                None => warn!("No window to open the mail client from"),
            }
            info!("Contact request handed to mail client");
            submitted.set(true);

            let form = form.clone();
            let submitted = submitted.clone();
            // Replacing the handle drops, and so cancels, any earlier reset.
            *reset_timer.borrow_mut() = Some(Timeout::new(CONTACT_RESET_DELAY_MS, move || {
                submitted.set(false);
                form.set(ContactForm::default());
            }));
        })
    };

    html! {
        <section id="contact" class="section contact">
            <style>{ CONTACT_CSS }</style>
            <div class="container contact-grid">
                <Reveal class="contact-form-wrapper" animation={AnimationStyle::FadeRight}>
                    <h2 class="section-title">{ t.contact.title }</h2>
                    <p class="contact-description">{ t.contact.description }</p>

                    <form class="contact-form" {onsubmit}>
                        <input
                            type="text"
                            name="name"
                            class="form-input"
                            required=true
                            placeholder={t.contact.form.name}
                            value={form.name.clone()}
                            oninput={on_name}
                        />
                        <div class="form-row">
                            <input
                                type="email"
                                name="email"
                                class="form-input"
                                required=true
                                placeholder={t.contact.form.email}
                                value={form.email.clone()}
                                oninput={on_email}
                            />
                            <input
                                type="tel"
                                name="phone"
                                class="form-input"
                                placeholder={t.contact.form.phone}
                                value={form.phone.clone()}
                                oninput={on_phone}
                            />
                        </div>
                        <textarea
                            name="message"
                            rows="4"
                            class="form-input"
                            required=true
                            placeholder={t.contact.form.message}
                            value={form.message.clone()}
                            oninput={on_message}
                        />
                        <button type="submit" class="btn btn-primary btn-full" disabled={*submitted}>
                            { if *submitted { t.contact.form.sent } else { t.contact.form.submit } }
                        </button>
                    </form>
                </Reveal>

                <Reveal class="contact-info" animation={AnimationStyle::FadeLeft} delay_ms={150}>
                    <div class="info-card glass">
                        <h3>{ t.contact.info.address }</h3>
                        <p>{ t.contact.info.address_value }</p>
                    </div>
                    <div class="info-card glass">
                        <h3>{ t.contact.info.warehouse }</h3>
                        <p>{ t.contact.info.warehouse_value }</p>
                    </div>
                    <div class="info-card glass">
                        <h3>{ t.contact.info.phones }</h3>
                        <p>
                            <a href="tel:+375173629899">{"(017) 362-98-99"}</a><br/>
                            <a href="tel:+375447247736">{"8 (044) 724-77-36"}</a><br/>
                            <a href="tel:+375295353295">{"8 (029) 535-32-95"}</a>
                        </p>
                    </div>
                    <div class="info-card glass">
                        <h3>{ t.contact.info.email }</h3>
                        <p><a href={format!("mailto:{}", CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a></p>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

const CONTACT_CSS: &str = r#"
    .contact-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 4rem;
    }
    .contact .section-title { margin-bottom: 0.5rem; }
    .contact-description { color: var(--text-secondary); margin-bottom: 2rem; }
    .contact-form { display: flex; flex-direction: column; gap: 1rem; }
    .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
    .form-input {
        width: 100%;
        padding: 1rem 1.25rem;
        background: var(--bg-card);
        border: 1px solid var(--border-light);
        border-radius: var(--radius-md);
        color: var(--text-primary);
        font-size: 1rem;
        font-family: inherit;
        transition: all var(--transition-fast);
        resize: vertical;
    }
    .form-input::placeholder { color: var(--text-muted); }
    .form-input:focus {
        outline: none;
        border-color: var(--primary);
        box-shadow: 0 0 0 3px rgba(55, 182, 255, 0.1);
    }
    textarea.form-input { min-height: 120px; }
    .btn-full { width: 100%; justify-content: center; margin-top: 0.5rem; }
    .contact-info { display: flex; flex-direction: column; gap: 1rem; }
    .info-card { padding: 1.5rem; border-radius: var(--radius-md); }
    .info-card h3 {
        color: var(--primary);
        font-size: 0.875rem;
        text-transform: uppercase;
        letter-spacing: 0.05em;
        margin: 0 0 0.5rem;
    }
    .info-card p { margin: 0; line-height: 1.6; }
    .info-card a:hover { color: var(--primary); }
    @media (max-width: 968px) { .contact-grid { grid-template-columns: 1fr; gap: 3rem; } }
    @media (max-width: 640px) { .form-row { grid-template-columns: 1fr; } }
"#;

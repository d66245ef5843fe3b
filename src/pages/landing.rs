use log::debug;
use yew::prelude::*;

use crate::components::{
    about::About, benefits::Benefits, contact_form::ContactSection, faq::Faq, hero::Hero,
    partners::Partners, products::Products, showcase::Showcase, testimonials::Testimonials,
    why_us::WhyUs,
};

/// Brings the section named by the URL fragment into view. A client-side
/// navigation from another route lands here before the sections exist, so
/// the browser's own fragment scroll never happens.
fn scroll_to_fragment() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let fragment = window.location().hash().unwrap_or_default();
    let id = fragment.trim_start_matches('#');
    if id.is_empty() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
        return;
    }
    if let Some(section) = window.document().and_then(|d| d.get_element_by_id(id)) {
        debug!("Scrolling to #{}", id);
        section.scroll_into_view();
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_effect_with_deps(
        |_| {
            scroll_to_fragment();
            || ()
        },
        (),
    );

    html! {
        <>
            <Hero />
            <About />
            <Benefits />
            <Products />
            <Showcase />
            <WhyUs />
            <Faq />
            <Testimonials />
            <Partners />
            <ContactSection />
        </>
    }
}

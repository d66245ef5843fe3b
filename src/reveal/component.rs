use log::{debug, warn};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::{
    AnimationStyle, IntersectionWatcher, RevealConfig, RevealController, RevealState,
    DEFAULT_THRESHOLD,
};

/// Attaches a reveal to whatever `node` points at once it is mounted, and
/// detaches when the owner unmounts. The config is read on mount only.
#[hook]
pub fn use_reveal(node: NodeRef, config: RevealConfig) {
    use_effect_with_deps(
        move |node: &NodeRef| {
            let mut controller = RevealController::new(config);
            match node.cast::<HtmlElement>() {
                Some(element) => controller.attach(element, &IntersectionWatcher),
                None => warn!("Reveal target was not mounted"),
            }
            move || {
                if controller.state() == Some(RevealState::Hidden) {
                    debug!("Unmounting reveal target that was never revealed");
                }
                controller.detach();
            }
        },
        node,
    );
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub animation: AnimationStyle,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(DEFAULT_THRESHOLD)]
    pub threshold: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    use_reveal(
        node.clone(),
        RevealConfig::new(props.animation)
            .delay_ms(props.delay_ms)
            .threshold(props.threshold),
    );

    html! {
        <div ref={node} id={props.id.clone()} class={props.class.clone()}>
            { for props.children.iter() }
        </div>
    }
}

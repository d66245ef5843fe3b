//! Scroll-triggered reveal.
//!
//! A [`RevealController`] hides its element on attach, watches it through a
//! [`VisibilityWatcher`], and plays a one-shot transition the first time
//! enough of the element is on screen. After that the watch is cancelled;
//! scrolling away never hides the element again.

mod component;
mod config;
mod watch;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

pub use component::Reveal;
pub use config::{AnimationStyle, RevealConfig, DEFAULT_THRESHOLD};
pub use watch::{
    IntersectionWatcher, StyleTarget, VisibilityEvent, VisibilityWatcher, WatchHandle, WatchOptions,
};

use crate::config::REVEAL_ROOT_MARGIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

struct Attachment {
    state: RevealState,
    handle: Option<Box<dyn WatchHandle>>,
}

impl Attachment {
    fn cancel_watch(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            handle.cancel();
        }
    }
}

pub struct RevealController {
    config: RevealConfig,
    attachment: Option<Rc<RefCell<Attachment>>>,
}

impl RevealController {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            attachment: None,
        }
    }

    /// `None` while detached.
    pub fn state(&self) -> Option<RevealState> {
        self.attachment.as_ref().map(|a| a.borrow().state)
    }

    /// Hides `target` and starts watching it. Re-attaching first detaches.
    pub fn attach<T, W>(&mut self, target: T, watcher: &W)
    where
        T: StyleTarget + Clone + 'static,
        W: VisibilityWatcher<T> + ?Sized,
    {
        self.detach();

        for (property, value) in self.config.hidden_styles() {
            target.set_style(property, &value);
        }

        let attachment = Rc::new(RefCell::new(Attachment {
            state: RevealState::Hidden,
            handle: None,
        }));

        let options = WatchOptions {
            threshold: self.config.visibility_threshold(),
            root_margin: REVEAL_ROOT_MARGIN,
        };
        let on_change = reveal_callback(Rc::downgrade(&attachment), target.clone(), self.config);

        match watcher.watch(&target, &options, on_change) {
            Some(handle) => attachment.borrow_mut().handle = Some(handle),
            None => debug!("No visibility watch available, element stays hidden"),
        }
        self.attachment = Some(attachment);
    }

    /// Cancels any live watch. Safe to call in any state, or repeatedly.
    pub fn detach(&mut self) {
        if let Some(attachment) = self.attachment.take() {
            let mut attachment = attachment.borrow_mut();
            attachment.cancel_watch();
            attachment.handle = None;
        }
    }
}

impl Drop for RevealController {
    fn drop(&mut self) {
        self.detach();
    }
}

fn reveal_callback<T>(
    attachment: Weak<RefCell<Attachment>>,
    target: T,
    config: RevealConfig,
) -> Box<dyn FnMut(VisibilityEvent)>
where
    T: StyleTarget + 'static,
{
    Box::new(move |event: VisibilityEvent| {
        let Some(attachment) = attachment.upgrade() else {
            return;
        };
        let mut attachment = attachment.borrow_mut();
        if attachment.state == RevealState::Revealed
            || !event.reaches(config.visibility_threshold())
        {
            return;
        }

        attachment.state = RevealState::Revealed;
        for (property, value) in config.revealed_styles() {
            target.set_style(property, &value);
        }
        attachment.cancel_watch();
        debug!("Revealed element ({:?}, {}ms)", config.style, config.delay_ms);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    #[derive(Clone, Default)]
    struct FakeElement {
        styles: Rc<RefCell<HashMap<String, String>>>,
        writes: Rc<Cell<usize>>,
    }

    impl FakeElement {
        fn style(&self, property: &str) -> Option<String> {
            self.styles.borrow().get(property).cloned()
        }
    }

    impl StyleTarget for FakeElement {
        fn set_style(&self, property: &str, value: &str) {
            self.writes.set(self.writes.get() + 1);
            self.styles
                .borrow_mut()
                .insert(property.to_string(), value.to_string());
        }
    }

    struct FakeWatch {
        options: WatchOptions,
        active: Rc<Cell<bool>>,
        callback: Rc<RefCell<Box<dyn FnMut(VisibilityEvent)>>>,
    }

    /// Records watches and replays events on demand.
    #[derive(Default)]
    struct FakeWatcher {
        watches: RefCell<Vec<FakeWatch>>,
        delivered: Cell<usize>,
        unsupported: bool,
    }

    struct FakeHandle(Rc<Cell<bool>>);

    impl WatchHandle for FakeHandle {
        fn cancel(&mut self) {
            self.0.set(false);
        }
    }

    impl FakeWatcher {
        fn unsupported() -> Self {
            Self {
                unsupported: true,
                ..Self::default()
            }
        }

        /// Delivers an event to the latest watch if it is still live.
        fn fire(&self, ratio: f64) {
            let (active, callback) = {
                let watches = self.watches.borrow();
                let watch = watches.last().expect("nothing is being watched");
                (watch.active.clone(), watch.callback.clone())
            };
            if active.get() {
                self.delivered.set(self.delivered.get() + 1);
                (callback.borrow_mut())(VisibilityEvent {
                    ratio,
                    is_intersecting: ratio > 0.0,
                });
            }
        }

        fn is_active(&self) -> bool {
            self.watches
                .borrow()
                .last()
                .map(|w| w.active.get())
                .unwrap_or(false)
        }
    }

    impl VisibilityWatcher<FakeElement> for FakeWatcher {
        fn watch(
            &self,
            _target: &FakeElement,
            options: &WatchOptions,
            on_change: Box<dyn FnMut(VisibilityEvent)>,
        ) -> Option<Box<dyn WatchHandle>> {
            if self.unsupported {
                return None;
            }
            let active = Rc::new(Cell::new(true));
            self.watches.borrow_mut().push(FakeWatch {
                options: options.clone(),
                active: active.clone(),
                callback: Rc::new(RefCell::new(on_change)),
            });
            Some(Box::new(FakeHandle(active)))
        }
    }

    fn attached(config: RevealConfig) -> (RevealController, FakeElement, FakeWatcher) {
        let element = FakeElement::default();
        let watcher = FakeWatcher::default();
        let mut controller = RevealController::new(config);
        controller.attach(element.clone(), &watcher);
        (controller, element, watcher)
    }

    #[test]
    fn attach_hides_and_watches() {
        let (controller, element, watcher) = attached(RevealConfig::default());
        assert_eq!(controller.state(), Some(RevealState::Hidden));
        assert_eq!(element.style("opacity").as_deref(), Some("0"));
        assert_eq!(element.style("transform").as_deref(), Some("translateY(40px)"));
        let watches = watcher.watches.borrow();
        assert_eq!(watches.len(), 1);
        assert_eq!(watches[0].options.threshold, 0.1);
        assert_eq!(watches[0].options.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let (controller, element, watcher) = attached(RevealConfig::default().threshold(0.5));
        watcher.fire(0.3);
        watcher.fire(0.0);
        assert_eq!(controller.state(), Some(RevealState::Hidden));
        assert_eq!(element.style("opacity").as_deref(), Some("0"));
        assert!(watcher.is_active());
    }

    #[test]
    fn ratio_equal_to_threshold_reveals() {
        let (controller, element, watcher) = attached(RevealConfig::default().threshold(0.5));
        watcher.fire(0.5);
        assert_eq!(controller.state(), Some(RevealState::Revealed));
        assert_eq!(element.style("opacity").as_deref(), Some("1"));
        assert_eq!(element.style("transform").as_deref(), Some("none"));
    }

    #[test]
    fn zero_threshold_still_needs_intersection() {
        let (controller, _element, watcher) = attached(RevealConfig::default().threshold(0.0));
        watcher.fire(0.0);
        assert_eq!(controller.state(), Some(RevealState::Hidden));
        watcher.fire(0.01);
        assert_eq!(controller.state(), Some(RevealState::Revealed));
    }

    #[test]
    fn fade_left_scenario() {
        let config = RevealConfig::new(AnimationStyle::FadeLeft)
            .delay_ms(100)
            .threshold(0.2);
        let (controller, element, watcher) = attached(config);
        assert_eq!(element.style("transform").as_deref(), Some("translateX(40px)"));
        assert_eq!(element.style("transition-delay").as_deref(), Some("100ms"));
        assert_eq!(
            element.style("transition").as_deref(),
            Some("opacity 0.6s ease-out, transform 0.6s ease-out")
        );

        watcher.fire(0.5);
        assert_eq!(controller.state(), Some(RevealState::Revealed));
        assert_eq!(element.style("transform").as_deref(), Some("none"));
        assert_eq!(element.style("transition-delay").as_deref(), Some("100ms"));

        let writes = element.writes.get();
        watcher.fire(0.0);
        assert_eq!(watcher.delivered.get(), 1);
        assert_eq!(element.writes.get(), writes);
        assert_eq!(controller.state(), Some(RevealState::Revealed));
    }

    #[test]
    fn revealed_is_terminal() {
        let (controller, element, watcher) = attached(RevealConfig::default());
        watcher.fire(0.9);
        assert!(!watcher.is_active());
        for ratio in [0.0, 0.05, 1.0, 0.0] {
            watcher.fire(ratio);
            assert_eq!(controller.state(), Some(RevealState::Revealed));
            assert_eq!(element.style("opacity").as_deref(), Some("1"));
        }
        assert_eq!(watcher.delivered.get(), 1);
    }

    #[test]
    fn detach_cancels_hidden_watch() {
        let (mut controller, element, watcher) = attached(RevealConfig::default());
        controller.detach();
        assert!(!watcher.is_active());
        assert_eq!(controller.state(), None);
        watcher.fire(1.0);
        assert_eq!(element.style("opacity").as_deref(), Some("0"));
        controller.detach();
    }

    #[test]
    fn dropping_controller_cancels_watch() {
        let (controller, _element, watcher) = attached(RevealConfig::default());
        drop(controller);
        assert!(!watcher.is_active());
    }

    #[test]
    fn reattach_replaces_previous_watch() {
        let (mut controller, first, watcher) = attached(RevealConfig::default());
        let second = FakeElement::default();
        controller.attach(second.clone(), &watcher);
        assert_eq!(watcher.watches.borrow().len(), 2);
        assert!(!watcher.watches.borrow()[0].active.get());
        watcher.fire(1.0);
        assert_eq!(second.style("opacity").as_deref(), Some("1"));
        assert_eq!(first.style("opacity").as_deref(), Some("0"));
    }

    #[test]
    fn missing_watch_capability_leaves_element_hidden() {
        let element = FakeElement::default();
        let watcher = FakeWatcher::unsupported();
        let mut controller = RevealController::new(RevealConfig::new(AnimationStyle::ScaleIn));
        controller.attach(element.clone(), &watcher);
        assert_eq!(controller.state(), Some(RevealState::Hidden));
        assert_eq!(element.style("transform").as_deref(), Some("scale(0.9)"));
        controller.detach();
    }
}

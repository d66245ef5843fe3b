use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// One intersection report for a watched element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEvent {
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl VisibilityEvent {
    pub fn reaches(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WatchOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// Something whose inline presentation style can be written.
pub trait StyleTarget {
    fn set_style(&self, property: &str, value: &str);
}

/// Live observation of one element. Cancelling stops further callbacks but
/// keeps the handle's resources alive until it is dropped.
pub trait WatchHandle {
    fn cancel(&mut self);
}

pub trait VisibilityWatcher<T> {
    /// Starts watching `target`. `None` means the capability is missing.
    fn watch(
        &self,
        target: &T,
        options: &WatchOptions,
        on_change: Box<dyn FnMut(VisibilityEvent)>,
    ) -> Option<Box<dyn WatchHandle>>;
}

impl StyleTarget for HtmlElement {
    fn set_style(&self, property: &str, value: &str) {
        if let Err(e) = self.style().set_property(property, value) {
            warn!("Failed to set {} on element: {:?}", property, e);
        }
    }
}

/// Browser `IntersectionObserver`, one observer per watched element.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntersectionWatcher;

struct ObserverHandle {
    observer: IntersectionObserver,
    target: HtmlElement,
    _callback: Closure<dyn FnMut(JsValue, JsValue)>,
}

impl WatchHandle for ObserverHandle {
    fn cancel(&mut self) {
        self.observer.unobserve(&self.target);
        self.observer.disconnect();
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl VisibilityWatcher<HtmlElement> for IntersectionWatcher {
    fn watch(
        &self,
        target: &HtmlElement,
        options: &WatchOptions,
        mut on_change: Box<dyn FnMut(VisibilityEvent)>,
    ) -> Option<Box<dyn WatchHandle>> {
        let callback = Closure::<dyn FnMut(JsValue, JsValue)>::new(move |entries: JsValue, _observer: JsValue| {
            let entries: js_sys::Array = entries.unchecked_into();
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_change(VisibilityEvent {
                    ratio: entry.intersection_ratio(),
                    is_intersecting: entry.is_intersecting(),
                });
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => observer,
                Err(e) => {
                    warn!("IntersectionObserver unavailable: {:?}", e);
                    return None;
                }
            };
        observer.observe(target);

        Some(Box::new(ObserverHandle {
            observer,
            target: target.clone(),
            _callback: callback,
        }))
    }
}

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollToOptions,
    Storage,
};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_html(selector: &str) -> Option<HtmlElement> {
    query(selector)?.dyn_into::<HtmlElement>().ok()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn as_html(element: &Element) -> Option<HtmlElement> {
    element.dyn_ref::<HtmlElement>().cloned()
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|win| win.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub fn document_height() -> f64 {
    document()
        .and_then(|document| document.body())
        .map(|body| f64::from(body.scroll_height()))
        .unwrap_or(0.0)
}

pub fn header_height() -> f64 {
    query_html(".header")
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

/// Attached listener that detaches itself when dropped.
pub struct EventHandle {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventHandle {
    pub fn listen(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Self {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let _ = target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());

        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for EventHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// One-shot visibility trigger: runs the action the first time each target
/// crosses the threshold, then stops watching that target. Disconnects fully
/// when dropped.
pub struct VisibilityWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityWatcher {
    pub fn once(
        targets: &[Element],
        threshold: f64,
        action: impl FnMut(Element) + 'static,
    ) -> Option<Self> {
        Self::with_margin(targets, threshold, None, action)
    }

    pub fn with_margin(
        targets: &[Element],
        threshold: f64,
        root_margin: Option<&str>,
        mut action: impl FnMut(Element) + 'static,
    ) -> Option<Self> {
        if targets.is_empty() {
            return None;
        }

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        observer.unobserve(&target);
                        action(target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        for target in targets {
            observer.observe(target);
        }

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

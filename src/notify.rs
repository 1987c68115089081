pub const ENTER_DELAY_MS: u32 = 100;
pub const HOLD_MS: u32 = 4_000;
pub const EXIT_MS: u32 = 400;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    #[default]
    Info,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notification-success",
            Self::Info => "notification-info",
            Self::Error => "notification-error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Info => "#2563eb",
            Self::Error => "#ef4444",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Info => "fa-info-circle",
            Self::Error => "fa-exclamation-circle",
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use banner::show;

#[cfg(target_arch = "wasm32")]
mod banner {
    use gloo_timers::callback::Timeout;
    use web_sys::Element;

    use super::{Severity, ENTER_DELAY_MS, EXIT_MS, HOLD_MS};
    use crate::dom;

    const OFFSCREEN: &str = "translateX(400px)";

    pub fn show(message: &str, severity: Severity) {
        let Some(document) = dom::document() else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let Ok(banner) = document.create_element("div") else {
            return;
        };

        banner.set_class_name(&format!("notification {}", severity.css_class()));
        let _ = banner.set_attribute(
            "style",
            &format!(
                "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
                 padding: 1rem 1.5rem; border-radius: 12px; \
                 box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15); z-index: 10000; \
                 transform: {OFFSCREEN}; transition: transform 0.3s ease;",
                severity.background()
            ),
        );

        if let Ok(content) = document.create_element("div") {
            content.set_class_name("notification-content");
            if let Ok(icon) = document.create_element("i") {
                icon.set_class_name(&format!("fas {}", severity.icon_class()));
                let _ = content.append_child(&icon);
            }
            if let Ok(text) = document.create_element("span") {
                text.set_text_content(Some(message));
                let _ = content.append_child(&text);
            }
            let _ = banner.append_child(&content);
        }

        if body.append_child(&banner).is_err() {
            return;
        }

        schedule_lifecycle(banner);
    }

    fn schedule_lifecycle(banner: Element) {
        let entering = banner.clone();
        Timeout::new(ENTER_DELAY_MS, move || {
            set_transform(&entering, "translateX(0)");
        })
        .forget();

        let exiting = banner.clone();
        Timeout::new(HOLD_MS, move || {
            set_transform(&exiting, OFFSCREEN);
        })
        .forget();

        Timeout::new(HOLD_MS + EXIT_MS, move || {
            banner.remove();
        })
        .forget();
    }

    fn set_transform(banner: &Element, value: &str) {
        if let Some(html) = dom::as_html(banner) {
            let _ = html.style().set_property("transform", value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn severity_styling_pairs_up() {
        assert_eq!(Severity::Success.background(), "#10b981");
        assert_eq!(Severity::Success.icon_class(), "fa-check-circle");
        assert_eq!(Severity::Info.background(), "#2563eb");
        assert_eq!(Severity::Info.icon_class(), "fa-info-circle");
        assert_eq!(Severity::Error.background(), "#ef4444");
        assert_eq!(Severity::Error.icon_class(), "fa-exclamation-circle");
    }

    #[test]
    fn banner_is_gone_within_its_lifecycle_window() {
        assert_eq!(ENTER_DELAY_MS, 100);
        assert_eq!(HOLD_MS + EXIT_MS, 4_400);
    }
}

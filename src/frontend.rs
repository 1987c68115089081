use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use gloo_timers::future::TimeoutFuture;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    console, Element, ErrorEvent, Event, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlImageElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent,
};

use crate::counter::{self, CounterAnimation, CounterTick};
use crate::dom::{self, EventHandle};
use crate::error::{InitError, SubmitError};
use crate::notify::{self, Severity};
use crate::observe::VisibilityWatcher;
use crate::scrolling::{self, HeaderScrollState, SectionBand};
use crate::theme::{self, Theme};
use crate::timer::{TimerSlot, TimerSlotRef};
use crate::typing::{self, TypingEffect};

const LOADING_FADE_DELAY_MS: u32 = 2_000;
const LOADING_HIDE_DELAY_MS: u32 = 500;
const SUBMIT_SIMULATION_MS: u32 = 2_000;
const COUNTER_VISIBILITY: f64 = 0.7;
const SKILL_VISIBILITY: f64 = 0.5;
const REVEAL_VISIBILITY: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const UPDATE_WORKER_PATH: &str = "/sw.js";

const HERO_TITLES: [&str; 4] = [
    "React Native Developer",
    "Mobile App Expert",
    "Cross-Platform Specialist",
    "UI/UX Enthusiast",
];

thread_local! {
    static APP: RefCell<Option<Portfolio>> = const { RefCell::new(None) };
}

pub fn run() {
    console_error_panic_hook::set_once();

    match Portfolio::attach() {
        Ok(portfolio) => {
            APP.with(|slot| *slot.borrow_mut() = Some(portfolio));
            console::log_1(&"portfolio interactions ready".into());
        }
        Err(err) => console::error_1(&format!("portfolio setup failed: {err}").into()),
    }
}

/// Owns every listener, timer, and observer the layer registers. Dropping it
/// detaches the whole layer, so a host page can tear down and re-attach.
pub struct Portfolio {
    _loading: Option<LoadingFade>,
    _navigation: Navigation,
    _menu: MenuHandles,
    _scroll_fx: Option<EventHandle>,
    _back_to_top: Option<BackToTop>,
    _counters: Option<Counters>,
    _skills: Option<VisibilityWatcher>,
    _reveal: Option<VisibilityWatcher>,
    _lazy_images: Option<VisibilityWatcher>,
    _contact: Option<ContactForm>,
    _typing: Option<TypingHandle>,
    _parallax: Option<EventHandle>,
    _projects: Vec<EventHandle>,
    _theme: Option<ThemeToggle>,
    _keyboard: Option<EventHandle>,
    _errors: Option<EventHandle>,
}

impl Portfolio {
    pub fn attach() -> Result<Self, InitError> {
        if web_sys::window().is_none() {
            return Err(InitError::NoWindow);
        }
        if dom::query(".header").is_none() {
            return Err(InitError::MissingElement(".header"));
        }
        if dom::query(".nav-links").is_none() {
            return Err(InitError::MissingElement(".nav-links"));
        }

        let menu = MobileMenu::find();

        init_scroll_animations();
        register_update_worker();

        Ok(Self {
            _loading: setup_loading(),
            _navigation: setup_navigation(&menu),
            _menu: setup_menu_dismissal(&menu),
            _scroll_fx: setup_scroll_effects(),
            _back_to_top: setup_back_to_top(),
            _counters: setup_counters(),
            _skills: setup_skill_bars(),
            _reveal: setup_reveal_on_scroll(),
            _lazy_images: setup_lazy_images(),
            _contact: setup_contact_form(),
            _typing: setup_typing_effect(),
            _parallax: setup_parallax(),
            _projects: setup_project_interactions(),
            _theme: setup_theme_toggle(),
            _keyboard: setup_keyboard_shortcuts(&menu),
            _errors: setup_error_logger(),
        })
    }
}

struct LoadingFade {
    _fade: Timeout,
    _hide: TimerSlot<Timeout>,
}

fn setup_loading() -> Option<LoadingFade> {
    let overlay = dom::query_html("#loading-screen")?;

    let hide_slot = TimerSlot::new();
    let hide = hide_slot.weak();
    let fade = Timeout::new(LOADING_FADE_DELAY_MS, move || {
        let _ = overlay.style().set_property("opacity", "0");
        let Some(slot) = hide.upgrade() else {
            return;
        };
        slot.set(Timeout::new(LOADING_HIDE_DELAY_MS, move || {
            let _ = overlay.style().set_property("display", "none");
            if let Some(body) = dom::document().and_then(|document| document.body()) {
                let _ = body.style().set_property("overflow", "visible");
            }
        }));
    });

    Some(LoadingFade {
        _fade: fade,
        _hide: hide_slot,
    })
}

#[derive(Clone)]
struct MobileMenu {
    toggle: Option<Element>,
    links: Option<Element>,
}

impl MobileMenu {
    fn find() -> Self {
        Self {
            toggle: dom::query(".mobile-menu-toggle"),
            links: dom::query(".nav-links"),
        }
    }

    fn toggle_open(&self) {
        if let (Some(toggle), Some(links)) = (&self.toggle, &self.links) {
            let _ = toggle.class_list().toggle("active");
            let _ = links.class_list().toggle("active");
        }
    }

    fn close(&self) {
        if let Some(toggle) = &self.toggle {
            let _ = toggle.class_list().remove_1("active");
        }
        if let Some(links) = &self.links {
            let _ = links.class_list().remove_1("active");
        }
    }

    fn contains_event_target(&self, event: &Event) -> bool {
        let Some(target) = event.target() else {
            return false;
        };
        let Some(node) = target.dyn_ref::<web_sys::Node>() else {
            return false;
        };

        [self.toggle.as_ref(), self.links.as_ref()]
            .into_iter()
            .flatten()
            .any(|element| element.contains(Some(node)))
    }
}

struct Navigation {
    _links: Vec<EventHandle>,
    _highlight: Option<EventHandle>,
}

fn setup_navigation(menu: &MobileMenu) -> Navigation {
    let mut links = Vec::new();
    for link in dom::query_all("a[href^=\"#\"]") {
        let menu = menu.clone();
        let anchor = link.clone();
        links.push(EventHandle::listen(&link, "click", move |event| {
            event.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
                return;
            };
            let Some(target) = dom::document()
                .and_then(|document| document.get_element_by_id(id))
                .and_then(|element| dom::as_html(&element))
            else {
                return;
            };

            dom::smooth_scroll_to(f64::from(target.offset_top()) - dom::header_height());
            menu.close();
        }));
    }

    let highlight = web_sys::window()
        .map(|win| EventHandle::listen(&win, "scroll", |_| update_active_navigation()));

    Navigation {
        _links: links,
        _highlight: highlight,
    }
}

fn update_active_navigation() {
    let bands: Vec<SectionBand> = dom::query_all("section[id]")
        .into_iter()
        .filter_map(|section| {
            let html = dom::as_html(&section)?;
            Some(SectionBand {
                id: section.id(),
                top: f64::from(html.offset_top()),
                height: f64::from(html.offset_height()),
            })
        })
        .collect();

    let current = scrolling::active_section(&bands, dom::scroll_y(), dom::header_height())
        .map(|id| format!("#{id}"));

    for link in dom::query_all(".nav-links a[href^=\"#\"]") {
        let class_list = link.class_list();
        let _ = class_list.remove_1("active");
        if link.get_attribute("href") == current {
            let _ = class_list.add_1("active");
        }
    }
}

struct MenuHandles {
    _toggle_click: Option<EventHandle>,
    _outside_click: Option<EventHandle>,
}

fn setup_menu_dismissal(menu: &MobileMenu) -> MenuHandles {
    if menu.toggle.is_none() || menu.links.is_none() {
        return MenuHandles {
            _toggle_click: None,
            _outside_click: None,
        };
    }

    let toggle_click = menu.toggle.as_ref().map(|toggle| {
        let menu = menu.clone();
        EventHandle::listen(toggle, "click", move |_| menu.toggle_open())
    });

    let outside_click = dom::document().map(|document| {
        let menu = menu.clone();
        EventHandle::listen(&document, "click", move |event| {
            if !menu.contains_event_target(&event) {
                menu.close();
            }
        })
    });

    MenuHandles {
        _toggle_click: toggle_click,
        _outside_click: outside_click,
    }
}

fn setup_scroll_effects() -> Option<EventHandle> {
    let header = dom::query_html(".header")?;
    let progress_bar = create_progress_bar();
    let mut state = HeaderScrollState::new();

    let win = web_sys::window()?;
    Some(EventHandle::listen(&win, "scroll", move |_| {
        let scroll_top = dom::scroll_y();
        let frame = state.update(scroll_top);

        let style = header.style();
        let _ = style.set_property("background", scrolling::HEADER_BACKGROUND);
        if frame.raised {
            let _ = style.set_property("backdrop-filter", "blur(20px)");
            let _ = style.set_property("box-shadow", "0 4px 20px rgba(0, 0, 0, 0.1)");
        } else {
            let _ = style.set_property("backdrop-filter", "blur(10px)");
            let _ = style.set_property("box-shadow", "0 2px 10px rgba(0, 0, 0, 0.05)");
        }
        let _ = style.set_property(
            "transform",
            if frame.hidden {
                "translateY(-100%)"
            } else {
                "translateY(0)"
            },
        );

        if let Some(bar) = &progress_bar {
            let percent = scrolling::scroll_progress_percent(
                scroll_top,
                dom::document_height(),
                dom::viewport_height(),
            );
            let _ = bar.style().set_property("width", &format!("{percent}%"));
        }
    }))
}

fn create_progress_bar() -> Option<HtmlElement> {
    let document = dom::document()?;
    let body = document.body()?;
    let bar = document.create_element("div").ok()?;

    bar.set_class_name("scroll-progress");
    let _ = bar.set_attribute(
        "style",
        "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
         background: linear-gradient(90deg, #2563eb, #10b981); z-index: 9999; \
         transition: width 0.1s ease;",
    );
    body.append_child(&bar).ok()?;

    bar.dyn_into::<HtmlElement>().ok()
}

struct BackToTop {
    _scroll: EventHandle,
    _click: EventHandle,
}

fn setup_back_to_top() -> Option<BackToTop> {
    let button = dom::query("#backToTop")?;
    let win = web_sys::window()?;

    let visibility_target = button.clone();
    let scroll = EventHandle::listen(&win, "scroll", move |_| {
        let class_list = visibility_target.class_list();
        if dom::scroll_y() > scrolling::BACK_TO_TOP_THRESHOLD {
            let _ = class_list.add_1("visible");
        } else {
            let _ = class_list.remove_1("visible");
        }
    });
    let click = EventHandle::listen(&button, "click", |_| dom::smooth_scroll_to(0.0));

    Some(BackToTop {
        _scroll: scroll,
        _click: click,
    })
}

struct Counters {
    _watcher: VisibilityWatcher,
    _running: Rc<RefCell<Vec<TimerSlot<Interval>>>>,
}

fn setup_counters() -> Option<Counters> {
    let targets = dom::query_all(".stat-number[data-count]");
    let running: Rc<RefCell<Vec<TimerSlot<Interval>>>> = Rc::new(RefCell::new(Vec::new()));

    let pool = running.clone();
    let watcher = VisibilityWatcher::once(&targets, COUNTER_VISIBILITY, move |element| {
        let Some(target) = element
            .get_attribute("data-count")
            .and_then(|raw| raw.trim().parse::<i32>().ok())
        else {
            return;
        };
        pool.borrow_mut().push(animate_counter(element, target));
    })?;

    Some(Counters {
        _watcher: watcher,
        _running: running,
    })
}

fn animate_counter(element: Element, target: i32) -> TimerSlot<Interval> {
    let mut animation = CounterAnimation::new(target);
    let slot = TimerSlot::new();

    // The callback holds only a weak ref so the slot stays the sole owner
    // and dropping it cancels the interval.
    let active = slot.weak();
    let interval = Interval::new(counter::TICK_MS, move || match animation.tick() {
        CounterTick::Running(value) => element.set_text_content(Some(&value.to_string())),
        CounterTick::Done(value) => {
            element.set_text_content(Some(&value.to_string()));
            if let Some(slot) = active.upgrade() {
                slot.clear();
            }
        }
    });
    slot.set(interval);

    slot
}

fn setup_skill_bars() -> Option<VisibilityWatcher> {
    let bars = dom::query_all(".skill-progress[data-width]");
    VisibilityWatcher::once(&bars, SKILL_VISIBILITY, |element| {
        let Some(width) = element.get_attribute("data-width") else {
            return;
        };
        if let Some(bar) = dom::as_html(&element) {
            let _ = bar.style().set_property("width", &format!("{width}%"));
        }
    })
}

fn setup_reveal_on_scroll() -> Option<VisibilityWatcher> {
    let elements =
        dom::query_all(".about-text, .tech-item, .skill-category, .timeline-item, .project-card");
    VisibilityWatcher::with_margin(
        &elements,
        REVEAL_VISIBILITY,
        Some(REVEAL_ROOT_MARGIN),
        |element| {
            let _ = element.class_list().add_1("animate-in");
        },
    )
}

fn setup_lazy_images() -> Option<VisibilityWatcher> {
    let images = dom::query_all("img[data-src]");
    VisibilityWatcher::once(&images, 0.0, |element| {
        let Some(source) = element.get_attribute("data-src") else {
            return;
        };
        if let Some(image) = element.dyn_ref::<HtmlImageElement>() {
            image.set_src(&source);
            let _ = image.class_list().remove_1("lazy");
        }
    })
}

struct ContactForm {
    _submit: EventHandle,
    _fields: Vec<EventHandle>,
}

fn setup_contact_form() -> Option<ContactForm> {
    let form = dom::query("#contactForm")?
        .dyn_into::<HtmlFormElement>()
        .ok()?;

    let mut fields = Vec::new();
    for field in form_fields(&form) {
        fields.extend(setup_field_states(field));
    }

    let submitted_form = form.clone();
    let submit = EventHandle::listen(&form, "submit", move |event| {
        event.prevent_default();
        handle_submit(&submitted_form);
    });

    Some(ContactForm {
        _submit: submit,
        _fields: fields,
    })
}

fn form_fields(form: &HtmlFormElement) -> Vec<Element> {
    let Ok(nodes) = form.query_selector_all("input, textarea") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn setup_field_states(field: Element) -> Vec<EventHandle> {
    let focused = field.clone();
    let focus = EventHandle::listen(&field, "focus", move |_| {
        if let Some(wrapper) = focused.parent_element() {
            let _ = wrapper.class_list().add_1("focused");
        }
    });

    let blurred = field.clone();
    let blur = EventHandle::listen(&field, "blur", move |_| {
        if field_value(&blurred).is_empty() {
            if let Some(wrapper) = blurred.parent_element() {
                let _ = wrapper.class_list().remove_1("focused");
            }
        }
    });

    let edited = field.clone();
    let input = EventHandle::listen(&field, "input", move |_| {
        if let Some(wrapper) = edited.parent_element() {
            let class_list = wrapper.class_list();
            if field_value(&edited).is_empty() {
                let _ = class_list.remove_1("has-value");
            } else {
                let _ = class_list.add_1("has-value");
            }
        }
    });

    vec![focus, blur, input]
}

fn handle_submit(form: &HtmlFormElement) {
    let Some(button) = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlButtonElement>().ok())
    else {
        return;
    };

    let message: Vec<(String, String)> = form_fields(form)
        .iter()
        .map(|field| {
            (
                field.get_attribute("name").unwrap_or_default(),
                field_value(field),
            )
        })
        .collect();

    let original_label = button.inner_html();
    button.set_inner_html("<i class=\"fas fa-spinner fa-spin\"></i> Sending...");
    button.set_disabled(true);

    let form = form.clone();
    spawn_local(async move {
        let result = deliver_message(&message).await;

        button.set_inner_html(&original_label);
        button.set_disabled(false);

        match result {
            Ok(()) => {
                form.reset();
                clear_field_states(&form);
                notify::show(
                    "Message sent successfully! I'll get back to you soon.",
                    Severity::Success,
                );
            }
            Err(err) => {
                // Field values are kept so the visitor can retry.
                notify::show(&format!("Message could not be sent: {err}"), Severity::Error);
            }
        }
    });
}

// Stands in for a real mail backend: a real implementation would POST the
// captured fields and map transport failures to SubmitError::Delivery.
async fn deliver_message(_message: &[(String, String)]) -> Result<(), SubmitError> {
    TimeoutFuture::new(SUBMIT_SIMULATION_MS).await;
    Ok(())
}

fn clear_field_states(form: &HtmlFormElement) {
    let Ok(groups) = form.query_selector_all(".form-group") else {
        return;
    };

    for index in 0..groups.length() {
        let Some(group) = groups
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let _ = group.class_list().remove_2("focused", "has-value");
    }
}

struct TypingHandle {
    _pending: TimerSlot<Timeout>,
}

fn setup_typing_effect() -> Option<TypingHandle> {
    let element = dom::query_html(".hero-text .title")?;
    let titles = HERO_TITLES.iter().map(|title| title.to_string()).collect();
    let effect = Rc::new(RefCell::new(TypingEffect::new(titles)?));

    let pending = TimerSlot::new();
    schedule_typing(element, effect, pending.weak(), typing::START_DELAY_MS);

    Some(TypingHandle { _pending: pending })
}

fn schedule_typing(
    element: HtmlElement,
    effect: Rc<RefCell<TypingEffect>>,
    pending: TimerSlotRef<Timeout>,
    delay_ms: u32,
) {
    // A dead ref means the handle was dropped; the chain ends here.
    let Some(slot) = pending.upgrade() else {
        return;
    };

    let chain = pending.clone();
    let timeout = Timeout::new(delay_ms, move || {
        let frame = effect.borrow_mut().step();
        element.set_text_content(Some(&frame.text));
        schedule_typing(element, effect, chain, frame.delay_ms);
    });
    slot.set(timeout);
}

fn setup_parallax() -> Option<EventHandle> {
    let shapes: Vec<HtmlElement> = dom::query_all(".floating-shapes .shape")
        .iter()
        .filter_map(dom::as_html)
        .collect();
    if shapes.is_empty() {
        return None;
    }

    let win = web_sys::window()?;
    Some(EventHandle::listen(&win, "scroll", move |_| {
        let scroll_y = dom::scroll_y();
        for (index, shape) in shapes.iter().enumerate() {
            let _ = shape
                .style()
                .set_property("transform", &scrolling::shape_transform(index, scroll_y));
        }
    }))
}

fn setup_project_interactions() -> Vec<EventHandle> {
    let mut handles = Vec::new();

    for card in dom::query_all(".project-card") {
        let Some(card) = dom::as_html(&card) else {
            continue;
        };

        let entered = card.clone();
        handles.push(EventHandle::listen(&card, "mouseenter", move |_| {
            let style = entered.style();
            let _ = style.set_property("transform", "translateY(-15px) scale(1.02)");
            let _ = style.set_property("box-shadow", "0 25px 50px rgba(0, 0, 0, 0.15)");
        }));

        let left = card.clone();
        handles.push(EventHandle::listen(&card, "mouseleave", move |_| {
            let style = left.style();
            let _ = style.set_property("transform", "translateY(0) scale(1)");
            let _ = style.set_property("box-shadow", "0 10px 15px rgba(0, 0, 0, 0.1)");
        }));
    }

    for link in dom::query_all(".project-link") {
        let href = link.get_attribute("href").unwrap_or_default();
        handles.push(EventHandle::listen(&link, "click", move |event| {
            event.prevent_default();
            // Placeholder until the project detail modal exists.
            console::log_1(&format!("project link clicked: {href}").into());
        }));
    }

    handles
}

struct ThemeToggle {
    _click: EventHandle,
}

fn setup_theme_toggle() -> Option<ThemeToggle> {
    // The stored theme applies to the page even when the toggle button has
    // nowhere to mount.
    let stored =
        dom::local_storage().and_then(|storage| storage.get_item(theme::STORAGE_KEY).ok().flatten());
    let initial = Theme::from_stored(stored.as_deref());
    apply_body_theme(initial);

    let document = dom::document()?;
    let nav = dom::query(".nav")?;

    let button = document.create_element("button").ok()?;
    button.set_class_name("theme-toggle");
    let _ = button.set_attribute("aria-label", "Toggle dark mode");
    button.set_inner_html(initial.icon_html());

    nav.append_child(&button).ok()?;

    let state = Rc::new(Cell::new(initial));
    let toggled_button = button.clone();
    let click = EventHandle::listen(&button, "click", move |_| {
        let next = state.get().toggled();
        state.set(next);
        apply_theme(next, &toggled_button);
        if let Some(storage) = dom::local_storage() {
            let _ = storage.set_item(theme::STORAGE_KEY, next.stored_value());
        }
    });

    Some(ThemeToggle { _click: click })
}

fn apply_theme(theme: Theme, button: &Element) {
    apply_body_theme(theme);
    button.set_inner_html(theme.icon_html());
}

fn apply_body_theme(theme: Theme) {
    if let Some(body) = dom::document().and_then(|document| document.body()) {
        let class_list = body.class_list();
        let _ = if theme.is_dark() {
            class_list.add_1(theme::DARK_CLASS)
        } else {
            class_list.remove_1(theme::DARK_CLASS)
        };
    }
}

fn setup_keyboard_shortcuts(menu: &MobileMenu) -> Option<EventHandle> {
    let document = dom::document()?;
    let menu = menu.clone();

    Some(EventHandle::listen(&document, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };

        match key_event.key().as_str() {
            "Escape" => menu.close(),
            "ArrowUp" if key_event.ctrl_key() => {
                key_event.prevent_default();
                dom::smooth_scroll_to(0.0);
            }
            "ArrowDown" if key_event.ctrl_key() => {
                key_event.prevent_default();
                dom::smooth_scroll_to(dom::document_height());
            }
            _ => {}
        }
    }))
}

fn setup_error_logger() -> Option<EventHandle> {
    let win = web_sys::window()?;
    Some(EventHandle::listen(&win, "error", |event| {
        let message = event
            .dyn_ref::<ErrorEvent>()
            .map(|error| error.message())
            .unwrap_or_else(|| "unknown error".to_string());
        console::error_1(&format!("portfolio error: {message}").into());
    }))
}

fn init_scroll_animations() {
    let Some(win) = web_sys::window() else {
        return;
    };
    let win_js: JsValue = win.into();
    let Ok(aos) = Reflect::get(&win_js, &JsValue::from_str("AOS")) else {
        return;
    };
    let Ok(init) = Reflect::get(&aos, &JsValue::from_str("init")) else {
        return;
    };
    let Some(init) = init.dyn_ref::<Function>() else {
        return;
    };

    let config: JsValue = Object::new().into();
    let _ = Reflect::set(
        &config,
        &JsValue::from_str("duration"),
        &JsValue::from_f64(1_000.0),
    );
    let _ = Reflect::set(
        &config,
        &JsValue::from_str("easing"),
        &JsValue::from_str("ease-in-out"),
    );
    let _ = Reflect::set(&config, &JsValue::from_str("once"), &JsValue::from_bool(true));
    let _ = Reflect::set(
        &config,
        &JsValue::from_str("offset"),
        &JsValue::from_f64(100.0),
    );

    if init.call1(&aos, &config).is_err() {
        console::log_1(&"scroll animation library failed to initialize".into());
    }
}

fn register_update_worker() {
    let Some(win) = web_sys::window() else {
        return;
    };
    let navigator = win.navigator();
    let navigator_js: JsValue = navigator.clone().into();
    if !Reflect::has(&navigator_js, &JsValue::from_str("serviceWorker")).unwrap_or(false) {
        return;
    }

    let worker = navigator.service_worker();
    spawn_local(async move {
        match JsFuture::from(worker.register(UPDATE_WORKER_PATH)).await {
            Ok(_) => console::log_1(&"update worker registered".into()),
            Err(err) => console::log_2(&"update worker registration failed:".into(), &err),
        }
    });
}

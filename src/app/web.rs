//! Browser wiring: event listeners, the reveal observer and frame scheduling.
//!
//! Every listener forwards a plain [`Message`] into the shared [`App`]; all
//! decisions are made there.

use super::{
    App, Message, REDUCED_MOTION_QUERY, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, defers_mount,
    entered_indices,
};
use crate::config::{AppConfig, CONFIG_ELEMENT_ID, load_config};
use crate::dom::web::WebDom;
use crate::logging::{self, ReloadHandle};
use crate::timing::web::BrowserHost;
use crate::timing::{Debouncer, FrameScheduler};
use anyhow::{Context, Result};
use gloo::events::{EventListener, EventListenerOptions};
use js_sys::Array;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use tracing::{debug, error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node, Window,
};

/// Mount now, or once `DOMContentLoaded` fires if the document is still loading.
pub fn boot(reload_handle: ReloadHandle) -> Result<()> {
    let window = web_sys::window().context("No global window")?;
    let document = window.document().context("Window has no document")?;

    if defers_mount(&document.ready_state()) {
        debug!("Document still loading; deferring mount");
        EventListener::once(&document, "DOMContentLoaded", move |_event| {
            if let Err(err) = mount(window, &reload_handle) {
                error!("{err:?}");
            }
        })
        .forget();
        return Ok(());
    }

    mount(window, &reload_handle)
}

fn mount(window: Window, reload_handle: &ReloadHandle) -> Result<()> {
    let document = window.document().context("Window has no document")?;
    let embedded = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    let config = load_config(embedded.as_deref());
    logging::set_log_level(reload_handle, config.log_level.as_filter_str());

    let session = PageSession::mount(window, document, config);
    // Listeners and the observer stay registered until the page unloads.
    std::mem::forget(session);
    Ok(())
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

struct Shared {
    app: RefCell<App>,
    dom: WebDom,
    frames: FrameScheduler<BrowserHost>,
    resize: Debouncer<BrowserHost>,
}

impl Shared {
    fn dispatch(&self, message: Message) {
        match self.app.try_borrow_mut() {
            Ok(mut app) => app.dispatch(&self.dom, message),
            Err(_) => warn!(?message, "Dropped re-entrant message"),
        }
    }

    fn request_evaluation(self: &Rc<Self>) {
        let shared = Rc::downgrade(self);
        self.frames.schedule(move || {
            if let Some(shared) = shared.upgrade() {
                shared.dispatch(Message::FrameRendered);
            }
        });
    }

    fn request_evaluation_after_resize(self: &Rc<Self>) {
        let shared: Weak<Self> = Rc::downgrade(self);
        self.resize.call(move || {
            if let Some(shared) = shared.upgrade() {
                shared.request_evaluation();
            }
        });
    }
}

struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

struct PageSession {
    shared: Rc<Shared>,
    listeners: Vec<EventListener>,
    reveal: Option<RevealObserver>,
}

impl PageSession {
    fn mount(window: Window, document: Document, config: AppConfig) -> Self {
        let reduced_motion = prefers_reduced_motion(&window);
        let dom = WebDom::resolve(window, document, &config);
        let anchor_selector = config.anchor_selector.clone();
        let resize_debounce_ms = config.resize_debounce_ms;

        let shared = Rc::new(Shared {
            app: RefCell::new(App::new(config, reduced_motion)),
            dom,
            frames: FrameScheduler::new(BrowserHost),
            resize: Debouncer::new(BrowserHost, resize_debounce_ms),
        });
        let mut session = Self {
            shared,
            listeners: Vec::new(),
            reveal: None,
        };

        session.install_scroll_listeners();
        session.install_menu_listeners();
        session.reveal = session.install_reveal_observer();
        session.install_anchor_listeners(&anchor_selector);
        session.shared.dispatch(Message::Initialize);

        info!(
            listeners = session.listeners.len(),
            animated = session.shared.dom.animated().len(),
            observing = session.reveal.is_some(),
            reduced_motion,
            "Page enhancements initialized"
        );
        session
    }

    fn install_scroll_listeners(&mut self) {
        let window = self.shared.dom.window().clone();

        let shared = Rc::clone(&self.shared);
        self.listeners
            .push(EventListener::new(&window, "scroll", move |_event| {
                shared.request_evaluation();
            }));

        let shared = Rc::clone(&self.shared);
        self.listeners
            .push(EventListener::new(&window, "resize", move |_event| {
                shared.request_evaluation_after_resize();
            }));

        let shared = Rc::clone(&self.shared);
        self.listeners
            .push(EventListener::new(&window, "pagehide", move |_event| {
                shared.frames.cancel();
                shared.resize.cancel();
            }));
    }

    fn install_menu_listeners(&mut self) {
        let (Some(toggle), Some(container)) = (
            self.shared.dom.menu_toggle().cloned(),
            self.shared.dom.nav_links().cloned(),
        ) else {
            debug!("Mobile menu elements missing; menu toggling disabled");
            return;
        };

        let shared = Rc::clone(&self.shared);
        self.listeners
            .push(EventListener::new(&toggle, "click", move |_event| {
                shared.dispatch(Message::MenuTogglePressed);
            }));

        for link in self.shared.dom.links() {
            let shared = Rc::clone(&self.shared);
            self.listeners
                .push(EventListener::new(link, "click", move |_event| {
                    shared.dispatch(Message::NavLinkSelected);
                }));
        }

        let document = self.shared.dom.document().clone();
        let shared = Rc::clone(&self.shared);
        self.listeners.push(EventListener::new(
            &document,
            "click",
            move |event: &Event| {
                let target = event
                    .target()
                    .and_then(|target| target.dyn_into::<Node>().ok());
                let contains = |element: &Element| element.contains(target.as_ref());
                shared.dispatch(Message::DocumentClicked {
                    inside_menu: contains(&container),
                    inside_toggle: contains(&toggle),
                });
            },
        ));
    }

    fn install_anchor_listeners(&mut self, selector: &str) {
        for anchor in self.shared.dom.query_all(selector) {
            let shared = Rc::clone(&self.shared);
            let link = anchor.clone();
            self.listeners.push(EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event: &Event| {
                    event.prevent_default();
                    if let Some(href) = link.get_attribute("href") {
                        shared.dispatch(Message::AnchorClicked { href });
                    }
                },
            ));
        }
    }

    fn install_reveal_observer(&self) -> Option<RevealObserver> {
        let targets = self.shared.dom.animated().to_vec();
        if targets.is_empty() {
            return None;
        }

        let shared = Rc::clone(&self.shared);
        let tracked = targets.clone();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                let indices = entered_indices(
                    entries
                        .iter()
                        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                        .map(|entry| {
                            let target = entry.target();
                            let idx = tracked.iter().position(|element| *element == target);
                            (idx, entry.is_intersecting())
                        }),
                );
                if !indices.is_empty() {
                    shared.dispatch(Message::ElementsEntered(indices));
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                for element in &targets {
                    observer.observe(element);
                }
                Some(RevealObserver {
                    observer,
                    _callback: callback,
                })
            }
            Err(err) => {
                warn!("IntersectionObserver unavailable: {err:?}");
                self.shared.dispatch(Message::RevealUnavailable);
                None
            }
        }
    }
}

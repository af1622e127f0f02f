//! [`PageDom`] over the live document via `web_sys`.

use super::{ClassTarget, Landmark, PageDom, SectionGeometry};
use crate::config::AppConfig;
use anyhow::{Result, anyhow};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

pub struct WebDom {
    window: Window,
    document: Document,
    performance: Option<web_sys::Performance>,
    navbar: Option<HtmlElement>,
    menu_toggle: Option<Element>,
    nav_links: Option<Element>,
    links: Vec<Element>,
    animated: Vec<Element>,
    section_selector: String,
}

impl WebDom {
    /// Look up the fixed elements once; sections are re-queried per read.
    pub fn resolve(window: Window, document: Document, config: &AppConfig) -> Self {
        let navbar = document
            .get_element_by_id(&config.navbar_id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        let menu_toggle = document.get_element_by_id(&config.menu_toggle_id);
        let nav_links = document.get_element_by_id(&config.nav_links_id);
        let links = nav_links
            .as_ref()
            .map(|container| query_all(container.query_selector_all("a")))
            .unwrap_or_default();
        let animated = query_all(document.query_selector_all(&config.animated_selector));

        Self {
            performance: window.performance(),
            window,
            document,
            navbar,
            menu_toggle,
            nav_links,
            links,
            animated,
            section_selector: config.section_selector.clone(),
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn menu_toggle(&self) -> Option<&Element> {
        self.menu_toggle.as_ref()
    }

    pub fn nav_links(&self) -> Option<&Element> {
        self.nav_links.as_ref()
    }

    pub fn links(&self) -> &[Element] {
        &self.links
    }

    pub fn animated(&self) -> &[Element] {
        &self.animated
    }

    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        query_all(self.document.query_selector_all(selector))
    }

    fn element(&self, target: ClassTarget) -> Option<&Element> {
        match target {
            ClassTarget::Landmark(landmark) => self.landmark(landmark),
            ClassTarget::NavLink(idx) => self.links.get(idx),
            ClassTarget::Animated(idx) => self.animated.get(idx),
        }
    }

    fn landmark(&self, landmark: Landmark) -> Option<&Element> {
        match landmark {
            Landmark::Navbar => self.navbar.as_deref(),
            Landmark::MenuToggle => self.menu_toggle.as_ref(),
            Landmark::NavLinks => self.nav_links.as_ref(),
        }
    }
}

impl PageDom for WebDom {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn navbar_height(&self) -> Option<f64> {
        self.navbar
            .as_ref()
            .map(|navbar| f64::from(navbar.offset_height()))
    }

    fn sections(&self) -> Vec<SectionGeometry> {
        self.query_all(&self.section_selector)
            .into_iter()
            .filter_map(|element| {
                let id = element.id();
                if id.is_empty() {
                    return None;
                }
                let element = element.dyn_into::<HtmlElement>().ok()?;
                Some(SectionGeometry::new(
                    id,
                    f64::from(element.offset_top()),
                    f64::from(element.offset_height()),
                ))
            })
            .collect()
    }

    fn nav_link_hrefs(&self) -> Vec<Option<String>> {
        self.links
            .iter()
            .map(|link| link.get_attribute("href"))
            .collect()
    }

    fn animated_count(&self) -> usize {
        self.animated.len()
    }

    fn has_class(&self, target: ClassTarget, class: &str) -> Option<bool> {
        self.element(target)
            .map(|element| element.class_list().contains(class))
    }

    fn set_class(&self, target: ClassTarget, class: &str, enabled: bool) -> Result<()> {
        let Some(element) = self.element(target) else {
            return Ok(());
        };
        let classes = element.class_list();
        let result = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        result.map_err(|err| js_error(err, &format!("toggle class `{class}` on {target:?}")))
    }

    fn set_attribute(&self, landmark: Landmark, name: &str, value: &str) -> Result<()> {
        let Some(element) = self.landmark(landmark) else {
            return Ok(());
        };
        element
            .set_attribute(name, value)
            .map_err(|err| js_error(err, &format!("set `{name}` on {landmark:?}")))
    }

    fn element_viewport_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .map(|element| element.get_bounding_client_rect().top())
    }

    fn scroll_window_to(&self, top: f64, smooth: bool) -> Result<()> {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Auto
        });
        self.window.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }

    fn set_root_style_property(&self, name: &str, value: &str) -> Result<()> {
        let root = self
            .document
            .document_element()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| anyhow!("document has no HTML root element"))?;
        root.style()
            .set_property(name, value)
            .map_err(|err| js_error(err, &format!("set style property `{name}`")))
    }

    fn now_ms(&self) -> f64 {
        self.performance
            .as_ref()
            .map(|performance| performance.now())
            .unwrap_or_else(js_sys::Date::now)
    }
}

fn query_all(result: Result<web_sys::NodeList, JsValue>) -> Vec<Element> {
    let Ok(list) = result else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.get(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn js_error(err: JsValue, action: &str) -> anyhow::Error {
    anyhow!("Failed to {action}: {err:?}")
}

//! In-memory [`PageDom`] modelled on the portfolio page layout.

use super::{ClassTarget, Landmark, PageDom, SectionGeometry};
use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default, Clone)]
pub(crate) struct MemoryElement {
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
}

#[derive(Debug, Default)]
struct Page {
    scroll_y: f64,
    navbar_height: f64,
    landmarks: BTreeMap<Landmark, MemoryElement>,
    links: Vec<(Option<String>, MemoryElement)>,
    animated: Vec<MemoryElement>,
    sections: Vec<SectionGeometry>,
    root_style: BTreeMap<String, String>,
    scrolls: Vec<(f64, bool)>,
}

#[derive(Debug, Default)]
pub(crate) struct MemoryDom {
    page: RefCell<Page>,
    mutations: Cell<usize>,
    now_ms: Cell<f64>,
}

impl MemoryDom {
    /// Navbar 80 high, four sections, three nav links and four animated blocks.
    pub(crate) fn portfolio() -> Self {
        let mut page = Page {
            navbar_height: 80.0,
            sections: vec![
                SectionGeometry::new("hero", 0.0, 600.0),
                SectionGeometry::new("about", 600.0, 700.0),
                SectionGeometry::new("projects", 1300.0, 900.0),
                SectionGeometry::new("contact", 2200.0, 500.0),
            ],
            links: ["#about", "#projects", "#contact"]
                .into_iter()
                .map(|href| (Some(href.to_string()), MemoryElement::default()))
                .collect(),
            animated: vec![MemoryElement::default(); 4],
            ..Page::default()
        };
        for landmark in [Landmark::Navbar, Landmark::MenuToggle, Landmark::NavLinks] {
            page.landmarks.insert(landmark, MemoryElement::default());
        }
        Self {
            page: RefCell::new(page),
            ..Self::default()
        }
    }

    pub(crate) fn without_navbar(self) -> Self {
        self.page.borrow_mut().landmarks.remove(&Landmark::Navbar);
        self
    }

    pub(crate) fn without_menu(self) -> Self {
        {
            let mut page = self.page.borrow_mut();
            page.landmarks.remove(&Landmark::MenuToggle);
            page.landmarks.remove(&Landmark::NavLinks);
            page.links.clear();
        }
        self
    }

    pub(crate) fn with_nav_link(self, href: Option<&str>) -> Self {
        self.page
            .borrow_mut()
            .links
            .push((href.map(str::to_string), MemoryElement::default()));
        self
    }

    pub(crate) fn with_sections(self, sections: Vec<SectionGeometry>) -> Self {
        self.page.borrow_mut().sections = sections;
        self
    }

    pub(crate) fn set_scroll(&self, scroll_y: f64) {
        self.page.borrow_mut().scroll_y = scroll_y;
    }

    pub(crate) fn set_now(&self, now_ms: f64) {
        self.now_ms.set(now_ms);
    }

    pub(crate) fn mutation_count(&self) -> usize {
        self.mutations.get()
    }

    pub(crate) fn has(&self, target: ClassTarget, class: &str) -> bool {
        self.has_class(target, class).unwrap_or(false)
    }

    pub(crate) fn active_links(&self, class: &str) -> Vec<String> {
        self.page
            .borrow()
            .links
            .iter()
            .filter(|(_, element)| element.classes.contains(class))
            .filter_map(|(href, _)| href.clone())
            .collect()
    }

    pub(crate) fn visible_count(&self, class: &str) -> usize {
        self.page
            .borrow()
            .animated
            .iter()
            .filter(|element| element.classes.contains(class))
            .count()
    }

    pub(crate) fn attribute(&self, landmark: Landmark, name: &str) -> Option<String> {
        self.page
            .borrow()
            .landmarks
            .get(&landmark)
            .and_then(|element| element.attributes.get(name).cloned())
    }

    pub(crate) fn root_style(&self, name: &str) -> Option<String> {
        self.page.borrow().root_style.get(name).cloned()
    }

    pub(crate) fn scrolls(&self) -> Vec<(f64, bool)> {
        self.page.borrow().scrolls.clone()
    }

    fn with_element<T>(
        &self,
        target: ClassTarget,
        f: impl FnOnce(&mut MemoryElement) -> T,
    ) -> Option<T> {
        let mut page = self.page.borrow_mut();
        let element = match target {
            ClassTarget::Landmark(landmark) => page.landmarks.get_mut(&landmark),
            ClassTarget::NavLink(idx) => page.links.get_mut(idx).map(|(_, element)| element),
            ClassTarget::Animated(idx) => page.animated.get_mut(idx),
        }?;
        Some(f(element))
    }
}

impl PageDom for MemoryDom {
    fn scroll_offset(&self) -> f64 {
        self.page.borrow().scroll_y
    }

    fn navbar_height(&self) -> Option<f64> {
        let page = self.page.borrow();
        page.landmarks
            .contains_key(&Landmark::Navbar)
            .then_some(page.navbar_height)
    }

    fn sections(&self) -> Vec<SectionGeometry> {
        self.page.borrow().sections.clone()
    }

    fn nav_link_hrefs(&self) -> Vec<Option<String>> {
        self.page
            .borrow()
            .links
            .iter()
            .map(|(href, _)| href.clone())
            .collect()
    }

    fn animated_count(&self) -> usize {
        self.page.borrow().animated.len()
    }

    fn has_class(&self, target: ClassTarget, class: &str) -> Option<bool> {
        self.with_element(target, |element| element.classes.contains(class))
    }

    fn set_class(&self, target: ClassTarget, class: &str, enabled: bool) -> Result<()> {
        let changed = self
            .with_element(target, |element| {
                if enabled {
                    element.classes.insert(class.to_string())
                } else {
                    element.classes.remove(class)
                }
            })
            .unwrap_or(false);
        if changed {
            self.mutations.set(self.mutations.get() + 1);
        }
        Ok(())
    }

    fn set_attribute(&self, landmark: Landmark, name: &str, value: &str) -> Result<()> {
        if let Some(element) = self.page.borrow_mut().landmarks.get_mut(&landmark) {
            element
                .attributes
                .insert(name.to_string(), value.to_string());
        }
        Ok(())
    }

    fn element_viewport_top(&self, id: &str) -> Option<f64> {
        let page = self.page.borrow();
        page.sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.top - page.scroll_y)
    }

    fn scroll_window_to(&self, top: f64, smooth: bool) -> Result<()> {
        self.page.borrow_mut().scrolls.push((top, smooth));
        Ok(())
    }

    fn set_root_style_property(&self, name: &str, value: &str) -> Result<()> {
        self.page
            .borrow_mut()
            .root_style
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}

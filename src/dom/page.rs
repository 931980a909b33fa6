//! The elements the runtime works with, found once at boot.
//!
//! `Page` resolves every [`Target`] to a live element and performs the
//! node-level mutations (error messages, banners, form reset). Missing
//! elements are skipped silently; that is how absent page sections no-op.
//! A selector the browser rejects only empties its own component.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, Node};

use super::DomError;
use crate::config::{Config, FormConfig};
use crate::effect::{BannerId, Target};
use crate::event::{FormField, FormValues};
use crate::layout::PageLayout;
use crate::skills::parse_level;

/// Live elements for every component.
pub struct Page {
    document: Document,
    pub hamburger: Option<Element>,
    pub nav_links: Option<Element>,
    pub nav_items: Vec<Element>,
    pub skill_bars: Vec<Element>,
    pub filter_buttons: Vec<Element>,
    pub cards: Vec<Element>,
    pub form: Option<HtmlFormElement>,
    fields: [Option<Element>; 4],
    pub reveal_items: Vec<Element>,
    banners: HashMap<BannerId, Element>,
}

impl Page {
    /// Query the document for everything `config` describes.
    ///
    /// Each component is scanned on its own; one whose selectors the browser
    /// rejects is logged and comes back empty.
    #[must_use]
    pub fn scan(document: Document, config: &Config) -> Self {
        let nav = &config.nav;
        let (hamburger, nav_links, nav_items) = found("navigation", || {
            Ok((
                query_one(&document, &nav.hamburger)?,
                query_one(&document, &nav.links)?,
                query_all(&document, &nav.items)?,
            ))
        });
        let skill_bars = found("skills", || query_all(&document, &config.skills.selector));
        let (filter_buttons, cards) = found("project filter", || {
            Ok((
                query_all(&document, &config.filter.button_selector)?,
                query_all(&document, &config.filter.card_selector)?,
            ))
        });
        let form = document
            .get_element_by_id(&config.form.form_id)
            .and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned());
        let ids = &config.form.fields;
        let fields = [&ids.name, &ids.email, &ids.subject, &ids.message].map(|id| document.get_element_by_id(id));
        let reveal_items = found("scroll reveal", || query_all(&document, &config.reveal.selector()));

        Self {
            document,
            hamburger,
            nav_links,
            nav_items,
            skill_bars,
            filter_buttons,
            cards,
            form,
            fields,
            reveal_items,
            banners: HashMap::new(),
        }
    }

    /// Describe what was found for [`crate::store::UiStore::init`].
    #[must_use]
    pub fn layout(&self, config: &Config) -> PageLayout {
        PageLayout {
            has_hamburger: self.hamburger.is_some(),
            nav_open: self
                .nav_links
                .as_ref()
                .is_some_and(|el| el.class_list().contains(&config.nav.active_class)),
            skill_levels: self
                .skill_bars
                .iter()
                .map(|el| el.get_attribute(&config.skills.level_attr).as_deref().and_then(parse_level))
                .collect(),
            filter_values: self.filter_buttons.iter().map(|el| el.get_attribute(&config.filter.value_attr)).collect(),
            card_classes: self
                .cards
                .iter()
                .map(|el| el.class_name().split_whitespace().map(str::to_owned).collect())
                .collect(),
            has_form: self.form.is_some(),
            reveal_count: self.reveal_items.len(),
        }
    }

    /// The element `target` refers to, if it exists.
    #[must_use]
    pub fn element(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Hamburger => self.hamburger.as_ref(),
            Target::NavLinks => self.nav_links.as_ref(),
            Target::SkillBar(i) => self.skill_bars.get(i),
            Target::FilterButton(i) => self.filter_buttons.get(i),
            Target::ProjectCard(i) => self.cards.get(i),
            Target::Field(field) => self.field(field),
            Target::RevealItem(i) => self.reveal_items.get(i),
        }
    }

    #[must_use]
    pub fn field(&self, field: FormField) -> Option<&Element> {
        self.fields[field.index()].as_ref()
    }

    /// Current field values; a missing field reads as empty.
    #[must_use]
    pub fn form_values(&self) -> FormValues {
        let read = |field| self.field(field).map(field_value).unwrap_or_default();
        FormValues {
            name: read(FormField::Name),
            email: read(FormField::Email),
            subject: read(FormField::Subject),
            message: read(FormField::Message),
        }
    }

    /// Append an error message node to the field's parent.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the node cannot be created or attached.
    pub fn append_error(&self, field: FormField, message: &str, form: &FormConfig) -> Result<(), DomError> {
        let Some(parent) = self.field(field).and_then(|el| el.parent_node()) else {
            return Ok(());
        };
        let node = self.styled_div(&form.error_message_class, message, &form.error_style)?;
        parent.append_child(&node).map_err(|e| DomError::js("appendChild", e))?;
        Ok(())
    }

    /// Remove the first error message node under the field's parent.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the lookup selector is rejected.
    pub fn remove_error(&self, field: FormField, form: &FormConfig) -> Result<(), DomError> {
        let Some(parent) = self.field(field).and_then(|el| el.parent_element()) else {
            return Ok(());
        };
        let selector = format!(".{}", form.error_message_class);
        if let Some(existing) = parent.query_selector(&selector).map_err(|e| DomError::js("querySelector", e))? {
            existing.remove();
        }
        Ok(())
    }

    /// Insert a success banner right before the form.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::Js`] if the node cannot be created or inserted.
    pub fn insert_banner(&mut self, banner: BannerId, text: &str, form: &FormConfig) -> Result<(), DomError> {
        let Some(form_el) = self.form.as_ref() else {
            return Ok(());
        };
        let form_node: &Node = form_el;
        let Some(parent) = form_node.parent_node() else {
            return Ok(());
        };
        let node = self.styled_div(&form.success_class, text, &form.banner_style)?;
        parent
            .insert_before(&node, Some(form_node))
            .map_err(|e| DomError::js("insertBefore", e))?;
        self.banners.insert(banner, node);
        Ok(())
    }

    /// Detach a banner. Already detached or unknown banners are ignored.
    pub fn remove_banner(&mut self, banner: BannerId) {
        if let Some(node) = self.banners.remove(&banner) {
            node.remove();
        }
    }

    /// Restore the form's controls to their initial values.
    pub fn reset_form(&self) {
        if let Some(form) = &self.form {
            form.reset();
        }
    }

    fn styled_div(&self, class: &str, text: &str, style: &[(String, String)]) -> Result<Element, DomError> {
        let node = self
            .document
            .create_element("div")
            .map_err(|e| DomError::js("createElement", e))?;
        node.set_class_name(class);
        node.set_text_content(Some(text));
        for (property, value) in style {
            set_style(&node, property, value)?;
        }
        Ok(node)
    }
}

/// Write one inline style property. Elements without a style object are skipped.
///
/// # Errors
///
/// Returns [`DomError::Js`] if the browser rejects the write.
pub fn set_style(el: &Element, property: &str, value: &str) -> Result<(), DomError> {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return Ok(());
    };
    html.style()
        .set_property(property, value)
        .map_err(|e| DomError::js("style.setProperty", e))
}

fn field_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Elements for one component, or nothing if scanning it failed.
fn found<T: Default>(component: &str, scan: impl FnOnce() -> Result<T, DomError>) -> T {
    scan().unwrap_or_else(|err| {
        log::warn!("{component} skipped: {err}");
        T::default()
    })
}

fn query_one(document: &Document, selector: &str) -> Result<Option<Element>, DomError> {
    document
        .query_selector(selector)
        .map_err(|e| DomError::js("querySelector", e))
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| DomError::js("querySelectorAll", e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

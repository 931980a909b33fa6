//! Wires the page to the store: listeners, observers, timers, and effect application.
//!
//! ARCHITECTURE
//! ============
//! Every browser callback turns what it receives into an [`Event`], calls
//! [`Runtime::dispatch`], and the resulting effects are applied against the
//! [`Page`]. The store borrow is released before effects run, so an effect
//! that schedules a callback can never observe a held borrow. Callbacks hold
//! an `Rc<Runtime>` and are leaked on purpose: they live as long as the page.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::DomError;
use super::page::{Page, set_style};
use crate::config::Config;
use crate::effect::{Effect, Target};
use crate::event::{Event, Visibility};
use crate::store::UiStore;

/// Live page state: the store, the elements, and the two visibility observers.
pub struct Runtime {
    config: Config,
    store: RefCell<UiStore>,
    page: RefCell<Page>,
    skill_observer: RefCell<Option<IntersectionObserver>>,
    reveal_observer: RefCell<Option<IntersectionObserver>>,
}

impl Runtime {
    /// Scan `document`, initialize every component, and attach all listeners.
    ///
    /// Components run in order: navigation, skills, filter, form, scroll
    /// reveal. A component whose listeners or observer cannot be registered
    /// is logged and the rest are still wired.
    pub fn start(document: web_sys::Document, config: Config) -> Rc<Self> {
        let page = Page::scan(document, &config);
        let mut store = UiStore::new(config.clone());
        let initial = store.init(&page.layout(&config));

        let runtime = Rc::new(Self {
            config,
            store: RefCell::new(store),
            page: RefCell::new(page),
            skill_observer: RefCell::new(None),
            reveal_observer: RefCell::new(None),
        });
        runtime.apply(initial, None);

        let wired = [
            ("navigation", runtime.wire_nav()),
            ("skills", runtime.wire_skills()),
            ("project filter", runtime.wire_filter()),
            ("contact form", runtime.wire_form()),
            ("scroll reveal", runtime.wire_reveal()),
        ];
        for (component, result) in wired {
            if let Err(err) = result {
                log::warn!("{component} not wired: {err}");
            }
        }
        log::info!("portfolio interactivity ready");
        runtime
    }

    /// Feed one event to the store and apply what it returns.
    ///
    /// `source` is the DOM event being handled, if any; it is what
    /// [`Effect::PreventDefault`] acts on.
    pub fn dispatch(self: &Rc<Self>, event: Event, source: Option<&web_sys::Event>) {
        let effects = self.store.borrow_mut().dispatch(event);
        self.apply(effects, source);
    }

    fn apply(self: &Rc<Self>, effects: Vec<Effect>, source: Option<&web_sys::Event>) {
        for effect in effects {
            if let Err(err) = self.apply_one(effect, source) {
                log::warn!("effect not applied: {err}");
            }
        }
    }

    fn apply_one(self: &Rc<Self>, effect: Effect, source: Option<&web_sys::Event>) -> Result<(), DomError> {
        let form = &self.config.form;
        match effect {
            Effect::AddClass { target, class } => {
                if let Some(el) = self.page.borrow().element(target) {
                    el.class_list().add_1(&class).map_err(|e| DomError::js("classList.add", e))?;
                }
            }
            Effect::RemoveClass { target, class } => {
                if let Some(el) = self.page.borrow().element(target) {
                    el.class_list().remove_1(&class).map_err(|e| DomError::js("classList.remove", e))?;
                }
            }
            Effect::SetStyle { target, property, value } => {
                if let Some(el) = self.page.borrow().element(target) {
                    set_style(el, property, &value)?;
                }
            }
            Effect::Unobserve(target) => self.unobserve(target),
            Effect::RemoveErrorMessage(field) => self.page.borrow().remove_error(field, form)?,
            Effect::AppendErrorMessage { field, message } => self.page.borrow().append_error(field, &message, form)?,
            Effect::PreventDefault => {
                if let Some(event) = source {
                    event.prevent_default();
                }
            }
            Effect::InsertBanner { banner, text } => self.page.borrow_mut().insert_banner(banner, &text, form)?,
            Effect::ScheduleBannerRemoval { banner, delay_ms } => {
                let runtime = Rc::clone(self);
                Timeout::new(delay_ms, move || runtime.dispatch(Event::BannerExpired(banner), None)).forget();
            }
            Effect::RemoveBanner(banner) => self.page.borrow_mut().remove_banner(banner),
            Effect::ResetForm => self.page.borrow().reset_form(),
        }
        Ok(())
    }

    fn unobserve(&self, target: Target) {
        let observer = match target {
            Target::SkillBar(_) => &self.skill_observer,
            Target::RevealItem(_) => &self.reveal_observer,
            _ => return,
        };
        if let (Some(observer), Some(el)) = (observer.borrow().as_ref(), self.page.borrow().element(target)) {
            observer.unobserve(el);
        }
    }

    // --- Wiring ---

    fn wire_nav(self: &Rc<Self>) -> Result<(), DomError> {
        let page = self.page.borrow();
        let Some(hamburger) = page.hamburger.as_ref() else {
            return Ok(());
        };
        self.listen(hamburger, "click", |_, _| Some(Event::HamburgerClicked))?;
        for item in &page.nav_items {
            self.listen(item, "click", |_, _| Some(Event::NavLinkClicked))?;
        }
        Ok(())
    }

    fn wire_skills(self: &Rc<Self>) -> Result<(), DomError> {
        let bars = self.page.borrow().skill_bars.clone();
        let observer = self.observe(bars, self.config.skills.threshold, Event::SkillVisibility)?;
        *self.skill_observer.borrow_mut() = observer;
        Ok(())
    }

    fn wire_filter(self: &Rc<Self>) -> Result<(), DomError> {
        let page = self.page.borrow();
        if page.filter_buttons.is_empty() || page.cards.is_empty() {
            return Ok(());
        }
        for (index, button) in page.filter_buttons.iter().enumerate() {
            self.listen(button, "click", move |_, _| Some(Event::FilterClicked(index)))?;
        }
        Ok(())
    }

    fn wire_form(self: &Rc<Self>) -> Result<(), DomError> {
        let page = self.page.borrow();
        let Some(form) = page.form.as_ref() else {
            return Ok(());
        };
        self.listen(form, "submit", |runtime, _| Some(Event::FormSubmitted(runtime.page.borrow().form_values())))
    }

    fn wire_reveal(self: &Rc<Self>) -> Result<(), DomError> {
        let items = self.page.borrow().reveal_items.clone();
        let observer = self.observe(items, self.config.reveal.threshold, Event::RevealVisibility)?;
        *self.reveal_observer.borrow_mut() = observer;
        Ok(())
    }

    fn listen<F>(self: &Rc<Self>, target: &EventTarget, kind: &str, to_event: F) -> Result<(), DomError>
    where
        F: Fn(&Runtime, &web_sys::Event) -> Option<Event> + 'static,
    {
        let runtime = Rc::clone(self);
        let cb = Closure::wrap(Box::new(move |ev: web_sys::Event| {
            if let Some(event) = to_event(runtime.as_ref(), &ev) {
                runtime.dispatch(event, Some(&ev));
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        target
            .add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())
            .map_err(|e| DomError::js("addEventListener", e))?;
        cb.forget();
        Ok(())
    }

    /// Observe `elements` at `threshold`, mapping each entry through `to_event`.
    ///
    /// Returns `None` without creating an observer when there is nothing to watch.
    fn observe(
        self: &Rc<Self>,
        elements: Vec<Element>,
        threshold: f64,
        to_event: fn(Visibility) -> Event,
    ) -> Result<Option<IntersectionObserver>, DomError> {
        if elements.is_empty() {
            return Ok(None);
        }

        let runtime = Rc::clone(self);
        let targets = elements.clone();
        let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = targets.iter().position(|el| *el == target) else {
                    continue;
                };
                let visibility = Visibility::new(index, entry.intersection_ratio(), entry.is_intersecting());
                runtime.dispatch(to_event(visibility), None);
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)
            .map_err(|e| DomError::js("new IntersectionObserver", e))?;
        cb.forget();

        for el in &elements {
            observer.observe(el);
        }
        Ok(Some(observer))
    }
}

//! Wires `.copy-button` triggers to copy the adjacent code block.
//!
//! Discovery runs once after hydration; triggers added to the document later
//! are not picked up. Each trigger owns a cancellable restore timer, so a
//! rapid second click extends the confirmation window instead of letting the
//! first timer reset the label early. The confirmation label is only shown
//! when the clipboard write actually succeeded.

/// Selector that marks a clickable copy trigger.
pub const TRIGGER_SELECTOR: &str = ".copy-button";

/// Label shown while a trigger is waiting to be clicked.
pub const IDLE_LABEL: &str = "Copy code";

/// Label (markup) shown after a verified copy.
pub const CONFIRMED_LABEL_HTML: &str = "<i>Copied</i>";

/// How long the confirmation label stays up.
pub const CONFIRM_MILLIS: u32 = 2_000;

#[cfg(feature = "hydrate")]
mod hydrate {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, HtmlElement};

    use super::{CONFIRM_MILLIS, CONFIRMED_LABEL_HTML, IDLE_LABEL, TRIGGER_SELECTOR};
    use crate::clipboard::{self, CopyError};

    /// Copy strategy. Injectable so tests can record writes instead of
    /// touching the real clipboard.
    pub type Copier = Rc<dyn Fn(&Document, &str) -> Result<(), CopyError>>;

    thread_local! {
        static WIRED: Cell<bool> = const { Cell::new(false) };
    }

    /// Find every trigger currently in `document` and attach click handlers.
    ///
    /// Idempotent per page load: a second call attaches nothing and reports
    /// zero triggers, so re-entry cannot double-wire a button.
    pub fn wire_document(document: &Document) -> Result<usize, CopyError> {
        if WIRED.replace(true) {
            return Ok(0);
        }
        let copier: Copier = Rc::new(clipboard::copy_to_clipboard);
        wire_triggers(document, collect_triggers(document)?, copier)
    }

    /// Triggers currently present, in document order.
    pub fn collect_triggers(document: &Document) -> Result<Vec<HtmlElement>, CopyError> {
        let list = document.query_selector_all(TRIGGER_SELECTOR)?;
        let mut triggers = Vec::with_capacity(list.length() as usize);
        for idx in 0..list.length() {
            if let Some(node) = list.get(idx) {
                if let Ok(trigger) = node.dyn_into::<HtmlElement>() {
                    triggers.push(trigger);
                }
            }
        }
        Ok(triggers)
    }

    /// Attach a click handler to each given trigger. Returns how many were
    /// wired. An empty set is a successful no-op.
    pub fn wire_triggers(
        document: &Document,
        triggers: Vec<HtmlElement>,
        copier: Copier,
    ) -> Result<usize, CopyError> {
        let count = triggers.len();
        for trigger in triggers {
            wire_one(document, trigger, Rc::clone(&copier))?;
        }
        Ok(count)
    }

    fn wire_one(document: &Document, trigger: HtmlElement, copier: Copier) -> Result<(), CopyError> {
        let document = document.clone();
        // One pending restore per trigger; replacing the handle drops (and
        // thereby cancels) the previous timer, so the newest click owns the
        // revert.
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let target = trigger.clone();
        let handler = Closure::<dyn FnMut()>::new(move || {
            if let Err(err) = handle_click(&document, &target, &pending, &copier) {
                web_sys::console::warn_1(&format!("[copy] {err}").into());
            }
        });
        trigger.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        // Listener lives for the page's lifetime.
        handler.forget();
        Ok(())
    }

    fn handle_click(
        document: &Document,
        trigger: &HtmlElement,
        pending: &Rc<RefCell<Option<Timeout>>>,
        copier: &Copier,
    ) -> Result<(), CopyError> {
        let code_text = adjacent_code_text(trigger)?;
        (**copier)(document, &code_text)?;

        trigger.set_inner_html(CONFIRMED_LABEL_HTML);
        let restore_target = trigger.clone();
        let timer = Timeout::new(CONFIRM_MILLIS, move || {
            restore_target.set_inner_html(IDLE_LABEL);
        });
        drop(pending.borrow_mut().replace(timer));
        Ok(())
    }

    /// Rendered text of the `<code>` element nested in the trigger's next
    /// sibling, exactly as displayed (line breaks included, no trimming).
    pub fn adjacent_code_text(trigger: &HtmlElement) -> Result<String, CopyError> {
        let container = trigger
            .next_element_sibling()
            .ok_or(CopyError::MissingCodeBlock)?;
        let code = container
            .query_selector("code")?
            .ok_or(CopyError::MissingCodeBlock)?;
        let code: &HtmlElement = code.dyn_ref().ok_or(CopyError::MissingCodeBlock)?;
        Ok(code.inner_text())
    }
}

#[cfg(feature = "hydrate")]
pub use hydrate::*;

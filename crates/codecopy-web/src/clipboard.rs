//! Clipboard write via a transient staging element.
//!
//! The async Clipboard API only works in secure contexts, so the write goes
//! through a temporary off-screen `<textarea>`: append, select, issue the
//! copy command, remove. The staging element is removed before the call
//! returns whether or not the copy succeeded, so no DOM artifacts outlive it.

use thiserror::Error;

/// Failures surfaced by the copy pipeline.
///
/// Variants are plain data so they can be asserted on from native tests;
/// only the producers are WASM-gated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CopyError {
    /// The trigger has no following sibling wrapping a `<code>` element.
    #[error("no code block found next to the trigger")]
    MissingCodeBlock,
    /// The platform refused the copy command.
    #[error("clipboard write rejected by the platform")]
    ClipboardRejected,
    /// An underlying DOM call failed.
    #[error("dom operation failed: {0}")]
    Dom(String),
}

#[cfg(feature = "hydrate")]
mod hydrate {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, HtmlDocument, HtmlTextAreaElement};

    use super::CopyError;

    impl From<JsValue> for CopyError {
        fn from(value: JsValue) -> Self {
            CopyError::Dom(format!("{value:?}"))
        }
    }

    /// Write `text` to the system clipboard synchronously.
    ///
    /// Ok only when the platform reported the copy command as executed.
    pub fn copy_to_clipboard(document: &Document, text: &str) -> Result<(), CopyError> {
        let body = document
            .body()
            .ok_or_else(|| CopyError::Dom("document has no body".into()))?;
        let staging = create_staging(document, text)?;
        body.append_child(&staging)?;
        staging.select();

        let result = exec_copy(document);
        // Must happen on the error path too.
        staging.remove();
        result
    }

    fn create_staging(document: &Document, text: &str) -> Result<HtmlTextAreaElement, CopyError> {
        let staging: HtmlTextAreaElement = document
            .create_element("textarea")?
            .dyn_into()
            .map_err(|_| CopyError::Dom("textarea did not cast to HtmlTextAreaElement".into()))?;
        staging.set_value(text);
        // Fixed positioning keeps the page from scrolling to the element.
        staging.style().set_property("position", "fixed")?;
        staging.style().set_property("top", "0")?;
        staging.style().set_property("left", "-9999px")?;
        Ok(staging)
    }

    fn exec_copy(document: &Document) -> Result<(), CopyError> {
        let html_doc: &HtmlDocument = document
            .dyn_ref()
            .ok_or_else(|| CopyError::Dom("document is not an HtmlDocument".into()))?;
        match html_doc.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(CopyError::ClipboardRejected),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(feature = "hydrate")]
pub use hydrate::*;

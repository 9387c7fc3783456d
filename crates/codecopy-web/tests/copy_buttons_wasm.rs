//! Browser-side tests for the copy-button wiring. Run with wasm-pack or
//! `cargo test --target wasm32-unknown-unknown --features hydrate` under a
//! wasm test runner.

#![cfg(all(target_arch = "wasm32", feature = "hydrate"))]

use std::cell::RefCell;
use std::rc::Rc;

use codecopy_web::clipboard::{self, CopyError};
use codecopy_web::copy_buttons::{
    self, CONFIRMED_LABEL_HTML, Copier, IDLE_LABEL, adjacent_code_text, wire_triggers,
};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mount a trigger + container pair and return the trigger.
fn mount_block(doc: &Document, code: &str) -> HtmlElement {
    let wrapper = doc.create_element("div").unwrap();
    wrapper.set_inner_html(
        "<button class=\"copy-button\">Copy code</button><pre><code></code></pre>",
    );
    wrapper
        .query_selector("code")
        .unwrap()
        .unwrap()
        .set_text_content(Some(code));
    doc.body().unwrap().append_child(&wrapper).unwrap();
    wrapper
        .query_selector(".copy-button")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

/// A copier that records every write instead of touching the clipboard.
fn recording_copier(log: Rc<RefCell<Vec<String>>>) -> Copier {
    Rc::new(move |_doc: &Document, text: &str| {
        log.borrow_mut().push(text.to_owned());
        Ok(())
    })
}

#[wasm_bindgen_test]
async fn click_copies_text_and_reverts_label() {
    let doc = document();
    let trigger = mount_block(&doc, "print(1)");
    let log = Rc::new(RefCell::new(Vec::new()));
    let wired = wire_triggers(&doc, vec![trigger.clone()], recording_copier(Rc::clone(&log)))
        .unwrap();
    assert_eq!(wired, 1);

    trigger.click();
    assert_eq!(*log.borrow(), vec!["print(1)".to_owned()]);
    assert_eq!(trigger.inner_html(), CONFIRMED_LABEL_HTML);

    TimeoutFuture::new(2_100).await;
    assert_eq!(trigger.inner_html(), IDLE_LABEL);
}

#[wasm_bindgen_test]
fn zero_triggers_is_a_successful_no_op() {
    let doc = document();
    let log = Rc::new(RefCell::new(Vec::new()));
    let wired = wire_triggers(&doc, Vec::new(), recording_copier(Rc::clone(&log))).unwrap();
    assert_eq!(wired, 0);
    assert!(log.borrow().is_empty());
}

#[wasm_bindgen_test]
fn last_write_wins_and_labels_are_independent() {
    let doc = document();
    let trigger_a = mount_block(&doc, "A");
    let trigger_b = mount_block(&doc, "B");
    let log = Rc::new(RefCell::new(Vec::new()));
    wire_triggers(
        &doc,
        vec![trigger_a.clone(), trigger_b.clone()],
        recording_copier(Rc::clone(&log)),
    )
    .unwrap();

    trigger_b.click();
    trigger_a.click();
    assert_eq!(*log.borrow(), vec!["B".to_owned(), "A".to_owned()]);
    assert_eq!(trigger_a.inner_html(), CONFIRMED_LABEL_HTML);
    assert_eq!(trigger_b.inner_html(), CONFIRMED_LABEL_HTML);
}

#[wasm_bindgen_test]
fn missing_code_block_copies_nothing() {
    let doc = document();
    let wrapper = doc.create_element("div").unwrap();
    wrapper.set_inner_html("<button class=\"copy-button\">Copy code</button><div></div>");
    doc.body().unwrap().append_child(&wrapper).unwrap();
    let trigger: HtmlElement = wrapper
        .query_selector(".copy-button")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    assert_eq!(
        adjacent_code_text(&trigger),
        Err(CopyError::MissingCodeBlock)
    );

    let log = Rc::new(RefCell::new(Vec::new()));
    wire_triggers(&doc, vec![trigger.clone()], recording_copier(Rc::clone(&log))).unwrap();
    trigger.click();
    assert!(log.borrow().is_empty(), "no clipboard write on structural violation");
    assert_eq!(trigger.inner_html(), IDLE_LABEL, "label stays idle");
}

#[wasm_bindgen_test]
fn rejected_copy_keeps_idle_label() {
    let doc = document();
    let trigger = mount_block(&doc, "secret");
    let copier: Copier = Rc::new(|_doc, _text| Err(CopyError::ClipboardRejected));
    wire_triggers(&doc, vec![trigger.clone()], copier).unwrap();

    trigger.click();
    assert_eq!(trigger.inner_html(), IDLE_LABEL);
}

#[wasm_bindgen_test]
async fn reclick_extends_the_confirmation_window() {
    let doc = document();
    let trigger = mount_block(&doc, "again");
    let log = Rc::new(RefCell::new(Vec::new()));
    wire_triggers(&doc, vec![trigger.clone()], recording_copier(log)).unwrap();

    trigger.click();
    TimeoutFuture::new(1_200).await;
    trigger.click();

    // 2.4s after the first click; its timer was cancelled by the second.
    TimeoutFuture::new(1_200).await;
    assert_eq!(trigger.inner_html(), CONFIRMED_LABEL_HTML);

    TimeoutFuture::new(1_000).await;
    assert_eq!(trigger.inner_html(), IDLE_LABEL);
}

#[wasm_bindgen_test]
fn text_is_copied_byte_for_byte() {
    let doc = document();
    let code = "line one\n  line two\n\tline three";
    let trigger = mount_block(&doc, code);
    assert_eq!(adjacent_code_text(&trigger).unwrap(), code);
}

#[wasm_bindgen_test]
fn staging_element_never_outlives_the_call() {
    let doc = document();
    let body = doc.body().unwrap();
    let before = body.child_element_count();
    // The copy command may be rejected in a headless browser; cleanup must
    // happen either way.
    let _ = clipboard::copy_to_clipboard(&doc, "anything");
    assert_eq!(body.child_element_count(), before);
}

#[wasm_bindgen_test]
fn document_wiring_is_idempotent() {
    let doc = document();
    mount_block(&doc, "once");
    let first = copy_buttons::wire_document(&doc).unwrap();
    let second = copy_buttons::wire_document(&doc).unwrap();
    assert!(first >= 1);
    assert_eq!(second, 0, "re-wiring must not attach duplicate handlers");
}

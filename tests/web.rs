// Browser tests for the DOM glue. Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use taigi_daily::web::{CompletionSink, WebClipboard, mount, mount_with};
use taigi_daily::{
    ClipboardWriter, Mode, NoticeLevel, SpeechOptions, SpeechOutcome, SpeechSynthesizer,
    SpeechTicket, WidgetConfig, WidgetError,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn config(mount_id: &str) -> WidgetConfig {
    WidgetConfig {
        mount_id: mount_id.to_string(),
        alert_notices: false,
        ..WidgetConfig::default()
    }
}

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn part(mount_id: &str, class: &str) -> HtmlElement {
    document()
        .get_element_by_id(mount_id)
        .unwrap()
        .query_selector(class)
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

/// Records tickets and optionally reports an outcome from inside `speak`.
struct HeldVoice {
    sink: CompletionSink,
    tickets: Rc<RefCell<Vec<SpeechTicket>>>,
    finish_with: Option<SpeechOutcome>,
}

impl SpeechSynthesizer for HeldVoice {
    fn cancel_all(&self) {}

    fn speak(&self, _text: &str, _options: &SpeechOptions, ticket: SpeechTicket) -> Result<(), WidgetError> {
        self.tickets.borrow_mut().push(ticket);
        if let Some(outcome) = self.finish_with.clone() {
            (self.sink)(ticket, outcome);
        }
        Ok(())
    }
}

type Mounted = (
    Rc<RefCell<taigi_daily::web::Widget>>,
    Rc<RefCell<Vec<SpeechTicket>>>,
    Rc<RefCell<Option<CompletionSink>>>,
);

fn mount_held(mount_id: &str, finish_with: Option<SpeechOutcome>) -> Mounted {
    let tickets = Rc::new(RefCell::new(Vec::new()));
    let sink_slot = Rc::new(RefCell::new(None));
    let (t, slot) = (tickets.clone(), sink_slot.clone());
    let widget = mount_with(config(mount_id), move |_win, sink| {
        *slot.borrow_mut() = Some(sink.clone());
        Some(Box::new(HeldVoice { sink, tickets: t, finish_with }) as Box<dyn SpeechSynthesizer>)
    })
    .unwrap();
    (widget, tickets, sink_slot)
}

#[wasm_bindgen_test]
fn mount_creates_root_and_renders_daily_word() {
    let widget = mount(config("td-test-mount")).unwrap();
    let word = part("td-test-mount", ".td-word");

    let w = widget.borrow();
    assert_eq!(w.controller().state().mode(), Mode::Daily);
    assert_eq!(
        word.text_content().as_deref(),
        Some(w.controller().current().unwrap().word)
    );
    assert!(w.last_notice().is_none());
}

#[wasm_bindgen_test]
fn info_button_toggles_panel() {
    let widget = mount(config("td-test-info")).unwrap();
    let toggle = part("td-test-info", ".td-info-toggle");

    toggle.click();
    assert!(widget.borrow().controller().state().info_expanded());
    toggle.click();
    assert!(!widget.borrow().controller().state().info_expanded());
}

#[wasm_bindgen_test]
fn speak_without_synthesizer_reports_unsupported() {
    let widget = mount(WidgetConfig {
        speech_enabled: false,
        ..config("td-test-nospeech")
    })
    .unwrap();

    part("td-test-nospeech", ".td-speak").click();

    let w = widget.borrow();
    let notice = w.last_notice().unwrap();
    assert_eq!(notice.cause(), Some(&WidgetError::SpeechUnsupported));
    assert!(!w.controller().state().speaking());
    assert_eq!(
        part("td-test-nospeech", ".td-notice").text_content().as_deref(),
        Some(notice.message.as_str())
    );
}

#[wasm_bindgen_test]
fn stale_completion_leaves_newer_request_speaking() {
    let (widget, tickets, sink) = mount_held("td-test-stale", None);
    let speak = part("td-test-stale", ".td-speak");

    speak.click();
    speak.click();
    let issued = tickets.borrow().clone();
    assert_eq!(issued.len(), 2);
    assert!(widget.borrow().controller().state().speaking());

    let sink = sink.borrow().clone().unwrap();
    sink(issued[0], SpeechOutcome::Failed("interrupted".into()));
    assert!(widget.borrow().controller().state().speaking());
    assert!(widget.borrow().last_notice().is_none());
    assert_eq!(speak.get_attribute("data-speaking").as_deref(), Some(""));

    sink(issued[1], SpeechOutcome::Finished);
    assert!(!widget.borrow().controller().state().speaking());
    assert!(!speak.has_attribute("data-speaking"));
}

#[wasm_bindgen_test]
fn completion_during_click_is_settled_after_it() {
    let (widget, tickets, _) = mount_held("td-test-sync", Some(SpeechOutcome::Finished));

    part("td-test-sync", ".td-speak").click();

    assert_eq!(tickets.borrow().len(), 1);
    assert!(!widget.borrow().controller().state().speaking());
    assert!(widget.borrow().last_notice().is_none());
}

#[wasm_bindgen_test]
fn failure_during_click_still_reaches_the_user() {
    let (widget, _, _) = mount_held("td-test-syncfail", Some(SpeechOutcome::Failed("synthesis-failed".into())));

    part("td-test-syncfail", ".td-speak").click();

    let w = widget.borrow();
    assert!(!w.controller().state().speaking());
    assert!(matches!(
        w.last_notice().and_then(|n| n.cause()),
        Some(WidgetError::SpeechPlayback(_))
    ));
}

#[wasm_bindgen_test]
fn refused_copy_is_a_clipboard_error() {
    // A document without a browsing context never runs editing commands.
    let detached = document().implementation().unwrap().create_html_document().unwrap();
    let err = WebClipboard::new(detached).write("紅吱吱").unwrap_err();
    assert!(matches!(err, WidgetError::ClipboardWrite(_)));
}

#[wasm_bindgen_test]
fn share_click_always_leaves_a_notice() {
    let widget = mount(config("td-test-share")).unwrap();

    part("td-test-share", ".td-share").click();

    let w = widget.borrow();
    let notice = w.last_notice().unwrap();
    match notice.level {
        NoticeLevel::Info => assert_eq!(notice.message, taigi_daily::controller::SHARE_COPIED),
        NoticeLevel::Warning => {
            assert!(matches!(notice.cause(), Some(WidgetError::ClipboardWrite(_))))
        }
    }
    assert_eq!(
        part("td-test-share", ".td-notice").text_content().as_deref(),
        Some(notice.message.as_str())
    );
    assert!(document().query_selector("textarea").unwrap().is_none());
}

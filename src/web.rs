//! Browser glue: builds the card DOM, wires the buttons to controller
//! transitions, and provides the clipboard and speech adapters.
//!
//! Only the functions reachable from `start_widget()` touch `window()`; the
//! module still compiles natively so the crate can be tested on the host.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, HtmlDocument, HtmlElement, HtmlTextAreaElement, MouseEvent, SpeechSynthesis,
    SpeechSynthesisUtterance, Window, window,
};

use crate::catalog::Catalog;
use crate::config::WidgetConfig;
use crate::controller::{Notice, ViewController};
use crate::daily::local_today;
use crate::error::{Result, WidgetError};
use crate::host::{ClipboardWriter, SpeechOptions, SpeechOutcome, SpeechSynthesizer, SpeechTicket};
use crate::random::OsRandom;
use crate::view::{self, CardView};

fn js_reason(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn dom_err(value: JsValue) -> WidgetError {
    WidgetError::Dom(js_reason(&value))
}

// --- Clipboard ---------------------------------------------------------------

/// Copies through a throwaway `<textarea>` and `execCommand("copy")`, which
/// works synchronously and without a permission prompt.
pub struct WebClipboard {
    document: Document,
}

impl WebClipboard {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ClipboardWriter for WebClipboard {
    fn write(&self, text: &str) -> Result<()> {
        let fail = |reason: String| WidgetError::ClipboardWrite(reason);
        let body = self
            .document
            .body()
            .ok_or_else(|| fail("document has no body".into()))?;
        let area: HtmlTextAreaElement = self
            .document
            .create_element("textarea")
            .map_err(|e| fail(js_reason(&e)))?
            .dyn_into()
            .map_err(|_| fail("textarea cast failed".into()))?;
        area.set_value(text);
        body.append_child(&area).map_err(|e| fail(js_reason(&e)))?;
        area.select();
        let copied = match self.document.dyn_ref::<HtmlDocument>() {
            Some(html) => html.exec_command("copy").map_err(|e| fail(js_reason(&e))),
            None => Err(fail("not an html document".into())),
        };
        body.remove_child(&area).ok();
        match copied? {
            true => Ok(()),
            false => Err(fail("copy command was refused".into())),
        }
    }
}

// --- Speech ------------------------------------------------------------------

/// Receives the outcome of every utterance, stale or not.
pub type CompletionSink = Rc<dyn Fn(SpeechTicket, SpeechOutcome)>;

// Completions that arrived while a click handler held the widget.
type Deferred = Rc<RefCell<Vec<(SpeechTicket, SpeechOutcome)>>>;

pub struct WebSpeech {
    synth: SpeechSynthesis,
    on_complete: CompletionSink,
}

impl WebSpeech {
    /// `None` when the browser has no `speechSynthesis`.
    pub fn detect(window: &Window, on_complete: CompletionSink) -> Option<Self> {
        let synth = window.speech_synthesis().ok()?;
        if synth.is_undefined() || synth.is_null() {
            return None;
        }
        Some(Self { synth, on_complete })
    }
}

impl SpeechSynthesizer for WebSpeech {
    fn cancel_all(&self) {
        self.synth.cancel();
    }

    fn speak(&self, text: &str, options: &SpeechOptions, ticket: SpeechTicket) -> Result<()> {
        let utterance = SpeechSynthesisUtterance::new_with_text(text)
            .map_err(|e| WidgetError::SpeechPlayback(js_reason(&e)))?;
        utterance.set_lang(&options.language_hint);
        utterance.set_rate(options.rate);

        let sink = self.on_complete.clone();
        let on_end = Closure::once_into_js(move || sink(ticket, SpeechOutcome::Finished));
        let sink = self.on_complete.clone();
        let on_error = Closure::once_into_js(move |event: JsValue| {
            sink(ticket, SpeechOutcome::Failed(js_reason(&event)))
        });
        utterance.set_onend(Some(on_end.unchecked_ref()));
        utterance.set_onerror(Some(on_error.unchecked_ref()));

        self.synth.speak(&utterance);
        Ok(())
    }
}

// --- Card DOM ----------------------------------------------------------------

struct Elements {
    card: HtmlElement,
    romaji: HtmlElement,
    mode_label: HtmlElement,
    day: HtmlElement,
    category: HtmlElement,
    word: HtmlElement,
    short_meaning: HtmlElement,
    speak: HtmlElement,
    sentence: HtmlElement,
    meaning: HtmlElement,
    info_toggle: HtmlElement,
    info_panel: HtmlElement,
    today: HtmlElement,
    random: HtmlElement,
    share: HtmlElement,
    notice: HtmlElement,
}

fn child(doc: &Document, parent: &HtmlElement, tag: &str, class: &str) -> Result<HtmlElement> {
    let el: HtmlElement = doc
        .create_element(tag)
        .map_err(dom_err)?
        .dyn_into()
        .map_err(|_| WidgetError::Dom(format!("<{tag}> is not an HtmlElement")))?;
    el.set_class_name(class);
    parent.append_child(&el).map_err(dom_err)?;
    Ok(el)
}

fn build_elements(doc: &Document, root: &HtmlElement) -> Result<Elements> {
    root.set_inner_html("");

    let card = child(doc, root, "div", "td-card")?;
    let romaji = child(doc, &card, "div", "td-romaji")?;
    romaji.style().set_property("writing-mode", "vertical-rl").ok();
    let header = child(doc, &card, "div", "td-header")?;
    let mode_label = child(doc, &header, "span", "td-mode")?;
    let day = child(doc, &header, "div", "td-day")?;
    let category = child(doc, &header, "div", "td-category")?;
    category.style().set_property("writing-mode", "vertical-rl").ok();
    let word = child(doc, &card, "h1", "td-word")?;
    let short_meaning = child(doc, &card, "div", "td-short-meaning")?;
    let speak = child(doc, &card, "button", "td-speak")?;
    speak.set_title(view::SPEAK_TOOLTIP);

    let details = child(doc, root, "div", "td-details")?;
    let sentence = child(doc, &details, "p", "td-sentence")?;
    sentence.style().set_property("writing-mode", "vertical-rl").ok();
    let meaning = child(doc, &details, "p", "td-meaning")?;

    let panel = child(doc, root, "div", "td-panel")?;
    let info_toggle = child(doc, &panel, "button", "td-info-toggle")?;
    let info_panel = child(doc, &panel, "p", "td-info")?;
    let controls = child(doc, &panel, "div", "td-controls")?;
    let today = child(doc, &controls, "button", "td-today")?;
    today.set_title("今日一詞");
    today.set_text_content(Some("今日"));
    let random = child(doc, &controls, "button", "td-random")?;
    random.set_title("隨機探索");
    random.set_text_content(Some("隨機"));
    let share = child(doc, &controls, "button", "td-share")?;
    share.set_text_content(Some(view::SHARE_LABEL));
    let notice = child(doc, &panel, "p", "td-notice")?;
    notice.set_attribute("role", "status").ok();

    let footer = child(doc, root, "div", "td-footer")?;
    footer.set_text_content(Some(view::FOOTER_LABEL));

    Ok(Elements {
        card,
        romaji,
        mode_label,
        day,
        category,
        word,
        short_meaning,
        speak,
        sentence,
        meaning,
        info_toggle,
        info_panel,
        today,
        random,
        share,
        notice,
    })
}

// --- Widget ------------------------------------------------------------------

/// Everything one mounted widget owns. Event handlers hold it behind
/// `Rc<RefCell<_>>`; the speech sink only holds a weak reference.
pub struct Widget {
    controller: ViewController<'static>,
    window: Window,
    elements: Elements,
    clipboard: WebClipboard,
    speech: Option<Box<dyn SpeechSynthesizer>>,
    rng: OsRandom,
    deferred: Deferred,
    last_notice: Option<Notice>,
}

impl Widget {
    pub fn controller(&self) -> &ViewController<'static> {
        &self.controller
    }

    /// The most recent notice shown to the user.
    pub fn last_notice(&self) -> Option<&Notice> {
        self.last_notice.as_ref()
    }

    fn notify(&mut self, notice: Notice) {
        self.elements.notice.set_text_content(Some(&notice.message));
        if self.controller.config().alert_notices {
            self.window.alert_with_message(&notice.message).ok();
        }
        self.last_notice = Some(notice);
    }

    /// Apply completions the speech sink had to set aside.
    fn settle_deferred(&mut self) {
        let queued = std::mem::take(&mut *self.deferred.borrow_mut());
        for (ticket, outcome) in queued {
            if let Some(notice) = self.controller.complete_speech(ticket, outcome) {
                self.notify(notice);
            }
        }
    }

    fn show_today(&mut self) {
        if let Err(notice) = self.controller.select_today(&local_today()) {
            self.notify(notice);
        }
    }

    fn show_random(&mut self) {
        if let Err(notice) = self.controller.select_random(&mut self.rng) {
            self.notify(notice);
        }
    }

    fn toggle_info(&mut self) {
        self.controller.toggle_info();
    }

    fn speak(&mut self) {
        if let Err(notice) = self.controller.request_speech(self.speech.as_deref()) {
            self.notify(notice);
        }
    }

    fn share(&mut self) {
        let notice = self.controller.share(Some(&self.clipboard));
        self.notify(notice);
    }

    fn render(&self) {
        let el = &self.elements;
        let Some(card) = CardView::build(&self.controller, &local_today()) else {
            el.word.set_text_content(Some(view::PLACEHOLDER_TEXT));
            for hidden in [&el.speak, &el.info_toggle, &el.random, &el.share] {
                hidden.style().set_property("display", "none").ok();
            }
            return;
        };

        let fg = card.foreground.text_color();
        let card_style = el.card.style();
        card_style.set_property("background-color", card.background).ok();
        card_style.set_property("color", fg).ok();
        el.category
            .style()
            .set_property("border-color", card.foreground.border_color())
            .ok();
        el.short_meaning
            .style()
            .set_property("border-color", card.foreground.border_color())
            .ok();

        el.romaji.set_text_content(Some(card.romaji));
        el.mode_label.set_text_content(Some(card.mode_label));
        el.day.set_text_content(Some(&format!("{}日", card.day_of_month)));
        el.category.set_text_content(Some(card.category));
        el.word.set_text_content(Some(card.word));
        el.short_meaning.set_text_content(Some(card.short_meaning));
        el.sentence.set_text_content(Some(&card.sentence));
        el.meaning.set_text_content(Some(&card.meaning_line));

        el.speak.set_text_content(Some(if card.speaking { "🔊" } else { "🎤" }));
        el.speak.toggle_attribute_with_force("data-speaking", card.speaking).ok();

        let chevron = if card.info_expanded { "▾" } else { "▸" };
        el.info_toggle
            .set_text_content(Some(&format!("{} {chevron}", view::INFO_TITLE)));
        el.info_panel.set_text_content(Some(card.desc));
        el.info_panel
            .style()
            .set_property("display", if card.info_expanded { "block" } else { "none" })
            .ok();

        el.today
            .toggle_attribute_with_force("data-active", card.daily_active)
            .ok();
    }
}

/// Hands speech outcomes to the widget behind `widget`. An outcome that
/// arrives while a transition holds the widget (a synchronous `onend` from
/// `cancel()` or `speak()`) is queued and settled once that handler finishes.
fn completion_sink(widget: Weak<RefCell<Widget>>, deferred: Deferred) -> CompletionSink {
    Rc::new(move |ticket: SpeechTicket, outcome: SpeechOutcome| {
        let Some(widget) = widget.upgrade() else {
            return;
        };
        let Ok(mut w) = widget.try_borrow_mut() else {
            log::debug!("deferring speech completion {}", ticket.generation());
            deferred.borrow_mut().push((ticket, outcome));
            return;
        };
        w.settle_deferred();
        if let Some(notice) = w.controller.complete_speech(ticket, outcome) {
            w.notify(notice);
        }
        w.render();
    })
}

fn on_click(target: &HtmlElement, widget: &Rc<RefCell<Widget>>, action: fn(&mut Widget)) {
    let widget = widget.clone();
    let handler = Closure::wrap(Box::new(move |event: MouseEvent| {
        event.stop_propagation();
        let mut w = widget.borrow_mut();
        action(&mut w);
        w.settle_deferred();
        w.render();
    }) as Box<dyn FnMut(MouseEvent)>);
    target.set_onclick(Some(handler.as_ref().unchecked_ref()));
    handler.forget();
}

/// Mount the widget into `config.mount_id` (created under `<body>` when
/// missing) and show today's entry. Speech uses the browser's
/// `speechSynthesis` unless `config.speech_enabled` is off.
pub fn mount(config: WidgetConfig) -> Result<Rc<RefCell<Widget>>> {
    let enabled = config.speech_enabled;
    mount_with(config, move |win, sink| {
        if !enabled {
            log::info!("speech disabled by configuration");
            return None;
        }
        let speech = WebSpeech::detect(win, sink);
        if speech.is_none() {
            log::info!("speechSynthesis unavailable; speak button will report unsupported");
        }
        speech.map(|s| Box::new(s) as Box<dyn SpeechSynthesizer>)
    })
}

/// Like [`mount`], with the speech adapter built by `speech` from the window
/// and the sink it must report completions to.
pub fn mount_with<F>(config: WidgetConfig, speech: F) -> Result<Rc<RefCell<Widget>>>
where
    F: FnOnce(&Window, CompletionSink) -> Option<Box<dyn SpeechSynthesizer>>,
{
    let win = window().ok_or_else(|| WidgetError::Dom("no window".into()))?;
    let doc = win
        .document()
        .ok_or_else(|| WidgetError::Dom("no document".into()))?;

    let root: HtmlElement = match doc.get_element_by_id(&config.mount_id) {
        Some(el) => el
            .dyn_into()
            .map_err(|_| WidgetError::Dom(format!("#{} is not an HtmlElement", config.mount_id)))?,
        None => {
            let body = doc.body().ok_or_else(|| WidgetError::Dom("no body".into()))?;
            let el = child(&doc, &body, "div", "td-root")?;
            el.set_id(&config.mount_id);
            el
        }
    };
    let elements = build_elements(&doc, &root)?;
    let controller = ViewController::new(Catalog::builtin(), config, &local_today());
    let deferred = Deferred::default();

    let widget = Rc::new_cyclic(|weak: &Weak<RefCell<Widget>>| {
        let speech = speech(&win, completion_sink(weak.clone(), deferred.clone()));
        RefCell::new(Widget {
            controller,
            window: win.clone(),
            elements,
            clipboard: WebClipboard::new(doc.clone()),
            speech,
            rng: OsRandom,
            deferred,
            last_notice: None,
        })
    });

    {
        let w = widget.borrow();
        let el = &w.elements;
        on_click(&el.today, &widget, Widget::show_today);
        on_click(&el.random, &widget, Widget::show_random);
        on_click(&el.info_toggle, &widget, Widget::toggle_info);
        on_click(&el.speak, &widget, Widget::speak);
        on_click(&el.share, &widget, Widget::share);
        w.render();
    }
    Ok(widget)
}

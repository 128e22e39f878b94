pub mod components;
pub mod config;
mod dom;
pub mod events;
pub mod host;
mod html;
pub mod timers;

use crate::components::{ContactSubmission, FormValidator, ImageCarousel, TextToggler};
use crate::dom::{NodeId, truncate_chars};
use crate::host::Document;
use crate::timers::ScheduledTask;

pub use crate::config::PageConfig;
pub use crate::events::{EventKind, EventState, Handler};
pub use crate::host::{EventSource, Host};
pub use crate::timers::{PendingTimer, TimerAction, TimerId};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("html parse error: {0}")]
    HtmlParse(String),
    #[error("selector not found: {0}")]
    SelectorNotFound(String),
    #[error("unsupported selector: {0}")]
    UnsupportedSelector(String),
    #[error("unsupported event: {0}")]
    UnsupportedEvent(String),
    #[error("element not found: #{0}")]
    ElementNotFound(String),
    #[error("type mismatch for {selector}: expected {expected}, actual {actual}")]
    TypeMismatch {
        selector: String,
        expected: String,
        actual: String,
    },
    #[error(
        "assertion failed for {selector}: expected {expected}, actual {actual}, snippet {dom_snippet}"
    )]
    AssertionFailed {
        selector: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("regex error: {0}")]
    Regex(String),
    #[error("config error: {0}")]
    Config(String),
}

/// Markup of the bundled page.
pub const DEFAULT_PAGE_HTML: &str = include_str!("../assets/index.html");

/// A loaded page with the text toggler, image carousel and contact form
/// wired to its elements.
///
/// User actions (`click`, `type_text`, `submit`) dispatch events exactly
/// like a browser would; timers only run when the virtual clock is advanced.
///
/// ```
/// use page_widgets::Page;
///
/// let mut page = Page::new()?;
/// page.click("#nextImage")?;
/// page.assert_attr("#carouselImage", "alt", "Carousel Image 2")?;
/// # Ok::<(), page_widgets::Error>(())
/// ```
#[derive(Debug)]
pub struct Page {
    document: Document,
    toggler: TextToggler,
    carousel: ImageCarousel,
    contact: FormValidator,
    initialized: bool,
}

impl Page {
    pub fn new() -> Result<Self> {
        Self::with_config(DEFAULT_PAGE_HTML, PageConfig::default())
    }

    pub fn from_html(html: &str) -> Result<Self> {
        Self::with_config(html, PageConfig::default())
    }

    pub fn with_config(html: &str, config: PageConfig) -> Result<Self> {
        config.validate()?;
        let dom = html::parse_html(html)?;
        let mut page = Self {
            document: Document::new(dom),
            toggler: TextToggler::new(&config.toggle),
            carousel: ImageCarousel::new(&config.carousel)?,
            contact: FormValidator::new(&config.contact)?,
            initialized: false,
        };

        page.document
            .listen_document(EventKind::DomContentLoaded, Handler::InitializePage);
        let root = page.document.dom.root();
        page.dispatch_event(root, EventKind::DomContentLoaded)?;
        Ok(page)
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.document.enable_trace(enabled);
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        self.document.take_trace_logs()
    }

    pub fn set_trace_events(&mut self, enabled: bool) {
        self.document.set_trace_events(enabled);
    }

    pub fn set_trace_timers(&mut self, enabled: bool) {
        self.document.set_trace_timers(enabled);
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        self.document.set_trace_log_limit(max_entries)
    }

    pub fn type_text(&mut self, selector: &str, text: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.is_inert(target) {
            return Ok(());
        }

        let tag = self
            .document
            .dom
            .tag_name(target)
            .unwrap_or_default()
            .to_ascii_lowercase();
        if tag != "input" && tag != "textarea" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input or textarea".into(),
                actual: tag,
            });
        }

        self.document.dom.set_value(target, text)?;
        self.dispatch_event(target, EventKind::Input)?;
        Ok(())
    }

    pub fn click(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.document.dom.attr(target, "disabled").is_some() {
            return Ok(());
        }

        let click_outcome = self.dispatch_event(target, EventKind::Click)?;
        if click_outcome.default_prevented() {
            return Ok(());
        }

        if self.is_submit_control(target) {
            if let Some(form) = self.document.dom.find_ancestor_by_tag(target, "form") {
                self.dispatch_event(form, EventKind::Submit)?;
            }
        }
        Ok(())
    }

    /// Submits the form `selector` names, or the form that contains it.
    pub fn submit(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let form = if self.document.dom.is_tag(target, "form") {
            Some(target)
        } else {
            self.document.dom.find_ancestor_by_tag(target, "form")
        };

        if let Some(form) = form {
            self.dispatch_event(form, EventKind::Submit)?;
        }
        Ok(())
    }

    pub fn dispatch(&mut self, selector: &str, event: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let kind =
            EventKind::parse(event).ok_or_else(|| Error::UnsupportedEvent(event.to_string()))?;
        self.dispatch_event(target, kind)?;
        Ok(())
    }

    pub fn now_ms(&self) -> i64 {
        self.document.now_ms
    }

    pub fn pending_timers(&self) -> Vec<PendingTimer> {
        self.document.timers.pending()
    }

    pub fn clear_timer(&mut self, timer_id: TimerId) -> bool {
        self.document.clear_timeout(timer_id)
    }

    pub fn clear_all_timers(&mut self) -> usize {
        let cleared = self.document.timers.clear_all();
        self.document.trace_timer_line(format!("[timer] clear_all cleared={cleared}"));
        cleared
    }

    pub fn advance_time(&mut self, delta_ms: i64) -> Result<()> {
        if delta_ms < 0 {
            return Err(Error::InvalidArgument(
                "advance_time requires non-negative milliseconds".into(),
            ));
        }
        let from = self.document.now_ms;
        self.document.now_ms = from.saturating_add(delta_ms);
        let ran = self.run_timer_queue(Some(self.document.now_ms), false)?;
        self.document.trace_timer_line(format!(
            "[timer] advance delta_ms={} from={} to={} ran_due={}",
            delta_ms, from, self.document.now_ms, ran
        ));
        Ok(())
    }

    pub fn advance_time_to(&mut self, target_ms: i64) -> Result<()> {
        if target_ms < self.document.now_ms {
            return Err(Error::InvalidArgument(format!(
                "advance_time_to requires target >= now_ms (target={target_ms}, now_ms={})",
                self.document.now_ms
            )));
        }
        let from = self.document.now_ms;
        self.document.now_ms = target_ms;
        let ran = self.run_timer_queue(Some(target_ms), false)?;
        self.document.trace_timer_line(format!(
            "[timer] advance_to from={} to={} ran_due={}",
            from, self.document.now_ms, ran
        ));
        Ok(())
    }

    /// Runs every pending timer, moving the clock to each one's due time.
    pub fn flush(&mut self) -> Result<()> {
        let from = self.document.now_ms;
        let ran = self.run_timer_queue(None, true)?;
        self.document.trace_timer_line(format!(
            "[timer] flush from={} to={} ran={}",
            from, self.document.now_ms, ran
        ));
        Ok(())
    }

    pub fn run_next_timer(&mut self) -> Result<bool> {
        let Some(task) = self.document.timers.pop_next(None) else {
            self.document.trace_timer_line("[timer] run_next none".into());
            return Ok(false);
        };
        if task.due_at > self.document.now_ms {
            self.document.now_ms = task.due_at;
        }
        self.execute_timer_task(task)?;
        Ok(true)
    }

    pub fn run_due_timers(&mut self) -> Result<usize> {
        let ran = self.run_timer_queue(Some(self.document.now_ms), false)?;
        self.document.trace_timer_line(format!(
            "[timer] run_due now_ms={} ran={}",
            self.document.now_ms, ran
        ));
        Ok(ran)
    }

    fn run_timer_queue(&mut self, due_limit: Option<i64>, advance_clock: bool) -> Result<usize> {
        let mut ran = 0usize;
        while let Some(task) = self.document.timers.pop_next(due_limit) {
            if advance_clock && task.due_at > self.document.now_ms {
                self.document.now_ms = task.due_at;
            }
            self.execute_timer_task(task)?;
            ran += 1;
        }
        Ok(ran)
    }

    fn execute_timer_task(&mut self, task: ScheduledTask) -> Result<()> {
        self.document.trace_timer_line(format!(
            "[timer] run id={} due_at={} action={:?} now_ms={}",
            task.id, task.due_at, task.action, self.document.now_ms
        ));
        match task.action {
            TimerAction::HideFormSuccess => self.contact.hide_success(&mut self.document),
        }
    }

    pub fn text(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.document.dom.text_content(target))
    }

    pub fn value(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        self.document.dom.value(target)
    }

    pub fn attr(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let target = self.select_one(selector)?;
        Ok(self.document.dom.attr(target, name))
    }

    /// False only when the element's inline `display` is `none`.
    pub fn is_visible(&self, selector: &str) -> Result<bool> {
        let target = self.select_one(selector)?;
        Ok(self.document.dom.display(target).as_deref() != Some("none"))
    }

    pub fn carousel_index(&self) -> usize {
        self.carousel.index()
    }

    pub fn last_submission(&self) -> Option<&ContactSubmission> {
        self.contact.last_submission()
    }

    pub fn assert_text(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.document.dom.text_content(target);
        self.check_assertion(selector, target, expected, actual)
    }

    pub fn assert_value(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.document.dom.value(target)?;
        self.check_assertion(selector, target, expected, actual)
    }

    pub fn assert_attr(&self, selector: &str, name: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self
            .document
            .dom
            .attr(target, name)
            .unwrap_or_else(|| "(missing)".into());
        self.check_assertion(selector, target, expected, actual)
    }

    pub fn assert_visible(&self, selector: &str, expected: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.is_visible(selector)?;
        self.check_assertion(selector, target, &expected.to_string(), actual.to_string())
    }

    pub fn assert_exists(&self, selector: &str) -> Result<()> {
        let _ = self.select_one(selector)?;
        Ok(())
    }

    pub fn dump_dom(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.document.dom.dump_node(target))
    }

    fn check_assertion(
        &self,
        selector: &str,
        target: NodeId,
        expected: &str,
        actual: String,
    ) -> Result<()> {
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: truncate_chars(&self.document.dom.dump_node(target), 200),
            });
        }
        Ok(())
    }

    fn select_one(&self, selector: &str) -> Result<NodeId> {
        let id = selector
            .strip_prefix('#')
            .filter(|id| !id.is_empty() && id.chars().all(is_id_char))
            .ok_or_else(|| Error::UnsupportedSelector(selector.to_string()))?;
        self.document
            .dom
            .by_id(id)
            .ok_or_else(|| Error::SelectorNotFound(selector.to_string()))
    }

    fn is_inert(&self, node: NodeId) -> bool {
        let dom = &self.document.dom;
        dom.attr(node, "disabled").is_some() || dom.attr(node, "readonly").is_some()
    }

    fn is_submit_control(&self, node: NodeId) -> bool {
        let dom = &self.document.dom;
        let kind = dom.attr(node, "type").map(|kind| kind.to_ascii_lowercase());
        if dom.is_tag(node, "button") {
            return kind.is_none_or(|kind| kind == "submit");
        }
        dom.is_tag(node, "input") && kind.as_deref() == Some("submit")
    }

    fn dispatch_event(&mut self, target: NodeId, kind: EventKind) -> Result<EventState> {
        let mut event = EventState::new(kind, target);
        for node in self.document.dom.event_path(target) {
            event.set_current_target(node);
            for handler in self.document.listeners.get(node, kind) {
                self.document.trace_listener(&event, handler);
                self.run_handler(handler, &mut event)?;
            }
        }
        self.document.trace_event_done(&event);
        Ok(event)
    }

    fn run_handler(&mut self, handler: Handler, event: &mut EventState) -> Result<()> {
        if handler == Handler::InitializePage {
            return self.initialize();
        }

        let document = &mut self.document;
        match handler {
            Handler::InitializePage => {}
            Handler::ToggleText => self.toggler.activate(document)?,
            Handler::ShowPreviousImage => self.carousel.show_previous(document)?,
            Handler::ShowNextImage => self.carousel.show_next(document)?,
            Handler::ValidateName => {
                self.contact.validate_name(document)?;
            }
            Handler::ValidateEmail => {
                self.contact.validate_email(document)?;
            }
            Handler::ValidateMessage => {
                self.contact.validate_message(document)?;
            }
            Handler::SubmitContact => {
                self.contact.submit(document, event)?;
            }
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            return Ok(());
        }
        self.toggler.register(&mut self.document)?;
        self.carousel.register(&mut self.document)?;
        self.contact.register(&mut self.document)?;
        self.carousel.refresh(&mut self.document)?;
        self.initialized = true;
        tracing::debug!(
            listeners = self.document.listeners.count(),
            "page initialized"
        );
        Ok(())
    }
}

fn is_id_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOGGLE_ONLY_HTML: &str = r#"
        <p id='dynamicText'>start</p>
        <button id='changeContentBtn'>toggle</button>
    "#;

    fn minimal_config() -> PageConfig {
        PageConfig::from_toml_str(
            r#"
            [carousel]
            image_id = "pic"
            previous_id = "back"
            next_id = "fwd"
            images = ["one.png", "two.png"]

            [contact]
            form_id = "f"
            name_id = "n"
            email_id = "e"
            message_id = "m"
            name_error_id = "ne"
            email_error_id = "ee"
            message_error_id = "me"
            success_id = "ok"
            success_hide_delay_ms = 100
            "#,
        )
        .expect("valid config")
    }

    const MINIMAL_HTML: &str = r#"
        <p id='dynamicText'></p><button id='changeContentBtn'>t</button>
        <img id='pic' src='stale.png'>
        <button id='back'>&lt;</button><button id='fwd'>&gt;</button>
        <form id='f'>
          <input id='n'><div id='ne'></div>
          <input id='e'><div id='ee'></div>
          <textarea id='m'></textarea><div id='me'></div>
          <button id='send'>send</button>
          <button id='plain' type='button'>plain</button>
          <div id='ok' style='display: none;'></div>
        </form>
    "#;

    #[test]
    fn missing_component_markup_fails_construction() {
        match Page::from_html(TOGGLE_ONLY_HTML) {
            Err(Error::ElementNotFound(id)) => assert_eq!(id, "prevImage"),
            other => panic!("expected missing carousel element, got {other:?}"),
        }
    }

    #[test]
    fn initialization_refreshes_carousel_from_image_list() -> Result<()> {
        let page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        page.assert_attr("#pic", "src", "one.png")?;
        page.assert_attr("#pic", "alt", "Carousel Image 1")?;
        assert_eq!(page.carousel_index(), 0);
        Ok(())
    }

    #[test]
    fn repeated_dom_content_loaded_does_not_double_register() -> Result<()> {
        let mut page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        page.dispatch("#fwd", "DOMContentLoaded")?;
        page.click("#fwd")?;
        assert_eq!(page.carousel_index(), 1);
        page.click("#fwd")?;
        assert_eq!(page.carousel_index(), 0);
        Ok(())
    }

    #[test]
    fn implicit_submit_button_submits_form() -> Result<()> {
        let mut page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        page.click("#send")?;
        page.assert_text("#ne", "Name is required.")?;
        page.assert_visible("#ne", true)?;
        Ok(())
    }

    #[test]
    fn type_button_does_not_submit() -> Result<()> {
        let mut page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        page.click("#plain")?;
        page.assert_text("#ne", "")?;
        Ok(())
    }

    #[test]
    fn custom_delay_hides_success_on_time() -> Result<()> {
        let mut page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        page.type_text("#n", "Ann")?;
        page.type_text("#e", "ann@example.com")?;
        page.type_text("#m", "long enough text")?;
        page.submit("#f")?;
        page.assert_visible("#ok", true)?;

        page.advance_time(99)?;
        page.assert_visible("#ok", true)?;
        page.advance_time(1)?;
        page.assert_visible("#ok", false)?;
        page.assert_text("#ok", "")?;
        Ok(())
    }

    #[test]
    fn type_text_rejects_non_text_controls() -> Result<()> {
        let mut page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        match page.type_text("#ok", "x") {
            Err(Error::TypeMismatch { actual, .. }) => assert_eq!(actual, "div"),
            other => panic!("expected type mismatch, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn disabled_controls_ignore_input() -> Result<()> {
        let html = MINIMAL_HTML.replace("<input id='n'>", "<input id='n' disabled>");
        let mut page = Page::with_config(&html, minimal_config())?;
        page.type_text("#n", "ignored")?;
        page.assert_value("#n", "")?;
        page.assert_text("#ne", "")?;
        Ok(())
    }

    #[test]
    fn selectors_must_be_plain_ids() -> Result<()> {
        let mut page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        assert_eq!(
            page.click(".btn"),
            Err(Error::UnsupportedSelector(".btn".into()))
        );
        assert_eq!(
            page.click("#a b"),
            Err(Error::UnsupportedSelector("#a b".into()))
        );
        assert_eq!(
            page.click("#missing"),
            Err(Error::SelectorNotFound("#missing".into()))
        );
        Ok(())
    }

    #[test]
    fn unknown_event_names_are_rejected() -> Result<()> {
        let mut page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        assert_eq!(
            page.dispatch("#n", "change"),
            Err(Error::UnsupportedEvent("change".into()))
        );
        Ok(())
    }

    #[test]
    fn assertion_failure_carries_snippet() -> Result<()> {
        let page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        match page.assert_text("#dynamicText", "nope") {
            Err(Error::AssertionFailed {
                expected,
                actual,
                dom_snippet,
                ..
            }) => {
                assert_eq!(expected, "nope");
                assert_eq!(actual, "");
                assert!(dom_snippet.starts_with("<p id=\"dynamicText\">"));
            }
            other => panic!("expected assertion failure, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn clock_controls_validate_arguments() -> Result<()> {
        let mut page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        assert!(matches!(
            page.advance_time(-1),
            Err(Error::InvalidArgument(_))
        ));
        page.advance_time(50)?;
        assert!(matches!(
            page.advance_time_to(10),
            Err(Error::InvalidArgument(_))
        ));
        page.advance_time_to(50)?;
        assert_eq!(page.now_ms(), 50);
        assert!(!page.run_next_timer()?);
        assert_eq!(page.run_due_timers()?, 0);
        Ok(())
    }

    #[test]
    fn trace_records_listener_and_timer_activity() -> Result<()> {
        let mut page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        page.enable_trace(true);
        page.type_text("#n", "Ann")?;
        page.type_text("#e", "ann@example.com")?;
        page.type_text("#m", "long enough text")?;
        page.click("#send")?;
        page.flush()?;

        let logs = page.take_trace_logs();
        assert!(
            logs.iter()
                .any(|line| line.contains("handler=SubmitContact") && line.contains("target=#f"))
        );
        assert!(logs.iter().any(|line| line.starts_with("[timer] schedule")));
        assert!(logs.iter().any(|line| line.starts_with("[timer] flush")));
        assert_eq!(page.now_ms(), 100);
        Ok(())
    }

    fn submit_valid_contact(page: &mut Page) -> Result<()> {
        page.type_text("#n", "Ann")?;
        page.type_text("#e", "ann@example.com")?;
        page.type_text("#m", "long enough text")?;
        page.submit("#f")
    }

    #[test]
    fn duplicate_ids_keep_toggler_on_first_element() -> Result<()> {
        let html = MINIMAL_HTML.replace(
            "<p id='dynamicText'></p>",
            "<p id='dynamicText'>first</p><p id='dynamicText'>second</p>",
        );
        let mut page = Page::with_config(&html, minimal_config())?;
        page.assert_text("#dynamicText", "first")?;

        page.click("#changeContentBtn")?;
        page.assert_text("#dynamicText", "You've successfully changed the text!")?;
        page.click("#changeContentBtn")?;
        page.assert_text(
            "#dynamicText",
            "This text will change when you click the button again.",
        )?;
        Ok(())
    }

    #[test]
    fn run_next_timer_jumps_clock_and_hides_success() -> Result<()> {
        let mut page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        submit_valid_contact(&mut page)?;
        page.assert_visible("#ok", true)?;

        assert!(page.run_next_timer()?);
        assert_eq!(page.now_ms(), 100);
        page.assert_visible("#ok", false)?;
        assert!(!page.run_next_timer()?);
        Ok(())
    }

    #[test]
    fn clear_timer_cancels_only_that_timer() -> Result<()> {
        let mut page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        submit_valid_contact(&mut page)?;
        let timer = page.pending_timers()[0].id;

        assert!(page.clear_timer(timer));
        assert!(!page.clear_timer(timer));
        page.flush()?;
        page.assert_visible("#ok", true)?;
        Ok(())
    }

    #[test]
    fn event_tracing_can_be_silenced_independently() -> Result<()> {
        let mut page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        page.enable_trace(true);
        page.set_trace_events(false);
        submit_valid_contact(&mut page)?;

        let logs = page.take_trace_logs();
        assert!(!logs.is_empty());
        assert!(logs.iter().all(|line| line.starts_with("[timer]")));

        page.set_trace_events(true);
        page.set_trace_timers(false);
        page.click("#fwd")?;
        page.advance_time(100)?;
        let logs = page.take_trace_logs();
        assert!(logs.iter().any(|line| line.contains("handler=ShowNextImage")));
        assert!(logs.iter().all(|line| line.starts_with("[event]")));
        Ok(())
    }

    #[test]
    fn assert_exists_reports_missing_ids() -> Result<()> {
        let page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        page.assert_exists("#ok")?;
        assert_eq!(
            page.assert_exists("#gone"),
            Err(Error::SelectorNotFound("#gone".into()))
        );
        Ok(())
    }

    #[test]
    fn assertion_snippet_serializes_void_elements() -> Result<()> {
        let page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        match page.assert_attr("#pic", "src", "other.png") {
            Err(Error::AssertionFailed { dom_snippet, .. }) => {
                assert_eq!(
                    dom_snippet,
                    "<img alt=\"Carousel Image 1\" id=\"pic\" src=\"one.png\">"
                );
            }
            other => panic!("expected assertion failure, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn clearing_timers_keeps_success_visible() -> Result<()> {
        let mut page = Page::with_config(MINIMAL_HTML, minimal_config())?;
        page.type_text("#n", "Ann")?;
        page.type_text("#e", "ann@example.com")?;
        page.type_text("#m", "long enough text")?;
        page.submit("#send")?;

        assert_eq!(page.clear_all_timers(), 1);
        page.advance_time(1_000)?;
        page.assert_visible("#ok", true)?;
        Ok(())
    }
}

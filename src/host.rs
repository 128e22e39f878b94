use crate::dom::{Dom, NodeId};
use crate::events::{EventKind, EventState, Handler, ListenerStore};
use crate::timers::{TimerAction, TimerId, TimerQueue};
use crate::{Error, Result};

/// Element access and timers a component needs from the page it runs in.
/// Elements are addressed by their `id` attribute.
pub trait Host {
    fn set_text(&mut self, id: &str, text: &str) -> Result<()>;

    /// Current (live) value of a form control.
    fn value(&self, id: &str) -> Result<String>;

    fn set_attr(&mut self, id: &str, name: &str, value: &str) -> Result<()>;

    fn set_visible(&mut self, id: &str, visible: bool) -> Result<()>;

    fn reset_form(&mut self, id: &str) -> Result<()>;

    fn set_timeout(&mut self, action: TimerAction, delay_ms: i64) -> TimerId;

    /// Returns whether a pending timer was removed.
    fn clear_timeout(&mut self, timer: TimerId) -> bool;
}

/// Where components register their handlers.
pub trait EventSource {
    fn listen(&mut self, element_id: &str, kind: EventKind, handler: Handler) -> Result<()>;
}

/// The in-memory page: element tree, listeners, virtual clock and trace log.
#[derive(Debug)]
pub(crate) struct Document {
    pub(crate) dom: Dom,
    pub(crate) listeners: ListenerStore,
    pub(crate) timers: TimerQueue,
    pub(crate) now_ms: i64,
    trace: bool,
    trace_events: bool,
    trace_timers: bool,
    trace_logs: Vec<String>,
    trace_log_limit: usize,
}

impl Document {
    pub(crate) fn new(dom: Dom) -> Self {
        Self {
            dom,
            listeners: ListenerStore::default(),
            timers: TimerQueue::default(),
            now_ms: 0,
            trace: false,
            trace_events: true,
            trace_timers: true,
            trace_logs: Vec::new(),
            trace_log_limit: 10_000,
        }
    }

    pub(crate) fn node(&self, id: &str) -> Result<NodeId> {
        self.dom
            .by_id(id)
            .ok_or_else(|| Error::ElementNotFound(id.to_string()))
    }

    pub(crate) fn listen_document(&mut self, kind: EventKind, handler: Handler) {
        let root = self.dom.root();
        self.listeners.add(root, kind, handler);
        self.trace_event_line(format!("[event] listen document {kind} handler={handler:?}"));
    }

    pub(crate) fn enable_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    pub(crate) fn set_trace_events(&mut self, enabled: bool) {
        self.trace_events = enabled;
    }

    pub(crate) fn set_trace_timers(&mut self, enabled: bool) {
        self.trace_timers = enabled;
    }

    pub(crate) fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::InvalidArgument(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace_log_limit = max_entries;
        if self.trace_logs.len() > max_entries {
            let excess = self.trace_logs.len() - max_entries;
            self.trace_logs.drain(..excess);
        }
        Ok(())
    }

    pub(crate) fn take_trace_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.trace_logs)
    }

    pub(crate) fn trace_listener(&mut self, event: &EventState, handler: Handler) {
        if !(self.trace && self.trace_events) {
            return;
        }
        let target = self.trace_label(event.target());
        let current = self.trace_label(event.current_target());
        self.trace_event_line(format!(
            "[event] {} target={} current={} handler={:?} default_prevented={}",
            event.kind(),
            target,
            current,
            handler,
            event.default_prevented()
        ));
    }

    pub(crate) fn trace_event_done(&mut self, event: &EventState) {
        if !(self.trace && self.trace_events) {
            return;
        }
        let target = self.trace_label(event.target());
        self.trace_event_line(format!(
            "[event] done {} target={} default_prevented={}",
            event.kind(),
            target,
            event.default_prevented()
        ));
    }

    fn trace_label(&self, node: Option<NodeId>) -> String {
        node.map(|node| self.dom.label(node))
            .unwrap_or_else(|| "detached".into())
    }

    pub(crate) fn trace_event_line(&mut self, line: String) {
        if self.trace_events {
            self.trace_line(line);
        }
    }

    pub(crate) fn trace_timer_line(&mut self, line: String) {
        if self.trace_timers {
            self.trace_line(line);
        }
    }

    fn trace_line(&mut self, line: String) {
        if !self.trace {
            return;
        }
        tracing::debug!(target: "page_widgets::trace", "{line}");
        if self.trace_logs.len() >= self.trace_log_limit {
            self.trace_logs.remove(0);
        }
        self.trace_logs.push(line);
    }
}

impl Host for Document {
    fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
        let node = self.node(id)?;
        self.dom.set_text_content(node, text)
    }

    fn value(&self, id: &str) -> Result<String> {
        let node = self.node(id)?;
        self.dom.value(node)
    }

    fn set_attr(&mut self, id: &str, name: &str, value: &str) -> Result<()> {
        let node = self.node(id)?;
        self.dom.set_attr(node, name, value)
    }

    fn set_visible(&mut self, id: &str, visible: bool) -> Result<()> {
        let node = self.node(id)?;
        let display = if visible { "block" } else { "none" };
        self.dom.set_display(node, display)
    }

    fn reset_form(&mut self, id: &str) -> Result<()> {
        let node = self.node(id)?;
        self.dom.reset_form(node)
    }

    fn set_timeout(&mut self, action: TimerAction, delay_ms: i64) -> TimerId {
        let task = self.timers.schedule(self.now_ms, action, delay_ms);
        self.trace_timer_line(format!(
            "[timer] schedule timeout id={} due_at={} delay_ms={} action={:?}",
            task.id,
            task.due_at,
            delay_ms.max(0),
            action
        ));
        task.id
    }

    fn clear_timeout(&mut self, timer: TimerId) -> bool {
        let removed = self.timers.clear(timer);
        self.trace_timer_line(format!("[timer] clear id={timer} removed={removed}"));
        removed
    }
}

impl EventSource for Document {
    fn listen(&mut self, element_id: &str, kind: EventKind, handler: Handler) -> Result<()> {
        let node = self.node(element_id)?;
        self.listeners.add(node, kind, handler);
        self.trace_event_line(format!(
            "[event] listen #{element_id} {kind} handler={handler:?}"
        ));
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::{HashMap, HashSet};

    use super::*;

    /// Records every write so component tests can run without a document.
    #[derive(Debug, Default)]
    pub(crate) struct FakeHost {
        known: HashSet<String>,
        pub(crate) texts: HashMap<String, String>,
        pub(crate) values: HashMap<String, String>,
        pub(crate) attrs: HashMap<(String, String), String>,
        pub(crate) visible: HashMap<String, bool>,
        pub(crate) resets: Vec<String>,
        pub(crate) timers: Vec<(TimerId, TimerAction, i64)>,
        pub(crate) cleared: Vec<TimerId>,
        pub(crate) listeners: Vec<(String, EventKind, Handler)>,
        next_timer: TimerId,
    }

    impl FakeHost {
        pub(crate) fn with_elements(ids: &[&str]) -> Self {
            Self {
                known: ids.iter().map(|id| (*id).to_string()).collect(),
                next_timer: 1,
                ..Self::default()
            }
        }

        pub(crate) fn type_value(&mut self, id: &str, value: &str) {
            self.values.insert(id.to_string(), value.to_string());
        }

        pub(crate) fn text_of(&self, id: &str) -> &str {
            self.texts.get(id).map(String::as_str).unwrap_or("")
        }

        pub(crate) fn is_visible(&self, id: &str) -> bool {
            self.visible.get(id).copied().unwrap_or(false)
        }

        pub(crate) fn attr_of(&self, id: &str, name: &str) -> Option<&str> {
            self.attrs
                .get(&(id.to_string(), name.to_string()))
                .map(String::as_str)
        }

        fn check(&self, id: &str) -> Result<()> {
            if self.known.contains(id) {
                Ok(())
            } else {
                Err(Error::ElementNotFound(id.to_string()))
            }
        }
    }

    impl Host for FakeHost {
        fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
            self.check(id)?;
            self.texts.insert(id.to_string(), text.to_string());
            Ok(())
        }

        fn value(&self, id: &str) -> Result<String> {
            self.check(id)?;
            Ok(self.values.get(id).cloned().unwrap_or_default())
        }

        fn set_attr(&mut self, id: &str, name: &str, value: &str) -> Result<()> {
            self.check(id)?;
            self.attrs
                .insert((id.to_string(), name.to_string()), value.to_string());
            Ok(())
        }

        fn set_visible(&mut self, id: &str, visible: bool) -> Result<()> {
            self.check(id)?;
            self.visible.insert(id.to_string(), visible);
            Ok(())
        }

        fn reset_form(&mut self, id: &str) -> Result<()> {
            self.check(id)?;
            self.values.clear();
            self.resets.push(id.to_string());
            Ok(())
        }

        fn set_timeout(&mut self, action: TimerAction, delay_ms: i64) -> TimerId {
            let id = self.next_timer;
            self.next_timer += 1;
            self.timers.push((id, action, delay_ms));
            id
        }

        fn clear_timeout(&mut self, timer: TimerId) -> bool {
            let before = self.timers.len();
            self.timers.retain(|(id, _, _)| *id != timer);
            self.cleared.push(timer);
            self.timers.len() != before
        }
    }

    impl EventSource for FakeHost {
        fn listen(&mut self, element_id: &str, kind: EventKind, handler: Handler) -> Result<()> {
            self.check(element_id)?;
            self.listeners.push((element_id.to_string(), kind, handler));
            Ok(())
        }
    }
}

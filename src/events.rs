use std::collections::HashMap;
use std::fmt;

use crate::dom::NodeId;

/// Event kinds the page components listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
    Submit,
    DomContentLoaded,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Input => "input",
            Self::Submit => "submit",
            Self::DomContentLoaded => "DOMContentLoaded",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "click" => Some(Self::Click),
            "input" => Some(Self::Input),
            "submit" => Some(Self::Submit),
            "DOMContentLoaded" => Some(Self::DomContentLoaded),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named component operation a listener runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    InitializePage,
    ToggleText,
    ShowPreviousImage,
    ShowNextImage,
    ValidateName,
    ValidateEmail,
    ValidateMessage,
    SubmitContact,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ListenerStore {
    map: HashMap<NodeId, HashMap<EventKind, Vec<Handler>>>,
}

impl ListenerStore {
    pub(crate) fn add(&mut self, node_id: NodeId, kind: EventKind, handler: Handler) {
        self.map
            .entry(node_id)
            .or_default()
            .entry(kind)
            .or_default()
            .push(handler);
    }

    pub(crate) fn get(&self, node_id: NodeId, kind: EventKind) -> Vec<Handler> {
        self.map
            .get(&node_id)
            .and_then(|events| events.get(&kind))
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn count(&self) -> usize {
        self.map
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }
}

/// State of one event while it travels from its target to the root.
#[derive(Debug, Clone)]
pub struct EventState {
    kind: EventKind,
    target: Option<NodeId>,
    current_target: Option<NodeId>,
    default_prevented: bool,
}

impl EventState {
    pub(crate) fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target: Some(target),
            current_target: Some(target),
            default_prevented: false,
        }
    }

    /// An event with no node behind it, for driving components directly.
    pub fn detached(kind: EventKind) -> Self {
        Self {
            kind,
            target: None,
            current_target: None,
            default_prevented: false,
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub(crate) fn target(&self) -> Option<NodeId> {
        self.target
    }

    pub(crate) fn current_target(&self) -> Option<NodeId> {
        self.current_target
    }

    pub(crate) fn set_current_target(&mut self, node: NodeId) {
        self.current_target = Some(node);
    }
}

use crate::config::model::BreakpointDescriptor;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Name of a layout notification.
pub enum EventKind {
    /// A full pack finished.
    Pack,
    /// An incremental update finished.
    Update,
    /// A resize crossed a breakpoint and triggered a repack.
    Resize,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Notification delivered to listeners.
pub enum LayoutEvent {
    /// A full pack finished.
    Pack,
    /// An incremental update finished.
    Update,
    /// A resize crossed a breakpoint; carries the newly active descriptor.
    Resize(BreakpointDescriptor),
}

impl LayoutEvent {
    /// The name listeners subscribe with.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Pack => EventKind::Pack,
            Self::Update => EventKind::Update,
            Self::Resize(_) => EventKind::Resize,
        }
    }
}

/// Handle returned on registration, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback = Box<dyn FnMut(&LayoutEvent)>;

struct Entry {
    id: ListenerId,
    kind: EventKind,
    once: bool,
    callback: Callback,
}

/// Listener registry; delivery follows registration order.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<Entry>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish()
    }
}

impl Listeners {
    /// Subscribe `callback` to every `kind` event.
    pub fn on(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&LayoutEvent) + 'static,
    ) -> ListenerId {
        self.insert(kind, false, Box::new(callback))
    }

    /// Subscribe `callback` to the next `kind` event only.
    pub fn once(
        &mut self,
        kind: EventKind,
        callback: impl FnMut(&LayoutEvent) + 'static,
    ) -> ListenerId {
        self.insert(kind, true, Box::new(callback))
    }

    /// Unsubscribe; returns whether the listener was registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deliver `event` to its subscribers, dropping spent once-listeners.
    pub fn emit(&mut self, event: &LayoutEvent) {
        let kind = event.kind();
        for entry in self.entries.iter_mut().filter(|e| e.kind == kind) {
            (entry.callback)(event);
        }
        self.entries.retain(|e| !(e.once && e.kind == kind));
    }

    fn insert(&mut self, kind: EventKind, once: bool, callback: Callback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            kind,
            once,
            callback,
        });
        id
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pack/events.rs"]
mod tests;

use std::cell::RefCell;
use std::rc::Rc;
use std::fmt;

use crate::{Direction, DragInfo};

/// Discriminant of [`Event`], used to subscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    Mounted,
    Move,
    DragStart,
    Drag,
    DragEnd,
    Destroy,
}

/// Events emitted by [`crate::Virchual`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// The initial window was mounted.
    Mounted,
    /// A transition was committed: `index` is the new current index.
    Move { index: usize, control: Direction },
    /// A gesture was accepted as a horizontal drag. Always followed by `Drag` and, on
    /// release, `DragEnd`.
    DragStart(DragInfo),
    /// The accepted drag moved.
    Drag(DragInfo),
    /// The accepted drag was released.
    DragEnd(DragInfo),
    /// The instance is being torn down; no event follows.
    Destroy,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Mounted => EventKind::Mounted,
            Self::Move { .. } => EventKind::Move,
            Self::DragStart(_) => EventKind::DragStart,
            Self::Drag(_) => EventKind::Drag,
            Self::DragEnd(_) => EventKind::DragEnd,
            Self::Destroy => EventKind::Destroy,
        }
    }
}

/// Handle returned by [`EventBus::on`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Rc<dyn Fn(&Event)>;

struct Subscriber {
    id: SubscriptionId,
    kind: EventKind,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

/// Typed single-threaded publish/subscribe channel.
///
/// Clones share the same subscriber list. Handlers may subscribe or unsubscribe while an event
/// is being emitted; such changes take effect for the next emit.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, kind: EventKind, handler: impl Fn(&Event) + 'static) -> SubscriptionId {
        let mut registry = self.registry.borrow_mut();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.subscribers.push(Subscriber {
            id,
            kind,
            handler: Rc::new(handler),
        });
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn off(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.subscribers.len();
        registry.subscribers.retain(|s| s.id != id);
        registry.subscribers.len() != before
    }

    pub fn emit(&self, event: &Event) {
        let kind = event.kind();
        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .subscribers
            .iter()
            .filter(|s| s.kind == kind)
            .map(|s| Rc::clone(&s.handler))
            .collect();
        for handler in handlers {
            handler(event);
        }
    }

    /// Drops every subscription.
    pub fn clear(&self) {
        self.registry.borrow_mut().subscribers.clear();
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.len())
            .finish_non_exhaustive()
    }
}

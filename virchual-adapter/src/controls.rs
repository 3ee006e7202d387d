use std::cell::Cell;
use std::rc::Rc;

use virchual::{
    Component, Dependencies, Direction, Event, EventKind, Host, IndexPolicy, SubscriptionId,
    Virchual,
};

/// Maps a control button's `value` attribute to a direction.
///
/// Accepts `prev`/`-1` and `next`/`1`/`+1`.
pub fn parse_control(value: &str) -> Option<Direction> {
    match value.trim() {
        "prev" | "-1" => Some(Direction::Prev),
        "next" | "1" | "+1" => Some(Direction::Next),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlsSettings {
    pub is_enabled: bool,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self { is_enabled: true }
    }
}

/// Previous/next buttons.
///
/// Tracks the current index through `Move` events so hosts can render disabled states when
/// navigation is clamped.
#[derive(Debug)]
pub struct Controls {
    is_enabled: bool,
    current: Rc<Cell<usize>>,
    total: usize,
    policy: IndexPolicy,
    subscription: SubscriptionId,
}

impl<H: Host> Component<H> for Controls {
    type Settings = ControlsSettings;

    fn create(deps: Dependencies<'_, H::Node>, settings: ControlsSettings) -> Self {
        let current = Rc::new(Cell::new(deps.current_index));
        let tracked = Rc::clone(&current);
        let subscription = deps.bus.on(EventKind::Move, move |e| {
            if let Event::Move { index, .. } = e {
                tracked.set(*index);
            }
        });
        Self {
            is_enabled: settings.is_enabled,
            current,
            total: deps.slides.iter().filter(|s| !s.is_clone()).count(),
            policy: deps.options.index_policy,
            subscription,
        }
    }
}

impl Controls {
    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    pub fn set_enabled(&mut self, is_enabled: bool) {
        self.is_enabled = is_enabled;
    }

    /// The subscription keeping [`Controls::current_index`] up to date.
    pub fn subscription(&self) -> SubscriptionId {
        self.subscription
    }

    pub fn current_index(&self) -> usize {
        self.current.get()
    }

    pub fn can_go(&self, direction: Direction) -> bool {
        if !self.is_enabled || self.total < 2 {
            return false;
        }
        match (self.policy, direction) {
            (IndexPolicy::Wrap, _) => true,
            (IndexPolicy::Clamp, Direction::Prev) => self.current_index() > 0,
            (IndexPolicy::Clamp, Direction::Next) => self.current_index() + 1 < self.total,
        }
    }

    /// Handles a click on a control button. Returns whether a move started.
    pub fn press<H: Host>(&self, value: &str, carousel: &mut Virchual<H>) -> bool {
        let Some(direction) = parse_control(value) else {
            vdebug!(value, "unknown control value");
            return false;
        };
        if !self.can_go(direction) {
            return false;
        }
        carousel.go(direction)
    }
}

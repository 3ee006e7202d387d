//! A headless carousel engine that keeps only a sliding window of slides rendered.
//!
//! For an in-memory host, CSS easing curves, and button controls, see the `virchual-adapter`
//! crate.
//!
//! A carousel with hundreds of slides only ever shows the current one and a few neighbours.
//! This crate decides which slides must be live around the current index, reconciles that
//! window against what is already rendered (mounting, unmounting, and cloning slides when
//! there are fewer slides than window slots), and runs the navigation state machine: one-slot
//! moves, drag gestures, and transition completion.
//!
//! It is UI-agnostic. The embedding layer implements [`Host`] and is expected to forward:
//! - pointer down/move/up samples
//! - transition-end notifications for slide nodes
//! - a per-frame [`Virchual::tick`]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod component;
mod drag;
mod error;
mod event;
mod host;
mod options;
mod pagination;
mod reconcile;
mod slide;
mod types;
mod virchual;
mod window;


pub use component::{Component, Dependencies};
pub use drag::{DRAG_ANGLE_THRESHOLD, Drag, accepts_angle, analyze};
pub use error::Error;
pub use event::{Event, EventBus, EventKind, SubscriptionId};
pub use host::Host;
pub use options::{SlideSource, SlidesProvider, VirchualOptions};
pub use pagination::{Bullet, Pagination, is_edge_bullet};
pub use slide::{Ease, Settle, Slide, SlideKind, SlideSnapshot};
pub use types::{
    Classes, Direction, DragInfo, IndexPolicy, Offset, Point, PointerSample, TransitionId,
};
pub use virchual::{Phase, Transition, TransitionKind, Virchual};
pub use window::{Patch, Window, WindowCell, circular_get, diff, rewind, sliding_window, trim};

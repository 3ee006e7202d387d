//! Host adapters and collaborators for the `virchual` crate.
//!
//! The `virchual` crate is UI-agnostic and only talks to its environment through the
//! `virchual::Host` trait. This crate provides the pieces an embedding usually needs:
//!
//! - An in-memory element tree ([`MemoryHost`]) for tests and server-side snapshots
//! - CSS easing and transition playback for hosts without a compositor ([`Player`])
//! - Previous/next button controls ([`Controls`])
//! - A DOM host over `web-sys` (feature `web`)
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod controls;
mod easing;
mod memory;
mod player;
mod transition;
#[cfg(feature = "web")]
mod web;

#[cfg(test)]
mod tests;

pub use controls::{Controls, ControlsSettings, parse_control};
pub use easing::CssEasing;
pub use memory::{Element, MemoryHost, NodeId};
pub use player::Player;
pub use transition::{Running, TransitionDriver, TransitionSource, TransitionSpec};
#[cfg(feature = "web")]
pub use web::DomHost;

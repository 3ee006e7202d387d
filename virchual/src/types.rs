use std::fmt;

/// Navigation direction of a committed transition.
///
/// Left is next: a pointer moving towards negative `x` advances the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn sign(self) -> isize {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }

    /// Resolves a gesture direction from a horizontal velocity.
    ///
    /// Returns `None` for a zero (or non-finite) velocity.
    pub fn from_velocity(velocity_x: f32) -> Option<Self> {
        if velocity_x < 0.0 {
            Some(Self::Next)
        } else if velocity_x > 0.0 {
            Some(Self::Prev)
        } else {
            None
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Self::Prev => Self::Next,
            Self::Next => Self::Prev,
        }
    }
}

/// How an out-of-range index is brought back into `[0, edge]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndexPolicy {
    /// Wrap to the opposite edge (see [`crate::rewind`]). Windows are circular.
    #[default]
    Wrap,
    /// Clamp to the nearest edge (see [`crate::trim`]). Navigation stops at both ends.
    Clamp,
}

impl IndexPolicy {
    pub fn resolve(self, index: isize, edge: usize) -> usize {
        match self {
            Self::Wrap => crate::rewind(index, edge),
            Self::Clamp => crate::trim(index, edge),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single pointer/touch reading delivered by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    /// Event timestamp in milliseconds.
    pub time_ms: f64,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, time_ms: f64) -> Self {
        Self { x, y, time_ms }
    }
}

/// Analyzed gesture state, carried by `drag` and `dragend` events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragInfo {
    /// Distance from the gesture start.
    pub offset: Point,
    /// `offset` divided by the elapsed time (px/ms).
    pub velocity: Point,
    /// Latest pointer coordinates.
    pub to: Point,
    pub time_ms: f64,
    pub direction: Option<Direction>,
}

/// Horizontal displacement applied on top of a slide's slot position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Offset {
    Percent(f32),
    Px(f32),
}

impl Offset {
    pub const ZERO: Self = Self::Percent(0.0);
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(v) => write!(f, "{v}%"),
            Self::Px(v) => write!(f, "{v}px"),
        }
    }
}

/// Identifies one eased transition so late transition-end signals can be told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionId(pub u64);

/// Class markers the engine reads and writes on host nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classes {
    pub frame: String,
    pub slide: String,
    pub slide_active: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            frame: "virchual__frame".into(),
            slide: "virchual__slide".into(),
            slide_active: "virchual__slide--active".into(),
        }
    }
}

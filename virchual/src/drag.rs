use crate::{Direction, DragInfo, Point, PointerSample};

/// Default maximum gesture angle (degrees from horizontal) accepted as a drag.
pub const DRAG_ANGLE_THRESHOLD: f32 = 45.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum DragState {
    #[default]
    Idle,
    Tracking {
        start: DragInfo,
    },
    Dragging {
        start: DragInfo,
        current: DragInfo,
    },
}

/// Horizontal gesture recognizer.
///
/// `Idle → start → Tracking → update (angle accepted) → Dragging → end → Idle`. A pointer that
/// never passes the angle check (a vertical scroll, a tap) produces no drag at all.
#[derive(Clone, Debug)]
pub struct Drag {
    state: DragState,
    angle_threshold: f32,
}

impl Default for Drag {
    fn default() -> Self {
        Self::new(DRAG_ANGLE_THRESHOLD)
    }
}

impl Drag {
    pub fn new(angle_threshold: f32) -> Self {
        Self {
            state: DragState::Idle,
            angle_threshold,
        }
    }

    pub fn is_tracking(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Records the initial pointer position. Ignored while a drag is in progress.
    pub fn start(&mut self, sample: PointerSample) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.state = DragState::Tracking {
            start: analyze(sample, None),
        };
        true
    }

    /// Feeds a pointer move.
    ///
    /// Returns the analyzed info once the gesture is (or becomes) an accepted drag, `None` while
    /// idle or while the gesture is still undecided.
    pub fn update(&mut self, sample: PointerSample) -> Option<DragInfo> {
        match self.state {
            DragState::Idle => None,
            DragState::Tracking { start } => {
                let info = analyze(sample, Some(&start));
                if !accepts_angle(info.offset, self.angle_threshold) {
                    return None;
                }
                self.state = DragState::Dragging {
                    start,
                    current: info,
                };
                Some(info)
            }
            DragState::Dragging { start, .. } => {
                let info = analyze(sample, Some(&start));
                self.state = DragState::Dragging {
                    start,
                    current: info,
                };
                Some(info)
            }
        }
    }

    /// Ends the gesture, returning the last analyzed info if a drag was accepted.
    pub fn end(&mut self) -> Option<DragInfo> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { current, .. } => Some(current),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

/// Computes offset and velocity of `sample` relative to the gesture start.
pub fn analyze(sample: PointerSample, start: Option<&DragInfo>) -> DragInfo {
    let to = Point::new(sample.x, sample.y);
    let (from, start_ms) = match start {
        Some(start) => (start.to, start.time_ms),
        None => (to, sample.time_ms),
    };
    let offset = Point::new(to.x - from.x, to.y - from.y);
    let elapsed = (sample.time_ms - start_ms) as f32;
    let velocity = if elapsed > 0.0 {
        Point::new(offset.x / elapsed, offset.y / elapsed)
    } else {
        Point::ZERO
    };
    DragInfo {
        offset,
        velocity,
        to,
        time_ms: sample.time_ms,
        direction: Direction::from_velocity(velocity.x),
    }
}

/// Whether an offset is horizontal enough to count as a drag.
pub fn accepts_angle(offset: Point, threshold_deg: f32) -> bool {
    if offset.x == 0.0 {
        return false;
    }
    let angle = (offset.y.abs() / offset.x.abs()).atan().to_degrees();
    angle < threshold_deg
}

use std::sync::Arc;

use crate::{Classes, Host, Offset, TransitionId};

/// Identity of a slide: one of the configured slides, or a disposable copy of one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideKind {
    Real { index: usize },
    Clone { source: usize },
}

impl SlideKind {
    /// The real slide whose content this slide shows.
    pub fn real_index(self) -> usize {
        match self {
            Self::Real { index } => index,
            Self::Clone { source } => source,
        }
    }

    pub fn is_clone(self) -> bool {
        matches!(self, Self::Clone { .. })
    }
}

/// Easing parameters for [`Slide::translate`].
#[derive(Clone, Copy, Debug)]
pub struct Ease<'a> {
    pub speed_ms: u32,
    pub easing: &'a str,
    pub transition: TransitionId,
}

/// When a translation is finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settle {
    /// Applied without a transition; already at its destination.
    Immediate,
    /// Eased; the host will report a transition end for this node.
    AwaitTransitionEnd,
}

/// A single virtual slide and its (optional) host node.
///
/// Content is shared between a real slide and its clones; clones never share a node.
#[derive(Debug)]
pub struct Slide<N> {
    idx: isize,
    kind: SlideKind,
    content: Arc<str>,
    frame: N,
    node: Option<N>,
    is_mounted: bool,
    is_active: bool,
    position: f32,
    has_changed: bool,
    transform: String,
    awaiting: Option<TransitionId>,
}

impl<N: Clone + PartialEq> Slide<N> {
    /// Creates an unrendered slide. Rendering is deferred to the first [`Slide::mount`].
    pub fn new(kind: SlideKind, content: Arc<str>, frame: N) -> Self {
        Self {
            idx: kind.real_index() as isize,
            kind,
            content,
            frame,
            node: None,
            is_mounted: false,
            is_active: false,
            position: 0.0,
            has_changed: false,
            transform: String::new(),
            awaiting: None,
        }
    }

    /// Adopts a node that already lives in the frame.
    pub fn hydrate(index: usize, node: N, content: Arc<str>, frame: N) -> Self {
        let mut slide = Self::new(SlideKind::Real { index }, content, frame);
        slide.node = Some(node);
        slide.is_mounted = true;
        slide
    }

    pub fn idx(&self) -> isize {
        self.idx
    }

    pub(crate) fn set_idx(&mut self, idx: isize) {
        self.idx = idx;
    }

    pub fn kind(&self) -> SlideKind {
        self.kind
    }

    pub fn real_index(&self) -> usize {
        self.kind.real_index()
    }

    pub fn is_clone(&self) -> bool {
        self.kind.is_clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.is_mounted
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn node(&self) -> Option<&N> {
        self.node.as_ref()
    }

    pub fn has_changed(&self) -> bool {
        self.has_changed
    }

    pub fn awaiting_transition(&self) -> Option<TransitionId> {
        self.awaiting
    }

    /// The last transform written to the node.
    pub fn transform(&self) -> &str {
        &self.transform
    }

    pub fn set_active(&mut self, is_active: bool) -> &mut Self {
        self.is_active = is_active;
        self.has_changed = true;
        self
    }

    /// Sets the slot offset in percent of the frame width.
    pub fn set_position(&mut self, position: f32) -> &mut Self {
        self.position = position;
        self.has_changed = true;
        self
    }

    /// Renders and inserts the slide, or re-applies attributes if it is already mounted.
    ///
    /// Returns `true` when the node was inserted into the frame.
    pub fn mount<H: Host<Node = N>>(&mut self, host: &mut H, classes: &Classes, prepend: bool) -> bool {
        if self.is_mounted {
            if self.has_changed {
                vtrace!(idx = self.idx, "update slide");
                self.apply_attributes(host, classes);
            }
            return false;
        }

        let node = match self
            .node
            .take()
            .or_else(|| host.create_element(&classes.slide, &self.content))
        {
            Some(node) => node,
            None => {
                vwarn!(idx = self.idx, "host could not create a slide element");
                return false;
            }
        };
        self.node = Some(node.clone());
        self.apply_attributes(host, classes);
        host.insert(&self.frame, &node, prepend);
        self.is_mounted = true;
        vtrace!(idx = self.idx, real = self.real_index(), prepend, "mount slide");
        true
    }

    /// Detaches the node from the frame. Unmounting twice is a no-op.
    ///
    /// The node handle is kept so a later mount can re-insert it without re-rendering.
    pub fn unmount<H: Host<Node = N>>(&mut self, host: &mut H) -> bool {
        if !self.is_mounted {
            return false;
        }
        if let Some(node) = &self.node {
            host.detach(node);
        }
        self.is_mounted = false;
        self.is_active = false;
        self.awaiting = None;
        vtrace!(idx = self.idx, real = self.real_index(), "unmount slide");
        true
    }

    /// Creates an unmounted clone sharing this slide's content but no node.
    pub fn duplicate(&self) -> Self {
        let mut slide = Self::new(
            SlideKind::Clone {
                source: self.real_index(),
            },
            Arc::clone(&self.content),
            self.frame.clone(),
        );
        slide.idx = self.idx;
        slide
    }

    /// Moves the slide to `position% + offset`.
    ///
    /// With `ease`, a timed transition is applied and the slide waits for the host's
    /// transition end. Without it (or with a zero speed) the move is immediate.
    pub fn translate<H: Host<Node = N>>(
        &mut self,
        host: &mut H,
        offset: Offset,
        ease: Option<Ease<'_>>,
    ) -> Settle {
        let Some(node) = &self.node else {
            return Settle::Immediate;
        };
        self.transform = format!(
            "translate3d(calc({}% + {}), 0, 0)",
            self.position, offset
        );
        match ease.filter(|e| e.speed_ms > 0) {
            Some(ease) => {
                let transition = format!("transform {}ms {}", ease.speed_ms, ease.easing);
                host.set_style(node, &self.transform, &transition);
                self.awaiting = Some(ease.transition);
                Settle::AwaitTransitionEnd
            }
            None => {
                host.set_style(node, &self.transform, "");
                self.awaiting = None;
                Settle::Immediate
            }
        }
    }

    /// Handles a transition end on this slide's node.
    ///
    /// Clears the transition style and returns the transition the slide was waiting for.
    pub fn on_transition_end<H: Host<Node = N>>(&mut self, host: &mut H) -> Option<TransitionId> {
        if let Some(node) = &self.node {
            host.set_style(node, &self.transform, "");
        }
        self.awaiting.take()
    }

    fn apply_attributes<H: Host<Node = N>>(&mut self, host: &mut H, classes: &Classes) {
        self.has_changed = false;
        if let Some(node) = &self.node {
            host.set_class(node, &classes.slide_active, self.is_active);
        }
        self.translate(host, Offset::ZERO, None);
    }

    pub fn snapshot(&self) -> SlideSnapshot<N> {
        SlideSnapshot {
            idx: self.idx,
            kind: self.kind,
            is_mounted: self.is_mounted,
            is_active: self.is_active,
            position: self.position,
            node: self.node.clone(),
        }
    }
}

/// A read-only copy of a slide's state, handed to collaborators.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideSnapshot<N> {
    pub idx: isize,
    pub kind: SlideKind,
    pub is_mounted: bool,
    pub is_active: bool,
    pub position: f32,
    pub node: Option<N>,
}

impl<N> SlideSnapshot<N> {
    pub fn real_index(&self) -> usize {
        self.kind.real_index()
    }

    pub fn is_clone(&self) -> bool {
        self.kind.is_clone()
    }
}

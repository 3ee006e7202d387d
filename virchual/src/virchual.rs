use std::sync::Arc;

use crate::reconcile::{self, Plan, SlideRef, Source};
use crate::{
    Component, Dependencies, Direction, Drag, DragInfo, Ease, Error, Event, EventBus, EventKind,
    Host, Offset, Pagination, PointerSample, Settle, Slide, SlideKind, SlideSnapshot,
    SubscriptionId, TransitionId, VirchualOptions, Window,
};

/// What an in-flight transition will do once every eased slide has settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionKind {
    /// Move one slot and commit `target` as the current index.
    Advance {
        direction: Direction,
        target: usize,
        /// The index wrapped around an edge.
        is_rewind: bool,
    },
    /// Ease back to the slot positions without changing the index.
    Settle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub id: TransitionId,
    pub kind: TransitionKind,
    /// Slides still waiting for their transition end.
    pub pending: usize,
    /// Clock at which the transition started: the release time for a drag, otherwise the
    /// first [`Virchual::tick`] after the request.
    pub started_ms: Option<f64>,
}

/// Interaction phase. Anything but `Idle` is busy: `next`/`prev` requests are rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    Transitioning(Transition),
}

/// The carousel controller.
///
/// Owns the slide collection (real slides and clones), the committed window, and the
/// transition state machine. All host effects go through `H`; the host reports back via
/// [`Virchual::on_transition_end`], pointer methods, and [`Virchual::tick`].
#[derive(Debug)]
pub struct Virchual<H: Host> {
    host: H,
    options: VirchualOptions,
    frame: H::Node,
    slides: Vec<Slide<H::Node>>,
    real_count: usize,
    current_index: usize,
    window: Window,
    phase: Phase,
    is_enabled: bool,
    is_mounted: bool,
    drag: Drag,
    pending_drag: Option<DragInfo>,
    bus: EventBus,
    pagination: Option<Pagination>,
    next_transition: u64,
}

impl<H: Host> Virchual<H> {
    /// Builds the slide collection from the frame's existing children plus `options.slides`.
    ///
    /// Fails if the host has no frame element. Nothing is rendered until [`Virchual::mount`].
    pub fn new(host: H, options: VirchualOptions) -> Result<Self, Error> {
        let frame = host
            .query_frame(&options.classes.frame)
            .ok_or_else(|| Error::FrameNotFound {
                class: options.classes.frame.clone(),
            })?;

        let mut slides: Vec<Slide<H::Node>> = host
            .children(&frame)
            .into_iter()
            .enumerate()
            .map(|(index, node)| {
                let content: Arc<str> = host.inner_html(&node).into();
                Slide::hydrate(index, node, content, frame.clone())
            })
            .collect();
        let hydrated = slides.len();
        slides.extend(
            options
                .slides
                .resolve()
                .into_iter()
                .enumerate()
                .map(|(i, html)| {
                    Slide::new(
                        SlideKind::Real { index: hydrated + i },
                        html.into(),
                        frame.clone(),
                    )
                }),
        );
        let real_count = slides.len();

        vdebug!(
            hydrated,
            real_count,
            window = options.window,
            speed_ms = options.speed_ms,
            "Virchual::new"
        );

        let pagination = options.pagination.then(|| {
            Pagination::new(
                real_count,
                options.pagination_bullets,
                options.pagination_diameter,
            )
        });

        let mut v = Self {
            host,
            frame,
            slides,
            real_count,
            current_index: 0,
            window: Window::empty(),
            phase: Phase::Idle,
            is_enabled: true,
            is_mounted: false,
            drag: Drag::new(options.drag_angle_threshold),
            pending_drag: None,
            bus: EventBus::new(),
            pagination,
            next_transition: 0,
            options,
        };
        v.synthesize_clones();
        Ok(v)
    }

    /// Pre-creates the clones the initial window needs when there are fewer real slides than
    /// window slots.
    fn synthesize_clones(&mut self) {
        if self.real_count < 2 {
            return;
        }
        let initial = self.window_at(0);
        let plan = reconcile::plan(&self.slide_refs(), &Window::empty(), &initial);
        if plan.new_clones() == 0 {
            return;
        }
        for assignment in &plan.assignments {
            if let Source::Clone { of } = assignment.source {
                let mut clone = self.slides[self.real_slot(of)].duplicate();
                clone.set_idx(assignment.cell.virtual_index);
                self.slides.push(clone);
            }
        }
        vdebug!(clones = plan.new_clones(), "synthesized clones");
    }

    /// Renders the initial window. No-op with fewer than two slides or when already mounted.
    pub fn mount(&mut self) {
        if self.is_mounted || self.real_count < 2 {
            return;
        }
        self.is_mounted = true;
        self.reconcile(None, 0);
        self.bus.emit(&Event::Mounted);
    }

    pub fn prev(&mut self) -> bool {
        self.request(Direction::Prev)
    }

    pub fn next(&mut self) -> bool {
        self.request(Direction::Next)
    }

    /// Requests a one-slot move. Returns `false` when the request was dropped (busy,
    /// disabled, unmounted, or at an edge with [`crate::IndexPolicy::Clamp`]).
    pub fn go(&mut self, direction: Direction) -> bool {
        self.request(direction)
    }

    fn request(&mut self, direction: Direction) -> bool {
        if self.is_busy() {
            vdebug!(?direction, phase = ?self.phase, "request rejected: busy");
            return false;
        }
        self.go_to(direction, None)
    }

    fn go_to(&mut self, direction: Direction, started_ms: Option<f64>) -> bool {
        if !self.is_enabled || !self.is_mounted {
            return false;
        }
        let next = self.current_index as isize + direction.sign();
        let target = self
            .options
            .index_policy
            .resolve(next, self.real_count - 1);
        if target == self.current_index {
            vdebug!(?direction, index = self.current_index, "request rejected: edge");
            return false;
        }
        let is_rewind = target as isize != next;
        let offset = Offset::Percent((-direction.sign() * 100) as f32);
        self.start_transition(
            TransitionKind::Advance {
                direction,
                target,
                is_rewind,
            },
            offset,
            started_ms,
        );
        true
    }

    fn start_transition(&mut self, kind: TransitionKind, offset: Offset, started_ms: Option<f64>) {
        let id = TransitionId(self.next_transition);
        self.next_transition += 1;
        self.pending_drag = None;

        let ease = Ease {
            speed_ms: self.options.speed_ms,
            easing: &self.options.easing,
            transition: id,
        };
        let mut pending = 0;
        for slide in self.slides.iter_mut().filter(|s| s.is_mounted()) {
            if slide.translate(&mut self.host, offset, Some(ease)) == Settle::AwaitTransitionEnd {
                pending += 1;
            }
        }

        vdebug!(id = id.0, ?kind, pending, "transition started");
        if pending == 0 {
            self.finish(kind);
            return;
        }
        self.phase = Phase::Transitioning(Transition {
            id,
            kind,
            pending,
            started_ms,
        });
    }

    /// Reports that the host finished a CSS transition on `node`.
    ///
    /// Signals for nodes or transitions the instance is not waiting on are ignored.
    pub fn on_transition_end(&mut self, node: &H::Node) {
        let Some(slide) = self.slides.iter_mut().find(|s| s.node() == Some(node)) else {
            return;
        };
        let ended = slide.on_transition_end(&mut self.host);

        let done = match &mut self.phase {
            Phase::Transitioning(t) if ended == Some(t.id) => {
                t.pending = t.pending.saturating_sub(1);
                (t.pending == 0).then_some(t.kind)
            }
            _ => {
                vtrace!(?ended, "stale transition end");
                None
            }
        };
        if let Some(kind) = done {
            self.finish(kind);
        }
    }

    /// Advances the clock: applies the latest coalesced drag offset and completes a
    /// transition whose transition ends are overdue.
    ///
    /// Call once per animation frame.
    pub fn tick(&mut self, now_ms: f64) {
        self.flush_drag();

        let deadline = f64::from(self.options.speed_ms) + f64::from(self.options.transition_grace_ms);
        let overdue = match &mut self.phase {
            Phase::Transitioning(t) => match t.started_ms {
                Some(started) => (now_ms - started >= deadline).then_some(*t),
                None => {
                    t.started_ms = Some(now_ms);
                    None
                }
            },
            _ => None,
        };
        if let Some(t) = overdue {
            vwarn!(id = t.id.0, pending = t.pending, "transition end overdue, forcing completion");
            for slide in self.slides.iter_mut() {
                if slide.awaiting_transition() == Some(t.id) {
                    slide.on_transition_end(&mut self.host);
                }
            }
            self.finish(t.kind);
        }
    }

    fn finish(&mut self, kind: TransitionKind) {
        self.phase = Phase::Idle;
        match kind {
            TransitionKind::Advance {
                direction, target, ..
            } => self.commit(direction, target),
            TransitionKind::Settle => {
                for slide in self.slides.iter_mut().filter(|s| s.is_mounted()) {
                    slide.translate(&mut self.host, Offset::ZERO, None);
                }
            }
        }
    }

    fn commit(&mut self, direction: Direction, target: usize) {
        let next = self.current_index as isize + direction.sign();
        let shift = target as isize - next;
        self.current_index = target;
        self.reconcile(Some(direction), shift);

        if let Some(pagination) = &mut self.pagination {
            match direction {
                Direction::Prev => pagination.prev(),
                Direction::Next => pagination.next(),
            }
        }

        vdebug!(index = target, ?direction, "move committed");
        self.bus.emit(&Event::Move {
            index: target,
            control: direction,
        });
    }

    /// Recomputes the window around the current index and applies the diff.
    ///
    /// `shift` relabels the previous window after a rewind so unchanged slots are kept.
    fn reconcile(&mut self, direction: Option<Direction>, shift: isize) {
        if shift != 0 {
            for slide in self.slides.iter_mut().filter(|s| s.is_mounted()) {
                slide.set_idx(slide.idx() + shift);
            }
        }
        let previous = self.window.relabel(shift);
        let current = self.window_at(self.current_index);
        let plan = reconcile::plan(&self.slide_refs(), &previous, &current);
        self.apply(plan, direction);
        self.window = current;
    }

    fn apply(&mut self, plan: Plan, direction: Option<Direction>) {
        vtrace!(
            assignments = plan.assignments.len(),
            unmount = plan.unmount.len(),
            clones = plan.new_clones(),
            "apply plan"
        );

        for &slot in &plan.unmount {
            self.slides[slot].unmount(&mut self.host);
        }

        let current = self.current_index as isize;
        for assignment in &plan.assignments {
            let slot = match assignment.source {
                Source::Slot(slot) => slot,
                Source::Clone { of } => {
                    let clone = self.slides[self.real_slot(of)].duplicate();
                    self.slides.push(clone);
                    vtrace!(source = of, "clone created");
                    self.slides.len() - 1
                }
            };
            let cell = assignment.cell;
            let prepend = direction == Some(Direction::Prev) || cell.center_distance < 0;
            let slide = &mut self.slides[slot];
            slide.set_idx(cell.virtual_index);
            slide
                .set_active(cell.virtual_index == current)
                .set_position((cell.center_distance * 100) as f32);
            slide.mount(&mut self.host, &self.options.classes, prepend);
        }

        if !plan.discard.is_empty() {
            let mut slot = 0;
            self.slides.retain(|_| {
                let keep = !plan.discard.contains(&slot);
                slot += 1;
                keep
            });
        }
    }

    fn flush_drag(&mut self) {
        if self.phase != Phase::Dragging {
            return;
        }
        let Some(info) = self.pending_drag.take() else {
            return;
        };
        for slide in self.slides.iter_mut().filter(|s| s.is_mounted()) {
            slide.translate(&mut self.host, Offset::Px(info.offset.x), None);
        }
    }

    /// Pointer/touch down on the frame. Ignored while disabled, unmounted, or busy.
    pub fn pointer_down(&mut self, sample: PointerSample) {
        if !self.is_enabled || !self.is_mounted || self.is_busy() {
            return;
        }
        self.drag.start(sample);
    }

    /// Pointer/touch move.
    ///
    /// Returns `true` when the host should call `preventDefault` on the event (a drag is
    /// accepted and the event is cancelable). The slide translation itself is applied on the
    /// next [`Virchual::tick`], so bursts of moves cost one update per frame.
    pub fn pointer_move(&mut self, sample: PointerSample, cancelable: bool) -> bool {
        let was_dragging = self.drag.is_dragging();
        let Some(info) = self.drag.update(sample) else {
            return false;
        };
        if !matches!(self.phase, Phase::Transitioning(_)) {
            self.phase = Phase::Dragging;
            self.pending_drag = Some(info);
        }
        if !was_dragging {
            self.bus.emit(&Event::DragStart(info));
        }
        self.bus.emit(&Event::Drag(info));
        cancelable
    }

    /// Pointer/touch up, cancel, or leave.
    ///
    /// A released drag navigates in its direction; a drag without horizontal velocity (or one
    /// that cannot navigate) eases back into place.
    pub fn pointer_up(&mut self, now_ms: f64) {
        let Some(info) = self.drag.end() else {
            return;
        };
        self.bus.emit(&Event::DragEnd(info));
        if self.phase != Phase::Dragging {
            return;
        }
        self.phase = Phase::Idle;
        self.pending_drag = None;

        let navigated = info
            .direction
            .is_some_and(|direction| self.go_to(direction, Some(now_ms)));
        if !navigated {
            self.start_transition(TransitionKind::Settle, Offset::ZERO, Some(now_ms));
        }
    }

    /// Whether a click on the frame should be swallowed (mid-gesture or mid-transition).
    pub fn should_suppress_click(&self) -> bool {
        self.is_busy()
    }

    pub fn disable(&mut self) {
        self.is_enabled = false;
    }

    pub fn enable(&mut self) {
        self.is_enabled = true;
    }

    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    pub fn is_mounted(&self) -> bool {
        self.is_mounted
    }

    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The last committed window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Number of real (non-clone) slides.
    pub fn len(&self) -> usize {
        self.real_count
    }

    pub fn is_empty(&self) -> bool {
        self.real_count == 0
    }

    pub fn slides(&self) -> &[Slide<H::Node>] {
        &self.slides
    }

    /// Snapshots of the slide collection, optionally including clones.
    pub fn get_slides(&self, include_clones: bool) -> Vec<SlideSnapshot<H::Node>> {
        self.slides
            .iter()
            .filter(|s| include_clones || !s.is_clone())
            .map(Slide::snapshot)
            .collect()
    }

    /// Mounted slides, in collection order.
    pub fn mounted(&self) -> impl Iterator<Item = &Slide<H::Node>> {
        self.slides.iter().filter(|s| s.is_mounted())
    }

    pub fn active_slide(&self) -> Option<&Slide<H::Node>> {
        self.mounted().find(|s| s.is_active())
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn options(&self) -> &VirchualOptions {
        &self.options
    }

    pub fn frame(&self) -> &H::Node {
        &self.frame
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// A handle to the event bus, shared with collaborators.
    pub fn bus(&self) -> EventBus {
        self.bus.clone()
    }

    pub fn on(&self, kind: EventKind, handler: impl Fn(&Event) + 'static) -> SubscriptionId {
        self.bus.on(kind, handler)
    }

    pub fn off(&self, id: SubscriptionId) -> bool {
        self.bus.off(id)
    }

    /// Instantiates a collaborator with the event bus and a snapshot of the current state.
    pub fn register<C: Component<H>>(&self, settings: C::Settings) -> C {
        C::create(
            Dependencies {
                bus: self.bus.clone(),
                slides: self.get_slides(true),
                current_index: self.current_index,
                options: &self.options,
            },
            settings,
        )
    }

    /// Emits `Destroy` and drops every subscription.
    pub fn destroy(&mut self) {
        vdebug!("Virchual::destroy");
        self.drag.cancel();
        self.pending_drag = None;
        self.bus.emit(&Event::Destroy);
        self.bus.clear();
    }

    fn window_at(&self, center: usize) -> Window {
        Window::new(
            self.real_count,
            center,
            self.options.window,
            self.options.index_policy,
        )
    }

    fn slide_refs(&self) -> Vec<SlideRef> {
        self.slides
            .iter()
            .map(|s| SlideRef {
                idx: s.idx(),
                real_index: s.real_index(),
                is_clone: s.is_clone(),
                is_mounted: s.is_mounted(),
            })
            .collect()
    }

    /// Collection position of a real slide. Real slides precede all clones.
    fn real_slot(&self, real_index: usize) -> usize {
        debug_assert!(real_index < self.real_count);
        debug_assert!(!self.slides[real_index].is_clone());
        real_index
    }
}

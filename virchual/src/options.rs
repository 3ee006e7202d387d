use std::sync::Arc;

use crate::{Classes, DRAG_ANGLE_THRESHOLD, IndexPolicy};

/// A lazily evaluated slide markup provider.
pub type SlidesProvider = Arc<dyn Fn() -> Vec<String> + Send + Sync>;

/// Where configured (non-hydrated) slides come from.
#[derive(Clone)]
pub enum SlideSource {
    /// A fixed list of slide markup.
    Value(Vec<String>),
    /// A provider called once by `Virchual::new`.
    Provider(SlidesProvider),
}

impl SlideSource {
    pub(crate) fn resolve(&self) -> Vec<String> {
        match self {
            Self::Value(v) => v.clone(),
            Self::Provider(f) => f(),
        }
    }
}

impl Default for SlideSource {
    fn default() -> Self {
        Self::Value(Vec::new())
    }
}

impl std::fmt::Debug for SlideSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(&v.len()).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::Virchual`].
#[derive(Clone, Debug)]
pub struct VirchualOptions {
    /// Slides appended after the ones hydrated from the frame.
    pub slides: SlideSource,
    /// Duration of an eased move. `0` disables easing: moves commit synchronously.
    pub speed_ms: u32,
    /// CSS timing function used for eased moves.
    pub easing: String,
    /// Window radius: slides kept live on each side of the current one.
    pub window: usize,
    pub pagination: bool,
    /// Maximum number of visible bullets.
    pub pagination_bullets: usize,
    pub pagination_diameter: u32,
    pub index_policy: IndexPolicy,
    /// Maximum gesture angle (degrees from horizontal) accepted as a drag.
    pub drag_angle_threshold: f32,
    /// Slack after `speed_ms` before `Virchual::tick` gives up waiting for transition ends.
    pub transition_grace_ms: u32,
    pub classes: Classes,
}

impl Default for VirchualOptions {
    fn default() -> Self {
        Self {
            slides: SlideSource::default(),
            speed_ms: 200,
            easing: "ease-out".into(),
            window: 1,
            pagination: true,
            pagination_bullets: 5,
            pagination_diameter: 16,
            index_policy: IndexPolicy::Wrap,
            drag_angle_threshold: DRAG_ANGLE_THRESHOLD,
            transition_grace_ms: 50,
            classes: Classes::default(),
        }
    }
}

impl VirchualOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slides<I, S>(mut self, slides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slides = SlideSource::Value(slides.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_slides_provider(
        mut self,
        provider: impl Fn() -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.slides = SlideSource::Provider(Arc::new(provider));
        self
    }

    pub fn with_speed_ms(mut self, speed_ms: u32) -> Self {
        self.speed_ms = speed_ms;
        self
    }

    pub fn with_easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = easing.into();
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_pagination_bullets(mut self, bullets: usize, diameter: u32) -> Self {
        self.pagination_bullets = bullets;
        self.pagination_diameter = diameter;
        self
    }

    pub fn with_index_policy(mut self, index_policy: IndexPolicy) -> Self {
        self.index_policy = index_policy;
        self
    }

    pub fn with_drag_angle_threshold(mut self, degrees: f32) -> Self {
        self.drag_angle_threshold = degrees;
        self
    }

    pub fn with_transition_grace_ms(mut self, grace_ms: u32) -> Self {
        self.transition_grace_ms = grace_ms;
        self
    }

    pub fn with_classes(mut self, classes: Classes) -> Self {
        self.classes = classes;
        self
    }

    /// Number of slots in a full window (`2 * window + 1`).
    pub fn capacity(&self) -> usize {
        2 * self.window + 1
    }
}

use crate::{EventBus, Host, SlideSnapshot, VirchualOptions};

/// What a collaborator receives from [`crate::Virchual::register`].
#[derive(Debug)]
pub struct Dependencies<'a, N> {
    pub bus: EventBus,
    /// Slides at registration time, clones included.
    pub slides: Vec<SlideSnapshot<N>>,
    pub current_index: usize,
    pub options: &'a VirchualOptions,
}

/// An external collaborator (controls, lazy loading, analytics, ...) wired to an instance.
///
/// The instance is handed back to the caller, which keeps it alive and forwards host input to
/// it. Subscriptions made through `deps.bus` are dropped by [`crate::Virchual::destroy`].
pub trait Component<H: Host>: Sized {
    type Settings;

    fn create(deps: Dependencies<'_, H::Node>, settings: Self::Settings) -> Self;
}

/// Errors raised while constructing a [`crate::Virchual`].
///
/// Reconciliation itself never fails: the full plan is computed before any host node is
/// touched, so there is nothing to recover from at runtime.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The container has no element carrying the frame class.
    #[error("frame element `.{class}` was not found in the container")]
    FrameNotFound { class: String },
}

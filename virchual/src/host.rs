use std::fmt;

/// The element-level environment the engine renders into.
///
/// The engine never reaches for a global document. Browser adapters implement this trait over
/// real DOM elements; tests and headless renderers implement it over an in-memory tree.
///
/// Apart from element creation, implementations are expected to be infallible from the engine's
/// point of view: an operation on a node that no longer exists should be a no-op.
pub trait Host {
    /// An opaque, cheaply cloned element handle.
    type Node: Clone + PartialEq + fmt::Debug;

    /// Looks up the frame element (the direct parent of all slide nodes) by class.
    fn query_frame(&self, class: &str) -> Option<Self::Node>;

    /// Existing children of the frame, in document order. Used for hydration.
    fn children(&self, frame: &Self::Node) -> Vec<Self::Node>;

    fn inner_html(&self, node: &Self::Node) -> String;

    /// Creates a detached element with the given class and inner markup.
    ///
    /// Returning `None` leaves the slide unrendered; the engine retries on the next mount.
    fn create_element(&mut self, class: &str, html: &str) -> Option<Self::Node>;

    /// Inserts `node` as the first (`prepend`) or last child of `frame`.
    fn insert(&mut self, frame: &Self::Node, node: &Self::Node, prepend: bool);

    /// Removes `node` from its parent. Detaching a detached node is a no-op.
    fn detach(&mut self, node: &Self::Node);

    /// Adds (`enabled`) or removes a class. Repeating the same call is a no-op.
    fn set_class(&mut self, node: &Self::Node, class: &str, enabled: bool);

    /// Writes the inline `transform` and `transition` styles.
    fn set_style(&mut self, node: &Self::Node, transform: &str, transition: &str);
}

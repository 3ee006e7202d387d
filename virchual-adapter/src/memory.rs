use virchual::{Classes, Host};

use crate::TransitionSource;

/// Handle to an element of a [`MemoryHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub classes: Vec<String>,
    pub html: String,
    pub transform: String,
    pub transition: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// An in-memory element tree implementing [`Host`].
///
/// Holds a container with a single frame. Useful for tests, server-side snapshots, and
/// driving a carousel headlessly through [`crate::Player`].
#[derive(Clone, Debug)]
pub struct MemoryHost {
    elements: Vec<Element>,
    frame: NodeId,
    started: Vec<(NodeId, String)>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    /// A container holding an empty frame with the default frame class.
    pub fn new() -> Self {
        Self::with_frame_class(&Classes::default().frame)
    }

    pub fn with_frame_class(class: &str) -> Self {
        let root = Element::default();
        let frame = Element {
            classes: vec![class.to_string()],
            parent: Some(NodeId(0)),
            ..Element::default()
        };
        let mut host = Self {
            elements: vec![root, frame],
            frame: NodeId(1),
            started: Vec::new(),
        };
        host.elements[0].children.push(NodeId(1));
        host
    }

    /// A container without a frame, which `Virchual::new` rejects.
    pub fn without_frame() -> Self {
        let mut host = Self::new();
        host.elements[1].classes.clear();
        host
    }

    /// Appends pre-rendered slide markup to the frame, as server-rendered HTML would.
    pub fn with_slides<I, S>(mut self, slides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for html in slides {
            let id = self.push(Element {
                classes: vec![Classes::default().slide],
                html: html.into(),
                ..Element::default()
            });
            self.attach(id, false);
        }
        self
    }

    pub fn frame(&self) -> NodeId {
        self.frame
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// Number of elements ever created, attached or not.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Slide nodes currently in the frame, in document order.
    pub fn frame_children(&self) -> &[NodeId] {
        &self.elements[self.frame.0].children
    }

    /// Inner markup of each frame child, in document order.
    pub fn frame_html(&self) -> Vec<&str> {
        self.frame_children()
            .iter()
            .map(|id| self.elements[id.0].html.as_str())
            .collect()
    }

    /// Serializes the frame and its children as HTML.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(self.frame, &mut out);
        out
    }

    fn render_into(&self, id: NodeId, out: &mut String) {
        let el = &self.elements[id.0];
        out.push_str(&format!("<div class=\"{}\"", el.classes.join(" ")));
        let mut style = Vec::new();
        if !el.transform.is_empty() {
            style.push(format!("transform: {}", el.transform));
        }
        if !el.transition.is_empty() {
            style.push(format!("transition: {}", el.transition));
        }
        if !style.is_empty() {
            out.push_str(&format!(" style=\"{}\"", style.join("; ")));
        }
        out.push('>');
        out.push_str(&el.html);
        for &child in &el.children {
            self.render_into(child, out);
        }
        out.push_str("</div>");
    }

    fn push(&mut self, element: Element) -> NodeId {
        self.elements.push(element);
        NodeId(self.elements.len() - 1)
    }

    fn attach(&mut self, id: NodeId, prepend: bool) {
        self.remove_from_parent(id);
        let frame = self.frame;
        let children = &mut self.elements[frame.0].children;
        if prepend {
            children.insert(0, id);
        } else {
            children.push(id);
        }
        self.elements[id.0].parent = Some(frame);
    }

    fn remove_from_parent(&mut self, id: NodeId) {
        let Some(parent) = self.elements.get_mut(id.0).and_then(|el| el.parent.take()) else {
            return;
        };
        self.elements[parent.0].children.retain(|&c| c != id);
    }
}

impl Host for MemoryHost {
    type Node = NodeId;

    fn query_frame(&self, class: &str) -> Option<NodeId> {
        self.elements
            .iter()
            .position(|el| el.has_class(class))
            .map(NodeId)
    }

    fn children(&self, frame: &NodeId) -> Vec<NodeId> {
        self.element(*frame)
            .map(|el| el.children.clone())
            .unwrap_or_default()
    }

    fn inner_html(&self, node: &NodeId) -> String {
        self.element(*node)
            .map(|el| el.html.clone())
            .unwrap_or_default()
    }

    fn create_element(&mut self, class: &str, html: &str) -> Option<NodeId> {
        Some(self.push(Element {
            classes: vec![class.to_string()],
            html: html.to_string(),
            ..Element::default()
        }))
    }

    fn insert(&mut self, frame: &NodeId, node: &NodeId, prepend: bool) {
        if *frame != self.frame || self.element(*node).is_none() {
            return;
        }
        self.attach(*node, prepend);
    }

    fn detach(&mut self, node: &NodeId) {
        self.remove_from_parent(*node);
    }

    fn set_class(&mut self, node: &NodeId, class: &str, enabled: bool) {
        let Some(el) = self.elements.get_mut(node.0) else {
            return;
        };
        let present = el.has_class(class);
        if enabled && !present {
            el.classes.push(class.to_string());
        } else if !enabled && present {
            el.classes.retain(|c| c != class);
        }
    }

    fn set_style(&mut self, node: &NodeId, transform: &str, transition: &str) {
        let Some(el) = self.elements.get_mut(node.0) else {
            return;
        };
        el.transform = transform.to_string();
        el.transition = transition.to_string();
        if !transition.is_empty() {
            self.started.push((*node, transition.to_string()));
        }
    }
}

impl TransitionSource for MemoryHost {
    fn take_started_transitions(&mut self) -> Vec<(NodeId, String)> {
        std::mem::take(&mut self.started)
    }
}

use virchual::Host;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

/// A [`Host`] over live DOM elements.
///
/// The frame is looked up inside `root`; slides are plain `div`s. Event wiring (pointer events,
/// `transitionend`, `requestAnimationFrame`) stays with the embedding application, which
/// forwards them to the `Virchual` instance.
#[derive(Clone, Debug)]
pub struct DomHost {
    document: Document,
    root: Element,
}

impl DomHost {
    pub fn new(document: Document, root: Element) -> Self {
        Self { document, root }
    }

    /// Resolves `selector` against the window's document.
    pub fn from_selector(selector: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let root = document.query_selector(selector).ok().flatten()?;
        Some(Self::new(document, root))
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
}

impl Host for DomHost {
    type Node = HtmlElement;

    fn query_frame(&self, class: &str) -> Option<HtmlElement> {
        self.root
            .query_selector(&format!(".{class}"))
            .ok()
            .flatten()?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn children(&self, frame: &HtmlElement) -> Vec<HtmlElement> {
        let children = frame.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn inner_html(&self, node: &HtmlElement) -> String {
        node.inner_html()
    }

    fn create_element(&mut self, class: &str, html: &str) -> Option<HtmlElement> {
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(_err) => {
                vwarn!(err = ?_err, "createElement failed");
                return None;
            }
        };
        el.set_class_name(class);
        el.set_inner_html(html);
        el.dyn_into::<HtmlElement>().ok()
    }

    fn insert(&mut self, frame: &HtmlElement, node: &HtmlElement, prepend: bool) {
        let result = if prepend {
            frame.prepend_with_node_1(node)
        } else {
            frame.append_child(node).map(drop)
        };
        if let Err(_err) = result {
            vwarn!(err = ?_err, prepend, "inserting a slide failed");
        }
    }

    fn detach(&mut self, node: &HtmlElement) {
        node.remove();
    }

    fn set_class(&mut self, node: &HtmlElement, class: &str, enabled: bool) {
        if let Err(_err) = node.class_list().toggle_with_force(class, enabled) {
            vwarn!(err = ?_err, class, "toggling a class failed");
        }
    }

    fn set_style(&mut self, node: &HtmlElement, transform: &str, transition: &str) {
        let style = node.style();
        let result = style
            .set_property("transform", transform)
            .and_then(|()| style.set_property("transition", transition));
        if let Err(_err) = result {
            vwarn!(err = ?_err, "writing slide styles failed");
        }
    }
}

//! `TabDocument` over the live browser DOM

use tabs::{Result, TabDocument, TabSelectionError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

#[derive(Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the current window, if there is one
    pub fn current() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| TabSelectionError::Dom("window.document is not available".to_string()))?;
        Ok(Self::new(document))
    }
}

fn dom_error(op: &str, err: JsValue) -> TabSelectionError {
    TabSelectionError::Dom(format!("{op}: {err:?}"))
}

impl TabDocument for WebDocument {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn input_descendants(&self, container: &Element) -> Vec<Element> {
        let collection = container.get_elements_by_tag_name("input");
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn first_label(&self, input: &Element) -> Option<Element> {
        input
            .dyn_ref::<HtmlInputElement>()?
            .labels()?
            .get(0)?
            .dyn_into::<Element>()
            .ok()
    }

    fn parent_element(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) -> Result<()> {
        node.class_list()
            .add_1(class)
            .map_err(|err| dom_error("classList.add", err))
    }

    fn remove_class(&mut self, node: &Element, class: &str) -> Result<()> {
        node.class_list()
            .remove_1(class)
            .map_err(|err| dom_error("classList.remove", err))
    }

    fn describe(&self, node: &Element) -> String {
        let tag = node.tag_name().to_lowercase();
        let id = node.id();
        if id.is_empty() {
            format!("<{tag}>")
        } else {
            format!("<{tag} id=\"{id}\">")
        }
    }
}

//! Click listeners wiring the browser DOM to `TabSelectionController`

use crate::web_document::WebDocument;
use std::cell::RefCell;
use std::rc::Rc;
use tabs::{Result, TabSelectionConfig, TabSelectionController};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

pub type SharedController = Rc<RefCell<TabSelectionController<WebDocument>>>;

/// Live binding of one container.
///
/// Dropping it removes the click listeners; call [`TabBinding::forget`] to
/// keep them for the lifetime of the page.
pub struct TabBinding {
    controller: SharedController,
    on_click: Closure<dyn FnMut(Event)>,
    inputs: Vec<Element>,
}

/// Binds the container named by `config.container_id` in the current document.
pub fn bind_tabs(config: TabSelectionConfig) -> Result<TabBinding> {
    let document = WebDocument::current()?;
    let controller = TabSelectionController::attach(document, config)?;
    Ok(TabBinding::new(controller))
}

/// Binds an element the caller already holds (e.g. from a `NodeRef`).
pub fn bind_container(container: Element, config: TabSelectionConfig) -> Result<TabBinding> {
    let document = WebDocument::current()?;
    let controller = TabSelectionController::attach_within(document, container, config)?;
    Ok(TabBinding::new(controller))
}

impl TabBinding {
    fn new(controller: TabSelectionController<WebDocument>) -> Self {
        let inputs = controller.inputs().to_vec();
        let controller: SharedController = Rc::new(RefCell::new(controller));

        // Один обработчик на все inputs, как и в разметке страницы
        let shared = Rc::clone(&controller);
        let on_click = Closure::wrap(Box::new(move |event: Event| {
            let Some(target) = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };

            let result = shared.borrow_mut().handle_click(&target);
            match result {
                Ok(index) => log::debug!("tab {} selected", index),
                Err(err) => log::error!("tab selection failed: {}", err),
            }
        }) as Box<dyn FnMut(Event)>);

        for input in &inputs {
            if let Err(err) =
                input.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            {
                log::error!("failed to attach click listener: {:?}", err);
            }
        }

        log::debug!("tab selection bound to {} inputs", inputs.len());

        Self {
            controller,
            on_click,
            inputs,
        }
    }

    pub fn controller(&self) -> SharedController {
        Rc::clone(&self.controller)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Keeps the listeners alive until the page unloads.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for TabBinding {
    fn drop(&mut self) {
        for input in &self.inputs {
            let _ = input
                .remove_event_listener_with_callback("click", self.on_click.as_ref().unchecked_ref());
        }
    }
}

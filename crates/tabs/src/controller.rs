//! TabSelectionController
//!
//! Owns the container, the input snapshot taken at attach time and the
//! document handle. A click on input *i* marks tab node *i* and unmarks
//! the tab nodes of every other tracked input.

use crate::config::TabSelectionConfig;
use crate::document::TabDocument;
use crate::error::{Result, TabSelectionError};

pub struct TabSelectionController<D: TabDocument> {
    document: D,
    config: TabSelectionConfig,
    container: D::Node,
    inputs: Vec<D::Node>,
}

impl<D: TabDocument> TabSelectionController<D> {
    /// Looks up the container by `config.container_id` and attaches to it.
    pub fn attach(document: D, config: TabSelectionConfig) -> Result<Self> {
        config.validate()?;
        let container = document.element_by_id(&config.container_id).ok_or_else(|| {
            TabSelectionError::MissingContainer {
                id: config.container_id.clone(),
            }
        })?;
        Self::attach_within(document, container, config)
    }

    /// Attaches to an already resolved container element.
    pub fn attach_within(document: D, container: D::Node, config: TabSelectionConfig) -> Result<Self> {
        config.validate()?;
        let inputs = document.input_descendants(&container);

        log::debug!(
            "tab inputs in {}: [{}]",
            document.describe(&container),
            inputs
                .iter()
                .map(|input| document.describe(input))
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut controller = Self {
            document,
            config,
            container,
            inputs,
        };

        if let Some(index) = controller.config.initial_selection {
            controller.select(index)?;
        }

        Ok(controller)
    }

    /// Handles a click on `target`. Returns the index of the selected tab.
    pub fn handle_click(&mut self, target: &D::Node) -> Result<usize> {
        let index = self
            .inputs
            .iter()
            .position(|input| input == target)
            .ok_or(TabSelectionError::UntrackedInput)?;
        self.select(index)?;
        Ok(index)
    }

    /// Marks the tab node of input `index` and unmarks all the others.
    ///
    /// The selected tab node is resolved before the first class change, so a
    /// broken label association on the clicked input leaves every marker
    /// untouched. Other inputs without a tab node have nothing to unmark and
    /// are skipped. Markers are removed before the new one is added.
    pub fn select(&mut self, index: usize) -> Result<()> {
        let selected = self.tab_node(index)?;
        let others = (0..self.inputs.len())
            .filter(|&i| i != index)
            .filter_map(|i| match self.tab_node(i) {
                Ok(node) => Some(node),
                Err(err) => {
                    log::warn!("skipping tab {}: {}", i, err);
                    None
                }
            })
            .collect::<Vec<_>>();

        // Снимаем маркер до установки: при ошибке не остаётся двух выбранных
        for node in &others {
            // Общий tab node с выбранным не трогаем
            if *node == selected {
                continue;
            }
            self.document.remove_class(node, &self.config.marker_class)?;
        }

        log::debug!("selecting tab {}: {}", index, self.document.describe(&selected));
        self.document.add_class(&selected, &self.config.marker_class)

    }

    /// Parent element of the first label of input `index`.
    pub fn tab_node(&self, index: usize) -> Result<D::Node> {
        let input = self.inputs.get(index).ok_or(TabSelectionError::UnknownTab {
            index,
            len: self.inputs.len(),
        })?;
        let label = self
            .document
            .first_label(input)
            .ok_or(TabSelectionError::MissingLabel { index })?;
        self.document
            .parent_element(&label)
            .ok_or(TabSelectionError::MissingTabNode { index })
    }

    /// First tracked input whose tab node carries the marker.
    pub fn selected_index(&self) -> Option<usize> {
        self.marked_indices().into_iter().next()
    }

    pub fn marked_indices(&self) -> Vec<usize> {
        (0..self.inputs.len())
            .filter(|&i| {
                self.tab_node(i)
                    .map(|node| self.document.has_class(&node, &self.config.marker_class))
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn inputs(&self) -> &[D::Node] {
        &self.inputs
    }

    pub fn container(&self) -> &D::Node {
        &self.container
    }

    pub fn config(&self) -> &TabSelectionConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn into_document(self) -> D {
        self.document
    }
}

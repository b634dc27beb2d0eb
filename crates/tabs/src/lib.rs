//! Tab selection core
//!
//! Marks the "tab node" (parent of an input's first label) of the most
//! recently clicked tab input with a CSS marker class. The DOM is reached
//! through the [`TabDocument`] trait so the same controller drives the browser
//! (`frontend` crate) and the in-memory [`MemoryDocument`].

pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod memory;

pub use config::TabSelectionConfig;
pub use controller::TabSelectionController;
pub use document::TabDocument;
pub use error::{Result, TabSelectionError};
pub use memory::{MemoryDocument, NodeId};

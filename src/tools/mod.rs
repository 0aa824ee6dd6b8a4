//! Tool system - static definitions, built-in catalog, and registry lookup

mod catalog;
mod definition;
mod registry;

pub use catalog::BUILTIN_TOOLS;
pub use definition::{ToolDefinition, ToolGroup};
pub use registry::ToolRegistry;

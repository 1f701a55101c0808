//! Catalog of registered components.
//!
//! This module provides:
//!
//! - [`Catalog`]: an ordered registry of component descriptors
//! - [`install`] / [`global`]: the once-initialized process-wide catalog
//! - [`builtin`]: the storybook's atoms and molecules
//! - [`controls`]: control metadata for interactive catalog tools

pub mod builtin;
mod controls;
mod global;
mod registry;

pub use controls::{controls, summarize, ComponentSummary, Control, ControlKind};
pub use global::{global, install, resolve, resolve_class};
pub use registry::{Catalog, CatalogError};

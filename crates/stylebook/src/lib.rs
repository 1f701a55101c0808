//! # Stylebook - variant-driven component styling
//!
//! Stylebook turns declarative component descriptors into the ordered class
//! tokens a rendered element carries. A component declares base tokens and a
//! set of axes (variant, size, state flags); each render picks options along
//! those axes and may append free-form overrides.
//!
//! ## Core Concepts
//!
//! - [`ComponentDescriptor`]: the immutable declaration of a component
//! - [`Axis`]: a named dimension of choice, either a select or a toggle
//! - [`Selection`]: the per-render choice of options, possibly partial
//! - [`resolve`]: base tokens, then each axis in order, then overrides
//! - [`Catalog`]: an ordered registry of descriptors, with a process-wide
//!   instance reachable through [`global`]
//! - [`Renderer`]: MiniJinja templates that resolve classes inline
//!
//! ## Quick Start
//!
//! ```rust
//! use stylebook::builtin::{ButtonSize, ButtonVariant};
//! use stylebook::Selection;
//!
//! let class = stylebook::global()
//!     .resolve_class(
//!         "button",
//!         &Selection::new()
//!             .with(ButtonVariant::Outline)
//!             .with(ButtonSize::Sm)
//!             .class("w-full"),
//!     )
//!     .unwrap();
//!
//! assert!(class.ends_with("w-full"));
//! ```
//!
//! ## Declaring Components
//!
//! Descriptors are built with a validating builder, or loaded from YAML with
//! [`load_stylesheet`]:
//!
//! ```rust
//! use stylebook::{Axis, ComponentDescriptor, Selection};
//!
//! let chip = ComponentDescriptor::builder("chip")
//!     .base("inline-flex rounded-full")
//!     .axis(Axis::select("tone").option("neutral", "bg-muted").option("info", "bg-blue-500"))
//!     .axis(Axis::toggle("selected", "ring-2"))
//!     .build()
//!     .unwrap();
//!
//! let tokens = chip.resolve(&Selection::new().flag("selected", true)).unwrap();
//! assert_eq!(tokens, ["inline-flex", "rounded-full", "bg-muted", "ring-2"]);
//! ```
//!
//! ## Conflicting Tokens
//!
//! Resolution never reorders or deduplicates tokens. Overrides come last so
//! that, under the usual cascade rules of the consuming style engine, they
//! win over base and axis tokens.

pub mod catalog;
mod render;
mod stylesheet;
mod util;
pub mod variant;

pub use catalog::{
    builtin, controls, global, install, summarize, Catalog, CatalogError, ComponentSummary,
    Control, ControlKind,
};
pub use render::Renderer;
pub use stylesheet::{load_stylesheet, parse_stylesheet, StylesheetError};
pub use util::{join_classes, join_tokens, split_tokens, IntoTokens};
pub use variant::{
    resolve, Axis, AxisKind, ComponentDescriptor, DescriptorBuilder, DescriptorError, Preset,
    ResolveError, Selection, VariantKey, VariantOption, CLASS_KEY, TOGGLE_OFF, TOGGLE_ON,
};

//! Variant system: descriptors, selections and resolution.
//!
//! This module provides the core primitives:
//!
//! - [`Axis`]: a named dimension of choice with ordered options
//! - [`ComponentDescriptor`]: base tokens plus axes, built and validated once
//! - [`Selection`]: a caller's per-render choice of options and overrides
//! - [`resolve`]: turns a descriptor and selection into ordered tokens
//!
//! Resolution is a pure function: descriptors are immutable after
//! [`DescriptorBuilder::build`], selections are plain values, and the same
//! pair always yields the same token sequence.

mod axis;
mod descriptor;
mod error;
mod resolve;
mod selection;

pub use axis::{Axis, AxisKind, VariantOption, TOGGLE_OFF, TOGGLE_ON};
pub use descriptor::{ComponentDescriptor, DescriptorBuilder, Preset};
pub use error::{DescriptorError, ResolveError};
pub use resolve::resolve;
pub use selection::{Selection, VariantKey, CLASS_KEY};

//! Markup rendering with resolved component classes.
//!
//! [`Renderer`] wraps a MiniJinja environment with two helpers:
//!
//! - `variants(component, **options)`: resolves a component's class string;
//!   the reserved `class` argument supplies override tokens
//! - `cx`: joins class fragments, skipping empty and falsy ones

mod functions;
mod renderer;

pub use renderer::Renderer;

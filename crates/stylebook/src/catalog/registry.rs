//! Component registry for the catalog.
//!
//! This module provides [`Catalog`], an insertion-ordered collection of
//! validated [`ComponentDescriptor`]s keyed by component name.
//!
//! # Registration
//!
//! Components are registered under their descriptor's name:
//!
//! 1. [`Catalog::register`] refuses names that are already taken
//! 2. [`Catalog::register_or_replace`] swaps the existing entry in place,
//!    keeping its position; stylesheets use this to override built-ins
//!
//! # Ordering
//!
//! Iteration follows registration order so catalog tools list components
//! the way they were declared, and output is stable between runs.

use std::collections::HashMap;

use tracing::debug;

use crate::variant::{ComponentDescriptor, ResolveError, Selection};

/// Error type for catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A component with the same name is already registered.
    #[error("component \"{name}\" is already registered")]
    Duplicate {
        /// The name that was registered twice
        name: String,
    },

    /// No component is registered under the requested name.
    #[error("component not found: \"{name}\"")]
    NotFound {
        /// The name that was requested
        name: String,
    },

    /// The process-wide catalog was installed or used before this install.
    #[error("the global catalog is already initialized")]
    AlreadyInstalled,

    /// The component exists but the selection does not resolve against it.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Registry of component descriptors.
///
/// # Thread Safety
///
/// The catalog is plain data. Shared read-only access (including through
/// the process-wide catalog) is safe from any number of threads; mutation
/// requires `&mut` and therefore exclusive access.
///
/// # Example
///
/// ```rust
/// use stylebook::{Axis, Catalog, ComponentDescriptor, Selection};
///
/// let mut catalog = Catalog::new();
/// catalog
///     .register(
///         ComponentDescriptor::builder("separator")
///             .base("bg-border shrink-0")
///             .axis(
///                 Axis::select("orientation")
///                     .option("horizontal", "h-px w-full")
///                     .option("vertical", "h-full w-px"),
///             )
///             .build()
///             .unwrap(),
///     )
///     .unwrap();
///
/// let class = catalog
///     .resolve_class("separator", &Selection::new().set("orientation", "vertical"))
///     .unwrap();
/// assert_eq!(class, "bg-border shrink-0 h-full w-px");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ComponentDescriptor>,
    /// Map from component name to its position in `entries`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor under its name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Duplicate`] if the name is already taken.
    pub fn register(&mut self, descriptor: ComponentDescriptor) -> Result<(), CatalogError> {
        if self.index.contains_key(descriptor.name()) {
            return Err(CatalogError::Duplicate {
                name: descriptor.name().to_string(),
            });
        }
        debug!(component = descriptor.name(), "registered component");
        self.index
            .insert(descriptor.name().to_string(), self.entries.len());
        self.entries.push(descriptor);
        Ok(())
    }

    /// Registers a descriptor, replacing any existing one with the same name.
    ///
    /// A replaced entry keeps its original position. Returns the descriptor
    /// that was replaced, if any.
    pub fn register_or_replace(
        &mut self,
        descriptor: ComponentDescriptor,
    ) -> Option<ComponentDescriptor> {
        match self.index.get(descriptor.name()) {
            Some(&position) => {
                debug!(component = descriptor.name(), "replaced component");
                Some(std::mem::replace(&mut self.entries[position], descriptor))
            }
            None => {
                self.index
                    .insert(descriptor.name().to_string(), self.entries.len());
                debug!(component = descriptor.name(), "registered component");
                self.entries.push(descriptor);
                None
            }
        }
    }

    /// Merges descriptors, replacing same-named entries.
    ///
    /// Returns how many existing entries were replaced.
    pub fn merge(&mut self, descriptors: impl IntoIterator<Item = ComponentDescriptor>) -> usize {
        descriptors
            .into_iter()
            .filter_map(|d| self.register_or_replace(d))
            .count()
    }

    /// Looks up a descriptor by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no such component is registered.
    pub fn get(&self, name: &str) -> Result<&ComponentDescriptor, CatalogError> {
        self.index
            .get(name)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })
    }

    /// Returns true if a component with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Looks up a component and resolves a selection against it.
    pub fn resolve(&self, name: &str, selection: &Selection) -> Result<Vec<String>, CatalogError> {
        Ok(self.get(name)?.resolve(selection)?)
    }

    /// Looks up a component and resolves a selection into a `class` value.
    pub fn resolve_class(&self, name: &str, selection: &Selection) -> Result<String, CatalogError> {
        Ok(self.get(name)?.resolve_class(selection)?)
    }

    /// Iterates over descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ComponentDescriptor> {
        self.entries.iter()
    }

    /// Iterates over component names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|d| d.name())
    }

    /// Distinct catalog groups in order of first appearance.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for group in self.entries.iter().filter_map(|d| d.group()) {
            if !groups.contains(&group) {
                groups.push(group);
            }
        }
        groups
    }

    /// Iterates over the descriptors of one group in registration order.
    pub fn in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a ComponentDescriptor> {
        self.entries
            .iter()
            .filter(move |d| d.group() == Some(group))
    }

    /// Returns the number of registered components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no components are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ComponentDescriptor;
    type IntoIter = std::slice::Iter<'a, ComponentDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

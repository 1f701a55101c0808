//! Component descriptors and their builder.

use std::collections::HashSet;

use super::axis::Axis;
use super::error::{DescriptorError, ResolveError};
use super::resolve::resolve;
use super::selection::{Selection, CLASS_KEY};
use crate::util::IntoTokens;

/// A named selection stored on a descriptor, shown as a story by catalog tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    name: String,
    selection: Selection,
}

impl Preset {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

/// The immutable declaration of a component's axes, options, defaults and
/// base tokens.
///
/// Descriptors can only be obtained through [`ComponentDescriptor::builder`],
/// which validates them, so every descriptor in circulation has unique axis
/// names, non-empty axes, valid defaults and presets that resolve.
///
/// # Example
///
/// ```rust
/// use stylebook::{Axis, ComponentDescriptor, Selection};
///
/// let button = ComponentDescriptor::builder("button")
///     .base("rounded")
///     .axis(
///         Axis::select("variant")
///             .option("default", "bg-primary")
///             .option("outline", "border bg-transparent"),
///     )
///     .axis(Axis::select("size").option("default", "h-9").option("lg", "h-11"))
///     .build()
///     .unwrap();
///
/// let tokens = button.resolve(&Selection::new().set("variant", "outline")).unwrap();
/// assert_eq!(tokens, ["rounded", "border", "bg-transparent", "h-9"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    name: String,
    description: Option<String>,
    group: Option<String>,
    base: Vec<String>,
    axes: Vec<Axis>,
    presets: Vec<Preset>,
}

impl ComponentDescriptor {
    /// Starts building a descriptor with the given component name.
    pub fn builder(name: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder {
            descriptor: ComponentDescriptor {
                name: name.into(),
                description: None,
                group: None,
                base: Vec::new(),
                axes: Vec::new(),
                presets: Vec::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Catalog group, such as `"Atoms"` or `"Molecules"`.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Tokens applied before any axis tokens.
    pub fn base(&self) -> &[String] {
        &self.base
    }

    /// Axes in declaration order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|a| a.name() == name)
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// A selection naming the default option of every axis.
    pub fn defaults(&self) -> Selection {
        self.axes
            .iter()
            .map(|a| (a.name(), a.default_name()))
            .collect()
    }

    /// Resolves a selection into the ordered token sequence for this component.
    ///
    /// See [`resolve`](crate::resolve) for the ordering rules.
    pub fn resolve(&self, selection: &Selection) -> Result<Vec<String>, ResolveError> {
        resolve(self, selection)
    }

    /// Resolves a selection into a `class` attribute value.
    pub fn resolve_class(&self, selection: &Selection) -> Result<String, ResolveError> {
        self.resolve(selection)
            .map(|tokens| crate::util::join_tokens(&tokens))
    }
}

/// Fluent builder for [`ComponentDescriptor`].
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    descriptor: ComponentDescriptor,
}

impl DescriptorBuilder {
    /// Appends base tokens, applied before any axis tokens.
    pub fn base(mut self, tokens: impl IntoTokens) -> Self {
        self.descriptor.base.extend(tokens.into_tokens());
        self
    }

    /// Appends an axis. Axis order is resolution order.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.descriptor.axes.push(axis);
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.descriptor.description = Some(description.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.descriptor.group = Some(group.into());
        self
    }

    /// Adds a named preset. Presets are checked against the finished
    /// descriptor in [`build`](Self::build).
    pub fn preset(mut self, name: impl Into<String>, selection: Selection) -> Self {
        self.descriptor.presets.push(Preset {
            name: name.into(),
            selection,
        });
        self
    }

    /// Validates and returns the descriptor.
    ///
    /// # Errors
    ///
    /// Returns a [`DescriptorError`] describing the first problem found.
    pub fn build(self) -> Result<ComponentDescriptor, DescriptorError> {
        let descriptor = self.descriptor;
        let component = descriptor.name.clone();

        if component.trim().is_empty() {
            return Err(DescriptorError::EmptyName);
        }

        let mut seen_axes = HashSet::new();
        for axis in &descriptor.axes {
            if axis.name() == CLASS_KEY {
                return Err(DescriptorError::ReservedAxis {
                    component,
                    axis: axis.name().to_string(),
                });
            }
            if !seen_axes.insert(axis.name()) {
                return Err(DescriptorError::DuplicateAxis {
                    component,
                    axis: axis.name().to_string(),
                });
            }
            if axis.options().is_empty() {
                return Err(DescriptorError::EmptyAxis {
                    component,
                    axis: axis.name().to_string(),
                });
            }

            let mut seen_options = HashSet::new();
            for option in axis.options() {
                if !seen_options.insert(option.name()) {
                    return Err(DescriptorError::DuplicateOption {
                        component,
                        axis: axis.name().to_string(),
                        option: option.name().to_string(),
                    });
                }
            }

            if axis.default_variant().is_none() {
                return Err(DescriptorError::MissingDefault {
                    component,
                    axis: axis.name().to_string(),
                    option: axis.default_name().to_string(),
                });
            }
        }

        for preset in &descriptor.presets {
            if let Err(source) = resolve(&descriptor, &preset.selection) {
                return Err(DescriptorError::InvalidPreset {
                    component,
                    preset: preset.name.clone(),
                    source,
                });
            }
        }

        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size_axis() -> Axis {
        Axis::select("size").option("default", "h-9").option("lg", "h-11")
    }

    #[test]
    fn test_build_minimal() {
        let descriptor = ComponentDescriptor::builder("card-title")
            .base("leading-none font-semibold")
            .build()
            .unwrap();

        assert_eq!(descriptor.name(), "card-title");
        assert!(descriptor.axes().is_empty());
        assert_eq!(descriptor.base(), ["leading-none", "font-semibold"]);
    }

    #[test]
    fn test_build_metadata() {
        let descriptor = ComponentDescriptor::builder("button")
            .describe("A clickable button")
            .group("Atoms")
            .axis(size_axis())
            .build()
            .unwrap();

        assert_eq!(descriptor.description(), Some("A clickable button"));
        assert_eq!(descriptor.group(), Some("Atoms"));
        assert!(descriptor.axis("size").is_some());
        assert!(descriptor.axis("variant").is_none());
    }

    #[test]
    fn test_build_rejects_empty_name() {
        let result = ComponentDescriptor::builder("  ").build();
        assert_eq!(result, Err(DescriptorError::EmptyName));
    }

    #[test]
    fn test_build_rejects_duplicate_axis() {
        let result = ComponentDescriptor::builder("button")
            .axis(size_axis())
            .axis(size_axis())
            .build();

        assert!(matches!(
            result,
            Err(DescriptorError::DuplicateAxis { ref axis, .. }) if axis == "size"
        ));
    }

    #[test]
    fn test_build_rejects_reserved_axis_name() {
        let result = ComponentDescriptor::builder("button")
            .axis(Axis::select(CLASS_KEY).option("wide", "w-full"))
            .build();

        assert_eq!(
            result,
            Err(DescriptorError::ReservedAxis {
                component: "button".to_string(),
                axis: "class".to_string(),
            })
        );
    }

    #[test]
    fn test_build_rejects_empty_axis() {
        let result = ComponentDescriptor::builder("button")
            .axis(Axis::select("size"))
            .build();

        assert!(matches!(result, Err(DescriptorError::EmptyAxis { .. })));
    }

    #[test]
    fn test_build_rejects_duplicate_option() {
        let result = ComponentDescriptor::builder("button")
            .axis(Axis::select("size").option("lg", "h-10").option("lg", "h-11"))
            .build();

        assert!(matches!(
            result,
            Err(DescriptorError::DuplicateOption { ref option, .. }) if option == "lg"
        ));
    }

    #[test]
    fn test_build_rejects_missing_default() {
        let result = ComponentDescriptor::builder("button")
            .axis(size_axis().default_option("xl"))
            .build();

        assert_eq!(
            result,
            Err(DescriptorError::MissingDefault {
                component: "button".to_string(),
                axis: "size".to_string(),
                option: "xl".to_string(),
            })
        );
    }

    #[test]
    fn test_build_rejects_invalid_preset() {
        let result = ComponentDescriptor::builder("button")
            .axis(size_axis())
            .preset("Huge", Selection::new().set("size", "xxl"))
            .build();

        assert!(matches!(
            result,
            Err(DescriptorError::InvalidPreset { ref preset, .. }) if preset == "Huge"
        ));
    }

    #[test]
    fn test_presets_lookup() {
        let descriptor = ComponentDescriptor::builder("button")
            .axis(size_axis())
            .preset("Large", Selection::new().set("size", "lg"))
            .build()
            .unwrap();

        assert_eq!(descriptor.presets().len(), 1);
        let preset = descriptor.preset("Large").unwrap();
        assert_eq!(preset.selection().get("size"), Some("lg"));
        assert!(descriptor.preset("Small").is_none());
    }

    #[test]
    fn test_defaults_selection() {
        let descriptor = ComponentDescriptor::builder("button")
            .axis(size_axis().default_option("lg"))
            .axis(Axis::toggle("disabled", "opacity-50"))
            .build()
            .unwrap();

        let defaults = descriptor.defaults();
        assert_eq!(defaults.get("size"), Some("lg"));
        assert_eq!(defaults.get("disabled"), Some("false"));
        assert_eq!(
            descriptor.resolve(&defaults).unwrap(),
            descriptor.resolve(&Selection::new()).unwrap()
        );
    }

    #[test]
    fn test_resolve_class() {
        let descriptor = ComponentDescriptor::builder("button")
            .base("rounded")
            .axis(size_axis())
            .build()
            .unwrap();

        let class = descriptor
            .resolve_class(&Selection::new().set("size", "lg").class("w-full"))
            .unwrap();
        assert_eq!(class, "rounded h-11 w-full");
    }
}

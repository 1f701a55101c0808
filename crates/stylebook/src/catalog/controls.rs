//! Control metadata for interactive catalog tools.
//!
//! A catalog tool renders one control per axis: a select box for select
//! axes and a checkbox for toggles. The types here are serializable so an
//! external tool can consume them as JSON.

use serde::Serialize;

use super::registry::Catalog;
use crate::variant::{AxisKind, ComponentDescriptor};

/// How a control presents an axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "control", rename_all = "lowercase")]
pub enum ControlKind {
    /// Pick one of the listed options.
    Select { options: Vec<String> },
    /// On or off.
    Boolean,
}

/// One interactive control, generated from an axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Control {
    pub axis: String,
    #[serde(flatten)]
    pub kind: ControlKind,
    pub default: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Generates controls for every axis of a descriptor, in axis order.
///
/// # Example
///
/// ```rust
/// use stylebook::{controls, ControlKind};
///
/// let button = stylebook::builtin::button().unwrap();
/// let controls = controls(&button);
///
/// assert_eq!(controls[0].axis, "variant");
/// assert!(matches!(controls[2].kind, ControlKind::Boolean));
/// ```
pub fn controls(descriptor: &ComponentDescriptor) -> Vec<Control> {
    descriptor
        .axes()
        .iter()
        .map(|axis| Control {
            axis: axis.name().to_string(),
            kind: match axis.kind() {
                AxisKind::Select => ControlKind::Select {
                    options: axis.option_names(),
                },
                AxisKind::Toggle => ControlKind::Boolean,
            },
            default: axis.default_name().to_string(),
            description: axis.description().map(str::to_string),
        })
        .collect()
}

/// Everything a catalog tool needs to list and drive one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub base: Vec<String>,
    pub controls: Vec<Control>,
    pub presets: Vec<String>,
}

impl ComponentSummary {
    pub fn of(descriptor: &ComponentDescriptor) -> Self {
        Self {
            name: descriptor.name().to_string(),
            group: descriptor.group().map(str::to_string),
            description: descriptor.description().map(str::to_string),
            base: descriptor.base().to_vec(),
            controls: controls(descriptor),
            presets: descriptor
                .presets()
                .iter()
                .map(|p| p.name().to_string())
                .collect(),
        }
    }
}

/// Summarizes every component of a catalog in registration order.
pub fn summarize(catalog: &Catalog) -> Vec<ComponentSummary> {
    catalog.iter().map(ComponentSummary::of).collect()
}

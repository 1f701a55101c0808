//! YAML stylesheets declaring component descriptors.
//!
//! A stylesheet is a mapping from component name to its declaration.
//! Mappings keep their file order, which becomes registration order for
//! components and resolution order for axes.
//!
//! ```yaml
//! button:
//!   group: Atoms
//!   description: A clickable button
//!   base: inline-flex items-center rounded-md
//!   axes:
//!     variant:
//!       default: default
//!       description: Visual style
//!       options:
//!         default: bg-primary text-primary-foreground
//!         outline: [border, bg-background]
//!     disabled:
//!       toggle: pointer-events-none opacity-50
//!   presets:
//!     Outline: { variant: outline }
//!     Wide: { class: w-full }
//! ```
//!
//! Token lists are either a whitespace-separated string or a list of
//! strings. An axis is a toggle when it has a `toggle` key, otherwise it
//! lists `options` and may name a `default` (the first option otherwise).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::util::IntoTokens;
use crate::variant::{Axis, ComponentDescriptor, DescriptorError, Selection, CLASS_KEY};

/// Error type for stylesheet loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StylesheetError {
    /// The stylesheet file could not be read.
    #[error("failed to read stylesheet \"{}\": {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// The stylesheet is not valid YAML.
    #[error("invalid stylesheet YAML: {message}")]
    Parse { message: String },

    /// The YAML is well-formed but does not describe components correctly.
    #[error("invalid declaration for component \"{component}\": {message}")]
    Invalid { component: String, message: String },

    /// A declared component failed descriptor validation.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

impl StylesheetError {
    fn invalid(component: &str, message: impl Into<String>) -> Self {
        Self::Invalid {
            component: component.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TokenSpec {
    Line(String),
    List(Vec<String>),
}

impl IntoTokens for TokenSpec {
    fn into_tokens(self) -> Vec<String> {
        match self {
            TokenSpec::Line(line) => line.into_tokens(),
            TokenSpec::List(list) => list.into_tokens(),
        }
    }
}

/// Reads and parses a stylesheet file.
///
/// # Errors
///
/// Returns [`StylesheetError::Io`] if the file cannot be read, and any
/// error [`parse_stylesheet`] reports for its content.
pub fn load_stylesheet(
    path: impl AsRef<Path>,
) -> Result<Vec<ComponentDescriptor>, StylesheetError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| StylesheetError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let descriptors = parse_stylesheet(&source)?;
    debug!(
        path = %path.display(),
        components = descriptors.len(),
        "loaded stylesheet"
    );
    Ok(descriptors)
}

/// Parses stylesheet source into validated descriptors, in file order.
///
/// An empty document yields no descriptors.
pub fn parse_stylesheet(source: &str) -> Result<Vec<ComponentDescriptor>, StylesheetError> {
    let root: Value = serde_yaml::from_str(source).map_err(|e| StylesheetError::Parse {
        message: e.to_string(),
    })?;

    let components = match root {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(map) => map,
        _ => {
            return Err(StylesheetError::Parse {
                message: "top level must map component names to declarations".to_string(),
            })
        }
    };

    let mut descriptors = Vec::with_capacity(components.len());
    for (key, body) in components {
        let name = key_name(&key).ok_or_else(|| StylesheetError::Parse {
            message: format!("component names must be strings, found {key:?}"),
        })?;
        descriptors.push(parse_component(&name, body)?);
    }
    Ok(descriptors)
}

fn parse_component(name: &str, body: Value) -> Result<ComponentDescriptor, StylesheetError> {
    let mut builder = ComponentDescriptor::builder(name);

    let body = match body {
        Value::Null => return Ok(builder.build()?),
        Value::Mapping(map) => map,
        _ => return Err(StylesheetError::invalid(name, "declaration must be a mapping")),
    };

    let mut presets = None;
    for (key, value) in body {
        let key = key_name(&key).unwrap_or_default();
        match key.as_str() {
            "group" => builder = builder.group(string_field(name, "group", value)?),
            "description" => builder = builder.describe(string_field(name, "description", value)?),
            "base" => builder = builder.base(tokens(name, "base", value)?),
            "axes" => {
                for (axis_key, axis_body) in mapping_field(name, "axes", value)? {
                    let axis_name = key_name(&axis_key).ok_or_else(|| {
                        StylesheetError::invalid(name, "axis names must be strings")
                    })?;
                    builder = builder.axis(parse_axis(name, &axis_name, axis_body)?);
                }
            }
            // Presets resolve against the finished axes, so apply them last
            "presets" => presets = Some(mapping_field(name, "presets", value)?),
            other => {
                return Err(StylesheetError::invalid(name, format!("unknown key \"{other}\"")))
            }
        }
    }

    for (preset_key, preset_body) in presets.unwrap_or_default() {
        let preset_name = key_name(&preset_key)
            .ok_or_else(|| StylesheetError::invalid(name, "preset names must be strings"))?;
        builder = builder.preset(&preset_name, parse_preset(name, &preset_name, preset_body)?);
    }

    Ok(builder.build()?)
}

fn parse_axis(component: &str, axis: &str, body: Value) -> Result<Axis, StylesheetError> {
    let map = match body {
        Value::Mapping(map) => map,
        _ => {
            return Err(StylesheetError::invalid(
                component,
                format!("axis \"{axis}\" must be a mapping"),
            ))
        }
    };

    let mut toggle = None;
    let mut options = None;
    let mut default = None;
    let mut description = None;

    for (key, value) in map {
        let key = key_name(&key).unwrap_or_default();
        match key.as_str() {
            "toggle" => toggle = Some(tokens(component, "toggle", value)?),
            "options" => options = Some(mapping_field(component, "options", value)?),
            "default" => default = Some(option_value(component, axis, value)?),
            "description" => description = Some(string_field(component, "description", value)?),
            other => {
                return Err(StylesheetError::invalid(
                    component,
                    format!("unknown key \"{other}\" in axis \"{axis}\""),
                ))
            }
        }
    }

    let mut parsed = match (toggle, options) {
        (Some(tokens), None) => {
            if default.is_some() {
                return Err(StylesheetError::invalid(
                    component,
                    format!("toggle axis \"{axis}\" cannot declare a default"),
                ));
            }
            Axis::toggle(axis, tokens)
        }
        (None, Some(options)) => {
            let mut parsed = Axis::select(axis);
            for (option_key, option_tokens) in options {
                let option = key_name(&option_key).ok_or_else(|| {
                    StylesheetError::invalid(
                        component,
                        format!("options of \"{axis}\" must be named"),
                    )
                })?;
                parsed = parsed.option(option, tokens(component, axis, option_tokens)?);
            }
            if let Some(default) = default {
                parsed = parsed.default_option(default);
            }
            parsed
        }
        (Some(_), Some(_)) => {
            return Err(StylesheetError::invalid(
                component,
                format!("axis \"{axis}\" declares both toggle and options"),
            ))
        }
        (None, None) => {
            return Err(StylesheetError::invalid(
                component,
                format!("axis \"{axis}\" declares neither toggle nor options"),
            ))
        }
    };

    if let Some(description) = description {
        parsed = parsed.describe(description);
    }
    Ok(parsed)
}

fn parse_preset(component: &str, preset: &str, body: Value) -> Result<Selection, StylesheetError> {
    let map = match body {
        Value::Null => return Ok(Selection::new()),
        Value::Mapping(map) => map,
        _ => {
            return Err(StylesheetError::invalid(
                component,
                format!("preset \"{preset}\" must be a mapping"),
            ))
        }
    };

    let mut selection = Selection::new();
    for (key, value) in map {
        let axis = key_name(&key).ok_or_else(|| {
            StylesheetError::invalid(
                component,
                format!("keys of preset \"{preset}\" must be strings"),
            )
        })?;
        if axis == CLASS_KEY {
            selection = selection.class(tokens(component, CLASS_KEY, value)?);
        } else {
            let option = option_value(component, &axis, value)?;
            selection.insert(axis, option);
        }
    }
    Ok(selection)
}

/// Mapping keys may be written as plain scalars, so `true` or `2` are
/// accepted as names too.
fn key_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Option names in presets and defaults; booleans select toggle options.
fn option_value(component: &str, axis: &str, value: Value) -> Result<String, StylesheetError> {
    key_name(&value).ok_or_else(|| {
        StylesheetError::invalid(component, format!("option for \"{axis}\" must be a scalar"))
    })
}

fn tokens(component: &str, field: &str, value: Value) -> Result<Vec<String>, StylesheetError> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_yaml::from_value::<TokenSpec>(value)
        .map(IntoTokens::into_tokens)
        .map_err(|_| {
            StylesheetError::invalid(
                component,
                format!("\"{field}\" must be a string or a list of strings"),
            )
        })
}

fn string_field(component: &str, field: &str, value: Value) -> Result<String, StylesheetError> {
    match value {
        Value::String(s) => Ok(s),
        _ => Err(StylesheetError::invalid(component, format!("\"{field}\" must be a string"))),
    }
}

fn mapping_field(component: &str, field: &str, value: Value) -> Result<Mapping, StylesheetError> {
    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(StylesheetError::invalid(component, format!("\"{field}\" must be a mapping"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{AxisKind, ResolveError};

    const BUTTON: &str = r#"
button:
  group: Atoms
  description: A clickable button
  base: inline-flex rounded-md
  axes:
    variant:
      description: Visual style
      default: outline
      options:
        default: bg-primary text-primary-foreground
        outline: [border, bg-background]
    size:
      options:
        sm: h-8
        lg: h-10
    disabled:
      toggle: pointer-events-none opacity-50
  presets:
    Ghostly: { variant: default, disabled: true }
    Wide:
      class: w-full
"#;

    #[test]
    fn test_parse_full_component() {
        let descriptors = parse_stylesheet(BUTTON).unwrap();
        assert_eq!(descriptors.len(), 1);

        let button = &descriptors[0];
        assert_eq!(button.name(), "button");
        assert_eq!(button.group(), Some("Atoms"));
        assert_eq!(button.description(), Some("A clickable button"));
        assert_eq!(button.base(), ["inline-flex", "rounded-md"]);

        let axes: Vec<&str> = button.axes().iter().map(|a| a.name()).collect();
        assert_eq!(axes, vec!["variant", "size", "disabled"]);

        let variant = button.axis("variant").unwrap();
        assert_eq!(variant.default_name(), "outline");
        assert_eq!(variant.description(), Some("Visual style"));
        assert_eq!(button.axis("size").unwrap().default_name(), "sm");
        assert_eq!(button.axis("disabled").unwrap().kind(), AxisKind::Toggle);
    }

    #[test]
    fn test_parse_resolves_like_builder() {
        let button = parse_stylesheet(BUTTON).unwrap().remove(0);
        let tokens = button.resolve(&Selection::new()).unwrap();
        assert_eq!(tokens, ["inline-flex", "rounded-md", "border", "bg-background", "h-8"]);
    }

    #[test]
    fn test_parse_presets() {
        let button = parse_stylesheet(BUTTON).unwrap().remove(0);

        let ghostly = button.preset("Ghostly").unwrap().selection();
        assert_eq!(ghostly.get("variant"), Some("default"));
        assert_eq!(ghostly.get("disabled"), Some("true"));

        let wide = button.preset("Wide").unwrap().selection();
        assert_eq!(wide.overrides(), ["w-full"]);
    }

    #[test]
    fn test_parse_keeps_component_order() {
        let source = "zeta:\n  base: a\nalpha:\n  base: b\nmid:\n";
        let names: Vec<String> = parse_stylesheet(source)
            .unwrap()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(parse_stylesheet("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_mapping() {
        let result = parse_stylesheet("- button\n- card\n");
        assert!(matches!(result, Err(StylesheetError::Parse { .. })));
    }

    #[test]
    fn test_parse_rejects_bad_yaml() {
        let result = parse_stylesheet("button: [unclosed\n");
        assert!(matches!(result, Err(StylesheetError::Parse { .. })));
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let result = parse_stylesheet("button:\n  colour: red\n");
        assert_eq!(
            result,
            Err(StylesheetError::Invalid {
                component: "button".to_string(),
                message: "unknown key \"colour\"".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_rejects_toggle_with_options() {
        let source = r#"
button:
  axes:
    disabled:
      toggle: a
      options:
        x: b
"#;
        let result = parse_stylesheet(source);
        assert!(matches!(result, Err(StylesheetError::Invalid { .. })));
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        let source = "button:\n  base:\n    nested: map\n";
        let result = parse_stylesheet(source);
        assert!(matches!(
            result,
            Err(StylesheetError::Invalid { ref message, .. }) if message.contains("base")
        ));
    }

    #[test]
    fn test_parse_reports_descriptor_errors() {
        let source = r#"
button:
  axes:
    size:
      default: xl
      options:
        sm: h-8
"#;
        let result = parse_stylesheet(source);
        assert!(matches!(
            result,
            Err(StylesheetError::Descriptor(DescriptorError::MissingDefault { .. }))
        ));
    }

    #[test]
    fn test_parse_rejects_axis_named_class() {
        let source = "button:\n  axes:\n    class:\n      options:\n        wide: w-full\n";
        let result = parse_stylesheet(source);
        assert!(matches!(
            result,
            Err(StylesheetError::Descriptor(DescriptorError::ReservedAxis { ref axis, .. }))
                if axis == CLASS_KEY
        ));
    }

    #[test]
    fn test_parse_reports_invalid_preset() {
        let source = r#"
button:
  axes:
    size:
      options:
        sm: h-8
  presets:
    Big: { size: xl }
"#;
        let result = parse_stylesheet(source);
        assert!(matches!(
            result,
            Err(StylesheetError::Descriptor(DescriptorError::InvalidPreset {
                source: ResolveError::InvalidOption { .. },
                ..
            }))
        ));
    }

    #[test]
    fn test_load_stylesheet_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        std::fs::write(&path, BUTTON).unwrap();

        let descriptors = load_stylesheet(&path).unwrap();
        assert_eq!(descriptors[0].name(), "button");
    }

    #[test]
    fn test_load_stylesheet_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let result = load_stylesheet(&path);
        assert!(matches!(result, Err(StylesheetError::Io { .. })));
        assert!(result.unwrap_err().to_string().contains("missing.yaml"));
    }
}

//! Command implementations.
//!
//! Every command renders its output to a `String` so it can be tested
//! without capturing stdout.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use stylebook::{controls, summarize, Catalog, ControlKind, Renderer, Selection};
use tracing::debug;

use crate::output::{OutputMode, Palette};

/// Label for components declared without a group.
const UNGROUPED: &str = "Other";

pub fn list(catalog: &Catalog, mode: OutputMode) -> Result<String> {
    if mode.is_json() {
        return to_json(&summarize(catalog));
    }

    let palette = Palette::new(mode);
    let width = catalog.names().map(str::len).max().unwrap_or(0);
    let mut out = String::new();

    let mut groups: Vec<Option<&str>> = catalog.groups().into_iter().map(Some).collect();
    if catalog.iter().any(|d| d.group().is_none()) {
        groups.push(None);
    }

    for group in groups {
        writeln!(out, "{}", palette.heading(group.unwrap_or(UNGROUPED)))?;
        for descriptor in catalog.iter().filter(|d| d.group() == group) {
            let axes: Vec<&str> = descriptor.axes().iter().map(|a| a.name()).collect();
            let padding = " ".repeat(width - descriptor.name().len());
            writeln!(
                out,
                "  {}{}  {}",
                palette.name(descriptor.name()),
                padding,
                palette.muted(&axes.join(", "))
            )?;
        }
    }
    Ok(out)
}

pub fn controls_of(catalog: &Catalog, component: &str, mode: OutputMode) -> Result<String> {
    let descriptor = catalog.get(component)?;
    let controls = controls(descriptor);
    if mode.is_json() {
        return to_json(&controls);
    }

    let palette = Palette::new(mode);
    let mut out = String::new();
    match descriptor.description() {
        Some(description) => writeln!(out, "{}: {}", palette.name(component), description)?,
        None => writeln!(out, "{}", palette.name(component))?,
    }
    if controls.is_empty() {
        writeln!(out, "  {}", palette.muted("(no controls)"))?;
    }

    for control in &controls {
        let (kind, choices) = match &control.kind {
            ControlKind::Select { options } => ("select", options.join("|")),
            ControlKind::Boolean => ("boolean", "true|false".to_string()),
        };
        write!(
            out,
            "  {}  {}  {}  {}",
            palette.accent(&control.axis),
            kind,
            choices,
            palette.muted(&format!("(default: {})", control.default))
        )?;
        if let Some(description) = &control.description {
            write!(out, "  {description}")?;
        }
        writeln!(out)?;
    }
    Ok(out)
}

#[derive(Serialize)]
struct Resolved<'a> {
    component: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    preset: Option<&'a str>,
    tokens: Vec<String>,
    class: String,
}

pub fn resolve(
    catalog: &Catalog,
    component: &str,
    preset: Option<&str>,
    assignments: &[(String, String)],
    classes: &[String],
    mode: OutputMode,
) -> Result<String> {
    let descriptor = catalog.get(component)?;

    let mut selection = match preset {
        Some(name) => descriptor
            .preset(name)
            .map(|p| p.selection().clone())
            .ok_or_else(|| anyhow!("component \"{component}\" has no preset \"{name}\""))?,
        None => Selection::new(),
    };
    for (axis, option) in assignments {
        selection.insert(axis.as_str(), option.as_str());
    }
    for class in classes {
        selection = selection.class(class.as_str());
    }

    let tokens = descriptor.resolve(&selection)?;
    debug!(component, tokens = tokens.len(), "resolved from command line");

    let class = stylebook::join_tokens(&tokens);
    if mode.is_json() {
        return to_json(&Resolved {
            component,
            preset,
            tokens,
            class,
        });
    }
    Ok(format!("{class}\n"))
}

pub fn stories(catalog: &Catalog, component: &str, mode: OutputMode) -> Result<String> {
    let descriptor = catalog.get(component)?;

    let mut resolved = Vec::with_capacity(descriptor.presets().len());
    for preset in descriptor.presets() {
        let tokens = descriptor
            .resolve(preset.selection())
            .with_context(|| format!("preset \"{}\" failed to resolve", preset.name()))?;
        resolved.push((preset.name(), tokens));
    }

    if mode.is_json() {
        let entries: Vec<Resolved<'_>> = resolved
            .into_iter()
            .map(|(name, tokens)| Resolved {
                component,
                preset: Some(name),
                class: stylebook::join_tokens(&tokens),
                tokens,
            })
            .collect();
        return to_json(&entries);
    }

    let palette = Palette::new(mode);
    let mut out = String::new();
    if resolved.is_empty() {
        writeln!(out, "{}", palette.muted("(no stories)"))?;
    }
    for (name, tokens) in resolved {
        writeln!(out, "{}", palette.name(name))?;
        writeln!(out, "  {}", stylebook::join_tokens(&tokens))?;
    }
    Ok(out)
}

pub fn render(catalog: &Catalog, template: &Path, data: Option<&Path>) -> Result<String> {
    let context: serde_json::Value = match data {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read data file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("invalid JSON in {}", path.display()))?
        }
        None => serde_json::Value::Object(Default::default()),
    };

    let dir = template.parent().unwrap_or_else(|| Path::new("."));
    let name = template
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("invalid template path {}", template.display()))?;

    let mut renderer = Renderer::new(catalog.clone());
    renderer.set_template_dir(dir);
    renderer
        .render(name, &context)
        .with_context(|| format!("failed to render {}", template.display()))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        stylebook::builtin::catalog()
    }

    #[test]
    fn test_list_text_groups_components() {
        let out = list(&catalog(), OutputMode::Text).unwrap();
        let atoms = out.find("Atoms").unwrap();
        let molecules = out.find("Molecules").unwrap();
        let button = out.find("button").unwrap();
        let field = out.find("  field ").unwrap();

        assert!(atoms < button && button < molecules && molecules < field);
        assert!(out.contains("variant, size, disabled"));
        assert!(!out.contains(UNGROUPED));
    }

    #[test]
    fn test_list_ungrouped_components() {
        let mut catalog = Catalog::new();
        catalog
            .register(stylebook::ComponentDescriptor::builder("chip").build().unwrap())
            .unwrap();

        let out = list(&catalog, OutputMode::Text).unwrap();
        assert!(out.starts_with(UNGROUPED));
        assert!(out.contains("chip"));
    }

    #[test]
    fn test_list_json() {
        let out = list(&catalog(), OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), catalog().len());
    }

    #[test]
    fn test_controls_text() {
        let out = controls_of(&catalog(), "separator", OutputMode::Text).unwrap();
        assert!(out.contains("orientation  select  horizontal|vertical  (default: horizontal)"));
    }

    #[test]
    fn test_controls_unknown_component() {
        let err = controls_of(&catalog(), "carousel", OutputMode::Text).unwrap_err();
        assert!(err.to_string().contains("carousel"));
    }

    #[test]
    fn test_controls_without_axes() {
        let out = controls_of(&catalog(), "card-title", OutputMode::Text).unwrap();
        assert!(out.contains("(no controls)"));
    }

    #[test]
    fn test_resolve_text() {
        let assignments = vec![("orientation".to_string(), "vertical".to_string())];
        let out = resolve(
            &catalog(),
            "separator",
            None,
            &assignments,
            &["my-4".to_string()],
            OutputMode::Text,
        )
        .unwrap();
        assert_eq!(out, "bg-border shrink-0 h-full w-px my-4\n");
    }

    #[test]
    fn test_resolve_preset_with_override() {
        let assignments = vec![("orientation".to_string(), "horizontal".to_string())];
        let out = resolve(
            &catalog(),
            "separator",
            Some("Vertical"),
            &assignments,
            &[],
            OutputMode::Text,
        )
        .unwrap();
        assert_eq!(out, "bg-border shrink-0 h-px w-full\n");
    }

    #[test]
    fn test_resolve_unknown_preset() {
        let err = resolve(&catalog(), "separator", Some("Diagonal"), &[], &[], OutputMode::Text)
            .unwrap_err();
        assert!(err.to_string().contains("Diagonal"));
    }

    #[test]
    fn test_resolve_invalid_option() {
        let assignments = vec![("variant".to_string(), "bogus".to_string())];
        let err = resolve(&catalog(), "button", None, &assignments, &[], OutputMode::Text)
            .unwrap_err();
        assert!(err.to_string().contains("invalid option 'bogus'"));
    }

    #[test]
    fn test_resolve_json() {
        let out = resolve(&catalog(), "card-content", None, &[], &[], OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["component"], "card-content");
        assert_eq!(value["tokens"], serde_json::json!(["px-6"]));
        assert_eq!(value["class"], "px-6");
        assert!(value.get("preset").is_none());
    }

    #[test]
    fn test_stories_text() {
        let out = stories(&catalog(), "separator", OutputMode::Text).unwrap();
        assert_eq!(
            out,
            "Horizontal\n  bg-border shrink-0 h-px w-full\n\
             Vertical\n  bg-border shrink-0 h-full w-px\n"
        );
    }

    #[test]
    fn test_stories_json() {
        let out = stories(&catalog(), "badge", OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[1]["preset"], "Success");
    }

    #[test]
    fn test_render_template_with_data() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("card.jinja");
        let data = dir.path().join("data.json");
        std::fs::write(
            &template,
            r#"<div class="{{ variants("card-content", class=extra) }}">{{ title }}</div>"#,
        )
        .unwrap();
        std::fs::write(&data, r#"{"title": "Hello", "extra": "pt-0"}"#).unwrap();

        let out = render(&catalog(), &template, Some(&data)).unwrap();
        assert_eq!(out, r#"<div class="px-6 pt-0">Hello</div>"#);
    }

    #[test]
    fn test_render_missing_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("card.jinja");
        std::fs::write(&template, "x").unwrap();

        let err = render(&catalog(), &template, Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }
}

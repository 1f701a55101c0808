//! MiniJinja function and filter registration.

use std::sync::Arc;

use minijinja::value::{Kwargs, ValueKind};
use minijinja::{Environment, Error, ErrorKind, Value};

use crate::catalog::Catalog;
use crate::util::join_classes;
use crate::variant::{Selection, CLASS_KEY, TOGGLE_OFF, TOGGLE_ON};

/// Registers the `variants` function and `cx` filter on an environment.
pub(crate) fn register_functions(env: &mut Environment<'static>, catalog: Arc<Catalog>) {
    // Usage: {{ variants("button", variant="outline", disabled=true, class="w-full") }}
    env.add_function(
        "variants",
        move |component: String, kwargs: Kwargs| -> Result<String, Error> {
            let selection = selection_from_kwargs(&kwargs)?;
            catalog
                .resolve_class(&component, &selection)
                .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
        },
    );

    // Usage: {{ [variants("card"), extra, ""] | cx }} joins non-empty fragments
    env.add_filter("cx", |value: Value| -> Result<String, Error> {
        let fragments = class_fragments(&value)?;
        Ok(join_classes(fragments.iter().map(String::as_str)))
    });
}

/// Builds a selection from template keyword arguments.
///
/// The reserved `class` key supplies override tokens; booleans choose
/// toggle options. Undefined and none values leave the axis at its default,
/// so optional template props can be passed straight through.
fn selection_from_kwargs(kwargs: &Kwargs) -> Result<Selection, Error> {
    let mut selection = Selection::new();
    for key in kwargs.args() {
        let value: Value = kwargs.get(key)?;
        if value.is_undefined() || value.is_none() {
            continue;
        }
        if key == CLASS_KEY {
            let fragments = class_fragments(&value)?;
            selection = selection.class(fragments);
        } else if value.kind() == ValueKind::Bool {
            selection.insert(key, if value.is_true() { TOGGLE_ON } else { TOGGLE_OFF });
        } else if let Some(option) = value.as_str() {
            selection.insert(key, option);
        } else {
            selection.insert(key, value.to_string());
        }
    }
    Ok(selection)
}

/// Flattens a string or a sequence of strings into class fragments.
///
/// Undefined, none and boolean values contribute nothing, so conditional
/// expressions like `active and "ring-2"` can be passed straight through.
fn class_fragments(value: &Value) -> Result<Vec<String>, Error> {
    if value.is_undefined() || value.is_none() || value.kind() == ValueKind::Bool {
        return Ok(Vec::new());
    }
    match value.kind() {
        ValueKind::Seq | ValueKind::Iterable => {
            let mut fragments = Vec::new();
            for item in value.try_iter()? {
                fragments.extend(class_fragments(&item)?);
            }
            Ok(fragments)
        }
        _ => Ok(vec![value
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string())]),
    }
}

//! Per-render option selections.

use std::collections::BTreeMap;

use super::axis::{TOGGLE_OFF, TOGGLE_ON};
use crate::util::IntoTokens;

/// Key that carries override tokens wherever a selection is written as a
/// mapping (stylesheet presets, template keyword arguments). No axis may use
/// this name.
pub const CLASS_KEY: &str = "class";

/// A strongly-typed option along a known axis.
///
/// Implemented by option enums so callers can write
/// `Selection::new().with(ButtonVariant::Outline)` instead of passing the
/// axis and option names as strings.
pub trait VariantKey {
    /// Name of the axis this option belongs to.
    const AXIS: &'static str;

    /// Name of the option on that axis.
    fn option_name(&self) -> &'static str;
}

/// The caller's per-render choice of options.
///
/// A selection may be partial: axes it leaves out fall back to the
/// descriptor's defaults. Override tokens are kept apart from axis choices
/// and always land at the end of the resolved sequence.
///
/// # Example
///
/// ```rust
/// use stylebook::Selection;
///
/// let selection = Selection::new()
///     .set("variant", "outline")
///     .flag("disabled", true)
///     .class("w-full mt-2");
///
/// assert_eq!(selection.get("variant"), Some("outline"));
/// assert_eq!(selection.get("disabled"), Some("true"));
/// assert_eq!(selection.overrides(), ["w-full", "mt-2"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    choices: BTreeMap<String, String>,
    overrides: Vec<String>,
}

impl Selection {
    /// Creates an empty selection, which resolves to every axis default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chooses `option` on `axis`, returning the updated selection.
    ///
    /// Choosing twice on the same axis keeps the later choice.
    pub fn set(mut self, axis: impl Into<String>, option: impl Into<String>) -> Self {
        self.insert(axis, option);
        self
    }

    /// Sets a toggle axis on or off.
    pub fn flag(self, axis: impl Into<String>, on: bool) -> Self {
        self.set(axis, if on { TOGGLE_ON } else { TOGGLE_OFF })
    }

    /// Chooses a strongly-typed option.
    pub fn with<K: VariantKey>(self, key: K) -> Self {
        self.set(K::AXIS, key.option_name())
    }

    /// Appends free-form override tokens.
    pub fn class(mut self, tokens: impl IntoTokens) -> Self {
        self.overrides.extend(tokens.into_tokens());
        self
    }

    /// In-place form of [`set`](Self::set).
    pub fn insert(&mut self, axis: impl Into<String>, option: impl Into<String>) {
        self.choices.insert(axis.into(), option.into());
    }

    /// Returns the option chosen on `axis`, if any.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.choices.get(axis).map(String::as_str)
    }

    /// Iterates over `(axis, option)` choices in axis-name order.
    pub fn choices(&self) -> impl Iterator<Item = (&str, &str)> {
        self.choices.iter().map(|(a, o)| (a.as_str(), o.as_str()))
    }

    /// Override tokens in the order they were added.
    pub fn overrides(&self) -> &[String] {
        &self.overrides
    }

    /// Returns true if the selection neither chooses options nor overrides tokens.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty() && self.overrides.is_empty()
    }
}

impl<A, O> FromIterator<(A, O)> for Selection
where
    A: Into<String>,
    O: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, O)>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for (axis, option) in iter {
            selection.insert(axis, option);
        }
        selection
    }
}

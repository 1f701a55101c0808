//! Axes and their options.

use crate::util::IntoTokens;

/// Option name selected when a toggle is on.
pub const TOGGLE_ON: &str = "true";

/// Option name selected when a toggle is off.
pub const TOGGLE_OFF: &str = "false";

/// The shape of choice an axis offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Any number of named options, one of which is chosen.
    Select,
    /// A boolean state flag with exactly the options `"false"` and `"true"`.
    Toggle,
}

/// One concrete value along an axis and the tokens it contributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantOption {
    name: String,
    tokens: Vec<String>,
}

impl VariantOption {
    pub fn new(name: impl Into<String>, tokens: impl IntoTokens) -> Self {
        Self {
            name: name.into(),
            tokens: tokens.into_tokens(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tokens in application order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// A named dimension of visual choice.
///
/// Axes are assembled with a fluent API and then handed to a
/// [`DescriptorBuilder`](super::DescriptorBuilder), which validates them.
/// Options keep their declaration order, which is also the order controls
/// present them in.
///
/// # Example
///
/// ```rust
/// use stylebook::Axis;
///
/// let size = Axis::select("size")
///     .option("default", "h-9 px-4")
///     .option("lg", ["h-10", "px-6"])
///     .describe("Size of the button");
///
/// let disabled = Axis::toggle("disabled", "pointer-events-none opacity-50");
/// assert_eq!(disabled.default_name(), "false");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    name: String,
    kind: AxisKind,
    options: Vec<VariantOption>,
    default: Option<String>,
    description: Option<String>,
}

impl Axis {
    /// Creates a select axis with no options yet.
    ///
    /// Unless [`default_option`](Self::default_option) is called, the first
    /// declared option becomes the default.
    pub fn select(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AxisKind::Select,
            options: Vec::new(),
            default: None,
            description: None,
        }
    }

    /// Creates a toggle axis contributing `tokens` when on and nothing when off.
    ///
    /// Toggles default to off.
    pub fn toggle(name: impl Into<String>, tokens: impl IntoTokens) -> Self {
        Self {
            name: name.into(),
            kind: AxisKind::Toggle,
            options: vec![
                VariantOption::new(TOGGLE_OFF, Vec::<String>::new()),
                VariantOption::new(TOGGLE_ON, tokens),
            ],
            default: Some(TOGGLE_OFF.to_string()),
            description: None,
        }
    }

    /// Adds an option, returning the updated axis for chaining.
    ///
    /// Options added to a toggle turn it into a select axis, since a toggle
    /// only ever has its two fixed options.
    pub fn option(mut self, name: impl Into<String>, tokens: impl IntoTokens) -> Self {
        self.kind = AxisKind::Select;
        self.options.push(VariantOption::new(name, tokens));
        self
    }

    /// Sets the option used when a selection leaves this axis out.
    pub fn default_option(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Attaches a human-readable description, shown by catalog controls.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    pub fn is_toggle(&self) -> bool {
        self.kind == AxisKind::Toggle
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Options in declaration order.
    pub fn options(&self) -> &[VariantOption] {
        &self.options
    }

    /// Names of all options in declaration order.
    pub fn option_names(&self) -> Vec<String> {
        self.options.iter().map(|o| o.name.clone()).collect()
    }

    /// Looks up an option by name.
    pub fn option_named(&self, name: &str) -> Option<&VariantOption> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Name of the default option.
    ///
    /// Falls back to the first option when no default was declared, and to
    /// an empty string for an axis without options.
    pub fn default_name(&self) -> &str {
        match &self.default {
            Some(name) => name,
            None => self.options.first().map(|o| o.name.as_str()).unwrap_or(""),
        }
    }

    /// The option applied when a selection leaves this axis out.
    pub fn default_variant(&self) -> Option<&VariantOption> {
        self.option_named(self.default_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_axis_keeps_declaration_order() {
        let axis = Axis::select("variant")
            .option("default", "bg-primary")
            .option("outline", "border bg-transparent")
            .option("ghost", "");

        assert_eq!(axis.option_names(), vec!["default", "outline", "ghost"]);
        assert_eq!(axis.kind(), AxisKind::Select);
    }

    #[test]
    fn test_select_axis_default_falls_back_to_first() {
        let axis = Axis::select("size").option("sm", "h-8").option("lg", "h-10");
        assert_eq!(axis.default_name(), "sm");
        assert_eq!(
            axis.default_variant().map(|o| o.tokens().to_vec()),
            Some(vec!["h-8".to_string()])
        );
    }

    #[test]
    fn test_select_axis_explicit_default() {
        let axis = Axis::select("size")
            .option("sm", "h-8")
            .option("lg", "h-10")
            .default_option("lg");
        assert_eq!(axis.default_name(), "lg");
    }

    #[test]
    fn test_empty_axis_has_no_default_variant() {
        let axis = Axis::select("size");
        assert_eq!(axis.default_name(), "");
        assert!(axis.default_variant().is_none());
    }

    #[test]
    fn test_toggle_axis_shape() {
        let axis = Axis::toggle("disabled", "opacity-50 pointer-events-none");

        assert!(axis.is_toggle());
        assert_eq!(axis.option_names(), vec![TOGGLE_OFF, TOGGLE_ON]);
        assert_eq!(axis.default_name(), TOGGLE_OFF);
        assert!(axis.option_named(TOGGLE_OFF).map(|o| o.tokens().is_empty()).unwrap_or(false));
        assert_eq!(
            axis.option_named(TOGGLE_ON).map(|o| o.tokens().len()),
            Some(2)
        );
    }

    #[test]
    fn test_option_on_toggle_makes_select() {
        let axis = Axis::toggle("state", "a").option("mixed", "b");
        assert_eq!(axis.kind(), AxisKind::Select);
        assert_eq!(axis.options().len(), 3);
    }

    #[test]
    fn test_describe() {
        let axis = Axis::select("size").describe("Size of the button");
        assert_eq!(axis.description(), Some("Size of the button"));
    }
}

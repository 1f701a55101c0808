//! The variant resolution algorithm.

use tracing::trace;

use super::descriptor::ComponentDescriptor;
use super::error::ResolveError;
use super::selection::Selection;

/// Resolves a selection against a descriptor into an ordered token sequence.
///
/// The output is, in order:
///
/// 1. the descriptor's base tokens;
/// 2. for each axis in declaration order, the tokens of the chosen option,
///    or of the axis default when the selection leaves the axis out;
/// 3. the selection's override tokens.
///
/// Tokens are never reordered or deduplicated. When two tokens conflict,
/// reconciling them is left to the style engine consuming the sequence;
/// later tokens are expected to win.
///
/// # Errors
///
/// - [`ResolveError::UnknownAxis`] if the selection names an axis the
///   descriptor does not declare.
/// - [`ResolveError::InvalidOption`] if the selection names an option its
///   axis does not declare.
pub fn resolve(
    descriptor: &ComponentDescriptor,
    selection: &Selection,
) -> Result<Vec<String>, ResolveError> {
    for (axis, _) in selection.choices() {
        if descriptor.axis(axis).is_none() {
            return Err(ResolveError::UnknownAxis {
                component: descriptor.name().to_string(),
                axis: axis.to_string(),
            });
        }
    }

    let mut tokens = descriptor.base().to_vec();

    for axis in descriptor.axes() {
        let chosen = match selection.get(axis.name()) {
            Some(name) => Some(axis.option_named(name).ok_or_else(|| {
                ResolveError::InvalidOption {
                    component: descriptor.name().to_string(),
                    axis: axis.name().to_string(),
                    option: name.to_string(),
                    expected: axis.option_names(),
                }
            })?),
            None => axis.default_variant(),
        };

        if let Some(option) = chosen {
            tokens.extend(option.tokens().iter().cloned());
        }
    }

    tokens.extend(selection.overrides().iter().cloned());

    trace!(
        component = descriptor.name(),
        tokens = tokens.len(),
        "resolved variant tokens"
    );

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Axis;

    fn button() -> ComponentDescriptor {
        ComponentDescriptor::builder("button")
            .base(["rounded"])
            .axis(
                Axis::select("variant")
                    .option("default", ["bg-primary"])
                    .option("outline", ["border", "bg-transparent"])
                    .default_option("default"),
            )
            .axis(
                Axis::select("size")
                    .option("default", ["h-9"])
                    .option("lg", ["h-11"])
                    .default_option("default"),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn resolve_outline_uses_size_default() {
        let tokens = resolve(&button(), &Selection::new().set("variant", "outline")).unwrap();
        assert_eq!(tokens, ["rounded", "border", "bg-transparent", "h-9"]);
    }

    #[test]
    fn resolve_empty_selection_uses_all_defaults() {
        let tokens = resolve(&button(), &Selection::new()).unwrap();
        assert_eq!(tokens, ["rounded", "bg-primary", "h-9"]);
    }

    #[test]
    fn resolve_full_selection() {
        let selection = Selection::new().set("size", "lg").set("variant", "outline");
        let tokens = resolve(&button(), &selection).unwrap();
        // Axis order follows the descriptor, not the selection
        assert_eq!(tokens, ["rounded", "border", "bg-transparent", "h-11"]);
    }

    #[test]
    fn resolve_bogus_option_fails() {
        let result = resolve(&button(), &Selection::new().set("variant", "bogus"));
        assert_eq!(
            result,
            Err(ResolveError::InvalidOption {
                component: "button".to_string(),
                axis: "variant".to_string(),
                option: "bogus".to_string(),
                expected: vec!["default".to_string(), "outline".to_string()],
            })
        );
    }

    #[test]
    fn resolve_unknown_axis_fails() {
        let result = resolve(&button(), &Selection::new().set("tone", "loud"));
        assert!(matches!(
            result,
            Err(ResolveError::UnknownAxis { ref axis, .. }) if axis == "tone"
        ));
    }

    #[test]
    fn resolve_overrides_come_last() {
        let selection = Selection::new().class("w-full h-12").set("size", "lg");
        let tokens = resolve(&button(), &selection).unwrap();
        assert_eq!(tokens, ["rounded", "bg-primary", "h-11", "w-full", "h-12"]);
    }

    #[test]
    fn resolve_keeps_duplicate_tokens() {
        let selection = Selection::new().class("rounded");
        let tokens = resolve(&button(), &selection).unwrap();
        assert_eq!(tokens.first().map(String::as_str), Some("rounded"));
        assert_eq!(tokens.last().map(String::as_str), Some("rounded"));
    }

    #[test]
    fn resolve_toggle_axis() {
        let descriptor = ComponentDescriptor::builder("input")
            .base("border")
            .axis(Axis::toggle("invalid", "border-destructive"))
            .axis(Axis::toggle("disabled", "opacity-50"))
            .build()
            .unwrap();

        let off = resolve(&descriptor, &Selection::new()).unwrap();
        assert_eq!(off, ["border"]);

        let on = resolve(&descriptor, &Selection::new().flag("disabled", true)).unwrap();
        assert_eq!(on, ["border", "opacity-50"]);

        let both = resolve(
            &descriptor,
            &Selection::new().flag("disabled", true).flag("invalid", true),
        )
        .unwrap();
        assert_eq!(both, ["border", "border-destructive", "opacity-50"]);
    }

    #[test]
    fn resolve_toggle_rejects_non_boolean() {
        let descriptor = ComponentDescriptor::builder("input")
            .axis(Axis::toggle("disabled", "opacity-50"))
            .build()
            .unwrap();

        let result = resolve(&descriptor, &Selection::new().set("disabled", "yes"));
        assert!(matches!(result, Err(ResolveError::InvalidOption { .. })));
    }

    #[test]
    fn resolve_descriptor_without_axes() {
        let descriptor = ComponentDescriptor::builder("card-content")
            .base("px-6")
            .build()
            .unwrap();

        let tokens = resolve(&descriptor, &Selection::new().class("pt-0")).unwrap();
        assert_eq!(tokens, ["px-6", "pt-0"]);
    }
}

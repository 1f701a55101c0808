//! Built-in component descriptors.
//!
//! Atoms: `badge`, `button`, `input`, `label`, `separator`, `textarea`.
//! Molecules: `card` and `field`, each with their part components.
//!
//! Every component carries presets matching its catalog stories.

use super::registry::{Catalog, CatalogError};
use crate::variant::{Axis, ComponentDescriptor, DescriptorError, Selection, VariantKey};

/// Catalog group for single-element components.
pub const ATOMS: &str = "Atoms";

/// Catalog group for components composed from atoms.
pub const MOLECULES: &str = "Molecules";

macro_rules! variant_enum {
    (
        $(#[$meta:meta])*
        $name:ident, axis = $axis:literal {
            $($variant:ident => $option:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $($variant),+
        }

        impl $name {
            /// Every option in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $option),+
                }
            }
        }

        impl VariantKey for $name {
            const AXIS: &'static str = $axis;

            fn option_name(&self) -> &'static str {
                self.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

variant_enum! {
    /// Visual style of a [`badge`].
    BadgeVariant, axis = "variant" {
        Default => "default",
        Secondary => "secondary",
        Destructive => "destructive",
        Outline => "outline",
    }
}

variant_enum! {
    /// Visual style of a [`button`].
    ButtonVariant, axis = "variant" {
        Default => "default",
        Outline => "outline",
        Secondary => "secondary",
        Ghost => "ghost",
        Destructive => "destructive",
        Link => "link",
    }
}

variant_enum! {
    /// Size of a [`button`].
    ButtonSize, axis = "size" {
        Default => "default",
        Xs => "xs",
        Sm => "sm",
        Lg => "lg",
        Icon => "icon",
        IconXs => "icon-xs",
        IconSm => "icon-sm",
        IconLg => "icon-lg",
    }
}

variant_enum! {
    /// Orientation of a [`separator`].
    SeparatorOrientation, axis = "orientation" {
        Horizontal => "horizontal",
        Vertical => "vertical",
    }
}

variant_enum! {
    /// Padding and spacing of a [`card`].
    CardSize, axis = "size" {
        Default => "default",
        Sm => "sm",
    }
}

variant_enum! {
    /// Layout orientation of a [`field`].
    FieldOrientation, axis = "orientation" {
        Vertical => "vertical",
        Horizontal => "horizontal",
        Responsive => "responsive",
    }
}

/// Builds the complete built-in catalog.
///
/// # Panics
///
/// Panics if a built-in descriptor is malformed, which the unit tests of
/// this module rule out.
pub fn catalog() -> Catalog {
    match try_catalog() {
        Ok(catalog) => catalog,
        Err(err) => panic!("built-in catalog is invalid: {err}"),
    }
}

/// Error raised while assembling a catalog from descriptor constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuiltinError {
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Builds the built-in catalog, reporting the first malformed descriptor.
pub fn try_catalog() -> Result<Catalog, BuiltinError> {
    let constructors: &[fn() -> Result<ComponentDescriptor, DescriptorError>] = &[
        badge,
        button,
        input,
        label,
        separator,
        textarea,
        card,
        card_header,
        card_title,
        card_description,
        card_action,
        card_content,
        card_footer,
        field,
        field_label,
        field_description,
        field_error,
        field_group,
        field_content,
    ];

    let mut catalog = Catalog::new();
    for constructor in constructors {
        catalog.register(constructor()?)?;
    }
    Ok(catalog)
}

fn disabled_toggle(tokens: &str) -> Axis {
    Axis::toggle("disabled", tokens).describe("Disable the element")
}

fn invalid_toggle() -> Axis {
    Axis::toggle(
        "invalid",
        "ring-destructive/20 dark:ring-destructive/40 border-destructive",
    )
    .describe("Mark the value as invalid")
}

// =============================================================================
// Atoms
// =============================================================================

/// Small status indicators, counts and labels.
pub fn badge() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("badge")
        .group(ATOMS)
        .describe("A badge for displaying status, counts, or labels")
        .base(
            "inline-flex items-center justify-center rounded-md border px-2 py-0.5 text-xs \
             font-medium w-fit whitespace-nowrap shrink-0 [&>svg]:size-3 gap-1 \
             [&>svg]:pointer-events-none focus-visible:border-ring focus-visible:ring-ring/50 \
             focus-visible:ring-[3px] transition-[color,box-shadow] overflow-hidden",
        )
        .axis(
            Axis::select("variant")
                .option(
                    "default",
                    "border-transparent bg-primary text-primary-foreground \
                     [a&]:hover:bg-primary/90",
                )
                .option(
                    "secondary",
                    "border-transparent bg-secondary text-secondary-foreground \
                     [a&]:hover:bg-secondary/90",
                )
                .option(
                    "destructive",
                    "border-transparent bg-destructive text-white [a&]:hover:bg-destructive/90",
                )
                .option(
                    "outline",
                    "text-foreground [a&]:hover:bg-accent [a&]:hover:text-accent-foreground",
                )
                .describe("Visual style variant of the badge"),
        )
        .preset("Default", Selection::new())
        .preset("Success", Selection::new().class("bg-green-500 text-white"))
        .preset("Warning", Selection::new().class("bg-yellow-500 text-black"))
        .preset("Error", Selection::new().class("bg-red-500 text-white"))
        .preset("Info", Selection::new().class("bg-blue-500 text-white"))
        .preset("Count", Selection::new().class("rounded-full px-2.5"))
        .build()
}

/// A versatile button with multiple variants and sizes.
pub fn button() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("button")
        .group(ATOMS)
        .describe("A versatile button component with multiple variants and sizes")
        .base(
            "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm \
             font-medium transition-all disabled:pointer-events-none disabled:opacity-50 \
             [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 \
             [&_svg]:shrink-0 outline-none focus-visible:border-ring focus-visible:ring-ring/50 \
             focus-visible:ring-[3px] aria-invalid:ring-destructive/20 \
             dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive",
        )
        .axis(
            Axis::select("variant")
                .option("default", "bg-primary text-primary-foreground hover:bg-primary/90")
                .option(
                    "outline",
                    "border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground \
                     dark:bg-input/30 dark:border-input dark:hover:bg-input/50",
                )
                .option(
                    "secondary",
                    "bg-secondary text-secondary-foreground hover:bg-secondary/80",
                )
                .option(
                    "ghost",
                    "hover:bg-accent hover:text-accent-foreground dark:hover:bg-accent/50",
                )
                .option(
                    "destructive",
                    "bg-destructive text-white hover:bg-destructive/90 \
                     focus-visible:ring-destructive/20 dark:focus-visible:ring-destructive/40 \
                     dark:bg-destructive/60",
                )
                .option("link", "text-primary underline-offset-4 hover:underline")
                .describe("Visual style variant of the button"),
        )
        .axis(
            Axis::select("size")
                .option("default", "h-9 px-4 py-2 has-[>svg]:px-3")
                .option(
                    "xs",
                    "h-6 gap-1 rounded-md px-2 text-xs has-[>svg]:px-1.5 \
                     [&_svg:not([class*='size-'])]:size-3",
                )
                .option("sm", "h-8 rounded-md gap-1.5 px-3 has-[>svg]:px-2.5")
                .option("lg", "h-10 rounded-md px-6 has-[>svg]:px-4")
                .option("icon", "size-9")
                .option("icon-xs", "size-6 rounded-md [&_svg:not([class*='size-'])]:size-3")
                .option("icon-sm", "size-8")
                .option("icon-lg", "size-10")
                .describe("Size of the button"),
        )
        .axis(disabled_toggle("pointer-events-none opacity-50"))
        .preset(
            "Default",
            Selection::new()
                .with(ButtonVariant::Default)
                .with(ButtonSize::Default),
        )
        .preset("Outline", Selection::new().with(ButtonVariant::Outline))
        .preset("Secondary", Selection::new().with(ButtonVariant::Secondary))
        .preset("Ghost", Selection::new().with(ButtonVariant::Ghost))
        .preset("Destructive", Selection::new().with(ButtonVariant::Destructive))
        .preset("Link", Selection::new().with(ButtonVariant::Link))
        .preset("ExtraSmall", Selection::new().with(ButtonSize::Xs))
        .preset("Small", Selection::new().with(ButtonSize::Sm))
        .preset("Large", Selection::new().with(ButtonSize::Lg))
        .preset("Disabled", Selection::new().flag("disabled", true))
        .preset(
            "IconButton",
            Selection::new()
                .with(ButtonSize::Icon)
                .with(ButtonVariant::Outline),
        )
        .build()
}

/// A single-line text input.
pub fn input() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("input")
        .group(ATOMS)
        .describe("A text input field for forms")
        .base(
            "file:text-foreground placeholder:text-muted-foreground selection:bg-primary \
             selection:text-primary-foreground dark:bg-input/30 border-input h-9 w-full min-w-0 \
             rounded-md border bg-transparent px-3 py-1 text-base shadow-xs \
             transition-[color,box-shadow] outline-none file:inline-flex file:h-7 file:border-0 \
             file:bg-transparent file:text-sm file:font-medium md:text-sm \
             focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px]",
        )
        .axis(invalid_toggle())
        .axis(disabled_toggle("pointer-events-none cursor-not-allowed opacity-50"))
        .preset("Default", Selection::new())
        .preset("Disabled", Selection::new().flag("disabled", true))
        .preset("WithError", Selection::new().flag("invalid", true))
        .preset("File", Selection::new().class("cursor-pointer"))
        .build()
}

/// A caption for a form control.
pub fn label() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("label")
        .group(ATOMS)
        .describe("A label for form controls")
        .base(
            "flex items-center gap-2 text-sm leading-none font-medium select-none \
             group-data-[disabled=true]:pointer-events-none group-data-[disabled=true]:opacity-50 \
             peer-disabled:cursor-not-allowed peer-disabled:opacity-50",
        )
        .axis(disabled_toggle("cursor-not-allowed opacity-50"))
        .preset("Default", Selection::new())
        .preset("Disabled", Selection::new().flag("disabled", true))
        .build()
}

/// A visual divider between content.
pub fn separator() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("separator")
        .group(ATOMS)
        .describe("A visual separator between content sections")
        .base("bg-border shrink-0")
        .axis(
            Axis::select("orientation")
                .option("horizontal", "h-px w-full")
                .option("vertical", "h-full w-px")
                .describe("Orientation of the separator"),
        )
        .preset("Horizontal", Selection::new().with(SeparatorOrientation::Horizontal))
        .preset("Vertical", Selection::new().with(SeparatorOrientation::Vertical))
        .build()
}

/// A multi-line text input.
pub fn textarea() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("textarea")
        .group(ATOMS)
        .describe("A multi-line text input")
        .base(
            "border-input placeholder:text-muted-foreground focus-visible:border-ring \
             focus-visible:ring-ring/50 dark:bg-input/30 flex field-sizing-content min-h-16 \
             w-full rounded-md border bg-transparent px-3 py-2 text-base shadow-xs \
             transition-[color,box-shadow] outline-none focus-visible:ring-[3px] md:text-sm",
        )
        .axis(invalid_toggle())
        .axis(disabled_toggle("cursor-not-allowed opacity-50"))
        .preset("Default", Selection::new())
        .preset("Disabled", Selection::new().flag("disabled", true))
        .preset("WithError", Selection::new().flag("invalid", true))
        .preset("Resizable", Selection::new().class("resize-y"))
        .build()
}

// =============================================================================
// Card
// =============================================================================

/// A container grouping related content and actions.
pub fn card() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("card")
        .group(MOLECULES)
        .describe("A container that groups header, content and footer")
        .base("bg-card text-card-foreground flex flex-col rounded-xl border shadow-sm")
        .axis(
            Axis::select("size")
                .option("default", "gap-6 py-6")
                .option("sm", "gap-4 py-4")
                .describe("Padding and spacing of the card"),
        )
        .preset("Default", Selection::new())
        .preset("Narrow", Selection::new().class("w-[350px]"))
        .preset("SmallSize", Selection::new().with(CardSize::Sm).class("w-[300px]"))
        .build()
}

pub fn card_header() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("card-header")
        .group(MOLECULES)
        .base(
            "@container/card-header grid auto-rows-min grid-rows-[auto_auto] items-start gap-2 \
             px-6 has-data-[slot=card-action]:grid-cols-[1fr_auto] [.border-b]:pb-6",
        )
        .build()
}

pub fn card_title() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("card-title")
        .group(MOLECULES)
        .base("leading-none font-semibold")
        .build()
}

pub fn card_description() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("card-description")
        .group(MOLECULES)
        .base("text-muted-foreground text-sm")
        .build()
}

pub fn card_action() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("card-action")
        .group(MOLECULES)
        .base("col-start-2 row-span-2 row-start-1 self-start justify-self-end")
        .build()
}

pub fn card_content() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("card-content")
        .group(MOLECULES)
        .base("px-6")
        .build()
}

pub fn card_footer() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("card-footer")
        .group(MOLECULES)
        .base("flex items-center px-6 [.border-t]:pt-6")
        .build()
}

// =============================================================================
// Field
// =============================================================================

/// A form field combining label, control, description and error.
pub fn field() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("field")
        .group(MOLECULES)
        .describe("A complete form field combining label, input, description and error message")
        .base("group/field flex w-full gap-3 data-[invalid=true]:text-destructive")
        .axis(
            Axis::select("orientation")
                .option("vertical", "flex-col [&>*]:w-full [&>.sr-only]:w-auto")
                .option(
                    "horizontal",
                    "flex-row items-center [&>[data-slot=field-label]]:flex-auto \
                     has-[>[data-slot=field-content]]:items-start",
                )
                .option(
                    "responsive",
                    "flex-col [&>*]:w-full [&>.sr-only]:w-auto @md/field-group:flex-row \
                     @md/field-group:items-center @md/field-group:[&>*]:w-auto",
                )
                .describe("Layout direction of the field"),
        )
        .axis(Axis::toggle("invalid", "text-destructive").describe("Show the field as invalid"))
        .preset("Default", Selection::new())
        .preset("WithError", Selection::new().flag("invalid", true))
        .preset("Horizontal", Selection::new().with(FieldOrientation::Horizontal))
        .preset("Responsive", Selection::new().with(FieldOrientation::Responsive))
        .build()
}

pub fn field_label() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("field-label")
        .group(MOLECULES)
        .base(
            "group/field-label peer/field-label flex w-fit gap-2 leading-snug \
             group-data-[disabled=true]/field:opacity-50",
        )
        .build()
}

pub fn field_description() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("field-description")
        .group(MOLECULES)
        .base(
            "text-muted-foreground text-sm leading-normal font-normal \
             group-has-[[data-orientation=horizontal]]/field:text-balance",
        )
        .build()
}

pub fn field_error() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("field-error")
        .group(MOLECULES)
        .base("text-destructive text-sm font-normal")
        .build()
}

pub fn field_group() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("field-group")
        .group(MOLECULES)
        .base("group/field-group @container/field-group flex w-full flex-col gap-7")
        .build()
}

pub fn field_content() -> Result<ComponentDescriptor, DescriptorError> {
    ComponentDescriptor::builder("field-content")
        .group(MOLECULES)
        .base("group/field-content flex flex-1 flex-col gap-1.5 leading-snug")
        .build()
}

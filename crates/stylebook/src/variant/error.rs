//! Descriptor validation and resolution errors.

/// Error returned when a [`ComponentDescriptor`](super::ComponentDescriptor)
/// fails validation at build time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// The descriptor was given an empty name
    #[error("component name must not be empty")]
    EmptyName,

    /// Two axes share the same name
    #[error("component '{component}' declares axis '{axis}' more than once")]
    DuplicateAxis { component: String, axis: String },

    /// An axis uses the name reserved for override tokens
    #[error("axis name '{axis}' of component '{component}' is reserved for override tokens")]
    ReservedAxis { component: String, axis: String },

    /// An axis has no options to choose from
    #[error("axis '{axis}' of component '{component}' has no options")]
    EmptyAxis { component: String, axis: String },

    /// Two options of the same axis share a name
    #[error("axis '{axis}' of component '{component}' declares option '{option}' more than once")]
    DuplicateOption {
        component: String,
        axis: String,
        option: String,
    },

    /// The declared default does not name an option of its axis
    #[error("default '{option}' of axis '{axis}' in component '{component}' is not an option")]
    MissingDefault {
        component: String,
        axis: String,
        option: String,
    },

    /// A preset does not resolve against its own descriptor
    #[error("preset '{preset}' of component '{component}' is invalid: {source}")]
    InvalidPreset {
        component: String,
        preset: String,
        #[source]
        source: ResolveError,
    },
}

/// Error returned when a selection cannot be resolved against a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The selection names an option the axis does not declare
    #[error(
        "invalid option '{option}' for axis '{axis}' of component '{component}' \
         (expected one of: {})",
        .expected.join(", ")
    )]
    InvalidOption {
        component: String,
        axis: String,
        option: String,
        expected: Vec<String>,
    },

    /// The selection names an axis the descriptor does not declare
    #[error("component '{component}' has no axis named '{axis}'")]
    UnknownAxis { component: String, axis: String },
}

impl ResolveError {
    /// Returns the name of the component the failed resolution targeted.
    pub fn component(&self) -> &str {
        match self {
            ResolveError::InvalidOption { component, .. }
            | ResolveError::UnknownAxis { component, .. } => component,
        }
    }
}

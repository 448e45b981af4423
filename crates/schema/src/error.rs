use std::borrow::Cow;

/// Validation failures for CPPython data.
#[cppython_derive::cppython_error]
pub enum SchemaError {
    /// A dependency string is not a PEP 508 requirement.
    #[error("Invalid requirement{}: {message}", format_context(.context))]
    InvalidRequirement { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A plugin type name cannot be split into `<name><group>`.
    #[error("Invalid plugin name{}: {message}", format_context(.context))]
    InvalidPluginName { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A document is well formed but its values contradict each other.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

use cppython_schema::SchemaError;
use std::borrow::Cow;

/// Errors raised by CPPython core operations and plugins.
#[cppython_derive::cppython_error]
pub enum CoreError {
    /// The project or user configuration is unusable.
    #[error("Configuration error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A plugin is missing, misnamed or failed.
    #[error("Plugin error{}: {message}", format_context(.context))]
    Plugin { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The requested operation is not supported by the plugin or platform.
    #[error("Not supported{}: {message}", format_context(.context))]
    NotSupported { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// An external process could not be run or exited unsuccessfully.
    #[error("Process error{}: {message}", format_context(.context))]
    Process { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Schema error{}: {source}", format_context(.context))]
    Schema { source: SchemaError, context: Option<Cow<'static, str>> },

    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("TOML error{}: {source}", format_context(.context))]
    Toml { source: toml::de::Error, context: Option<Cow<'static, str>> },

    #[error("JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Settings error{}: {source}", format_context(.context))]
    Settings { source: config::ConfigError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the CPPython crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! cppython-derive = { path = "../../infra/derive" }
//! thiserror = "2"
//! ```
//!
//! The expansion refers to `::thiserror`, so consumers must depend on it directly.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a CPPython error type.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A `<Name>Ext` trait whose `.context(...)` attaches a human readable note to any
///   `Result<T, Name>` and, for every variant holding a `source`, to `Result<T, Source>`.
/// * `From<Source>` for every variant with a `source` field.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }` variant exists.
/// * A private `format_context` helper for use in `#[error(...)]` strings.
///
/// # Requirements
///
/// * Every variant uses named fields.
/// * A `context` field must be typed `Option<Cow<'static, str>>`.
/// * A variant with a `source` field (or a field marked `#[source]`/`#[from]`) must carry `context`.
///
/// # Example
///
/// ```rust,ignore
/// use cppython_derive::cppython_error;
/// use std::borrow::Cow;
///
/// #[cppython_error]
/// pub enum ResolveError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn touch(path: &std::path::Path) -> Result<(), ResolveError> {
///     std::fs::write(path, b"").context("Creating marker file")?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn cppython_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}

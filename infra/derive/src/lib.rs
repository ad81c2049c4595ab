#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the dashboard crates. Currently a single attribute,
//! [`macro@skit_error`], that turns a plain enum into the error type used
//! by every store in the workspace.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Declares a store error enum.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless the enum already derives them.
/// * `<Name>Ext` trait with `.context(...)` for `Result<T, Name>` and, for every
///   variant with a `source` field, for `Result<T, Source>` as well.
/// * `From<Source>` for variants with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A module-private `format_context` helper for `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. A variant with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[skit_derive::skit_error]
/// pub enum RegistryError {
///     #[error("Validation error{}: {message}", format_context(.context))]
///     Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal registry error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn check(id: &str) -> Result<(), RegistryError> {
///     if id.is_empty() {
///         return Err("id is empty".into());
///     }
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn skit_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(&input).unwrap_or_else(syn::Error::into_compile_error).into()
}

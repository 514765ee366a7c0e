#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Not an issue in a macro crate"
)]
//! Procedural macro for compile-time Windows Security Identifier (SID) parsing.
mod expand;
use expand::sid_impl;
use proc_macro::TokenStream;

use syn::{LitStr, parse_macro_input};

/// Parses a SID string literal at compile time and expands to a
/// `sid_codec::SecurityIdentifier` expression.
///
/// A literal that does not parse is reported as a compile error on the literal.
#[proc_macro]
pub fn sid(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);
    match sid_impl(&lit) {
        Ok(token_stream) => token_stream,
        Err(err) => err.to_compile_error(),
    }
    .into()
}

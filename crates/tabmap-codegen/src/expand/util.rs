use proc_macro2::TokenStream;
use quote::ToTokens;

/// Unsuffixed integer literal, usable as a match pattern against `usize`.
pub(crate) fn int(v: usize) -> TokenStream {
    proc_macro2::Literal::usize_unsuffixed(v).into_token_stream()
}

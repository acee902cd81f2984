extern crate proc_macro;

use proc_macro::TokenStream;

/// Derive the accessor table that lets tabmap map recordset columns onto a
/// struct and read its fields back for change sets.
///
/// Field attributes:
/// - `#[key]` marks the identity field used in UPDATE / DELETE predicates.
///   Without it, the field whose column name is `Id` is used.
/// - `#[column("Name")]` overrides the column name, which otherwise is the
///   field name in `PascalCase`.
#[proc_macro_derive(Model, attributes(key, column))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match tabmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

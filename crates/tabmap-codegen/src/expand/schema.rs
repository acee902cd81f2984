use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Builds the `Schema` value describing the model's fields.
    pub(super) fn expand_model_schema(&self) -> TokenStream {
        let tabmap = &self.tabmap;
        let model_name = self.model.ident.to_string();

        let fields = self.model.fields.iter().map(|field| {
            let column = &field.column;
            let ty = &field.ty;
            let key = field.attrs.key.is_some();

            quote! {
                #tabmap::SchemaField {
                    name: #column,
                    ty: <#ty as #tabmap::Field>::field_ty(),
                    key: #key,
                }
            }
        });

        quote! {
            #tabmap::Schema::new(#model_name, vec![ #( #fields ),* ])
        }
    }
}

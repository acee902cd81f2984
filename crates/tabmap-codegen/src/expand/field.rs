use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Lets the model be used as a nested field of another model.
    pub(super) fn expand_field_impl(&self) -> TokenStream {
        let tabmap = &self.tabmap;
        let model_ident = &self.model.ident;

        quote! {
            impl #tabmap::Field for #model_ident {
                fn field_ty() -> #tabmap::FieldTy {
                    #tabmap::FieldTy::Embedded(<Self as #tabmap::Model>::schema())
                }

                fn assign(&mut self, path: &[usize], value: #tabmap::Value) -> #tabmap::Result<()> {
                    #tabmap::assign_embedded(self, path, value)
                }

                fn read(&self, path: &[usize]) -> #tabmap::Result<#tabmap::Value> {
                    #tabmap::read_embedded(self, path)
                }
            }
        }
    }
}

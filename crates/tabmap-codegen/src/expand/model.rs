use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_model_impl(&self) -> TokenStream {
        let tabmap = &self.tabmap;
        let model_ident = &self.model.ident;
        let model_schema = self.expand_model_schema();

        let assign_arms = self.model.fields.iter().map(|field| {
            let index = util::int(field.id);
            let field_ident = &field.ident;

            quote! {
                #index => #tabmap::Field::assign(&mut self.#field_ident, path, value),
            }
        });

        let read_arms = self.model.fields.iter().map(|field| {
            let index = util::int(field.id);
            let field_ident = &field.ident;

            quote! {
                #index => #tabmap::Field::read(&self.#field_ident, path),
            }
        });

        quote! {
            impl #tabmap::Model for #model_ident {
                fn schema() -> &'static #tabmap::Schema {
                    static SCHEMA: std::sync::OnceLock<#tabmap::Schema> = std::sync::OnceLock::new();
                    SCHEMA.get_or_init(|| #model_schema)
                }

                #[allow(unused_variables)]
                fn assign_field(
                    &mut self,
                    field: usize,
                    path: &[usize],
                    value: #tabmap::Value,
                ) -> #tabmap::Result<()> {
                    match field {
                        #( #assign_arms )*
                        _ => Err(#tabmap::no_such_field::<Self>(field)),
                    }
                }

                #[allow(unused_variables)]
                fn read_field(
                    &self,
                    field: usize,
                    path: &[usize],
                ) -> #tabmap::Result<#tabmap::Value> {
                    match field {
                        #( #read_arms )*
                        _ => Err(#tabmap::no_such_field::<Self>(field)),
                    }
                }
            }
        }
    }
}

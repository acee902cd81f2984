mod field;
mod model;
mod schema;
mod util;

use crate::schema::Model;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Path prefix for tabmap types
    tabmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let model_impl = self.expand_model_impl();
        let field_impl = self.expand_field_impl();

        wrap_in_const(quote! {
            #model_impl
            #field_impl
        })
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        tabmap: quote!(_tabmap::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use tabmap as _tabmap;
            #code
        };
    }
}

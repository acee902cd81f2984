/// `#[column("Name")]`
#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: syn::LitStr,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let name: syn::LitStr = input.parse()?;

        if name.value().is_empty() {
            return Err(syn::Error::new(name.span(), "column name must not be empty"));
        }

        if name.value().contains('/') {
            return Err(syn::Error::new(
                name.span(),
                "column name must not contain `/`; it separates nested properties",
            ));
        }

        if !input.is_empty() {
            return Err(input.error("expected a single string literal"));
        }

        Ok(Self { name })
    }
}

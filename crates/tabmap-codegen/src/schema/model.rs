use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Model fields
    pub(crate) fields: Vec<Field>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "model fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "model generics are not supported",
            ));
        }

        let mut fields: Vec<Field> = vec![];
        let mut errs = ErrorSet::new();

        for (index, node) in node.named.iter().enumerate() {
            fields.extend(errs.take(Field::from_ast(node, index)));
        }

        for (index, field) in fields.iter().enumerate() {
            let duplicate = fields[..index]
                .iter()
                .any(|prev| prev.column.eq_ignore_ascii_case(&field.column));

            if duplicate {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    format!("duplicate column name `{}`", field.column),
                ));
            }
        }

        let mut keys = fields.iter().filter_map(|field| field.attrs.key.as_ref());
        if let (Some(_), Some(second)) = (keys.next(), keys.next()) {
            errs.push(syn::Error::new_spanned(
                second,
                "only one field can be annotated with #[key]",
            ));
        }

        errs.finish()?;

        Ok(Self {
            ident: ast.ident.clone(),
            fields,
        })
    }
}

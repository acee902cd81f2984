use super::{Column, ErrorSet};

use heck::ToUpperCamelCase;
use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing model
    pub(crate) id: usize,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Rust identifier of the field
    pub(crate) ident: syn::Ident,

    /// Column name the field is addressed by
    pub(crate) column: String,

    /// Field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug)]
pub(crate) struct FieldAttr {
    /// Set if the field is annotated with `#[key]`
    pub(crate) key: Option<syn::Attribute>,

    /// Optional column name override
    pub(crate) column: Option<Column>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr {
            key: None,
            column: None,
        };

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else if attrs.key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    attrs.key = Some(attr.clone());
                }
            } else if attr.path().is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[column] attribute",
                    ));
                } else {
                    attrs.column = errs.take(Column::from_ast(attr));
                }
            }
        }

        errs.finish()?;

        let column = match &attrs.column {
            Some(column) => column.name.value(),
            None => ident.unraw().to_string().to_upper_camel_case(),
        };

        Ok(Self {
            id,
            attrs,
            ident: ident.clone(),
            column,
            ty: field.ty.clone(),
        })
    }
}

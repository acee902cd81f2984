use crate::{Error, Result};

use tabmap_core::stmt::Type;

/// The accessor table of a [`Model`](crate::Model): its fields, their column
/// names and which one is the identity.
///
/// Generated by `#[derive(Model)]` and stored in a static, so resolving an
/// alias never allocates schema data.
#[derive(Debug)]
pub struct Schema {
    /// Name of the Rust type
    pub name: &'static str,

    /// Fields in declaration order
    pub fields: Vec<SchemaField>,

    /// Index of the identity field used in UPDATE / DELETE predicates
    pub identity: Option<usize>,
}

#[derive(Debug)]
pub struct SchemaField {
    /// Column name the field is addressed by
    pub name: &'static str,

    pub ty: FieldTy,

    /// Set when the field is annotated with `#[key]`
    pub key: bool,
}

#[derive(Debug, Clone)]
pub enum FieldTy {
    /// A scalar assigned directly from a cell
    Primitive(Type),

    /// A nested model whose fields are addressed by further alias segments
    Embedded(&'static Schema),
}

impl Schema {
    pub fn new(name: &'static str, fields: Vec<SchemaField>) -> Self {
        let identity = fields.iter().position(|field| field.key).or_else(|| {
            fields.iter().position(|field| {
                field.ty.is_primitive() && field.name.eq_ignore_ascii_case("id")
            })
        });

        Self {
            name,
            fields,
            identity,
        }
    }

    pub fn field(&self, index: usize) -> &SchemaField {
        &self.fields[index]
    }

    /// Finds a field by column name, ignoring ASCII case.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.name.eq_ignore_ascii_case(name))
    }

    pub fn identity(&self) -> Option<&SchemaField> {
        self.identity.map(|index| &self.fields[index])
    }

    /// Resolves a `/`-delimited column alias into a path of field indices,
    /// one per segment.
    pub fn resolve(&self, alias: &str) -> Result<Vec<usize>> {
        let mut path = vec![];
        let mut schema = self;
        let mut segments = alias.split('/').peekable();

        while let Some(segment) = segments.next() {
            if segment.is_empty() {
                return Err(Error::invalid_column_alias(
                    alias,
                    self.name,
                    "empty segment",
                ));
            }

            let Some(index) = schema.field_index(segment) else {
                return Err(Error::unknown_property(alias, self.name));
            };

            path.push(index);

            match (&schema.fields[index].ty, segments.peek().is_some()) {
                (FieldTy::Primitive(_), false) => {}
                (FieldTy::Embedded(nested), true) => schema = *nested,
                (FieldTy::Primitive(_), true) => {
                    return Err(Error::invalid_column_alias(
                        alias,
                        self.name,
                        format!("`{segment}` is not a nested model"),
                    ));
                }
                (FieldTy::Embedded(_), false) => {
                    return Err(Error::invalid_column_alias(
                        alias,
                        self.name,
                        format!("`{segment}` is a nested model, not a scalar property"),
                    ));
                }
            }
        }

        Ok(path)
    }
}

impl FieldTy {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::Embedded(_))
    }
}

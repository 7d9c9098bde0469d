use super::{lit_str, ErrorSet};

use modelmap_core::FieldTag;

#[derive(Debug)]
pub(crate) struct Field {
    /// Declaration ordinal within the struct
    pub(crate) ordinal: usize,

    pub(crate) ident: syn::Ident,

    /// Tag string from `#[db = "..."]`, empty when absent
    pub(crate) tag: String,

    /// Column name, when the tag maps the field
    pub(crate) column: Option<String>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, ordinal: usize) -> syn::Result<Field> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::default();
        let mut tag: Option<syn::LitStr> = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("db") {
                continue;
            }

            if tag.is_some() {
                errs.push(syn::Error::new_spanned(attr, "duplicate `db` attribute"));
                continue;
            }

            match lit_str(attr, "expected `db = \"col~name;...\"`") {
                Ok(lit) => tag = Some(lit),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let tag = tag.map(|lit| lit.value()).unwrap_or_default();
        let parsed = FieldTag::parse(&tag);
        let column = parsed.is_mapped().then(|| parsed.column.to_string());

        Ok(Field {
            ordinal,
            ident: ident.clone(),
            tag,
            column,
        })
    }

    pub(crate) fn is_mapped(&self) -> bool {
        self.column.is_some()
    }
}

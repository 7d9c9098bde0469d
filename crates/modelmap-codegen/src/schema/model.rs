use super::{lit_str, ErrorSet, Field};

use heck::ToSnakeCase;

#[derive(Debug)]
pub(crate) struct Model {
    /// Record visibility
    pub(crate) vis: syn::Visibility,

    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Identifier of the generated field-id struct
    pub(crate) field_struct_ident: syn::Ident,

    pub(crate) table: String,

    /// Every declared field, mapped or not
    pub(crate) fields: Vec<Field>,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Model> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut errs = ErrorSet::default();
        let mut table: Option<syn::LitStr> = None;

        for attr in &ast.attrs {
            if !attr.path().is_ident("table") {
                continue;
            }

            if table.is_some() {
                errs.push(syn::Error::new_spanned(attr, "duplicate `table` attribute"));
                continue;
            }

            match lit_str(attr, "expected `table = \"table_name\"`") {
                Ok(lit) if lit.value().is_empty() => {
                    errs.push(syn::Error::new_spanned(lit, "table name cannot be empty"));
                }
                Ok(lit) => table = Some(lit),
                Err(err) => errs.push(err),
            }
        }

        let mut fields = vec![];

        for (ordinal, node) in node.named.iter().enumerate() {
            match Field::from_ast(node, ordinal) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let table = match table {
            Some(lit) => lit.value(),
            None => ast.ident.to_string().to_snake_case(),
        };

        Ok(Model {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            field_struct_ident: quote::format_ident!("{}Fields", ast.ident),
            table,
            fields,
        })
    }

    pub(crate) fn mapped_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.is_mapped())
    }
}

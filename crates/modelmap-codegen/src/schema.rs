mod error;
pub(crate) use error::ErrorSet;

mod field;
pub(crate) use field::Field;

mod model;
pub(crate) use model::Model;

/// Extracts the string from a `name = "value"` attribute.
fn lit_str(attr: &syn::Attribute, expected: &str) -> syn::Result<syn::LitStr> {
    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(syn::Error::new_spanned(attr, expected));
    };

    let syn::Expr::Lit(lit) = &meta.value else {
        return Err(syn::Error::new_spanned(attr, expected));
    };

    let syn::Lit::Str(lit) = &lit.lit else {
        return Err(syn::Error::new_spanned(attr, expected));
    };

    Ok(lit.clone())
}

mod fields;
mod record;

use crate::schema::Model;

use proc_macro2::{Literal, TokenStream};
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    model: &'a Model,

    /// Path prefix for modelmap types
    modelmap: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let field_struct = self.expand_field_struct();

        wrap_in_const(quote! {
            #record_impl
            #field_struct
        })
    }
}

pub(super) fn record(model: &Model) -> TokenStream {
    Expand {
        model,
        modelmap: quote!(_modelmap::codegen_support),
    }
    .expand()
}

fn ordinal(v: usize) -> Literal {
    Literal::usize_unsuffixed(v)
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use modelmap as _modelmap;
            #code
        };
    }
}

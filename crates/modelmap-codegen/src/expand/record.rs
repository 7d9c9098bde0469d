use super::{ordinal, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let modelmap = &self.modelmap;
        let model_ident = &self.model.ident;
        let table = &self.model.table;

        let tags = self.model.fields.iter().map(|field| &field.tag);
        let columns = self.model.mapped_fields().filter_map(|field| field.column.as_ref());

        let field_arms = self.model.mapped_fields().map(|field| {
            let ordinal = ordinal(field.ordinal);
            let ident = &field.ident;
            quote!(#ordinal => #modelmap::Option::Some(&self.#ident),)
        });

        let field_mut_arms = self.model.mapped_fields().map(|field| {
            let ordinal = ordinal(field.ordinal);
            let ident = &field.ident;
            quote!(#ordinal => #modelmap::Option::Some(&mut self.#ident),)
        });

        quote! {
            impl #modelmap::Record for #model_ident {
                fn table(&self) -> &'static str {
                    #table
                }

                fn columns(&self) -> &'static [&'static str] {
                    &[ #( #columns ),* ]
                }

                fn tags(&self) -> &'static [&'static str] {
                    &[ #( #tags ),* ]
                }

                fn field(&self, ordinal: usize) -> #modelmap::Option<&dyn #modelmap::FieldValue> {
                    match ordinal {
                        #( #field_arms )*
                        _ => #modelmap::Option::None,
                    }
                }

                fn field_mut(&mut self, ordinal: usize) -> #modelmap::Option<&mut dyn #modelmap::FieldValue> {
                    match ordinal {
                        #( #field_mut_arms )*
                        _ => #modelmap::Option::None,
                    }
                }
            }
        }
    }
}

use super::{ordinal, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// `{Record}Fields`, holding the `FieldId` of every mapped field, and
    /// the `Record::fields()` constructor returning it.
    pub(super) fn expand_field_struct(&self) -> TokenStream {
        let modelmap = &self.modelmap;
        let vis = &self.model.vis;
        let model_ident = &self.model.ident;
        let field_struct_ident = &self.model.field_struct_ident;

        let idents: Vec<_> = self.model.mapped_fields().map(|field| &field.ident).collect();
        let ordinals = self.model.mapped_fields().map(|field| ordinal(field.ordinal));

        quote! {
            #[derive(Debug, Clone, Copy)]
            #vis struct #field_struct_ident {
                #( pub #idents: #modelmap::FieldId, )*
            }

            impl #model_ident {
                /// Field ids for selecting explicit field subsets.
                #vis fn fields() -> #field_struct_ident {
                    #field_struct_ident {
                        #( #idents: #modelmap::FieldId(#ordinals), )*
                    }
                }
            }
        }
    }
}

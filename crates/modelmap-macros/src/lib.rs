extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `modelmap::Record` for a struct with named fields.
///
/// `#[table = "..."]` names the table; it defaults to the snake-cased type
/// name. `#[db = "..."]` carries a field's tag. Fields without a tag, or
/// tagged `ign`, are not mapped.
#[proc_macro_derive(Record, attributes(table, db))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match modelmap_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

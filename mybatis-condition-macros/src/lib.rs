extern crate proc_macro;

mod condition_fields;
mod errors;

use proc_macro::TokenStream;

/// Implements `mybatis_condition::ConditionFields` for a struct with named fields.
///
/// Field attributes: `#[condition(skip)]`, `#[condition(rename = "name")]`.
/// Struct attribute: `#[condition(rename_all = "camelCase")]`.
#[proc_macro_derive(ConditionFields, attributes(condition))]
pub fn condition_fields_derive(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as syn::DeriveInput);
    condition_fields::generate_condition_fields_impl(&ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

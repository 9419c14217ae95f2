use crate::errors::MacroError;
use mybatis_condition_syntax::{container_attrs, type_facts};
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

pub fn generate_condition_fields_impl(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    let fields = match &ast.data {
        syn::Data::Struct(syn::DataStruct {
            fields: syn::Fields::Named(fields),
            ..
        }) => &fields.named,
        _ => {
            return Err(MacroError::NotNamedStruct {
                type_name: name.to_string(),
            }
            .to_syn_error(name.span()))
        }
    };

    let container = container_attrs(&ast.attrs)?;

    let mut descriptors = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let Some(field_name) = container.field_name(ident, &field.attrs)? else {
            continue;
        };

        let facts = type_facts(&field.ty);
        let qualified_name = facts.qualified_name;
        let is_collection = facts.is_collection;
        let element = match facts.element {
            Some(element) => quote! { ::std::option::Option::Some(::std::string::String::from(#element)) },
            None => quote! { ::std::option::Option::None },
        };

        descriptors.push(quote! {
            ::mybatis_condition::FieldDescriptor::from_type(
                #field_name,
                &::mybatis_condition::TypeInfo {
                    qualified_name: ::std::string::String::from(#qualified_name),
                    is_collection: #is_collection,
                    element: #element,
                },
            )
        });
    }

    Ok(quote! {
        impl #impl_generics ::mybatis_condition::field::ConditionFields for #name #ty_generics #where_clause {
            fn condition_fields() -> ::std::vec::Vec<::mybatis_condition::FieldDescriptor> {
                ::std::vec![#(#descriptors),*]
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_rejects_enums() {
        let ast: DeriveInput = parse_quote! {
            enum Status { Active }
        };
        let err = generate_condition_fields_impl(&ast).unwrap_err();
        assert!(err.to_string().contains("only supports structs with named fields"));
    }

    #[test]
    fn test_skipped_field_is_not_emitted() {
        let ast: DeriveInput = parse_quote! {
            struct Query {
                user_name: String,
                #[condition(skip)]
                internal: u8,
            }
        };
        let tokens = generate_condition_fields_impl(&ast).unwrap().to_string();
        assert!(tokens.contains("\"user_name\""));
        assert!(!tokens.contains("\"internal\""));
    }

    #[test]
    fn test_rename_all_applies_unless_field_is_renamed() {
        let ast: DeriveInput = parse_quote! {
            #[condition(rename_all = "camelCase")]
            struct Query {
                created_at: Vec<NaiveDateTime>,
                #[condition(rename = "uid")]
                user_id: i64,
            }
        };
        let tokens = generate_condition_fields_impl(&ast).unwrap().to_string();
        assert!(tokens.contains("\"createdAt\""));
        assert!(tokens.contains("\"uid\""));
        assert!(!tokens.contains("\"userId\""));
    }

    #[test]
    fn test_empty_rename_is_a_compile_error() {
        let ast: DeriveInput = parse_quote! {
            struct Query {
                #[condition(rename = "")]
                user_id: i64,
            }
        };
        let err = generate_condition_fields_impl(&ast).unwrap_err();
        assert!(err.to_string().contains("renamed to an empty name"));
    }
}

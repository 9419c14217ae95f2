// Reduces a field's syn::Type to the facts the classifier needs: the type's
// path, whether it is a collection, and the collection's element type.

use quote::ToTokens;

const COLLECTIONS: &[&str] = &["Vec", "VecDeque", "HashSet", "BTreeSet"];

// Wrappers that do not change how a value compares
const TRANSPARENT: &[&str] = &["Option", "Box", "Rc", "Arc"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeFacts {
    pub qualified_name: String,
    pub is_collection: bool,
    pub element: Option<String>,
}

fn first_type_argument(segment: &syn::PathSegment) -> Option<&syn::Type> {
    if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
        for arg in &args.args {
            if let syn::GenericArgument::Type(ty) = arg {
                return Some(ty);
            }
        }
    }
    None
}

/// Strip `Option<T>`, `Box<T>`, references and parentheses down to the value type.
pub fn unwrap_transparent(ty: &syn::Type) -> &syn::Type {
    match ty {
        syn::Type::Reference(reference) => unwrap_transparent(&reference.elem),
        syn::Type::Paren(paren) => unwrap_transparent(&paren.elem),
        syn::Type::Group(group) => unwrap_transparent(&group.elem),
        syn::Type::Path(type_path) => {
            if let Some(segment) = type_path.path.segments.last() {
                if TRANSPARENT.iter().any(|name| segment.ident == name) {
                    if let Some(inner) = first_type_argument(segment) {
                        return unwrap_transparent(inner);
                    }
                }
            }
            ty
        }
        _ => ty,
    }
}

/// `chrono::NaiveDateTime` for a path type, without generic arguments.
pub fn path_name(ty: &syn::Type) -> String {
    match ty {
        syn::Type::Path(type_path) => type_path
            .path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect::<Vec<_>>()
            .join("::"),
        other => other.to_token_stream().to_string().replace(' ', ""),
    }
}

pub fn type_facts(ty: &syn::Type) -> TypeFacts {
    let ty = unwrap_transparent(ty);
    match ty {
        syn::Type::Slice(slice) => TypeFacts {
            qualified_name: "slice".to_string(),
            is_collection: true,
            element: Some(path_name(unwrap_transparent(&slice.elem))),
        },
        syn::Type::Array(array) => TypeFacts {
            qualified_name: "array".to_string(),
            is_collection: true,
            element: Some(path_name(unwrap_transparent(&array.elem))),
        },
        syn::Type::Path(type_path) => {
            let is_collection = type_path
                .path
                .segments
                .last()
                .is_some_and(|segment| COLLECTIONS.iter().any(|name| segment.ident == name));
            let element = if is_collection {
                type_path
                    .path
                    .segments
                    .last()
                    .and_then(first_type_argument)
                    .map(|inner| path_name(unwrap_transparent(inner)))
            } else {
                None
            };
            TypeFacts {
                qualified_name: path_name(ty),
                is_collection,
                element,
            }
        }
        other => TypeFacts {
            qualified_name: path_name(other),
            is_collection: false,
            element: None,
        },
    }
}

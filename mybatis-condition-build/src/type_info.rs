use mybatis_condition::TypeInfo;
use mybatis_condition_syntax::type_facts;

/// Type facts of a scanned field, reduced exactly as
/// `#[derive(ConditionFields)]` reduces them.
pub fn type_info(ty: &syn::Type) -> TypeInfo {
    let facts = type_facts(ty);
    TypeInfo {
        qualified_name: facts.qualified_name,
        is_collection: facts.is_collection,
        element: facts.element,
    }
}

use mybatis_condition::{ConditionForm, FieldKind, FieldSource};
use mybatis_condition_build::{
    find_struct, generate_fragment_code, scan_dir, FragmentOptions, ScanError,
};
use std::fs;
use std::path::Path;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "src/query.rs",
        r#"
        use chrono::NaiveDateTime;

        #[derive(ConditionFields)]
        #[condition(rename_all = "camelCase")]
        pub struct OrderQuery {
            pub order_no: Option<String>,
            pub created_at: Option<Vec<NaiveDateTime>>,
            pub status_list: Vec<i32>,
            pub paid: Option<bool>,
            pub amount: Option<rust_decimal::Decimal>,
        }
        "#,
    );
    write(
        dir.path(),
        "src/admin/mod.rs",
        r#"
        pub mod user {
            pub struct UserQuery { pub user_name: String }
        }
        pub mod audit {
            pub struct UserQuery { pub actor: String }
        }
        "#,
    );
    write(dir.path(), "src/notes.txt", "struct NotRust {}");
    dir
}

#[test]
fn test_scan_dir_visits_every_rust_file() {
    let dir = project();
    let structs = scan_dir(dir.path()).unwrap();
    let names: Vec<String> = structs.iter().map(|s| s.qualified_name()).collect();
    assert_eq!(
        names,
        vec!["admin::user::UserQuery", "admin::audit::UserQuery", "query::OrderQuery"]
    );
}

#[test]
fn test_find_struct_and_render() {
    let dir = project();
    let order = find_struct(dir.path(), "OrderQuery").unwrap();
    let kinds: Vec<FieldKind> = order.fields().into_iter().map(|f| f.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FieldKind::String,
            FieldKind::TemporalCollection,
            FieldKind::GenericCollection,
            FieldKind::Boolean,
            FieldKind::Other,
        ]
    );

    let out = ConditionForm::from_source(&order).render();
    assert!(out.contains("AND t.order_no = #{param.orderNo}"));
    assert!(out.contains("AND t.created_at BETWEEN #{param.createdAt[0]} AND #{param.createdAt[1]}"));
    assert!(out.contains("collection=\"param.statusList\""));
}

#[test]
fn test_ambiguous_name_needs_module() {
    let dir = project();
    let err = find_struct(dir.path(), "UserQuery").unwrap_err();
    assert!(matches!(err, ScanError::AmbiguousStruct { .. }));
    assert!(err.to_string().contains("audit::UserQuery"));

    let audit = find_struct(dir.path(), "audit::UserQuery").unwrap();
    assert_eq!(audit.fields[0].name, "actor");
}

#[test]
fn test_missing_struct() {
    let dir = project();
    let err = find_struct(dir.path(), "Nope").unwrap_err();
    assert!(matches!(err, ScanError::StructNotFound { ref name, .. } if name == "Nope"));
}

#[test]
fn test_same_name_in_different_files() {
    let dir = tempfile::tempdir().unwrap();
    for module in ["order", "user"] {
        write(
            dir.path(),
            &format!("src/{}.rs", module),
            &format!(
                "#[derive(ConditionFields)]\npub struct Query {{ pub {}_no: Option<String> }}",
                module
            ),
        );
    }

    let structs = scan_dir(dir.path()).unwrap();
    let names: Vec<String> = structs.iter().map(|s| s.qualified_name()).collect();
    assert_eq!(names, vec!["order::Query", "user::Query"]);

    let code = generate_fragment_code(&structs, &FragmentOptions::default());
    assert_eq!(code.matches("ORDER_QUERY_CONDITIONS").count(), 1);
    assert_eq!(code.matches("USER_QUERY_CONDITIONS").count(), 1);

    let err = find_struct(dir.path(), "Query").unwrap_err();
    assert!(matches!(err, ScanError::AmbiguousStruct { .. }));
    let user = find_struct(dir.path(), "user::Query").unwrap();
    assert_eq!(user.fields[0].name, "user_no");
}

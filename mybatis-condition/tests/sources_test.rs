use mybatis_condition::{
    ClassDescriptor, ConditionError, ConditionFields, ConditionForm, FieldDescriptor, FieldKind,
    FieldSource,
};
use std::collections::{BTreeSet, HashSet};
use std::time::SystemTime;

#[allow(dead_code)]
#[derive(ConditionFields)]
#[condition(rename_all = "camelCase")]
struct UserQuery {
    user_name: Option<String>,
    enabled: Option<bool>,
    created_at: Option<Vec<SystemTime>>,
    role_ids: Vec<i64>,
    tags: HashSet<String>,
    age: Option<i32>,
    #[condition(rename = "dept")]
    department_id: i64,
    #[condition(skip)]
    page: u32,
}

#[allow(dead_code)]
#[derive(ConditionFields)]
struct Borrowed<'a> {
    name: &'a str,
    codes: BTreeSet<&'a str>,
}

mod derive_tests {
    use super::*;

    #[test]
    fn test_derived_fields() {
        let fields = UserQuery::condition_fields();
        assert_eq!(
            fields,
            vec![
                FieldDescriptor::new("userName", FieldKind::String),
                FieldDescriptor::new("enabled", FieldKind::Boolean),
                FieldDescriptor::new("createdAt", FieldKind::TemporalCollection),
                FieldDescriptor::new("roleIds", FieldKind::GenericCollection),
                FieldDescriptor::new("tags", FieldKind::GenericCollection),
                FieldDescriptor::new("age", FieldKind::Other),
                FieldDescriptor::new("dept", FieldKind::Other),
            ]
        );
    }

    #[test]
    fn test_generics_and_references() {
        let fields = Borrowed::condition_fields();
        assert_eq!(fields[0], FieldDescriptor::new("name", FieldKind::String));
        assert_eq!(fields[1], FieldDescriptor::new("codes", FieldKind::GenericCollection));
    }

    #[test]
    fn test_form_from_derived_fields() {
        let form = ConditionForm::new(UserQuery::condition_fields());
        let out = form.render();
        assert!(out.contains("AND t.created_at BETWEEN #{param.createdAt[0]} AND #{param.createdAt[1]}"));
        assert!(out.contains("collection=\"param.roleIds\""));
        assert!(out.contains("AND t.dept = #{param.dept}"));
        assert!(!out.contains("page"));
    }
}

mod descriptor_tests {
    use super::*;

    const USER_QUERY: &str = r#"{
        "name": "com.example.UserQuery",
        "fields": [
            { "name": "userName", "type": "java.lang.String" },
            { "name": "enabled", "type": "boolean" },
            { "name": "createTime", "type": "java.util.List<java.time.LocalDateTime>" },
            { "name": "statusList", "type": "java.util.List<java.lang.Integer>" },
            { "name": "owners", "type": "java.util.List<com.example.Unknown>" },
            { "name": "lastLogin", "type": "java.util.Date" },
            { "name": "orderId", "type": "java.lang.Long" }
        ]
    }"#;

    #[test]
    fn test_classification_from_descriptor() {
        let descriptor = ClassDescriptor::from_json_str(USER_QUERY).unwrap();
        assert_eq!(descriptor.name.as_deref(), Some("com.example.UserQuery"));
        let kinds: Vec<FieldKind> = descriptor.fields().into_iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FieldKind::String,
                FieldKind::Boolean,
                FieldKind::TemporalCollection,
                FieldKind::GenericCollection,
                FieldKind::GenericCollection,
                FieldKind::Temporal,
                FieldKind::Other,
            ]
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_query.json");
        std::fs::write(&path, USER_QUERY).unwrap();

        let descriptor = ClassDescriptor::load(&path).unwrap();
        let form = ConditionForm::from_source(&descriptor);
        assert!(form.render().contains("AND t.order_id = #{param.orderId}"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ClassDescriptor::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConditionError::Io { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_complex_generics_degrade_to_outer_type() {
        let descriptor = ClassDescriptor::from_json_str(
            r#"{"fields":[
                {"name":"extra","type":"java.util.Map<java.lang.String, java.lang.Object>"},
                {"name":"groups","type":"java.util.List<java.util.List<java.lang.Long>>"}
            ]}"#,
        )
        .unwrap();
        let fields = descriptor.fields();
        assert_eq!(fields[0].kind, FieldKind::Other);
        assert_eq!(fields[1].kind, FieldKind::GenericCollection);

        let out = ConditionForm::from_source(&descriptor).render();
        assert!(out.contains("AND t.extra = #{param.extra}"));
        assert!(out.contains("collection=\"param.groups\""));
    }

    #[test]
    fn test_blank_type_text_names_the_field() {
        let err = ClassDescriptor::from_json_str(r#"{"fields":[{"name":"lookup","type":" "}]}"#).unwrap_err();
        assert!(matches!(err, ConditionError::InvalidTypeText { .. }));
        assert!(err.to_string().contains("'lookup'"));
    }
}

//! Rendering of MyBatis `<if>` condition fragments.
//!
//! Every field yields at most one block. The block is picked from the
//! field's kind first and only then from the assigned operator, so a
//! boolean field always compares with `=` and a temporal collection always
//! renders a range.

use crate::assignment::OperatorAssignment;
use crate::dialect::Dialect;
use crate::field::{FieldDescriptor, FieldKind};
use crate::naming::camel_to_snake;
use crate::operator::Operator;
use log::{debug, warn};

/// Input of one generation pass. Nothing in it outlives the call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub fields: &'a [FieldDescriptor],
    pub table_alias: &'a str,
    pub param_prefix: &'a str,
    pub assignment: &'a OperatorAssignment,
    pub dialect: Dialect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Equality,
    Like,
    Between,
    In,
    Comparison,
}

/// Template for a field of `kind` compared with `operator`, or `None` when
/// the combination produces no condition.
pub fn select_template(kind: FieldKind, operator: Operator) -> Option<Template> {
    match kind {
        FieldKind::String => match operator {
            Operator::Like => Some(Template::Like),
            _ => Some(Template::Equality),
        },
        FieldKind::TemporalCollection => Some(Template::Between),
        FieldKind::GenericCollection => match operator {
            Operator::In | Operator::NotIn => Some(Template::In),
            Operator::Between | Operator::NotBetween => Some(Template::Between),
            _ => None,
        },
        FieldKind::Boolean => Some(Template::Equality),
        FieldKind::Temporal | FieldKind::Other => Some(Template::Comparison),
    }
}

fn qualify(qualifier: &str, name: &str) -> String {
    let qualifier = qualifier.trim();
    if qualifier.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", qualifier, name)
    }
}

pub fn generate(request: &GenerationRequest<'_>) -> String {
    let mut conditions = String::new();
    for field in request.fields {
        conditions.push_str(&render_field(request, field));
    }
    conditions
}

/// Block for a single field; empty when the field is skipped.
pub fn render_field(request: &GenerationRequest<'_>, field: &FieldDescriptor) -> String {
    let param = qualify(request.param_prefix, &field.name);
    let column = qualify(request.table_alias, &camel_to_snake(&field.name));
    let operator = request.assignment.operator_for(&field.name);

    let Some(template) = select_template(field.kind, operator) else {
        warn!(
            "Skipping collection field '{}': operator {} has no collection condition",
            field.name, operator
        );
        return String::new();
    };
    debug!(
        "Field '{}' ({}) -> {:?} with {}",
        field.name, field.kind, template, operator
    );

    match template {
        Template::Equality => equality_condition(&param, &column),
        Template::Like => like_condition(&param, &column, request.dialect),
        Template::Between => {
            let operator = match (field.kind, operator) {
                (FieldKind::TemporalCollection, Operator::NotBetween) => Operator::NotBetween,
                (FieldKind::TemporalCollection, _) => Operator::Between,
                (_, op) => op,
            };
            between_condition(&param, &column, operator)
        }
        Template::In => in_condition(&param, &column, operator),
        Template::Comparison => comparison_condition(&param, &column, operator),
    }
}

fn equality_condition(param: &str, column: &str) -> String {
    format!(
        "<if test=\"{p} != null and {p} != ''\">\n    AND {c} = #{{{p}}}\n</if>\n",
        p = param,
        c = column
    )
}

fn like_condition(param: &str, column: &str, dialect: Dialect) -> String {
    format!(
        "<if test=\"{p} != null and {p} != ''\">\n    AND {c} LIKE {pattern}\n</if>\n",
        p = param,
        c = column,
        pattern = dialect.like_pattern(param)
    )
}

fn between_condition(param: &str, column: &str, operator: Operator) -> String {
    format!(
        "<if test=\"{p} != null and {p}.size() == 2\">\n    AND {c} {op} #{{{p}[0]}} AND #{{{p}[1]}}\n</if>\n",
        p = param,
        c = column,
        op = operator.sql_token()
    )
}

fn in_condition(param: &str, column: &str, operator: Operator) -> String {
    format!(
        concat!(
            "<if test=\"{p} != null and {p}.size() > 0\">\n",
            "    AND {c} {op}\n",
            "    <foreach item=\"item\" index=\"index\" collection=\"{p}\" open=\"(\" separator=\",\" close=\")\">\n",
            "        #{{item}}\n",
            "    </foreach>\n",
            "</if>\n"
        ),
        p = param,
        c = column,
        op = operator.sql_token()
    )
}

fn comparison_condition(param: &str, column: &str, operator: Operator) -> String {
    format!(
        "<if test=\"{p} != null\">\n    AND {c} {op} #{{{p}}}\n</if>\n",
        p = param,
        c = column,
        op = operator.sql_token()
    )
}

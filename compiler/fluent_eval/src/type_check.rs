//! Runtime checks of type annotations.
//!
//! Checks are structural and shallow on names: the built-in names below are
//! enforced, any other name (user-defined or unknown) accepts every value.
//! `List[T]` checks every element against `T`; an empty list matches any
//! element type.

use crate::{EvalErrorKind, TypeCheckSite, Value};
use fluent_ir::TypeExpr;

/// Whether `value` satisfies `ty`.
pub fn value_matches(value: &Value, ty: &TypeExpr) -> bool {
    match ty {
        TypeExpr::Simple(name) => match name.as_str() {
            "Int" => matches!(value, Value::Int(_)),
            "Float" => matches!(value, Value::Float(_)),
            "String" => matches!(value, Value::Str(_)),
            "Bool" => matches!(value, Value::Bool(_)),
            "List" => matches!(value, Value::List(_)),
            "Unit" => matches!(value, Value::Unit),
            _ => true,
        },
        TypeExpr::List(element) => match value {
            Value::List(items) => items.iter().all(|item| value_matches(item, element)),
            _ => false,
        },
    }
}

/// Check `value` against `ty`; `site` is only built on failure.
pub fn check_type(
    value: &Value,
    ty: &TypeExpr,
    site: impl FnOnce() -> TypeCheckSite,
) -> Result<(), EvalErrorKind> {
    if value_matches(value, ty) {
        return Ok(());
    }
    Err(EvalErrorKind::TypeMismatch {
        site: site(),
        expected: ty.to_string(),
        found: value.type_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Value {
        Value::list(values.iter().copied().map(Value::Int).collect())
    }

    #[test]
    fn simple_types() {
        assert!(value_matches(&Value::Int(1), &TypeExpr::simple("Int")));
        assert!(!value_matches(&Value::Int(1), &TypeExpr::simple("String")));
        assert!(value_matches(&Value::Bool(true), &TypeExpr::simple("Bool")));
        assert!(value_matches(&Value::Float(1.5), &TypeExpr::simple("Float")));
        assert!(!value_matches(&Value::Float(1.0), &TypeExpr::simple("Int")));
    }

    #[test]
    fn unknown_names_accept_anything() {
        let ty = TypeExpr::simple("Point");
        assert!(value_matches(&Value::Int(1), &ty));
        assert!(value_matches(&Value::Unit, &ty));
    }

    #[test]
    fn list_elements_are_checked() {
        let ty = TypeExpr::list(TypeExpr::simple("Int"));
        assert!(value_matches(&ints(&[1, 2, 3]), &ty));
        let mixed = Value::list(vec![Value::Int(1), Value::string("x")]);
        assert!(!value_matches(&mixed, &ty));
        assert!(!value_matches(&Value::Int(1), &ty));
    }

    #[test]
    fn empty_list_matches_any_element_type() {
        let ty = TypeExpr::list(TypeExpr::list(TypeExpr::simple("String")));
        assert!(value_matches(&Value::list(vec![]), &ty));
    }

    #[test]
    fn nested_lists() {
        let ty = TypeExpr::list(TypeExpr::list(TypeExpr::simple("Int")));
        let grid = Value::list(vec![ints(&[1]), ints(&[2, 3])]);
        assert!(value_matches(&grid, &ty));
        let ragged = Value::list(vec![ints(&[1]), Value::Int(2)]);
        assert!(!value_matches(&ragged, &ty));
    }

    #[test]
    fn mismatch_reports_expected_and_found() {
        let err = check_type(&Value::string("oops"), &TypeExpr::simple("Int"), || {
            TypeCheckSite::Let { name: "x".into() }
        });
        assert_eq!(
            err,
            Err(EvalErrorKind::TypeMismatch {
                site: TypeCheckSite::Let { name: "x".into() },
                expected: "Int".into(),
                found: "String",
            })
        );
    }
}

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;

fn eval(op: BinaryOp, left: Value, right: Value) -> Result<Value, EvalErrorKind> {
    evaluate_binary(op, &left, &right)
}

mod arithmetic {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn int_ops() {
        assert_eq!(eval(BinaryOp::Add, Value::Int(2), Value::Int(3)), Ok(Value::Int(5)));
        assert_eq!(eval(BinaryOp::Sub, Value::Int(2), Value::Int(3)), Ok(Value::Int(-1)));
        assert_eq!(eval(BinaryOp::Mul, Value::Int(4), Value::Int(3)), Ok(Value::Int(12)));
    }

    #[test]
    fn overflow_is_value_error() {
        assert_eq!(
            eval(BinaryOp::Add, Value::Int(i64::MAX), Value::Int(1)),
            Err(EvalErrorKind::IntegerOverflow { op: BinaryOp::Add })
        );
        assert_eq!(
            eval(BinaryOp::Mul, Value::Int(i64::MIN), Value::Int(-1)),
            Err(EvalErrorKind::IntegerOverflow { op: BinaryOp::Mul })
        );
    }

    #[test]
    fn division_is_true_division() {
        assert_eq!(eval(BinaryOp::Div, Value::Int(7), Value::Int(2)), Ok(Value::Float(3.5)));
        assert_eq!(eval(BinaryOp::Div, Value::Int(6), Value::Int(3)), Ok(Value::Float(2.0)));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(
            eval(BinaryOp::Div, Value::Int(1), Value::Int(0)),
            Err(EvalErrorKind::DivisionByZero)
        );
    }

    #[test]
    fn float_mixes_with_int() {
        assert_eq!(
            eval(BinaryOp::Add, Value::Float(0.5), Value::Int(1)),
            Ok(Value::Float(1.5))
        );
    }

    #[test]
    fn string_and_list_concatenation() {
        assert_eq!(
            eval(BinaryOp::Add, Value::string("ab"), Value::string("cd")),
            Ok(Value::string("abcd"))
        );
        assert_eq!(
            eval(
                BinaryOp::Add,
                Value::list(vec![Value::Int(1)]),
                Value::list(vec![Value::Int(2)])
            ),
            Ok(Value::list(vec![Value::Int(1), Value::Int(2)]))
        );
    }

    #[test]
    fn mismatched_operands_are_type_errors() {
        let err = eval(BinaryOp::Add, Value::Int(1), Value::string("a")).unwrap_err();
        assert_eq!(
            err,
            EvalErrorKind::InvalidOperands {
                op: BinaryOp::Add,
                left: "Int",
                right: "String"
            }
        );
        assert_eq!(err.category(), crate::ErrorCategory::TypeError);
        assert!(eval(BinaryOp::Sub, Value::string("a"), Value::string("b")).is_err());
    }
}

mod comparison {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ints_and_strings_order() {
        assert_eq!(eval(BinaryOp::Lt, Value::Int(1), Value::Int(2)), Ok(Value::Bool(true)));
        assert_eq!(eval(BinaryOp::GtEq, Value::Int(2), Value::Int(2)), Ok(Value::Bool(true)));
        assert_eq!(
            eval(BinaryOp::Gt, Value::string("b"), Value::string("a")),
            Ok(Value::Bool(true))
        );
        assert_eq!(eval(BinaryOp::LtEq, Value::Int(3), Value::Int(2)), Ok(Value::Bool(false)));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(
            eval(BinaryOp::Eq, Value::string("a"), Value::string("a")),
            Ok(Value::Bool(true))
        );
        assert_eq!(eval(BinaryOp::NotEq, Value::Int(1), Value::Bool(true)), Ok(Value::Bool(true)));
    }

    #[test]
    fn ordering_mixed_kinds_is_type_error() {
        assert!(matches!(
            eval(BinaryOp::Lt, Value::Int(1), Value::string("a")),
            Err(EvalErrorKind::InvalidOperands { .. })
        ));
    }
}

#[test]
fn logical_ops_are_not_handled_here() {
    assert_eq!(
        eval(BinaryOp::And, Value::Bool(true), Value::Bool(true)),
        Err(EvalErrorKind::UnknownOperator { op: BinaryOp::And })
    );
}

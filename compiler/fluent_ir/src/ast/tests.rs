use super::*;
use pretty_assertions::assert_eq;

#[test]
fn nested_list_type_displays_like_source() {
    let ty = TypeExpr::list(TypeExpr::list(TypeExpr::simple("String")));
    assert_eq!(ty.to_string(), "List[List[String]]");
}

#[test]
fn binary_constructor_boxes_operands() {
    let one = Expr::new(ExprKind::Number(1), Span::new(0, 0));
    let two = Expr::new(ExprKind::Number(2), Span::new(0, 4));
    let sum = Expr::binary(one.clone(), BinaryOp::Add, two.clone(), Span::new(0, 2));

    assert_eq!(
        sum.kind,
        ExprKind::Binary {
            left: Box::new(one),
            op: BinaryOp::Add,
            right: Box::new(two),
        }
    );
}

#[test]
fn as_var_only_matches_identifiers() {
    let var = Expr::new(ExprKind::Var("f".into()), Span::DUMMY);
    let num = Expr::new(ExprKind::Number(3), Span::DUMMY);
    assert_eq!(var.as_var(), Some("f"));
    assert_eq!(num.as_var(), None);
}

#[test]
fn pattern_display() {
    assert_eq!(Pattern::Wildcard.to_string(), "_");
    assert_eq!(Pattern::Int(-3).to_string(), "-3");
    assert_eq!(Pattern::Str("hi".into()).to_string(), "\"hi\"");
    assert_eq!(Pattern::Name("limit".into()).to_string(), "limit");
}

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use fluent_ir::{BinaryOp, Expr, ExprKind, Pattern, Span, StmtKind, TypeExpr};
use pretty_assertions::assert_eq;

fn parse_source(source: &str) -> Result<Vec<Stmt>, ParseError> {
    let tokens = fluent_lexer::lex(source).unwrap();
    parse(&tokens)
}

fn parse_ok(source: &str) -> Vec<Stmt> {
    parse_source(source).unwrap()
}

fn parse_err(source: &str) -> ParseError {
    parse_source(source).unwrap_err()
}

/// Parse a single expression statement and return the expression.
fn expr(source: &str) -> Expr {
    let mut program = parse_ok(source);
    assert_eq!(program.len(), 1, "expected one statement in {source:?}");
    match program.remove(0).kind {
        StmtKind::Expr(e) => e,
        other => panic!("expected expression statement, got {other:?}"),
    }
}

/// Render an expression as a fully parenthesized string, ignoring spans.
fn shape(e: &Expr) -> String {
    match &e.kind {
        ExprKind::Number(n) => n.to_string(),
        ExprKind::String(s) => format!("{s:?}"),
        ExprKind::Boolean(b) => b.to_string(),
        ExprKind::Var(name) => name.clone(),
        ExprKind::Binary { left, op, right } => {
            format!("({} {} {})", shape(left), op, shape(right))
        }
        ExprKind::Call { func, args } => {
            let args: Vec<_> = args.iter().map(shape).collect();
            format!("{func}({})", args.join(", "))
        }
        ExprKind::ListLiteral { elements } => {
            let elements: Vec<_> = elements.iter().map(shape).collect();
            format!("[{}]", elements.join(", "))
        }
        ExprKind::Index { target, index } => format!("{}[{}]", shape(target), shape(index)),
        ExprKind::If { .. } => "if".into(),
        ExprKind::Match { .. } => "match".into(),
    }
}

mod precedence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn multiplication_binds_tighter() {
        assert_eq!(shape(&expr("1 + 2 * 3")), "(1 + (2 * 3))");
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(shape(&expr("1 - 2 - 3")), "((1 - 2) - 3)");
    }

    #[test]
    fn division_is_left_associative() {
        assert_eq!(shape(&expr("8 / 4 / 2")), "((8 / 4) / 2)");
    }

    #[test]
    fn comparison_below_arithmetic() {
        assert_eq!(shape(&expr("a + 1 < b * 2")), "((a + 1) < (b * 2))");
    }

    #[test]
    fn and_binds_tighter_than_or() {
        assert_eq!(
            shape(&expr("a or b and c")),
            "(a or (b and c))"
        );
    }

    #[test]
    fn parentheses_override() {
        assert_eq!(shape(&expr("(1 + 2) * 3")), "((1 + 2) * 3)");
    }

    #[test]
    fn not_lowers_to_and_not() {
        let e = expr("not done");
        assert_eq!(
            e.kind,
            ExprKind::Binary {
                left: Box::new(Expr::new(ExprKind::Boolean(true), Span::new(0, 0))),
                op: BinaryOp::AndNot,
                right: Box::new(Expr::new(ExprKind::Var("done".into()), Span::new(0, 4))),
            }
        );
    }

    #[test]
    fn not_applies_to_postfix_operand() {
        assert_eq!(shape(&expr("not f(x) or y")), "((true and not f(x)) or y)");
    }
}

mod postfix {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn call_with_arguments() {
        assert_eq!(shape(&expr("add(1, 2 + 3)")), "add(1, (2 + 3))");
    }

    #[test]
    fn call_without_arguments() {
        assert_eq!(shape(&expr("main()")), "main()");
    }

    #[test]
    fn print_keyword_is_callable() {
        assert_eq!(shape(&expr("print(\"hi\", 1)")), "print(\"hi\", 1)");
    }

    #[test]
    fn index_chains() {
        assert_eq!(shape(&expr("grid[1][2]")), "grid[1][2]");
    }

    #[test]
    fn list_literal_indexed() {
        assert_eq!(shape(&expr("[10, 20, 30][1]")), "[10, 20, 30][1]");
    }

    #[test]
    fn call_result_can_be_indexed() {
        assert_eq!(shape(&expr("rows()[0]")), "rows()[0]");
    }

    #[test]
    fn calling_a_call_is_rejected() {
        let err = parse_err("f(1)(2)");
        assert_eq!(err.kind, ParseErrorKind::CallOnNonIdentifier);
        assert_eq!(err.span, Span::new(0, 4));
    }

    #[test]
    fn calling_a_literal_is_rejected() {
        assert_eq!(parse_err("3(1)").kind, ParseErrorKind::CallOnNonIdentifier);
    }

    #[test]
    fn calling_parenthesized_name_is_rejected() {
        let err = parse_err("fn f()\n  1\n(f)()\n");
        assert_eq!(err.kind, ParseErrorKind::CallOnNonIdentifier);
        assert_eq!(err.span, Span::new(2, 3));
    }

    #[test]
    fn parenthesized_name_can_be_indexed() {
        assert_eq!(shape(&expr("(xs)[0]")), "xs[0]");
    }

    #[test]
    fn trailing_comma_in_list() {
        assert_eq!(shape(&expr("[1, 2,]")), "[1, 2]");
    }

    #[test]
    fn empty_list() {
        assert_eq!(shape(&expr("[]")), "[]");
    }
}

mod statements {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn let_with_nested_list_type() {
        let program = parse_ok("let tbl: List[List[String]] = []");
        assert_eq!(
            program[0].kind,
            StmtKind::Let {
                name: "tbl".into(),
                ty: Some(TypeExpr::list(TypeExpr::list(TypeExpr::simple("String")))),
                value: Expr::new(ExprKind::ListLiteral { elements: vec![] }, Span::new(0, 30)),
            }
        );
    }

    #[test]
    fn bare_list_type_is_simple() {
        let program = parse_ok("let xs: List = [1]");
        let StmtKind::Let { ty, .. } = &program[0].kind else {
            panic!("expected let");
        };
        assert_eq!(ty, &Some(TypeExpr::simple("List")));
    }

    #[test]
    fn fn_decl_with_params_and_return_type() {
        let program = parse_ok("fn add(a: Int, b: Int) -> Int\n  a + b\n");
        let StmtKind::FnDecl(decl) = &program[0].kind else {
            panic!("expected fn decl");
        };
        assert_eq!(decl.name, "add");
        let params: Vec<_> = decl
            .params
            .iter()
            .map(|p| (p.name.as_str(), p.ty.to_string()))
            .collect();
        assert_eq!(params, vec![("a", "Int".to_string()), ("b", "Int".to_string())]);
        assert_eq!(decl.return_type, Some(TypeExpr::simple("Int")));
        assert_eq!(decl.body.len(), 1);
    }

    #[test]
    fn fn_decl_without_params_or_return_type() {
        let program = parse_ok("fn main()\n  print(1)\n  print(2)\nmain()");
        assert_eq!(program.len(), 2);
        let StmtKind::FnDecl(decl) = &program[0].kind else {
            panic!("expected fn decl");
        };
        assert!(decl.params.is_empty());
        assert_eq!(decl.return_type, None);
        assert_eq!(decl.body.len(), 2);
    }

    #[test]
    fn return_statement() {
        let program = parse_ok("fn f() -> Int\n  return 1\n");
        let StmtKind::FnDecl(decl) = &program[0].kind else {
            panic!("expected fn decl");
        };
        assert!(matches!(&decl.body[0].kind, StmtKind::Return(e) if shape(e) == "1"));
    }

    #[test]
    fn param_requires_type() {
        let err = parse_err("fn f(a)\n  a\n");
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                expected: TokenKind::Colon,
                found: TokenKind::RParen,
            }
        );
    }

    #[test]
    fn let_requires_assignment() {
        let err = parse_err("let x 5");
        assert_eq!(err.found, TokenKind::Number);
        assert_eq!(err.text, "5");
        assert_eq!(err.span, Span::new(0, 6));
    }

    #[test]
    fn stray_indent_is_rejected() {
        let err = parse_err("let x = 1\n  let y = 2\n");
        assert_eq!(
            err.kind,
            ParseErrorKind::ExpectedExpression {
                found: TokenKind::Indent
            }
        );
    }

    #[test]
    fn statement_spans_point_at_first_token() {
        let program = parse_ok("let a = 1\nlet b = 2\n");
        let spans: Vec<_> = program.iter().map(|s| s.span).collect();
        assert_eq!(spans, vec![Span::new(0, 0), Span::new(1, 0)]);
    }
}

mod control_flow {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn if_with_else() {
        let e = expr("if x > 1\n  \"big\"\nelse\n  \"small\"\n");
        let ExprKind::If {
            condition,
            then_block,
            else_block,
        } = &e.kind
        else {
            panic!("expected if");
        };
        assert_eq!(shape(condition), "(x > 1)");
        assert_eq!(then_block.len(), 1);
        assert_eq!(else_block.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn if_without_else() {
        let e = expr("if ok\n  1\n");
        assert!(matches!(e.kind, ExprKind::If { else_block: None, .. }));
    }

    #[test]
    fn nested_if_else_pairs_correctly() {
        let source = "if a\n  if b\n    1\n  else\n    2\nelse\n  3\n";
        let e = expr(source);
        let ExprKind::If {
            then_block,
            else_block,
            ..
        } = &e.kind
        else {
            panic!("expected if");
        };
        let StmtKind::Expr(inner) = &then_block[0].kind else {
            panic!("expected inner if");
        };
        assert!(matches!(inner.kind, ExprKind::If { else_block: Some(_), .. }));
        assert!(else_block.is_some());
    }

    #[test]
    fn if_as_let_value() {
        let program = parse_ok("let r = if c\n  1\nelse\n  2\nprint(r)\n");
        assert_eq!(program.len(), 2);
    }

    #[test]
    fn match_arms_in_order() {
        let e = expr("match n\n  1 => \"one\"\n  \"x\" => 2\n  limit => 3\n  _ => 4\n");
        let ExprKind::Match { scrutinee, arms } = &e.kind else {
            panic!("expected match");
        };
        assert_eq!(shape(scrutinee), "n");
        let patterns: Vec<_> = arms.iter().map(|a| a.pattern.clone()).collect();
        assert_eq!(
            patterns,
            vec![
                Pattern::Int(1),
                Pattern::Str("x".into()),
                Pattern::Name("limit".into()),
                Pattern::Wildcard,
            ]
        );
        assert_eq!(shape(&arms[0].expr), "\"one\"");
    }

    #[test]
    fn match_requires_an_arm() {
        let err = parse_err("match n\nx");
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                expected: TokenKind::Indent,
                found: TokenKind::Ident,
            }
        );
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        let err = parse_err("match n\n  [1] => 2\n");
        assert_eq!(
            err.kind,
            ParseErrorKind::InvalidPattern {
                found: TokenKind::LBracket
            }
        );
    }

    /// Returns the second of exactly two statements as an expression.
    fn statement_after_block(source: &str) -> Expr {
        let mut program = parse_ok(source);
        assert_eq!(program.len(), 2, "expected two statements in {source:?}");
        match program.remove(1).kind {
            StmtKind::Expr(e) => e,
            other => panic!("expected expression statement, got {other:?}"),
        }
    }

    #[test]
    fn list_line_after_if_block_is_a_new_statement() {
        let next = statement_after_block("if c\n  print(1)\n[10, 20][1]");
        assert_eq!(shape(&next), "[10, 20][1]");
    }

    #[test]
    fn index_line_after_if_else_in_let_is_a_new_statement() {
        let source = "let y = if true\n  xs\nelse\n  xs\n[0]";
        let next = statement_after_block(source);
        assert_eq!(shape(&next), "[0]");
    }

    #[test]
    fn paren_line_after_match_block_is_a_new_statement() {
        let source = "match 1\n  1 => 5\n  _ => 6\n(1 + 2) * 3";
        let next = statement_after_block(source);
        assert_eq!(shape(&next), "((1 + 2) * 3)");
    }

    #[test]
    fn block_closes_right_operand() {
        let source = "x + if c\n  1\nelse\n  2\n(3)";
        let next = statement_after_block(source);
        assert_eq!(shape(&next), "3");
    }

    #[test]
    fn else_without_block_is_rejected() {
        let err = parse_err("if a\n  1\nelse 2\n");
        assert_eq!(err.found, TokenKind::Number);
    }
}

#[test]
fn empty_program() {
    assert_eq!(parse_ok(""), vec![]);
    assert_eq!(parse(&[]).unwrap(), vec![]);
}

#[test]
fn error_display_names_token_and_position() {
    let err = parse_err("let = 3");
    assert_eq!(
        err.to_string(),
        "ParseError: expected identifier, found '=' at 1:5"
    );
}

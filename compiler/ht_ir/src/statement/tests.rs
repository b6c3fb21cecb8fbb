use super::*;
use crate::keywords;
use pretty_assertions::assert_eq;

#[test]
fn test_kind_matches_variant() {
    assert_eq!(Statement::number(1).kind(), StatementKind::Number);
    assert_eq!(Statement::string("a").kind(), StatementKind::String);
    assert_eq!(Statement::identifier("x").kind(), StatementKind::Identifier);
    assert_eq!(Statement::End.kind(), StatementKind::End);
    assert_eq!(
        Statement::operator(BinaryOp::Add).kind(),
        StatementKind::Operator
    );
    assert_eq!(
        Statement::if_statement(Statement::identifier("ok"), vec![]).kind(),
        StatementKind::IfStatement
    );
}

#[test]
fn test_kind_display_uses_parser_names() {
    assert_eq!(StatementKind::OpenTag.to_string(), "OpenTag");
    assert_eq!(StatementKind::ParameterValue.to_string(), "ParameterValue");
}

#[test]
fn test_binary_builds_postfix_sequence() {
    let expr = Statement::binary(Statement::number(5), BinaryOp::Add, Statement::number(3));
    let Statement::Expression(expr) = expr else {
        panic!("expected an expression");
    };
    assert_eq!(
        expr.statements,
        vec![
            Statement::number(5),
            Statement::number(3),
            Statement::operator(BinaryOp::Add),
        ]
    );
}

#[test]
fn test_unwrap_parameter_value_strips_nested_wrappers() {
    let wrapped = Statement::parameter_value(Statement::parameter_value(Statement::number(7)));
    assert_eq!(wrapped.unwrap_parameter_value(), &Statement::number(7));

    let bare = Statement::string("x");
    assert_eq!(bare.unwrap_parameter_value(), &bare);
}

#[test]
fn test_if_statement_uses_condition_parameter() {
    let Statement::IfStatement(tag) = Statement::if_statement(Statement::number(1), vec![]) else {
        panic!("expected an if statement");
    };
    assert_eq!(tag.name, keywords::IF);
    assert_eq!(tag.params.len(), 1);
    assert_eq!(tag.params[0].key, "condition");
}

#[test]
fn test_operator_symbols_round_trip() {
    for op in BinaryOp::ALL {
        assert_eq!(BinaryOp::from_symbol(op.as_symbol()), Some(op));
    }
    assert_eq!(BinaryOp::from_symbol("%"), None);
    assert_eq!(BinaryOp::from_symbol("<"), None);
}

#[test]
fn test_comparison_operators() {
    assert!(BinaryOp::Greater.is_comparison());
    assert!(BinaryOp::NotEq.is_comparison());
    assert!(!BinaryOp::Div.is_comparison());
}

#[test]
fn test_keywords() {
    assert!(keywords::is_keyword("Let"));
    assert!(keywords::is_keyword("If"));
    assert!(!keywords::is_keyword("Print"));
    assert!(!keywords::is_keyword("let"));
}

#[test]
fn test_program_len() {
    let program = Program::new(vec![Statement::End]);
    assert_eq!(program.len(), 1);
    assert!(!program.is_empty());
    assert!(Program::default().is_empty());
}

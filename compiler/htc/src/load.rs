//! Program loading.

use ht_eval::errors::structural;
use ht_eval::EvalError;
use ht_ir::Program;

/// Deserialize a `Program` from its JSON form.
///
/// Malformed JSON, unknown statement kinds and payloads of the wrong shape
/// are all structural errors, reported before anything is evaluated.
pub fn load_program(source: &str) -> Result<Program, EvalError> {
    let program: Program = serde_json::from_str(source).map_err(|err| structural(err.to_string()))?;
    tracing::debug!(statements = program.len(), "program loaded");
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ht_eval::EvalErrorKind;
    use ht_ir::{BinaryOp, Parameter, Statement};
    use pretty_assertions::assert_eq;

    #[test]
    fn loads_adjacently_tagged_statements() {
        let source = r#"{
            "statements": [
                {"kind": "CloseTag", "body": {"name": "Let", "params": [
                    {"key": "id", "value": {"kind": "String", "body": "x"}},
                    {"key": "value", "value": {"kind": "Expression", "body": {"statements": [
                        {"kind": "Number", "body": 5},
                        {"kind": "Number", "body": 3},
                        {"kind": "Operator", "body": "+"}
                    ]}}}
                ]}},
                {"kind": "End"}
            ]
        }"#;
        let program = load_program(source).unwrap();
        assert_eq!(
            program.statements,
            vec![
                Statement::close_tag(
                    "Let",
                    vec![
                        Parameter::new("id", Statement::string("x")),
                        Parameter::new(
                            "value",
                            Statement::binary(
                                Statement::number(5),
                                BinaryOp::Add,
                                Statement::number(3)
                            )
                        ),
                    ]
                ),
                Statement::End,
            ]
        );
    }

    #[test]
    fn missing_params_and_children_default_to_empty() {
        let source = r#"{"statements": [{"kind": "OpenTag", "body": {"name": "Block"}}]}"#;
        let program = load_program(source).unwrap();
        assert_eq!(program.statements, vec![Statement::open_tag("Block", vec![], vec![])]);
    }

    #[test]
    fn unknown_kind_is_structural() {
        let source = r#"{"statements": [{"kind": "Loop", "body": {}}]}"#;
        let err = load_program(source).unwrap_err();
        assert!(matches!(err.kind(), EvalErrorKind::Structural { .. }));
        assert!(err.to_string().starts_with("malformed program: "));
    }

    #[test]
    fn unknown_operator_is_structural() {
        let source = r#"{"statements": [{"kind": "Operator", "body": "%"}]}"#;
        assert!(matches!(
            load_program(source).unwrap_err().kind(),
            EvalErrorKind::Structural { .. }
        ));
    }

    #[test]
    fn invalid_json_is_structural() {
        let err = load_program("{\"statements\": [").unwrap_err();
        assert!(matches!(err.kind(), EvalErrorKind::Structural { .. }));
    }
}

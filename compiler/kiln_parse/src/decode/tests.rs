use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn num(value: i64) -> Value {
    json!({ "type": "num", "value": value })
}

fn ident(name: &str) -> Value {
    json!({ "type": "ident", "name": name })
}

fn malformed_at(err: &ParseError) -> (&str, &str) {
    match err {
        ParseError::MalformedNode { path, detail } => (path.as_str(), detail.as_str()),
        other => panic!("expected MalformedNode, got {other:?}"),
    }
}

mod expressions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leaf_nodes() {
        assert_eq!(parse_expr(&num(42)).unwrap(), Expr::num(42));
        assert_eq!(parse_expr(&num(-7)).unwrap(), Expr::num(-7));
        assert_eq!(parse_expr(&ident("x")).unwrap(), Expr::ident("x"));
    }

    #[test]
    fn test_number_extremes() {
        assert_eq!(parse_expr(&num(i64::MAX)).unwrap(), Expr::num(i64::MAX));
        assert_eq!(parse_expr(&num(i64::MIN)).unwrap(), Expr::num(i64::MIN));
    }

    #[test]
    fn test_every_operator() {
        for op in BinaryOp::ALL {
            let node = json!({ "type": "bin", "op": op.name(), "left": num(1), "right": num(2) });
            assert_eq!(
                parse_expr(&node).unwrap(),
                Expr::binary(op, Expr::num(1), Expr::num(2))
            );
        }
    }

    #[test]
    fn test_control_flow_nodes() {
        let node = json!({
            "type": "seq",
            "exprs": [
                { "type": "assign", "name": "i", "value": num(0) },
                {
                    "type": "while",
                    "cond": { "type": "bin", "op": "Lt", "left": ident("i"), "right": num(3) },
                    "body": { "type": "assign", "name": "i", "value":
                        { "type": "bin", "op": "Add", "left": ident("i"), "right": num(1) } }
                },
                { "type": "if", "cond": ident("i"), "then": num(1), "else": num(0) }
            ]
        });

        let expected = Expr::seq([
            Expr::assign("i", Expr::num(0)),
            Expr::while_(
                Expr::binary(BinaryOp::Lt, Expr::ident("i"), Expr::num(3)),
                Expr::assign(
                    "i",
                    Expr::binary(BinaryOp::Add, Expr::ident("i"), Expr::num(1)),
                ),
            ),
            Expr::if_(Expr::ident("i"), Expr::num(1), Expr::num(0)),
        ]);
        assert_eq!(parse_expr(&node).unwrap(), expected);
    }

    #[test]
    fn test_empty_seq_and_call() {
        assert_eq!(
            parse_expr(&json!({ "type": "seq", "exprs": [] })).unwrap(),
            Expr::seq([])
        );
        assert_eq!(
            parse_expr(&json!({ "type": "call", "name": "f", "args": [num(1), ident("y")] }))
                .unwrap(),
            Expr::call("f", [Expr::num(1), Expr::ident("y")])
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        let node = json!({ "type": "num", "value": 3, "comment": "three", "span": [0, 1] });
        assert_eq!(parse_expr(&node).unwrap(), Expr::num(3));
    }
}

mod functions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_function_node() {
        let node = json!({ "name": "add", "params": ["a", "b"], "body":
            { "type": "bin", "op": "Add", "left": ident("a"), "right": ident("b") } });
        assert_eq!(
            parse_function(&node).unwrap(),
            FunctionDef::new(
                "add",
                ["a", "b"],
                Expr::binary(BinaryOp::Add, Expr::ident("a"), Expr::ident("b")),
            )
        );
    }

    #[test]
    fn test_non_string_param() {
        let node = json!({ "name": "f", "params": ["a", 1], "body": num(0) });
        let err = parse_function(&node).unwrap_err();
        assert_eq!(malformed_at(&err), ("params[1]", "parameter must be a string"));
    }

    #[test]
    fn test_program_paths() {
        let root = json!({
            "funcs": [
                { "name": "ok", "params": [], "body": num(1) },
                { "name": "bad", "params": [], "body": { "type": "num" } }
            ],
            "body": num(0)
        });
        let err = parse_program_value(&root).unwrap_err();
        assert_eq!(
            malformed_at(&err),
            ("funcs[1].body", "missing field `value`")
        );
    }

    #[test]
    fn test_program_requires_funcs_and_body() {
        let err = parse_program_value(&json!({ "body": num(0) })).unwrap_err();
        assert_eq!(malformed_at(&err), ("", "missing field `funcs`"));

        let err = parse_program_value(&json!({ "funcs": [] })).unwrap_err();
        assert_eq!(malformed_at(&err), ("", "missing field `body`"));
    }
}

mod failures {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_tag() {
        let node = json!({ "type": "seq", "exprs": [num(1), { "type": "lambda" }] });
        assert_eq!(
            parse_expr(&node).unwrap_err(),
            ParseError::UnknownNodeType {
                tag: "lambda".to_string(),
                path: NodePath::root().field("exprs").index(1),
            }
        );
    }

    #[test]
    fn test_unknown_operator() {
        let node = json!({ "type": "bin", "op": "Mod", "left": num(1), "right": num(2) });
        assert_eq!(
            parse_expr(&node).unwrap_err(),
            ParseError::UnknownOperator {
                name: "Mod".to_string(),
                path: NodePath::root(),
            }
        );
    }

    #[test]
    fn test_operator_names_are_case_sensitive() {
        let node = json!({ "type": "bin", "op": "add", "left": num(1), "right": num(2) });
        assert!(matches!(
            parse_expr(&node),
            Err(ParseError::UnknownOperator { .. })
        ));
    }

    #[test]
    fn test_nested_path() {
        let node = json!({ "type": "seq", "exprs": [
            num(0),
            { "type": "bin", "op": "Add", "left": { "type": "ident" }, "right": num(1) }
        ] });
        let err = parse_expr(&node).unwrap_err();
        assert_eq!(malformed_at(&err), ("exprs[1].left", "missing field `name`"));
    }

    #[test]
    fn test_missing_type_tag() {
        let err = parse_expr(&json!({ "value": 1 })).unwrap_err();
        assert_eq!(malformed_at(&err), ("", "missing field `type`"));
    }

    #[test]
    fn test_wrong_field_types() {
        let cases = [
            (json!({ "type": "num", "value": "1" }), "field `value` must be a 64-bit signed integer"),
            (json!({ "type": "num", "value": 1.5 }), "field `value` must be a 64-bit signed integer"),
            (json!({ "type": "num", "value": u64::MAX }), "field `value` must be a 64-bit signed integer"),
            (json!({ "type": "ident", "name": 3 }), "field `name` must be a string"),
            (json!({ "type": "seq", "exprs": {} }), "field `exprs` must be an array"),
            (json!({ "type": "call", "name": "f", "args": null }), "field `args` must be an array"),
            (json!({ "type": 7 }), "field `type` must be a string"),
        ];
        for (node, detail) in cases {
            let err = parse_expr(&node).unwrap_err();
            assert_eq!(malformed_at(&err), ("", detail), "node: {node}");
        }
    }

    #[test]
    fn test_non_object_node() {
        let err = parse_expr(&json!([1, 2])).unwrap_err();
        assert_eq!(malformed_at(&err), ("", "expected an object, found an array"));

        let err = parse_expr(&json!({ "type": "seq", "exprs": [null] })).unwrap_err();
        assert_eq!(malformed_at(&err), ("exprs[0]", "expected an object, found null"));
    }

    #[test]
    fn test_first_error_in_field_order() {
        // `op` is checked before either operand.
        let node = json!({ "type": "bin", "op": "Pow", "left": { "type": "bogus" }, "right": num(1) });
        assert!(matches!(
            parse_expr(&node),
            Err(ParseError::UnknownOperator { .. })
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            parse_program_str("{ \"funcs\": [ "),
            Err(ParseError::InvalidJson(_))
        ));
        assert!(matches!(parse_program(b""), Err(ParseError::InvalidJson(_))));
        assert!(matches!(
            parse_program(&[0xff, 0xfe]),
            Err(ParseError::InvalidJson(_))
        ));
    }
}

#[test]
fn test_deep_value_tree() {
    // Built in memory, so serde_json's parser depth guard does not apply.
    let mut node = num(1);
    let mut expected = Expr::num(1);
    for _ in 0..2_000 {
        node = json!({ "type": "bin", "op": "Add", "left": node, "right": num(1) });
        expected = Expr::binary(BinaryOp::Add, expected, Expr::num(1));
    }
    assert_eq!(parse_expr(&node).unwrap(), expected);
    // serde_json drops `Value` recursively; unwind it iteratively.
    drop_iteratively(node);
    drop_expr_iteratively(expected);
}

fn drop_iteratively(value: Value) {
    let mut stack = vec![value];
    while let Some(mut value) = stack.pop() {
        if let Some(obj) = value.as_object_mut() {
            stack.extend(std::mem::take(obj).into_iter().map(|(_, v)| v));
        }
    }
}

fn drop_expr_iteratively(expr: Expr) {
    let mut stack = vec![expr];
    while let Some(expr) = stack.pop() {
        if let Expr::Binary { left, right, .. } = expr {
            stack.push(*left);
            stack.push(*right);
        }
    }
}

//! Node-by-node decoding from `serde_json::Value` into the AST.

use kiln_ir::{BinaryOp, Expr, FunctionDef, Program};
use kiln_stack::ensure_sufficient_stack;
use serde_json::{Map, Value};

use crate::errors::{malformed, missing_field, wrong_type, NodePath, ParseError};

type Object = Map<String, Value>;

/// Decode a program from raw payload bytes.
pub fn parse_program(payload: &[u8]) -> Result<Program, ParseError> {
    let root: Value =
        serde_json::from_slice(payload).map_err(|e| ParseError::InvalidJson(e.to_string()))?;
    parse_program_value(&root)
}

/// Decode a program from a string payload.
pub fn parse_program_str(payload: &str) -> Result<Program, ParseError> {
    parse_program(payload.as_bytes())
}

/// Decode a program from an already-parsed JSON value.
pub fn parse_program_value(root: &Value) -> Result<Program, ParseError> {
    let path = NodePath::root();
    let obj = object(root, &path)?;

    let funcs_path = path.field("funcs");
    let functions = array_field(obj, &path, "funcs")?
        .iter()
        .enumerate()
        .map(|(i, node)| function_at(node, &funcs_path.index(i)))
        .collect::<Result<Vec<_>, _>>()?;
    let body = expr_field(obj, &path, "body")?;

    tracing::debug!(
        functions = functions.len(),
        body = body.kind_name(),
        "decoded program"
    );
    Ok(Program::new(functions, body))
}

/// Decode a single function node.
pub fn parse_function(node: &Value) -> Result<FunctionDef, ParseError> {
    function_at(node, &NodePath::root())
}

/// Decode a single expression node.
pub fn parse_expr(node: &Value) -> Result<Expr, ParseError> {
    expr_at(node, &NodePath::root())
}

fn function_at(node: &Value, path: &NodePath) -> Result<FunctionDef, ParseError> {
    let obj = object(node, path)?;
    let name = str_field(obj, path, "name")?;

    let params_path = path.field("params");
    let params = array_field(obj, path, "params")?
        .iter()
        .enumerate()
        .map(|(i, param)| {
            param
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| malformed(&params_path.index(i), "parameter must be a string"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let body = expr_field(obj, path, "body")?;

    tracing::trace!(
        function = name,
        arity = params.len(),
        body = body.kind_name(),
        "decoded function"
    );
    Ok(FunctionDef::new(name, params, body))
}

fn expr_at(node: &Value, path: &NodePath) -> Result<Expr, ParseError> {
    ensure_sufficient_stack(|| {
        let obj = object(node, path)?;
        match str_field(obj, path, "type")? {
            "num" => Ok(Expr::Number(int_field(obj, path, "value")?)),
            "ident" => Ok(Expr::ident(str_field(obj, path, "name")?)),
            "bin" => {
                let name = str_field(obj, path, "op")?;
                let op = BinaryOp::from_name(name).ok_or_else(|| ParseError::UnknownOperator {
                    name: name.to_string(),
                    path: path.clone(),
                })?;
                Ok(Expr::binary(
                    op,
                    expr_field(obj, path, "left")?,
                    expr_field(obj, path, "right")?,
                ))
            }
            "if" => Ok(Expr::if_(
                expr_field(obj, path, "cond")?,
                expr_field(obj, path, "then")?,
                expr_field(obj, path, "else")?,
            )),
            "while" => Ok(Expr::while_(
                expr_field(obj, path, "cond")?,
                expr_field(obj, path, "body")?,
            )),
            "assign" => Ok(Expr::assign(
                str_field(obj, path, "name")?,
                expr_field(obj, path, "value")?,
            )),
            "seq" => Ok(Expr::Seq(expr_list(obj, path, "exprs")?)),
            "call" => Ok(Expr::Call {
                name: str_field(obj, path, "name")?.to_string(),
                args: expr_list(obj, path, "args")?,
            }),
            tag => Err(ParseError::UnknownNodeType {
                tag: tag.to_string(),
                path: path.clone(),
            }),
        }
    })
}

// Field access helpers

fn object<'v>(node: &'v Value, path: &NodePath) -> Result<&'v Object, ParseError> {
    node.as_object()
        .ok_or_else(|| malformed(path, format!("expected an object, found {}", json_kind(node))))
}

fn field<'v>(obj: &'v Object, path: &NodePath, name: &str) -> Result<&'v Value, ParseError> {
    obj.get(name).ok_or_else(|| missing_field(path, name))
}

fn str_field<'v>(obj: &'v Object, path: &NodePath, name: &str) -> Result<&'v str, ParseError> {
    field(obj, path, name)?
        .as_str()
        .ok_or_else(|| wrong_type(path, name, "a string"))
}

fn int_field(obj: &Object, path: &NodePath, name: &str) -> Result<i64, ParseError> {
    field(obj, path, name)?
        .as_i64()
        .ok_or_else(|| wrong_type(path, name, "a 64-bit signed integer"))
}

fn array_field<'v>(
    obj: &'v Object,
    path: &NodePath,
    name: &str,
) -> Result<&'v [Value], ParseError> {
    field(obj, path, name)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| wrong_type(path, name, "an array"))
}

fn expr_field(obj: &Object, path: &NodePath, name: &str) -> Result<Expr, ParseError> {
    expr_at(field(obj, path, name)?, &path.field(name))
}

fn expr_list(obj: &Object, path: &NodePath, name: &str) -> Result<Vec<Expr>, ParseError> {
    let list_path = path.field(name);
    array_field(obj, path, name)?
        .iter()
        .enumerate()
        .map(|(i, node)| expr_at(node, &list_path.index(i)))
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

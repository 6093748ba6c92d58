//! Binary operator implementations for the evaluator.
//!
//! The operand set is closed, so dispatch is a single match on the operator
//! followed by a match on the operand tags.

use chileno_ir::BinaryOp;

use crate::errors::{invalid_operands, EvalError, EvalResult};
use crate::Value;

/// Evaluate `left op right`.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::from_bool(left == right)),
        BinaryOp::NotEq => Ok(Value::from_bool(left != right)),
        BinaryOp::Add if left.as_str().is_some() || right.as_str().is_some() => {
            Ok(concat(left, right))
        }
        BinaryOp::Add => eval_arith(left, right, op, |a, b| a + b),
        BinaryOp::Sub => eval_arith(left, right, op, |a, b| a - b),
        BinaryOp::Mul => eval_arith(left, right, op, |a, b| a * b),
        BinaryOp::Div => eval_arith(left, right, op, divide),
        BinaryOp::Lt => eval_ordering(left, right, op, |a, b| a < b),
        BinaryOp::LtEq => eval_ordering(left, right, op, |a, b| a <= b),
        BinaryOp::Gt => eval_ordering(left, right, op, |a, b| a > b),
        BinaryOp::GtEq => eval_ordering(left, right, op, |a, b| a >= b),
    }
}

fn concat(left: &Value, right: &Value) -> Value {
    let mut out = left.stringify();
    out.push_str(&right.stringify());
    Value::Str(out)
}

fn numeric_operands(left: &Value, right: &Value, op: BinaryOp) -> Result<(f64, f64), EvalError> {
    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(invalid_operands(
            op.as_symbol(),
            left.type_name(),
            right.type_name(),
        )),
    }
}

/// Division by zero yields zero instead of failing.
fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        tracing::warn!(dividend = a, "division by zero, result is 0");
        0.0
    } else {
        a / b
    }
}

/// Arithmetic is computed in floating point. Two int operands narrow back
/// to int when the result is whole and in range; anything else is float.
fn eval_arith(left: &Value, right: &Value, op: BinaryOp, apply: fn(f64, f64) -> f64) -> EvalResult {
    let (a, b) = numeric_operands(left, right, op)?;
    let result = apply(a, b);
    Ok(match (left, right) {
        (Value::Int(_), Value::Int(_)) => narrow(result),
        _ => float_value(result),
    })
}

fn eval_ordering(
    left: &Value,
    right: &Value,
    op: BinaryOp,
    holds: fn(f64, f64) -> bool,
) -> EvalResult {
    let (a, b) = numeric_operands(left, right, op)?;
    Ok(Value::from_bool(holds(a, b)))
}

/// `Int` when `x` is whole and fits in `i32`, otherwise `Float`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "range and fractional part are checked before the cast"
)]
pub fn narrow(x: f64) -> Value {
    if x.fract() == 0.0 && x >= f64::from(i32::MIN) && x <= f64::from(i32::MAX) {
        Value::Int(x as i32)
    } else {
        float_value(x)
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "float values are single precision"
)]
fn float_value(x: f64) -> Value {
    Value::Float(x as f32)
}

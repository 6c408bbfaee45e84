//! Expression evaluation and operator dispatch.
//!
//! This module holds the expression half of the evaluator: literals,
//! variable lookup, operator application, postfix update, and the function
//! and method call protocol.

use std::rc::Rc;

use super::Interpreter;
use super::env::Frame;
use super::flow::Flow;
use crate::ast::{Expr, ExprKind, FnDef};
use crate::runtime::{RuntimeError, Value};
use crate::token::TokenKind;

impl<'out> Interpreter<'out> {
    /// Evaluates an expression to a value.
    pub(super) fn eval_expr(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match &expr.kind {
            ExprKind::Literal(value) => Ok(value.clone()),
            ExprKind::Variable(name) => self
                .env
                .lookup(name)
                .cloned()
                .ok_or_else(|| {
                    RuntimeError::interpreter(format!("Undefined variable `{}`", name))
                }),
            ExprKind::Binary { left, op, right } => {
                // Both operands are always evaluated; `&&` and `||` do not
                // short-circuit.
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                apply_binary(op, left, right)
            }
            ExprKind::Unary { op, operand } => {
                let value = self.eval_expr(operand)?;
                apply_unary(op, value)
            }
            ExprKind::Postfix { target, op } => self.eval_postfix(target, op),
            ExprKind::Call { callee, args } => {
                let callee_value = self.env.lookup(callee).cloned().ok_or_else(|| {
                    RuntimeError::interpreter(format!(
                        "Undefined variable or function `{}`",
                        callee
                    ))
                })?;
                self.call_with_exprs(callee_value, args)
            }
            ExprKind::MethodCall {
                receiver,
                method,
                args,
            } => {
                let receiver = self.eval_expr(receiver)?;
                let method_value = receiver
                    .method(method)
                    .ok_or_else(|| RuntimeError::no_such_method(receiver.kind_name(), method))?;
                self.call_with_exprs(Value::Method(method_value), args)
            }
            ExprKind::Get { field, .. } => Err(RuntimeError::interpreter(format!(
                "Field access `.{}` is not supported",
                field
            ))),
        }
    }

    /// Evaluates `x++` or `x--`.
    ///
    /// The variable must hold an Integer. The variable is updated and the
    /// pre-update value is returned.
    fn eval_postfix(&mut self, target: &str, op: &TokenKind) -> Result<Value, RuntimeError> {
        let old = self
            .env
            .lookup(target)
            .cloned()
            .ok_or_else(|| RuntimeError::interpreter(format!("Undefined variable `{}`", target)))?;

        let Value::Integer(old_value) = old else {
            return Err(RuntimeError::interpreter(format!(
                "{} requires an Integer variable, `{}` holds {}",
                op_symbol(op),
                target,
                old.kind_name()
            )));
        };

        let new_value = match op {
            TokenKind::PlusPlus => old_value.wrapping_add(1),
            TokenKind::MinusMinus => old_value.wrapping_sub(1),
            other => {
                return Err(RuntimeError::interpreter(format!(
                    "Unknown postfix operator {}",
                    op_symbol(other)
                )));
            }
        };

        // The lookup above succeeded, so the assignment cannot miss.
        self.env.assign(target, Value::Integer(new_value));
        Ok(Value::Integer(old_value))
    }

    /// Checks callability and arity, evaluates arguments left-to-right,
    /// and dispatches the call.
    ///
    /// Also used by [`run`](Interpreter::run) to invoke `main`, where the
    /// checks run with an empty argument list.
    pub(super) fn call_with_exprs(
        &mut self,
        callee: Value,
        args: &[Expr],
    ) -> Result<Value, RuntimeError> {
        let Some(arity) = callee.arity() else {
            return Err(RuntimeError::interpreter(format!(
                "Can only call functions, got {}",
                callee.kind_name()
            )));
        };

        if args.len() != arity {
            return Err(RuntimeError::argument_count(arity, args.len()));
        }

        let mut evaluated = Vec::with_capacity(args.len());
        for arg in args {
            evaluated.push(self.eval_expr(arg)?);
        }

        self.call_value(callee, evaluated)
    }

    /// Dispatches a call over the three callable shapes.
    fn call_value(&mut self, callee: Value, args: Vec<Value>) -> Result<Value, RuntimeError> {
        match callee {
            Value::Function(def) => self.call_function(&def, args),
            Value::Native(native) => (native.func)(self, &args),
            Value::Method(method) => (method.func)(&method.receiver, &args),
            other => Err(RuntimeError::interpreter(format!(
                "Can only call functions, got {}",
                other.kind_name()
            ))),
        }
    }

    /// Calls a user-defined function.
    ///
    /// Parameters bind into a fresh frame in declaration order. The frame
    /// is popped on every exit path; binding the body result before the
    /// pop keeps the stack depth invariant through errors as well.
    fn call_function(&mut self, def: &Rc<FnDef>, args: Vec<Value>) -> Result<Value, RuntimeError> {
        let mut frame = Frame::new();
        for (param, arg) in def.parameters.iter().zip(args) {
            frame.insert(param.name.clone(), arg);
        }

        self.env.push(frame);
        let result = self.exec_stmts(&def.body);
        self.env.pop_frame();

        match result? {
            Flow::Return(value) => Ok(value),
            Flow::Normal => Ok(Value::Void),
            Flow::Break => Err(RuntimeError::interpreter("`break` outside of a loop")),
            Flow::Continue => Err(RuntimeError::interpreter("`continue` outside of a loop")),
        }
    }
}

/// The operand pairing for a numeric operator, after promotion.
enum NumericPair {
    Ints(i64, i64),
    Floats(f64, f64),
}

/// Promotes a pair of values for numeric operation.
///
/// Integer×Integer stays integral; any Float operand promotes both sides.
/// Non-numeric operands yield `None`.
fn numeric_pair(left: &Value, right: &Value) -> Option<NumericPair> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Some(NumericPair::Ints(*a, *b)),
        (Value::Integer(a), Value::Float(b)) => Some(NumericPair::Floats(*a as f64, *b)),
        (Value::Float(a), Value::Integer(b)) => Some(NumericPair::Floats(*a, *b as f64)),
        (Value::Float(a), Value::Float(b)) => Some(NumericPair::Floats(*a, *b)),
        _ => None,
    }
}

/// Renders an operator token for error messages.
fn op_symbol(op: &TokenKind) -> &'static str {
    match op {
        TokenKind::Plus => "`+`",
        TokenKind::Minus => "`-`",
        TokenKind::Star => "`*`",
        TokenKind::Slash => "`/`",
        TokenKind::Percent => "`%`",
        TokenKind::EqualEqual => "`==`",
        TokenKind::NotEqual => "`!=`",
        TokenKind::LessThan => "`<`",
        TokenKind::LessEqual => "`<=`",
        TokenKind::GreaterThan => "`>`",
        TokenKind::GreaterEqual => "`>=`",
        TokenKind::And => "`&&`",
        TokenKind::Or => "`||`",
        TokenKind::Not => "`!`",
        TokenKind::PlusPlus => "`++`",
        TokenKind::MinusMinus => "`--`",
        _ => "operator",
    }
}

/// Builds the error for an operator applied to unsupported operand kinds.
fn unsupported_operands(op: &TokenKind, left: &Value, right: &Value) -> RuntimeError {
    RuntimeError::interpreter(format!(
        "Unsupported operand kinds for {}: {} and {}",
        op_symbol(op),
        left.kind_name(),
        right.kind_name()
    ))
}

/// Applies a binary operator to two evaluated operands.
fn apply_binary(op: &TokenKind, left: Value, right: Value) -> Result<Value, RuntimeError> {
    match op {
        TokenKind::Plus => {
            if let (Value::Str(a), Value::Str(b)) = (&left, &right) {
                let mut result = a.clone();
                result.push_str(b);
                return Ok(Value::Str(result));
            }
            match numeric_pair(&left, &right) {
                Some(NumericPair::Ints(a, b)) => Ok(Value::Integer(a.wrapping_add(b))),
                Some(NumericPair::Floats(a, b)) => Ok(Value::Float(a + b)),
                None => Err(unsupported_operands(op, &left, &right)),
            }
        }
        TokenKind::Minus => match numeric_pair(&left, &right) {
            Some(NumericPair::Ints(a, b)) => Ok(Value::Integer(a.wrapping_sub(b))),
            Some(NumericPair::Floats(a, b)) => Ok(Value::Float(a - b)),
            None => Err(unsupported_operands(op, &left, &right)),
        },
        TokenKind::Star => match numeric_pair(&left, &right) {
            Some(NumericPair::Ints(a, b)) => Ok(Value::Integer(a.wrapping_mul(b))),
            Some(NumericPair::Floats(a, b)) => Ok(Value::Float(a * b)),
            None => Err(unsupported_operands(op, &left, &right)),
        },
        TokenKind::Slash => match numeric_pair(&left, &right) {
            // Division always produces a Float; IEEE-754 handles zero
            // divisors (inf/NaN).
            Some(NumericPair::Ints(a, b)) => Ok(Value::Float(a as f64 / b as f64)),
            Some(NumericPair::Floats(a, b)) => Ok(Value::Float(a / b)),
            None => Err(unsupported_operands(op, &left, &right)),
        },
        TokenKind::Percent => match numeric_pair(&left, &right) {
            Some(NumericPair::Ints(_, 0)) => {
                Err(RuntimeError::interpreter("Integer modulo by zero"))
            }
            Some(NumericPair::Ints(a, b)) => Ok(Value::Integer(a.wrapping_rem(b))),
            // Modulo always produces an Integer; the float remainder is
            // truncated.
            Some(NumericPair::Floats(a, b)) => Ok(Value::Integer((a % b) as i64)),
            None => Err(unsupported_operands(op, &left, &right)),
        },
        TokenKind::LessThan => compare(op, &left, &right, |a, b| a < b, |a, b| a < b),
        TokenKind::LessEqual => compare(op, &left, &right, |a, b| a <= b, |a, b| a <= b),
        TokenKind::GreaterThan => compare(op, &left, &right, |a, b| a > b, |a, b| a > b),
        TokenKind::GreaterEqual => compare(op, &left, &right, |a, b| a >= b, |a, b| a >= b),
        TokenKind::EqualEqual => match values_equal(&left, &right) {
            Some(equal) => Ok(Value::Boolean(equal)),
            None => Err(unsupported_operands(op, &left, &right)),
        },
        TokenKind::NotEqual => match values_equal(&left, &right) {
            Some(equal) => Ok(Value::Boolean(!equal)),
            None => Err(unsupported_operands(op, &left, &right)),
        },
        TokenKind::And => match (&left, &right) {
            (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a && *b)),
            _ => Err(unsupported_operands(op, &left, &right)),
        },
        TokenKind::Or => match (&left, &right) {
            (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(*a || *b)),
            _ => Err(unsupported_operands(op, &left, &right)),
        },
        other => Err(RuntimeError::interpreter(format!(
            "Unknown operator {}",
            op_symbol(other)
        ))),
    }
}

/// Applies an ordered comparison over a promoted numeric pair.
fn compare(
    op: &TokenKind,
    left: &Value,
    right: &Value,
    ints: fn(i64, i64) -> bool,
    floats: fn(f64, f64) -> bool,
) -> Result<Value, RuntimeError> {
    match numeric_pair(left, right) {
        Some(NumericPair::Ints(a, b)) => Ok(Value::Boolean(ints(a, b))),
        Some(NumericPair::Floats(a, b)) => Ok(Value::Boolean(floats(a, b))),
        None => Err(unsupported_operands(op, left, right)),
    }
}

/// Language-level equality.
///
/// Defined for numeric pairs (with promotion), Strings, Booleans, and
/// Null/Void against themselves. Any other pairing is undefined and
/// surfaces as an operator error.
fn values_equal(left: &Value, right: &Value) -> Option<bool> {
    if let Some(pair) = numeric_pair(left, right) {
        return Some(match pair {
            NumericPair::Ints(a, b) => a == b,
            NumericPair::Floats(a, b) => a == b,
        });
    }

    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Some(a == b),
        (Value::Boolean(a), Value::Boolean(b)) => Some(a == b),
        (Value::Null, Value::Null) => Some(true),
        (Value::Void, Value::Void) => Some(true),
        _ => None,
    }
}

/// Applies a unary prefix operator.
///
/// `-x` negates numerics (Integers stay Integer, Floats stay Float);
/// `!x` negates Booleans.
fn apply_unary(op: &TokenKind, value: Value) -> Result<Value, RuntimeError> {
    match op {
        TokenKind::Minus => match value {
            Value::Integer(i) => Ok(Value::Integer(i.wrapping_neg())),
            Value::Float(f) => Ok(Value::Float(-f)),
            other => Err(RuntimeError::interpreter(format!(
                "Unsupported operand for unary `-`: {}",
                other.kind_name()
            ))),
        },
        TokenKind::Not => match value {
            Value::Boolean(b) => Ok(Value::Boolean(!b)),
            other => Err(RuntimeError::interpreter(format!(
                "Unsupported operand for unary `!`: {}",
                other.kind_name()
            ))),
        },
        other => Err(RuntimeError::interpreter(format!(
            "Unknown unary operator {}",
            op_symbol(other)
        ))),
    }
}

//! Unit tests for the evaluator.
//!
//! Most tests run full programs through the lexer and parser, capture what
//! `print` wrote, and check the exit code alongside the output.

use super::*;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::runtime::RuntimeErrorKind;

/// Parses a program, panicking on lex/parse failure.
fn parse(source: &str) -> Program {
    let tokens = Lexer::new(source)
        .tokenize()
        .unwrap_or_else(|e| panic!("Lexer failed on {:?}: {}", source, e));
    Parser::new(tokens)
        .parse()
        .unwrap_or_else(|e| panic!("Parser failed on {:?}: {}", source, e))
}

/// Runs a program and returns (exit code, captured stdout).
fn run_ok(source: &str) -> (i64, String) {
    let program = parse(source);
    let mut output = Vec::new();
    let code = {
        let mut interpreter = Interpreter::with_output(Box::new(&mut output));
        let code = interpreter
            .run(&program)
            .unwrap_or_else(|e| panic!("Runtime error in {:?}: {}", source, e));
        assert_eq!(
            interpreter.env_depth(),
            1,
            "env stack must return to globals-only after run"
        );
        code
    };
    (code, String::from_utf8(output).expect("print output must be UTF-8"))
}

/// Runs a program expecting a runtime error.
fn run_err(source: &str) -> RuntimeError {
    let program = parse(source);
    let mut output = Vec::new();
    let mut interpreter = Interpreter::with_output(Box::new(&mut output));
    let result = interpreter.run(&program);
    let depth = interpreter.env_depth();
    drop(interpreter);
    match result {
        Ok(code) => panic!("Expected runtime error for {:?}, got exit {}", source, code),
        Err(e) => {
            assert_eq!(depth, 1, "env stack must be restored on error paths");
            e
        }
    }
}

// ===================
// End-to-end scenarios
// ===================

#[test]
fn test_hello() {
    let (code, out) = run_ok(r#"Int main() { print("hello"); return 0; }"#);
    assert_eq!(code, 0);
    assert_eq!(out, "hello\n");
}

#[test]
fn test_function_call_with_arguments() {
    let (code, out) = run_ok(
        r#"
        Int add(Int a, Int b) { return a + b; }
        Int main() { print(add(2, 3)); return 0; }
        "#,
    );
    assert_eq!(code, 0);
    assert_eq!(out, "5\n");
}

#[test]
fn test_for_loop_sum() {
    let (code, out) = run_ok(
        "Int main() { Int s = 0; for (Int i = 1; i <= 5; i++) { s += i; } return s; }",
    );
    assert_eq!(code, 15);
    assert_eq!(out, "");
}

#[test]
fn test_while_with_continue() {
    let (code, out) = run_ok(
        r#"
        Int main() {
            Int n = 0;
            while (n < 3) {
                if (n == 1) { n++; continue; }
                print(n);
                n++;
            }
            return 0;
        }
        "#,
    );
    assert_eq!(code, 0);
    assert_eq!(out, "0\n2\n");
}

#[test]
fn test_string_methods() {
    let (code, out) = run_ok(
        r#"
        Int main() {
            String s = "abcdef";
            print(s.substring(1, 3));
            print(s.length());
            return 0;
        }
        "#,
    );
    assert_eq!(code, 0);
    assert_eq!(out, "bcd\n6\n");
}

#[test]
fn test_postfix_returns_pre_update_value() {
    let (code, out) = run_ok(
        r#"
        Int main() {
            Int x = 10;
            Int y = x++;
            print(x);
            print(y);
            return 0;
        }
        "#,
    );
    assert_eq!(code, 0);
    assert_eq!(out, "11\n10\n");
}

#[test]
fn test_postfix_decrement() {
    let (_, out) = run_ok(
        "Int main() { Int x = 5; Int y = x--; print(x); print(y); return 0; }",
    );
    assert_eq!(out, "4\n5\n");
}

// ===================
// Program structure
// ===================

#[test]
fn test_exit_code_is_main_result() {
    let (code, _) = run_ok("Int main() { return 42; }");
    assert_eq!(code, 42);
}

#[test]
fn test_top_level_statements_run_before_main() {
    let (_, out) = run_ok(
        r#"
        print("setup");
        Int main() { print("main"); return 0; }
        "#,
    );
    assert_eq!(out, "setup\nmain\n");
}

#[test]
fn test_functions_install_before_top_level_statements() {
    // `describe` is defined after the statement that calls it; the first
    // pass installs every definition before anything runs.
    let (_, out) = run_ok(
        r#"
        print(describe());
        String describe() { return "ready"; }
        Int main() { return 0; }
        "#,
    );
    assert_eq!(out, "ready\n");
}

#[test]
fn test_top_level_declaration_visible_in_functions() {
    let (code, _) = run_ok(
        r#"
        Int base = 10;
        Int addBase(Int x) { return base + x; }
        Int main() { return addBase(5); }
        "#,
    );
    assert_eq!(code, 15);
}

#[test]
fn test_nested_function_definition() {
    let (code, _) = run_ok(
        r#"
        Int main() {
            Int twice(Int x) { return x * 2; }
            return twice(21);
        }
        "#,
    );
    assert_eq!(code, 42);
}

#[test]
fn test_recursion() {
    let (code, _) = run_ok(
        r#"
        Int fact(Int n) {
            if (n <= 1) { return 1; }
            return n * fact(n - 1);
        }
        Int main() { return fact(5); }
        "#,
    );
    assert_eq!(code, 120);
}

#[test]
fn test_void_function_returns_void() {
    let (_, out) = run_ok(
        r#"
        void announce(String s) { print(s); }
        Int main() { announce("hi"); return 0; }
        "#,
    );
    assert_eq!(out, "hi\n");
}

#[test]
fn test_missing_main() {
    let err = run_err("Int x = 1;");
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
    assert!(err.message().contains("main"), "message: {}", err.message());
}

#[test]
fn test_main_must_return_integer() {
    let err = run_err(r#"String main() { return "nope"; }"#);
    assert_eq!(err.kind(), RuntimeErrorKind::ReturnType);
}

#[test]
fn test_main_without_return_is_return_type_error() {
    // Falling off the end of main produces Void, not an Integer.
    let err = run_err("Int main() { }");
    assert_eq!(err.kind(), RuntimeErrorKind::ReturnType);
}

// ===================
// Environments and scoping
// ===================

#[test]
fn test_for_frame_is_popped() {
    // The loop variable lives in the loop's frame and is gone afterwards.
    let err = run_err(
        "Int main() { for (Int i = 0; i < 3; i++) { } return i; }",
    );
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
    assert!(
        err.message().contains("Undefined variable `i`"),
        "message: {}",
        err.message()
    );
}

#[test]
fn test_for_frame_shadows_outer_variable() {
    let (code, _) = run_ok(
        r#"
        Int main() {
            Int i = 9;
            for (Int i = 0; i < 3; i++) { }
            return i;
        }
        "#,
    );
    assert_eq!(code, 9);
}

#[test]
fn test_assignment_reaches_outer_frame() {
    let (code, _) = run_ok(
        r#"
        Int main() {
            Int total = 0;
            for (Int i = 1; i <= 3; i++) { total = total + i; }
            return total;
        }
        "#,
    );
    assert_eq!(code, 6);
}

#[test]
fn test_blocks_share_the_current_frame() {
    // A bare block does not introduce a frame, so the declaration leaks
    // into the surrounding scope.
    let (code, _) = run_ok("Int main() { { Int x = 7; } return x; }");
    assert_eq!(code, 7);
}

#[test]
fn test_assignment_to_undeclared_is_error() {
    let err = run_err("Int main() { ghost = 1; return 0; }");
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
    assert!(
        err.message().contains("Cannot assign to undefined variable `ghost`"),
        "message: {}",
        err.message()
    );
}

#[test]
fn test_undefined_variable() {
    let err = run_err("Int main() { return missing; }");
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
}

#[test]
fn test_redeclaration_overwrites_in_same_frame() {
    let (code, _) = run_ok("Int main() { Int x = 1; Int x = 2; return x; }");
    assert_eq!(code, 2);
}

#[test]
fn test_parameters_are_passed_by_value() {
    let (code, _) = run_ok(
        r#"
        void bump(Int n) { n = n + 1; }
        Int main() { Int n = 5; bump(n); return n; }
        "#,
    );
    assert_eq!(code, 5);
}

// ===================
// Operators
// ===================

#[test]
fn test_integer_arithmetic() {
    let (_, out) = run_ok(
        "Int main() { print(2 + 3); print(7 - 2); print(4 * 3); print(7 % 2); return 0; }",
    );
    assert_eq!(out, "5\n5\n12\n1\n");
}

#[test]
fn test_division_always_yields_float() {
    let (_, out) = run_ok("Int main() { print(7 / 2); print(1 / 4); return 0; }");
    assert_eq!(out, "3.5\n0.25\n");
}

#[test]
fn test_numeric_promotion() {
    let (_, out) = run_ok("Int main() { print(1 + 2.5); print(2 * 0.5); return 0; }");
    assert_eq!(out, "3.5\n1\n");
}

#[test]
fn test_modulo_of_floats_truncates_to_integer() {
    let (_, out) = run_ok("Int main() { print(7.5 % 2); return 0; }");
    assert_eq!(out, "1\n");
}

#[test]
fn test_integer_modulo_by_zero() {
    let err = run_err("Int main() { print(1 % 0); return 0; }");
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
    assert!(err.message().contains("modulo"), "message: {}", err.message());
}

#[test]
fn test_subtraction_left_associativity() {
    let (code, _) = run_ok("Int main() { return 10 - 2 - 3; }");
    assert_eq!(code, 5);
}

#[test]
fn test_string_concatenation() {
    let (_, out) = run_ok(r#"Int main() { print("foo" + "bar"); return 0; }"#);
    assert_eq!(out, "foobar\n");
}

#[test]
fn test_concatenation_is_associative() {
    let (_, out) = run_ok(
        r#"
        Int main() {
            print(("a" + "b") + "c");
            print("a" + ("b" + "c"));
            return 0;
        }
        "#,
    );
    assert_eq!(out, "abc\nabc\n");
}

#[test]
fn test_comparisons() {
    let (_, out) = run_ok(
        "Int main() { print(1 < 2); print(2 <= 2); print(3 > 4); print(2.5 >= 2); return 0; }",
    );
    assert_eq!(out, "True\nTrue\nFalse\nTrue\n");
}

#[test]
fn test_equality_with_promotion() {
    let (_, out) = run_ok(
        r#"Int main() { print(1 == 1.0); print(1 != 2); print("a" == "a"); print("a" != "b"); return 0; }"#,
    );
    assert_eq!(out, "True\nTrue\nTrue\nTrue\n");
}

#[test]
fn test_equality_of_mixed_kinds_is_error() {
    let err = run_err(r#"Int main() { print(1 == "a"); return 0; }"#);
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
    assert!(
        err.message().contains("Unsupported operand kinds"),
        "message: {}",
        err.message()
    );
}

#[test]
fn test_string_plus_number_is_error() {
    let err = run_err(r#"Int main() { print("n=" + 1); return 0; }"#);
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
}

#[test]
fn test_logical_operators() {
    let (_, out) = run_ok(
        "Int main() { print(true && false); print(true || false); print(!true); return 0; }",
    );
    assert_eq!(out, "False\nTrue\nFalse\n");
}

#[test]
fn test_logical_operators_do_not_short_circuit() {
    // Both operands evaluate even when the left side decides the result.
    let (_, out) = run_ok(
        r#"
        Boolean touch() { print("called"); return true; }
        Int main() {
            Boolean a = false && touch();
            Boolean b = true || touch();
            print(a);
            print(b);
            return 0;
        }
        "#,
    );
    assert_eq!(out, "called\ncalled\nFalse\nTrue\n");
}

#[test]
fn test_word_operators_evaluate() {
    let (_, out) = run_ok(
        "Int main() { print(true and false); print(false or true); print(not false); return 0; }",
    );
    assert_eq!(out, "False\nTrue\nTrue\n");
}

#[test]
fn test_logical_operator_requires_booleans() {
    let err = run_err("Int main() { print(1 && true); return 0; }");
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
}

#[test]
fn test_unary_minus() {
    let (_, out) = run_ok("Int main() { Int x = 5; print(-x); print(-2.5); return 0; }");
    assert_eq!(out, "-5\n-2.5\n");
}

#[test]
fn test_unary_minus_keeps_float_kind() {
    let (_, out) = run_ok("Int main() { Float f = 1.5; print(-f * 2); return 0; }");
    assert_eq!(out, "-3\n");
}

#[test]
fn test_unary_not_requires_boolean() {
    let err = run_err("Int main() { print(!1); return 0; }");
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
}

#[test]
fn test_postfix_requires_integer() {
    let err = run_err("Int main() { Float f = 1.5; f++; return 0; }");
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
    assert!(err.message().contains("Integer"), "message: {}", err.message());
}

// ===================
// Truthiness
// ===================

#[test]
fn test_if_condition_truthiness() {
    let (_, out) = run_ok(
        r#"
        Int main() {
            if 5 { print("int"); }
            if "x" { print("str"); }
            if 0 { print("zero"); }
            if "" { print("empty"); }
            if null { print("null"); }
            return 0;
        }
        "#,
    );
    assert_eq!(out, "int\nstr\n");
}

// ===================
// Calls and methods
// ===================

#[test]
fn test_calling_undefined_function() {
    let err = run_err("Int main() { return missing(); }");
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
    assert!(
        err.message().contains("Undefined variable or function `missing`"),
        "message: {}",
        err.message()
    );
}

#[test]
fn test_calling_non_callable() {
    let err = run_err("Int main() { Int x = 5; return x(); }");
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
    assert!(
        err.message().contains("Can only call functions"),
        "message: {}",
        err.message()
    );
}

#[test]
fn test_wrong_argument_count() {
    let err = run_err(
        "Int add(Int a, Int b) { return a + b; } Int main() { return add(1); }",
    );
    assert_eq!(err.kind(), RuntimeErrorKind::ArgumentCount);
    assert_eq!(err.message(), "Expected 2 arguments, got 1");
}

#[test]
fn test_print_wrong_argument_count() {
    let err = run_err("Int main() { print(1, 2); return 0; }");
    assert_eq!(err.kind(), RuntimeErrorKind::ArgumentCount);
}

#[test]
fn test_arguments_evaluate_left_to_right() {
    let (_, out) = run_ok(
        r#"
        Int log(Int n) { print(n); return n; }
        Int pair(Int a, Int b) { return a * 10 + b; }
        Int main() { return pair(log(1), log(2)); }
        "#,
    );
    assert_eq!(out, "1\n2\n");
}

#[test]
fn test_method_on_non_string_receiver() {
    let err = run_err("Int main() { print(5.length()); return 0; }");
    assert_eq!(err.kind(), RuntimeErrorKind::Existence);
    assert_eq!(err.message(), "Integer has no method \"length\"");
}

#[test]
fn test_unknown_method_on_string() {
    let err = run_err(r#"Int main() { print("x".reverse()); return 0; }"#);
    assert_eq!(err.kind(), RuntimeErrorKind::Existence);
}

#[test]
fn test_method_argument_type_error() {
    let err = run_err(r#"Int main() { print("abc".substring("x", 1)); return 0; }"#);
    assert_eq!(err.kind(), RuntimeErrorKind::ArgumentType);
}

#[test]
fn test_method_argument_count_error() {
    let err = run_err(r#"Int main() { print("abc".substring(1)); return 0; }"#);
    assert_eq!(err.kind(), RuntimeErrorKind::ArgumentCount);
}

#[test]
fn test_conversion_error() {
    let err = run_err(r#"Int main() { print("abc".toInteger()); return 0; }"#);
    assert_eq!(err.kind(), RuntimeErrorKind::Conversion);
}

#[test]
fn test_successful_conversions() {
    let (_, out) = run_ok(
        r#"Int main() { print("42".toInteger() + 1); print("2.5".toFloat()); return 0; }"#,
    );
    assert_eq!(out, "43\n2.5\n");
}

#[test]
fn test_method_chain() {
    let (_, out) = run_ok(
        r#"Int main() { print("  Hello World  ".trim().toUpperCase()); return 0; }"#,
    );
    assert_eq!(out, "HELLO WORLD\n");
}

#[test]
fn test_field_access_is_reserved() {
    let err = run_err(r#"Int main() { print("x".length); return 0; }"#);
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
    assert!(
        err.message().contains("Field access"),
        "message: {}",
        err.message()
    );
}

// ===================
// Control flow signals
// ===================

#[test]
fn test_break_exits_while() {
    let (code, _) = run_ok(
        r#"
        Int main() {
            Int n = 0;
            while (true) {
                n++;
                if (n == 4) { break; }
            }
            return n;
        }
        "#,
    );
    assert_eq!(code, 4);
}

#[test]
fn test_continue_in_for_still_increments() {
    let (_, out) = run_ok(
        r#"
        Int main() {
            for (Int i = 0; i < 4; i++) {
                if (i == 1) { continue; }
                print(i);
            }
            return 0;
        }
        "#,
    );
    assert_eq!(out, "0\n2\n3\n");
}

#[test]
fn test_break_in_for() {
    let (_, out) = run_ok(
        r#"
        Int main() {
            for (Int i = 0; i < 10; i++) {
                if (i == 2) { break; }
                print(i);
            }
            return 0;
        }
        "#,
    );
    assert_eq!(out, "0\n1\n");
}

#[test]
fn test_return_propagates_through_loops() {
    let (code, _) = run_ok(
        r#"
        Int find() {
            for (Int i = 0; i < 10; i++) {
                while (true) { return i + 7; }
            }
            return -1;
        }
        Int main() { return find(); }
        "#,
    );
    assert_eq!(code, 7);
}

#[test]
fn test_nested_loops_break_inner_only() {
    let (_, out) = run_ok(
        r#"
        Int main() {
            for (Int i = 0; i < 2; i++) {
                for (Int j = 0; j < 5; j++) {
                    if (j == 1) { break; }
                    print(i * 10 + j);
                }
            }
            return 0;
        }
        "#,
    );
    assert_eq!(out, "0\n10\n");
}

#[test]
fn test_stray_break_at_top_level() {
    let err = run_err("break; Int main() { return 0; }");
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
    assert!(
        err.message().contains("`break` outside of a loop"),
        "message: {}",
        err.message()
    );
}

#[test]
fn test_stray_continue_in_function() {
    let err = run_err("Int main() { continue; return 0; }");
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
    assert!(
        err.message().contains("`continue` outside of a loop"),
        "message: {}",
        err.message()
    );
}

#[test]
fn test_stray_return_at_top_level() {
    let err = run_err("return 1; Int main() { return 0; }");
    assert_eq!(err.kind(), RuntimeErrorKind::Interpreter);
    assert!(
        err.message().contains("`return` outside of a function"),
        "message: {}",
        err.message()
    );
}

// ===================
// Printing
// ===================

#[test]
fn test_print_canonical_forms() {
    let (_, out) = run_ok(
        r#"
        Int main() {
            print(1);
            print(2.5);
            print(true);
            print(false);
            print("text");
            print(null);
            return 0;
        }
        "#,
    );
    assert_eq!(out, "1\n2.5\nTrue\nFalse\ntext\nnull\n");
}

#[test]
fn test_print_function_values() {
    let (_, out) = run_ok(
        r#"
        Int helper() { return 0; }
        Int main() { print(helper); print(print); return 0; }
        "#,
    );
    assert_eq!(out, "<fn helper>\n<builtin>\n");
}

#[test]
fn test_print_void_result() {
    let (_, out) = run_ok(
        r#"
        void noop() { }
        Int main() { print(noop()); return 0; }
        "#,
    );
    assert_eq!(out, "void\n");
}

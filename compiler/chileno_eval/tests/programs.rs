//! Whole-program evaluation through the public API.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use chileno_eval::{buffer_handler, buffer_source, ErrorCategory, InterpreterBuilder, Value};
use chileno_ir::{Ast, BinaryOp, DeclaredType, NodeId};
use pretty_assertions::assert_eq;

fn output_of(ast: &Ast, root: Option<NodeId>) -> String {
    let mut interp = InterpreterBuilder::new(ast)
        .print_handler(buffer_handler())
        .build();
    interp.evaluate(root).unwrap();
    interp.get_output()
}

fn print_binary(ast: &mut Ast, left: NodeId, op: BinaryOp, right: NodeId) -> NodeId {
    let expr = ast.make_binary(op, left, right);
    ast.make_print(expr)
}

#[test]
fn declare_assign_print() {
    // int x; x = 2; print x;
    let mut ast = Ast::new();
    let decl = ast.make_decl(DeclaredType::Int, "x");
    let target = ast.make_ident("x");
    let two = ast.make_int(2);
    let assign = ast.make_assign(target, two);
    let x = ast.make_ident("x");
    let print = ast.make_print(x);
    let root = ast.make_block([decl, assign, print]);

    assert_eq!(output_of(&ast, root), "2\n");
}

#[test]
fn arithmetic_results_print_canonically() {
    let mut ast = Ast::new();
    let mut stmts = Vec::new();
    for (l, op, r) in [
        (3, BinaryOp::Add, 4),
        (7, BinaryOp::Div, 2),
        (6, BinaryOp::Div, 2),
        (5, BinaryOp::Div, 0),
    ] {
        let l = ast.make_int(l);
        let r = ast.make_int(r);
        stmts.push(print_binary(&mut ast, l, op, r));
    }
    let l = ast.make_int(3);
    let r = ast.make_float(2.5);
    stmts.push(print_binary(&mut ast, l, BinaryOp::Add, r));
    let l = ast.make_int(2);
    let r = ast.make_float(2.0);
    stmts.push(print_binary(&mut ast, l, BinaryOp::Add, r));
    let root = ast.make_block(stmts);

    assert_eq!(output_of(&ast, root), "7\n3.5\n3\n0\n5.5\n4\n");
}

#[test]
fn floats_print_with_six_significant_digits() {
    // print 1.0 / 3.0; print 1e20; print "third: " + 1.0 / 3.0;
    let mut ast = Ast::new();
    let one = ast.make_float(1.0);
    let three = ast.make_float(3.0);
    let third = print_binary(&mut ast, one, BinaryOp::Div, three);
    let big = ast.make_float(1e20);
    let big = ast.make_print(big);
    let one = ast.make_float(1.0);
    let three = ast.make_float(3.0);
    let quotient = ast.make_binary(BinaryOp::Div, one, three);
    let label = ast.make_string("third: ");
    let labelled = print_binary(&mut ast, label, BinaryOp::Add, quotient);
    let root = ast.make_block([third, big, labelled]);

    assert_eq!(
        output_of(&ast, root),
        "0.333333\n1e+20\nthird: 0.333333\n"
    );
}

#[test]
fn concatenation_in_either_order() {
    let mut ast = Ast::new();
    let x = ast.make_string("x");
    let five = ast.make_int(5);
    let first = print_binary(&mut ast, x, BinaryOp::Add, five);
    let five = ast.make_int(5);
    let x = ast.make_string("x");
    let second = print_binary(&mut ast, five, BinaryOp::Add, x);
    let root = ast.make_block([first, second]);

    assert_eq!(output_of(&ast, root), "x5\n5x\n");
}

#[test]
fn int_literal_into_float_variable() {
    let mut ast = Ast::new();
    let decl = ast.make_decl(DeclaredType::Float, "f");
    let target = ast.make_ident("f");
    let three = ast.make_int(3);
    let assign = ast.make_assign(target, three);
    let root = ast.make_block([decl, assign]);

    let mut interp = InterpreterBuilder::new(&ast)
        .print_handler(buffer_handler())
        .build();
    assert_eq!(interp.evaluate(root), Ok(Value::Float(3.0)));
    assert_eq!(
        interp.env().variable(ast.intern("f")).map(|v| v.value),
        Some(Value::Float(3.0))
    );
}

#[test]
fn string_into_float_variable_is_fatal() {
    let mut ast = Ast::new();
    let decl = ast.make_decl(DeclaredType::Float, "f");
    let target = ast.make_ident("f");
    let text = ast.make_string("1.5");
    let assign = ast.make_assign(target, text);
    let root = ast.make_block([decl, assign]);

    let mut interp = InterpreterBuilder::new(&ast)
        .print_handler(buffer_handler())
        .build();
    let err = interp.evaluate(root).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Type);
}

#[test]
fn while_over_none_never_runs() {
    // string s; while (s) { print "never"; }
    let mut ast = Ast::new();
    let decl = ast.make_decl(DeclaredType::String, "s");
    let s = ast.make_ident("s");
    let msg = ast.make_string("never");
    let body = ast.make_print(msg);
    let lp = ast.make_while(s, Some(body));
    let root = ast.make_block([decl, lp]);

    assert_eq!(output_of(&ast, root), "");
}

#[test]
fn for_loop_sums() {
    // int sum; sum = 0;
    // for (int i = 0; i < 5; i = i + 1) { sum = sum + i; }
    // print sum;
    let mut ast = Ast::new();
    let decl_sum = ast.make_decl(DeclaredType::Int, "sum");
    let target = ast.make_ident("sum");
    let zero = ast.make_int(0);
    let init_sum = ast.make_assign(target, zero);

    let decl_i = ast.make_decl(DeclaredType::Int, "i");
    let target = ast.make_ident("i");
    let zero = ast.make_int(0);
    let set_i = ast.make_assign(target, zero);
    let init = ast.make_seq(Some(decl_i), Some(set_i));
    let i = ast.make_ident("i");
    let five = ast.make_int(5);
    let cond = ast.make_binary(BinaryOp::Lt, i, five);
    let i = ast.make_ident("i");
    let one = ast.make_int(1);
    let inc = ast.make_binary(BinaryOp::Add, i, one);
    let target = ast.make_ident("i");
    let update = ast.make_assign(target, inc);
    let sum = ast.make_ident("sum");
    let i = ast.make_ident("i");
    let add = ast.make_binary(BinaryOp::Add, sum, i);
    let target = ast.make_ident("sum");
    let body = ast.make_assign(target, add);
    let lp = ast.make_for(init, Some(cond), Some(update), Some(body));

    let sum = ast.make_ident("sum");
    let print = ast.make_print(sum);
    let root = ast.make_block([decl_sum, init_sum, lp, print]);

    assert_eq!(output_of(&ast, root), "10\n");
}

#[test]
fn input_then_echo() {
    // int n; input n; print n * 2;
    let mut ast = Ast::new();
    let decl = ast.make_decl(DeclaredType::Int, "n");
    let n = ast.make_ident("n");
    let read = ast.make_input(n);
    let n = ast.make_ident("n");
    let two = ast.make_int(2);
    let print = print_binary(&mut ast, n, BinaryOp::Mul, two);
    let root = ast.make_block([decl, read, print]);

    let mut interp = InterpreterBuilder::new(&ast)
        .print_handler(buffer_handler())
        .input(buffer_source(["21"]))
        .build();
    interp.evaluate(root).unwrap();
    assert_eq!(interp.get_output(), "42\n");
}

//! Whole-program C++ output.

use chileno_codegen::generate;
use chileno_ir::{Ast, BinaryOp, DeclaredType, NodeId};
use pretty_assertions::assert_eq;

const PREAMBLE: &str = "\
#include <iostream>
#include <sstream>
#include <string>
using namespace std;

template <typename T>
string to_text(const T& value) {
    ostringstream out;
    out << value;
    return out.str();
}

";

fn program(body: &str) -> String {
    format!("{PREAMBLE}{body}")
}

/// `for (int <name> = 0; <name> < <limit>; <name> = <name> + 1) <body>`
fn counting_for(ast: &mut Ast, name: &str, limit: i32, body: Option<NodeId>) -> NodeId {
    let decl = ast.make_decl(DeclaredType::Int, name);
    let target = ast.make_ident(name);
    let zero = ast.make_int(0);
    let set = ast.make_assign(target, zero);
    let init = ast.make_seq(Some(decl), Some(set));

    let counter = ast.make_ident(name);
    let limit = ast.make_int(limit);
    let cond = ast.make_binary(BinaryOp::Lt, counter, limit);

    let counter = ast.make_ident(name);
    let one = ast.make_int(1);
    let inc = ast.make_binary(BinaryOp::Add, counter, one);
    let target = ast.make_ident(name);
    let update = ast.make_assign(target, inc);

    ast.make_for(init, Some(cond), Some(update), body)
}

fn print_ident(ast: &mut Ast, name: &str) -> NodeId {
    let ident = ast.make_ident(name);
    ast.make_print(ident)
}

#[test]
fn declare_assign_print() {
    let mut ast = Ast::new();
    let decl = ast.make_decl(DeclaredType::Int, "x");
    let target = ast.make_ident("x");
    let two = ast.make_int(2);
    let assign = ast.make_assign(target, two);
    let print = print_ident(&mut ast, "x");
    let root = ast.make_block([decl, assign, print]);

    assert_eq!(
        generate(&ast, root).code,
        program(
            "int main() {
    int x;
    x = 2;
    cout << x << endl;
    return 0;
}
"
        )
    );
}

#[test]
fn empty_program() {
    let ast = Ast::new();
    assert_eq!(
        generate(&ast, None).code,
        program("int main() {\n    return 0;\n}\n")
    );
}

#[test]
fn functions_come_before_main() {
    // function add(a, b) { return a + b; }
    // print add(1, 2);
    let mut ast = Ast::new();
    let params = ast.make_params(["a", "b"]);
    let a = ast.make_ident("a");
    let b = ast.make_ident("b");
    let sum = ast.make_binary(BinaryOp::Add, a, b);
    let ret = ast.make_return(sum);
    let def = ast.make_func_def("add", params, Some(ret));
    let one = ast.make_int(1);
    let two = ast.make_int(2);
    let args = ast.make_args([one, two]);
    let call = ast.make_call("add", args);
    let print = ast.make_print(call);
    let root = ast.make_block([def, print]);

    assert_eq!(
        generate(&ast, root).code,
        program(
            "auto add(auto a, auto b) {
    return (a + b);
}

int main() {
    cout << add(1, 2) << endl;
    return 0;
}
"
        )
    );
}

#[test]
fn nested_definitions_are_hoisted() {
    // function outer() { function inner() { print 1; } inner(); }
    let mut ast = Ast::new();
    let params = ast.make_params([]);
    let one = ast.make_int(1);
    let inner_body = ast.make_print(one);
    let inner = ast.make_func_def("inner", params, Some(inner_body));
    let args = ast.make_args([]);
    let call_inner = ast.make_call("inner", args);
    let outer_body = ast.make_block([inner, call_inner]);
    let params = ast.make_params([]);
    let outer = ast.make_func_def("outer", params, outer_body);

    assert_eq!(
        generate(&ast, Some(outer)).code,
        program(
            "auto inner() {
    cout << 1 << endl;
}

auto outer() {
    inner();
}

int main() {
    return 0;
}
"
        )
    );
}

#[test]
fn control_flow_and_input() {
    // float f; input f;
    // if (f > 1.5) { print "big"; } else { print "small"; }
    // while (f > 0) { f = f - 1; }
    let mut ast = Ast::new();
    let decl = ast.make_decl(DeclaredType::Float, "f");
    let f = ast.make_ident("f");
    let read = ast.make_input(f);

    let f = ast.make_ident("f");
    let limit = ast.make_float(1.5);
    let cond = ast.make_binary(BinaryOp::Gt, f, limit);
    let big = ast.make_string("big");
    let then_branch = ast.make_print(big);
    let small = ast.make_string("small");
    let else_branch = ast.make_print(small);
    let branch = ast.make_if(cond, Some(then_branch), Some(else_branch));

    let f = ast.make_ident("f");
    let zero = ast.make_int(0);
    let cond = ast.make_binary(BinaryOp::Gt, f, zero);
    let f = ast.make_ident("f");
    let one = ast.make_int(1);
    let dec = ast.make_binary(BinaryOp::Sub, f, one);
    let target = ast.make_ident("f");
    let step = ast.make_assign(target, dec);
    let lp = ast.make_while(cond, Some(step));

    let root = ast.make_block([decl, read, branch, lp]);

    assert_eq!(
        generate(&ast, root).code,
        program(
            r#"int main() {
    float f;
    cin >> f;
    if ((f > 1.5)) {
        cout << "big" << endl;
    } else {
        cout << "small" << endl;
    }
    while ((f > 0)) {
        f = (f - 1);
    }
    return 0;
}
"#
        )
    );
}

#[test]
fn print_flattens_string_concatenation() {
    // string name; print "hi " + name + "!";
    let mut ast = Ast::new();
    let decl = ast.make_decl(DeclaredType::String, "name");
    let hi = ast.make_string("hi ");
    let name = ast.make_ident("name");
    let head = ast.make_binary(BinaryOp::Add, hi, name);
    let bang = ast.make_string("!");
    let all = ast.make_binary(BinaryOp::Add, head, bang);
    let print = ast.make_print(all);
    let root = ast.make_block([decl, print]);

    assert_eq!(
        generate(&ast, root).code,
        program(
            r#"int main() {
    string name;
    cout << "hi " << name << "!" << endl;
    return 0;
}
"#
        )
    );
}

#[test]
fn string_concatenation_in_assignment() {
    // string s; s = "x" + 5; print s;
    let mut ast = Ast::new();
    let decl = ast.make_decl(DeclaredType::String, "s");
    let x = ast.make_string("x");
    let five = ast.make_int(5);
    let joined = ast.make_binary(BinaryOp::Add, x, five);
    let target = ast.make_ident("s");
    let assign = ast.make_assign(target, joined);
    let print = print_ident(&mut ast, "s");
    let root = ast.make_block([decl, assign, print]);

    assert_eq!(
        generate(&ast, root).code,
        program(
            r#"int main() {
    string s;
    s = (string("x") + to_text(5));
    cout << s << endl;
    return 0;
}
"#
        )
    );
}

#[test]
fn for_counter_is_canonical_in_every_clause() {
    let mut ast = Ast::new();
    let body = print_ident(&mut ast, "k");
    let lp = counting_for(&mut ast, "k", 3, Some(body));

    assert_eq!(
        generate(&ast, Some(lp)).code,
        program(
            "int main() {
    for (int i = 0; (i < 3); i = (i + 1)) {
        cout << i << endl;
    }
    return 0;
}
"
        )
    );
}

#[test]
fn nested_for_counters() {
    let mut ast = Ast::new();
    let row = ast.make_ident("row");
    let col = ast.make_ident("col");
    let product = ast.make_binary(BinaryOp::Mul, row, col);
    let body = ast.make_print(product);
    let inner = counting_for(&mut ast, "col", 2, Some(body));
    let outer = counting_for(&mut ast, "row", 2, Some(inner));

    assert_eq!(
        generate(&ast, Some(outer)).code,
        program(
            "int main() {
    for (int i = 0; (i < 2); i = (i + 1)) {
        for (int i1 = 0; (i1 < 2); i1 = (i1 + 1)) {
            cout << (i * i1) << endl;
        }
    }
    return 0;
}
"
        )
    );
}

#[test]
fn assigned_counter_keeps_its_name() {
    // int n; for (n = 0; n < 2; n = n + 1) { print n; }
    let mut ast = Ast::new();
    let decl = ast.make_decl(DeclaredType::Int, "n");
    let target = ast.make_ident("n");
    let zero = ast.make_int(0);
    let init = ast.make_assign(target, zero);
    let n = ast.make_ident("n");
    let two = ast.make_int(2);
    let cond = ast.make_binary(BinaryOp::Lt, n, two);
    let n = ast.make_ident("n");
    let one = ast.make_int(1);
    let inc = ast.make_binary(BinaryOp::Add, n, one);
    let target = ast.make_ident("n");
    let update = ast.make_assign(target, inc);
    let body = print_ident(&mut ast, "n");
    let lp = ast.make_for(Some(init), Some(cond), Some(update), Some(body));
    let root = ast.make_block([decl, lp]);

    assert_eq!(
        generate(&ast, root).code,
        program(
            "int main() {
    int n;
    for (n = 0; (n < 2); n = (n + 1)) {
        cout << n << endl;
    }
    return 0;
}
"
        )
    );
}

#[test]
fn other_identifiers_are_not_renamed() {
    // int total; for (int k = 0; k < 2; k = k + 1) { print total; }
    let mut ast = Ast::new();
    let decl = ast.make_decl(DeclaredType::Int, "total");
    let body = print_ident(&mut ast, "total");
    let lp = counting_for(&mut ast, "k", 2, Some(body));
    let root = ast.make_block([decl, lp]);

    let code = generate(&ast, root).code;
    assert!(code.contains("for (int i = 0; (i < 2); i = (i + 1)) {"));
    assert!(code.contains("cout << total << endl;"));
}

#[test]
fn counter_not_renamed_onto_existing_variable() {
    // int i; for (int k = 0; k < 2; k = k + 1) { print i; }
    let mut ast = Ast::new();
    let decl = ast.make_decl(DeclaredType::Int, "i");
    let body = print_ident(&mut ast, "i");
    let lp = counting_for(&mut ast, "k", 2, Some(body));
    let root = ast.make_block([decl, lp]);

    let code = generate(&ast, root).code;
    assert!(code.contains("for (int k = 0; (k < 2); k = (k + 1)) {"));
    assert!(code.contains("cout << i << endl;"));
}

#[test]
fn long_for_initializer_runs_before_the_loop() {
    // for (int k; k = 0; k = 1; k < 3; k = k + 1) { print k; }
    let mut ast = Ast::new();
    let decl = ast.make_decl(DeclaredType::Int, "k");
    let target = ast.make_ident("k");
    let zero = ast.make_int(0);
    let reset = ast.make_assign(target, zero);
    let target = ast.make_ident("k");
    let one = ast.make_int(1);
    let start = ast.make_assign(target, one);
    let init = ast.make_block([decl, reset, start]);
    let k = ast.make_ident("k");
    let three = ast.make_int(3);
    let cond = ast.make_binary(BinaryOp::Lt, k, three);
    let k = ast.make_ident("k");
    let one = ast.make_int(1);
    let inc = ast.make_binary(BinaryOp::Add, k, one);
    let target = ast.make_ident("k");
    let update = ast.make_assign(target, inc);
    let body = print_ident(&mut ast, "k");
    let lp = ast.make_for(init, Some(cond), Some(update), Some(body));

    assert_eq!(
        generate(&ast, Some(lp)).code,
        program(
            "int main() {
    {
        int i;
        i = 0;
        i = 1;
        for (; (i < 3); i = (i + 1)) {
            cout << i << endl;
        }
    }
    return 0;
}
"
        )
    );
}

#[test]
fn counter_used_after_the_loop_is_declared_before_it() {
    // for (int k = 0; k < 2; k = k + 1) { print k; }  print k;
    let mut ast = Ast::new();
    let body = print_ident(&mut ast, "k");
    let lp = counting_for(&mut ast, "k", 2, Some(body));
    let after = print_ident(&mut ast, "k");
    let root = ast.make_block([lp, after]);

    assert_eq!(
        generate(&ast, root).code,
        program(
            "int main() {
    int k;
    for (k = 0; (k < 2); k = (k + 1)) {
        cout << k << endl;
    }
    cout << k << endl;
    return 0;
}
"
        )
    );
}

#[test]
fn absent_for_condition_never_holds() {
    let mut ast = Ast::new();
    let body = print_ident(&mut ast, "x");
    let lp = ast.make_for(None, None, None, Some(body));

    let code = generate(&ast, Some(lp)).code;
    assert!(code.contains("    for (; 0; ) {\n        cout << x << endl;\n    }\n"));
}

#[test]
fn bare_lists_render_a_marker() {
    let mut ast = Ast::new();
    let one = ast.make_int(1);
    let args = ast.make_args([one]);

    let code = generate(&ast, Some(args)).code;
    assert!(code.contains("/* unimplemented: argument list */"));
}

mod common;
use basic::mach::Runtime;
use common::*;

fn print_expr(expr: &str) -> String {
    let mut r = Runtime::default();
    run_program(&mut r, &[&format!("10 print {}", expr)])
}

#[test]
fn test_no_precedence() {
    assert_eq!(print_expr("2+3*4"), "20\n");
    assert_eq!(print_expr("20-4/2"), "8\n");
}

#[test]
fn test_exponent_operator() {
    assert_eq!(print_expr("2E3"), "8\n");
    assert_eq!(print_expr("3e2+1"), "10\n");
    assert_eq!(print_expr("7E0"), "1\n");
}

#[test]
fn test_upper_case_print() {
    let mut r = Runtime::default();
    assert_eq!(run_program(&mut r, &["10 PRINT 2+3*4"]), "20\n");
    let mut r = Runtime::default();
    assert_eq!(run_program(&mut r, &["10 PRINT -2+5"]), "3\n");
}

#[test]
fn test_unary_minus() {
    assert_eq!(print_expr("-2+5"), "3\n");
    assert_eq!(print_expr("4*-2"), "-8\n");
}

#[test]
fn test_modulo_and_bits() {
    assert_eq!(print_expr("17%5"), "2\n");
    assert_eq!(print_expr("12&10"), "8\n");
    assert_eq!(print_expr("12|3"), "15\n");
    assert_eq!(print_expr("12^4"), "8\n");
}

#[test]
fn test_division_truncates() {
    assert_eq!(print_expr("7/2"), "3\n");
    assert_eq!(print_expr("-7/2"), "-3\n");
}

#[test]
fn test_division_by_zero() {
    assert_eq!(print_expr("1/0"), "divide by zero error in line 10\n");
    assert_eq!(print_expr("1%0"), "divide by zero error in line 10\n");
}

#[test]
fn test_bad_expression() {
    assert_eq!(print_expr("2+#"), "bad expression in line 10\n");
}

#[test]
fn test_variables_in_expression() {
    let mut r = Runtime::default();
    let s = run_program(&mut r, &["10 let a=7,b=3", "20 print a*b-1"]);
    assert_eq!(s, "20\n");
}

mod common;
use basic::mach::Runtime;
use common::*;

#[test]
fn test_let_print_end() {
    let mut r = Runtime::default();
    let s = run_program(
        &mut r,
        &["10 let a=3", "20 let b=a*2", "30 print b", "40 end"],
    );
    assert_eq!(s, "6\nend at line 40\n");
}

#[test]
fn test_let_list() {
    let mut r = Runtime::default();
    let s = run_program(&mut r, &["10 let a=1,b=a+1 c=b*3", "20 print a;b;c"]);
    assert_eq!(s, "126\n");
}

#[test]
fn test_let_text() {
    let mut r = Runtime::default();
    let s = run_program(
        &mut r,
        &["10 LET N$=\"Ada Lovelace\"", "20 PRINT \"hi \";n$"],
    );
    assert_eq!(s, "hi Ada Lovelace\n");
}

#[test]
fn test_let_text_unterminated() {
    let mut r = Runtime::default();
    let s = run_program(&mut r, &["10 let n$=\"abc"]);
    assert_eq!(s, "unterminated quotes in line 10\n");
}

#[test]
fn test_let_syntax() {
    let mut r = Runtime::default();
    assert_eq!(
        run_program(&mut r, &["10 let 5=a"]),
        "syntax error in line 10\n"
    );
    let mut r = Runtime::default();
    assert_eq!(
        run_program(&mut r, &["10 let a 5"]),
        "syntax error in line 10\n"
    );
}

#[test]
fn test_print_separators() {
    let mut r = Runtime::default();
    let s = run_program(
        &mut r,
        &["10 print \"a\",\"b\";\"c\"", "20 print 1;", "30 print 2", "40 print"],
    );
    assert_eq!(s, "a   bc\n12\n\n");
}

#[test]
fn test_print_unterminated() {
    let mut r = Runtime::default();
    let s = run_program(&mut r, &["10 print \"abc"]);
    assert_eq!(s, "unterminated line in line 10\n");
}

#[test]
fn test_print_expression() {
    let mut r = Runtime::default();
    let s = run_program(&mut r, &["10 let x=4", "20 print x*x+1, 7-10"]);
    assert_eq!(s, "17   -3\n");
}

#[test]
fn test_goto() {
    let mut r = Runtime::default();
    let s = run_program(
        &mut r,
        &["10 goto 30", "20 print \"skipped\"", "30 print \"here\""],
    );
    assert_eq!(s, "here\n");
}

#[test]
fn test_stop() {
    let mut r = Runtime::default();
    let s = run_program(&mut r, &["10 print 1", "20 stop", "30 print 2"]);
    assert_eq!(s, "1\nstop at line 20\n");
}

#[test]
fn test_clear() {
    let mut r = Runtime::default();
    let s = run_program(&mut r, &["10 let a=9", "20 clear", "30 print a"]);
    assert_eq!(s, "0\n");
}

#[test]
fn test_rem_and_lines_are_case_folded() {
    let mut r = Runtime::default();
    let s = run_program(&mut r, &["10 REM Anything AT all", "20 PRINT \"Mixed Case\""]);
    assert_eq!(s, "Mixed Case\n");
}

#[test]
fn test_replace_line_before_run() {
    let mut r = Runtime::default();
    let s = run_program(&mut r, &["10 print 1", "20 print 2", "10 print 3", "20"]);
    assert_eq!(s, "3\n");
}

#[test]
fn test_division_by_zero_reports_line() {
    let mut r = Runtime::default();
    let s = run_program(&mut r, &["10 let a=0", "30 let b=5/a"]);
    assert_eq!(s, "divide by zero error in line 30\n");
}

use super::*;

#[test]
fn test_gosub_return() {
    let mut r = program(&[
        "10 gosub 100",
        "20 print \"back\"",
        "30 end",
        "100 print \"sub\"",
        "110 return",
    ]);
    assert_eq!(run(&mut r), "sub\nback\nend at line 30\n");
}

#[test]
fn test_stack_full_on_eleventh() {
    let mut r = program(&["10 let n=n+1", "20 gosub 10"]);
    assert_eq!(run(&mut r), "stack full in line 20\n");
    let mut r = program(&["10 let n=n+1", "20 gosub 10"]);
    run(&mut r);
    assert_eq!(r.var.fetch(b'n'), 11);
    assert_eq!(r.stack.len(), 10);
}

#[test]
fn test_return_without_gosub() {
    let mut r = program(&["10 return"]);
    assert_eq!(run(&mut r), "return without gosub in line 10\n");
}

#[test]
fn test_gosub_missing_line() {
    let mut r = program(&["10 gosub 50"]);
    assert_eq!(run(&mut r), "line not found in line 10\n");
    assert!(r.stack.is_empty());
}

#[test]
fn test_goto_missing_line() {
    let mut r = program(&["10 goto 99999"]);
    assert_eq!(run(&mut r), "line not found in line 10\n");
}

#[test]
fn test_stack() {
    let mut s: Stack<Address> = Stack::new(2);
    s.push(10).unwrap();
    s.push(20).unwrap();
    assert!(s.is_full());
    assert_eq!(s.push(30).unwrap_err().code(), ErrorCode::StackFull);
    assert_eq!(s.last(), Some(&20));
    assert_eq!(s.pop().unwrap(), 20);
    assert_eq!(s.pop().unwrap(), 10);
    assert_eq!(s.pop().unwrap_err().code(), ErrorCode::ReturnWithoutGosub);
}

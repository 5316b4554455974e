use super::*;

#[test]
fn test_for_step_two() {
    let mut r = program(&[
        "10 for n=1 to 5 step 2",
        "20 print n",
        "30 next n",
        "40 print n",
    ]);
    assert_eq!(run(&mut r), "1\n3\n5\n7\n");
}

#[test]
fn test_for_negative_step() {
    let mut r = program(&["10 for i=3 to 1 step -1", "20 print i;", "30 next i"]);
    assert_eq!(run(&mut r), "321");
}

#[test]
fn test_for_zero_step_counts_up() {
    let mut r = program(&["10 for i=1 to 3 step 0", "20 print i;", "30 next i"]);
    assert_eq!(run(&mut r), "123");
}

#[test]
fn test_for_body_runs_once_past_bound() {
    let mut r = program(&["10 for i=5 to 1", "20 print i", "30 next i"]);
    assert_eq!(run(&mut r), "5\n");
}

#[test]
fn test_next_without_for() {
    let mut r = program(&["10 next x"]);
    assert_eq!(run(&mut r), "next without for in line 10\n");
}

#[test]
fn test_next_wrong_variable() {
    let mut r = program(&["10 for i=1 to 2", "20 next j"]);
    assert_eq!(run(&mut r), "next without for in line 20\n");
}

#[test]
fn test_next_needs_variable() {
    let mut r = program(&["10 for i=1 to 2", "20 next"]);
    assert_eq!(run(&mut r), "unknown variable in line 20\n");
}

#[test]
fn test_second_for_replaces_first() {
    let mut r = program(&[
        "10 for i=1 to 2",
        "20 for j=1 to 2",
        "30 print i;j",
        "40 next j",
        "50 next i",
    ]);
    assert_eq!(run(&mut r), "11\n12\nnext without for in line 50\n");
}

#[test]
fn test_for_missing_to() {
    let mut r = program(&["10 for i=1 til 2"]);
    assert_eq!(run(&mut r), "syntax error in line 10\n");
}

use super::*;

#[test]
fn test_equal() {
    let mut var = Var::new();
    var.store(b'a', 5);
    assert_ne!(eval_logic(&var, "a=5").unwrap(), 0);
    var.store(b'a', 4);
    assert_eq!(eval_logic(&var, "a=5").unwrap(), 0);
}

#[test]
fn test_comparisons() {
    let mut var = Var::new();
    var.store(b'a', 3);
    var.store(b'b', 7);
    assert_eq!(eval_logic(&var, "a<b").unwrap(), 1);
    assert_eq!(eval_logic(&var, "a>b").unwrap(), 0);
    assert_eq!(eval_logic(&var, "a#b").unwrap(), 1);
    assert_eq!(eval_logic(&var, "a>-1").unwrap(), 1);
}

#[test]
fn test_bitwise_returns_raw_bits() {
    let mut var = Var::new();
    var.store(b'a', 6);
    assert_eq!(eval_logic(&var, "a&3").unwrap(), 2);
    assert_eq!(eval_logic(&var, "a|1").unwrap(), 7);
    assert_eq!(eval_logic(&var, "a^6").unwrap(), 0);
}

#[test]
fn test_array_lhs() {
    let mut var = Var::new();
    var.dimension_array(3).unwrap();
    var.store_array(1, 9).unwrap();
    var.store(b'i', 1);
    assert_eq!(eval_logic(&var, "@(i)=9").unwrap(), 1);
    assert_eq!(
        eval_logic(&var, "@(1)=9").unwrap_err().code(),
        ErrorCode::IndexMustBeVariable
    );
    assert_eq!(
        eval_logic(&var, "@(i=9").unwrap_err().code(),
        ErrorCode::MissingParen
    );
}

#[test]
fn test_malformed() {
    let var = Var::new();
    assert_eq!(eval_logic(&var, "5=a").unwrap_err().code(), ErrorCode::LogicalEval);
    assert_eq!(eval_logic(&var, "a=\"").unwrap_err().code(), ErrorCode::LogicalEval);
    assert_eq!(eval_logic(&var, "a!1").unwrap_err().code(), ErrorCode::UnknownOperand);
    assert_eq!(eval_logic(&var, "").unwrap_err().code(), ErrorCode::LogicalEval);
}

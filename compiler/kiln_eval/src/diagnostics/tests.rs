use super::*;
use crate::errors::{division_by_zero, EvalErrorKind};

#[test]
fn test_push_pop_depth() {
    let mut stack = CallStack::new(None);
    assert_eq!(stack.depth(), 0);
    stack.push("f").unwrap();
    stack.push("g").unwrap();
    assert_eq!(stack.depth(), 2);
    stack.pop();
    assert_eq!(stack.depth(), 1);
}

#[test]
fn test_limit_rejects_push() {
    let mut stack = CallStack::new(Some(2));
    stack.push("f").unwrap();
    stack.push("f").unwrap();
    let err = stack.push("f").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::RecursionLimitExceeded { limit: 2 });
    assert_eq!(stack.depth(), 2);
}

#[test]
fn test_zero_limit_rejects_first_call() {
    let mut stack = CallStack::new(Some(0));
    assert!(stack.push("main").is_err());
}

#[test]
fn test_capture_most_recent_first() {
    let mut stack = CallStack::new(None);
    stack.push("outer").unwrap();
    stack.push("inner").unwrap();
    assert_eq!(
        stack.capture().frames(),
        &["inner".to_string(), "outer".to_string()]
    );
}

#[test]
fn test_attach_backtrace_outside_calls_is_noop() {
    let stack = CallStack::new(None);
    assert_eq!(stack.attach_backtrace(division_by_zero()).backtrace, None);
}

#[test]
fn test_attach_backtrace_inside_call() {
    let mut stack = CallStack::new(None);
    stack.push("f").unwrap();
    let err = stack.attach_backtrace(division_by_zero());
    assert_eq!(err.backtrace.map(|bt| bt.len()), Some(1));
}

use std::cell::Cell;
use std::collections::HashSet;

use outcome_rail::Outcome;

#[derive(Debug, Clone, PartialEq)]
enum JsError {
    Type(String),
    Range(String),
}

fn is_type_error(error: JsError) -> bool {
    matches!(error, JsError::Type(_))
}

#[test]
fn success_and_failure_flags_are_complementary() {
    let ok = Outcome::<i32, &str>::success(1);
    assert!(ok.is_ok());
    assert!(!ok.is_err());

    let err = Outcome::<i32, &str>::failure("bad");
    assert!(err.is_err());
    assert!(!err.is_ok());
}

#[test]
fn ok_and_err_extract_into_option() {
    assert_eq!(Outcome::<i32, &str>::success(5).ok(), Some(5));
    assert_eq!(Outcome::<i32, &str>::success(5).err(), None);
    assert_eq!(Outcome::<i32, &str>::failure("e").err(), Some("e"));
    assert_eq!(Outcome::<i32, &str>::failure("e").ok(), None);
}

#[test]
fn held_absent_value_is_distinguishable_from_failure() {
    let held_none = Outcome::<Option<i32>, &str>::success(None);
    assert_eq!(held_none.ok(), Some(None));

    let failed = Outcome::<Option<i32>, &str>::failure("e");
    assert_eq!(failed.ok(), None);
}

#[test]
fn is_ok_and_applies_predicate_only_to_success() {
    assert!(Outcome::<u32, &str>::success(2).is_ok_and(|x| x > 1));
    assert!(!Outcome::<u32, &str>::success(0).is_ok_and(|x| x > 1));

    let calls = Cell::new(0);
    let result = Outcome::<u32, &str>::failure("hey").is_ok_and(|_| {
        calls.set(calls.get() + 1);
        true
    });
    assert!(!result);
    assert_eq!(calls.get(), 0);
}

#[test]
fn is_err_and_matches_error_kind() {
    let type_error = Outcome::<i32, JsError>::failure(JsError::Type("oops".into()));
    assert!(type_error.is_err_and(is_type_error));

    let range_error = Outcome::<i32, JsError>::failure(JsError::Range("oops".into()));
    assert!(!range_error.is_err_and(is_type_error));

    let ok = Outcome::<i32, JsError>::success(123);
    assert!(!ok.is_err_and(is_type_error));
}

#[test]
fn is_err_and_skips_predicate_on_success() {
    let calls = Cell::new(0);
    let result = Outcome::<i32, &str>::success(1).is_err_and(|_| {
        calls.set(calls.get() + 1);
        true
    });
    assert!(!result);
    assert_eq!(calls.get(), 0);
}

#[test]
fn inspect_runs_once_on_success_and_preserves_value() {
    let mut seen = Vec::new();
    let original = Outcome::<i32, &str>::success(4);
    let inspected = original.inspect(|x| seen.push(*x));

    assert_eq!(inspected, original);
    assert_eq!(seen, vec![4]);
}

#[test]
fn inspect_is_noop_on_failure() {
    let calls = Cell::new(0);
    let inspected = Outcome::<i32, &str>::failure("e").inspect(|_| calls.set(calls.get() + 1));

    assert_eq!(inspected, Outcome::failure("e"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn inspect_err_runs_once_on_failure_only() {
    let mut seen = Vec::new();
    let inspected = Outcome::<i32, String>::failure("disk full".to_string())
        .inspect_err(|e| seen.push(e.clone()));
    assert_eq!(inspected, Outcome::failure("disk full".to_string()));
    assert_eq!(seen, vec!["disk full".to_string()]);

    let calls = Cell::new(0);
    let untouched = Outcome::<i32, String>::success(3).inspect_err(|_| calls.set(calls.get() + 1));
    assert_eq!(untouched, Outcome::success(3));
    assert_eq!(calls.get(), 0);
}

#[test]
fn unwrap_or_falls_back_only_on_failure() {
    assert_eq!(Outcome::<i32, &str>::success(9).unwrap_or(2), 9);
    assert_eq!(Outcome::<i32, &str>::failure("e").unwrap_or(2), 2);
}

#[test]
fn unwrap_or_else_skips_recovery_on_success() {
    let calls = Cell::new(0);
    let count = |s: &str| {
        calls.set(calls.get() + 1);
        s.len()
    };

    assert_eq!(Outcome::<usize, &str>::success(2).unwrap_or_else(count), 2);
    assert_eq!(calls.get(), 0);
    assert_eq!(Outcome::<usize, &str>::failure("foo").unwrap_or_else(count), 3);
    assert_eq!(calls.get(), 1);
}

#[test]
fn unwrap_or_default_uses_type_default() {
    assert_eq!(Outcome::<String, i32>::failure(1).unwrap_or_default(), "");
    assert_eq!(Outcome::<u8, i32>::success(7).unwrap_or_default(), 7);
}

#[test]
fn as_ref_and_as_mut_borrow_without_consuming() {
    let mut value = Outcome::<Vec<i32>, &str>::success(vec![1, 2]);
    assert!(value.as_ref().is_ok_and(|v| v.len() == 2));

    if let Outcome::Success(items) = value.as_mut() {
        items.push(3);
    }
    assert_eq!(value, Outcome::success(vec![1, 2, 3]));
}

#[test]
fn equality_is_structural() {
    assert_eq!(
        Outcome::<Vec<i32>, &str>::success(vec![1, 2]),
        Outcome::success(vec![1, 2])
    );
    assert_ne!(Outcome::<i32, i32>::success(1), Outcome::failure(1));
    assert_ne!(Outcome::<i32, i32>::failure(1), Outcome::failure(2));

    let set: HashSet<Outcome<i32, i32>> =
        [Outcome::success(1), Outcome::success(1), Outcome::failure(1)]
            .into_iter()
            .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn from_result_and_into_result_keep_variant() {
    assert_eq!(Outcome::from_result(Ok::<i32, &str>(1)), Outcome::success(1));
    assert_eq!(Outcome::<i32, &str>::failure("e").into_result(), Err("e"));

    let outcome: Outcome<i32, &str> = Err("boom").into();
    let back: Result<i32, &str> = outcome.into();
    assert_eq!(back, Err("boom"));
}

#[test]
fn flatten_removes_one_level() {
    let ok = Outcome::<Outcome<i32, &str>, &str>::success(Outcome::success(1));
    assert_eq!(ok.flatten(), Outcome::success(1));

    let outer = Outcome::<Outcome<i32, &str>, &str>::failure("outer");
    assert_eq!(outer.flatten(), Outcome::failure("outer"));
}

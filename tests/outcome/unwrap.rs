use outcome_rail::{Outcome, UnwrapMismatch};

#[test]
fn unwrap_returns_success_value() {
    assert_eq!(Outcome::<u32, &str>::success(2).unwrap(), 2);
    assert_eq!(Outcome::<u32, &str>::failure("e").unwrap_err(), "e");
}

#[test]
#[should_panic(expected = "Failed to unwrap Ok: \"emergency failure\"")]
fn unwrap_on_failure_panics_with_fixed_message() {
    let _ = Outcome::<u32, &str>::failure("emergency failure").unwrap();
}

#[test]
#[should_panic(expected = "Failed to unwrap Err: 2")]
fn unwrap_err_on_success_panics_with_fixed_message() {
    let _ = Outcome::<u32, &str>::success(2).unwrap_err();
}

#[test]
fn expect_returns_success_value() {
    assert_eq!(Outcome::<u32, &str>::success(2).expect("should work"), 2);
    assert_eq!(Outcome::<u32, &str>::failure("e").expect_err("should fail"), "e");
}

#[test]
#[should_panic(expected = "Testing expect: \"emergency failure\"")]
fn expect_on_failure_panics_with_caller_message() {
    let _ = Outcome::<u32, &str>::failure("emergency failure").expect("Testing expect");
}

#[test]
#[should_panic(expected = "Testing expect_err: 10")]
fn expect_err_on_success_panics_with_caller_message() {
    let _ = Outcome::<u32, &str>::success(10).expect_err("Testing expect_err");
}

#[test]
fn try_unwrap_reports_mismatch_kind_and_message() {
    let err = Outcome::<u32, &str>::failure("boom").try_unwrap().unwrap_err();
    assert_eq!(err.kind(), UnwrapMismatch::ExpectedSuccess);
    assert_eq!(err.message(), "Failed to unwrap Ok: \"boom\"");

    let err = Outcome::<u32, &str>::success(5).try_unwrap_err().unwrap_err();
    assert_eq!(err.kind(), UnwrapMismatch::ExpectedFailure);
    assert_eq!(err.message(), "Failed to unwrap Err: 5");
}

#[test]
fn try_expect_uses_caller_context() {
    let err = Outcome::<u32, &str>::failure("bad").try_expect("loading").unwrap_err();
    assert_eq!(err.to_string(), "loading: \"bad\"");

    let err = Outcome::<u32, &str>::success(1).try_expect_err("checking").unwrap_err();
    assert_eq!(err.to_string(), "checking: 1");

    assert_eq!(Outcome::<u32, &str>::success(1).try_expect("x"), Ok(1));
    assert_eq!(Outcome::<u32, &str>::failure("y").try_expect_err("x"), Ok("y"));
}

#[test]
fn panic_payload_is_the_rendered_message() {
    let payload = std::panic::catch_unwind(|| Outcome::<u32, &str>::failure("gone").unwrap())
        .unwrap_err();
    assert_eq!(
        payload.downcast_ref::<String>().map(String::as_str),
        Some("Failed to unwrap Ok: \"gone\"")
    );
}

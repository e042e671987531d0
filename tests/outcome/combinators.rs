use std::cell::Cell;
use std::convert::Infallible;
use std::num::ParseIntError;

use try_rail::{Fault, Payload, Try, UnsupportedOperation};

fn failure<T>(message: &'static str) -> Try<T> {
    Try::failure(Fault::msg(message))
}

#[test]
fn map_on_success_matches_factory_on_composed_thunk() {
    let double = |x: i32| Ok::<_, Infallible>(x * 2);

    assert_eq!(Try::success(21).map(double), Try::to(|| double(21)));
    assert_eq!(Try::success(21).map(double), Try::success(42));
}

#[test]
fn map_captures_error_raised_by_function() {
    let mapped = Try::success("abc").map(str::parse::<i32>);

    assert!(mapped.is_failure());
    assert!(mapped.err().unwrap().is::<ParseIntError>());
}

#[test]
fn map_on_failure_returns_the_original_fault_without_calling() {
    let calls = Cell::new(0);
    let fault = Fault::msg("original");

    let mapped = Try::<i32>::Failure(fault.clone()).map(|x| {
        calls.set(calls.get() + 1);
        Ok::<_, Infallible>(x + 1)
    });

    assert_eq!(calls.get(), 0);
    assert!(Fault::ptr_eq(&mapped.err().unwrap(), &fault));
}

#[test]
fn map_value_transforms_without_fallibility() {
    assert_eq!(Try::success(3).map_value(|x| x.to_string()), Try::success("3".to_string()));
    assert!(failure::<i32>("e").map_value(|x| x + 1).is_failure());
}

#[test]
fn flat_map_on_success_returns_function_outcome_unchanged() {
    let fault = Fault::msg("inner");
    let inner = fault.clone();

    let chained = Try::success(1).flat_map(move |_| Try::<i32>::Failure(inner));
    assert!(Fault::ptr_eq(&chained.err().unwrap(), &fault));

    assert_eq!(Try::success(4).flat_map(|x| Try::success(x * 10)), Try::success(40));
}

#[test]
fn try_flat_map_captures_error_raised_by_function() {
    let chained = Try::success("x").try_flat_map(|s| {
        let n = s.parse::<i32>()?;
        Ok::<_, ParseIntError>(Try::success(n))
    });

    assert!(chained.is_failure());
    assert!(chained.err().unwrap().is::<ParseIntError>());
}

#[test]
fn flat_map_on_failure_carries_equivalent_fault_without_calling() {
    let calls = Cell::new(0);
    let fault = Fault::msg("upstream");

    let chained = Try::<i32>::Failure(fault.clone()).flat_map(|x| {
        calls.set(calls.get() + 1);
        Try::success(x)
    });
    let tried = Try::<i32>::Failure(fault.clone()).try_flat_map(|x| {
        calls.set(calls.get() + 1);
        Ok::<_, Infallible>(Try::success(x))
    });

    assert_eq!(calls.get(), 0);
    assert_eq!(chained.err().unwrap().to_string(), "upstream");
    assert!(Fault::ptr_eq(&tried.err().unwrap(), &fault));
}

#[test]
fn get_or_else_prefers_held_value() {
    assert_eq!(Try::success(5).get_or_else(0), 5);
    assert_eq!(failure::<i32>("e").get_or_else(0), 0);
}

#[test]
fn or_else_returns_alternative_only_on_failure() {
    assert_eq!(Try::success(1).or_else(Try::success(2)), Try::success(1));
    assert_eq!(failure::<i32>("e").or_else(Try::success(2)), Try::success(2));

    let fallback = Fault::msg("fallback");
    let chosen = failure::<i32>("first").or_else(Try::Failure(fallback.clone()));
    assert!(Fault::ptr_eq(&chosen.err().unwrap(), &fallback));
}

#[test]
fn failed_inverts_failure_into_success_of_fault() {
    let fault = Fault::msg("x");
    let inverted = Try::<i32>::Failure(fault.clone()).failed();

    assert!(inverted.is_success());
    assert!(Fault::ptr_eq(inverted.get().unwrap(), &fault));
}

#[test]
fn failed_on_success_reports_unsupported_operation() {
    let inverted = Try::success(5).failed();

    let fault = inverted.err().unwrap();
    let error = fault.downcast_ref::<UnsupportedOperation>().unwrap();
    assert_eq!(error.operation(), "Success.failed");
    assert_eq!(fault.to_string(), "Success.failed");
}

#[test]
fn for_each_invokes_once_on_success_and_never_on_failure() {
    let calls = Cell::new(0);
    let count = |_: &i32| calls.set(calls.get() + 1);

    Try::success(1).for_each(count);
    assert_eq!(calls.get(), 1);

    failure::<i32>("e").for_each(count);
    assert_eq!(calls.get(), 1);
}

#[test]
fn for_each_discards_function_result() {
    let mut seen = Vec::new();
    Try::success("a").for_each(|v| {
        seen.push(*v);
        seen.len()
    });

    assert_eq!(seen, vec!["a"]);
}

#[test]
fn value_exposes_payload_of_either_variant() {
    let success = Try::success(9);
    assert!(matches!(success.value(), Payload::Value(&9)));

    let fault = Fault::msg("raw");
    let failed = Try::<i32>::Failure(fault.clone());
    match failed.value() {
        Payload::Error(held) => assert!(Fault::ptr_eq(held, &fault)),
        Payload::Value(_) => panic!("failure exposed a value"),
    }
}

#[test]
fn ok_and_err_split_the_variants() {
    assert_eq!(Try::success(1).ok(), Some(1));
    assert!(Try::success(1).err().is_none());
    assert_eq!(failure::<i32>("e").ok(), None);
    assert!(failure::<i32>("e").err().is_some());
}

#[test]
fn clones_share_the_same_fault() {
    let original = failure::<i32>("shared");
    let copy = original.clone();

    assert_eq!(original, copy);
    assert!(Fault::ptr_eq(&original.err().unwrap(), &copy.err().unwrap()));
}

#[test]
fn distinct_faults_with_same_message_are_not_equal() {
    assert_ne!(failure::<i32>("same"), failure::<i32>("same"));
    assert_ne!(Try::success(1), failure::<i32>("e"));
}

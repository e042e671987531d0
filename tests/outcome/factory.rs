use std::cell::Cell;
use std::num::ParseIntError;

use try_rail::traits::{Exhausted, Interrupt};
use try_rail::{Fault, Try};

#[test]
fn to_wraps_returned_value_in_success() {
    let outcome = Try::to(|| "42".parse::<i32>());

    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert_eq!(outcome.get(), Ok(&42));
}

#[test]
fn to_captures_raised_error_in_failure() {
    let outcome = Try::to(|| "forty-two".parse::<i32>());

    assert!(outcome.is_failure());
    assert!(!outcome.is_success());

    let fault = outcome.get().unwrap_err();
    assert!(fault.is::<ParseIntError>());
    assert_eq!(fault.to_string(), "invalid digit found in string");
}

#[test]
fn to_evaluates_thunk_exactly_once() {
    let calls = Cell::new(0);
    let outcome = Try::to(|| {
        calls.set(calls.get() + 1);
        Ok::<_, ParseIntError>("done")
    });

    assert_eq!(calls.get(), 1);
    let _ = outcome.get();
    let _ = outcome.get();
    assert_eq!(calls.get(), 1);
}

#[test]
fn apply_is_an_alias_of_to() {
    assert_eq!(Try::apply(|| "7".parse::<u8>()), Try::to(|| "7".parse::<u8>()));
    assert!(Try::apply(|| "-7".parse::<u8>()).is_failure());
}

#[test]
fn get_on_failure_raises_the_same_fault_every_time() {
    let fault = Fault::msg("boom");
    let outcome = Try::<i32>::Failure(fault.clone());

    let first = outcome.get().unwrap_err();
    let second = outcome.get().unwrap_err();
    assert!(Fault::ptr_eq(&first, &fault));
    assert!(Fault::ptr_eq(&second, &fault));
}

#[test]
fn failure_constructor_keeps_existing_fault_identity() {
    let fault = Fault::msg("kept");
    let outcome = Try::<()>::failure(fault.clone());

    assert!(Fault::ptr_eq(&outcome.err().unwrap(), &fault));
}

#[test]
fn into_result_hands_back_value_or_fault() {
    assert_eq!(Try::success("v").into_result(), Ok("v"));

    let fault = Fault::msg("e");
    let result = Try::<&str>::Failure(fault.clone()).into_result();
    assert!(Fault::ptr_eq(&result.unwrap_err(), &fault));
}

#[test]
fn to_or_exhausted_captures_recoverable_errors() {
    let outcome = Try::to_or_exhausted(|| -> Result<i32, Interrupt> { Ok("x".parse::<i32>()?) });

    let outcome = outcome.expect("a parse error is recoverable");
    assert!(outcome.is_failure());
}

#[test]
fn to_or_exhausted_never_boxes_the_sentinel() {
    let outcome = Try::<i32>::to_or_exhausted(|| Err(Exhausted.into()));

    assert_eq!(outcome, Err(Exhausted));
}

#[test]
fn to_or_exhausted_drains_an_iterator_step_by_step() {
    let mut source = ["1", "2", "oops"].into_iter();
    let mut step = || -> Result<i32, Interrupt> {
        let raw = source.next().ok_or(Exhausted)?;
        Ok(raw.parse::<i32>()?)
    };

    let mut outcomes = Vec::new();
    while let Ok(outcome) = Try::to_or_exhausted(&mut step) {
        outcomes.push(outcome);
    }

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0], Try::success(1));
    assert_eq!(outcomes[1], Try::success(2));
    assert!(outcomes[2].is_failure());
}

#[cfg(feature = "std")]
mod unwind {
    use try_rail::{Panicked, Try};

    #[test]
    fn catch_unwind_turns_division_by_zero_into_failure() {
        let divisor = std::hint::black_box(0);
        let outcome = Try::catch_unwind(move || 10 / divisor);

        assert!(outcome.is_failure());
        let fault = outcome.err().unwrap();
        let panicked = fault.downcast_ref::<Panicked>().unwrap();
        assert!(panicked.message().contains("divide by zero"));
        assert_eq!(Try::catch_unwind(move || 10 / divisor).get_or_else(-1), -1);
    }

    #[test]
    fn catch_unwind_keeps_formatted_panic_messages() {
        let outcome = Try::<()>::catch_unwind(|| panic!("bad input: {}", 3));

        assert_eq!(outcome.err().unwrap().to_string(), "bad input: 3");
    }

    #[test]
    fn catch_unwind_wraps_normal_return() {
        assert_eq!(Try::catch_unwind(|| 10 / 5), Try::success(2));
    }
}

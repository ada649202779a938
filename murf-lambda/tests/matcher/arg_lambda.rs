use std::io::{Error as IoError, ErrorKind};
use std::panic::{catch_unwind, AssertUnwindSafe};

use murf::{action::Return, expect_method_call, mock, Matcher};
use murf_lambda::{
    arg_lambda, arg_lambda_checked, arg_lambda_described, lambda::DEFAULT_DESCRIPTION,
    RoutineError,
};

use super::tactical_station::{ShipSearchCriteria, TacticalStation};

mock! {
    #[derive(Default)]
    pub struct MockedStation;

    impl TacticalStation for MockedStation {
        fn find_number_of_ships_in_range_by_criteria(&self, _criteria: ShipSearchCriteria) -> usize;
        fn fire_torpedo(&self, _tube_number: usize);
    }
}

fn closer_than_2000_with_phasers() -> Result<
    impl Fn(&ShipSearchCriteria) -> Result<bool, IoError>,
    IoError,
> {
    Ok(|c: &ShipSearchCriteria| -> Result<bool, IoError> {
        Ok(c.minimum_range < 2000 && c.number_of_phasers > 2)
    })
}

#[test]
fn lambda_in_matcher() {
    let (handle, mock) = MockedStation::mock_with_handle();

    expect_method_call!(
        handle as TacticalStation,
        find_number_of_ships_in_range_by_criteria(arg_lambda(
            |c: &ShipSearchCriteria| c.minimum_range < 2000
        ))
    )
    .will_once(Return(0));

    let number_of_ships =
        mock.find_number_of_ships_in_range_by_criteria(ShipSearchCriteria::new(1000, 4));

    assert_eq!(number_of_ships, 0);
}

#[test]
fn lambda_with_description() {
    let (handle, mock) = MockedStation::mock_with_handle();

    expect_method_call!(
        handle as TacticalStation,
        find_number_of_ships_in_range_by_criteria(arg_lambda_described(
            |c: &ShipSearchCriteria| c.minimum_range < 2000 && c.number_of_phasers > 2,
            "ShipSearchCriteria minimum_range<2000 and number_of_phasers>2"
        ))
    )
    .will_once(Return(0));

    let number_of_ships =
        mock.find_number_of_ships_in_range_by_criteria(ShipSearchCriteria::new(1000, 4));

    assert_eq!(number_of_ships, 0);
}

#[test]
fn lambda_with_primitive_argument() {
    let (handle, mock) = MockedStation::mock_with_handle();

    expect_method_call!(
        handle as TacticalStation,
        fire_torpedo(arg_lambda(|tube: &usize| *tube == 2))
    )
    .will_once(Return(()));

    mock.fire_torpedo(2);
}

#[test]
#[should_panic(expected = "No suitable expectation found")]
fn lambda_mismatch() {
    let (handle, mock) = MockedStation::mock_with_handle();

    expect_method_call!(
        handle as TacticalStation,
        find_number_of_ships_in_range_by_criteria(arg_lambda_described(
            |c: &ShipSearchCriteria| c.minimum_range < 100,
            "minimum range closer than 100"
        ))
    )
    .will_once(Return(0));

    mock.find_number_of_ships_in_range_by_criteria(ShipSearchCriteria::new(1000, 4));
}

#[test]
fn description_is_reported() {
    let described = arg_lambda_described(
        |c: &ShipSearchCriteria| c.minimum_range < 100,
        "minimum range closer than 100",
    );
    let undescribed = arg_lambda(|c: &ShipSearchCriteria| c.minimum_range < 100);

    let criteria = ShipSearchCriteria::new(1000, 4);
    assert!(!described.matches(&criteria));
    assert!(!undescribed.matches(&criteria));

    assert_eq!(described.to_string(), "minimum range closer than 100");
    assert_eq!(undescribed.to_string(), DEFAULT_DESCRIPTION);
}

#[test]
fn checked_lambda_is_accepted() {
    let (handle, mock) = MockedStation::mock_with_handle();

    expect_method_call!(
        handle as TacticalStation,
        find_number_of_ships_in_range_by_criteria(arg_lambda_checked(
            closer_than_2000_with_phasers().unwrap()
        ))
    )
    .will_once(Return(0));

    let number_of_ships =
        mock.find_number_of_ships_in_range_by_criteria(ShipSearchCriteria::new(1000, 4));

    assert_eq!(number_of_ships, 0);
}

#[test]
fn checked_error_is_wrapped() {
    let (handle, mock) = MockedStation::mock_with_handle();

    expect_method_call!(
        handle as TacticalStation,
        find_number_of_ships_in_range_by_criteria(arg_lambda_checked(
            |_: &ShipSearchCriteria| -> Result<bool, IoError> {
                Err(IoError::new(ErrorKind::Other, "Unexpected checked error"))
            }
        ))
    )
    .will_once(Return(0));

    let payload = catch_unwind(AssertUnwindSafe(|| {
        mock.find_number_of_ships_in_range_by_criteria(ShipSearchCriteria::new(1000, 4))
    }))
    .unwrap_err();
    handle.release();

    let err = payload.downcast::<RoutineError>().unwrap();
    assert_eq!(
        err.to_string(),
        "std::io::error::Error: Unexpected checked error"
    );

    let cause = err.downcast_ref::<IoError>().unwrap();
    assert_eq!(cause.kind(), ErrorKind::Other);
    assert_eq!(cause.to_string(), "Unexpected checked error");
}

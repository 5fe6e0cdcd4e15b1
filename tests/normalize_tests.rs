use chrono::NaiveDate;
use enrollcheck::errors::AppError;
use enrollcheck::sheet::Cell;
use enrollcheck::utils::date::{
    MISSING_DATE, date_to_serial, serial_date_or_missing, serial_to_iso, to_serial_date,
};
use enrollcheck::utils::id::normalize_id_str;
use enrollcheck::utils::name::join_name;
use enrollcheck::utils::{normalize_id, split_name};
use proptest::prelude::*;

const FMT: &str = "%m/%d/%Y";

#[test]
fn serial_epoch_is_1899_12_30() {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    assert_eq!(date_to_serial(epoch), 0);
    assert_eq!(
        to_serial_date(&Cell::from("05/18/1927"), FMT).unwrap(),
        10000
    );
    assert_eq!(
        to_serial_date(&Cell::from("10/03/1954"), FMT).unwrap(),
        20000
    );
    assert_eq!(serial_to_iso(20001).as_deref(), Some("1954-10-04"));
}

#[test]
fn numeric_cells_pass_through_without_fraction() {
    assert_eq!(to_serial_date(&Cell::Number(20000.0), FMT).unwrap(), 20000);
    assert_eq!(to_serial_date(&Cell::Number(20000.75), FMT).unwrap(), 20000);
}

#[test]
fn empty_date_is_missing_sentinel() {
    assert_eq!(to_serial_date(&Cell::Empty, FMT).unwrap(), MISSING_DATE);
    assert_eq!(to_serial_date(&Cell::from("   "), FMT).unwrap(), MISSING_DATE);
    assert_eq!(serial_to_iso(MISSING_DATE), None);
}

#[test]
fn unparseable_date_is_invalid_date() {
    let err = to_serial_date(&Cell::from("31/12/2020"), FMT).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate { .. }));
}

#[test]
fn per_record_date_absorbs_failure_into_anomaly() {
    let mut anomalies = Vec::new();
    let serial = serial_date_or_missing(
        &Cell::from("not a date"),
        FMT,
        "HIRE DATE",
        &mut anomalies,
    );
    assert_eq!(serial, MISSING_DATE);
    assert_eq!(anomalies, vec!["invalid HIRE DATE 'not a date'".to_string()]);
}

#[test]
fn custom_date_format_is_honoured() {
    assert_eq!(
        to_serial_date(&Cell::from("1954-10-03"), "%Y-%m-%d").unwrap(),
        20000
    );
}

#[test]
fn split_name_last_comma_first() {
    assert_eq!(
        split_name("Smith, John").unwrap(),
        ("John".to_string(), "Smith".to_string())
    );
    // only the first comma splits
    assert_eq!(
        split_name("Smith ,  John, Jr").unwrap(),
        ("John, Jr".to_string(), "Smith".to_string())
    );
}

#[test]
fn split_name_without_comma_is_malformed() {
    let err = split_name("John Smith").unwrap_err();
    assert!(matches!(err, AppError::MalformedName(ref s) if s == "John Smith"));
}

#[test]
fn normalize_id_agrees_across_representations() {
    assert_eq!(normalize_id(&Cell::Number(123456.0)), "000123456");
    assert_eq!(normalize_id(&Cell::from("123-45-6")), "000123456");
    assert_eq!(normalize_id(&Cell::from("123-45-6789")), "123456789");
}

#[test]
fn normalize_id_without_digits_is_empty() {
    assert_eq!(normalize_id(&Cell::Empty), "");
    assert_eq!(normalize_id(&Cell::from("n/a")), "");
}

proptest! {
    #[test]
    fn same_calendar_date_same_serial(y in 1900i32..2100, m in 1u32..=12, d in 1u32..=28) {
        let padded = format!("{m:02}/{d:02}/{y}");
        let bare = format!("{m}/{d}/{y}");
        let expected = date_to_serial(NaiveDate::from_ymd_opt(y, m, d).unwrap());

        prop_assert_eq!(to_serial_date(&Cell::from(padded.as_str()), FMT).unwrap(), expected);
        prop_assert_eq!(to_serial_date(&Cell::from(bare.as_str()), FMT).unwrap(), expected);
    }

    #[test]
    fn split_join_is_idempotent(
        first in "[A-Z][a-z]{0,10}( [A-Z][a-z]{0,10})?",
        last in "[A-Z][a-z]{0,10}(-[A-Z][a-z]{0,10})?",
    ) {
        let (f, l) = split_name(&join_name(&first, &last)).unwrap();
        prop_assert_eq!(&f, &first);
        prop_assert_eq!(&l, &last);

        let again = split_name(&join_name(&f, &l)).unwrap();
        prop_assert_eq!(again, (f, l));
    }

    #[test]
    fn numeric_and_text_ids_normalize_alike(n in 0u64..1_000_000_000) {
        let expected = format!("{n:09}");
        prop_assert_eq!(normalize_id(&Cell::Number(n as f64)), expected.clone());
        prop_assert_eq!(normalize_id_str(&n.to_string()), expected);
    }
}

//! Date normalization determinism across the accepted input forms.

use chrono::NaiveDate;
use cleaner_lib::stages::dates::{normalize_date_columns, parse_day_first};
use cleaner_lib::workbook::CellValue;
use proptest::prelude::*;

mod common;
use common::{sheet_from, text};

#[test]
fn test_ambiguous_and_iso_inputs_converge() {
    // Day-first assumption: both spellings are the 5th of January.
    let mut sheet = sheet_from(vec![
        vec![text("Date")],
        vec![text("05/01/2023")],
        vec![text("2023-01-05")],
        vec![text("not-a-date")],
    ]);

    let normalized = normalize_date_columns(&mut sheet, &[0]);

    assert_eq!(normalized, 2);
    assert_eq!(sheet.rows()[1][0], text("05-Jan-2023"));
    assert_eq!(sheet.rows()[2][0], text("05-Jan-2023"));
    assert_eq!(
        sheet.rows()[3][0],
        text("not-a-date"),
        "parse failure is a silent no-op"
    );
}

#[test]
fn test_month_name_and_two_digit_year_forms() {
    assert_eq!(
        parse_day_first("31 Dec 2023"),
        NaiveDate::from_ymd_opt(2023, 12, 31)
    );
    assert_eq!(
        parse_day_first("31 December 2023"),
        NaiveDate::from_ymd_opt(2023, 12, 31)
    );
    assert_eq!(
        parse_day_first("05/01/23"),
        NaiveDate::from_ymd_opt(2023, 1, 5)
    );
}

#[test]
fn test_only_configured_columns_touched() {
    let mut sheet = sheet_from(vec![
        vec![text("Date"), text("Note")],
        vec![text("01/02/2020"), text("01/02/2020")],
    ]);

    normalize_date_columns(&mut sheet, &[0]);

    assert_eq!(sheet.rows()[1][0], text("01-Feb-2020"));
    assert_eq!(
        sheet.rows()[1][1],
        text("01/02/2020"),
        "undesignated columns keep date-looking text"
    );
}

// Property-based tests using proptest
proptest! {
    #[test]
    fn test_slash_dates_parse_day_first(y in 1970i32..2100, m in 1u32..=12, d in 1u32..=28) {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let input = date.format("%d/%m/%Y").to_string();
        prop_assert_eq!(parse_day_first(&input), Some(date));
    }

    #[test]
    fn test_canonical_output_reparses_to_same_date(y in 1970i32..2100, m in 1u32..=12, d in 1u32..=28) {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let canonical = date.format("%d-%b-%Y").to_string();
        prop_assert_eq!(parse_day_first(&canonical), Some(date));
    }
}

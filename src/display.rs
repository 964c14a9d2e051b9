#![allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use crate::config::{Config, EmptyRoster, MAX_PRECISION};
use crate::model::Roster;
use crate::stats;
use std::io::{self, Write};
use tracing::warn;

/// Render a number in general notation with `precision` significant digits:
/// fixed notation for moderate exponents, scientific notation otherwise,
/// without trailing zeros. `precision` is clamped to `1..=MAX_PRECISION`.
pub fn format_grade(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value < 0.0 { "-inf" } else { "inf" });
    }
    let precision = precision.clamp(1, MAX_PRECISION);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_zeros(&format!("{value:.decimals$}")).to_owned()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

pub fn display_sorted<W: Write>(out: &mut W, roster: &Roster, config: &Config) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Sorted Students (Highest to Lowest) ---")?;
    roster.print_all(out, config.display.precision)
}

pub fn display_average<W: Write>(out: &mut W, roster: &Roster, config: &Config) -> io::Result<()> {
    let precision = config.display.precision;
    let average = match stats::class_average(roster) {
        Some(average) => format_grade(average, precision),
        None => {
            warn!(policy = ?config.report.empty_roster, "no students, class average is undefined");
            match config.report.empty_roster {
                EmptyRoster::Undefined => String::from("undefined (no students)"),
                EmptyRoster::Divide => format_grade(stats::raw_average(roster), precision),
            }
        }
    };
    writeln!(out)?;
    writeln!(out, "Class Average: {average}")
}

#[test]
fn test_format_grade() {
    assert_eq!(format_grade(85.0, 6), "85");
    assert_eq!(format_grade(85.5, 6), "85.5");
    assert_eq!(format_grade(0.0, 6), "0");
    assert_eq!(format_grade(-12.25, 6), "-12.25");
    assert_eq!(format_grade(1.0 / 3.0, 6), "0.333333");
    assert_eq!(format_grade(255.0 / 3.0, 6), "85");
    assert_eq!(format_grade(100_000.0, 6), "100000");
    assert_eq!(format_grade(1_234_567.0, 6), "1.23457e+06");
    assert_eq!(format_grade(0.0001, 6), "0.0001");
    assert_eq!(format_grade(0.00001, 6), "1e-05");
    assert_eq!(format_grade(f64::NAN, 6), "nan");
    assert_eq!(format_grade(f64::NEG_INFINITY, 6), "-inf");
}

#[test]
fn test_format_grade_precision() {
    assert_eq!(format_grade(2.0 / 3.0, 3), "0.667");
    assert_eq!(format_grade(1234.0, 2), "1.2e+03");
    assert_eq!(format_grade(87.6, 0), "9e+01");
    assert_eq!(format_grade(1.0 / 3.0, 10), "0.3333333333");
    assert_eq!(format_grade(1.0 / 3.0, 70_000), "0.33333333333333331");
}

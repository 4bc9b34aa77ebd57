//! Digit-grouping conventions and the one operand-formatting entry point.

use clap::ValueEnum;
use serde::Deserialize;

/// How the integer part of a displayed operand is grouped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DigitGrouping {
    /// Lakh/crore style: the last three digits, then pairs (`10,00,000`).
    #[default]
    SouthAsian,
    /// Thousands triplets (`1,000,000`).
    Western,
    /// No separators.
    Plain,
}

/// Format one operand buffer for display.
///
/// Splits on the first `.`, groups the integer part, and reattaches the
/// fraction verbatim. An integer part that does not parse as a number renders
/// empty, so a bare ".5" stays ".5" and an empty buffer stays empty.
pub fn group_operand(text: &str, grouping: DigitGrouping) -> String {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text, None),
    };
    let int_display = group_integer(int_part, grouping);
    match frac_part {
        Some(frac) => format!("{int_display}.{frac}"),
        None => int_display,
    }
}

fn group_integer(int_part: &str, grouping: DigitGrouping) -> String {
    if int_part.parse::<f64>().is_err() {
        return String::new();
    }
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        // parseable but not a plain digit run ("inf"); leave it alone
        return int_part.to_string();
    }

    let mut reversed = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, c) in digits.chars().rev().enumerate() {
        let boundary = match grouping {
            DigitGrouping::SouthAsian => i == 3 || (i > 3 && (i - 3) % 2 == 0),
            DigitGrouping::Western => i > 0 && i % 3 == 0,
            DigitGrouping::Plain => false,
        };
        if boundary {
            reversed.push(',');
        }
        reversed.push(c);
    }
    let grouped: String = reversed.chars().rev().collect();
    format!("{sign}{grouped}")
}

// SPDX-License-Identifier: MPL-2.0
//! Display formatting for numbers and dates (Japanese locale conventions).

use chrono::{Datelike, Timelike, Weekday};

/// Digits kept after the decimal point.
const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a number with comma thousands separators and at most three
/// fraction digits, trailing zeros dropped: `1234567.8901` → `1,234,567.89`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    // ties round away from zero, as ja-JP number formatting does
    let scale = 10f64.powi(MAX_FRACTION_DIGITS as i32);
    let scaled = value.abs() * scale;
    let rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value.abs()
    };
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, rounded);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    // -0.0001 rounds to 0 and prints unsigned
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Integer variant of [`format_number`].
#[must_use]
pub fn format_integer(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_thousands(&digits);
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Date presentation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// `2024年1月15日`
    #[default]
    Short,
    /// `2024年1月15日月曜日`
    Long,
    /// `2024/1/15 14:30`
    Time,
}

impl DateStyle {
    /// Parses a style name; unknown names fall back to `Short`.
    #[must_use]
    pub fn parse_or_short(name: &str) -> Self {
        match name {
            "long" => DateStyle::Long,
            "time" => DateStyle::Time,
            _ => DateStyle::Short,
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "月曜日",
        Weekday::Tue => "火曜日",
        Weekday::Wed => "水曜日",
        Weekday::Thu => "木曜日",
        Weekday::Fri => "金曜日",
        Weekday::Sat => "土曜日",
        Weekday::Sun => "日曜日",
    }
}

/// Formats a date (or date-time, already in the display time zone).
#[must_use]
pub fn format_date<D>(date: &D, style: DateStyle) -> String
where
    D: Datelike + Timelike,
{
    let (year, month, day) = (date.year(), date.month(), date.day());
    match style {
        DateStyle::Short => format!("{year}年{month}月{day}日"),
        DateStyle::Long => format!(
            "{year}年{month}月{day}日{}",
            weekday_name(date.weekday())
        ),
        DateStyle::Time => format!(
            "{year}/{month}/{day} {:02}:{:02}",
            date.hour(),
            date.minute()
        ),
    }
}

//! Parsing of free-text height and weight strings into metric values.
//!
//! Malformed input yields `None`; measurement strings in leaderboard data
//! are frequently blank, placeholder text or missing a unit.

use std::sync::OnceLock;

use regex::Regex;

const CM_PER_INCH: f64 = 2.54;
const LB_PER_KG: f64 = 2.20462;

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn first_digits() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").ok()).as_ref()
}

fn leading_number() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(\d+(?:\.\d+)?)").ok()).as_ref()
}

/// Converts a length such as `"70 in"` or `"180 cm"` to centimeters.
///
/// Inches are rounded to one decimal; centimeters are passed through as parsed.
pub fn length_to_cm(text: &str) -> Option<f64> {
    if text.contains("in") {
        let inches: f64 = text.replace("in", "").trim().parse().ok()?;
        Some(round1(inches * CM_PER_INCH))
    } else if text.contains("cm") {
        text.replace("cm", "").trim().parse().ok()
    } else {
        None
    }
}

/// Converts a mass such as `"200 lb"` or `"93 kg"` to kilograms.
///
/// Pounds take the first run of digits and round to one decimal. Kilograms
/// take the leading number as-is.
pub fn mass_to_kg(text: &str) -> Option<f64> {
    if text.contains("lb") {
        let digits = first_digits()?.find(text)?;
        let pounds: u64 = digits.as_str().parse().ok()?;
        Some(round1(pounds as f64 / LB_PER_KG))
    } else if text.contains("kg") {
        let caps = leading_number()?.captures(text)?;
        caps.get(1)?.as_str().parse().ok()
    } else {
        None
    }
}

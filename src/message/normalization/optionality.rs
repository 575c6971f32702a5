//! Three-state presence resolution from mode selectors and raw text.
//!
//! Encoding turns a selector plus staged input into a [`Field`] or `Option`.
//! Decoding recovers the selector that would have produced an inbound value.

use crate::message::domain::{ActiveMode, Field, ListMode};

/// Resolves a list selector.
///
/// `parse` runs only in [`ListMode::Values`]; the other modes ignore whatever
/// is staged.
#[must_use]
pub fn resolve_list<T>(mode: ListMode, parse: impl FnOnce() -> Vec<T>) -> Field<Vec<T>> {
    match mode {
        ListMode::Values => Field::Present(parse()),
        ListMode::Empty => Field::Present(Vec::new()),
        ListMode::Null => Field::Null,
    }
}

/// Recovers the list selector for an inbound list.
///
/// An absent list has no selector of its own. It reads as
/// [`ListMode::Empty`], the selector whose output a form with nothing staged
/// reproduces on the next submission.
#[must_use]
pub fn classify_list<T>(field: &Field<Vec<T>>) -> ListMode {
    match field {
        Field::Null => ListMode::Null,
        Field::Present(values) if !values.is_empty() => ListMode::Values,
        Field::Present(_) | Field::Absent => ListMode::Empty,
    }
}

/// Resolves the `active` selector.
#[must_use]
pub const fn resolve_active(mode: ActiveMode) -> Option<bool> {
    match mode {
        ActiveMode::True => Some(true),
        ActiveMode::False => Some(false),
        ActiveMode::Null => None,
    }
}

/// Recovers the `active` selector.
#[must_use]
pub const fn classify_active(active: Option<bool>) -> ActiveMode {
    match active {
        Some(true) => ActiveMode::True,
        Some(false) => ActiveMode::False,
        None => ActiveMode::Null,
    }
}

/// Treats empty text as absent and keeps anything else verbatim.
#[must_use]
pub fn optional_text(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_owned())
}

/// Parses trimmed text as a finite number.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Resolves an optional numeric input.
///
/// Empty text is absent. Text that is not a finite number is also absent,
/// so a malformed input never reaches the wire as `NaN` or `null`.
#[must_use]
pub fn optional_number(field: &'static str, text: &str) -> Option<f64> {
    if text.trim().is_empty() {
        return None;
    }
    let parsed = parse_number(text);
    if parsed.is_none() {
        tracing::debug!(field, value = %text, "non-numeric input, omitting value");
    }
    parsed
}

/// Exclusive upper bound of the identifiers representable as `i64`.
const IDENTIFIER_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Parses the required identifier, falling back to `0`.
///
/// Any finite number without a fractional part is accepted, so `"7.0"` and
/// `"1e2"` read as `7` and `100`.
#[must_use]
pub fn parse_identifier(text: &str) -> i64 {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| parse_number(trimmed).and_then(whole_identifier))
        .unwrap_or_else(|| {
            tracing::debug!(field = "id", value = %text, "non-integer identifier, using 0");
            0
        })
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is whole and checked against the i64 range first"
)]
fn whole_identifier(value: f64) -> Option<i64> {
    (value.fract() == 0.0 && (-IDENTIFIER_LIMIT..IDENTIFIER_LIMIT).contains(&value))
        .then(|| value as i64)
}

/// Renders an optional number back to input text; absent yields empty.
#[must_use]
pub fn number_text(value: Option<f64>) -> String {
    value.map_or_else(String::new, |number| number.to_string())
}

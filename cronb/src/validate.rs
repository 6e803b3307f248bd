//! Field value and expression validation.
//!
//! Stateless checks shared by every path that introduces values into an
//! expression: string parsing, single-value add, per-field set, and bulk
//! replacement. Nothing here mutates state.
//!
//! Expression-level checks are fail-fast: the first offending value is
//! reported and the rest are not inspected.

use serde_json::{Map, Value};

use crate::field::{Field, FieldSet, WILDCARD};
use crate::{Error, RangeSide, Result};

/// Check one value against a field named by string.
///
/// Order of checks: field name, character set, then numeric domain.
pub fn validate_field_value(field_set: FieldSet, field: &str, value: &str) -> Result<()> {
    let field = field_set.resolve(field)?;
    check_value(field, value)
}

/// Check a structured expression: field name → array of values.
pub fn validate_expression(field_set: FieldSet, expression: &Map<String, Value>) -> Result<()> {
    read_expression(field_set, expression).map(|_| ())
}

/// Check a whitespace-separated expression string.
pub fn validate_expression_str(field_set: FieldSet, text: &str) -> Result<()> {
    read_tokens(field_set, text).map(|_| ())
}

/// Check one value against a known field.
pub fn check_value(field: Field, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::MalformedValue {
            field,
            value: String::new(),
        });
    }

    if !value.chars().all(|c| c.is_ascii_digit() || c == '*' || c == '-') {
        return Err(Error::IllegalCharacter {
            field,
            value: value.to_string(),
        });
    }

    if value == WILDCARD {
        return Ok(());
    }

    match value.split_once('-') {
        Some((lo, hi)) => check_range(field, value, lo, hi),
        None => check_number(field, value),
    }
}

/// Check every value of one field, including the wildcard exclusivity rule.
pub fn check_values<S: AsRef<str>>(field: Field, values: &[S]) -> Result<()> {
    for value in values {
        check_value(field, value.as_ref())?;
    }

    if values.len() > 1 && values.iter().any(|v| v.as_ref() == WILDCARD) {
        return Err(Error::WildcardMixed { field });
    }

    Ok(())
}

fn check_number(field: Field, value: &str) -> Result<()> {
    let n = parse_number(value).ok_or_else(|| Error::MalformedValue {
        field,
        value: value.to_string(),
    })?;

    if !field.contains(n) {
        return Err(Error::ValueOutOfBounds {
            field,
            value: value.to_string(),
            min: field.min(),
            max: field.max(),
        });
    }

    Ok(())
}

fn check_range(field: Field, value: &str, lo: &str, hi: &str) -> Result<()> {
    let malformed = || Error::RangeMalformed {
        field,
        value: value.to_string(),
    };

    let lo = parse_number(lo).ok_or_else(malformed)?;
    let hi = parse_number(hi).ok_or_else(malformed)?;

    let side = match (field.contains(lo), field.contains(hi)) {
        (true, true) => None,
        (false, true) => Some(RangeSide::Low),
        (true, false) => Some(RangeSide::High),
        (false, false) => Some(RangeSide::Both),
    };

    if let Some(side) = side {
        return Err(Error::RangeOutOfBounds {
            field,
            value: value.to_string(),
            side,
            min: field.min(),
            max: field.max(),
        });
    }

    if lo > hi {
        return Err(malformed());
    }

    Ok(())
}

/// Parse a run of ASCII digits. Overflow saturates so it fails the bounds
/// check instead of the syntax check.
fn parse_number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.parse().unwrap_or(u32::MAX))
}

/// Validate a string expression and split it into per-position value lists.
///
/// Tokens are whitespace-separated; each token may hold a comma list.
pub(crate) fn read_tokens(field_set: FieldSet, text: &str) -> Result<Vec<Vec<String>>> {
    let tokens: Vec<&str> = text.split_whitespace().collect();

    if tokens.len() > field_set.len() {
        return Err(Error::TooManyFields {
            given: tokens.len(),
            max: field_set.len(),
        });
    }

    let mut positions = Vec::with_capacity(tokens.len());
    for (field, token) in field_set.fields().iter().zip(tokens) {
        let values: Vec<String> = token.split(',').map(str::to_string).collect();
        check_values(*field, &values)?;
        positions.push(values);
    }

    Ok(positions)
}

/// Validate a structured expression and resolve its field names.
pub(crate) fn read_expression(
    field_set: FieldSet,
    expression: &Map<String, Value>,
) -> Result<Vec<(Field, Vec<String>)>> {
    if expression.len() > field_set.len() {
        return Err(Error::TooManyFields {
            given: expression.len(),
            max: field_set.len(),
        });
    }

    let mut entries = Vec::with_capacity(expression.len());
    for (name, raw) in expression {
        let field = field_set.resolve(name)?;
        let values = json_values(name, raw)?;
        check_values(field, &values)?;
        entries.push((field, values));
    }

    Ok(entries)
}

/// Convert a JSON array of strings or integers into field values.
pub(crate) fn json_values(name: &str, raw: &Value) -> Result<Vec<String>> {
    let not_a_sequence = || Error::NotASequence(name.to_string());

    let items = raw.as_array().ok_or_else(not_a_sequence)?;
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) if n.is_u64() => Ok(n.to_string()),
            _ => Err(not_a_sequence()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_accepts_wildcard_number_and_range() {
        assert!(check_value(Field::Minute, "*").is_ok());
        assert!(check_value(Field::Minute, "0").is_ok());
        assert!(check_value(Field::Minute, "59").is_ok());
        assert!(check_value(Field::DayOfWeek, "1-5").is_ok());
        assert!(check_value(Field::Year, "2016").is_ok());
    }

    #[test]
    fn test_unknown_field_checked_first() {
        let err = validate_field_value(FieldSet::WithYear, "minutes", "abc").unwrap_err();
        assert!(matches!(err, Error::UnknownField { ref name, .. } if name == "minutes"));
    }

    #[test]
    fn test_year_unknown_in_standard_set() {
        let err = validate_field_value(FieldSet::Standard, "year", "2020").unwrap_err();
        assert!(matches!(err, Error::UnknownField { .. }));
    }

    #[test]
    fn test_illegal_characters() {
        for value in ["a", "5a", "1/5", "1,2", " 5", "MON"] {
            let err = check_value(Field::Minute, value).unwrap_err();
            assert!(
                matches!(err, Error::IllegalCharacter { .. }),
                "{:?} gave {:?}",
                value,
                err
            );
        }
    }

    #[test]
    fn test_value_out_of_bounds() {
        let cases = [
            (Field::Hour, "100"),
            (Field::Hour, "24"),
            (Field::DayOfWeek, "0"),
            (Field::DayOfMonth, "0"),
            (Field::Month, "13"),
            (Field::Year, "1834"),
            (Field::Year, "3001"),
        ];
        for (field, value) in cases {
            let err = check_value(field, value).unwrap_err();
            assert!(
                matches!(err, Error::ValueOutOfBounds { .. }),
                "{}={} gave {:?}",
                field,
                value,
                err
            );
        }
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        // "9" sorts after "59" as text but is in range
        assert!(check_value(Field::Minute, "9").is_ok());
        assert!(check_value(Field::Year, "999").is_err());
    }

    #[test]
    fn test_overflow_is_out_of_bounds() {
        let err = check_value(Field::Minute, "99999999999999999999").unwrap_err();
        assert!(matches!(err, Error::ValueOutOfBounds { .. }));
    }

    #[test]
    fn test_malformed_values() {
        for value in ["", "**", "5*", "*5"] {
            let err = check_value(Field::Minute, value).unwrap_err();
            assert!(
                matches!(err, Error::MalformedValue { .. }),
                "{:?} gave {:?}",
                value,
                err
            );
        }
    }

    #[test]
    fn test_range_sides_reported_independently() {
        let err = check_value(Field::Minute, "20-60").unwrap_err();
        assert!(matches!(err, Error::RangeOutOfBounds { side: RangeSide::High, .. }));

        let err = check_value(Field::DayOfWeek, "0-5").unwrap_err();
        assert!(matches!(err, Error::RangeOutOfBounds { side: RangeSide::Low, .. }));

        let err = check_value(Field::DayOfWeek, "0-8").unwrap_err();
        assert!(matches!(err, Error::RangeOutOfBounds { side: RangeSide::Both, .. }));
    }

    #[test]
    fn test_malformed_ranges() {
        for value in ["-5", "5-", "-", "1-2-3", "*-5", "1-*", "10-5"] {
            let err = check_value(Field::Minute, value).unwrap_err();
            assert!(
                matches!(err, Error::RangeMalformed { .. }),
                "{:?} gave {:?}",
                value,
                err
            );
        }
    }

    #[test]
    fn test_single_point_range_is_valid() {
        assert!(check_value(Field::Hour, "5-5").is_ok());
    }

    #[test]
    fn test_wildcard_mixed() {
        let err = check_values(Field::Hour, &["*", "5"]).unwrap_err();
        assert!(matches!(err, Error::WildcardMixed { field: Field::Hour }));
        assert!(check_values(Field::Hour, &["*"]).is_ok());
        assert!(check_values::<&str>(Field::Hour, &[]).is_ok());
    }

    #[test]
    fn test_expression_string() {
        assert!(validate_expression_str(FieldSet::WithYear, "30 0-6 * * 1-5").is_ok());
        assert!(validate_expression_str(FieldSet::WithYear, "").is_ok());
        assert!(validate_expression_str(FieldSet::WithYear, "1,2,3 * * * * 2020").is_ok());

        let err = validate_expression_str(FieldSet::WithYear, "* 24").unwrap_err();
        assert!(matches!(err, Error::ValueOutOfBounds { field: Field::Hour, .. }));
    }

    #[test]
    fn test_expression_string_too_many_fields() {
        let err = validate_expression_str(FieldSet::WithYear, "* * * * * * *").unwrap_err();
        assert!(matches!(err, Error::TooManyFields { given: 7, max: 6 }));

        let err = validate_expression_str(FieldSet::Standard, "* * * * * 2020").unwrap_err();
        assert!(matches!(err, Error::TooManyFields { given: 6, max: 5 }));
    }

    #[test]
    fn test_expression_string_empty_list_item() {
        let err = validate_expression_str(FieldSet::WithYear, "1,,2").unwrap_err();
        assert!(matches!(err, Error::MalformedValue { .. }));
    }

    #[test]
    fn test_expression_object() {
        let expr = object(json!({
            "minute": ["5", "10-20"],
            "dayOfTheWeek": ["1-5"],
            "year": [2020],
        }));
        assert!(validate_expression(FieldSet::WithYear, &expr).is_ok());
    }

    #[test]
    fn test_expression_object_too_many_fields_before_values() {
        let expr = object(json!({
            "minute": ["*"],
            "hour": ["*"],
            "dayOfMonth": ["*"],
            "month": ["*"],
            "dayOfWeek": ["*"],
            "year": ["*"],
            "extraUnit": ["1"],
        }));
        let err = validate_expression(FieldSet::WithYear, &expr).unwrap_err();
        assert!(matches!(err, Error::TooManyFields { given: 7, max: 6 }));
    }

    #[test]
    fn test_expression_object_fail_fast() {
        // first failure wins, in insertion order
        let expr = object(json!({
            "hour": ["100"],
            "bogus": ["1"],
        }));
        let err = validate_expression(FieldSet::WithYear, &expr).unwrap_err();
        assert!(matches!(err, Error::ValueOutOfBounds { field: Field::Hour, .. }));

        let expr = object(json!({
            "bogus": ["1"],
            "hour": ["100"],
        }));
        let err = validate_expression(FieldSet::WithYear, &expr).unwrap_err();
        assert!(matches!(err, Error::UnknownField { .. }));
    }

    #[test]
    fn test_expression_object_not_a_sequence() {
        let expr = object(json!({ "minute": "5" }));
        let err = validate_expression(FieldSet::WithYear, &expr).unwrap_err();
        assert!(matches!(err, Error::NotASequence(ref name) if name == "minute"));

        let expr = object(json!({ "minute": [true] }));
        let err = validate_expression(FieldSet::WithYear, &expr).unwrap_err();
        assert!(matches!(err, Error::NotASequence(_)));
    }
}

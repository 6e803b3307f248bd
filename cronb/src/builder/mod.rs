//! Mutable, validated cron expression builder.
//!
//! # Field states
//!
//! Each field is either wildcarded (`*`) or holds explicit values:
//!
//! - `add_value` on a wildcard replaces it; on explicit values it appends
//!   unless the value is already present.
//! - `remove_value` of the last explicit value resets the field to `*`;
//!   removing from a wildcard field does nothing.
//! - `set` and `set_all` replace wholesale after validating everything.
//!
//! Every mutation validates before it touches state, so a failed call leaves
//! the builder exactly as it was.

use std::str::FromStr;

use serde_json::{Map, Value};

use crate::expression::Expression;
use crate::field::{Field, FieldSet, WILDCARD};
use crate::validate::{check_value, check_values, json_values, read_expression, read_tokens};
use crate::{Error, Result};

/// Builds a cron expression one value at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronBuilder {
    field_set: FieldSet,
    expression: Expression,
}

impl Default for CronBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CronBuilder {
    /// Empty builder over the default field set (with year).
    pub fn new() -> Self {
        Self::with_fields(FieldSet::default())
    }

    /// Empty builder over the given field set.
    pub fn with_fields(field_set: FieldSet) -> Self {
        Self {
            field_set,
            expression: Expression::wildcard(field_set),
        }
    }

    /// Parse an initial expression using the default field set.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, FieldSet::default())
    }

    /// Parse an initial expression.
    ///
    /// Fields are whitespace-separated and positional; missing trailing
    /// fields are wildcards. A field may hold a comma list.
    pub fn parse_with(text: &str, field_set: FieldSet) -> Result<Self> {
        let positions = read_tokens(field_set, text)?;
        let entries = field_set.fields().iter().copied().zip(positions);
        Ok(Self {
            field_set,
            expression: Expression::from_entries(field_set, entries),
        })
    }

    pub fn field_set(&self) -> FieldSet {
        self.field_set
    }

    /// Render the canonical string: fields space-separated, values
    /// comma-separated.
    pub fn build(&self) -> String {
        self.expression.to_string()
    }

    /// Add one value to a field.
    pub fn add_value(&mut self, field: impl AsRef<str>, value: &str) -> Result<()> {
        let field = self.field_set.resolve(field.as_ref())?;
        check_value(field, value)?;

        let wildcarded = self.expression.is_wildcard(field);
        if value == WILDCARD {
            return if wildcarded {
                Ok(())
            } else {
                Err(Error::WildcardMixed { field })
            };
        }

        let values = self.values_mut(field)?;
        if wildcarded {
            *values = vec![value.to_string()];
        } else if !values.iter().any(|v| v == value) {
            values.push(value.to_string());
        }

        Ok(())
    }

    /// Remove one value from a field. Removing a value that is not present,
    /// or removing from a wildcard field, is a no-op.
    pub fn remove_value(&mut self, field: impl AsRef<str>, value: &str) -> Result<()> {
        let field = self.field_set.resolve(field.as_ref())?;
        if self.expression.is_wildcard(field) {
            return Ok(());
        }

        let values = self.values_mut(field)?;
        values.retain(|v| v != value);
        if values.is_empty() {
            values.push(WILDCARD.to_string());
        }

        Ok(())
    }

    /// Comma-joined values of one field.
    pub fn get(&self, field: impl AsRef<str>) -> Result<String> {
        let field = self.field_set.resolve(field.as_ref())?;
        self.expression
            .joined(field)
            .ok_or_else(|| self.field_set.unknown(field.name()))
    }

    /// Replace a field's values. An empty list, or `["*"]`, resets the field
    /// to the wildcard. Returns the new comma-joined value.
    pub fn set<I, S>(&mut self, field: impl AsRef<str>, values: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let field = self.field_set.resolve(field.as_ref())?;
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        self.commit(field, values)
    }

    /// `set` for untyped input; anything but an array of strings or
    /// integers fails with [`Error::NotASequence`].
    pub fn set_json(&mut self, field: impl AsRef<str>, values: &Value) -> Result<String> {
        let name = field.as_ref();
        let field = self.field_set.resolve(name)?;
        let values = json_values(name, values)?;
        self.commit(field, values)
    }

    /// Snapshot of the full state. Edit it and pass it to [`Self::set_all`]
    /// for bulk changes.
    pub fn get_all(&self) -> Expression {
        self.expression.clone()
    }

    /// Borrow the current state without copying.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Replace the whole state after validating every field of `expression`.
    /// Nothing from the previous state survives; fields absent from
    /// `expression` become wildcards.
    pub fn set_all(&mut self, expression: Expression) -> Result<()> {
        if expression.len() > self.field_set.len() {
            return Err(Error::TooManyFields {
                given: expression.len(),
                max: self.field_set.len(),
            });
        }

        for (field, values) in expression.iter() {
            if !self.field_set.contains(field) {
                return Err(self.field_set.unknown(field.name()));
            }
            check_values(field, values)?;
        }

        let entries = expression.iter().map(|(f, v)| (f, v.to_vec()));
        self.expression = Expression::from_entries(self.field_set, entries);
        Ok(())
    }

    /// `set_all` for untyped input: a JSON object of field name → values.
    pub fn set_all_json(&mut self, expression: &Map<String, Value>) -> Result<()> {
        let entries = read_expression(self.field_set, expression)?;
        self.expression = Expression::from_entries(self.field_set, entries);
        Ok(())
    }

    fn commit(&mut self, field: Field, values: Vec<String>) -> Result<String> {
        check_values(field, &values)?;
        self.expression.replace(field, values);
        self.get(field)
    }

    fn values_mut(&mut self, field: Field) -> Result<&mut Vec<String>> {
        let field_set = self.field_set;
        self.expression
            .values_mut(field)
            .ok_or_else(|| field_set.unknown(field.name()))
    }
}

impl FromStr for CronBuilder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for CronBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

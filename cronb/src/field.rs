//! Cron fields and their numeric domains.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The token meaning "any value of this field".
pub const WILDCARD: &str = "*";

/// One positional slot of a cron expression.
///
/// Declaration order is output order, so `Ord` sorts fields the way
/// they appear in the canonical string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Minute,
    Hour,
    #[serde(alias = "dayOfTheMonth")]
    DayOfMonth,
    #[serde(alias = "monthOfTheYear")]
    Month,
    #[serde(alias = "dayOfTheWeek")]
    DayOfWeek,
    Year,
}

impl Field {
    /// All fields in canonical order.
    pub const ALL: [Field; 6] = [
        Field::Minute,
        Field::Hour,
        Field::DayOfMonth,
        Field::Month,
        Field::DayOfWeek,
        Field::Year,
    ];

    /// Canonical field name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "dayOfMonth",
            Field::Month => "month",
            Field::DayOfWeek => "dayOfWeek",
            Field::Year => "year",
        }
    }

    /// Look up a field by canonical name or long-form alias.
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "minute" => Some(Field::Minute),
            "hour" => Some(Field::Hour),
            "dayOfMonth" | "dayOfTheMonth" => Some(Field::DayOfMonth),
            "month" | "monthOfTheYear" => Some(Field::Month),
            "dayOfWeek" | "dayOfTheWeek" => Some(Field::DayOfWeek),
            "year" => Some(Field::Year),
            _ => None,
        }
    }

    /// Smallest accepted value.
    pub fn min(self) -> u32 {
        self.bounds().0
    }

    /// Largest accepted value.
    pub fn max(self) -> u32 {
        self.bounds().1
    }

    /// Inclusive `(min, max)` domain.
    pub fn bounds(self) -> (u32, u32) {
        match self {
            Field::Minute => (0, 59),
            Field::Hour => (0, 23),
            Field::DayOfMonth => (1, 31),
            Field::Month => (1, 12),
            Field::DayOfWeek => (1, 7),
            Field::Year => (1900, 3000),
        }
    }

    #[inline]
    pub fn contains(self, n: u32) -> bool {
        let (min, max) = self.bounds();
        (min..=max).contains(&n)
    }
}

impl AsRef<str> for Field {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which fields make up an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldSet {
    /// minute hour dayOfMonth month dayOfWeek
    Standard,
    /// The standard five plus year.
    #[default]
    WithYear,
}

impl FieldSet {
    /// Fields in canonical output order.
    pub fn fields(self) -> &'static [Field] {
        match self {
            FieldSet::Standard => &Field::ALL[..5],
            FieldSet::WithYear => &Field::ALL,
        }
    }

    /// Number of fields, also the ceiling for positional or structured input.
    pub fn len(self) -> usize {
        self.fields().len()
    }

    pub fn contains(self, field: Field) -> bool {
        field != Field::Year || self == FieldSet::WithYear
    }

    /// Field at a position of the whitespace-separated string form.
    pub fn at(self, position: usize) -> Option<Field> {
        self.fields().get(position).copied()
    }

    /// Resolve a field name, rejecting names outside this set.
    pub fn resolve(self, name: &str) -> Result<Field> {
        match Field::from_name(name) {
            Some(field) if self.contains(field) => Ok(field),
            _ => Err(self.unknown(name)),
        }
    }

    pub(crate) fn unknown(self, name: &str) -> Error {
        let valid = self
            .fields()
            .iter()
            .map(|f| format!("\"{}\"", f))
            .collect::<Vec<_>>()
            .join(", ");
        Error::UnknownField {
            name: name.to_string(),
            valid,
        }
    }
}

impl std::fmt::Display for FieldSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldSet::Standard => write!(f, "standard"),
            FieldSet::WithYear => write!(f, "with-year"),
        }
    }
}

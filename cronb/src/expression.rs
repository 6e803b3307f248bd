//! Expression state: per-field value sequences.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::{Field, FieldSet, WILDCARD};

/// The six (or five) value sequences of a cron expression.
///
/// Every field of the set is present with at least one value. A field is
/// either wildcarded (exactly `["*"]`) or holds explicit values without the
/// wildcard. Keys iterate in canonical output order.
///
/// An `Expression` obtained from [`crate::CronBuilder::get_all`] is an owned
/// snapshot. Edits made through [`Expression::values_mut`] are not checked
/// until the snapshot is handed back to [`crate::CronBuilder::set_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Expression {
    values: BTreeMap<Field, Vec<String>>,
}

impl Expression {
    /// All fields of the set wildcarded.
    pub fn wildcard(field_set: FieldSet) -> Self {
        let values = field_set
            .fields()
            .iter()
            .map(|&field| (field, wildcard()))
            .collect();
        Self { values }
    }

    pub fn field_set(&self) -> FieldSet {
        if self.values.contains_key(&Field::Year) {
            FieldSet::WithYear
        } else {
            FieldSet::Standard
        }
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&[String]> {
        self.values.get(&field).map(Vec::as_slice)
    }

    /// Mutable access for bulk edits; `None` if the field is not present.
    pub fn values_mut(&mut self, field: Field) -> Option<&mut Vec<String>> {
        self.values.get_mut(&field)
    }

    pub fn is_wildcard(&self, field: Field) -> bool {
        self.get(field).is_some_and(|v| v.len() == 1 && v[0] == WILDCARD)
    }

    /// Comma-joined values of one field.
    pub fn joined(&self, field: Field) -> Option<String> {
        self.get(field).map(|v| v.join(","))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &[String])> {
        self.values.iter().map(|(f, v)| (*f, v.as_slice()))
    }

    pub(crate) fn replace(&mut self, field: Field, values: Vec<String>) {
        self.values.insert(field, normalize(values));
    }

    /// Build from already-validated entries. Missing fields of the set
    /// become wildcards.
    pub(crate) fn from_entries(
        field_set: FieldSet,
        entries: impl IntoIterator<Item = (Field, Vec<String>)>,
    ) -> Self {
        let mut expression = Self::wildcard(field_set);
        for (field, values) in entries {
            expression.replace(field, values);
        }
        expression
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<String> = self.values.values().map(|v| v.join(",")).collect();
        write!(f, "{}", fields.join(" "))
    }
}

fn wildcard() -> Vec<String> {
    vec![WILDCARD.to_string()]
}

/// Drop duplicates keeping first occurrence; empty becomes wildcard.
pub(crate) fn normalize(values: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    if out.is_empty() {
        wildcard()
    } else {
        out
    }
}

//! cronb: incremental cron expression builder.
//!
//! Builds five- or six-field cron strings through a validated, mutable API.
//! Every value that enters a [`CronBuilder`] is checked by [`validate`] first,
//! so [`CronBuilder::build`] always yields a well-formed expression.

pub mod builder;
pub mod config;
pub mod error;
pub mod expression;
pub mod field;
pub mod validate;

pub use builder::CronBuilder;
pub use config::Config;
pub use error::{Error, RangeSide, Result};
pub use expression::Expression;
pub use field::{Field, FieldSet, WILDCARD};
pub use validate::{validate_expression, validate_expression_str, validate_field_value};

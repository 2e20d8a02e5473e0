//! Dynamic WHERE-clause building for list queries.
//!
//! Every filter type declares a static, ordered table of [`FilterField`]s.
//! [`Predicate`] walks that table in declaration order and collects one
//! `column = $n` condition plus one [`BindValue`] per field that is set, so
//! placeholder numbers always line up with the bind order.

use sqlx::postgres::PgArguments;
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::Postgres;

use harmonia_core::types::DbId;

/// SQL emitted in place of an empty condition list.
pub const TAUTOLOGY: &str = "TRUE";

// ---------------------------------------------------------------------------
// Bind values
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindValue {
    BigInt(i64),
    Int(i32),
    Bool(bool),
}

/// An id filter. Applies only when strictly positive.
pub fn positive_id(value: DbId) -> Option<BindValue> {
    (value > 0).then_some(BindValue::BigInt(value))
}

/// A plain numeric filter. Applies only when strictly positive, so `0` reads
/// as "unset".
pub fn positive(value: i32) -> Option<BindValue> {
    (value > 0).then_some(BindValue::Int(value))
}

/// A numeric filter where zero is meaningful. Applies when present and `>= 0`.
pub fn non_negative(value: Option<i32>) -> Option<BindValue> {
    value.filter(|v| *v >= 0).map(BindValue::Int)
}

/// A boolean filter. Applies when present, including `Some(false)`.
pub fn flag(value: Option<bool>) -> Option<BindValue> {
    value.map(BindValue::Bool)
}

// ---------------------------------------------------------------------------
// Field tables
// ---------------------------------------------------------------------------

/// One filterable field: the qualified column it constrains and how to read
/// its value. `value` returns `None` when the field is unset.
pub struct FilterField<F> {
    pub column: &'static str,
    pub value: fn(&F) -> Option<BindValue>,
}

/// A filter object with a fixed field table.
///
/// Implementors own their data, so the table can live in a `static`.
pub trait Filter: Sized + 'static {
    /// Fields in the order their conditions are emitted.
    const FIELDS: &'static [FilterField<Self>];
}

// ---------------------------------------------------------------------------
// Predicate
// ---------------------------------------------------------------------------

/// Ordered WHERE conditions and their parallel bind values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    conditions: Vec<String>,
    values: Vec<BindValue>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Predicate for an unscoped list.
    pub fn for_filter<F: Filter>(filter: &F) -> Self {
        let mut predicate = Self::new();
        predicate.apply(filter);
        predicate
    }

    /// Predicate for a list nested under a parent resource. The scope
    /// condition is always first and always present.
    pub fn scoped<F: Filter>(scope_column: &str, parent_id: DbId, filter: &F) -> Self {
        let mut predicate = Self::new();
        predicate.push_eq(scope_column, BindValue::BigInt(parent_id));
        predicate.apply(filter);
        predicate
    }

    /// Append a condition rendered around the next placeholder.
    pub fn push_with(&mut self, render: impl FnOnce(&str) -> String, value: BindValue) {
        let placeholder = format!("${}", self.next_index());
        self.conditions.push(render(&placeholder));
        self.values.push(value);
    }

    /// Append `column = $n`.
    pub fn push_eq(&mut self, column: &str, value: BindValue) {
        self.push_with(|p| format!("{column} = {p}"), value);
    }

    /// Append a condition for every set field of `filter`, in table order.
    pub fn apply<F: Filter>(&mut self, filter: &F) {
        for field in F::FIELDS {
            if let Some(value) = (field.value)(filter) {
                self.push_eq(field.column, value);
            }
        }
    }

    /// Placeholder index the next bound value will take.
    pub fn next_index(&self) -> usize {
        self.values.len() + 1
    }

    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn values(&self) -> &[BindValue] {
        &self.values
    }

    /// Conditions joined with `AND`, or [`TAUTOLOGY`] when there are none.
    pub fn to_sql(&self) -> String {
        if self.conditions.is_empty() {
            TAUTOLOGY.to_string()
        } else {
            self.conditions.join(" AND ")
        }
    }
}

// ---------------------------------------------------------------------------
// Binding helpers
// ---------------------------------------------------------------------------

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
pub fn bind_values<'q, O>(
    mut q: QueryAs<'q, Postgres, O, PgArguments>,
    values: &[BindValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for value in values {
        match *value {
            BindValue::BigInt(v) => q = q.bind(v),
            BindValue::Int(v) => q = q.bind(v),
            BindValue::Bool(v) => q = q.bind(v),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
pub fn bind_values_scalar<'q, O>(
    mut q: QueryScalar<'q, Postgres, O, PgArguments>,
    values: &[BindValue],
) -> QueryScalar<'q, Postgres, O, PgArguments> {
    for value in values {
        match *value {
            BindValue::BigInt(v) => q = q.bind(v),
            BindValue::Int(v) => q = q.bind(v),
            BindValue::Bool(v) => q = q.bind(v),
        }
    }
    q
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

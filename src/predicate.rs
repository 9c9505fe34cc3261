//! WHERE-clause fragments built from a prototype record.
//!
//! The prototype works as a sparse filter: every annotated field holding a
//! non-zero value yields one fragment, zero-valued fields yield nothing.
//! Fragments are returned bare, without `AND`/`OR` or parentheses, so the
//! caller decides how to combine them. There is no way to filter on a zero
//! value through these builders.

use std::any::TypeId;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::capability::{Scalar, SqlField};
use crate::project::qualify;
use crate::record::{Field, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    #[default]
    Undefined,
    IsNull,
    IsNotNull,
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    In,
    NotIn,
}

impl Operator {
    /// The operator with its right-hand side; the two `NULL` tests ignore `condition`.
    pub fn render(&self, condition: &str) -> String {
        match self {
            Operator::Undefined => String::new(),
            Operator::IsNull => " IS NULL".to_string(),
            Operator::IsNotNull => " IS NOT NULL".to_string(),
            Operator::Equal => format!("={}", condition),
            Operator::NotEqual => format!("!={}", condition),
            Operator::Less => format!("<{}", condition),
            Operator::LessOrEqual => format!("<={}", condition),
            Operator::Greater => format!(">{}", condition),
            Operator::GreaterOrEqual => format!(">={}", condition),
            Operator::In => format!(" IN ({})", condition),
            Operator::NotIn => format!(" NOT IN ({})", condition),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Operator::Undefined => "",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::LessOrEqual => "<=",
            Operator::Greater => ">",
            Operator::GreaterOrEqual => ">=",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
        };
        write!(f, "{}", symbol)
    }
}

impl FromStr for Operator {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ").to_uppercase();
        match normalized.as_str() {
            "" => Ok(Operator::Undefined),
            "IS NULL" => Ok(Operator::IsNull),
            "IS NOT NULL" => Ok(Operator::IsNotNull),
            "=" => Ok(Operator::Equal),
            "!=" | "<>" => Ok(Operator::NotEqual),
            "<" => Ok(Operator::Less),
            "<=" => Ok(Operator::LessOrEqual),
            ">" => Ok(Operator::Greater),
            ">=" => Ok(Operator::GreaterOrEqual),
            "IN" => Ok(Operator::In),
            "NOT IN" => Ok(Operator::NotIn),
            _ => Err(format!("Unknown comparison operator '{}'", s)),
        }
    }
}

/// Single quotes get a backslash, then the whole text is quoted.
pub fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "\\'"))
}

fn fragment(table: &str, column: &str, operator: Operator, condition: &str) -> String {
    format!(" {}{}", qualify(table, column), operator.render(condition))
}

/// One fragment per non-zero field, each compared against its own value.
///
/// Strings are quoted, integers use their plain form, floats six decimals,
/// and other kinds their [`Renderable`](crate::capability::Renderable) output.
pub fn build_conditions<R: Record>(table: &str, prototype: &R, operator: Operator) -> Vec<String> {
    let mut conditions = Vec::new();
    for field in prototype.fields() {
        let condition = match field.value.scalar() {
            Some(scalar) if scalar.is_zero() => None,
            Some(Scalar::Text(s)) => Some(quote(s)),
            Some(Scalar::Int(i)) => Some(i.to_string()),
            Some(Scalar::Uint(u)) => Some(u.to_string()),
            Some(Scalar::Float(f)) => Some(format!("{:.6}", f)),
            None if field.value.is_zero() => None,
            None => field.value.renderable().map(|r| r.render()),
        };
        match condition {
            Some(condition) => conditions.push(fragment(table, field.column, operator, &condition)),
            None => trace!(column = field.column, "no condition for field"),
        }
    }
    conditions
}

/// Like [`build_conditions`], but every matched field is compared against
/// `value` instead of its own content.
///
/// This lets one prototype pick the columns while a single value is supplied
/// for all of them, e.g. `first=1122` and `second=1122` from a prototype with
/// both `first` and `second` set. String fields quote the text of `value`,
/// numeric fields use it as is. Other kinds only match when the field has
/// exactly the type `V` and `V` is renderable.
pub fn build_conditions_with<R: Record, V: SqlField + 'static>(
    table: &str,
    prototype: &R,
    operator: Operator,
    value: &V,
) -> Vec<String> {
    let text = value
        .text()
        .or_else(|| value.renderable().map(|r| r.render()));
    let mut conditions = Vec::new();
    for field in prototype.fields() {
        match external_condition(&field, TypeId::of::<V>(), value, text.as_deref()) {
            Some(condition) => conditions.push(fragment(table, field.column, operator, &condition)),
            None => trace!(column = field.column, "no condition for field"),
        }
    }
    conditions
}

fn external_condition(
    field: &Field<'_>,
    value_type: TypeId,
    value: &dyn SqlField,
    text: Option<&str>,
) -> Option<String> {
    match field.value.scalar() {
        Some(scalar) if scalar.is_zero() => None,
        Some(Scalar::Text(_)) => text.map(quote),
        Some(_) => text.map(String::from),
        None => {
            if field.value.is_zero() || field.type_id != value_type {
                return None;
            }
            value.renderable().map(|r| r.render())
        }
    }
}

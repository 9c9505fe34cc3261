//! Capabilities a field value can offer to the mapping engine.
//!
//! Numbers and strings are enough for most columns, but some SQL types
//! (a `datetime`, a `decimal`) need custom literal rendering and parsing.
//! Such types implement [`Renderable`] and/or [`Parsable`] and hand them out
//! through [`SqlField`]; everything else about them stays opaque.

/// A value that can render itself as a SQL literal.
pub trait Renderable {
    fn render(&self) -> String;
}

/// A value that can initialize itself from SQL text.
///
/// Returns `false` when the text could not be understood; the value is then
/// left in whatever state the implementation considers empty.
pub trait Parsable {
    fn parse_sql(&mut self, text: &str) -> bool;
}

/// Primitive view of a field, used for the closed kind dispatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Text(&'a str),
    Int(i64),
    Uint(u64),
    Float(f64),
}

impl Scalar<'_> {
    pub fn is_zero(&self) -> bool {
        match *self {
            Scalar::Text(s) => s.is_empty(),
            Scalar::Int(i) => i == 0,
            Scalar::Uint(u) => u == 0,
            Scalar::Float(f) => f == 0.0,
        }
    }
    /// Default textual form of the value.
    pub fn text(&self) -> String {
        match *self {
            Scalar::Text(s) => s.to_string(),
            Scalar::Int(i) => i.to_string(),
            Scalar::Uint(u) => u.to_string(),
            Scalar::Float(f) => f.to_string(),
        }
    }
}

/// Anything that can sit behind a `#[column(..)]` annotation.
///
/// Primitive kinds answer [`SqlField::scalar`] and [`SqlField::assign_text`].
/// Every other kind leaves those at their defaults and may offer a capability
/// instead; a kind offering nothing is skipped by every operation.
pub trait SqlField {
    fn scalar(&self) -> Option<Scalar<'_>> {
        None
    }
    /// Parse `text` into the field. Only meaningful for primitive kinds.
    fn assign_text(&mut self, _text: &str) -> bool {
        false
    }
    /// Default textual form, used when the value is compared against other fields.
    fn text(&self) -> Option<String> {
        self.scalar().map(|s| s.text())
    }
    fn is_zero(&self) -> bool;
    fn renderable(&self) -> Option<&dyn Renderable> {
        None
    }
    fn parsable(&mut self) -> Option<&mut dyn Parsable> {
        None
    }
}

impl SqlField for String {
    fn scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Text(self))
    }
    fn assign_text(&mut self, text: &str) -> bool {
        self.clear();
        self.push_str(text);
        true
    }
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

macro_rules! numeric_field {
    ($variant:ident as $wide:ty: $($t:ty),+) => {
        $(
            impl SqlField for $t {
                fn scalar(&self) -> Option<Scalar<'_>> {
                    Some(Scalar::$variant(*self as $wide))
                }
                fn assign_text(&mut self, text: &str) -> bool {
                    match text.parse::<$t>() {
                        Ok(parsed) => {
                            *self = parsed;
                            true
                        }
                        Err(_) => false,
                    }
                }
                fn text(&self) -> Option<String> {
                    Some(self.to_string())
                }
                fn is_zero(&self) -> bool {
                    *self == 0 as $t
                }
            }
        )+
    };
}

numeric_field!(Int as i64: i8, i16, i32, i64, isize);
numeric_field!(Uint as u64: u8, u16, u32, u64, usize);
numeric_field!(Float as f64: f32, f64);

// Booleans have no SQL rendering of their own here, so they never contribute.
impl SqlField for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

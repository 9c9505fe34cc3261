//! Column annotations for plain structs.
//!
//! A [`Record`] lists its annotated fields in declaration order. Fields
//! without an annotation are invisible to projection, predicate building and
//! population. The [`sql_record!`](crate::sql_record) macro writes the impl:
//!
//! ```
//! use sqlfields::sql_record;
//! use sqlfields::datetime::SqlDateTime;
//! use sqlfields::record::Record;
//!
//! sql_record! {
//!     #[derive(Debug, Default)]
//!     pub struct Call {
//!         #[column("crc")]
//!         pub crc: u32,
//!         #[column("create")]
//!         pub create: SqlDateTime,
//!         #[column("desc")]
//!         pub desc: String,
//!         pub untagged: String,
//!     }
//! }
//! assert_eq!(Call::COLUMNS, &["crc", "create", "desc"]);
//! ```

use std::any::TypeId;

use crate::capability::SqlField;

/// Read access to one annotated field.
pub struct Field<'a> {
    pub column: &'static str,
    pub type_id: TypeId,
    pub value: &'a dyn SqlField,
}

impl<'a> Field<'a> {
    pub fn new<T: SqlField + 'static>(column: &'static str, value: &'a T) -> Self {
        Self { column, type_id: TypeId::of::<T>(), value }
    }
}

/// Write access to one annotated field. `value` is `None` when the field
/// cannot be assigned from a row (a derived or read-only column).
pub struct FieldMut<'a> {
    pub column: &'static str,
    pub value: Option<&'a mut dyn SqlField>,
}

impl<'a> FieldMut<'a> {
    pub fn new<T: SqlField>(column: &'static str, value: &'a mut T) -> Self {
        Self { column, value: Some(value) }
    }
    pub fn read_only(column: &'static str) -> Self {
        Self { column, value: None }
    }
}

pub trait Record {
    /// Annotated column names, in declaration order. Expected to be unique.
    const COLUMNS: &'static [&'static str];
    fn fields(&self) -> Vec<Field<'_>>;
    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}

/// Declares a struct together with its [`Record`] impl.
///
/// Annotate a field with `#[column("name")]` to map it; doc comments go
/// before the annotation.
#[macro_export]
macro_rules! sql_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc = $doc:expr])*
                $(#[column($column:literal)])?
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[doc = $doc])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::record::Record for $name {
            const COLUMNS: &'static [&'static str] = &[ $( $( $column, )? )* ];

            fn fields(&self) -> ::std::vec::Vec<$crate::record::Field<'_>> {
                ::std::vec![
                    $( $( $crate::record::Field::new::<$ty>($column, &self.$field), )? )*
                ]
            }

            fn fields_mut(&mut self) -> ::std::vec::Vec<$crate::record::FieldMut<'_>> {
                ::std::vec![
                    $( $( $crate::record::FieldMut::new::<$ty>($column, &mut self.$field), )? )*
                ]
            }
        }
    };
}

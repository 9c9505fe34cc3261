//! Copies the current row of a [`ResultRows`] into a record.

use tracing::{debug, trace};

use crate::cursor::{QueryCursor, ResultRows};
use crate::error::Result;
use crate::record::Record;

/// Assigns every annotated field whose column holds a value in the current
/// row and returns how many fields were assigned.
///
/// `NULL` cells and columns missing from the result leave the field as it
/// was. Numeric text that does not parse is skipped the same way. Fields of
/// other kinds are handed to their [`Parsable`](crate::capability::Parsable)
/// capability and count as assigned whether or not the text parsed.
pub fn populate<C: QueryCursor, R: Record>(rows: &ResultRows<C>, record: &mut R) -> usize {
    let mut count = 0;
    for field in record.fields_mut() {
        let Some(text) = rows.string_opt(field.column) else {
            trace!(column = field.column, "absent cell");
            continue;
        };
        let Some(value) = field.value else {
            trace!(column = field.column, "field is not settable");
            continue;
        };
        if value.scalar().is_some() {
            if value.assign_text(&text) {
                count += 1;
            } else {
                trace!(column = field.column, text = %text, "unparsable cell");
            }
        } else if let Some(parsable) = value.parsable() {
            parsable.parse_sql(&text);
            count += 1;
        } else {
            trace!(column = field.column, "field kind cannot be populated");
        }
    }
    debug!(populated = count, "row populated");
    count
}

/// Drives the cursor to its end, building one record per row.
///
/// Each record starts from `R::default()`. A failing materialization stops
/// the walk and is returned; a failing advance simply ends it.
pub fn fetch_all<C: QueryCursor, R: Record + Default>(rows: &mut ResultRows<C>) -> Result<Vec<R>> {
    let mut records = Vec::new();
    while rows.advance() {
        rows.scan()?;
        let mut record = R::default();
        populate(rows, &mut record);
        records.push(record);
    }
    Ok(records)
}

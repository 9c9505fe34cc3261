//! Forward-only result cursors and typed cell extraction.
//!
//! [`ResultRows`] wraps any [`QueryCursor`] and keeps one reusable buffer of
//! raw cells for the current row. The buffer and the column name map are
//! owned by a single reader: advance, materialize with [`ResultRows::scan`],
//! then extract as many cells as needed before advancing again.
//!
//! Cells are decoded as UTF-8 the same way for every extractor: invalid
//! sequences become U+FFFD, so such a cell reads as a string but never
//! parses as a number or a time.
//!
//! Extraction never fails. An unknown selector, a `NULL` cell or text that
//! does not parse as the requested kind all come back as `None` (or as the
//! zero value from the non-`_opt` variants).

use std::borrow::Cow;
use std::collections::HashMap;
use std::time::UNIX_EPOCH;

use chrono::{DateTime, Local, Utc};
use rusqlite::types::ValueRef;
use rusqlite::{Params, Rows, Statement};
use tracing::debug;

use crate::error::{Result, SqlFieldsError};

/// One column of the current row; `None` is SQL `NULL`.
pub type Cell = Option<Vec<u8>>;

/// What the wrapper needs from a database result set.
pub trait QueryCursor {
    fn columns(&self) -> Result<Vec<String>>;
    /// Moves to the next row. `false` at the end of the stream and on failure.
    fn advance(&mut self) -> bool;
    /// Copies the current row into `cells`, one slot per column.
    fn scan(&mut self, cells: &mut [Cell]) -> Result<()>;
}

/// Picks a column either by name or by zero-based ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Name(&'a str),
    Ordinal(i64),
}

impl<'a> From<&'a str> for Selector<'a> {
    fn from(name: &'a str) -> Self {
        Selector::Name(name)
    }
}
impl<'a> From<&'a String> for Selector<'a> {
    fn from(name: &'a String) -> Self {
        Selector::Name(name)
    }
}
macro_rules! ordinal_selector {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Selector<'_> {
                fn from(ordinal: $t) -> Self {
                    Selector::Ordinal(i64::try_from(ordinal).unwrap_or(-1))
                }
            }
        )+
    };
}
ordinal_selector!(i32, i64, u32, u64, usize);

pub struct ResultRows<C: QueryCursor> {
    cursor: C,
    columns: Vec<String>,
    names: HashMap<String, usize>,
    cells: Vec<Cell>,
}

impl<C: QueryCursor> ResultRows<C> {
    pub fn new(cursor: C) -> Result<Self> {
        let columns = cursor.columns()?;
        let names = columns
            .iter()
            .enumerate()
            .map(|(i, column)| (column.clone(), i))
            .collect();
        let cells = vec![None; columns.len()];
        debug!(columns = columns.len(), "result rows ready");
        Ok(Self { cursor, columns, names, cells })
    }
    pub fn advance(&mut self) -> bool {
        self.cursor.advance()
    }
    /// Materializes the current row. Must be called before extracting.
    pub fn scan(&mut self) -> Result<()> {
        self.cursor.scan(&mut self.cells)
    }
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn cursor(&self) -> &C {
        &self.cursor
    }
    pub fn into_inner(self) -> C {
        self.cursor
    }
    /// Resolves a selector to a cell index, `None` when it does not resolve.
    pub fn index<'s>(&self, selector: impl Into<Selector<'s>>) -> Option<usize> {
        match selector.into() {
            Selector::Name(name) => self.names.get(name).copied(),
            Selector::Ordinal(ordinal) => usize::try_from(ordinal)
                .ok()
                .filter(|&i| i < self.cells.len()),
        }
    }
    /// The unconverted cell; an error only when the selector does not resolve.
    pub fn raw<'s>(&self, selector: impl Into<Selector<'s>>) -> Result<Option<&[u8]>> {
        let selector = selector.into();
        let index = self
            .index(selector)
            .ok_or_else(|| SqlFieldsError::Lookup(format!("{:?} is out of range", selector)))?;
        Ok(self.cells[index].as_deref())
    }

    fn text<'s>(&self, selector: impl Into<Selector<'s>>) -> Option<Cow<'_, str>> {
        let index = self.index(selector)?;
        let bytes = self.cells[index].as_deref()?;
        Some(String::from_utf8_lossy(bytes))
    }

    pub fn string_opt<'s>(&self, selector: impl Into<Selector<'s>>) -> Option<String> {
        self.text(selector).map(Cow::into_owned)
    }
    pub fn string<'s>(&self, selector: impl Into<Selector<'s>>) -> String {
        self.string_opt(selector).unwrap_or_default()
    }
    pub fn uint32_opt<'s>(&self, selector: impl Into<Selector<'s>>) -> Option<u32> {
        let wide = self.text(selector)?.parse::<i64>().ok()?;
        u32::try_from(wide).ok()
    }
    pub fn uint32<'s>(&self, selector: impl Into<Selector<'s>>) -> u32 {
        self.uint32_opt(selector).unwrap_or_default()
    }
    pub fn int_opt<'s>(&self, selector: impl Into<Selector<'s>>) -> Option<i64> {
        self.text(selector)?.parse().ok()
    }
    pub fn int<'s>(&self, selector: impl Into<Selector<'s>>) -> i64 {
        self.int_opt(selector).unwrap_or_default()
    }
    /// RFC 3339 text, converted to the local zone.
    pub fn time_opt<'s>(&self, selector: impl Into<Selector<'s>>) -> Option<DateTime<Local>> {
        let parsed = DateTime::parse_from_rfc3339(&self.text(selector)?).ok()?;
        Some(parsed.with_timezone(&Local))
    }
    /// Falls back to the Unix epoch.
    pub fn time<'s>(&self, selector: impl Into<Selector<'s>>) -> DateTime<Local> {
        self.time_opt(selector)
            .unwrap_or_else(|| DateTime::<Utc>::from(UNIX_EPOCH).with_timezone(&Local))
    }
}

/// [`QueryCursor`] over a `rusqlite` statement.
///
/// Integers and reals are materialized as their decimal text, text and blobs
/// as their bytes. An error met while advancing ends the stream and is kept
/// for the caller to inspect with [`SqliteCursor::error`].
pub struct SqliteCursor<'stmt> {
    rows: Rows<'stmt>,
    columns: Vec<String>,
    current: Vec<Cell>,
    positioned: bool,
    error: Option<rusqlite::Error>,
}

impl<'stmt> SqliteCursor<'stmt> {
    pub fn query<P: Params>(statement: &'stmt mut Statement<'_>, params: P) -> Result<Self> {
        let columns: Vec<String> = statement
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let rows = statement.query(params)?;
        let current = vec![None; columns.len()];
        Ok(Self { rows, columns, current, positioned: false, error: None })
    }
    pub fn error(&self) -> Option<&rusqlite::Error> {
        self.error.as_ref()
    }
    pub fn take_error(&mut self) -> Option<rusqlite::Error> {
        self.error.take()
    }
}

fn cell_of(value: ValueRef<'_>) -> Cell {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string().into_bytes()),
        ValueRef::Real(f) => Some(f.to_string().into_bytes()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => Some(bytes.to_vec()),
    }
}

impl QueryCursor for SqliteCursor<'_> {
    fn columns(&self) -> Result<Vec<String>> {
        Ok(self.columns.clone())
    }
    fn advance(&mut self) -> bool {
        self.positioned = false;
        if self.error.is_some() {
            return false;
        }
        let row = match self.rows.next() {
            Ok(Some(row)) => row,
            Ok(None) => return false,
            Err(e) => {
                self.error = Some(e);
                return false;
            }
        };
        for (i, slot) in self.current.iter_mut().enumerate() {
            match row.get_ref(i) {
                Ok(value) => *slot = cell_of(value),
                Err(e) => {
                    self.error = Some(e);
                    return false;
                }
            }
        }
        self.positioned = true;
        true
    }
    fn scan(&mut self, cells: &mut [Cell]) -> Result<()> {
        if !self.positioned {
            return Err(SqlFieldsError::Scan("no current row".into()));
        }
        if cells.len() != self.current.len() {
            return Err(SqlFieldsError::Scan(format!(
                "expected {} destination cells, got {}",
                self.current.len(),
                cells.len()
            )));
        }
        cells.clone_from_slice(&self.current);
        Ok(())
    }
}

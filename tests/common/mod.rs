#![allow(dead_code)]

use rusqlite::Connection;
use sqlfields::cursor::{Cell, QueryCursor};
use sqlfields::datetime::SqlDateTime;
use sqlfields::{Result, SqlFieldsError, sql_record};

sql_record! {
    #[derive(Debug, Default, Clone, PartialEq)]
    pub struct Call {
        #[column("crc")]
        pub crc: u32,
        #[column("create")]
        pub create: SqlDateTime,
        #[column("desc")]
        pub desc: String,
        pub untagged: String,
    }
}

pub fn connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "create table call (
            `crc` integer null,
            `create` text null,
            `desc` text null
        );
        insert into call values (10, '2023-05-12 21:41:23', 'it''s ringing');
        insert into call values (20, '2023-05-13', 'second');
        insert into call values (null, null, null);",
    )
    .unwrap();
    conn
}

/// A cursor over canned rows, able to fail on demand.
pub struct ScriptedCursor {
    pub columns: Option<Vec<String>>,
    pub rows: Vec<Vec<Cell>>,
    pub position: Option<usize>,
    pub fail_scan: bool,
}

impl ScriptedCursor {
    pub fn new(columns: &[&str], rows: Vec<Vec<Option<&str>>>) -> Self {
        Self {
            columns: Some(columns.iter().map(|c| c.to_string()).collect()),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| cell.map(|s| s.as_bytes().to_vec())).collect())
                .collect(),
            position: None,
            fail_scan: false,
        }
    }
}

impl QueryCursor for ScriptedCursor {
    fn columns(&self) -> Result<Vec<String>> {
        self.columns
            .clone()
            .ok_or_else(|| SqlFieldsError::Columns("cursor is closed".into()))
    }
    fn advance(&mut self) -> bool {
        let next = self.position.map_or(0, |p| p + 1);
        self.position = Some(next);
        next < self.rows.len()
    }
    fn scan(&mut self, cells: &mut [Cell]) -> Result<()> {
        if self.fail_scan {
            return Err(SqlFieldsError::Scan("type mismatch".into()));
        }
        let row = self
            .position
            .and_then(|p| self.rows.get(p))
            .ok_or_else(|| SqlFieldsError::Scan("no current row".into()))?;
        cells.clone_from_slice(row);
        Ok(())
    }
}

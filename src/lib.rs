//! Sqlfields – maps annotated record structs to SQL text and back.
//!
//! A record is a plain struct whose fields may carry a column annotation
//! (see [`sql_record!`]). From such a record the crate derives:
//! * column lists for a `SELECT` ([`project`]),
//! * bare `WHERE` fragments from a prototype value ([`predicate`]),
//! * populated instances from a result cursor ([`populate`] over [`cursor::ResultRows`]).
//!
//! Values that are neither strings nor numbers take part through two small
//! capabilities, [`capability::Renderable`] and [`capability::Parsable`].
//! [`datetime::SqlDateTime`] (a nullable `DATETIME`) and
//! [`decimal::SqlDecimal`] are the provided ones.
//!
//! ## Modules
//! * [`capability`] – the capability traits and the [`capability::SqlField`] kind dispatch.
//! * [`datetime`] / [`decimal`] – capability-bearing value types.
//! * [`record`] – the [`record::Record`] trait and its macro.
//! * [`cursor`] – the cursor wrapper with typed extraction, plus a `rusqlite` cursor.
//! * [`project`], [`predicate`], [`populate`] – the mapping operations.
//! * [`settings`] – configuration for the demo binary.
//!
//! ## Quick Start
//! ```
//! use rusqlite::Connection;
//! use sqlfields::sql_record;
//! use sqlfields::cursor::{ResultRows, SqliteCursor};
//! use sqlfields::datetime::SqlDateTime;
//! use sqlfields::predicate::{build_conditions, Operator};
//! use sqlfields::project::project;
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
//!
//! let conn = Connection::open_in_memory().unwrap();
//! conn.execute_batch("create table t (crc integer, `create` text, `desc` text);
//!     insert into t values (10, '2023-05-12 21:41:23', 'first');").unwrap();
//!
//! let filter = Call { crc: 10, ..Default::default() };
//! let sql = format!(
//!     "select {} from t where{}",
//!     project::<Call>("t", &[]).join(", "),
//!     build_conditions("t", &filter, Operator::Equal).join(" and ")
//! );
//! let mut statement = conn.prepare(&sql).unwrap();
//! let mut rows = ResultRows::new(SqliteCursor::query(&mut statement, []).unwrap()).unwrap();
//! let calls: Vec<Call> = sqlfields::populate::fetch_all(&mut rows).unwrap();
//! assert_eq!(calls[0].desc, "first");
//! ```

pub mod capability;
pub mod cursor;
pub mod datetime;
pub mod decimal;
pub mod error;
pub mod populate;
pub mod predicate;
pub mod project;
pub mod record;
pub mod settings;

pub use error::{Result, SqlFieldsError};

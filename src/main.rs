//! Demo: maps a small SQLite table through the projection, predicate and
//! population operations and prints the records as JSON.

use rusqlite::{Connection, params};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sqlfields::cursor::{ResultRows, SqliteCursor};
use sqlfields::datetime::SqlDateTime;
use sqlfields::predicate::{Operator, build_conditions};
use sqlfields::project::project_sorted;
use sqlfields::settings::Settings;
use sqlfields::{Result, populate, sql_record};

sql_record! {
    #[derive(Debug, Default, Serialize)]
    pub struct Call {
        #[column("crc")]
        pub crc: u32,
        #[column("create")]
        pub create: SqlDateTime,
        #[column("desc")]
        pub desc: String,
        #[column("rating")]
        pub rating: f64,
    }
}

fn run(settings: &Settings) -> Result<()> {
    let conn = Connection::open(&settings.database)?;
    let table = &settings.table;
    conn.execute_batch(&format!(
        "create table if not exists `{table}` (
            `crc` integer not null,
            `create` text null,
            `desc` text not null,
            `rating` real not null
        );"
    ))?;
    let insert = format!("insert into `{table}` (`crc`, `create`, `desc`, `rating`) values (?, ?, ?, ?)");
    conn.execute(&insert, params![1122, SqlDateTime::now(), "outgoing", 4.5])?;
    conn.execute(&insert, params![1122, SqlDateTime::null(), "missed", 0.0])?;
    conn.execute(&insert, params![3344, SqlDateTime::now(), "incoming", 3.0])?;

    let columns = project_sorted::<Call>(table, &["desc", "crc", "create", "rating"]);
    let filter = Call { crc: 1122, ..Default::default() };
    let conditions = build_conditions(table, &filter, Operator::Equal);
    let sql = format!(
        "select {} from `{table}` where{}",
        columns.join(", "),
        conditions.join(" and ")
    );
    info!(%sql, "querying");

    let mut statement = conn.prepare(&sql)?;
    let mut rows = ResultRows::new(SqliteCursor::query(&mut statement, [])?)?;
    let calls: Vec<Call> = populate::fetch_all(&mut rows)?;
    if let Some(e) = rows.cursor().error() {
        error!(error = %e, "cursor stopped early");
    }
    info!(rows = calls.len(), "query complete");
    for call in &calls {
        match serde_json::to_string(call) {
            Ok(json) => println!("{}", json),
            Err(e) => error!(error = %e, "could not serialize record"),
        }
    }
    Ok(())
}

fn main() {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&settings.log_filter))
        .init();
    info!(database = %settings.database, table = %settings.table, "starting");
    if let Err(e) = run(&settings) {
        error!(error = %e, "demo failed");
        std::process::exit(1);
    }
}

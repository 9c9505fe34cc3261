use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rusqlite::Connection;
use sqlfields::cursor::{ResultRows, SqliteCursor};
use sqlfields::datetime::SqlDateTime;
use sqlfields::populate::fetch_all;
use sqlfields::predicate::{Operator, build_conditions};
use sqlfields::project::{project, project_sorted};
use sqlfields::sql_record;

sql_record! {
    #[derive(Default)]
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

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("project", |b| b.iter(|| project::<Call>(black_box("t"), &[])));
    c.bench_function("project sorted", |b| {
        b.iter(|| project_sorted::<Call>(black_box("t"), &["rating", "desc", "crc"]))
    });

    let filter = Call { crc: 1122, desc: "it's".into(), rating: 4.5, ..Default::default() };
    c.bench_function("conditions", |b| b.iter(|| build_conditions("t", black_box(&filter), Operator::Equal)));

    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("create table call (`crc` integer, `create` text, `desc` text, `rating` real);")
        .unwrap();
    for i in 0..1000 {
        conn.execute(
            "insert into call values (?, '2023-05-12 21:41:23', 'row', ?)",
            rusqlite::params![i, i as f64 / 10.0],
        )
        .unwrap();
    }
    let sql = format!("select {} from call", project::<Call>("call", &[]).join(", "));
    c.bench_function("populate 1k", |b| {
        b.iter(|| {
            let mut statement = conn.prepare_cached(&sql).unwrap();
            let mut rows = ResultRows::new(SqliteCursor::query(&mut statement, []).unwrap()).unwrap();
            let calls: Vec<Call> = fetch_all(&mut rows).unwrap();
            black_box(calls)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

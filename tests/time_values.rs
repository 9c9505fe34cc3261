use chrono::{Local, TimeZone, Timelike, Utc};
use sqlfields::capability::{Parsable, Renderable, SqlField};
use sqlfields::datetime::{SqlDateTime, format_time};

fn parsed(text: &str) -> (SqlDateTime, bool) {
    let mut value = SqlDateTime::null();
    let ok = value.parse_sql(text);
    (value, ok)
}

#[test]
fn null_renders_as_now_or_null() {
    let null = SqlDateTime::null();
    assert!(null.is_null());
    assert!(SqlDateTime::default().is_null());
    assert_eq!(null.render(), "NOW()");
    assert_eq!(null.render_nullable(), "NULL");
    assert_eq!(null.to_epoch(), 0);
    assert_eq!(null.zone().local_minus_utc(), 0);
    assert!(null.instant().is_none());
    assert!(null.is_zero());
}

#[test]
fn full_literal_round_trip() {
    let (value, ok) = parsed("2023-05-12 21:41:23");
    assert!(ok);
    assert!(!value.is_null());
    assert_eq!(value.render(), "'2023-05-12 21:41:23'");
    assert_eq!(value.render_nullable(), "'2023-05-12 21:41:23'");
    let expected = Local.with_ymd_and_hms(2023, 5, 12, 21, 41, 23).earliest().unwrap();
    assert_eq!(value.to_epoch(), expected.timestamp());
    assert_eq!(value.zone(), *expected.offset());
}

#[test]
fn date_only_literal_is_midnight() {
    let (value, ok) = parsed("2023-05-13");
    assert!(ok);
    assert_eq!(value.render(), "'2023-05-13 00:00:00'");
    let instant = value.instant().unwrap();
    assert_eq!((instant.hour(), instant.minute(), instant.second()), (0, 0, 0));
}

#[test]
fn bad_literals_reset_to_null() {
    for text in [
        "",
        "yesterday",
        "2023-13-01",
        "2023-02-30 10:00:00",
        "2023-05-12 21:41",
        "2023-05-12x",
        "2023-05-12 junk",
        "2023-05-12 21:41:23 garbage",
    ] {
        let mut value = SqlDateTime::now();
        assert!(!value.parse_sql(text), "{text} should not parse");
        assert!(value.is_null(), "{text} should leave the value NULL");
    }
}

#[test]
fn render_then_parse_keeps_the_second() {
    let now = SqlDateTime::now();
    let rendered = now.render();
    let (back, ok) = parsed(rendered.trim_matches('\''));
    assert!(ok);
    assert_eq!(back.to_epoch(), now.to_epoch());
    assert_eq!(back.render(), rendered);
}

#[test]
fn renders_in_stored_zone() {
    let utc = Utc.with_ymd_and_hms(2001, 2, 3, 4, 5, 6).unwrap();
    let value = SqlDateTime::from(utc);
    assert_eq!(value.render(), "'2001-02-03 04:05:06'");
    assert_eq!(value.to_epoch(), utc.timestamp());
    assert_eq!(value.zone().local_minus_utc(), 0);
}

#[test]
fn serializes_as_epoch_seconds() {
    assert_eq!(serde_json::to_string(&SqlDateTime::null()).unwrap(), "0");
    let value = SqlDateTime::from(Utc.with_ymd_and_hms(2023, 5, 12, 19, 41, 23).unwrap());
    assert_eq!(serde_json::to_string(&value).unwrap(), "1683920483");

    let back: SqlDateTime = serde_json::from_str("1683920483").unwrap();
    assert_eq!(back.to_epoch(), 1683920483);
    let null: SqlDateTime = serde_json::from_str("0").unwrap();
    assert!(null.is_null());
}

#[test]
fn binds_through_rusqlite() {
    let conn = rusqlite::Connection::open_in_memory().unwrap();
    conn.execute_batch("create table t (at text null);").unwrap();
    let (value, _) = parsed("1999-12-31 23:59:59");
    conn.execute("insert into t values (?1), (?2)", rusqlite::params![value, SqlDateTime::null()])
        .unwrap();
    let mut statement = conn.prepare("select at from t order by rowid").unwrap();
    let stored: Vec<Option<String>> = statement
        .query_map([], |row| row.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(stored, vec![Some("1999-12-31 23:59:59".to_string()), None]);

    let restored: Vec<SqlDateTime> = statement
        .query_map([], |row| row.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(restored[0], value);
    assert!(restored[1].is_null());
}

#[test]
fn fractional_seconds_are_dropped() {
    let (value, ok) = parsed("2023-05-12 21:41:23.250");
    assert!(ok);
    assert_eq!(value.render(), "'2023-05-12 21:41:23'");
}

#[test]
fn format_time_in_any_zone() {
    let utc = Utc.with_ymd_and_hms(2023, 5, 2, 7, 4, 9).unwrap();
    assert_eq!(format_time(&utc), "2023-05-02 07:04:09");
    let local = Local.with_ymd_and_hms(987, 1, 1, 0, 0, 0).earliest().unwrap();
    assert_eq!(format_time(&local), "987-01-01 00:00:00");
}

//! SELECT column lists built from a record's annotations.

use crate::record::Record;

/// `` `table`.`column` ``, or just `` `column` `` for an empty table name.
pub fn qualify(table: &str, column: &str) -> String {
    if table.is_empty() {
        format!("`{}`", column)
    } else {
        format!("`{}`.`{}`", table, column)
    }
}

/// The annotated columns of `R` in declaration order.
///
/// A non-empty `subset` restricts the output to the columns it names; the
/// order stays that of the declaration whatever the order of `subset`.
///
/// ```ignore
/// project::<Call>("t", &[])             // ["`t`.`crc`", "`t`.`create`", "`t`.`desc`"]
/// project::<Call>("t", &["desc", "crc"]) // ["`t`.`crc`", "`t`.`desc`"]
/// ```
pub fn project<R: Record>(table: &str, subset: &[&str]) -> Vec<String> {
    R::COLUMNS
        .iter()
        .filter(|column| subset.is_empty() || subset.contains(*column))
        .map(|column| qualify(table, column))
        .collect()
}

/// Same columns as [`project`], but the ones named in `subset` come first and
/// in the order `subset` gives them.
pub fn project_sorted<R: Record>(table: &str, subset: &[&str]) -> Vec<String> {
    let mut projected = project::<R>(table, subset);
    if subset.is_empty() || projected.is_empty() {
        return projected;
    }
    let mut insert = 0;
    for column in subset {
        let wanted = qualify(table, column);
        // only look past the filled prefix so a repeated name is placed once
        if let Some(offset) = projected[insert..].iter().position(|c| *c == wanted) {
            projected.swap(insert, insert + offset);
            insert += 1;
        }
    }
    projected
}

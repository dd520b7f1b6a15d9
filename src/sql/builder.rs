//! Builds the Dog table DDL and parameterized SELECT / INSERT statements.

use crate::model::{SortAttribute, SortOrder};

pub const DOGS_TABLE: &str = "dogs";

const COLUMNS: &str = r#""id", "name", "color", "tail_length", "weight""#;

/// Quote identifier for PostgreSQL (safe: only from typed enums and constants).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

pub fn drop_table() -> String {
    format!("DROP TABLE IF EXISTS {}", quoted(DOGS_TABLE))
}

pub fn create_table() -> String {
    format!(
        r#"CREATE TABLE {} (
    "id" SERIAL PRIMARY KEY,
    "name" VARCHAR(255) NOT NULL UNIQUE,
    "color" VARCHAR(255) NOT NULL,
    "tail_length" INTEGER NOT NULL CHECK ("tail_length" >= 0),
    "weight" INTEGER NOT NULL
)"#,
        quoted(DOGS_TABLE)
    )
}

/// SELECT one page. Params: $1 = limit, $2 = offset. Ties on the sort column fall back to id.
pub fn select_page(attribute: SortAttribute, order: SortOrder) -> String {
    let mut order_by = format!("{} {}", quoted(attribute.column()), order);
    if attribute != SortAttribute::Id {
        order_by.push_str(&format!(", {} ASC", quoted("id")));
    }
    format!(
        "SELECT {} FROM {} ORDER BY {} LIMIT $1 OFFSET $2",
        COLUMNS,
        quoted(DOGS_TABLE),
        order_by
    )
}

/// INSERT one row. Params: $1 name, $2 color, $3 tail_length, $4 weight.
pub fn insert() -> String {
    format!(
        r#"INSERT INTO {} ("name", "color", "tail_length", "weight") VALUES ($1, $2, $3, $4) RETURNING {}"#,
        quoted(DOGS_TABLE),
        COLUMNS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_query() {
        assert_eq!(
            select_page(SortAttribute::Name, SortOrder::Asc),
            r#"SELECT "id", "name", "color", "tail_length", "weight" FROM "dogs" ORDER BY "name" ASC, "id" ASC LIMIT $1 OFFSET $2"#
        );
    }

    #[test]
    fn id_sort_has_no_tiebreak() {
        let sql = select_page(SortAttribute::Id, SortOrder::Desc);
        assert!(sql.ends_with(r#"ORDER BY "id" DESC LIMIT $1 OFFSET $2"#), "{}", sql);
    }

    #[test]
    fn weight_desc() {
        let sql = select_page(SortAttribute::Weight, SortOrder::Desc);
        assert!(sql.contains(r#"ORDER BY "weight" DESC, "id" ASC"#), "{}", sql);
    }

    #[test]
    fn ddl_carries_constraints() {
        let ddl = create_table();
        assert!(ddl.contains(r#""name" VARCHAR(255) NOT NULL UNIQUE"#));
        assert!(ddl.contains(r#"CHECK ("tail_length" >= 0)"#));
        assert_eq!(drop_table(), r#"DROP TABLE IF EXISTS "dogs""#);
    }

    #[test]
    fn insert_returns_row() {
        let sql = insert();
        assert!(sql.starts_with(r#"INSERT INTO "dogs""#));
        assert!(sql.ends_with(COLUMNS));
    }
}

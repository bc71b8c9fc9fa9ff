//! Static table specs for the user service.
//!
//! These specs drive DDL bootstrap, record construction, and row decoding.

use flathaus::prelude::*;

pub static USERS: TableSpec = TableSpec::new(
    "users",
    &[
        ColumnSpec::new("id", "BIGSERIAL").primary_key(),
        ColumnSpec::new("username", "TEXT").unique().indexed(),
        ColumnSpec::new("password", "TEXT"),
        ColumnSpec::new("is_active", "BOOLEAN").default_sql("TRUE"),
    ],
);

pub static ITEMS: TableSpec = TableSpec::new(
    "items",
    &[
        ColumnSpec::new("id", "BIGSERIAL").primary_key(),
        ColumnSpec::new("title", "TEXT").indexed(),
        ColumnSpec::new("description", "TEXT").nullable().indexed(),
        ColumnSpec::new("owner_id", "BIGINT")
            .nullable()
            .references("users", "id"),
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_ddl() {
        assert_eq!(
            USERS.create_table_sql(),
            "CREATE TABLE IF NOT EXISTS users (id BIGSERIAL PRIMARY KEY, \
             username TEXT NOT NULL UNIQUE, password TEXT NOT NULL, \
             is_active BOOLEAN NOT NULL DEFAULT TRUE)"
        );
    }

    #[test]
    fn test_items_reference_users() {
        let owner = ITEMS.column("owner_id").unwrap();
        assert_eq!(owner.references, Some(("users", "id")));
    }
}

//! SQL identifier validation
//!
//! Table and column names pass through this check before any DDL or DML is
//! generated from them. Identifiers come from static specs, so failures are
//! configuration errors and surface at registration time.

use thiserror::Error;

/// PostgreSQL identifier length limit
const MAX_LENGTH: usize = 63;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IdentifierError {
    #[error("identifier cannot be empty")]
    Empty,

    #[error("identifier '{name}' is too long: {length} characters (max {MAX_LENGTH})")]
    TooLong { name: String, length: usize },

    #[error("identifier '{0}' must start with a letter or underscore")]
    InvalidStart(String),

    #[error("identifier '{0}' may only contain alphanumeric characters and underscores")]
    InvalidCharacters(String),

    #[error("identifier '{0}' is a reserved SQL keyword")]
    Reserved(String),
}

/// Validate a table or column name for safe use in generated SQL
pub fn validate_identifier(name: &str) -> Result<(), IdentifierError> {
    if name.is_empty() {
        return Err(IdentifierError::Empty);
    }

    if name.len() > MAX_LENGTH {
        return Err(IdentifierError::TooLong {
            name: name.to_string(),
            length: name.len(),
        });
    }

    let first = name.chars().next().ok_or(IdentifierError::Empty)?;
    if !first.is_ascii_alphabetic() && first != '_' {
        return Err(IdentifierError::InvalidStart(name.to_string()));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(IdentifierError::InvalidCharacters(name.to_string()));
    }

    if is_reserved_keyword(name) {
        return Err(IdentifierError::Reserved(name.to_string()));
    }

    Ok(())
}

/// Keywords that would collide with the SQL this crate family generates
fn is_reserved_keyword(name: &str) -> bool {
    const RESERVED_KEYWORDS: &[&str] = &[
        "SELECT", "INSERT", "UPDATE", "DELETE", "FROM", "WHERE", "JOIN", "ON", "AS", "AND", "OR",
        "NOT", "NULL", "TRUE", "FALSE", "ORDER", "BY", "GROUP", "HAVING", "LIMIT", "OFFSET",
        "UNION", "ALL", "DISTINCT", "CREATE", "DROP", "ALTER", "TABLE", "INDEX", "PRIMARY", "KEY",
        "FOREIGN", "REFERENCES", "UNIQUE", "CHECK", "DEFAULT", "CONSTRAINT", "COLUMN", "RETURNING",
        "VALUES", "INTO", "EXISTS", "IN", "LIKE", "BETWEEN", "CASE", "WHEN", "THEN", "ELSE", "END",
    ];

    RESERVED_KEYWORDS.contains(&name.to_ascii_uppercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        let valid = ["users", "user_items", "_private", "items2", "a", &"a".repeat(63)];
        for name in valid {
            assert!(
                validate_identifier(name).is_ok(),
                "should accept valid identifier: {}",
                name
            );
        }
    }

    #[test]
    fn test_invalid_identifiers() {
        let cases = [
            ("", IdentifierError::Empty),
            (
                "2items",
                IdentifierError::InvalidStart("2items".to_string()),
            ),
            (
                "user-name",
                IdentifierError::InvalidCharacters("user-name".to_string()),
            ),
            (
                "user name",
                IdentifierError::InvalidCharacters("user name".to_string()),
            ),
            ("select", IdentifierError::Reserved("select".to_string())),
            ("RETURNING", IdentifierError::Reserved("RETURNING".to_string())),
        ];

        for (name, expected) in cases {
            assert_eq!(validate_identifier(name).unwrap_err(), expected);
        }
    }

    #[test]
    fn test_too_long_identifier() {
        let name = "a".repeat(64);
        match validate_identifier(&name).unwrap_err() {
            IdentifierError::TooLong { length, .. } => assert_eq!(length, 64),
            other => panic!("expected TooLong, got {:?}", other),
        }
    }
}

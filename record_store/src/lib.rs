//! Record store - persistence layer for flathaus
//!
//! This crate persists `TableRecord`s produced by schema conversion and
//! fetches rows back as field maps, driven entirely by static table specs.

pub mod errors;
pub mod pg;
pub mod sql;
pub mod traits;

pub use errors::StoreError;
pub use pg::PgRecordStore;
pub use traits::RecordStore;

//! Shared application state for request handlers.

use flathaus::prelude::*;

pub struct AppState {
    flathaus: Flathaus,
    store: PgRecordStore,
}

impl AppState {
    pub fn new(flathaus: Flathaus) -> Self {
        let store = PgRecordStore::new(flathaus.pool().clone());
        Self { flathaus, store }
    }

    pub fn flathaus(&self) -> &Flathaus {
        &self.flathaus
    }

    pub fn registry(&self) -> &SchemaRegistry {
        self.flathaus.registry()
    }

    pub fn store(&self) -> &PgRecordStore {
        &self.store
    }
}

use log::{debug, info};
use rusqlite::{config::DbConfig, Connection, OpenFlags};

use super::error::StoreError;
use super::schema::{CREATE_TASKS, CREATE_USERS};
use crate::modules::config::settings::redact_connection_string;

/// Entry point for every store operation.
///
/// The gateway only remembers where the store lives. Each operation opens its
/// own [Connection] through [Gateway::connect] and the connection is closed
/// when it goes out of scope, whether the operation succeeded or not.
#[derive(Debug, Clone)]
pub struct Gateway {
    database_url: String,
}

impl Gateway {
    /// Point a gateway at a store without touching it
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// Point a gateway at a store and create the tables if they don't exist
    pub fn open(database_url: impl Into<String>) -> Result<Self, StoreError> {
        let gateway = Self::new(database_url);
        gateway.ensure_schema()?;
        Ok(gateway)
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Create the users and tasks tables iff they don't exist
    pub fn ensure_schema(&self) -> Result<(), StoreError> {
        let connection = self.connect()?;
        connection.execute(CREATE_USERS, ())?;
        connection.execute(CREATE_TASKS, ())?;
        info!(
            "Schema ready at {}",
            redact_connection_string(&self.database_url)
        );
        Ok(())
    }

    /// Open a fresh connection with foreign keys enforced
    pub(crate) fn connect(&self) -> Result<Connection, StoreError> {
        debug!(
            "Opening connection to {}",
            redact_connection_string(&self.database_url)
        );
        let connection = Connection::open_with_flags(
            &self.database_url,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| StoreError::Connection(e.to_string()))?;
        connection.set_db_config(DbConfig::SQLITE_DBCONFIG_ENABLE_FKEY, true)?;
        Ok(connection)
    }
}

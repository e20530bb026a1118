//! SQLite persistence layer for Scoratis.
//!
//! This crate provides async database operations for journals, folders,
//! conversations, chat messages, and video watch history using SQLx with
//! SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{journal, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:scoratis.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Create a journal entry for the default user
//!     let id = journal::create_journal(
//!         db.pool(),
//!         "Torque notes",
//!         "Torque is twist-force.",
//!         &["physics".to_string()],
//!         None,
//!         database::DEFAULT_USER_ID,
//!     )
//!     .await?;
//!     println!("created journal {id}");
//!
//!     Ok(())
//! }
//! ```

pub mod conversation;
pub mod error;
pub mod folder;
pub mod journal;
pub mod models;
pub mod stats;
pub mod video_history;

pub use error::{DatabaseError, Result};
pub use models::{
    ChatMessage, Conversation, ConversationListEntry, Folder, FolderPatch, Journal, JournalPatch,
    UserStats, VideoHistoryEntry,
};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// The single seeded account every entity belongs to.
///
/// The schema supports multiple owners, but this deployment runs with one.
pub const DEFAULT_USER_ID: i64 = 1;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 20;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist, or
    /// `sqlite::memory:` for tests.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up
    /// to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
pub(crate) async fn test_db() -> Database {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.migrate().await.unwrap();
    db
}

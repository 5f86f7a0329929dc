//! Node Manager Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the node
//! manager backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for seeding servers, events, inbounds and users.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_server_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_server_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let server = factory::create_server(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

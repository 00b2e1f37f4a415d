//! Cross-service state-verification harness for the Agora social API
//!
//! Drives the service under test through its HTTP API: creates, mutates
//! and tears down domain resources (users, profiles, posts, comments,
//! connection requests, skills), then independently re-derives each
//! resource's observable state through a second, divergent read path — a
//! paginated search index rather than a direct lookup — and asserts the
//! two views agree.
//!
//! All state lives in the service under test; the harness owns only
//! references (ids plus last-known field values) used for assertions and
//! teardown. Execution is sequential: every operation is awaited to
//! completion before the next is issued, and there is no retry or backoff
//! anywhere.
//!
//! # Example
//!
//! ```rust,no_run
//! use agora_harness::{ApiClient, FixtureTracker, HarnessConfig, Role};
//!
//! # async fn example() -> agora_harness::Result<()> {
//! let api = ApiClient::new(HarnessConfig::from_env());
//! let mut fixtures = FixtureTracker::new();
//!
//! let admin = api.register_user(Role::Admin).await?;
//! let author = api.register_user(Role::User).await?;
//! fixtures.user(&author);
//!
//! let post = api.create_post(&author, true).await?;
//! fixtures.post(&author, &post);
//!
//! let liked = api.like_post(&admin, post.post_id).await?;
//! agora_harness::validate::verify_post_like(&post, &liked)?;
//!
//! fixtures.teardown(&api, &admin).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod db;
pub mod endpoints;
pub mod error;
pub mod fixtures;
pub mod oracle;
pub mod teardown;
pub mod types;
pub mod validate;

// Re-export main types
pub use auth::{AuthContext, Credentials};
pub use client::ApiClient;
pub use config::HarnessConfig;
pub use db::StoreHandle;
pub use error::{HarnessError, Result};
pub use oracle::{SearchOracle, SearchPage};
pub use teardown::FixtureTracker;
pub use types::*;

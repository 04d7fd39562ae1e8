//! # blog-backend
//!
//! Minimal blogging backend: accepts posts and per-post comments, persists
//! them, and serves them back most recent first.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PostStore / CommentStore (service/)
//!     ├── Post / Comment stamping (domain/)
//!     │
//!     └── DocumentCollection: one JSON-lines file per collection (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;

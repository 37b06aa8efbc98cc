//! ElastiCache model types for RustStack.
//!
//! This crate provides the ElastiCache API (`2015-02-02`) request and response
//! shapes, the operation catalogue and the service fault codes. Shapes are
//! declared as member tables with [`elasticache_shape!`] and
//! [`elasticache_enum!`]; every member is an optional public field with a
//! fluent `with_*` builder, and records render as `{Name: value, ...}`.
//!
//! ```
//! use ruststack_elasticache_model::input::CreateReplicationGroupRequest;
//!
//! let request = CreateReplicationGroupRequest::default()
//!     .with_replication_group_id("my-repl-group")
//!     .with_num_cache_clusters(2)
//!     .with_automatic_failover_enabled(true);
//!
//! assert_eq!(request.kms_key_id, None);
//! assert_eq!(
//!     request.to_string(),
//!     "{ReplicationGroupId: my-repl-group, AutomaticFailoverEnabled: true, NumCacheClusters: 2}"
//! );
//! ```
// "ElastiCache" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod shape;
pub mod types;

pub use error::{ElastiCacheError, ElastiCacheErrorCode};
pub use operations::{API_VERSION, ElastiCacheInput, ElastiCacheOperation};
pub use shape::{Double, Shape, Timestamp};

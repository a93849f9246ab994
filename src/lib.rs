//! Compressed snapshot persistence and dotted-key grouping utilities.
//!
//! Two independent, stateless capabilities:
//!
//! - [`write_data`] / [`read_data`]: persist any `serde`-serializable value
//!   to a single zstd-compressed bincode file and read it back unchanged.
//! - [`top_keys`]: map an ordered sequence of dotted hierarchy keys to their
//!   top-level namespace segments, position by position.
//!
//! # Persistence
//!
//! Values are serialized with bincode and compressed with zstd at a fixed
//! fast level, so files written by different invocations stay mutually
//! compatible. One file holds exactly one value: a write creates or
//! truncates the file, a read decodes the whole of it. Concurrent access to
//! a single path is not synchronized by this crate; callers that need it
//! must arrange their own exclusion.
//!
//! ```no_run
//! use std::collections::HashMap;
//! use datastash::{read_data, write_data};
//!
//! let mut settings = HashMap::new();
//! settings.insert("net.timeout".to_string(), 30u32);
//! write_data("settings.zst", &settings)?;
//!
//! let restored: HashMap<String, u32> = read_data("settings.zst")?;
//! assert_eq!(restored, settings);
//! # Ok::<(), datastash::StashError>(())
//! ```
//!
//! # Key grouping
//!
//! ```
//! use datastash::top_keys;
//!
//! let keys = ["net.timeout", "net.retries", "verbose"];
//! assert_eq!(top_keys(&keys), vec!["net", "net", "verbose"]);
//! ```

pub mod error;
pub mod keys;
pub mod snapshot;

// Re-export the full surface at the crate root for ergonomic imports.
pub use error::{StashError, StashResult};
pub use keys::top_keys;
pub use snapshot::{read_data, write_data, COMPRESSION_LEVEL};

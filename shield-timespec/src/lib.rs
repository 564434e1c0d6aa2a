//! SHIELD timespec - schedule phrase compiler and next-occurrence engine
//!
//! Turns human-readable schedules ("daily at 4pm", "3rd tuesday at 23:15",
//! "every 15 minutes") into a [`Spec`], computes the next matching instant,
//! renders specs back to canonical text, and sizes retention windows.
//!
//! Architecture:
//! ```text
//! Schedule phrase ("every day at 4pm")
//!     ↓
//! Lexer (keyword table → tokens)
//!     ↓
//! Parser (recursive descent → Spec)
//!     ↓
//! Spec ──→ next / upcoming (chrono calendar walk)
//!      ──→ Display (canonical phrase, re-parseable)
//!      ──→ keep_n (retention count)
//! ```
//!
//! ```
//! use shield_timespec::parse;
//!
//! let spec = parse("every day at 4pm").unwrap();
//! assert_eq!(spec.to_string(), "daily at 16:00");
//! assert_eq!(spec.keep_n(7), 7);
//! ```

pub mod config;
pub mod error;
pub mod lexer;
pub mod next;
pub mod parser;
pub mod render;
pub mod retention;
pub mod spec;

// Re-export key types for convenience
pub use config::{PreviewConfig, MAX_PREVIEW_OCCURRENCES, MAX_RETENTION_DAYS};
pub use error::*;
pub use parser::{parse, round_trip};
pub use render::{ordinal_suffix, ClockTime};
pub use retention::KEEP_UNDEFINED;
pub use spec::*;

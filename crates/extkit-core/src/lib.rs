//! extkit - stateless helpers for web applications.
//!
//! This crate provides small, independent building blocks:
//!
//! - [`text`]: HTML-aware truncation that keeps markup balanced, plain and
//!   word-boundary truncation, tag stripping, slugs and MD5 digests
//! - [`time`]: unix timestamp conversion and date-range checks
//! - [`seq`]: partitioning, pagination and de-duplication of sequences
//! - [`config`]: JSON configuration for slug length and trailing text
//!
//! Every function is pure and safe to call from any thread.
//!
//! ```
//! use extkit_core::text::{slugify, strip_html, truncate_html};
//!
//! assert_eq!(truncate_html("<p>Hello <b>World</b></p>", 5, ""), "<p>Hello</p>");
//! assert_eq!(strip_html("<div>a<br/>b</div>"), "ab");
//! assert_eq!(slugify("This is a test (with brackets)"), "this-is-a-test");
//! ```

pub mod config;
pub mod error;
pub mod seq;
pub mod text;
pub mod time;

pub use config::{Config, SlugOptions, TruncateOptions};
pub use error::{Error, Result};
pub use seq::SeqExt;

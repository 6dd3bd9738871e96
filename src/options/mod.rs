//! # Options Module
//!
//! Parsed representation of a hash's options block.
//!
//! ## Overview
//!
//! A location hash such as `#gallery[autoplay,speed=2]` carries a slug
//! (`gallery`) and an options block (`autoplay,speed=2`). This module turns the
//! raw block into an [`OptionSet`] that answers lookups, and provides
//! [`OptionPairs`], the ordered input accepted by [`crate::serialize`].
//!
//! ## Wire Format
//!
//! The block is a comma-separated list of fragments:
//!
//! - `key` - a bare key, stored as [`OptionValue::Flag`]
//! - `key=value` - split on the first `=`, stored as [`OptionValue::Text`]
//!
//! No escaping exists. Keys or values containing `,`, `=`, `[` or `]` do not
//! survive a serialize/parse round trip and are unsupported.
//!
//! ## Example
//!
//! ```rust
//! use hashrouter::options::{OptionSet, OptionValue};
//!
//! let opts = OptionSet::new("gallery", "autoplay,speed=2");
//! assert_eq!(opts.slug(), "gallery");
//! assert_eq!(opts.get("autoplay"), Some(&OptionValue::Flag));
//! assert_eq!(opts.get("speed").and_then(OptionValue::as_str), Some("2"));
//! assert!(opts.is("autoplay"));
//! assert!(!opts.is("missing"));
//! ```

mod core;
mod pairs;

pub use self::core::{OptionSet, OptionValue, OptionVec, MAX_INLINE_OPTIONS};
pub use pairs::OptionPairs;

//! # hashrouter
//!
//! **hashrouter** is a tiny client-side router driven by the location hash.
//! A hash like `#gallery[autoplay,speed=2]` names a slug (`gallery`) and
//! carries an options block (`autoplay,speed=2`).
//!
//! ## Overview
//!
//! The crate is a one-shot pipeline:
//!
//! ```text
//! host hash change -> parse(hash) -> OptionSet -> caller's handler
//! ```
//!
//! - **[`options`]** - [`OptionSet`] lookups and the ordered [`OptionPairs`] input
//! - **[`hash`]** - pure [`parse`] and [`serialize`]
//! - **[`location`]** - the [`Location`] host capability, [`navigate`], [`start`]
//!   and the in-process [`MemoryLocation`]
//! - **[`router`]** - the [`Router`] slug registry
//! - **[`logging`]** - subscriber setup for binaries
//! - **[`cli`]** - the `hashrouter` command line
//!
//! ## Quick Start
//!
//! ```rust
//! use hashrouter::{start, MemoryLocation, Router};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let mut router: Router<&'static str> = Router::new();
//! router.add("inbox", "Inbox").add("settings", "Settings");
//!
//! let location = MemoryLocation::new("http://app.test/#inbox").unwrap();
//! let titles = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&titles);
//! start(&location, move |opts| {
//!     let title = router.route(&opts).copied().unwrap_or("Not found");
//!     sink.borrow_mut().push((title, opts.is("dark")));
//! });
//!
//! location.set_hash("#settings[dark]");
//! assert_eq!(*titles.borrow(), vec![("Inbox", false), ("Settings", true)]);
//! ```
//!
//! ## Error Handling
//!
//! Nothing in the routing path fails. Unmatched hashes become an empty slug
//! with no options and missing keys read as `None`. Only constructing a
//! [`MemoryLocation`] from an invalid URL returns an error.
//!
//! ## Wire Format Limitation
//!
//! Keys and values are not escaped. Any containing `,`, `=`, `[` or `]` will
//! not round-trip through [`serialize`] and [`parse`].

pub mod cli;
pub mod hash;
pub mod location;
pub mod logging;
pub mod options;
pub mod router;

pub use hash::{parse, serialize};
pub use location::{navigate, start, HashListener, Location, MemoryLocation};
pub use options::{OptionPairs, OptionSet, OptionValue};
pub use router::Router;

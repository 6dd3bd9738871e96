//! # Router Module
//!
//! Slug registry for hash routing.
//!
//! ## Overview
//!
//! A [`Router`] maps hash slugs (the part of `#slug[options]` before the
//! options block) to caller-defined values, typically handlers. It is built
//! once at startup, grows through [`Router::add`], and never shrinks.
//!
//! The static helpers that go with it live at the crate root:
//! [`parse`](crate::parse), [`serialize`](crate::serialize),
//! [`navigate`](crate::navigate) and [`start`](crate::start).
//!
//! ## Example
//!
//! ```rust
//! use hashrouter::{parse, Router};
//!
//! let mut router: Router<fn() -> &'static str> = Router::new();
//! router.add("inbox", || "inbox view").add("compose", || "compose view");
//!
//! let opts = parse("#compose[to=ops]");
//! let view = router.route(&opts).map(|handler| handler());
//! assert_eq!(view, Some("compose view"));
//! ```

mod core;
#[cfg(test)]
mod tests;

pub use self::core::Router;

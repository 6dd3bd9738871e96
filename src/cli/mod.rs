//! # CLI Module
//!
//! Command-line front end for poking at hashes without a browser.
//!
//! ## Commands
//!
//! ### `parse`
//!
//! Print the slug and options of a hash as JSON:
//!
//! ```bash
//! hashrouter parse '#foo[a=1,b]'
//! # {"slug":"foo","options":{"a":"1","b":true}}
//! ```
//!
//! ### `serialize`
//!
//! Render `key` / `key=value` arguments as an options block:
//!
//! ```bash
//! hashrouter serialize a b=2
//! # [a,b=2]
//! ```
//!
//! ### `navigate`
//!
//! Navigate an in-memory location and print the URL it ended up on:
//!
//! ```bash
//! hashrouter navigate '#list' page=2 --from http://app.test/
//! # http://app.test/#list[page=2]
//! ```
//!
//! ### `watch`
//!
//! Start a listener, read one hash per line from stdin and print one JSON
//! record per hash change. `--route` marks slugs as registered:
//!
//! ```bash
//! printf '#inbox\n#compose[to=ops]\n' | hashrouter watch --route inbox
//! ```

mod commands;


pub use commands::{run, run_cli, Cli, Commands, DEFAULT_LOCATION};

//! # Location Module
//!
//! The side-effecting half of hash routing: reading the current hash,
//! navigating, and listening for hash changes.
//!
//! ## Overview
//!
//! The host environment (a browser, a webview, a test harness) is abstracted
//! behind the [`Location`] trait instead of a global. [`start`] registers
//! exactly one listener against it and [`navigate`] asks it to load a URL.
//! [`MemoryLocation`] is an in-process host used by the CLI and tests.
//!
//! ## Event Model
//!
//! Everything runs on one thread. The host delivers hash changes one at a
//! time and each listener call runs to completion before the next starts.
//! There is no unsubscribe: calling [`start`] again replaces the listener.
//!
//! ```rust
//! use hashrouter::{navigate, start, MemoryLocation, OptionPairs};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let location = MemoryLocation::new("http://app.test/#inbox").unwrap();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&seen);
//! start(&location, move |opts| sink.borrow_mut().push(opts.slug().to_string()));
//!
//! navigate(&location, "#message", Some(&OptionPairs::new().set("id", 7)));
//! assert_eq!(*seen.borrow(), vec!["inbox", "message"]);
//! ```

mod memory;

pub use memory::MemoryLocation;

use crate::hash::{parse, serialize};
use crate::options::{OptionPairs, OptionSet};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, info};

/// Callback invoked by the host with the new hash (including the leading `#`).
pub type HashListener = Box<dyn FnMut(&str)>;

/// Capabilities a host environment provides for hash routing.
pub trait Location {
    /// Current hash including the leading `#`, or `""` when there is none.
    fn hash(&self) -> String;

    /// Navigate to `url`. Relative URLs resolve against the current location.
    fn assign(&self, url: &str);

    /// Install the hash-change listener, replacing any previous one.
    fn on_hash_change(&self, listener: HashListener);
}

/// Build `url` plus the serialized options block, then navigate to it.
///
/// Returns the URL handed to [`Location::assign`]. `Some` of an empty list
/// still appends `[]`.
pub fn navigate<L>(location: &L, url: &str, data: Option<&OptionPairs>) -> String
where
    L: Location + ?Sized,
{
    let target = match data {
        Some(pairs) => format!("{url}{}", serialize(pairs)),
        None => url.to_string(),
    };
    info!(url = %target, "navigating");
    location.assign(&target);
    target
}

/// Handler shared between [`start`]'s first call and the installed listener.
struct Dispatch<F> {
    handler: RefCell<F>,
    pending: RefCell<VecDeque<String>>,
}

impl<F: FnMut(OptionSet)> Dispatch<F> {
    /// Deliver `hash`, or queue it when the handler is already running.
    ///
    /// The running call drains the queue before it returns, so changes made
    /// from inside the handler arrive in order once it completes.
    fn deliver(&self, hash: &str) {
        self.pending.borrow_mut().push_back(hash.to_string());
        let Ok(mut handler) = self.handler.try_borrow_mut() else {
            debug!(hash, "handler busy, hash change queued");
            return;
        };
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(hash) = next else {
                break;
            };
            (*handler)(parse(&hash));
        }
    }
}

/// Invoke `handler` with the current hash, then on every hash change.
///
/// The listener is installed before the first call, so a redirect made by
/// that call is delivered too. Each call receives a freshly parsed
/// [`OptionSet`]. Registering again discards the previous handler.
pub fn start<L, F>(location: &L, handler: F)
where
    L: Location + ?Sized,
    F: FnMut(OptionSet) + 'static,
{
    let dispatch = Rc::new(Dispatch {
        handler: RefCell::new(handler),
        pending: RefCell::new(VecDeque::new()),
    });

    let listener = Rc::clone(&dispatch);
    location.on_hash_change(Box::new(move |hash: &str| listener.deliver(hash)));

    let current = location.hash();
    info!(hash = %current, "hash listener registered");
    dispatch.deliver(&current);
}

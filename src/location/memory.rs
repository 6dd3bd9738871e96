use super::{HashListener, Location};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use tracing::{debug, info, warn};
use url::Url;

/// In-process [`Location`] backed by a [`Url`].
///
/// Behaves like a single browser tab:
///
/// - `assign` resolves the target against the current URL
/// - a target that differs only in its fragment is a hash change and is
///   delivered to the listener
/// - any other difference is a document load, which drops the listener
///
/// Changes requested while the listener is running are queued and delivered
/// after it returns. Not `Sync`; it lives on the thread that drives it.
pub struct MemoryLocation {
    current: RefCell<Url>,
    listener: RefCell<Option<HashListener>>,
    /// Bumped whenever the listener slot is replaced or cleared.
    generation: Cell<u64>,
    pending: RefCell<VecDeque<String>>,
    dispatching: Cell<bool>,
    history: RefCell<Vec<String>>,
    loads: Cell<usize>,
}

impl MemoryLocation {
    /// Open a location at the absolute URL `initial`.
    pub fn new(initial: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(initial)?;
        Ok(Self {
            history: RefCell::new(vec![url.to_string()]),
            current: RefCell::new(url),
            listener: RefCell::new(None),
            generation: Cell::new(0),
            pending: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
            loads: Cell::new(0),
        })
    }

    /// Change only the hash, as a user editing the address bar would.
    pub fn set_hash(&self, hash: &str) {
        let fragment = hash.strip_prefix('#').unwrap_or(hash);
        let mut target = self.current.borrow().clone();
        target.set_fragment(Some(fragment));
        self.load(target);
    }

    /// Resolve `url` against the current location, as `assign` does.
    pub fn resolve(&self, url: &str) -> Result<Url, url::ParseError> {
        self.current.borrow().join(url)
    }

    /// Full current URL.
    #[must_use]
    pub fn href(&self) -> String {
        self.current.borrow().to_string()
    }

    /// Every URL this location has shown, starting with the initial one.
    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }

    /// Number of document loads (navigations that were not hash changes).
    #[must_use]
    pub fn loads(&self) -> usize {
        self.loads.get()
    }

    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.borrow().is_some()
    }

    fn load(&self, target: Url) {
        let previous = self.current.replace(target.clone());
        if previous == target {
            return;
        }
        self.history.borrow_mut().push(target.to_string());

        // A target without a fragment is always a document load.
        if target.fragment().is_some() && same_document(&previous, &target) {
            self.queue_change(self.hash());
            return;
        }

        self.loads.set(self.loads.get() + 1);
        self.pending.borrow_mut().clear();
        self.listener.borrow_mut().take();
        self.generation.set(self.generation.get() + 1);
        info!(url = %target, "document load, hash listener dropped");
    }

    fn queue_change(&self, hash: String) {
        self.pending.borrow_mut().push_back(hash);
        if self.dispatching.get() {
            return;
        }

        self.dispatching.set(true);
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(hash) = next else {
                break;
            };

            let taken = self.listener.borrow_mut().take();
            let Some(mut listener) = taken else {
                debug!(hash = %hash, "hash changed with no listener");
                continue;
            };

            let generation = self.generation.get();
            debug!(hash = %hash, "dispatching hash change");
            listener(&hash);

            // The listener may have replaced itself or triggered a load.
            if self.generation.get() == generation {
                *self.listener.borrow_mut() = Some(listener);
            }
        }
        self.dispatching.set(false);
    }
}

fn same_document(a: &Url, b: &Url) -> bool {
    let mut a = a.clone();
    let mut b = b.clone();
    a.set_fragment(None);
    b.set_fragment(None);
    a == b
}

impl Location for MemoryLocation {
    fn hash(&self) -> String {
        match self.current.borrow().fragment() {
            Some(fragment) if !fragment.is_empty() => format!("#{fragment}"),
            _ => String::new(),
        }
    }

    fn assign(&self, url: &str) {
        match self.resolve(url) {
            Ok(target) => self.load(target),
            Err(err) => warn!(url, error = %err, "cannot resolve navigation target"),
        }
    }

    fn on_hash_change(&self, listener: HashListener) {
        let replaced = self.listener.borrow_mut().replace(listener).is_some();
        self.generation.set(self.generation.get() + 1);
        if replaced {
            debug!("replaced existing hash listener");
        }
    }
}

impl fmt::Debug for MemoryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryLocation")
            .field("href", &self.href())
            .field("has_listener", &self.has_listener())
            .field("loads", &self.loads.get())
            .finish_non_exhaustive()
    }
}

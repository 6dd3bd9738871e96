use crate::options::OptionSet;
use std::collections::HashMap;
use tracing::debug;

/// Registry mapping hash slugs to caller-defined values.
///
/// Keys are unique; adding an existing slug overwrites its value.
#[derive(Debug, Clone)]
pub struct Router<T> {
    routes: HashMap<String, T>,
}

impl<T> Router<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Insert or overwrite the value for `slug`.
    ///
    /// Returns `self` so registrations can be chained.
    pub fn add(&mut self, slug: impl Into<String>, value: T) -> &mut Self {
        let slug = slug.into();
        if self.routes.insert(slug.clone(), value).is_some() {
            debug!(slug = %slug, "route overwritten");
        } else {
            debug!(slug = %slug, routes_count = self.routes.len(), "route added");
        }
        self
    }

    /// Value previously added for `slug`.
    #[inline]
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&T> {
        self.routes.get(slug)
    }

    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.routes.contains_key(slug)
    }

    /// Value registered for the slug of a parsed hash.
    #[must_use]
    pub fn route(&self, opts: &OptionSet) -> Option<&T> {
        let found = self.routes.get(opts.slug());
        debug!(
            slug = %opts.slug(),
            options = opts.len(),
            matched = found.is_some(),
            "hash route lookup"
        );
        found
    }

    /// Registered slugs, in no particular order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<HashMap<String, T>> for Router<T> {
    fn from(routes: HashMap<String, T>) -> Self {
        Self { routes }
    }
}

impl<K, T> FromIterator<(K, T)> for Router<T>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut router = Self::new();
        for (slug, value) in iter {
            router.add(slug, value);
        }
        router
    }
}

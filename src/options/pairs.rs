use super::core::{write_block, OptionSet, OptionValue};

/// Ordered list of option pairs to serialize.
///
/// Unlike [`OptionSet`], the list keeps every pair it is given, in the order
/// given, so serialization output is deterministic.
///
/// ```rust
/// use hashrouter::options::OptionPairs;
///
/// let pairs = OptionPairs::new().flag("a").set("b", 2);
/// assert_eq!(hashrouter::serialize(&pairs), "[a,b=2]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionPairs(Vec<(String, OptionValue)>);

impl OptionPairs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bare key.
    #[must_use]
    pub fn flag(mut self, key: impl Into<String>) -> Self {
        self.push(key, OptionValue::Flag);
        self
    }

    /// Append `key=value`; `true` is rendered as a bare key.
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.0.push((key.into(), value.into()));
    }

    /// Parse a single `key` or `key=value` fragment, as typed on a command line.
    pub fn push_fragment(&mut self, fragment: &str) {
        match fragment.split_once('=') {
            Some((key, value)) => self.push(key, value),
            None => self.push(fragment, OptionValue::Flag),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn to_block(&self) -> String {
        write_block(self.iter())
    }
}

impl<K, V> FromIterator<(K, V)> for OptionPairs
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut pairs = Self::new();
        for (k, v) in iter {
            pairs.push(k, v);
        }
        pairs
    }
}

impl From<&OptionSet> for OptionPairs {
    fn from(set: &OptionSet) -> Self {
        set.iter().collect()
    }
}

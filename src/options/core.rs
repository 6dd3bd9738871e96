use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt::{self, Display, Formatter};

/// Number of options stored inline before spilling to the heap.
/// Hashes in the wild rarely carry more than a handful of options.
pub const MAX_INLINE_OPTIONS: usize = 8;

/// Inline storage for parsed options, kept in first-seen key order.
pub type OptionVec = SmallVec<[(String, OptionValue); MAX_INLINE_OPTIONS]>;

/// Value attached to an option key.
///
/// A bare key (`[autoplay]`) is a [`Flag`](OptionValue::Flag); a `key=value`
/// fragment carries [`Text`](OptionValue::Text).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    /// Bare key, equivalent to boolean `true`
    Flag,
    /// Right-hand side of `key=value`, possibly empty
    Text(String),
}

impl OptionValue {
    /// Text content, or `None` for a flag.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Flag => None,
            OptionValue::Text(s) => Some(s.as_str()),
        }
    }

    /// Flags and non-empty text are truthy; empty text is not.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Flag => true,
            OptionValue::Text(s) => !s.is_empty(),
        }
    }

    #[must_use]
    pub fn is_flag(&self) -> bool {
        matches!(self, OptionValue::Flag)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        if value {
            OptionValue::Flag
        } else {
            OptionValue::Text("false".to_string())
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<&OptionValue> for OptionValue {
    fn from(value: &OptionValue) -> Self {
        value.clone()
    }
}

macro_rules! option_value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for OptionValue {
                fn from(value: $ty) -> Self {
                    OptionValue::Text(value.to_string())
                }
            }
        )*
    };
}

option_value_from_number!(i32, i64, u8, u16, u32, u64, usize, f64);

impl Display for OptionValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Flag => f.write_str("true"),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionValue::Flag => serializer.serialize_bool(true),
            OptionValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

/// Slug plus its parsed options.
///
/// Built fresh for every hash change and handed to the listener. Keys are
/// unique: when a key repeats, the last value wins while the key keeps the
/// position of its first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionSet {
    slug: String,
    options: OptionVec,
}

impl OptionSet {
    /// Parse a raw options block (the text between `[` and `]`).
    ///
    /// Empty fragments and fragments with an empty key are skipped, so an
    /// empty `raw` yields no options.
    #[must_use]
    pub fn new(slug: impl Into<String>, raw: &str) -> Self {
        let mut set = Self {
            slug: slug.into(),
            options: OptionVec::new(),
        };

        for fragment in raw.split(',') {
            let (key, value) = match fragment.split_once('=') {
                Some((key, value)) => (key, OptionValue::Text(value.to_string())),
                None => (fragment, OptionValue::Flag),
            };
            if key.is_empty() {
                continue;
            }
            set.insert(key, value);
        }

        set
    }

    fn insert(&mut self, key: &str, value: OptionValue) {
        match self.options.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.options.push((key.to_string(), value)),
        }
    }

    /// The hash portion before the options block.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Stored value for `key`, or `None` when absent.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.options
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Truthiness of `key`: `false` for absent keys and empty text.
    #[inline]
    #[must_use]
    pub fn is(&self, key: &str) -> bool {
        self.get(key).is_some_and(OptionValue::is_truthy)
    }

    /// Options in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Render the options back into the bracketed block, e.g. `[a,b=2]`.
    #[must_use]
    pub fn to_block(&self) -> String {
        write_block(self.iter())
    }

    /// Render `#slug`, followed by the block when any options are present.
    #[must_use]
    pub fn to_hash(&self) -> String {
        if self.is_empty() {
            format!("#{}", self.slug)
        } else {
            format!("#{}{}", self.slug, self.to_block())
        }
    }
}

impl Serialize for OptionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Options<'a>(&'a OptionVec);

        impl Serialize for Options<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (k, v) in self.0 {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("slug", &self.slug)?;
        map.serialize_entry("options", &Options(&self.options))?;
        map.end()
    }
}

/// Join `key` / `key=value` fragments with `,` and wrap them in brackets.
pub(crate) fn write_block<'a, I>(pairs: I) -> String
where
    I: Iterator<Item = (&'a str, &'a OptionValue)>,
{
    let mut block = String::from("[");
    for (i, (key, value)) in pairs.enumerate() {
        if i > 0 {
            block.push(',');
        }
        block.push_str(key);
        if let OptionValue::Text(text) = value {
            block.push('=');
            block.push_str(text);
        }
    }
    block.push(']');
    block
}

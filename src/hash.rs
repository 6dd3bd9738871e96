//! # Hash Module
//!
//! Pure conversions between location hashes and [`OptionSet`]s.
//!
//! - [`parse`] splits `#slug[options]` into slug and options
//! - [`serialize`] renders ordered pairs as an options block `[k1,k2=v2]`
//!
//! Neither function fails: a hash that does not match degrades to an empty
//! slug with no options.
//!
//! ```rust
//! use hashrouter::{parse, serialize, OptionPairs};
//!
//! let opts = parse("#foo[a=1,b]");
//! assert_eq!(opts.slug(), "foo");
//! assert!(opts.is("b"));
//!
//! let block = serialize(&OptionPairs::new().flag("a").set("b", "2"));
//! assert_eq!(block, "[a,b=2]");
//! ```

use crate::options::{OptionPairs, OptionSet};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// `#`, then the slug up to the first `[`, then an optional bracketed block.
/// Unanchored: the first `#` in the input starts the slug.
static HASH_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#([^\[]*)(\[(.*)\])?").expect("hash regex should be valid")
});

/// Parse a location hash into its slug and options.
///
/// Input without a `#` yields an empty slug and no options. An unterminated
/// block (`#foo[a`) yields the slug alone.
#[must_use]
pub fn parse(hash: &str) -> OptionSet {
    let Some(caps) = HASH_REGEX.captures(hash) else {
        debug!(hash, "hash did not match, using empty slug");
        return OptionSet::default();
    };

    let slug = caps.get(1).map_or("", |m| m.as_str());
    let raw = caps.get(3).map_or("", |m| m.as_str());
    let opts = OptionSet::new(slug, raw);

    debug!(hash, slug, options = opts.len(), "parsed hash");
    opts
}

/// Render ordered pairs as an options block.
///
/// Bare keys are emitted for [`OptionValue::Flag`](crate::OptionValue::Flag),
/// `key=value` otherwise. Delimiters inside keys or values are not escaped.
#[must_use]
pub fn serialize(data: &OptionPairs) -> String {
    data.to_block()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionValue;

    #[test]
    fn test_parse_slug_and_options() {
        let opts = parse("#foo[a=1,b]");
        assert_eq!(opts.slug(), "foo");
        assert_eq!(opts.get("a"), Some(&OptionValue::Text("1".to_string())));
        assert_eq!(opts.get("b"), Some(&OptionValue::Flag));
        assert_eq!(opts.len(), 2);
    }

    #[test]
    fn test_parse_slug_only() {
        let opts = parse("#foo");
        assert_eq!(opts.slug(), "foo");
        assert!(opts.is_empty());
    }

    #[test]
    fn test_parse_without_hash_sign() {
        let opts = parse("garbage-no-hash-hash");
        assert_eq!(opts.slug(), "");
        assert!(opts.is_empty());
    }

    #[test]
    fn test_parse_empty_and_bare_hash() {
        assert_eq!(parse(""), OptionSet::default());
        let opts = parse("#");
        assert_eq!(opts.slug(), "");
        assert!(opts.is_empty());
    }

    #[test]
    fn test_parse_unterminated_block() {
        let opts = parse("#foo[a,b");
        assert_eq!(opts.slug(), "foo");
        assert!(opts.is_empty());
    }

    #[test]
    fn test_parse_ignores_text_before_hash() {
        let opts = parse("http://x/page#list[sort=asc]");
        assert_eq!(opts.slug(), "list");
        assert_eq!(opts.get("sort").and_then(OptionValue::as_str), Some("asc"));
    }

    #[test]
    fn test_parse_empty_block() {
        let opts = parse("#foo[]");
        assert_eq!(opts.slug(), "foo");
        assert!(opts.is_empty());
    }

    #[test]
    fn test_block_spans_to_last_bracket() {
        let opts = parse("#foo[a]tail]");
        assert_eq!(opts.slug(), "foo");
        assert_eq!(opts.get("a]tail"), Some(&OptionValue::Flag));
    }

    #[test]
    fn test_serialize_flags_and_values() {
        let pairs = OptionPairs::new().flag("a").set("b", "2");
        assert_eq!(serialize(&pairs), "[a,b=2]");
        let pairs: OptionPairs = vec![("a", true), ("b", false)].into_iter().collect();
        assert_eq!(serialize(&pairs), "[a,b=false]");
    }

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serialize(&OptionPairs::new()), "[]");
    }

    #[test]
    fn test_round_trip_preserves_block() {
        for block in ["[a]", "[k=v]", "[k1=v1,k2,k3=v3]", "[x=,y]"] {
            let hash = format!("#slug{block}");
            let opts = parse(&hash);
            assert_eq!(serialize(&OptionPairs::from(&opts)), block);
            assert_eq!(opts.to_hash(), hash);
        }
    }
}

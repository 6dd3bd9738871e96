use super::Router;
use crate::hash::parse;
use std::collections::HashMap;

#[test]
fn test_add_and_get() {
    let mut router = Router::new();
    router.add("home", 1).add("about", 2);
    assert_eq!(router.get("home"), Some(&1));
    assert_eq!(router.get("about"), Some(&2));
    assert_eq!(router.get("missing"), None);
    assert_eq!(router.len(), 2);
}

#[test]
fn test_add_overwrites() {
    let mut router = Router::new();
    router.add("home", "old").add("home", "new");
    assert_eq!(router.get("home"), Some(&"new"));
    assert_eq!(router.len(), 1);
}

#[test]
fn test_empty_router() {
    let router: Router<()> = Router::default();
    assert!(router.is_empty());
    assert!(!router.contains(""));
}

#[test]
fn test_route_uses_parsed_slug() {
    let router: Router<&str> = [("list", "list-view"), ("", "index-view")]
        .into_iter()
        .collect();
    assert_eq!(router.route(&parse("#list[page=2]")), Some(&"list-view"));
    assert_eq!(router.route(&parse("no hash at all")), Some(&"index-view"));
    assert_eq!(router.route(&parse("#unknown")), None);
}

#[test]
fn test_from_map() {
    let mut map = HashMap::new();
    map.insert("a".to_string(), 10);
    let router = Router::from(map);
    assert!(router.contains("a"));
    let slugs: Vec<&str> = router.slugs().collect();
    assert_eq!(slugs, vec!["a"]);
}

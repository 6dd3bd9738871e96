use hashrouter::{parse, OptionSet, Router};

type Handler = fn(&OptionSet) -> String;

fn list(opts: &OptionSet) -> String {
    let page = opts.get("page").and_then(|v| v.as_str()).unwrap_or("1");
    format!("list page {page}")
}

fn detail(opts: &OptionSet) -> String {
    if opts.is("edit") {
        "detail (editing)".to_string()
    } else {
        "detail".to_string()
    }
}

fn example_router() -> Router<Handler> {
    let mut router: Router<Handler> = Router::new();
    router.add("list", list).add("detail", detail);
    router
}

fn dispatch(router: &Router<Handler>, hash: &str) -> Option<String> {
    let opts = parse(hash);
    router.route(&opts).map(|handler| handler(&opts))
}

#[test]
fn test_chained_registration() {
    let router = example_router();
    assert_eq!(router.len(), 2);
    assert!(router.get("list").is_some());
    assert!(router.get("detail").is_some());
    assert!(router.get("missing").is_none());
}

#[test]
fn test_dispatch_by_slug() {
    let router = example_router();
    assert_eq!(dispatch(&router, "#list"), Some("list page 1".to_string()));
    assert_eq!(dispatch(&router, "#list[page=4]"), Some("list page 4".to_string()));
    assert_eq!(dispatch(&router, "#detail[edit]"), Some("detail (editing)".to_string()));
    assert_eq!(dispatch(&router, "#detail[edit=]"), Some("detail".to_string()));
    assert_eq!(dispatch(&router, "#nowhere"), None);
}

#[test]
fn test_incremental_add_overwrites() {
    let mut router = example_router();
    router.add("list", detail);
    assert_eq!(router.len(), 2);
    assert_eq!(dispatch(&router, "#list"), Some("detail".to_string()));
}

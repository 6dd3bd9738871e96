use hashrouter::{navigate, start, HashListener, Location, MemoryLocation, OptionPairs, OptionSet};
use std::cell::RefCell;
use std::rc::Rc;

/// Host that records calls instead of navigating, like a browser shim in tests.
#[derive(Default)]
struct ScriptedHost {
    hash: RefCell<String>,
    assigned: RefCell<Vec<String>>,
    listener: RefCell<Option<HashListener>>,
    registrations: RefCell<usize>,
}

impl ScriptedHost {
    fn fire(&self, hash: &str) {
        *self.hash.borrow_mut() = hash.to_string();
        let taken = self.listener.borrow_mut().take();
        if let Some(mut listener) = taken {
            listener(hash);
            *self.listener.borrow_mut() = Some(listener);
        }
    }
}

impl Location for ScriptedHost {
    fn hash(&self) -> String {
        self.hash.borrow().clone()
    }

    fn assign(&self, url: &str) {
        self.assigned.borrow_mut().push(url.to_string());
    }

    fn on_hash_change(&self, listener: HashListener) {
        *self.registrations.borrow_mut() += 1;
        *self.listener.borrow_mut() = Some(listener);
    }
}

fn collect() -> (Rc<RefCell<Vec<OptionSet>>>, impl FnMut(OptionSet) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |opts| sink.borrow_mut().push(opts))
}

#[test]
fn test_navigate_returns_and_assigns_url() {
    let host = ScriptedHost::default();
    let url = navigate(&host, "http://x/", Some(&OptionPairs::new().set("a", true)));
    assert_eq!(url, "http://x/[a]");
    assert_eq!(*host.assigned.borrow(), vec!["http://x/[a]"]);

    let url = navigate(&host, "http://x/plain", None);
    assert_eq!(url, "http://x/plain");
    assert_eq!(host.assigned.borrow().len(), 2);
}

#[test]
fn test_start_calls_once_then_per_change() {
    let host = ScriptedHost::default();
    *host.hash.borrow_mut() = "#foo[a=1]".to_string();

    let (seen, handler) = collect();
    start(&host, handler);
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(*host.registrations.borrow(), 1);

    host.fire("#bar[b]");
    host.fire("#baz");

    let seen = seen.borrow();
    let slugs: Vec<&str> = seen.iter().map(OptionSet::slug).collect();
    assert_eq!(slugs, vec!["foo", "bar", "baz"]);
    assert!(seen[1].is("b"));
    assert!(seen[2].is_empty());
}

#[test]
fn test_restart_discards_old_handler() {
    let host = ScriptedHost::default();
    let (old, old_handler) = collect();
    let (new, new_handler) = collect();

    start(&host, old_handler);
    start(&host, new_handler);
    host.fire("#next");

    assert_eq!(old.borrow().len(), 1);
    assert_eq!(new.borrow().len(), 2);
    assert_eq!(*host.registrations.borrow(), 2);
}

#[test]
fn test_memory_location_round_trip() {
    let location = MemoryLocation::new("http://app.test/index.html").unwrap();
    let (seen, handler) = collect();
    start(&location, handler);

    let pairs = OptionPairs::new().flag("compact").set("sort", "name");
    navigate(&location, "#people", Some(&pairs));
    assert_eq!(location.href(), "http://app.test/index.html#people[compact,sort=name]");
    assert_eq!(location.loads(), 0);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].slug(), "");
    assert_eq!(seen[1].slug(), "people");
    assert_eq!(OptionPairs::from(&seen[1]), pairs);
}

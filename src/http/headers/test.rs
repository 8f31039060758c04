use std::time::{Duration, UNIX_EPOCH};

use crate::http::headers::{
    EMPTY_HEADERS, EmptyHeaders, HeaderEntry, HeaderError, Headers, HttpHeaders, Iter,
    ToHeaderValue,
};

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<HttpHeaders>();
    is_send_sync::<EmptyHeaders>();
    fn _is_dyn_compat(_: &dyn Headers) { }
};

/// Source collection that stores entries without validating them.
struct Unchecked(Vec<HeaderEntry>);

impl Unchecked {
    fn new(entries: &[(&str, &str)]) -> Self {
        Self(entries.iter().map(|(n, v)| HeaderEntry::new(n, v.to_string())).collect())
    }
}

impl Headers for Unchecked {
    fn iter(&self) -> Iter<'_> {
        Iter::new(&self.0)
    }

    fn add<V: ToHeaderValue>(&mut self, _: &str, _: V) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }

    fn add_values<I>(&mut self, _: &str, _: I) -> Result<&mut Self, HeaderError>
    where
        I: IntoIterator,
        I::Item: ToHeaderValue,
    {
        Err(HeaderError::ReadOnly)
    }

    fn set<V: ToHeaderValue>(&mut self, _: &str, _: V) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }

    fn set_values<I>(&mut self, _: &str, _: I) -> Result<&mut Self, HeaderError>
    where
        I: IntoIterator,
        I::Item: ToHeaderValue,
    {
        Err(HeaderError::ReadOnly)
    }

    fn remove(&mut self, _: &str) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }

    fn clear(&mut self) -> Result<&mut Self, HeaderError> {
        Err(HeaderError::ReadOnly)
    }
}

fn headers(entries: &[(&str, &str)]) -> HttpHeaders {
    let mut map = HttpHeaders::new();
    for (name, value) in entries {
        map.add(name, value).unwrap();
    }
    map
}

#[test]
fn add_keeps_order() {
    let mut map = HttpHeaders::new();
    map.add("Accept", "text/html").unwrap();
    map.add("Accept", "text/plain").unwrap();

    assert_eq!(map.get("Accept"), Some("text/html"));
    assert_eq!(map.get_all("Accept"), ["text/html", "text/plain"]);
    assert_eq!(map.len(), 2);
}

#[test]
fn case_insensitive_names() {
    let mut map = HttpHeaders::new();
    map.add("X-Foo", "1").unwrap();

    assert_eq!(map.get("x-foo"), Some("1"));
    assert_eq!(map.get("X-FOO"), Some("1"));
    assert!(map.contains("x-FoO"));

    map.add("x-foo", "2").unwrap();
    let names = map.names();
    assert_eq!(names.len(), 1);
    assert!(names.contains("X-Foo"));
    assert_eq!(map.get_all("X-Foo"), ["1", "2"]);

    // stored as inserted
    assert_eq!(map.entries(), [("X-Foo", "1"), ("x-foo", "2")]);
}

#[test]
fn entries_are_not_grouped() {
    let map = headers(&[("a", "1"), ("b", "2"), ("A", "3"), ("c", "4")]);

    assert_eq!(map.entries(), [("a", "1"), ("b", "2"), ("A", "3"), ("c", "4")]);
    assert_eq!(map.iter().collect::<Vec<_>>(), map.entries());
    assert_eq!((&map).into_iter().count(), 4);
    assert_eq!(map.names().into_iter().collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn traversal_restarts() {
    let map = headers(&[("a", "1"), ("b", "2")]);

    let mut first = map.iter();
    assert_eq!(first.next(), Some(("a", "1")));

    let second = map.iter();
    assert_eq!(second.len(), 2);
    assert_eq!(first.next(), Some(("b", "2")));
    assert_eq!(first.next(), None);
    assert_eq!(map.iter().next(), Some(("a", "1")));
}

#[test]
fn set_replaces_every_value() {
    let mut map = headers(&[("Accept", "a"), ("Host", "h"), ("accept", "b")]);
    map.set("ACCEPT", "c").unwrap();

    assert_eq!(map.get_all("accept"), ["c"]);
    assert_eq!(map.entries(), [("Host", "h"), ("ACCEPT", "c")]);

    map.set("Accept", "d").unwrap();
    assert_eq!(map.get_all("accept"), ["d"]);
}

#[test]
fn remove_and_clear() {
    let mut map = headers(&[("a", "1"), ("b", "2"), ("A", "3")]);

    map.remove("a").unwrap();
    assert!(!map.contains("a"));
    assert!(map.get_all("a").is_empty());
    assert_eq!(map.entries(), [("b", "2")]);

    // absent name is a no-op
    map.remove("missing").unwrap();
    assert_eq!(map.len(), 1);

    map.clear().unwrap();
    assert!(map.is_empty());
    assert!(map.entries().is_empty());
    assert!(map.names().is_empty());
}

#[test]
fn null_terminates_values() {
    let mut map = HttpHeaders::new();
    map.add_values("a", [Some("v1"), None, Some("v2")]).unwrap();
    assert_eq!(map.get_all("a"), ["v1"]);

    map.add_values("a", ["v3", "v4"]).unwrap();
    assert_eq!(map.get_all("a"), ["v1", "v3", "v4"]);

    map.set_values("a", [None, Some("v5")]).unwrap();
    assert!(!map.contains("a"));

    map.set_values("a", vec![1, 2, 3]).unwrap();
    assert_eq!(map.get_all("a"), ["1", "2", "3"]);
}

#[test]
fn typed_getters() {
    let mut map = headers(&[("Content-Type", "text/plain"), ("X-Count", "2")]);

    assert_eq!(map.get_int("X-Count"), Some(2));
    assert_eq!(map.get_int_or("Missing", 7), 7);
    assert_eq!(map.get_int("Content-Type"), None);
    assert_eq!(map.get_int_or("Content-Type", -1), -1);
    assert_eq!(map.get_short("x-count"), Some(2));

    map.add("Big", "70000").unwrap();
    assert_eq!(map.get_int("Big"), Some(70000));
    assert_eq!(map.get_short("Big"), None);
    assert_eq!(map.get_short_or("Big", 5), 5);

    map.add_int("Neg", -12).unwrap().add_short("Short", i16::MAX).unwrap();
    assert_eq!(map.get_int("Neg"), Some(-12));
    assert_eq!(map.get("Short"), Some("32767"));

    map.set_int("X-Count", 3).unwrap().set_short("Short", 1).unwrap();
    assert_eq!(map.get_all("X-Count"), ["3"]);
    assert_eq!(map.get_short("Short"), Some(1));

    // only the first value is considered
    map.add("X-Count", "4").unwrap();
    assert_eq!(map.get_int("X-Count"), Some(3));

    assert_eq!(map.get_or("Content-Type", "x"), "text/plain");
    assert_eq!(map.get_or("Missing", "x"), "x");
}

#[test]
fn time_getters() {
    let mut map = HttpHeaders::new();
    map.add("Date", "Sun, 06 Nov 1994 08:49:37 GMT").unwrap();
    map.add("Expires", "never").unwrap();
    map.add("Last-Modified", UNIX_EPOCH + Duration::from_secs(1_000_000_000)).unwrap();

    assert_eq!(map.get_time_millis("date"), Some(784_111_777_000));
    assert_eq!(map.get_time_millis("Expires"), None);
    assert_eq!(map.get_time_millis_or("Expires", 0), 0);
    assert_eq!(map.get_time_millis_or("Missing", 9), 9);
    assert_eq!(map.get("Last-Modified"), Some("Sun, 09 Sep 2001 01:46:40 GMT"));
    assert_eq!(map.get_time_millis("Last-Modified"), Some(1_000_000_000_000));
}

#[test]
fn contains_value() {
    let map = headers(&[("Connection", "Upgrade"), ("connection", "keep-alive")]);

    assert!(map.contains_value("connection", "keep-alive", false));
    assert!(map.contains_value("CONNECTION", "upgrade", true));
    assert!(!map.contains_value("Connection", "upgrade", false));
    assert!(!map.contains_value("Upgrade", "Upgrade", true));
}

#[test]
fn set_all_merges_per_name() {
    let mut a = headers(&[("a", "1"), ("b", "2")]);
    let b = headers(&[("a", "9")]);

    a.set_all(&b).unwrap();
    assert_eq!(a.entries(), [("b", "2"), ("a", "9")]);
    assert_eq!(a.get("a"), Some("9"));
    assert_eq!(a.get("b"), Some("2"));
}

#[test]
fn set_all_keeps_every_source_value() {
    let mut a = headers(&[("Accept", "x"), ("Host", "h")]);
    let b = headers(&[("accept", "1"), ("Vary", "v"), ("ACCEPT", "2")]);

    a.set_all(&b).unwrap();
    assert_eq!(a.get_all("accept"), ["1", "2"]);
    assert_eq!(a.get("Host"), Some("h"));
    assert_eq!(a.get("Vary"), Some("v"));

    a.set_all(&EMPTY_HEADERS).unwrap();
    assert_eq!(a.len(), 4);
}

#[test]
fn set_headers_replaces_everything() {
    let mut a = headers(&[("a", "1"), ("b", "2")]);
    let b = headers(&[("a", "9")]);

    a.set_headers(&b).unwrap();
    assert_eq!(a.entries(), [("a", "9")]);

    a.set_headers(&EMPTY_HEADERS).unwrap();
    assert!(a.is_empty());
}

#[test]
fn add_headers_appends() {
    let mut a = headers(&[("a", "1")]);
    let b = headers(&[("A", "2"), ("b", "3")]);

    a.add_headers(&b).unwrap();
    assert_eq!(a.entries(), [("a", "1"), ("A", "2"), ("b", "3")]);
    assert_eq!(b.len(), 2);
}

#[test]
fn visitor_stops_early() {
    let map = headers(&[("a", "1"), ("b", "2"), ("c", "3")]);

    let mut seen = Vec::new();
    let last = map
        .for_each_entry(&mut |name, value| {
            seen.push(name);
            Ok(value != "2")
        })
        .unwrap();
    assert_eq!(last, Some(("b", "2")));
    assert_eq!(seen, ["a", "b"]);

    let mut count = 0;
    let last = map
        .for_each_entry(&mut |_, _| {
            count += 1;
            Ok(true)
        })
        .unwrap();
    assert_eq!(last, None);
    assert_eq!(count, 3);
}

#[test]
fn visitor_error_propagates() {
    let map = headers(&[("a", "1"), ("b", "2"), ("c", "3")]);

    let mut seen = 0;
    let err = map
        .for_each_entry(&mut |name, _| {
            seen += 1;
            if name == "b" {
                return Err(HeaderError::visitor("boom"));
            }
            Ok(true)
        })
        .unwrap_err();
    assert_eq!(seen, 2);
    assert!(matches!(err, HeaderError::Visitor(_)));
    assert_eq!(err.to_string(), "entry visitor failed: boom");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn bulk_copy_error_stops_the_copy() {
    let source = Unchecked::new(&[("a", "1"), (" ", "x"), ("b", "2")]);

    let mut target = headers(&[("z", "0")]);
    assert!(matches!(target.set_all(&source), Err(HeaderError::EmptyName)));
    assert_eq!(target.entries(), [("z", "0"), ("a", "1")]);

    let mut target = headers(&[("z", "0")]);
    assert!(matches!(target.add_headers(&source), Err(HeaderError::EmptyName)));
    assert_eq!(target.entries(), [("z", "0"), ("a", "1")]);

    let mut target = headers(&[("z", "0")]);
    assert!(matches!(target.set_headers(&source), Err(HeaderError::EmptyName)));
    assert_eq!(target.entries(), [("a", "1")]);
}

#[test]
fn bulk_copy_into_read_only() {
    let source = headers(&[("a", "1")]);
    let mut target = EmptyHeaders::new();

    assert!(matches!(target.set_headers(&source), Err(HeaderError::ReadOnly)));
    assert!(matches!(target.set_all(&source), Err(HeaderError::ReadOnly)));
    assert!(target.is_empty());
}

#[test]
fn dyn_view() {
    let map = headers(&[("a", "1")]);
    let views: [&dyn Headers; 2] = [&map, &EMPTY_HEADERS];

    assert_eq!(views[0].get("A"), Some("1"));
    assert!(views[0].as_http_headers().is_some());
    assert_eq!(views[1].get("A"), None);
    assert!(views[1].as_http_headers().is_none());
}

#[test]
fn chaining() {
    let mut map = HttpHeaders::new();
    map.add("a", "1")
        .and_then(|m| m.add("b", 2))
        .and_then(|m| m.set("a", "3"))
        .and_then(|m| m.remove("b"))
        .unwrap();
    assert_eq!(map.entries(), [("a", "3")]);
}

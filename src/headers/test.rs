use crate::common::ParseResult;
use crate::headers::{Consumed, HeaderError, Headers};

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<Headers>();
};

#[test]
fn headers_map() {
    let mut map = Headers::new();
    assert!(map.is_empty());

    map.set("Content-Type", "text/plain");
    assert!(map.contains("content-type"));
    assert_eq!(map.get("CONTENT-TYPE"), Some("text/plain"));

    map.set("Host", "a");
    map.set("HOST", "b");
    assert_eq!(map.get("host"), Some("a, b"));
    assert_eq!(map.len(), 2);

    // substring of the existing value is not appended again
    map.set("host", "b");
    map.set("host", "a, b");
    assert_eq!(map.get("host"), Some("a, b"));

    // naive dedupe, `bb` is not a list element but it contains `b`
    map.set("x-list", "bb");
    map.set("x-list", "b");
    assert_eq!(map.get("x-list"), Some("bb"));

    assert_eq!(map.replace("Host", "c").as_deref(), Some("a, b"));
    assert_eq!(map.get("host"), Some("c"));
    assert_eq!(map.replace("Accept", "*/*"), None);

    assert_eq!(map.remove("CONTENT-type").as_deref(), Some("text/plain"));
    assert!(!map.contains("content-type"));
    assert_eq!(map.remove("content-type"), None);

    let names: Vec<_> = map.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["Host", "x-list", "Accept"]);

    map.clear();
    assert!(map.is_empty());
}

#[test]
fn headers_from_iter() {
    let map: Headers = [("Content-Length", "2"), ("Connection", "close")].into_iter().collect();
    let pairs: Vec<_> = map.iter().collect();
    assert_eq!(pairs, [("Content-Length", "2"), ("Connection", "close")]);
}

#[test]
fn test_parse_header() {
    macro_rules! test {
        (#[pending] $input:literal) => {
            let mut map = Headers::new();
            assert!(map.parse($input).is_pending());
            assert!(map.is_empty());
        };
        (#[end] $input:literal) => {
            let mut map = Headers::new();
            match map.parse($input) {
                ParseResult::Ok(consumed) => assert_eq!(consumed, Consumed { len: 2, done: true }),
                other => panic!("expected end of headers, got {other:?}"),
            }
        };
        (#[error($err:ident)] $input:literal) => {
            let mut map = Headers::new();
            match map.parse($input) {
                ParseResult::Err(err) => assert_eq!(err, HeaderError::$err),
                other => panic!("line {}, expected `Err`, got {other:?}", line!()),
            }
            assert!(map.is_empty());
        };
        {
            $input:literal;
            $name:literal, $value:literal, $len:literal
        } => {
            let mut map = Headers::new();
            match map.parse($input) {
                ParseResult::Ok(consumed) => assert_eq!(consumed, Consumed { len: $len, done: false }),
                other => panic!("line {}, expected `Ok`, got {other:?}", line!()),
            }
            assert_eq!(map.get($name), Some($value));
        };
    }

    test! {
        b"Host: localhost:42069\r\n\r\n";
        "host", "localhost:42069", 23
    }
    test! {
        b"       Host: localhost:42069       \r\n\r\n";
        "host", "localhost:42069", 37
    }
    test! {
        b"Content-Type: Text/HTML\r\n";
        "content-type", "text/html", 25
    }
    test! {
        b"X-Empty:\r\n";
        "x-empty", "", 10
    }
    test! {
        b"User-Agent: curl/7.81.0\r\nAccept: */*\r\n";
        "user-agent", "curl/7.81.0", 25
    }

    test!(#[end] b"\r\nhello");
    test!(#[end] b"\r\n");

    test!(#[pending] b"");
    test!(#[pending] b"Host: localhost");
    test!(#[pending] b"Host: localhost\r");
    test!(#[pending] b"Host: localhost\n");

    test!(#[error(SpaceBeforeSeparator)] b"       Host : localhost:42069       \r\n\r\n");
    test!(#[error(WhitespaceInName)] b"Ho st: localhost\r\n");
    test!(#[error(MissingSeparator)] b"Host localhost\r\n");
    test!(#[error(EmptyName)] b": localhost\r\n");
    test!(#[error(InvalidName)] b"H\xa9st: localhost:42069\r\n\r\n");
    test!(#[error(InvalidName)] b"Ho(st): localhost\r\n");
    test!(#[error(InvalidValue)] b"Host: local\xffhost\r\n");
}

#[test]
fn test_parse_header_sequence() {
    let input = b"Host: localhost:42069\r\nSet-Person: lane-loves-go\r\nSet-Person: prime-loves-zig\r\n\r\nbody";
    let mut map = Headers::new();
    let mut offset = 0;

    loop {
        match map.parse(&input[offset..]) {
            ParseResult::Ok(consumed) => {
                offset += consumed.len;
                if consumed.done {
                    break;
                }
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    assert_eq!(&input[offset..], b"body");
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("set-person"), Some("lane-loves-go, prime-loves-zig"));
}

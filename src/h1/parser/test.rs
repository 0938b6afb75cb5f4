use crate::common::ParseResult;
use crate::h1::parser::{ParseError, RequestLine, parse_reqline_chunk};

macro_rules! ready {
    ($e:expr) => {
        match $e {
            ParseResult::Ok(ok) => ok,
            ParseResult::Err(err) => panic!("unexpected `ParseResult::Err`: {err:?}"),
            ParseResult::Pending => panic!("unexpected `ParseResult::Pending`")
        }
    };
}

#[test]
fn test_parse_reqline() {
    macro_rules! test {
        (#[pending] $input:literal) => {
            match parse_reqline_chunk($input) {
                ParseResult::Pending => { }
                ParseResult::Ok(val) => panic!("expected `Pending`, but its `Ok` with: {val:?}"),
                ParseResult::Err(val) => panic!("expected `Pending`, but its `Err` with: {val:?}"),
            }
        };
        (#[error($err:ident)] $input:expr) => {
            match parse_reqline_chunk($input) {
                ParseResult::Ok(ok) => panic!("expected `Err` but returns `Ok` with {ok:?}"),
                ParseResult::Err(err) => assert_eq!(err, ParseError::$err, "line {}", line!()),
                ParseResult::Pending => panic!("line {}, unexpected `Pending`", line!()),
            }
        };
        {
            $input:expr;
            $m:literal, $t:literal, $v:literal;
            $rest:expr
        } => {
            let input: &[u8] = $input;
            let (reqline, consumed) = ready!(parse_reqline_chunk(input));

            assert_eq!(reqline, RequestLine {
                method: $m.into(),
                target: $t.into(),
                version: $v.into(),
            });
            assert_eq!(&input[consumed..], $rest, "invalid remaining bytes");
        };
    }

    test! {
        b"GET / HTTP/1.1\r\n";
        "GET", "/", "1.1";
        b""
    };
    test! {
        b"GET / HTTP/1.1\r\nHost: localhost:42069\r\n\r\n";
        "GET", "/", "1.1";
        b"Host: localhost:42069\r\n\r\n"
    };
    test! {
        b"GET /coffee HTTP/1.1\r\nHost: localhost:42069\r\n";
        "GET", "/coffee", "1.1";
        b"Host: localhost:42069\r\n"
    };
    test! {
        b"POST /api/v1.2/users-list HTTP/1.1\r\n";
        "POST", "/api/v1.2/users-list", "1.1";
        b""
    };
    test! {
        b"GET /index.html HTTP/1.1\r\nAuth";
        "GET", "/index.html", "1.1";
        b"Auth"
    };

    // Error
    test!(#[error(MalformedRequestLine)] b"/coffee HTTP/1.1\r\n");
    test!(#[error(MalformedRequestLine)] b"GET /coffee\r\n");
    test!(#[error(MalformedRequestLine)] b"GET / coffee HTTP/1.1\r\n");
    test!(#[error(MalformedRequestLine)] b"GET  / HTTP/1.1\r\n");
    test!(#[error(MalformedRequestLine)] b"\r\n");
    test!(#[error(InvalidMethod)] b"get / HTTP/1.1\r\n");
    test!(#[error(InvalidMethod)] b"G3T / HTTP/1.1\r\n");
    test!(#[error(InvalidMethod)] b" / HTTP/1.1\r\n");
    test!(#[error(InvalidTarget)] b"GET coffee HTTP/1.1\r\n");
    test!(#[error(InvalidTarget)] b"GET /Coffee HTTP/1.1\r\n");
    test!(#[error(InvalidTarget)] b"GET /search?q=1 HTTP/1.1\r\n");
    test!(#[error(InvalidTarget)] b"GET  HTTP/1.1\r\n");
    test!(#[error(UnsupportedVersion)] b"GET / HTTP/1.0\r\n");
    test!(#[error(UnsupportedVersion)] b"GET / HTTP/2\r\n");
    test!(#[error(UnsupportedVersion)] b"GET / http/1.1\r\n");

    // Pending
    test!(#[pending] b"");
    test!(#[pending] b"GET / HTTP/1.1");
    test!(#[pending] b"GET / HTTP/1.1\r");
    test!(#[pending] b"GET / HTTP/1.1\n");
    test!(#[pending] b"GET / ");
}

#[test]
fn test_parse_error_kind() {
    assert!(ParseError::MalformedRequestLine.is_malformed());
    assert!(ParseError::InvalidMethod.is_malformed());
    assert!(ParseError::InvalidTarget.is_malformed());
    assert!(!ParseError::UnsupportedVersion.is_malformed());
}

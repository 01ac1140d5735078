use crate::http::request::{Method, Request};

/// Result of parsing the bytes received from a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// A usable request line
    Request(Request),
    /// Fewer than two tokens: nothing to answer
    Empty,
    /// Bytes were not text, or the target was not a path
    Malformed,
}

/// Parses the request line out of a single read from the client.
///
/// Only the first two whitespace separated tokens matter: the method and
/// the path. Headers, body and protocol version are ignored. A read that was
/// cut short by the receive buffer is parsed as-is.
pub fn parse_request(raw: &[u8]) -> ParseOutcome {
    let text = match std::str::from_utf8(raw) {
        Ok(text) => text,
        Err(_) => return ParseOutcome::Malformed,
    };

    let mut tokens = text.split_whitespace();

    let (method, path) = match (tokens.next(), tokens.next()) {
        (Some(method), Some(path)) => (method, path),
        _ => return ParseOutcome::Empty,
    };

    if !path.starts_with('/') {
        return ParseOutcome::Malformed;
    }

    ParseOutcome::Request(Request::new(Method::from(method), path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        match parse_request(req) {
            ParseOutcome::Request(parsed) => {
                assert_eq!(parsed.method, Method::GET);
                assert_eq!(parsed.path, "/");
            }
            other => panic!("expected request, got {:?}", other),
        }
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(parse_request(b" \t\r\n"), ParseOutcome::Empty);
    }
}

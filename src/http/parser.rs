use crate::http::request::{Method, Request};
use std::collections::HashMap;

#[derive(Debug)]
pub enum ParseError {
    InvalidRequest,
    InvalidMethod,
    InvalidHeader,
    InvalidQuery,
    InvalidBody,
    InvalidContentLength,
    Incomplete,
}

/// Parses one HTTP request from the bytes buffered so far.
///
/// `at_eof` tells the parser whether the stream can still produce more
/// bytes. While it can, a partially received request yields
/// `ParseError::Incomplete` and the caller should read more. Once the
/// stream is exhausted, whatever was received is final: a lone request
/// line is a valid request with empty header/query/form maps, and a body
/// shorter than its declared Content-Length is parsed as-is.
pub fn parse_request(buf: &[u8], at_eof: bool) -> Result<Request, ParseError> {

    // Look for header/body separator
    let (head_bytes, body_bytes, terminated) = match find_headers_end(buf) {
        Some(i) => (&buf[..i], &buf[i + 4..], true),
        None if at_eof => (buf, &buf[buf.len()..], false),
        None => return Err(ParseError::Incomplete),
    };

    let head_str = std::str::from_utf8(head_bytes)
        .map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = head_str.lines();

    // Request line
    let request_line = lines.next().unwrap_or("");
    if request_line.is_empty() {
        return Err(ParseError::InvalidRequest);
    }

    let mut parts = request_line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::InvalidRequest)?;
    let target = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    let method = Method::from_str(method_str).ok_or(ParseError::InvalidMethod)?;

    let (path, raw_query) = match target.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (target, None),
    };

    let header_lines: Vec<&str> = lines.collect();

    // Stream ended right after the request line: a valid terminal state.
    // Nothing beyond the line itself gets parsed, not even its query string.
    if !terminated && header_lines.is_empty() {
        return Ok(Request {
            request_line: request_line.to_string(),
            method,
            path: path.to_string(),
            version: version.to_string(),
            headers: HashMap::new(),
            query: HashMap::new(),
            form: HashMap::new(),
        });
    }

    // Headers: keys as written, values untrimmed, last duplicate wins
    let mut headers = HashMap::new();

    for line in header_lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or(ParseError::InvalidHeader)?;

        headers.insert(key.to_string(), value.to_string());
    }

    // Query parameters
    let mut query = HashMap::new();

    if let Some(raw) = raw_query {
        for piece in raw.split('&') {
            let (key, value) = piece
                .split_once('=')
                .ok_or(ParseError::InvalidQuery)?;
            query.insert(key.to_string(), value.to_string());
        }
    }

    // Form body, only for methods that carry one
    let mut form = HashMap::new();

    if method.allows_body() {
        let content_length = match headers.get("Content-Length") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .map_err(|_| ParseError::InvalidContentLength)?,
            None => 0,
        };

        if content_length > 0 {
            if body_bytes.len() < content_length && !at_eof {
                return Err(ParseError::Incomplete);
            }

            let take = content_length.min(body_bytes.len());
            let body_str = std::str::from_utf8(&body_bytes[..take])
                .map_err(|_| ParseError::InvalidBody)?;

            if !body_str.is_empty() {
                for pair in body_str.split('&') {
                    let (key, value) = pair
                        .split_once('=')
                        .ok_or(ParseError::InvalidBody)?;
                    form.insert(key.to_string(), value.to_string());
                }
            }
        }
    }

    Ok(Request {
        request_line: request_line.to_string(),
        method,
        path: path.to_string(),
        version: version.to_string(),
        headers,
        query,
        form,
    })
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|w| w == b"\r\n\r\n")
}

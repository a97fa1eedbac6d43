use std::collections::HashMap;

/// HTTP request methods.
///
/// Only the method token is validated; routing does not branch on it. The
/// method decides whether a form body is read (POST, PUT and PATCH only).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
    /// DELETE - Delete a resource
    DELETE,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// PATCH - Partial modification of a resource
    PATCH,
}

/// Represents a parsed HTTP request from a client.
///
/// Built once per connection and discarded after the response is sent.
/// `request_line` is always populated; the three maps may all be empty when
/// the client sent nothing beyond the request line.
#[derive(Debug, Clone)]
pub struct Request {
    /// The literal first line of the request (e.g. `GET /path?x=1 HTTP/1.1`)
    pub request_line: String,
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request path without the query string (e.g. "/index.html")
    pub path: String,
    /// HTTP version (typically "HTTP/1.1")
    pub version: String,
    /// Request headers, keys as written on the wire, last duplicate wins
    pub headers: HashMap<String, String>,
    /// Query parameters parsed from the request line's target
    pub query: HashMap<String, String>,
    /// Form fields parsed from the body of POST/PUT/PATCH requests
    pub form: HashMap<String, String>,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the method (case-sensitive, typically uppercase)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string matches a known method, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use doorman::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            "DELETE" => Some(Method::DELETE),
            "HEAD" => Some(Method::HEAD),
            "OPTIONS" => Some(Method::OPTIONS),
            "PATCH" => Some(Method::PATCH),
            _ => None,
        }
    }

    /// Whether a request with this method carries a form body.
    pub fn allows_body(&self) -> bool {
        matches!(self, Method::POST | Method::PUT | Method::PATCH)
    }
}

impl Request {
    /// Retrieves a header value by name, exactly as it appeared on the wire.
    ///
    /// Lookup is by the key as written; no case normalization is applied and
    /// the value keeps any leading whitespace from after the `:`.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// Retrieves the Content-Length header value and parses it as a usize.
    ///
    /// The raw value is trimmed before parsing. Returns 0 if the header is
    /// missing or not a valid number.
    pub fn content_length(&self) -> usize {
        self.header("Content-Length")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }
}

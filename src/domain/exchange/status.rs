//! Canonical reason phrases for HTTP status codes

/// Returns the standard reason phrase for a status code, if one exists
pub fn canonical_reason(status: u16) -> Option<&'static str> {
    let reason = match status {
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        307 => "Temporary Redirect",
        308 => "Permanent Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Payload Too Large",
        414 => "URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Range Not Satisfiable",
        417 => "Expectation Failed",
        418 => "I'm a teapot",
        421 => "Misdirected Request",
        422 => "Unprocessable Entity",
        426 => "Upgrade Required",
        428 => "Precondition Required",
        429 => "Too Many Requests",
        431 => "Request Header Fields Too Large",
        451 => "Unavailable For Legal Reasons",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        508 => "Loop Detected",
        510 => "Not Extended",
        511 => "Network Authentication Required",
        _ => return None,
    };

    Some(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_codes() {
        assert_eq!(canonical_reason(200), Some("OK"));
        assert_eq!(canonical_reason(202), Some("Accepted"));
        assert_eq!(canonical_reason(404), Some("Not Found"));
        assert_eq!(canonical_reason(500), Some("Internal Server Error"));
    }

    #[test]
    fn test_unknown_status_codes() {
        assert_eq!(canonical_reason(0), None);
        assert_eq!(canonical_reason(299), None);
        assert_eq!(canonical_reason(799), None);
    }
}

use crate::error::{LookupError, Result};
use crate::types::StatusCodeEntry;
use once_cell::sync::Lazy;
use std::collections::{BTreeSet, HashMap};

// Reason phrases and explanations follow the Python BaseHTTPServer wording,
// extended with WebDAV and common vendor codes.
const STATUS_CODES: &[StatusCodeEntry] = &[
    entry(100, "Continue", "Request received, please continue"),
    entry(101, "Switching Protocols", "Switching to new protocol; obey Upgrade header"),
    entry(102, "Processing", "WebDAV; RFC 2518"),

    entry(200, "OK", "Request fulfilled, document follows"),
    entry(201, "Created", "Document created, URL follows"),
    entry(202, "Accepted", "Request accepted, processing continues off-line"),
    entry(203, "Non-Authoritative Information", "Request fulfilled from cache"),
    entry(204, "No Content", "Request fulfilled, nothing follows"),
    entry(205, "Reset Content", "Clear input form for further input."),
    entry(206, "Partial Content", "Partial content follows."),
    entry(207, "Multi-Status", "WebDAV; RFC 4918"),
    entry(208, "Already Reported", "WebDAV; RFC 5842"),
    entry(226, "IM Used", "RFC 3229"),

    entry(300, "Multiple Choices", "Object has several resources -- see URI list"),
    entry(301, "Moved Permanently", "Object moved permanently -- see URI list"),
    entry(302, "Found", "Object moved temporarily -- see URI list"),
    entry(303, "See Other", "Object moved -- see Method and URL list"),
    entry(304, "Not Modified", "Document has not changed since given time"),
    entry(305, "Use Proxy", "You must use proxy specified in Location to access this resource."),
    entry(306, "Switch Proxy", "Subsequent requests should use the specified proxy"),
    entry(307, "Temporary Redirect", "Object moved temporarily -- see URI list"),
    entry(308, "Permanent Redirect", "Object moved permanently"),

    entry(400, "Bad Request", "Bad request syntax or unsupported method"),
    entry(401, "Unauthorized", "No permission -- see authorization schemes"),
    entry(402, "Payment Required", "No payment -- see charging schemes"),
    entry(403, "Forbidden", "Request forbidden -- authorization will not help"),
    entry(404, "Not Found", "Nothing matches the given URI"),
    entry(405, "Method Not Allowed", "Specified method is invalid for this resource."),
    entry(406, "Not Acceptable", "URI not available in preferred format."),
    entry(
        407,
        "Proxy Authentication Required",
        "You must authenticate with this proxy before proceeding.",
    ),
    entry(408, "Request Timeout", "Request timed out; try again later."),
    entry(409, "Conflict", "Request conflict."),
    entry(410, "Gone", "URI no longer exists and has been permanently removed."),
    entry(411, "Length Required", "Client must specify Content-Length."),
    entry(412, "Precondition Failed", "Precondition in headers is false."),
    entry(413, "Payload Too Large", "Payload is too large."),
    entry(414, "Request-URI Too Long", "URI is too long."),
    entry(415, "Unsupported Media Type", "Entity body in unsupported format."),
    entry(416, "Requested Range Not Satisfiable", "Cannot satisfy request range."),
    entry(417, "Expectation Failed", "Expect condition could not be satisfied."),
    entry(418, "I'm a teapot", "The HTCPCP server is a teapot"),
    entry(419, "Authentication Timeout", "previously valid authentication has expired"),
    entry(420, "Method Failure / Enhance Your Calm", "Spring Framework / Twitter"),
    entry(422, "Unprocessable Entity", "WebDAV; RFC 4918"),
    entry(423, "Locked", "WebDAV; RFC 4918"),
    entry(424, "Failed Dependency / Method Failure", "WebDAV; RFC 4918"),
    entry(425, "Unordered Collection", "Internet draft"),
    entry(426, "Upgrade Required", "client should switch to a different protocol"),
    entry(428, "Precondition Required", "RFC 6585"),
    entry(429, "Too Many Requests", "RFC 6585"),
    entry(431, "Request Header Fields Too Large", "RFC 6585"),
    entry(440, "Login Timeout", "Microsoft"),
    entry(444, "No Response", "Nginx"),
    entry(449, "Retry With", "Microsoft"),
    entry(450, "Blocked by Windows Parental Controls", "Microsoft"),
    entry(451, "Unavailable For Legal Reasons", "RFC 7725"),
    entry(494, "Request Header Too Large", "Nginx"),
    entry(495, "Cert Error", "Nginx"),
    entry(496, "No Cert", "Nginx"),
    entry(497, "HTTP to HTTPS", "Nginx"),
    entry(498, "Token expired/invalid", "Esri"),
    entry(499, "Client Closed Request", "Nginx"),

    entry(500, "Internal Server Error", "Server got itself in trouble"),
    entry(501, "Not Implemented", "Server does not support this operation"),
    entry(502, "Bad Gateway", "Invalid responses from another server/proxy."),
    entry(503, "Service Unavailable", "The server cannot process the request due to a high load"),
    entry(504, "Gateway Timeout", "The gateway server did not receive a timely response"),
    entry(505, "HTTP Version Not Supported", "Cannot fulfill request."),
    entry(506, "Variant Also Negotiates", "RFC 2295"),
    entry(507, "Insufficient Storage", "WebDAV; RFC 4918"),
    entry(508, "Loop Detected", "WebDAV; RFC 5842"),
    entry(509, "Bandwidth Limit Exceeded", "Apache bw/limited extension"),
    entry(510, "Not Extended", "RFC 2774"),
    entry(511, "Network Authentication Required", "RFC 6585"),
    entry(598, "Network read timeout error", "Unknown"),
    entry(599, "Network connect timeout error", "Unknown"),
];

const fn entry(code: u16, short: &'static str, long: &'static str) -> StatusCodeEntry {
    StatusCodeEntry::new(code, short, long)
}

static GLOBAL_TABLE: Lazy<StatusCodeTable> = Lazy::new(StatusCodeTable::builtin);

/// Immutable mapping from status code to its description
#[derive(Debug, Clone)]
pub struct StatusCodeTable {
    entries: HashMap<u16, StatusCodeEntry>,
}

impl StatusCodeTable {
    /// The process-wide table of known status codes
    pub fn global() -> &'static StatusCodeTable {
        &GLOBAL_TABLE
    }

    fn builtin() -> Self {
        let entries = STATUS_CODES
            .iter()
            .map(|entry| (entry.code, *entry))
            .collect();
        Self { entries }
    }

    /// Build a table from arbitrary entries, rejecting repeated codes
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = StatusCodeEntry>,
    {
        let mut table = HashMap::new();
        for entry in entries {
            if table.insert(entry.code, entry).is_some() {
                return Err(LookupError::DuplicateCode(entry.code));
            }
        }
        Ok(Self { entries: table })
    }

    pub fn get(&self, code: u16) -> Option<&StatusCodeEntry> {
        self.entries.get(&code)
    }

    /// Every defined code, in ascending order
    pub fn all_codes(&self) -> BTreeSet<u16> {
        self.entries.keys().copied().collect()
    }

    /// Every entry, ascending by code
    pub fn entries(&self) -> Vec<&StatusCodeEntry> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by_key(|entry| entry.code);
        entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

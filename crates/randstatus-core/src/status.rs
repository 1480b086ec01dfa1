//! Status pool and the per-request response rule.
//!
//! Every request on `/` draws one code from [`STATUS_POOL`]. Only a GET that
//! drew 200 carries a body, and that body is the fixed [`HELLO_BODY`] bytes.

use rand::Rng;

/// Codes a handled request can answer with, in declaration order. Every entry
/// is a registered HTTP status code.
pub const STATUS_POOL: [u16; 9] = [200, 201, 202, 204, 400, 401, 403, 404, 500];

/// Body written for `GET /` answering 200. Not JSON; kept byte-exact.
pub const HELLO_BODY: &str = " { message: hello } ";

/// Methods served on `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteMethod {
    Get,
    Post,
}

impl RouteMethod {
    /// Label value used in metrics and log records.
    pub fn as_str(self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
        }
    }
}

/// Uniform draw from [`STATUS_POOL`].
pub fn draw_status<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    STATUS_POOL[rng.gen_range(0..STATUS_POOL.len())]
}

/// Body for a given method/status pair, `None` when the response is empty.
pub fn response_body(method: RouteMethod, status: u16) -> Option<&'static str> {
    match (method, status) {
        (RouteMethod::Get, 200) => Some(HELLO_BODY),
        _ => None,
    }
}

//! Transport seam: anything that can answer a request with a raw response.

mod fake;
mod http;

pub use fake::{FakeTransport, SUCCESS_BODY, TEAPOT_BODY};
pub use http::HttpTransport;

use crate::error::Result;
use crate::types::{Request, Response};
use std::future::Future;

/// Trait for transport implementations
pub trait Transport: Send + Sync {
    /// Answer a single request with a raw status and body.
    ///
    /// A transport only reports failures below the status layer; any
    /// response that carries a status code, however unwelcome, is `Ok`.
    /// Classification of unwelcome statuses happens above this seam.
    fn respond(&self, request: &Request) -> impl Future<Output = Result<Response>> + Send;
}

/// A borrowed transport answers like the transport it borrows, so callers
/// can keep ownership of one they still want to inspect afterwards.
impl<T: Transport> Transport for &T {
    fn respond(&self, request: &Request) -> impl Future<Output = Result<Response>> + Send {
        T::respond(self, request)
    }
}

//! Status-code classification: maps a response onto the error taxonomy.

use crate::error::{ClientError, ProbeError, Result};
use crate::types::Response;

/// Reason attached to every 500 classification.
pub const SERVER_ERROR_REASON: &str = "We are in serious trouble";

/// Classify a response, most specific status band first.
///
/// Band order is load-bearing: 500 is carved out before the 4xx range, and
/// the 4xx range before the generic non-200 fallback, so callers always see
/// the most specific kind the status supports. A 200 passes its body through
/// untouched.
pub fn classify(response: Response) -> Result<String> {
    let Response { status, body } = response;

    if status == 500 {
        return Err(ProbeError::server(SERVER_ERROR_REASON));
    }
    if (400..500).contains(&status) {
        return Err(classify_client(status, body).into());
    }
    if status != 200 {
        return Err(ProbeError::UnexpectedStatus { status, body });
    }

    Ok(body)
}

/// Refine a 4xx status into its tag.
fn classify_client(status: u16, body: String) -> ClientError {
    match status {
        401 => ClientError::Unauthorized { body },
        418 => ClientError::Teapot { body },
        _ => ClientError::Other { status, body },
    }
}

use crate::error::Result;
use http_probe::{Response, classify};

/// Feed one synthetic response to the classifier and print where it lands.
/// Returns whether the status classified as success.
pub fn execute(status: u16, body: String) -> Result<bool> {
    match classify(Response::new(status, body)) {
        Ok(body) => {
            println!("ok: {}", body);
            Ok(true)
        }
        Err(error) => {
            println!("{}: {}", error.kind(), error);
            Ok(false)
        }
    }
}

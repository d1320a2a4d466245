use super::Transport;
use crate::error::Result;
use crate::types::{Request, Response};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Body attached to a drawn 418.
pub const TEAPOT_BODY: &str = "I really am a teapot";

/// Body attached to a drawn 200.
pub const SUCCESS_BODY: &str = "Lorem ipsum dolor sit amet, consectetur.";

/// Stand-in backend that draws a status code instead of doing network I/O.
///
/// Each request rolls a uniform integer in `0..=10` and maps it onto the
/// status space: 0 and 1 give a bodyless 500, 2 and 3 a bodyless 401,
/// 4 a 418 with [`TEAPOT_BODY`], and everything else a 200 with
/// [`SUCCESS_BODY`]. Seed it for reproducible runs.
pub struct FakeTransport {
    rng: Mutex<StdRng>,
}

impl FakeTransport {
    /// Create a transport drawing from entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a transport with a fixed seed, for reproducible draws
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn draw(&self) -> Response {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match rng.gen_range(0..=10) {
            0 | 1 => Response::empty(500),
            2 | 3 => Response::empty(401),
            4 => Response::new(418, TEAPOT_BODY),
            _ => Response::new(200, SUCCESS_BODY),
        }
    }
}

impl Default for FakeTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for FakeTransport {
    async fn respond(&self, _request: &Request) -> Result<Response> {
        Ok(self.draw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_inside_the_advertised_status_space() {
        let transport = FakeTransport::with_seed(7);
        for _ in 0..200 {
            let response = transport.draw();
            assert!(
                matches!(response.status, 200 | 401 | 418 | 500),
                "unexpected status {}",
                response.status
            );
        }
    }

    #[test]
    fn bodies_match_their_status() {
        let transport = FakeTransport::with_seed(42);
        for _ in 0..200 {
            let response = transport.draw();
            match response.status {
                418 => assert_eq!(response.body, TEAPOT_BODY),
                200 => assert_eq!(response.body, SUCCESS_BODY),
                _ => assert!(response.body.is_empty()),
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_sequence() {
        let first = FakeTransport::with_seed(534);
        let second = FakeTransport::with_seed(534);

        let first_draws: Vec<u16> = (0..50).map(|_| first.draw().status).collect();
        let second_draws: Vec<u16> = (0..50).map(|_| second.draw().status).collect();

        assert_eq!(first_draws, second_draws);
    }

    #[tokio::test]
    async fn respond_ignores_the_request_contents() {
        let transport = FakeTransport::with_seed(1);
        let sequence_a = FakeTransport::with_seed(1);

        let request = Request::get("https://api.example.com/invoice/534");
        let other = Request::get("https://elsewhere.example.com/nothing");

        let drawn = transport.respond(&request).await.unwrap();
        let expected = sequence_a.respond(&other).await.unwrap();
        assert_eq!(drawn, expected);
    }
}

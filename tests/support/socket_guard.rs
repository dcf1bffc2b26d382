//! Localhost socket checks for tests that talk to a mock flow server.
//!
//! Sandboxed CI runners sometimes forbid binding sockets. Those tests are
//! skipped there unless `ASSISTANT_REQUIRE_SOCKET_TESTS` is truthy.

use std::net::{SocketAddr, TcpListener};
use std::panic::Location;

use wiremock::MockServer;

const REQUIRE_SOCKET_TESTS_VAR: &str = "ASSISTANT_REQUIRE_SOCKET_TESTS";

fn sockets_required() -> bool {
    std::env::var(REQUIRE_SOCKET_TESTS_VAR).is_ok_and(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes"
        )
    })
}

/// Binds an ephemeral localhost port, or reports why the caller must skip.
#[track_caller]
fn bind_ephemeral() -> Option<TcpListener> {
    let caller = Location::caller();
    match TcpListener::bind("127.0.0.1:0") {
        Ok(listener) => Some(listener),
        Err(err) if sockets_required() => panic!(
            "localhost bind failed for {}:{} ({err}) and {REQUIRE_SOCKET_TESTS_VAR} is set",
            caller.file(),
            caller.line()
        ),
        Err(err) => {
            eprintln!(
                "skipping {}:{}: localhost bind failed ({err}); set {REQUIRE_SOCKET_TESTS_VAR}=1 to fail instead",
                caller.file(),
                caller.line()
            );
            None
        }
    }
}

/// Starts a mock flow server, or returns `None` when sockets are unavailable.
#[track_caller]
pub fn start_mock_server_or_skip() -> impl Future<Output = Option<MockServer>> {
    let available = bind_ephemeral().is_some();
    async move {
        if available {
            Some(MockServer::start().await)
        } else {
            None
        }
    }
}

/// Returns a localhost address nothing listens on.
///
/// The port is bound and released immediately, so connections are refused.
#[track_caller]
pub fn closed_local_addr_or_skip() -> Option<SocketAddr> {
    let listener = bind_ephemeral()?;
    let addr = listener.local_addr().ok()?;
    drop(listener);
    Some(addr)
}

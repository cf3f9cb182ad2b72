use std::sync::Arc;

use vaultbot::config::Config;
use vaultbot::notify::SharedSink;
use vaultbot::services::time_source::TestTimeSource;
use vaultbot::session::VaultSession;

/// Build a session on a logical clock with a recording notification sink.
///
/// Tests advance the clock and call `tick` instead of sleeping, so every
/// delayed emission is exercised deterministically.
pub fn new_session() -> (VaultSession, Arc<TestTimeSource>, SharedSink) {
    let time = TestTimeSource::shared();
    let sink = SharedSink::new();
    let session = VaultSession::with_seed(
        &Config::default(),
        time.clone(),
        Box::new(sink.clone()),
        0xC0FFEE,
    );
    (session, time, sink)
}

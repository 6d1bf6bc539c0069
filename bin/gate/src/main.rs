//! Route-access inspection tool.
//!
//! Evaluates paths against the locally persisted credentials and prints the
//! decision the platform client would reach, one line per path:
//!
//! ```text
//! $ skillcert-gate /admin/users /candidate/courses
//! /admin/users: allow
//! /candidate/courses: redirect -> /candidate (no-credential)
//! ```

mod config;

use skillcert_access::{AccessDecision, AccessGuard, AccessRequest};
use skillcert_session::FileTokenStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::GateConfig;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GateConfig::from_env().expect("failed to load configuration");

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: skillcert-gate <path>...");
        return;
    }

    let store = FileTokenStore::open(&config.credentials_path);
    tracing::info!(path = %store.path().display(), "opened credential store");

    let guard = AccessGuard::new(store, config.routes);

    for path in paths {
        let decision = guard.evaluate(&AccessRequest::new(path.as_str()));
        match decision {
            AccessDecision::Allow => println!("{path}: allow"),
            AccessDecision::Redirect { destination, cause } => {
                println!("{path}: redirect -> {destination} ({cause})");
            }
        }
    }
}

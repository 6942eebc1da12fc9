//! Command-line front end for request files.
//!
//! The `rest` binary checks `.http`/`.rest` files the way an editor would:
//! every command opens the file as a buffer in a [`rest_tagger`] engine
//! and reports what the engine sees.
//!
//! # Debugging
//!
//! - `RUST_LOG=rest_tagger=debug`: cache and reconciliation decisions.
//! - `RUST_LOG=rest_tagger=trace`: every remap, edit and publish.

pub mod commands;
pub mod options;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times. Nothing is
/// installed unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_writer(std::io::stderr)
                .with_targets(true);
            tracing_subscriber::registry().with(filter).with(tree).init();
        }
    });
}

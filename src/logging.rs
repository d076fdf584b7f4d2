// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV: &str = "POCKETBOOK_LOG";
const DEFAULT_DIRECTIVE: &str = "pocketbook=warn";

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber once; later calls are no-ops.
///
/// Logs go to stderr so `--json` output on stdout stays parseable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

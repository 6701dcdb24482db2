// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use tracing_subscriber::EnvFilter;

use crate::constants::LOG_FORMAT_ENV;

/// Installs the global subscriber for the command line tools.
///
/// Logs go to stderr so that stdout only carries the command's output.
/// Set `IAM_CREDS_LOG_FORMAT=json` for JSON lines.
pub fn init_tracing() {
    let filter = EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        // remove the name of the function from every log entry
        .with_target(false);

    if std::env::var(LOG_FORMAT_ENV).is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        builder
            .json()
            // this needs to be set to remove duplicated information in the log.
            .with_current_span(false)
            .with_ansi(false)
            .init();
    } else {
        builder.init();
    }
}

// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Initializes logging for the service.

use crate::config::LogFormat;
use crate::{Error, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "info";

/// Creates the filter from `RUST_LOG`, defaulting to `info`.
pub fn env_filter() -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVES))
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Installs the global subscriber.
///
/// JSON lines are parsed by Cloud Logging, the `fields` become part of the
/// `jsonPayload` of each entry.
pub fn init(format: LogFormat) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter()?)
        .with_target(false);
    let result = match format {
        LogFormat::Json => builder
            .json()
            .with_current_span(true)
            .with_span_list(false)
            .try_init(),
        LogFormat::Text => builder.try_init(),
    };
    result.map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives() -> anyhow::Result<()> {
        let filter = EnvFilter::try_new(DEFAULT_DIRECTIVES)?;
        assert_eq!(filter.to_string(), "info");
        Ok(())
    }

    #[test]
    fn init_once() {
        let first = init(LogFormat::Text);
        let second = init(LogFormat::Json);
        // Only one global subscriber per process.
        assert!(first.is_err() || second.is_err(), "{first:?} {second:?}");
    }
}

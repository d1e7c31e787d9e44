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

//! Command-line and environment configuration.

use clap::{Parser, ValueEnum};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Sets the ACL of new Cloud Storage objects based on the bucket name.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// The port to listen on. Cloud Run sets `PORT` for each container.
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// The address to listen on.
    #[arg(long, env = "ADDRESS", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub address: IpAddr,

    /// The format for log lines.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,

    /// Override the Cloud Storage endpoint.
    #[arg(long, env = "STORAGE_ENDPOINT")]
    pub endpoint: Option<String>,
}

impl Args {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

/// The output format for logs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One JSON object per line, as expected by Cloud Logging.
    #[default]
    Json,
    /// Human-readable text, useful when running locally.
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn command() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "object-acl-policy",
            "--port",
            "9090",
            "--address",
            "127.0.0.1",
            "--log-format",
            "text",
            "--endpoint",
            "https://storage.example.com",
        ])?;
        assert_eq!(args.socket_addr(), "127.0.0.1:9090".parse::<SocketAddr>()?);
        assert_eq!(args.log_format, LogFormat::Text);
        assert_eq!(args.endpoint.as_deref(), Some("https://storage.example.com"));
        Ok(())
    }

    #[test]
    fn bad_log_format() {
        let got = Args::try_parse_from(["object-acl-policy", "--log-format", "xml"]);
        assert!(got.is_err(), "{got:?}");
    }
}

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

/// The error type for starting and running the service.
///
/// Failures to update an object ACL are not errors, see
/// [ApplyOutcome][crate::acl::ApplyOutcome].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The storage client could not be created.
    #[error("cannot create the storage client: {0}")]
    Client(#[from] google_cloud_gax::client_builder::Error),

    /// The logging configuration is invalid.
    #[error("cannot initialize logging: {0}")]
    Logging(String),

    /// Binding or serving the HTTP listener failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io() {
        let got = Error::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        assert!(matches!(got, Error::Io(_)), "{got:?}");
        assert!(got.to_string().contains("address in use"), "{got}");
    }

    #[test]
    fn logging() {
        let got = Error::Logging("bad directive".into());
        assert_eq!(got.to_string(), "cannot initialize logging: bad directive");
    }
}

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

//! Defines the storage operations used by [PolicyApplier][crate::applier::PolicyApplier].

use crate::policy::AccessPolicy;

/// Sets the access control list on a single object.
///
/// The production implementation is
/// [StorageControlAcl][crate::storage::StorageControlAcl]. Tests substitute a
/// mock. Implementations must be safe to share across concurrent requests and
/// must not keep any per-request state.
pub trait ObjectAcl: std::fmt::Debug + Send + Sync {
    /// Replaces the ACL of `object` in `bucket` with the predefined ACL for
    /// `policy`.
    ///
    /// Implementations report errors through [ApplyOutcome::Failure], they
    /// should not retry beyond what the underlying client already does.
    fn set_predefined_acl(
        &self,
        bucket: String,
        object: String,
        policy: AccessPolicy,
    ) -> impl Future<Output = ApplyOutcome> + Send;
}

/// The result of [ObjectAcl::set_predefined_acl].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The object ACL was updated.
    Success,
    /// The service rejected the update, or it could not be sent.
    Failure { reason: FailureReason },
}

impl ApplyOutcome {
    /// Creates a failure outcome.
    pub fn failure<M: Into<String>>(kind: FailureKind, message: M) -> Self {
        Self::Failure {
            reason: FailureReason::new(kind, message),
        }
    }
}

/// Describes why an ACL update failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FailureReason {
    kind: FailureKind,
    message: String,
}

impl FailureReason {
    pub fn new<M: Into<String>>(kind: FailureKind, message: M) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The category of the failure.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The error message returned by the service or the client library.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Common reasons for a failed ACL update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FailureKind {
    /// The bucket uses uniform bucket-level access, object ACLs are disabled.
    UniformBucketLevelAccess,
    /// The service account cannot change object ACLs.
    ///
    /// The account needs the `roles/storage.objectAdmin` role, or an
    /// equivalent set of permissions, on the bucket.
    PermissionDenied,
    /// The object or bucket no longer exists.
    NotFound,
    /// Any other error, including transport errors.
    Other,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::UniformBucketLevelAccess => "uniform bucket-level access is enabled",
            Self::PermissionDenied => "permission denied",
            Self::NotFound => "not found",
            Self::Other => "update failed",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure() {
        let got = ApplyOutcome::failure(FailureKind::NotFound, "no such object");
        let ApplyOutcome::Failure { reason } = &got else {
            unreachable!("expected a failure, got={got:?}");
        };
        assert_eq!(reason.kind(), FailureKind::NotFound);
        assert_eq!(reason.message(), "no such object");
    }

    #[test]
    fn display() {
        let reason = FailureReason::new(FailureKind::PermissionDenied, "caller lacks access");
        assert_eq!(reason.to_string(), "permission denied: caller lacks access");

        let reason = FailureReason::new(FailureKind::UniformBucketLevelAccess, "nope");
        assert_eq!(
            reason.to_string(),
            "uniform bucket-level access is enabled: nope"
        );
    }
}

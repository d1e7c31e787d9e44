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

use crate::acl::{ApplyOutcome, FailureReason, ObjectAcl};
use crate::notification::Notification;
use crate::policy::{AccessPolicy, Rule};

/// Applies the access policy for a bucket to each new object.
///
/// The storage operations are provided at construction time. Each call to
/// [handle][PolicyApplier::handle] is independent: there is no caching, and
/// calling it twice with the same notification updates the object twice.
///
/// # Example
/// ```no_run
/// # use object_acl_policy::{applier::PolicyApplier, notification::Notification};
/// # use object_acl_policy::storage::StorageControlAcl;
/// # async fn sample(acl: StorageControlAcl) {
/// let applier = PolicyApplier::new(acl);
/// applier
///     .handle(&Notification::new("dev-images", "cat.png"))
///     .await;
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PolicyApplier<T> {
    acl: T,
}

impl<T> PolicyApplier<T>
where
    T: ObjectAcl,
{
    pub fn new(acl: T) -> Self {
        Self { acl }
    }

    /// Sets the ACL of the object described by `notification`.
    ///
    /// This function never fails. Incomplete notifications are skipped, and
    /// errors updating the object are logged. The returned [Disposition]
    /// describes what happened, callers are free to ignore it.
    pub async fn handle(&self, notification: &Notification) -> Disposition {
        if !notification.is_complete() {
            tracing::warn!(
                bucket = notification.bucket_name.as_str(),
                object = notification.object_name.as_str(),
                "Missing bucket name or object name in event data."
            );
            return Disposition::Skipped;
        }
        let bucket = notification.bucket_name.as_str();
        let object = notification.object_name.as_str();
        tracing::info!(bucket, object, "Processing object: {object} in bucket: {bucket}");

        let rule = Rule::matching(bucket);
        let policy = rule.policy();
        tracing::info!(bucket, %rule, acl = %policy, "Setting ACL to {policy}: {rule}.");

        match self
            .acl
            .set_predefined_acl(bucket.to_string(), object.to_string(), policy)
            .await
        {
            ApplyOutcome::Success => {
                tracing::info!(
                    bucket,
                    object,
                    acl = %policy,
                    "Successfully set ACL on gs://{bucket}/{object} to {policy}."
                );
                Disposition::Applied { policy }
            }
            ApplyOutcome::Failure { reason } => {
                tracing::error!(
                    bucket,
                    object,
                    acl = %policy,
                    kind = ?reason.kind(),
                    "Error updating ACL for gs://{bucket}/{object}: {reason}"
                );
                Disposition::Failed { policy, reason }
            }
        }
    }
}

/// What [PolicyApplier::handle] did with a notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// The notification was incomplete, no update was attempted.
    Skipped,
    /// The object ACL was set to `policy`.
    Applied { policy: AccessPolicy },
    /// Setting the object ACL to `policy` failed.
    Failed {
        policy: AccessPolicy,
        reason: FailureReason,
    },
}

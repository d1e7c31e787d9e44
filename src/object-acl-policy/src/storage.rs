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

//! Implements [ObjectAcl] using the Cloud Storage client library.

use crate::acl::{ApplyOutcome, FailureKind, ObjectAcl};
use crate::policy::AccessPolicy;
use google_cloud_gax::error::Error;
use google_cloud_gax::error::rpc::Code;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Object;
use google_cloud_wkt::FieldMask;

/// Sets object ACLs with [StorageControl::update_object].
///
/// The client is created once and shared by all requests. Cloning is cheap.
#[derive(Clone, Debug)]
pub struct StorageControlAcl {
    client: StorageControl,
}

impl StorageControlAcl {
    pub fn new(client: StorageControl) -> Self {
        Self { client }
    }

    /// Creates a client using the default credentials.
    ///
    /// Use `endpoint` to send requests to a different host, for example, a
    /// private or regional endpoint.
    pub async fn from_endpoint(endpoint: Option<String>) -> crate::Result<Self> {
        let builder = StorageControl::builder();
        let builder = match endpoint {
            Some(e) => builder.with_endpoint(e),
            None => builder,
        };
        let client = builder.build().await?;
        Ok(Self::new(client))
    }
}

impl ObjectAcl for StorageControlAcl {
    async fn set_predefined_acl(
        &self,
        bucket: String,
        object: String,
        policy: AccessPolicy,
    ) -> ApplyOutcome {
        let result = self
            .client
            .update_object()
            .set_object(
                Object::new()
                    .set_bucket(bucket_resource_name(&bucket))
                    .set_name(object),
            )
            .set_update_mask(FieldMask::default().set_paths(["acl"]))
            .set_predefined_acl(policy.predefined_acl())
            .send()
            .await;
        match result {
            Ok(_) => ApplyOutcome::Success,
            Err(e) => ApplyOutcome::failure(failure_kind(&e), e.to_string()),
        }
    }
}

/// Buckets are global, the project component of the name is always `_`.
fn bucket_resource_name(bucket: &str) -> String {
    format!("projects/_/buckets/{bucket}")
}

fn failure_kind(error: &Error) -> FailureKind {
    if error.is_authentication() {
        return FailureKind::PermissionDenied;
    }
    let Some(status) = error.status() else {
        return FailureKind::Other;
    };
    match status.code {
        Code::FailedPrecondition => FailureKind::UniformBucketLevelAccess,
        Code::PermissionDenied | Code::Unauthenticated => FailureKind::PermissionDenied,
        Code::NotFound => FailureKind::NotFound,
        Code::InvalidArgument if mentions_uniform_access(&status.message) => {
            FailureKind::UniformBucketLevelAccess
        }
        _ => FailureKind::Other,
    }
}

fn mentions_uniform_access(message: &str) -> bool {
    let message = message.to_ascii_lowercase();
    message.contains("uniform bucket-level access")
}

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

use serde::Deserialize;

/// Identifies the object that triggered an event.
///
/// Built from the `data` payload of a
/// `google.cloud.storage.object.v1.finalized` event. Only the bucket and
/// object names are used, all other fields in the payload are ignored. Missing
/// or `null` names are represented as empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "ObjectData")]
pub struct Notification {
    pub bucket_name: String,
    pub object_name: String,
}

impl Notification {
    pub fn new<B, O>(bucket_name: B, object_name: O) -> Self
    where
        B: Into<String>,
        O: Into<String>,
    {
        Self {
            bucket_name: bucket_name.into(),
            object_name: object_name.into(),
        }
    }

    /// Returns true if both the bucket and object names are present.
    pub fn is_complete(&self) -> bool {
        !self.bucket_name.is_empty() && !self.object_name.is_empty()
    }
}

/// The subset of the `StorageObjectData` payload used by this service.
#[derive(Deserialize)]
struct ObjectData {
    #[serde(default)]
    bucket: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

impl From<ObjectData> for Notification {
    fn from(value: ObjectData) -> Self {
        Self {
            bucket_name: value.bucket.unwrap_or_default(),
            object_name: value.name.unwrap_or_default(),
        }
    }
}

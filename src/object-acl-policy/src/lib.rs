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

//! Sets the ACL of new Cloud Storage objects based on the bucket name.
//!
//! This crate implements a [Cloud Run] service. [Eventarc] delivers a
//! `google.cloud.storage.object.v1.finalized` event for each new object, and
//! the service sets the [predefined ACL] of that object:
//!
//! - objects in buckets starting with `dev-` are `private`,
//! - objects in buckets starting with `internal-` or `non-iam` are
//!   `publicRead`,
//! - objects in any other bucket are `private`.
//!
//! Setting object ACLs fails if the bucket uses [uniform bucket-level access],
//! or if the service account lacks `roles/storage.objectAdmin`. Such failures
//! are logged and the event is acknowledged, they are never retried.
//!
//! [Cloud Run]: https://cloud.google.com/run
//! [Eventarc]: https://cloud.google.com/eventarc/docs
//! [predefined ACL]: https://cloud.google.com/storage/docs/access-control/lists#predefined-acl
//! [uniform bucket-level access]: https://cloud.google.com/storage/docs/uniform-bucket-level-access

pub mod acl;
pub mod applier;
pub mod config;
pub mod event;
pub mod logging;
pub mod notification;
pub mod policy;
pub mod server;
pub mod storage;

mod error;
pub use error::Error;

/// The result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

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

//! Maps bucket names to object access policies.
//!
//! The mapping only looks at a prefix of the bucket name. The first matching
//! [Rule] wins:
//!
//! | bucket prefix            | policy                    |
//! | ------------------------ | ------------------------- |
//! | `dev-`                   | [AccessPolicy::Private]    |
//! | `internal-` or `non-iam` | [AccessPolicy::PublicRead] |
//! | anything else            | [AccessPolicy::Private]    |

/// Buckets with this prefix hold development data and must stay private.
pub const DEV_PREFIX: &str = "dev-";

/// Buckets with any of these prefixes serve public content.
pub const PUBLIC_PREFIXES: [&str; 2] = ["internal-", "non-iam"];

/// The access policy applied to a new object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessPolicy {
    /// Only the object owner has access.
    Private,
    /// The owner has full control and `allUsers` can read the object.
    PublicRead,
}

impl AccessPolicy {
    /// Returns the policy for objects created in `bucket_name`.
    ///
    /// # Example
    /// ```
    /// # use object_acl_policy::policy::AccessPolicy;
    /// assert_eq!(AccessPolicy::classify("dev-images"), AccessPolicy::Private);
    /// assert_eq!(AccessPolicy::classify("internal-reports"), AccessPolicy::PublicRead);
    /// ```
    pub fn classify(bucket_name: &str) -> Self {
        Rule::matching(bucket_name).policy()
    }

    /// The name of the predefined ACL in the Cloud Storage API.
    pub fn predefined_acl(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::PublicRead => "publicRead",
        }
    }
}

impl std::fmt::Display for AccessPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.predefined_acl())
    }
}

/// The rule that selected an [AccessPolicy].
///
/// Only used to explain the decision in the logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// The bucket name starts with [DEV_PREFIX].
    Development,
    /// The bucket name starts with one of [PUBLIC_PREFIXES].
    Public,
    /// No prefix matched.
    ///
    /// Unmatched buckets get private objects. This default has not been
    /// confirmed by the bucket owners, changing it is a product decision.
    Default,
}

impl Rule {
    /// Finds the first rule matching `bucket_name`.
    pub fn matching(bucket_name: &str) -> Self {
        if bucket_name.starts_with(DEV_PREFIX) {
            return Self::Development;
        }
        if PUBLIC_PREFIXES.iter().any(|p| bucket_name.starts_with(p)) {
            return Self::Public;
        }
        Self::Default
    }

    /// The policy selected by this rule.
    pub fn policy(&self) -> AccessPolicy {
        match self {
            Self::Development | Self::Default => AccessPolicy::Private,
            Self::Public => AccessPolicy::PublicRead,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "bucket name starts with '{DEV_PREFIX}'"),
            Self::Public => write!(
                f,
                "bucket name starts with '{}' or '{}'",
                PUBLIC_PREFIXES[0], PUBLIC_PREFIXES[1]
            ),
            Self::Default => write!(f, "bucket name has no matching prefix"),
        }
    }
}

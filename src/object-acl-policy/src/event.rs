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

//! Decodes CloudEvents delivered over HTTP.
//!
//! Eventarc delivers Cloud Storage events to Cloud Run services using the
//! [HTTP protocol binding] for CloudEvents. Two content modes are supported:
//!
//! - *binary*: the event attributes are in `ce-*` headers and the body is the
//!   event data.
//! - *structured*: the body is a JSON envelope with the attributes and a
//!   `data` member. The `Content-Type` is `application/cloudevents+json`.
//!
//! [HTTP protocol binding]: https://github.com/cloudevents/spec/blob/v1.0.2/cloudevents/bindings/http-protocol-binding.md

use crate::notification::Notification;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde::Deserialize;

/// The event type for new objects.
pub const OBJECT_FINALIZED: &str = "google.cloud.storage.object.v1.finalized";

const STRUCTURED_CONTENT_TYPE: &str = "application/cloudevents+json";

/// The CloudEvent attributes used in the logs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EventAttributes {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
}

impl EventAttributes {
    fn from_headers(headers: &HeaderMap) -> Self {
        let get = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        Self {
            id: get("ce-id"),
            event_type: get("ce-type"),
            source: get("ce-source"),
            subject: get("ce-subject"),
        }
    }
}

/// A decoded storage event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CloudEvent {
    pub attributes: EventAttributes,
    pub notification: Notification,
}

impl CloudEvent {
    /// Decodes an event from the headers and body of an HTTP request.
    ///
    /// A missing payload produces an empty [Notification], which the
    /// applier skips.
    pub fn decode(headers: &HeaderMap, body: &[u8]) -> Result<Self, DecodeError> {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_ascii_lowercase());
        match content_type.as_deref() {
            Some(t) if t.starts_with(STRUCTURED_CONTENT_TYPE) => Self::structured(body),
            Some(t) if !is_json(t) => Err(DecodeError::ContentType(t.to_string())),
            _ => Self::binary(headers, body),
        }
    }

    fn binary(headers: &HeaderMap, body: &[u8]) -> Result<Self, DecodeError> {
        let attributes = EventAttributes::from_headers(headers);
        let notification = if body.iter().all(u8::is_ascii_whitespace) {
            Notification::default()
        } else {
            serde_json::from_slice(body)?
        };
        Ok(Self {
            attributes,
            notification,
        })
    }

    fn structured(body: &[u8]) -> Result<Self, DecodeError> {
        #[derive(Deserialize)]
        struct Envelope {
            #[serde(flatten)]
            attributes: EventAttributes,
            #[serde(default)]
            data: Option<serde_json::Value>,
        }

        let envelope = serde_json::from_slice::<Envelope>(body)?;
        let notification = match envelope.data {
            None | Some(serde_json::Value::Null) => Notification::default(),
            Some(data) => serde_json::from_value(data)?,
        };
        Ok(Self {
            attributes: envelope.attributes,
            notification,
        })
    }
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence == "application/json" || essence.ends_with("+json")
}

/// The error type for [CloudEvent::decode].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("unsupported content type for the event data: {0}")]
    ContentType(String),
    #[error("cannot decode the event payload: {0}")]
    Payload(#[from] serde_json::Error),
}

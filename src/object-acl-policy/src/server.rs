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

//! The HTTP front end for Eventarc deliveries.

use crate::acl::ObjectAcl;
use crate::applier::PolicyApplier;
use crate::event::CloudEvent;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::Instrument;

/// Creates the router for the service.
///
/// Every event is acknowledged with `200 OK`, even if the event could not be
/// decoded or the ACL update failed. Eventarc redelivers events that get an
/// error response.
pub fn router<T>(applier: Arc<PolicyApplier<T>>) -> Router
where
    T: ObjectAcl + 'static,
{
    Router::new()
        .route("/", post(receive::<T>))
        .with_state(applier)
}

/// Serves events on `listener` until `shutdown` completes.
pub async fn serve<T, F>(
    listener: TcpListener,
    applier: PolicyApplier<T>,
    shutdown: F,
) -> crate::Result<()>
where
    T: ObjectAcl + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let address = listener.local_addr()?;
    tracing::info!(%address, "Listening for events");
    axum::serve(listener, router(Arc::new(applier)))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn receive<T>(
    State(applier): State<Arc<PolicyApplier<T>>>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode
where
    T: ObjectAcl,
{
    let event = match CloudEvent::decode(&headers, &body) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!("Ignoring event: {e}");
            return StatusCode::OK;
        }
    };
    let attributes = &event.attributes;
    let span = tracing::info_span!(
        "event",
        id = attributes.id.as_deref().unwrap_or_default(),
        event_type = attributes.event_type.as_deref().unwrap_or_default(),
        subject = attributes.subject.as_deref().unwrap_or_default(),
    );
    let disposition = applier.handle(&event.notification).instrument(span).await;
    tracing::debug!(?disposition, "Event handled");
    StatusCode::OK
}

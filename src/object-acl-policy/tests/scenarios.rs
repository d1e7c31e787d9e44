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

//! Runs the documented scenarios through the full service: HTTP router,
//! policy applier, and the Cloud Storage client backed by a mock stub.

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::{Request, StatusCode};
    use google_cloud_gax::error::Error;
    use google_cloud_gax::error::rpc::{Code, Status};
    use google_cloud_gax::options::RequestOptions;
    use google_cloud_gax::response::Response;
    use google_cloud_storage::client::StorageControl;
    use google_cloud_storage::model::{Object, UpdateObjectRequest};
    use google_cloud_storage::stub;
    use object_acl_policy::applier::PolicyApplier;
    use object_acl_policy::event::OBJECT_FINALIZED;
    use object_acl_policy::server::router;
    use object_acl_policy::storage::StorageControlAcl;
    use serde_json::json;
    use std::sync::Arc;
    use test_case::test_case;
    use tower::ServiceExt;

    mockall::mock! {
        #[derive(Debug)]
        StorageControl {}
        impl stub::StorageControl for StorageControl {
            async fn update_object(&self, _req: UpdateObjectRequest, _options: RequestOptions) -> google_cloud_gax::Result<Response<Object>>;
        }
    }

    async fn deliver(
        mock: MockStorageControl,
        data: serde_json::Value,
    ) -> anyhow::Result<StatusCode> {
        let acl = StorageControlAcl::new(StorageControl::from_stub(mock));
        let app = router(Arc::new(PolicyApplier::new(acl)));
        let request = Request::post("/")
            .header("ce-id", "1234")
            .header("ce-specversion", "1.0")
            .header("ce-type", OBJECT_FINALIZED)
            .header("ce-source", "//storage.googleapis.com/projects/_/buckets/test")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(data.to_string()))?;
        let response = app.oneshot(request).await?;
        Ok(response.status())
    }

    #[test_case("dev-images", "cat.png", "private"; "scenario 1")]
    #[test_case("internal-reports", "q3.pdf", "publicRead"; "scenario 2")]
    #[test_case("non-iam-assets", "logo.svg", "publicRead"; "scenario 3")]
    #[test_case("prod-data", "file.csv", "private"; "scenario 4")]
    #[tokio::test]
    async fn applies_acl(
        bucket: &'static str,
        object: &'static str,
        want: &'static str,
    ) -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_update_object()
            .withf(move |req, _| {
                req.object.as_ref().is_some_and(|o| {
                    o.bucket == format!("projects/_/buckets/{bucket}") && o.name == object
                }) && req.predefined_acl == want
            })
            .times(1)
            .returning(|req, _| Ok(Response::from(req.object.unwrap_or_default())));

        let status = deliver(mock, json!({"bucket": bucket, "name": object})).await?;
        assert_eq!(status, StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn scenario_5_missing_bucket() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_update_object().never();

        let status = deliver(mock, json!({"bucket": "", "name": "x"})).await?;
        assert_eq!(status, StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn scenario_6_permission_denied() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_update_object().times(1).returning(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::PermissionDenied)
                    .set_message("caller does not have storage.objects.update access"),
            ))
        });

        let data = json!({"bucket": "internal-reports", "name": "q3.pdf"});
        let status = deliver(mock, data).await?;
        assert_eq!(status, StatusCode::OK);
        Ok(())
    }

    #[tokio::test]
    async fn ignores_other_fields() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_update_object()
            .withf(|req, _| req.predefined_acl == "private")
            .times(1)
            .returning(|req, _| Ok(Response::from(req.object.unwrap_or_default())));

        let data = json!({
            "kind": "storage#object",
            "id": "dev-images/cat.png/1700000000000000",
            "bucket": "dev-images",
            "name": "cat.png",
            "metageneration": "1",
            "storageClass": "STANDARD",
            "timeCreated": "2026-10-16T00:00:00.000Z",
        });
        let status = deliver(mock, data).await?;
        assert_eq!(status, StatusCode::OK);
        Ok(())
    }
}

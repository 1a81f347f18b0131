//! HTTP route definitions.

mod flows;
mod health;

use crate::AppState;
use axum::Router;

/// Create all application routes.
pub fn create_routes() -> Router<AppState> {
    Router::new().merge(health::routes()).merge(flows::routes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporter::Exporter;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tokio::net::UdpSocket;
    use tower::ServiceExt;

    async fn test_app() -> (Router, UdpSocket) {
        let collector = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = collector.local_addr().unwrap().to_string();
        let exporter = Exporter::connect("127.0.0.1:0", &addr, 11).await.unwrap();
        let state = AppState {
            exporter: Arc::new(exporter),
        };
        (create_routes().with_state(state), collector)
    }

    async fn post_flows(app: Router, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/flows")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health() {
        let (app, _collector) = test_app().await;
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn export_reaches_collector() {
        let (app, collector) = test_app().await;
        let (status, body) = post_flows(
            app,
            json!({
                "exportTime": 1706745600,
                "groups": [{
                    "template": {"id": 256, "fields": [
                        {"element": "sourceIPv4Address", "size": 4},
                        {"element": "sourceTransportPort", "size": 2}
                    ]},
                    "records": [["10.0.0.1", 443]]
                }]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"sequenceNumber": 0, "sourceId": 11, "count": 2, "bytes": 48})
        );

        let mut buf = [0u8; 1500];
        let (len, _) = collector.recv_from(&mut buf).await.unwrap();
        assert_eq!(len, 48);
        assert_eq!(&buf[..4], &[0, 9, 0, 2]);
        assert_eq!(&buf[4..8], &1_706_745_600u32.to_be_bytes());
        assert_eq!(
            &buf[36..48],
            &[1, 0, 0, 12, 0x0A, 0, 0, 1, 0x01, 0xBB, 0, 0]
        );
    }

    #[tokio::test]
    async fn engine_errors_are_bad_requests() {
        let (app, _collector) = test_app().await;
        let (status, body) = post_flows(
            app,
            json!({
                "sourceId": 3,
                "groups": [{
                    "template": {"id": 256, "fields": [{"element": "interfaceName", "size": 10}]},
                    "records": [["a-name-too-long"]]
                }]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "string of 15 bytes does not fit a 10-byte field"
        );
    }

    #[tokio::test]
    async fn empty_export_rejected() {
        let (app, _collector) = test_app().await;
        let (status, body) = post_flows(app, json!({"groups": []})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "no groups to export");
    }
}

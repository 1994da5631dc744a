#![cfg(feature = "server")]
//! Typed calls against the cost optimization REST backend.

use crate::backend::client::ApiClient;
use crate::backend::error::Result;
use crate::shared::types::{HealthDto, RecommendationsResponse, Resource};

pub async fn list_resources(api: &ApiClient, limit: u32, offset: u32) -> Result<Vec<Resource>> {
    api.get_json(
        "/resources",
        &[("limit", limit.to_string()), ("offset", offset.to_string())],
    )
    .await
}

pub async fn list_recommendations(api: &ApiClient) -> Result<RecommendationsResponse> {
    api.get_json("/recommendations", &[]).await
}

pub async fn implement_recommendation(api: &ApiClient, resource_id: i64) -> Result<()> {
    api.post_empty(&format!("/recommendations/{}/implement", resource_id))
        .await
}

pub async fn health_check(api: &ApiClient) -> Result<HealthDto> {
    api.get_json("/healthz", &[]).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DEFAULT_LIMIT, DEFAULT_OFFSET};
    use crate::backend::config::ApiConfig;
    use crate::backend::testing::serve_once;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig::new(base).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn resources_pass_pagination_through() {
        let body = r#"[{"id":1,"name":"web-1","type":"instance","provider":"aws",
            "instance_type":"m5.large","cpu_utilization":12.5,"memory_utilization":30,
            "monthly_cost":70.08,"created_at":"2024-01-01T00:00:00","updated_at":"2024-01-01T00:00:00"}]"#;
        let (base, req) = serve_once(200, body).await;
        let got = list_resources(&client(&base), DEFAULT_LIMIT, DEFAULT_OFFSET)
            .await
            .unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].cpu_utilization, Some(12.5));
        assert_eq!(got[0].memory_utilization, Some(30.0));
        assert!(req
            .await
            .unwrap()
            .starts_with("GET /resources?limit=20&offset=0 HTTP/1.1"));
    }

    #[tokio::test]
    async fn empty_resource_list_decodes() {
        let (base, _req) = serve_once(200, "[]").await;
        let got = list_resources(&client(&base), 20, 0).await.unwrap();
        assert!(got.is_empty());
    }

    #[tokio::test]
    async fn recommendations_come_with_summary() {
        let body = r#"{"recommendations":[
            {"resource_id":42,"recommendation_type":"downsize","current_config":"a",
             "suggested_config":"b","potential_saving":56.06,"confidence":0.82,
             "reason":"Low utilization","implemented":false}],
            "summary":{"total_resources":10,"total_monthly_cost":1200.5,
             "total_potential_savings":56.06,"open_recommendations":1,"savings_percentage":4.67}}"#;
        let (base, _req) = serve_once(200, body).await;
        let got = list_recommendations(&client(&base)).await.unwrap();
        assert_eq!(got.recommendations[0].resource_id, 42);
        assert_eq!(got.summary.open_recommendations, Some(1));
    }

    #[tokio::test]
    async fn implement_posts_to_resource_path() {
        let (base, req) = serve_once(200, r#"{"message":"ok"}"#).await;
        implement_recommendation(&client(&base), 42).await.unwrap();
        assert!(req
            .await
            .unwrap()
            .starts_with("POST /recommendations/42/implement HTTP/1.1"));
    }

    #[tokio::test]
    async fn implement_failure_surfaces_status() {
        let (base, _req) = serve_once(404, r#"{"detail":"not found"}"#).await;
        let err = implement_recommendation(&client(&base), 42)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn health_reports_status_field() {
        let (base, _req) = serve_once(200, r#"{"status":"unhealthy","error":"db down"}"#).await;
        let got = health_check(&client(&base)).await.unwrap();
        assert_eq!(got.status, "unhealthy");
    }
}

use dioxus::prelude::*;

use crate::shared::types::{HealthDto, RecommendationsResponse, Resource};

pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_OFFSET: u32 = 0;

/// Human readable text for a failed server function, without the framework
/// prefix.
pub fn error_message(e: &ServerFnError) -> String {
    match e {
        ServerFnError::ServerError(msg) => msg.clone(),
        other => other.to_string(),
    }
}

#[cfg(feature = "server")]
fn api() -> Result<&'static crate::backend::ApiClient, ServerFnError> {
    crate::backend::GLOBAL_API
        .get()
        .ok_or_else(|| ServerFnError::ServerError("API client not initialized".into()))
}

#[cfg(feature = "server")]
fn to_server_err(e: crate::backend::ApiError) -> ServerFnError {
    ServerFnError::ServerError(e.to_string())
}

#[server(ListResources)]
pub async fn list_resources(limit: u32, offset: u32) -> Result<Vec<Resource>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        crate::backend::cloudopt::list_resources(api()?, limit, offset)
            .await
            .map_err(to_server_err)
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = (limit, offset);
        Ok(vec![])
    }
}

#[server(ListRecommendations)]
pub async fn list_recommendations() -> Result<RecommendationsResponse, ServerFnError> {
    #[cfg(feature = "server")]
    {
        crate::backend::cloudopt::list_recommendations(api()?)
            .await
            .map_err(to_server_err)
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(RecommendationsResponse::default())
    }
}

#[server(ImplementRecommendation)]
pub async fn implement_recommendation(resource_id: i64) -> Result<(), ServerFnError> {
    #[cfg(feature = "server")]
    {
        use dioxus::logger::tracing::info;

        crate::backend::cloudopt::implement_recommendation(api()?, resource_id)
            .await
            .map_err(to_server_err)?;
        info!("implement_recommendation: resource {} marked implemented", resource_id);
        Ok(())
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = resource_id;
        Ok(())
    }
}

#[server(HealthCheck)]
pub async fn health_check() -> Result<HealthDto, ServerFnError> {
    #[cfg(feature = "server")]
    {
        crate::backend::cloudopt::health_check(api()?)
            .await
            .map_err(to_server_err)
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(HealthDto {
            status: "unknown".into(),
        })
    }
}

/// Interactive documentation served by the backend itself.
#[server(ApiDocsUrl)]
pub async fn api_docs_url() -> Result<String, ServerFnError> {
    #[cfg(feature = "server")]
    {
        Ok(format!("{}/docs", api()?.base_url()))
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(String::new())
    }
}

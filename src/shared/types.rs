use serde::{Deserialize, Serialize};

/// A tracked cloud resource as returned by `GET /resources`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String, // "instance" | "storage"
    pub provider: String,
    #[serde(default)]
    pub instance_type: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub cpu_utilization: Option<f64>,
    #[serde(default)]
    pub memory_utilization: Option<f64>,
    #[serde(default)]
    pub storage_gb: Option<i64>,
    pub monthly_cost: f64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// A cost optimization suggestion for one resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub resource_id: i64,
    pub recommendation_type: String, // "downsize" | "shrink"
    pub current_config: String,
    pub suggested_config: String,
    pub potential_saving: f64,
    pub confidence: f64, // 0..=1
    pub reason: String,
    #[serde(default)]
    pub implemented: bool,
}

/// Backend-computed aggregates. Every field may be missing from the payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub total_resources: Option<i64>,
    #[serde(default)]
    pub total_monthly_cost: Option<f64>,
    #[serde(default)]
    pub total_potential_savings: Option<f64>,
    #[serde(default)]
    pub open_recommendations: Option<i64>,
    #[serde(default)]
    pub savings_percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}

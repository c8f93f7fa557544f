use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::estimate::ComponentEstimate;
use super::validation::{FieldIssue, ValidationError};

/// Request body for a new service estimate. Only these four keys are read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEstimatePayload {
    pub vehicle_id: Option<String>,
    /// Optional; absent or `null` is stored as an empty list.
    pub estimates: Option<Vec<ComponentEstimate>>,
    pub total_estimated_hours: Option<f64>,
    #[serde(rename = "totalEstimatedCostUSD")]
    pub total_estimated_cost_usd: Option<f64>,
}

impl ServiceEstimatePayload {
    /// Checks required fields only. Totals are trusted as sent and never
    /// compared against the per-component figures.
    pub fn validate(self) -> Result<NewServiceEstimate, ValidationError> {
        let mut issues = Vec::new();

        let vehicle_id = self.vehicle_id.filter(|id| !id.is_empty());
        if vehicle_id.is_none() {
            issues.push(FieldIssue::Required { path: "vehicleId" });
        }
        if self.total_estimated_hours.is_none() {
            issues.push(FieldIssue::Required {
                path: "totalEstimatedHours",
            });
        }
        if self.total_estimated_cost_usd.is_none() {
            issues.push(FieldIssue::Required {
                path: "totalEstimatedCostUSD",
            });
        }

        match (
            vehicle_id,
            self.total_estimated_hours,
            self.total_estimated_cost_usd,
        ) {
            (Some(vehicle_id), Some(total_estimated_hours), Some(total_estimated_cost_usd)) => {
                Ok(NewServiceEstimate {
                    vehicle_id,
                    estimates: self.estimates.unwrap_or_default(),
                    total_estimated_hours,
                    total_estimated_cost_usd,
                })
            }
            _ => Err(ValidationError {
                entity: "ServiceEstimate",
                issues,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewServiceEstimate {
    pub vehicle_id: String,
    pub estimates: Vec<ComponentEstimate>,
    pub total_estimated_hours: f64,
    pub total_estimated_cost_usd: f64,
}

impl NewServiceEstimate {
    pub fn into_service_estimate(self, id: String, created_at: DateTime<Utc>) -> ServiceEstimate {
        ServiceEstimate {
            id,
            vehicle_id: self.vehicle_id,
            estimates: self.estimates,
            total_estimated_hours: self.total_estimated_hours,
            total_estimated_cost_usd: self.total_estimated_cost_usd,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceEstimate {
    #[serde(rename = "_id")]
    pub id: String,
    pub vehicle_id: String,
    pub estimates: Vec<ComponentEstimate>,
    pub total_estimated_hours: f64,
    #[serde(rename = "totalEstimatedCostUSD")]
    pub total_estimated_cost_usd: f64,
    pub created_at: DateTime<Utc>,
}

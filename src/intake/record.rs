//! Onboarding record and stored profile types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Finished three-field payload handed to the intake sink on submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Profile persisted once onboarding completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub onboarded_at: DateTime<Utc>,
}

impl Profile {
    pub fn from_record(record: IntakeRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            onboarded_at: Utc::now(),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

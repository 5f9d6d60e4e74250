use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub visit_id: Uuid,
    pub medication_name: String,
    pub dosage: String,
    pub instructions: Option<String>,
    pub duration_days: Option<i32>,
}

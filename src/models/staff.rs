use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::StaffRole;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: Uuid,
    pub full_name: String,
    pub role: StaffRole,
    pub phone: Option<String>,
    pub email: String,
    pub clinic_id: Uuid,
}

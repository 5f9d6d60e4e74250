use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Gender;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub full_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub clinic_id: Uuid,
}

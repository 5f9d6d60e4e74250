use super::ModelError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(UserType {
    Patient => "patient",
    ClinicStaff => "clinic_staff",
    Doctor => "doctor",
    Nurse => "nurse",
    Admin => "admin",
});

str_enum!(LoginType {
    Staff => "staff",
    Medical => "medical",
});

str_enum!(StaffRole {
    Doctor => "Doctor",
    Nurse => "Nurse",
    Administrator => "Administrator",
    Pharmacist => "Pharmacist",
});

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

impl UserType {
    /// Whether a login type carries meaning for this user type.
    /// Only staff/medical accounts distinguish the two portal entrances.
    pub fn uses_login_type(&self) -> bool {
        matches!(self, Self::ClinicStaff | Self::Doctor | Self::Nurse)
    }
}

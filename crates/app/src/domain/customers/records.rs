//! Customer Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{StoredValue, stored_value_traits},
    uuids::TypedUuid,
};

/// Customer UUID
pub type CustomerUuid = TypedUuid<CustomerRecord>;

/// Where the customer first reached the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerSource {
    #[default]
    Manual,
    Whatsapp,
    Facebook,
    Instagram,
    CentroJoyero,
    Referido,
}

impl StoredValue for CustomerSource {
    const KIND: &'static str = "customer source";
    const ALL: &'static [Self] = &[
        Self::Manual,
        Self::Whatsapp,
        Self::Facebook,
        Self::Instagram,
        Self::CentroJoyero,
        Self::Referido,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Whatsapp => "whatsapp",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::CentroJoyero => "centro_joyero",
            Self::Referido => "referido",
        }
    }
}

stored_value_traits!(CustomerSource);

/// Material line the customer usually buys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialPreference {
    #[default]
    #[serde(rename = "ambos")]
    Ambos,
    #[serde(rename = "plata_pura")]
    PlataPura,
    #[serde(rename = "baño_oro")]
    BanoOro,
}

impl StoredValue for MaterialPreference {
    const KIND: &'static str = "material preference";
    const ALL: &'static [Self] = &[Self::Ambos, Self::PlataPura, Self::BanoOro];

    fn as_str(self) -> &'static str {
        match self {
            Self::Ambos => "ambos",
            Self::PlataPura => "plata_pura",
            Self::BanoOro => "baño_oro",
        }
    }
}

stored_value_traits!(MaterialPreference);

/// Standing of the customer's store credit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditStatus {
    #[default]
    None,
    Active,
    Suspended,
    Blocked,
}

impl StoredValue for CreditStatus {
    const KIND: &'static str = "credit status";
    const ALL: &'static [Self] = &[Self::None, Self::Active, Self::Suspended, Self::Blocked];

    fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Blocked => "blocked",
        }
    }
}

stored_value_traits!(CreditStatus);

/// Customer Record
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub uuid: CustomerUuid,
    pub name: String,
    pub phone: String,
    pub source: CustomerSource,
    pub material_preference: MaterialPreference,
    pub credit_limit: u64,
    pub credit_status: CreditStatus,
    pub credit_notes: Option<String>,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gold_plated_preference_keeps_its_stored_name() {
        assert_eq!(MaterialPreference::BanoOro.to_string(), "baño_oro");
        assert_eq!(
            "baño_oro".parse::<MaterialPreference>(),
            Ok(MaterialPreference::BanoOro)
        );
    }

    #[test]
    fn source_names_are_snake_case() {
        assert_eq!(CustomerSource::CentroJoyero.as_str(), "centro_joyero");
        assert!("tiktok".parse::<CustomerSource>().is_err());
    }

    #[test]
    fn serde_names_match_stored_names() -> Result<(), serde_norway::Error> {
        for preference in MaterialPreference::ALL {
            let parsed: MaterialPreference = serde_norway::from_str(preference.as_str())?;

            assert_eq!(parsed, *preference);
        }

        for status in CreditStatus::ALL {
            let parsed: CreditStatus = serde_norway::from_str(status.as_str())?;

            assert_eq!(parsed, *status);
        }

        Ok(())
    }
}

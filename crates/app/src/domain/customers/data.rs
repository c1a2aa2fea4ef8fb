//! Customers Data

use crate::domain::customers::records::{
    CreditStatus, CustomerSource, CustomerUuid, MaterialPreference,
};

/// New Customer Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub uuid: CustomerUuid,
    pub name: String,
    pub phone: String,
    pub source: CustomerSource,
    pub material_preference: MaterialPreference,
    pub credit_limit: u64,
    pub credit_status: CreditStatus,
    pub credit_notes: Option<String>,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalAidContact {
    pub name: String,
    pub phone: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportGroup {
    pub name: String,
    pub location: String,
    /// Email address or phone number
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStatistics {
    pub custody_rate: String,
    pub average_support: String,
    pub median_income: String,
}

/// Custody law summary and local contacts for one state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateResource {
    pub state: String,
    pub abbreviation: String,
    pub custody_laws: String,
    pub support_calculator: String,
    #[serde(default)]
    pub legal_aid: Vec<LegalAidContact>,
    #[serde(default)]
    pub support_groups: Vec<SupportGroup>,
    pub key_statistics: KeyStatistics,
    #[serde(default)]
    pub important_notes: Vec<String>,
}

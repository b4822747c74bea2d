use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CreateAccountInput {
    #[serde(rename = "type")]
    pub account_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountIdInput {
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectedAccountType {
    Express,
    Standard,
    Custom,
}

impl ConnectedAccountType {
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            None | Some("") | Some("express") => Some(Self::Express),
            Some("standard") => Some(Self::Standard),
            Some("custom") => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Processor-neutral view of a connected account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConnectedAccount {
    pub id: String,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub charges_enabled: bool,
    pub details_submitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub success: bool,
    pub account: ConnectedAccount,
}

#[derive(Debug, Serialize)]
pub struct AccountLinkResponse {
    pub success: bool,
    pub url: String,
}

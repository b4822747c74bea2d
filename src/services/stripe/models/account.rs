use stripe::Account;

use crate::models::connect::{ConnectedAccount, ConnectedAccountType};

impl From<ConnectedAccountType> for stripe::AccountType {
    fn from(account_type: ConnectedAccountType) -> Self {
        match account_type {
            ConnectedAccountType::Express => stripe::AccountType::Express,
            ConnectedAccountType::Standard => stripe::AccountType::Standard,
            ConnectedAccountType::Custom => stripe::AccountType::Custom,
        }
    }
}

impl From<Account> for ConnectedAccount {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            account_type: account.type_.map(|t| t.as_str().to_string()),
            country: account.country,
            email: account.email,
            charges_enabled: account.charges_enabled.unwrap_or(false),
            details_submitted: account.details_submitted.unwrap_or(false),
            created: account.created,
            requirements: account
                .requirements
                .and_then(|r| serde_json::to_value(r).ok()),
        }
    }
}

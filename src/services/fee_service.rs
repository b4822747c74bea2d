use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::str::FromStr;

pub const DEFAULT_PLATFORM_FEE_PERCENT: u32 = 10;
pub const MAX_FEE_PERCENT: u32 = 100;
/// Largest single charge the processor accepts, in cents.
pub const MAX_AMOUNT_CENTS: i64 = 99_999_999;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeeError {
    InvalidRate,
    InvalidNights,
    InvalidFeePercent,
    InvalidAmount,
    InvalidDates,
}

impl std::fmt::Display for FeeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeeError::InvalidRate => write!(f, "Nightly rate must be positive"),
            FeeError::InvalidNights => write!(f, "Stay must be at least one night"),
            FeeError::InvalidFeePercent => write!(f, "Fee percentage must be between 0 and 100"),
            FeeError::InvalidAmount => write!(f, "Amount must be a positive number"),
            FeeError::InvalidDates => write!(f, "Check-out must be after check-in"),
        }
    }
}

impl std::error::Error for FeeError {}

/// Price of a stay before payment: the guest pays `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayQuote {
    pub nights: u32,
    pub subtotal: i64,
    pub fee: i64,
    pub total: i64,
}

/// Split of a charged amount between the platform and the recipient account.
/// All values are in cents and `fee + recipient == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub total: i64,
    pub fee: i64,
    pub recipient: i64,
}

pub struct FeeService;

impl FeeService {
    /// Round-half-up percentage of a non-negative cent amount, rounded once.
    fn percent_of(cents: i64, fee_percent: u32) -> i64 {
        (cents * fee_percent as i64 + 50) / 100
    }

    fn check_percent(fee_percent: u32) -> Result<(), FeeError> {
        if fee_percent > MAX_FEE_PERCENT {
            return Err(FeeError::InvalidFeePercent);
        }
        Ok(())
    }

    /// Quote a stay of `nights` at `nightly_rate` cents per night.
    pub fn quote_stay(
        nightly_rate: i64,
        nights: u32,
        fee_percent: u32,
    ) -> Result<StayQuote, FeeError> {
        if nightly_rate <= 0 {
            return Err(FeeError::InvalidRate);
        }
        if nights == 0 {
            return Err(FeeError::InvalidNights);
        }
        Self::check_percent(fee_percent)?;

        let subtotal = nightly_rate * nights as i64;
        let fee = Self::percent_of(subtotal, fee_percent);

        Ok(StayQuote {
            nights,
            subtotal,
            fee,
            total: subtotal + fee,
        })
    }

    /// Split a charged total into the platform fee and what the recipient keeps.
    pub fn split_total(total: i64, fee_percent: u32) -> Result<FeeBreakdown, FeeError> {
        if total <= 0 {
            return Err(FeeError::InvalidAmount);
        }
        Self::check_percent(fee_percent)?;

        let fee = Self::percent_of(total, fee_percent);
        Ok(FeeBreakdown {
            total,
            fee,
            recipient: total - fee,
        })
    }

    /// Convert a wire amount (`293.70` or `"293.70"`) into cents.
    pub fn parse_amount(value: &Value) -> Result<i64, FeeError> {
        let amount = match value {
            Value::Number(n) => Decimal::from_str(&n.to_string()),
            Value::String(s) => Decimal::from_str(s.trim()),
            _ => return Err(FeeError::InvalidAmount),
        }
        .map_err(|_| FeeError::InvalidAmount)?;

        if amount <= Decimal::ZERO {
            return Err(FeeError::InvalidAmount);
        }

        amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|cents| cents.to_i64())
            .filter(|cents| *cents > 0 && *cents <= MAX_AMOUNT_CENTS)
            .ok_or(FeeError::InvalidAmount)
    }

    /// Number of nights between two `YYYY-MM-DD` dates.
    pub fn nights_between(check_in: &str, check_out: &str) -> Result<u32, FeeError> {
        let check_in =
            NaiveDate::parse_from_str(check_in, "%Y-%m-%d").map_err(|_| FeeError::InvalidDates)?;
        let check_out =
            NaiveDate::parse_from_str(check_out, "%Y-%m-%d").map_err(|_| FeeError::InvalidDates)?;

        let nights = (check_out - check_in).num_days();
        if nights <= 0 {
            return Err(FeeError::InvalidDates);
        }
        u32::try_from(nights).map_err(|_| FeeError::InvalidDates)
    }

    /// Cents to display units, e.g. `29370` -> `293.70`.
    pub fn to_decimal(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }
}

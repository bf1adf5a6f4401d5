// Account-scoped responses

use super::MphEnvelope;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphUserAllBalancesResponse {
    #[serde(rename = "getuserallbalances")]
    pub balances: MphEnvelope<Vec<MphCoinBalance>>,
}

/// Balance of one coin across the pool and its auto-exchange
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphCoinBalance {
    pub coin: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub confirmed: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub unconfirmed: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub ae_confirmed: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub ae_unconfirmed: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub exchange: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphUserBalanceResponse {
    #[serde(rename = "getuserbalance")]
    pub balance: MphEnvelope<MphBalance>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphBalance {
    #[serde(with = "crate::serde_util::number_or_string")]
    pub confirmed: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub unconfirmed: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphUserHashRateResponse {
    #[serde(rename = "getuserhashrate")]
    pub hash_rate: MphEnvelope<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphUserShareRateResponse {
    #[serde(rename = "getusersharerate")]
    pub share_rate: MphEnvelope<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphUserStatusResponse {
    #[serde(rename = "getuserstatus")]
    pub status: MphEnvelope<MphUserStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphUserStatus {
    pub username: String,
    pub shares: MphUserShares,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub hashrate: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub sharerate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphUserShares {
    #[serde(with = "crate::serde_util::number_or_string")]
    pub valid: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub invalid: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub id: u64,
    #[serde(with = "crate::serde_util::option_number_or_string")]
    pub donate_percent: Option<f64>,
    #[serde(with = "crate::serde_util::option_number_or_string")]
    pub is_anonymous: Option<i64>,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphUserTransactionsResponse {
    #[serde(rename = "getusertransactions")]
    pub transactions: MphEnvelope<MphUserTransactions>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphUserTransactions {
    pub transactions: Vec<MphTransaction>,
    /// Totals keyed by transaction type (`Credit`, `Debit_AP`, `TXFee`, ...)
    #[serde(rename = "transactionsummary")]
    pub summary: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphTransaction {
    #[serde(with = "crate::serde_util::number_or_string")]
    pub id: u64,
    pub username: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub coin_address: Option<String>,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub amount: f64,
    pub blockhash: Option<String>,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub height: u64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub confirmations: i64,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphUserWorkersResponse {
    #[serde(rename = "getuserworkers")]
    pub workers: MphEnvelope<Vec<MphWorker>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphWorker {
    #[serde(with = "crate::serde_util::number_or_string")]
    pub id: u64,
    pub username: String,
    pub password: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub monitor: i64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub hashrate: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub difficulty: f64,
}

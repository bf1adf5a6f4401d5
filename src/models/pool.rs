// Pool-scoped responses

use super::MphEnvelope;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphBlockCountResponse {
    #[serde(rename = "getblockcount")]
    pub block_count: MphEnvelope<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphBlocksFoundResponse {
    #[serde(rename = "getblocksfound")]
    pub blocks: MphEnvelope<Vec<MphFoundBlock>>,
}

/// A block the pool found
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphFoundBlock {
    #[serde(with = "crate::serde_util::number_or_string")]
    pub id: u64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub height: u64,
    pub blockhash: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub confirmations: i64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub amount: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub difficulty: f64,
    /// Unix timestamp
    #[serde(with = "crate::serde_util::number_or_string")]
    pub time: i64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub accounted: i64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub account_id: u64,
    pub worker_name: Option<String>,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub shares: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub share_id: u64,
    pub finder: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub is_anonymous: i64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub estshares: f64,
}

/// `{"getblockstats": {...}}`
///
/// The payload is read either flat (`{"height": 100}`) or enveloped with a
/// `data` object, so every inner field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphBlockStatsResponse {
    #[serde(rename = "getblockstats")]
    pub stats: MphBlockStats,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphBlockStats {
    pub version: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub runtime: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub height: u64,
    pub data: Option<MphBlockStatsData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphBlockStatsData {
    #[serde(rename = "Total", with = "crate::serde_util::number_or_string")]
    pub total: u64,
    #[serde(rename = "TotalValid", with = "crate::serde_util::number_or_string")]
    pub total_valid: u64,
    #[serde(rename = "TotalOrphan", with = "crate::serde_util::number_or_string")]
    pub total_orphan: u64,
    #[serde(rename = "TotalDifficulty", with = "crate::serde_util::number_or_string")]
    pub total_difficulty: f64,
    #[serde(rename = "TotalShares", with = "crate::serde_util::number_or_string")]
    pub total_shares: f64,
    #[serde(rename = "TotalEstimatedShares", with = "crate::serde_util::number_or_string")]
    pub total_estimated_shares: f64,
    #[serde(rename = "TotalAmount", with = "crate::serde_util::number_or_string")]
    pub total_amount: f64,
    /// Per-period breakdowns (`1HourTotal`, `24HourValid`, ...)
    #[serde(flatten)]
    pub periods: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphCurrentWorkersResponse {
    #[serde(rename = "getcurrentworkers")]
    pub workers: MphEnvelope<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphDifficultyResponse {
    #[serde(rename = "getdifficulty")]
    pub difficulty: MphEnvelope<f64>,
}

/// Seconds until the next block at the current pool hash rate
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphEstimatedTimeResponse {
    #[serde(rename = "getestimatedtime")]
    pub estimated_time: MphEnvelope<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphPoolHashRateResponse {
    #[serde(rename = "getpoolhashrate")]
    pub hash_rate: MphEnvelope<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphPoolInfoResponse {
    #[serde(rename = "getpoolinfo")]
    pub info: MphEnvelope<MphPoolInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphPoolInfo {
    pub currency: String,
    pub coinname: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub cointarget: u64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub coindiffchangetarget: u64,
    pub algorithm: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub stratumport: u16,
    pub payout_system: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub confirmations: u64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub min_ap_threshold: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub max_ap_threshold: f64,
    pub reward_type: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub reward: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub txfee: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub txfee_manual: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub txfee_auto: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub fees: f64,
}

/// Shares per second
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphPoolShareRateResponse {
    #[serde(rename = "getpoolsharerate")]
    pub share_rate: MphEnvelope<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphPoolStatusResponse {
    #[serde(rename = "getpoolstatus")]
    pub status: MphEnvelope<MphPoolStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphPoolStatus {
    pub pool_name: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub hashrate: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub efficiency: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub progress: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub workers: u64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub currentnetworkblock: u64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub nextnetworkblock: u64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub lastblock: u64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub networkdiff: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub esttime: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub estshares: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub timesincelast: i64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub nethashrate: f64,
}

/// Seconds since the pool last found a block
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphTimeSinceLastBlockResponse {
    #[serde(rename = "gettimesincelastblock")]
    pub time_since_last_block: MphEnvelope<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphTopContributorsResponse {
    #[serde(rename = "gettopcontributors")]
    pub contributors: MphEnvelope<MphTopContributors>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphTopContributors {
    pub hashes: Vec<MphContributor>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphContributor {
    pub account: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub hashrate: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub donation: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphDashboardResponse {
    #[serde(rename = "getdashboarddata")]
    pub dashboard: MphEnvelope<MphDashboard>,
}

/// Everything the web dashboard shows for one user on one pool
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphDashboard {
    pub personal: MphDashboardPersonal,
    pub balance: MphDashboardBalance,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub balance_for_auto_exchange: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub balance_on_exchange: f64,
    pub recent_credits_24hours: MphDashboardCredits24h,
    pub recent_credits: Vec<MphDashboardCredit>,
    pub pool: MphDashboardPool,
    pub network: MphDashboardNetwork,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphDashboardPersonal {
    #[serde(with = "crate::serde_util::number_or_string")]
    pub hashrate: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub sharerate: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub sharedifficulty: f64,
    pub shares: MphDashboardShares,
    pub estimates: MphDashboardEstimates,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphDashboardShares {
    #[serde(with = "crate::serde_util::number_or_string")]
    pub valid: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub invalid: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub invalid_percent: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub unpaid: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphDashboardEstimates {
    #[serde(with = "crate::serde_util::number_or_string")]
    pub block: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub fee: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub donation: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub payout: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphDashboardBalance {
    #[serde(with = "crate::serde_util::number_or_string")]
    pub confirmed: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub unconfirmed: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphDashboardCredits24h {
    #[serde(with = "crate::serde_util::number_or_string")]
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphDashboardCredit {
    pub date: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphDashboardPool {
    pub info: MphDashboardPoolInfo,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub workers: u64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub hashrate: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub difficulty: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphDashboardPoolInfo {
    pub name: String,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphDashboardNetwork {
    #[serde(with = "crate::serde_util::number_or_string")]
    pub hashrate: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub difficulty: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub block: u64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub esttimeperblock: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub nextdifficulty: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub changein: i64,
}

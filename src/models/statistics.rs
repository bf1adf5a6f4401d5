// Hub-wide statistics (no API key required)

use serde::Deserialize;

/// `{"success": true, "return": [...]}`, used by the multi-coin statistics actions
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphListResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "return")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphCoinProfitStatistics {
    pub coin_name: String,
    pub host: String,
    pub host_list: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub port: u16,
    pub direct_mining_host: String,
    pub direct_mining_host_list: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub direct_mining_algo_port: u16,
    pub algo: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub normalization: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub profit: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub average_profit: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub average_difficulty: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub last_block: u64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub last_block_time: i64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub pool_hash: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub net_hash: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub difficulty: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub reward: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub exchange_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MphAutoSwitchingProfitStatistics {
    pub algo: String,
    pub current_mining_coin: String,
    pub host: String,
    pub all_host_list: String,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub port: u16,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub algo_switch_port: u16,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub multialgo_switch_port: u16,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub profit: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub normalized_profit_amd: f64,
    #[serde(with = "crate::serde_util::number_or_string")]
    pub normalized_profit_nvidia: f64,
}

/// Answer to `action=public`; not wrapped in an envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MphPublicPoolResponse {
    pub pool_name: String,
    #[serde(default, with = "crate::serde_util::number_or_string")]
    pub hashrate: f64,
    #[serde(default, with = "crate::serde_util::number_or_string")]
    pub workers: u64,
    #[serde(default, with = "crate::serde_util::number_or_string")]
    pub shares_this_round: f64,
    #[serde(default, with = "crate::serde_util::number_or_string")]
    pub last_block: u64,
    #[serde(default, with = "crate::serde_util::number_or_string")]
    pub network_hashrate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profit_list() {
        let body = r#"{"success":true,"return":[
            {"coin_name":"ethereum","algo":"Ethash","port":"20535","profit":0.0123,"host":"us-east.ethash-hub.miningpoolhub.com"}
        ]}"#;
        let response: MphListResponse<MphCoinProfitStatistics> = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].coin_name, "ethereum");
        assert_eq!(response.items[0].port, 20535);
    }

    #[test]
    fn test_list_requires_return() {
        let body = r#"{"success":false}"#;
        assert!(serde_json::from_str::<MphListResponse<MphAutoSwitchingProfitStatistics>>(body).is_err());
    }

    #[test]
    fn test_public_pool() {
        let body = r#"{"pool_name":"Monero","hashrate":"1500","workers":12,"last_block":"1500000"}"#;
        let response: MphPublicPoolResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.pool_name, "Monero");
        assert_eq!(response.hashrate, 1500.0);
        assert_eq!(response.last_block, 1_500_000);
    }
}

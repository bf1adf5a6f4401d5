//! The MiningPoolHub endpoint surface.
//!
//! Every endpoint is the same three steps: name the action, optionally add an
//! `id`, and hand the request to [`MphProvider::request`] with the model the
//! answer should decode into. Implementors only supply `request`.

use crate::models::*;
use crate::operation::ProviderOperation;
use crate::types::{MphResult, RequestDescriptor};
use serde::de::DeserializeOwned;

pub trait MphProvider {
    type Operation: ProviderOperation;

    /// Run one request through the pipeline and deliver the decoded result
    /// to `completion` exactly once, unless cancelled.
    fn request<T, F>(&self, request: RequestDescriptor, completion: F) -> Self::Operation
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(MphResult<T>) + Send + 'static;

    // No API key required

    /// Mining profit statistics for every coin on the hub
    fn get_mining_and_profits_statistics<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphListResponse<MphCoinProfitStatistics>>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getminingandprofitsstatistics"), completion)
    }

    /// Current auto-switching coin and profit per algorithm
    fn get_auto_switching_and_profits_statistics<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphListResponse<MphAutoSwitchingProfitStatistics>>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getautoswitchingandprofitsstatistics"), completion)
    }

    /// Public pool statistics
    fn get_public_pool_statistics<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphPublicPoolResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("public"), completion)
    }

    // API key required

    /// Balances of every coin on the account
    fn get_user_all_balances<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphUserAllBalancesResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getuserallbalances"), completion)
    }

    /// Current block height of the blockchain
    fn get_block_count<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphBlockCountResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getblockcount"), completion)
    }

    /// The last blocks the pool found
    fn get_blocks_found<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphBlocksFoundResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getblocksfound"), completion)
    }

    fn get_block_stats<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphBlockStatsResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getblockstats"), completion)
    }

    /// Number of workers currently active on the pool
    fn get_current_workers<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphCurrentWorkersResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getcurrentworkers"), completion)
    }

    /// Everything the web dashboard shows, for the given user id or the key's owner
    fn get_dashboard_data<F>(&self, id: Option<&str>, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphDashboardResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getdashboarddata").with_id(id), completion)
    }

    fn get_difficulty<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphDifficultyResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getdifficulty"), completion)
    }

    /// Estimated seconds to the next block at the current pool hash rate
    fn get_estimated_time<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphEstimatedTimeResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getestimatedtime"), completion)
    }

    fn get_pool_hash_rate<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphPoolHashRateResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getpoolhashrate"), completion)
    }

    /// Pool settings: algorithm, ports, fees, payout thresholds
    fn get_pool_info<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphPoolInfoResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getpoolinfo"), completion)
    }

    /// Pool shares per second
    fn get_pool_share_rate<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphPoolShareRateResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getpoolsharerate"), completion)
    }

    fn get_pool_status<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphPoolStatusResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getpoolstatus"), completion)
    }

    /// Seconds since the pool's last block
    fn get_time_since_last_block<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphTimeSinceLastBlockResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("gettimesincelastblock"), completion)
    }

    fn get_top_contributors<F>(&self, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphTopContributorsResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("gettopcontributors"), completion)
    }

    fn get_user_balance<F>(&self, id: Option<&str>, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphUserBalanceResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getuserbalance").with_id(id), completion)
    }

    fn get_user_hash_rate<F>(&self, id: Option<&str>, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphUserHashRateResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getuserhashrate").with_id(id), completion)
    }

    fn get_user_share_rate<F>(&self, id: Option<&str>, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphUserShareRateResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getusersharerate").with_id(id), completion)
    }

    fn get_user_status<F>(&self, id: Option<&str>, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphUserStatusResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getuserstatus").with_id(id), completion)
    }

    fn get_user_transactions<F>(&self, id: Option<&str>, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphUserTransactionsResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getusertransactions").with_id(id), completion)
    }

    /// Workers and their hash rates
    fn get_user_workers<F>(&self, id: Option<&str>, completion: F) -> Self::Operation
    where
        F: FnOnce(MphResult<MphUserWorkersResponse>) + Send + 'static,
    {
        self.request(RequestDescriptor::get("getuserworkers").with_id(id), completion)
    }
}

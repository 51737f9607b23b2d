use near_sdk::json_types::U128;
use near_sdk::{near, AccountId, Gas};

use crate::RandomWordsRequest;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
#[near(serializers = [borsh, json])]
pub enum RequestStatus {
    /// Waiting for the coordinator to deliver random words
    Pending,
    /// Random words delivered and recorded
    Fulfilled,
}

/// Random words request for JSON view (returned from view methods)
#[derive(Clone, Debug)]
#[near(serializers = [json])]
pub struct RandomWordsRequestView {
    pub request_id: u64,
    pub requester: AccountId,
    pub coordinator_id: AccountId,
    pub subscription_id: u64,
    pub key_hash: String,           // lowercase hex, 64 chars
    pub num_words: u32,
    pub callback_gas: Gas,
    pub request_confirmations: u16,
    pub status: RequestStatus,
    pub random_words: Vec<U128>,    // U128 for JSON
    pub requested_at: u64,
    pub fulfilled_at: Option<u64>,
}

impl From<RandomWordsRequest> for RandomWordsRequestView {
    fn from(request: RandomWordsRequest) -> Self {
        Self {
            request_id: request.request_id,
            requester: request.requester,
            coordinator_id: request.coordinator_id,
            subscription_id: request.subscription_id,
            key_hash: hex::encode(request.key_hash),
            num_words: request.num_words,
            callback_gas: request.callback_gas,
            request_confirmations: request.request_confirmations,
            status: request.status,
            random_words: request.random_words.into_iter().map(U128).collect(),
            requested_at: request.requested_at,
            fulfilled_at: request.fulfilled_at,
        }
    }
}

/// Current request configuration
#[derive(Clone, Debug, PartialEq)]
#[near(serializers = [json])]
pub struct RandomSeedConfig {
    pub owner_id: AccountId,
    pub coordinator_id: Option<AccountId>,
    pub subscription_id: u64,
    pub key_hash: Option<String>,
    pub num_words: u32,
    pub callback_gas: Gas,
    pub request_confirmations: u16,
}

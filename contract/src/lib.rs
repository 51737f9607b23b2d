use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::collections::LookupMap;
use near_sdk::json_types::U128;
use near_sdk::serde::Serialize;
use near_sdk::{env, log, near, near_bindgen, AccountId, BorshStorageKey, Gas, PanicOnDefault};

mod admin;
mod events;
mod requests;
mod types;
mod validation;
mod views;

pub use types::{RandomSeedConfig, RandomWordsRequestView, RequestStatus};

pub type KeyHash = [u8; 32];

// Request defaults
pub const DEFAULT_NUM_WORDS: u32 = 1;
pub const DEFAULT_REQUEST_CONFIRMATIONS: u16 = 3;
pub const DEFAULT_CALLBACK_GAS: Gas = Gas::from_tgas(10);

// Hard caps enforced by the setters
pub const MAX_NUM_WORDS: u32 = 500;
pub const MAX_REQUEST_CONFIRMATIONS: u16 = 200;
pub const MAX_CALLBACK_GAS: Gas = Gas::from_tgas(300);

#[derive(BorshSerialize, BorshStorageKey)]
#[borsh(crate = "near_sdk::borsh")]
enum StorageKey {
    Requests,
}

/// Random words request stored in contract
///
/// Snapshots the configuration in effect when the request was made, so later
/// setter calls never change what is expected or who may deliver it.
#[derive(Clone, Debug)]
#[near(serializers = [borsh])]
pub struct RandomWordsRequest {
    pub request_id: u64,
    pub requester: AccountId,
    pub coordinator_id: AccountId,
    pub subscription_id: u64,
    pub key_hash: KeyHash,
    pub num_words: u32,
    pub callback_gas: Gas,
    pub request_confirmations: u16,
    pub status: RequestStatus,
    pub random_words: Vec<u128>,
    pub requested_at: u64,
    pub fulfilled_at: Option<u64>,
}

#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
#[borsh(crate = "near_sdk::borsh")]
#[near_bindgen]
pub struct Contract {
    // Access control
    owner_id: AccountId,
    coordinator_id: Option<AccountId>,

    // Request configuration
    subscription_id: u64,
    key_hash: Option<KeyHash>,
    num_words: u32,
    callback_gas: Gas,
    request_confirmations: u16,

    // Request tracking
    next_request_id: u64,
    last_request_id: Option<u64>,
    random_words: Vec<u128>,
    requests: LookupMap<u64, RandomWordsRequest>,
}

#[near_bindgen]
impl Contract {
    #[init]
    pub fn new(owner_id: Option<AccountId>, coordinator_id: Option<AccountId>) -> Self {
        let owner_id = owner_id.unwrap_or_else(env::predecessor_account_id);

        log!(
            "RandomSeed initialized: owner={}, coordinator={}",
            owner_id,
            coordinator_id
                .as_ref()
                .map(|id| id.as_str())
                .unwrap_or("none")
        );

        Self {
            owner_id,
            coordinator_id,
            subscription_id: 0,
            key_hash: None,
            num_words: DEFAULT_NUM_WORDS,
            callback_gas: DEFAULT_CALLBACK_GAS,
            request_confirmations: DEFAULT_REQUEST_CONFIRMATIONS,
            next_request_id: 0,
            last_request_id: None,
            random_words: Vec::new(),
            requests: LookupMap::new(StorageKey::Requests),
        }
    }
}

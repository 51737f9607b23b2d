use crate::*;
use near_sdk::serde_json::json;

const EVENT_STANDARD: &str = "random-seed";
const EVENT_STANDARD_VERSION: &str = "1.0.0";

pub mod emit {
    use super::*;
    use near_sdk::{env, log};

    #[derive(Serialize)]
    #[serde(crate = "near_sdk::serde")]
    struct RandomWordsRequestedEventData<'a> {
        pub request_id: u64,
        pub requester: &'a AccountId,
        pub coordinator_id: &'a AccountId,
        pub subscription_id: u64,
        pub key_hash: String,
        pub num_words: u32,
        pub callback_gas: Gas,
        pub request_confirmations: u16,
        pub timestamp: u64,
    }

    #[derive(Serialize)]
    #[serde(crate = "near_sdk::serde")]
    struct RandomWordsFulfilledEventData<'a> {
        pub request_id: u64,
        pub coordinator_id: &'a AccountId,
        pub random_words: Vec<U128>,
        pub timestamp: u64,
    }

    fn log_event<T: Serialize>(event: &str, data: T) {
        let event = json!({
            "standard": EVENT_STANDARD,
            "version": EVENT_STANDARD_VERSION,
            "event": event,
            "data": [data]
        });

        log!("EVENT_JSON:{}", event.to_string());
    }

    /// Emit event when the coordinator should produce random words
    pub fn random_words_requested(request: &RandomWordsRequest) {
        log_event(
            "random_words_requested",
            RandomWordsRequestedEventData {
                request_id: request.request_id,
                requester: &request.requester,
                coordinator_id: &request.coordinator_id,
                subscription_id: request.subscription_id,
                key_hash: hex::encode(request.key_hash),
                num_words: request.num_words,
                callback_gas: request.callback_gas,
                request_confirmations: request.request_confirmations,
                timestamp: request.requested_at,
            },
        );
    }

    /// Emit event when the coordinator delivered random words
    pub fn random_words_fulfilled(request_id: u64, coordinator_id: &AccountId, random_words: &[u128]) {
        log_event(
            "random_words_fulfilled",
            RandomWordsFulfilledEventData {
                request_id,
                coordinator_id,
                random_words: random_words.iter().copied().map(U128).collect(),
                timestamp: env::block_timestamp(),
            },
        );
    }
}

use crate::*;

#[near_bindgen]
impl Contract {
    /// Number of random words requested per call
    pub fn num_words(&self) -> u32 {
        self.num_words
    }

    /// Coordinator subscription (0 = not set)
    pub fn s_subscription_id(&self) -> u64 {
        self.subscription_id
    }

    /// Id of the most recent request
    pub fn s_request_id(&self) -> Option<u64> {
        self.last_request_id
    }

    /// Words delivered for the most recently fulfilled request
    pub fn s_random_words(&self) -> Vec<U128> {
        self.random_words.iter().copied().map(U128).collect()
    }

    /// Get request by ID
    pub fn get_request(&self, request_id: u64) -> Option<RandomWordsRequestView> {
        self.requests.get(&request_id).map(Into::into)
    }

    pub fn get_config(&self) -> RandomSeedConfig {
        RandomSeedConfig {
            owner_id: self.owner_id.clone(),
            coordinator_id: self.coordinator_id.clone(),
            subscription_id: self.subscription_id,
            key_hash: self.key_hash.map(hex::encode),
            num_words: self.num_words,
            callback_gas: self.callback_gas,
            request_confirmations: self.request_confirmations,
        }
    }
}

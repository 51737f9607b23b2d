use crate::*;

#[near_bindgen]
impl Contract {
    /// Request random words from the coordinator (only owner can call)
    ///
    /// Stores a pending request with the current configuration and emits a
    /// `random_words_requested` event for the coordinator to pick up.
    ///
    /// # Returns
    /// Id of the new request
    pub fn request_random_words(&mut self) -> u64 {
        self.assert_owner();

        let coordinator_id = self
            .coordinator_id
            .clone()
            .unwrap_or_else(|| env::panic_str("Coordinator is not configured"));
        assert!(self.subscription_id != 0, "Subscription id is not set");
        let key_hash = self
            .key_hash
            .unwrap_or_else(|| env::panic_str("Key hash is not set"));

        let request_id = self.next_request_id;
        self.next_request_id += 1;

        let request = RandomWordsRequest {
            request_id,
            requester: env::predecessor_account_id(),
            coordinator_id,
            subscription_id: self.subscription_id,
            key_hash,
            num_words: self.num_words,
            callback_gas: self.callback_gas,
            request_confirmations: self.request_confirmations,
            status: RequestStatus::Pending,
            random_words: Vec::new(),
            requested_at: env::block_timestamp(),
            fulfilled_at: None,
        };
        self.requests.insert(&request_id, &request);
        self.last_request_id = Some(request_id);

        log!(
            "Requested {} random words: request_id={}, subscription_id={}",
            request.num_words,
            request_id,
            request.subscription_id
        );
        events::emit::random_words_requested(&request);

        request_id
    }

    /// Deliver random words for a pending request
    ///
    /// Only the coordinator recorded on the request can call this, even if the
    /// contract's coordinator has changed since.
    pub fn fulfill_random_words(&mut self, request_id: u64, random_words: Vec<U128>) {
        let mut request = self
            .requests
            .get(&request_id)
            .unwrap_or_else(|| env::panic_str("Request not found"));

        let coordinator_id = env::predecessor_account_id();
        assert_eq!(
            coordinator_id, request.coordinator_id,
            "Only coordinator can call this method"
        );

        assert_eq!(
            request.status,
            RequestStatus::Pending,
            "Request already fulfilled"
        );
        assert_eq!(
            random_words.len(),
            request.num_words as usize,
            "Expected {} random words, got {}",
            request.num_words,
            random_words.len()
        );

        let words: Vec<u128> = random_words.into_iter().map(|word| word.0).collect();

        request.status = RequestStatus::Fulfilled;
        request.random_words = words.clone();
        request.fulfilled_at = Some(env::block_timestamp());
        self.requests.insert(&request_id, &request);
        self.random_words = words;

        log!(
            "Fulfilled request {} with {} random words",
            request_id,
            self.random_words.len()
        );
        events::emit::random_words_fulfilled(request_id, &coordinator_id, &self.random_words);
    }
}

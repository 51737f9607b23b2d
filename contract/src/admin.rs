use crate::validation::{
    or_panic, parse_key_hash, validate_callback_gas, validate_num_words,
    validate_request_confirmations,
};
use crate::*;

impl Contract {
    pub(crate) fn assert_owner(&self) {
        assert_eq!(
            env::predecessor_account_id(),
            self.owner_id,
            "Only owner can call this method"
        );
    }
}

#[near_bindgen]
impl Contract {
    /// Set new owner (only current owner can call)
    pub fn set_owner(&mut self, new_owner_id: AccountId) {
        self.assert_owner();
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner_id.clone();

        log!("Owner changed from {} to {}", old_owner, new_owner_id);
    }

    /// Set the account allowed to fulfil requests (only owner can call)
    pub fn set_coordinator(&mut self, coordinator_id: AccountId) {
        self.assert_owner();
        let old_coordinator = self.coordinator_id.replace(coordinator_id.clone());

        log!(
            "Coordinator changed from {} to {}",
            old_coordinator
                .as_ref()
                .map(|id| id.as_str())
                .unwrap_or("none"),
            coordinator_id
        );
    }

    /// Set coordinator subscription (only owner can call)
    pub fn set_subscription_id(&mut self, subscription_id: u64) {
        self.assert_owner();
        let old_subscription_id = self.subscription_id;
        self.subscription_id = subscription_id;

        log!(
            "Subscription id changed from {} to {}",
            old_subscription_id,
            subscription_id
        );
    }

    /// Set number of words per request (only owner can call)
    pub fn set_num_words(&mut self, num_words: u32) {
        self.assert_owner();
        let num_words = or_panic(validate_num_words(num_words));
        let old_num_words = self.num_words;
        self.num_words = num_words;

        log!("Num words changed from {} to {}", old_num_words, num_words);
    }

    /// Set key hash from a 32-byte hex string (only owner can call)
    pub fn set_key_hash(&mut self, key_hash: String) {
        self.assert_owner();
        let parsed = or_panic(parse_key_hash(&key_hash));
        let old_key_hash = self.key_hash.replace(parsed);

        log!(
            "Key hash changed from {} to {}",
            old_key_hash
                .map(hex::encode)
                .unwrap_or_else(|| "none".to_string()),
            hex::encode(parsed)
        );
    }

    /// Set gas budget forwarded to the coordinator (only owner can call)
    pub fn set_callback_gas(&mut self, callback_gas: Gas) {
        self.assert_owner();
        let callback_gas = or_panic(validate_callback_gas(callback_gas));
        let old_gas = self.callback_gas;
        self.callback_gas = callback_gas;

        log!("Callback gas changed from {} to {}", old_gas, callback_gas);
    }

    /// Set confirmations the coordinator waits for (only owner can call)
    pub fn set_request_confirmations(&mut self, request_confirmations: u16) {
        self.assert_owner();
        let request_confirmations =
            or_panic(validate_request_confirmations(request_confirmations));
        let old_confirmations = self.request_confirmations;
        self.request_confirmations = request_confirmations;

        log!(
            "Request confirmations changed from {} to {}",
            old_confirmations,
            request_confirmations
        );
    }
}

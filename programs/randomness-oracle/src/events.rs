use anchor_lang::prelude::*;

/// Emitted when a new randomness request is created.
///
/// Fulfillment backends subscribe to these events via log monitoring and
/// trigger fulfillment at their own pace; a request may stay pending for
/// an arbitrary amount of time.
#[event]
pub struct RandomnessRequested {
    pub request_id: u64,
    pub requester: Pubkey,
    pub tag: [u8; 32],
}

/// Emitted when the oracle fulfills a request with a confidential handle.
#[event]
pub struct RandomnessFulfilled {
    pub request_id: u64,
    pub handle_id: u128,
}

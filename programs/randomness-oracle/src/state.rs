use anchor_lang::prelude::*;
use inco_lightning::types::Euint128;

/// Global oracle configuration, stored as a singleton PDA.
///
/// Seeds: `["oracle-config"]`
///
/// Only the `admin` may update this account. The `authority` is the key
/// that signs fulfillment transactions.
#[account]
pub struct OracleConfig {
    /// Privileged key that may update this configuration.
    pub admin: Pubkey,
    /// Key that is allowed to fulfill pending requests.
    pub authority: Pubkey,
    /// Account that collects request fees.
    pub treasury: Pubkey,
    /// Fee (in lamports) charged per randomness request.
    pub fee: u64,
    /// Monotonically increasing counter used to derive unique request PDA seeds.
    pub request_counter: u64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl OracleConfig {
    /// 8 (discriminator) + 32 (admin) + 32 (authority) + 32 (treasury)
    /// + 8 (fee) + 8 (request_counter) + 1 (bump)
    pub const LEN: usize = 8 + 32 + 32 + 32 + 8 + 8 + 1;

    /// Whether an offered payment meets the published fee.
    pub fn covers_fee(&self, offered: u64) -> bool {
        offered >= self.fee
    }

    /// Take the next request identifier and advance the counter.
    /// Returns `None` if the counter would overflow.
    pub fn next_request_id(&mut self) -> Option<u64> {
        let id = self.request_counter;
        self.request_counter = self.request_counter.checked_add(1)?;
        Some(id)
    }
}

/// One randomness request, one account.
///
/// Seeds: `["request", request_id.to_le_bytes()]`
///
/// Lifecycle: Pending (0) -> Fulfilled (1). The account is never closed;
/// consumers track one-time use on their own side.
#[account]
pub struct OracleRequest {
    /// Unique identifier taken from `OracleConfig::request_counter` at creation.
    pub request_id: u64,
    /// The account that submitted the request.
    pub requester: Pubkey,
    /// Caller-supplied tag, passed through untouched. Need not be unique.
    pub tag: [u8; 32],
    /// Request lifecycle status. See `STATUS_*` constants.
    pub status: u8,
    /// Confidential handle for the randomness, written at fulfillment.
    /// Carries no usage permission for anyone; readers must obtain their
    /// own grant before using it in a confidential operation.
    pub randomness_handle: Euint128,
    /// Slot at which the request was created.
    pub request_slot: u64,
    /// Slot at which the request was fulfilled.
    pub fulfilled_slot: u64,
    /// Bump seed for PDA
    pub bump: u8,
}

impl OracleRequest {
    /// Request created, awaiting fulfillment.
    pub const STATUS_PENDING: u8 = 0;
    /// Fulfilled; the randomness handle is available.
    pub const STATUS_FULFILLED: u8 = 1;

    /// 8 (discriminator) + 8 (request_id) + 32 (requester) + 32 (tag)
    /// + 1 (status) + 16 (randomness_handle) + 8 (request_slot)
    /// + 8 (fulfilled_slot) + 1 (bump)
    pub const LEN: usize = 8 + 8 + 32 + 32 + 1 + 16 + 8 + 8 + 1;

    pub fn is_fulfilled(&self) -> bool {
        self.status == Self::STATUS_FULFILLED
    }

    /// Record a fulfillment. Returns `false` if the request is not pending,
    /// leaving the account untouched.
    pub fn fulfill(&mut self, handle: Euint128, slot: u64) -> bool {
        if self.status != Self::STATUS_PENDING {
            return false;
        }
        self.randomness_handle = handle;
        self.fulfilled_slot = slot;
        self.status = Self::STATUS_FULFILLED;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_fee(fee: u64) -> OracleConfig {
        OracleConfig {
            admin: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            fee,
            request_counter: 0,
            bump: 255,
        }
    }

    #[test]
    fn payment_below_fee_is_rejected() {
        let config = config_with_fee(100);
        assert!(!config.covers_fee(99));
        assert!(config.covers_fee(100));
        assert!(config.covers_fee(101));
    }

    #[test]
    fn zero_fee_accepts_any_payment() {
        let config = config_with_fee(0);
        assert!(config.covers_fee(0));
    }

    #[test]
    fn request_ids_are_assigned_in_order() {
        let mut config = config_with_fee(0);
        assert_eq!(config.next_request_id(), Some(0));
        assert_eq!(config.next_request_id(), Some(1));
        assert_eq!(config.next_request_id(), Some(2));
        assert_eq!(config.request_counter, 3);
    }

    #[test]
    fn counter_overflow_is_reported() {
        let mut config = config_with_fee(0);
        config.request_counter = u64::MAX;
        assert_eq!(config.next_request_id(), None);
        // The counter is left saturated rather than wrapped.
        assert_eq!(config.request_counter, u64::MAX);
    }

    fn pending_request() -> OracleRequest {
        OracleRequest {
            request_id: 7,
            requester: Pubkey::new_unique(),
            tag: [0u8; 32],
            status: OracleRequest::STATUS_PENDING,
            randomness_handle: Euint128(0),
            request_slot: 100,
            fulfilled_slot: 0,
            bump: 255,
        }
    }

    #[test]
    fn pending_request_is_not_fulfilled() {
        let request = pending_request();
        assert!(!request.is_fulfilled());
    }

    #[test]
    fn fulfill_transitions_pending_to_fulfilled() {
        let mut request = pending_request();
        assert!(request.fulfill(Euint128(42), 120));
        assert!(request.is_fulfilled());
        assert_eq!(request.randomness_handle.0, 42);
        assert_eq!(request.fulfilled_slot, 120);
    }

    #[test]
    fn fulfill_twice_is_rejected() {
        let mut request = pending_request();
        assert!(request.fulfill(Euint128(42), 120));
        assert!(!request.fulfill(Euint128(99), 130));
        // First fulfillment stays intact.
        assert_eq!(request.randomness_handle.0, 42);
        assert_eq!(request.fulfilled_slot, 120);
    }
}

use anchor_lang::prelude::*;

/// Local record of one randomness request submitted by this contract.
///
/// Seeds: `["tracked-request", request_id.to_le_bytes()]`
///
/// Fulfillment status is not mirrored here; it is re-read from the
/// oracle-owned request account at consumption time. This side owns only
/// the one-time consumption marker: once `consumed` is set, the id can
/// never retrieve randomness again, even though the oracle still reports
/// it fulfilled.
#[account]
pub struct TrackedRequest {
    /// Oracle-assigned request identifier (globally unique).
    pub request_id: u64,
    /// Whether the randomness behind this request has been used.
    pub consumed: bool,
    /// Bump seed for PDA
    pub bump: u8,
}

impl TrackedRequest {
    /// 8 (discriminator) + 8 (request_id) + 1 (consumed) + 1 (bump)
    pub const LEN: usize = 8 + 8 + 1 + 1;

    /// Mark the request's randomness as used. Returns `false` on a replay
    /// attempt, leaving the record untouched.
    pub fn mark_consumed(&mut self) -> bool {
        if self.consumed {
            return false;
        }
        self.consumed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_succeeds_exactly_once() {
        let mut tracked = TrackedRequest {
            request_id: 3,
            consumed: false,
            bump: 255,
        };
        assert!(tracked.mark_consumed());
        assert!(!tracked.mark_consumed());
        assert!(tracked.consumed);
    }
}

use anchor_lang::prelude::*;

/// Capability record of the confidential handles this contract may use.
///
/// Seeds: `["registry"]`
///
/// A handle id is present iff usage permission has been granted to the
/// contract. Handles are never auto-granted at creation: ingestion
/// outputs, combine outputs, and oracle-retrieved handles all start
/// absent from this set. Grants are durable; nothing here expires or
/// gets revoked.
#[account]
pub struct HandleRegistry {
    /// Handle ids the contract holds usage permission for.
    pub granted: Vec<u128>,
    /// Bump seed for PDA
    pub bump: u8,
}

impl HandleRegistry {
    /// Upper bound on tracked grants; sized for the handles one deployment
    /// accumulates (2 operands + outputs + one randomness handle per request).
    pub const MAX_GRANTED: usize = 32;

    /// 8 (discriminator) + 4 (vec len) + 16 * MAX_GRANTED (ids) + 1 (bump)
    pub const LEN: usize = 8 + 4 + 16 * Self::MAX_GRANTED + 1;

    /// Record a usage grant for `handle_id`. Idempotent: re-granting an
    /// already granted handle succeeds without growing the set. Returns
    /// `false` only when the set is at capacity.
    pub fn grant(&mut self, handle_id: u128) -> bool {
        if self.granted.contains(&handle_id) {
            return true;
        }
        if self.granted.len() >= Self::MAX_GRANTED {
            return false;
        }
        self.granted.push(handle_id);
        true
    }

    pub fn is_granted(&self, handle_id: u128) -> bool {
        self.granted.contains(&handle_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_registry() -> HandleRegistry {
        HandleRegistry {
            granted: Vec::new(),
            bump: 255,
        }
    }

    #[test]
    fn handles_are_denied_by_default() {
        let registry = empty_registry();
        assert!(!registry.is_granted(1));
    }

    #[test]
    fn grant_makes_handle_usable() {
        let mut registry = empty_registry();
        assert!(registry.grant(1));
        assert!(registry.is_granted(1));
        assert!(!registry.is_granted(2));
    }

    #[test]
    fn grant_is_idempotent() {
        let mut registry = empty_registry();
        assert!(registry.grant(1));
        assert!(registry.grant(1));
        assert_eq!(registry.granted.len(), 1);
    }

    #[test]
    fn grant_fails_at_capacity() {
        let mut registry = empty_registry();
        for id in 0..HandleRegistry::MAX_GRANTED as u128 {
            assert!(registry.grant(id));
        }
        assert!(!registry.grant(u128::MAX));
        // Re-granting an existing handle still succeeds at capacity.
        assert!(registry.grant(0));
    }
}

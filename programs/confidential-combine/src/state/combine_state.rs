use anchor_lang::prelude::*;
use inco_lightning::types::Euint128;

/// Singleton state for the combine contract.
///
/// Seeds: `["combine-state"]`
///
/// This PDA is also the contract's confidential identity: every engine
/// CPI (ingest, combine, grant) is signed with its seeds, and usage
/// permissions are granted to this address.
#[account]
pub struct CombineState {
    /// Key allowed to drive the contract's instructions.
    pub authority: Pubkey,
    /// The randomness oracle program this contract submits requests to.
    pub oracle_program: Pubkey,
    /// First base operand handle (set at ingestion).
    pub operand_a: Euint128,
    /// Second base operand handle (set at ingestion).
    pub operand_b: Euint128,
    /// Most recent combine output handle (0 until the first combine).
    pub combined: Euint128,
    /// Whether the two base operands have been ingested. Set exactly once.
    pub initialized: bool,
    /// Bump seed for PDA
    pub bump: u8,
}

impl CombineState {
    /// 8 (discriminator) + 32 (authority) + 32 (oracle_program)
    /// + 16 (operand_a) + 16 (operand_b) + 16 (combined)
    /// + 1 (initialized) + 1 (bump)
    pub const LEN: usize = 8 + 32 + 32 + 16 + 16 + 16 + 1 + 1;

    /// Store the two base operands and flip the initialized flag. Returns
    /// `false` if the operands were already ingested, leaving the state
    /// untouched; ingestion happens exactly once per deployment.
    pub fn set_operands(&mut self, a: Euint128, b: Euint128) -> bool {
        if self.initialized {
            return false;
        }
        self.operand_a = a;
        self.operand_b = b;
        self.initialized = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_state() -> CombineState {
        CombineState {
            authority: Pubkey::new_unique(),
            oracle_program: Pubkey::new_unique(),
            operand_a: Euint128(0),
            operand_b: Euint128(0),
            combined: Euint128(0),
            initialized: false,
            bump: 255,
        }
    }

    #[test]
    fn operands_are_ingested_exactly_once() {
        let mut state = fresh_state();
        assert!(state.set_operands(Euint128(10), Euint128(20)));
        assert!(state.initialized);
        assert!(!state.set_operands(Euint128(30), Euint128(40)));
        // First ingestion stays intact.
        assert_eq!(state.operand_a.0, 10);
        assert_eq!(state.operand_b.0, 20);
    }
}

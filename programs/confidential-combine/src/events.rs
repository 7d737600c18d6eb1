use anchor_lang::prelude::*;

/// Emitted when the two base operands are ingested.
#[event]
pub struct OperandsIngested {
    /// Whether usage permission was granted during ingestion.
    pub permitted: bool,
}

/// Emitted when a randomness request is submitted on behalf of the contract.
#[event]
pub struct CombineRequestSubmitted {
    pub request_id: u64,
    pub requester: Pubkey,
}

/// Emitted when the two base operands are combined.
#[event]
pub struct Combined {
    pub handle_id: u128,
}

/// Emitted when oracle randomness is folded into the combined value.
#[event]
pub struct RandomnessCombined {
    pub request_id: u64,
    pub handle_id: u128,
}

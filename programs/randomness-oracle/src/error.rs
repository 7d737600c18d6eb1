use anchor_lang::prelude::*;

#[error_code]
pub enum OracleError {
    #[msg("Payment below the oracle fee")]
    InsufficientPayment,

    #[msg("Request is not in pending status")]
    RequestNotPending,

    #[msg("Only the oracle authority can perform this action")]
    Unauthorized,

    #[msg("Only the admin can perform this action")]
    NotAdmin,

    #[msg("Zero address not allowed")]
    InvalidConfiguration,

    #[msg("Treasury does not match oracle config")]
    TreasuryMismatch,

    #[msg("Request counter overflow")]
    CounterOverflow,
}

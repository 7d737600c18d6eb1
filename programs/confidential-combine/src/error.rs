use anchor_lang::prelude::*;

#[error_code]
pub enum CombineError {
    #[msg("Base operands already ingested")]
    AlreadyInitialized,

    #[msg("Base operands not yet ingested")]
    NotInitialized,

    #[msg("Request was not submitted by this contract")]
    UnknownRequest,

    #[msg("Randomness for this request has already been consumed")]
    RequestAlreadyConsumed,

    #[msg("Randomness request has not been fulfilled yet")]
    RequestNotFulfilled,

    #[msg("Zero address not allowed")]
    InvalidConfiguration,

    #[msg("Only the authority can perform this action")]
    Unauthorized,

    #[msg("Oracle program does not match the configured oracle")]
    OracleMismatch,

    #[msg("Treasury does not match the oracle config")]
    TreasuryMismatch,

    #[msg("Handle registry is at capacity")]
    RegistryFull,

    #[msg("Missing allowance accounts for permission grants")]
    MissingAllowanceAccounts,
}

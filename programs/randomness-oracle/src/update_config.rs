use anchor_lang::prelude::*;

use crate::error::OracleError;
use crate::state::OracleConfig;

/// Update the oracle configuration (admin-only).
///
/// All parameters are optional; only provided fields are updated.
/// Zero keys are rejected.
pub fn handler(
    ctx: Context<UpdateConfig>,
    new_authority: Option<Pubkey>,
    new_fee: Option<u64>,
    new_treasury: Option<Pubkey>,
    new_admin: Option<Pubkey>,
) -> Result<()> {
    let config = &mut ctx.accounts.config;

    if let Some(authority) = new_authority {
        require!(authority != Pubkey::default(), OracleError::InvalidConfiguration);
        config.authority = authority;
    }
    if let Some(fee) = new_fee {
        config.fee = fee;
    }
    if let Some(treasury) = new_treasury {
        require!(treasury != Pubkey::default(), OracleError::InvalidConfiguration);
        config.treasury = treasury;
    }
    if let Some(admin) = new_admin {
        require!(admin != Pubkey::default(), OracleError::InvalidConfiguration);
        config.admin = admin;
    }

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Current admin; must match `config.admin`.
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [b"oracle-config"],
        bump = config.bump,
        constraint = config.admin == admin.key() @ OracleError::NotAdmin
    )]
    pub config: Account<'info, OracleConfig>,
}

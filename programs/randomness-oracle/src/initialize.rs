use anchor_lang::prelude::*;

use crate::error::OracleError;
use crate::state::OracleConfig;

/// Create the singleton oracle configuration.
///
/// Rejects zero keys for the authority and treasury so a misconfigured
/// oracle fails at construction instead of at the first fulfillment.
pub fn handler(ctx: Context<Initialize>, fee: u64) -> Result<()> {
    require!(
        ctx.accounts.authority.key() != Pubkey::default(),
        OracleError::InvalidConfiguration
    );
    require!(
        ctx.accounts.treasury.key() != Pubkey::default(),
        OracleError::InvalidConfiguration
    );

    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.authority = ctx.accounts.authority.key();
    config.treasury = ctx.accounts.treasury.key();
    config.fee = fee;
    config.request_counter = 0;
    config.bump = ctx.bumps.config;

    msg!("Oracle initialized, fee: {} lamports", fee);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The initial admin; pays for account creation.
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The key that will sign fulfillment transactions.
    /// CHECK: Stored as configuration; validated to be non-zero.
    pub authority: UncheckedAccount<'info>,

    /// The account that collects request fees.
    /// CHECK: Stored as configuration; validated to be non-zero.
    pub treasury: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        space = OracleConfig::LEN,
        seeds = [b"oracle-config"],
        bump
    )]
    pub config: Account<'info, OracleConfig>,

    pub system_program: Program<'info, System>,
}

use anchor_lang::prelude::*;
use inco_lightning::types::Euint128;

use crate::error::CombineError;
use crate::state::{CombineState, HandleRegistry};

/// Create the contract's state and registry singletons.
///
/// The oracle program key is pinned here; a zero key is rejected at
/// construction rather than surfacing later as a dangling collaborator.
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    require!(
        ctx.accounts.oracle_program.key() != Pubkey::default(),
        CombineError::InvalidConfiguration
    );

    let state = &mut ctx.accounts.combine_state;
    state.authority = ctx.accounts.authority.key();
    state.oracle_program = ctx.accounts.oracle_program.key();
    state.operand_a = Euint128(0);
    state.operand_b = Euint128(0);
    state.combined = Euint128(0);
    state.initialized = false;
    state.bump = ctx.bumps.combine_state;

    let registry = &mut ctx.accounts.handle_registry;
    registry.granted = Vec::new();
    registry.bump = ctx.bumps.handle_registry;

    msg!("Combine contract initialized, oracle: {}", state.oracle_program);
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The key that will drive the contract; pays for account creation.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = CombineState::LEN,
        seeds = [b"combine-state"],
        bump
    )]
    pub combine_state: Account<'info, CombineState>,

    #[account(
        init,
        payer = authority,
        space = HandleRegistry::LEN,
        seeds = [b"registry"],
        bump
    )]
    pub handle_registry: Account<'info, HandleRegistry>,

    /// The randomness oracle this contract will submit requests to.
    /// CHECK: Stored as configuration; validated to be non-zero.
    pub oracle_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

use anchor_lang::prelude::*;
use inco_lightning::cpi::accounts::Operation;
use inco_lightning::cpi::e_add;
use inco_lightning::program::IncoLightning;

use crate::error::CombineError;
use crate::events::Combined;
use crate::permission::grant_usage;
use crate::state::{CombineState, HandleRegistry};

/// Combine the two base operands into a fresh confidential handle.
///
/// The engine rejects the addition when either operand lacks a usage
/// grant (unsafe ingestion), which aborts the whole instruction. On
/// success the output is itself a fresh, un-permitted handle; it is
/// granted before being persisted so it stays usable downstream.
pub fn handler(ctx: Context<Combine>) -> Result<()> {
    let state = &ctx.accounts.combine_state;
    require!(state.initialized, CombineError::NotInitialized);

    let cpi_program = ctx.accounts.inco_lightning_program.to_account_info();
    let state_info = state.to_account_info();
    let bump = state.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[b"combine-state", &[bump]]];

    let cpi_ctx = CpiContext::new_with_signer(
        cpi_program.clone(),
        Operation {
            signer: state_info.clone(),
        },
        signer_seeds,
    );
    let combined = e_add(cpi_ctx, state.operand_a, state.operand_b, 16)?;

    grant_usage(
        &mut ctx.accounts.handle_registry,
        cpi_program,
        ctx.accounts.allowance_account.to_account_info(),
        state_info,
        ctx.accounts.system_program.to_account_info(),
        signer_seeds,
        combined,
    )?;

    let state = &mut ctx.accounts.combine_state;
    state.combined = combined;

    emit!(Combined {
        handle_id: combined.0,
    });

    msg!("Operands combined into handle {}", combined.0);
    Ok(())
}

#[derive(Accounts)]
pub struct Combine<'info> {
    /// Pays rent for the allowance PDA created by the output grant.
    #[account(
        mut,
        constraint = combine_state.authority == authority.key() @ CombineError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"combine-state"],
        bump = combine_state.bump
    )]
    pub combine_state: Account<'info, CombineState>,

    #[account(
        mut,
        seeds = [b"registry"],
        bump = handle_registry.bump
    )]
    pub handle_registry: Account<'info, HandleRegistry>,

    /// Allowance account PDA for the output grant
    /// CHECK: Derived and validated by the Inco Lightning program
    #[account(mut)]
    pub allowance_account: UncheckedAccount<'info>,

    /// Inco Lightning program for the combine and allow CPIs
    pub inco_lightning_program: Program<'info, IncoLightning>,

    pub system_program: Program<'info, System>,
}

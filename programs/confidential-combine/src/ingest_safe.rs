use anchor_lang::prelude::*;
use inco_lightning::cpi::accounts::Operation;
use inco_lightning::cpi::new_euint128;
use inco_lightning::program::IncoLightning;

use crate::error::CombineError;
use crate::events::OperandsIngested;
use crate::permission::grant_usage;
use crate::state::{CombineState, HandleRegistry};

/// Ingest the two base operands and grant usage permission on both.
///
/// Order matters: ingest, then grant, then store. The grant happens
/// before either handle is written to state, so persisted operands are
/// always usable in later confidential operations.
///
/// Allowance PDAs for the two grants are passed via remaining accounts:
/// index 0 for operand A, index 1 for operand B.
pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, IngestSafe<'info>>,
    ciphertext_a: Vec<u8>,
    ciphertext_b: Vec<u8>,
    input_type: u8,
) -> Result<()> {
    let state = &ctx.accounts.combine_state;
    require!(!state.initialized, CombineError::AlreadyInitialized);
    require!(
        ctx.remaining_accounts.len() >= 2,
        CombineError::MissingAllowanceAccounts
    );

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
    let handle_a = new_euint128(cpi_ctx, ciphertext_a, input_type)?;

    let cpi_ctx = CpiContext::new_with_signer(
        cpi_program.clone(),
        Operation {
            signer: state_info.clone(),
        },
        signer_seeds,
    );
    let handle_b = new_euint128(cpi_ctx, ciphertext_b, input_type)?;

    let registry = &mut ctx.accounts.handle_registry;
    grant_usage(
        registry,
        cpi_program.clone(),
        ctx.remaining_accounts[0].clone(),
        state_info.clone(),
        ctx.accounts.system_program.to_account_info(),
        signer_seeds,
        handle_a,
    )?;
    grant_usage(
        registry,
        cpi_program,
        ctx.remaining_accounts[1].clone(),
        state_info,
        ctx.accounts.system_program.to_account_info(),
        signer_seeds,
        handle_b,
    )?;

    let state = &mut ctx.accounts.combine_state;
    require!(
        state.set_operands(handle_a, handle_b),
        CombineError::AlreadyInitialized
    );

    emit!(OperandsIngested { permitted: true });

    msg!("Operands ingested with usage grants");
    Ok(())
}

#[derive(Accounts)]
pub struct IngestSafe<'info> {
    /// Pays rent for the allowance PDAs created by the grants.
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

    /// Inco Lightning program for the ingestion and allow CPIs
    pub inco_lightning_program: Program<'info, IncoLightning>,

    pub system_program: Program<'info, System>,
}

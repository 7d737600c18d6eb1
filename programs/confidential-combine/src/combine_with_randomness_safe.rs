use anchor_lang::prelude::*;
use inco_lightning::cpi::accounts::Operation;
use inco_lightning::cpi::e_add;
use inco_lightning::program::IncoLightning;
use randomness_oracle::program::RandomnessOracle;
use randomness_oracle::state::OracleRequest;

use crate::error::CombineError;
use crate::events::RandomnessCombined;
use crate::permission::grant_usage;
use crate::state::{CombineState, HandleRegistry, TrackedRequest};

/// Fold oracle randomness into the combined value with the full
/// permission discipline.
///
/// Retrieve, then grant, then use, at every step: the randomness handle
/// is granted before the first combine, the intermediate sum before the
/// second, and the final output before it is persisted. On success the tracking
/// record is marked consumed, so this request id can never retrieve
/// randomness again even though the oracle keeps reporting it fulfilled.
///
/// Allowance PDAs for the three grants are passed via remaining accounts:
/// index 0 for the randomness handle, index 1 for the intermediate sum,
/// index 2 for the output.
pub fn handler<'info>(
    ctx: Context<'_, '_, '_, 'info, CombineWithRandomnessSafe<'info>>,
    request_id: u64,
) -> Result<()> {
    let state = &ctx.accounts.combine_state;
    require!(state.initialized, CombineError::NotInitialized);
    require!(
        ctx.remaining_accounts.len() >= 3,
        CombineError::MissingAllowanceAccounts
    );

    // Fulfillment is re-checked against the live oracle account by the
    // constraint on `oracle_request`; nothing is cached locally.
    let randomness = ctx.accounts.oracle_request.randomness_handle;

    let cpi_program = ctx.accounts.inco_lightning_program.to_account_info();
    let state_info = state.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();
    let bump = state.bump;
    let signer_seeds: &[&[&[u8]]] = &[&[b"combine-state", &[bump]]];

    let registry = &mut ctx.accounts.handle_registry;
    grant_usage(
        registry,
        cpi_program.clone(),
        ctx.remaining_accounts[0].clone(),
        state_info.clone(),
        system_program.clone(),
        signer_seeds,
        randomness,
    )?;

    let cpi_ctx = CpiContext::new_with_signer(
        cpi_program.clone(),
        Operation {
            signer: state_info.clone(),
        },
        signer_seeds,
    );
    let sum = e_add(cpi_ctx, state.operand_a, state.operand_b, 16)?;

    grant_usage(
        registry,
        cpi_program.clone(),
        ctx.remaining_accounts[1].clone(),
        state_info.clone(),
        system_program.clone(),
        signer_seeds,
        sum,
    )?;

    let cpi_ctx = CpiContext::new_with_signer(
        cpi_program.clone(),
        Operation {
            signer: state_info.clone(),
        },
        signer_seeds,
    );
    let combined = e_add(cpi_ctx, sum, randomness, 16)?;

    grant_usage(
        registry,
        cpi_program,
        ctx.remaining_accounts[2].clone(),
        state_info,
        system_program,
        signer_seeds,
        combined,
    )?;

    let tracked = &mut ctx.accounts.tracked_request;
    require!(tracked.mark_consumed(), CombineError::RequestAlreadyConsumed);

    let state = &mut ctx.accounts.combine_state;
    state.combined = combined;

    emit!(RandomnessCombined {
        request_id,
        handle_id: combined.0,
    });

    msg!("Randomness {} combined into handle {}", request_id, combined.0);
    Ok(())
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct CombineWithRandomnessSafe<'info> {
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

    /// Local tracking record; a missing PDA means the request was never
    /// submitted by this contract.
    #[account(
        mut,
        seeds = [b"tracked-request", request_id.to_le_bytes().as_ref()],
        bump = tracked_request.bump,
        constraint = tracked_request.request_id == request_id @ CombineError::UnknownRequest,
        constraint = !tracked_request.consumed @ CombineError::RequestAlreadyConsumed
    )]
    pub tracked_request: Account<'info, TrackedRequest>,

    /// The oracle-owned request account; must be fulfilled.
    #[account(
        seeds = [b"request", request_id.to_le_bytes().as_ref()],
        bump = oracle_request.bump,
        seeds::program = oracle_program.key(),
        constraint = oracle_request.status == OracleRequest::STATUS_FULFILLED
            @ CombineError::RequestNotFulfilled
    )]
    pub oracle_request: Account<'info, OracleRequest>,

    #[account(
        constraint = oracle_program.key() == combine_state.oracle_program @ CombineError::OracleMismatch
    )]
    pub oracle_program: Program<'info, RandomnessOracle>,

    /// Inco Lightning program for the combine and allow CPIs
    pub inco_lightning_program: Program<'info, IncoLightning>,

    pub system_program: Program<'info, System>,
}

use anchor_lang::prelude::*;
use inco_lightning::cpi::accounts::Operation;
use inco_lightning::cpi::e_add;
use inco_lightning::program::IncoLightning;
use randomness_oracle::program::RandomnessOracle;
use randomness_oracle::state::OracleRequest;

use crate::error::CombineError;
use crate::events::RandomnessCombined;
use crate::state::{CombineState, TrackedRequest};

/// Fold oracle randomness into the combined value WITHOUT any grants.
///
/// This is the anti-pattern path: the randomness handle is read straight
/// off the fulfilled oracle request and fed into the combine, and the
/// intermediate sum is reused the same way. Neither carries a usage
/// grant, so the engine rejects the operation and the instruction
/// reverts. The tracking record is left untouched: the request stays
/// fulfilled-unconsumed and can still be consumed via the safe path.
pub fn handler(ctx: Context<CombineWithRandomnessUnsafe>, request_id: u64) -> Result<()> {
    let state = &ctx.accounts.combine_state;
    require!(state.initialized, CombineError::NotInitialized);

    // Fulfillment is re-checked against the live oracle account by the
    // constraint on `oracle_request`; nothing is cached locally.
    let randomness = ctx.accounts.oracle_request.randomness_handle;

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
    let sum = e_add(cpi_ctx, state.operand_a, state.operand_b, 16)?;

    // Rejected by the engine: neither `sum` nor `randomness` is permitted.
    let cpi_ctx = CpiContext::new_with_signer(
        cpi_program,
        Operation { signer: state_info },
        signer_seeds,
    );
    let combined = e_add(cpi_ctx, sum, randomness, 16)?;

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
pub struct CombineWithRandomnessUnsafe<'info> {
    #[account(
        constraint = combine_state.authority == authority.key() @ CombineError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"combine-state"],
        bump = combine_state.bump
    )]
    pub combine_state: Account<'info, CombineState>,

    /// Local tracking record; a missing PDA means the request was never
    /// submitted by this contract.
    #[account(
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

    /// Inco Lightning program for the combine CPIs
    pub inco_lightning_program: Program<'info, IncoLightning>,
}

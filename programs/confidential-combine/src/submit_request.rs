use anchor_lang::prelude::*;
use randomness_oracle::program::RandomnessOracle;
use randomness_oracle::state::OracleConfig;

use crate::error::CombineError;
use crate::events::CombineRequestSubmitted;
use crate::state::{CombineState, TrackedRequest};

/// Submit a randomness request to the oracle and start tracking it.
///
/// The oracle assigns the globally unique identifier from its request
/// counter; the counter is read before the CPI so the tracking PDA can be
/// keyed by the same id. The tracking record starts un-consumed.
/// Fulfillment status is never cached here, only the one-time consumption
/// marker lives on this side.
pub fn handler(ctx: Context<SubmitRequest>, tag: [u8; 32], fee: u64) -> Result<()> {
    let request_id = ctx.accounts.oracle_config.request_counter;

    let cpi_accounts = randomness_oracle::cpi::accounts::SubmitRequest {
        requester: ctx.accounts.authority.to_account_info(),
        config: ctx.accounts.oracle_config.to_account_info(),
        request: ctx.accounts.oracle_request.to_account_info(),
        treasury: ctx.accounts.treasury.to_account_info(),
        system_program: ctx.accounts.system_program.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.oracle_program.to_account_info(), cpi_accounts);
    randomness_oracle::cpi::submit_request(cpi_ctx, tag, fee)?;

    let tracked = &mut ctx.accounts.tracked_request;
    tracked.request_id = request_id;
    tracked.consumed = false;
    tracked.bump = ctx.bumps.tracked_request;

    emit!(CombineRequestSubmitted {
        request_id,
        requester: ctx.accounts.authority.key(),
    });

    msg!("Tracking randomness request {}", request_id);
    Ok(())
}

#[derive(Accounts)]
pub struct SubmitRequest<'info> {
    /// Drives the contract and pays the oracle fee and rent.
    #[account(
        mut,
        constraint = combine_state.authority == authority.key() @ CombineError::Unauthorized
    )]
    pub authority: Signer<'info>,

    #[account(
        seeds = [b"combine-state"],
        bump = combine_state.bump
    )]
    pub combine_state: Account<'info, CombineState>,

    /// Oracle configuration (read for `request_counter`, mutated by the CPI).
    #[account(
        mut,
        seeds = [b"oracle-config"],
        bump = oracle_config.bump,
        seeds::program = oracle_program.key()
    )]
    pub oracle_config: Account<'info, OracleConfig>,

    /// Oracle request account (created by the oracle program during CPI).
    /// CHECK: Created and validated by the oracle program.
    #[account(mut)]
    pub oracle_request: UncheckedAccount<'info>,

    /// Fee recipient; must match the oracle config's treasury.
    /// CHECK: Validated by the constraint below.
    #[account(
        mut,
        constraint = treasury.key() == oracle_config.treasury @ CombineError::TreasuryMismatch
    )]
    pub treasury: UncheckedAccount<'info>,

    /// Tracking PDA, keyed by the id the oracle is about to assign.
    #[account(
        init,
        payer = authority,
        space = TrackedRequest::LEN,
        seeds = [b"tracked-request", oracle_config.request_counter.to_le_bytes().as_ref()],
        bump
    )]
    pub tracked_request: Account<'info, TrackedRequest>,

    #[account(
        constraint = oracle_program.key() == combine_state.oracle_program @ CombineError::OracleMismatch
    )]
    pub oracle_program: Program<'info, RandomnessOracle>,

    pub system_program: Program<'info, System>,
}

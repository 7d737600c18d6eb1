use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::OracleError;
use crate::events::RandomnessRequested;
use crate::state::{OracleConfig, OracleRequest};

/// Submit a new randomness request.
///
/// 1. Checks the offered payment against the published fee.
/// 2. Takes the next request id and advances `config.request_counter`.
/// 3. Transfers the payment to the treasury.
/// 4. Initializes the request PDA in `Pending` status.
/// 5. Emits [`RandomnessRequested`] for the fulfillment backend.
pub fn handler(ctx: Context<SubmitRequest>, tag: [u8; 32], fee: u64) -> Result<()> {
    let config = &mut ctx.accounts.config;
    require!(config.covers_fee(fee), OracleError::InsufficientPayment);

    let request_id = config
        .next_request_id()
        .ok_or(OracleError::CounterOverflow)?;

    if fee > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.requester.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                },
            ),
            fee,
        )?;
    }

    let request = &mut ctx.accounts.request;
    request.request_id = request_id;
    request.requester = ctx.accounts.requester.key();
    request.tag = tag;
    request.status = OracleRequest::STATUS_PENDING;
    request.randomness_handle = inco_lightning::types::Euint128(0);
    request.request_slot = Clock::get()?.slot;
    request.fulfilled_slot = 0;
    request.bump = ctx.bumps.request;

    emit!(RandomnessRequested {
        request_id,
        requester: request.requester,
        tag,
    });

    msg!("Randomness request {} submitted", request_id);
    Ok(())
}

#[derive(Accounts)]
pub struct SubmitRequest<'info> {
    /// The account requesting randomness; pays the fee and rent.
    #[account(mut)]
    pub requester: Signer<'info>,

    /// Oracle configuration PDA (mutated to increment `request_counter`).
    #[account(
        mut,
        seeds = [b"oracle-config"],
        bump = config.bump
    )]
    pub config: Account<'info, OracleConfig>,

    /// New request PDA. Seeds: `["request", counter.to_le_bytes()]`.
    #[account(
        init,
        payer = requester,
        space = OracleRequest::LEN,
        seeds = [b"request", config.request_counter.to_le_bytes().as_ref()],
        bump
    )]
    pub request: Account<'info, OracleRequest>,

    /// Fee recipient; must match `config.treasury`.
    /// CHECK: Validated by the constraint below.
    #[account(
        mut,
        constraint = treasury.key() == config.treasury @ OracleError::TreasuryMismatch
    )]
    pub treasury: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

use anchor_lang::prelude::*;
use inco_lightning::cpi::accounts::Operation;
use inco_lightning::cpi::e_rand;
use inco_lightning::program::IncoLightning;

use crate::error::OracleError;
use crate::events::RandomnessFulfilled;
use crate::state::{OracleConfig, OracleRequest};

/// Fulfill a pending randomness request.
///
/// Sources a fresh confidential randomness handle from the computation
/// engine and records it on the request account. The handle is stored
/// without any usage permission attached; whoever reads it must obtain
/// their own grant before passing it into a confidential operation.
pub fn handler(ctx: Context<FulfillRequest>, request_id: u64) -> Result<()> {
    let cpi_ctx = CpiContext::new(
        ctx.accounts.inco_lightning_program.to_account_info(),
        Operation {
            signer: ctx.accounts.authority.to_account_info(),
        },
    );
    let handle = e_rand(cpi_ctx, 16)?;

    let request = &mut ctx.accounts.request;
    let slot = Clock::get()?.slot;
    require!(request.fulfill(handle, slot), OracleError::RequestNotPending);

    emit!(RandomnessFulfilled {
        request_id,
        handle_id: handle.0,
    });

    msg!("Request {} fulfilled with handle {}", request_id, handle.0);
    Ok(())
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct FulfillRequest<'info> {
    /// Fulfillment key; must match `config.authority`.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [b"oracle-config"],
        bump = config.bump,
        constraint = config.authority == authority.key() @ OracleError::Unauthorized
    )]
    pub config: Account<'info, OracleConfig>,

    /// The request PDA to fulfill. Must be in `Pending` status.
    #[account(
        mut,
        seeds = [b"request", request_id.to_le_bytes().as_ref()],
        bump = request.bump,
        constraint = request.status == OracleRequest::STATUS_PENDING @ OracleError::RequestNotPending
    )]
    pub request: Account<'info, OracleRequest>,

    /// Inco Lightning program for the e_rand CPI
    pub inco_lightning_program: Program<'info, IncoLightning>,
}

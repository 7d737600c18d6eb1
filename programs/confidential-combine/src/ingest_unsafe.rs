use anchor_lang::prelude::*;
use inco_lightning::cpi::accounts::Operation;
use inco_lightning::cpi::new_euint128;
use inco_lightning::program::IncoLightning;

use crate::error::CombineError;
use crate::events::OperandsIngested;
use crate::state::CombineState;

/// Ingest the two base operands WITHOUT granting usage permission.
///
/// This is the anti-pattern path: the ciphertexts are converted into
/// handles and stored as-is. The handles are real, but the contract never
/// obtains usage permission on them, so every later confidential
/// operation on these operands is rejected by the engine.
pub fn handler(
    ctx: Context<IngestUnsafe>,
    ciphertext_a: Vec<u8>,
    ciphertext_b: Vec<u8>,
    input_type: u8,
) -> Result<()> {
    let state = &ctx.accounts.combine_state;
    require!(!state.initialized, CombineError::AlreadyInitialized);

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
        cpi_program,
        Operation { signer: state_info },
        signer_seeds,
    );
    let handle_b = new_euint128(cpi_ctx, ciphertext_b, input_type)?;

    let state = &mut ctx.accounts.combine_state;
    require!(
        state.set_operands(handle_a, handle_b),
        CombineError::AlreadyInitialized
    );

    emit!(OperandsIngested { permitted: false });

    msg!("Operands ingested without usage grants");
    Ok(())
}

#[derive(Accounts)]
pub struct IngestUnsafe<'info> {
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

    /// Inco Lightning program for the ingestion CPIs
    pub inco_lightning_program: Program<'info, IncoLightning>,
}

use anchor_lang::prelude::*;
use inco_lightning::cpi::accounts::Allow;
use inco_lightning::cpi::allow;
use inco_lightning::types::Euint128;

use crate::error::CombineError;
use crate::state::HandleRegistry;

/// Grant the contract usage permission on `handle` and record the grant.
///
/// Couples the engine-side allowance (an `allow` CPI signed with the state
/// PDA's seeds, allowed address = the state PDA itself) with the local
/// capability record. The engine rejects grants on handles the contract
/// does not own, which aborts the whole instruction.
///
/// Every confidential value the contract intends to keep using must pass
/// through here first: freshly ingested operands, combine outputs, and
/// randomness handles retrieved from the oracle all start un-permitted.
pub fn grant_usage<'info>(
    registry: &mut HandleRegistry,
    inco_program: AccountInfo<'info>,
    allowance_account: AccountInfo<'info>,
    state: AccountInfo<'info>,
    system_program: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    handle: Euint128,
) -> Result<()> {
    let state_key = state.key();
    let cpi_ctx = CpiContext::new_with_signer(
        inco_program,
        Allow {
            allowance_account,
            signer: state.clone(),
            allowed_address: state,
            system_program,
        },
        signer_seeds,
    );
    allow(cpi_ctx, handle.0, true, state_key)?;

    require!(registry.grant(handle.0), CombineError::RegistryFull);
    Ok(())
}

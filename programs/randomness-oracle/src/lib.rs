#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod state;

pub mod fulfill_request;
pub mod initialize;
pub mod submit_request;
pub mod update_config;

use fulfill_request::*;
use initialize::*;
use submit_request::*;
use update_config::*;

declare_id!("7Q5b9aimnHmR8ooooRqxgfYfnLmPi6qrVR9GrJ1b6fDq");

/// Confidential randomness oracle.
///
/// Hands out confidential randomness handles against a paid request:
///
/// 1. **Request**: any account calls `submit_request` with a tag and a
///    payment; a request PDA is created in `Pending` status and a
///    [`RandomnessRequested`](events::RandomnessRequested) event is emitted.
/// 2. **Fulfill**: the configured authority calls `fulfill_request` at an
///    arbitrary later time; a confidential handle is sourced from the
///    computation engine and the request transitions to `Fulfilled`.
/// 3. **Read**: consumers read the request account directly for the
///    fulfillment status and the handle. The handle carries no usage
///    permission; consumers must obtain their own grant.
#[program]
pub mod randomness_oracle {
    use super::*;

    /// Creates the singleton oracle configuration
    pub fn initialize(ctx: Context<Initialize>, fee: u64) -> Result<()> {
        initialize::handler(ctx, fee)
    }

    /// Submit a randomness request with a caller-supplied tag and payment
    pub fn submit_request(ctx: Context<SubmitRequest>, tag: [u8; 32], fee: u64) -> Result<()> {
        submit_request::handler(ctx, tag, fee)
    }

    /// Fulfill a pending request with a confidential randomness handle
    pub fn fulfill_request(ctx: Context<FulfillRequest>, request_id: u64) -> Result<()> {
        fulfill_request::handler(ctx, request_id)
    }

    /// Update the oracle configuration (admin-only)
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_authority: Option<Pubkey>,
        new_fee: Option<u64>,
        new_treasury: Option<Pubkey>,
        new_admin: Option<Pubkey>,
    ) -> Result<()> {
        update_config::handler(ctx, new_authority, new_fee, new_treasury, new_admin)
    }
}

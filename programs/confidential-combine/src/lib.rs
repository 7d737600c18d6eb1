#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod permission;
pub mod state;

pub mod combine;
pub mod combine_with_randomness_safe;
pub mod combine_with_randomness_unsafe;
pub mod ingest_safe;
pub mod ingest_unsafe;
pub mod initialize;
pub mod submit_request;

use combine::*;
use combine_with_randomness_safe::*;
use combine_with_randomness_unsafe::*;
use ingest_safe::*;
use ingest_unsafe::*;
use initialize::*;
use submit_request::*;

declare_id!("2fS8A3rSY5zSJyc5kaCKhAhwjpLiRPhth1bTwNWmGNcn");

/// Confidential combine contract.
///
/// Demonstrates the permission discipline required when operating on
/// confidential values: every handle the contract intends to use in a
/// confidential operation must first receive a usage grant, including
/// handles produced as operation outputs and randomness handles
/// retrieved from the oracle. Each ingestion and randomness operation
/// exists in a safe and an unsafe variant so the consequence of a
/// missing grant stays independently observable.
#[program]
pub mod confidential_combine {
    use super::*;

    /// Creates the contract state and handle registry; pins the oracle program
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::handler(ctx)
    }

    /// Submit a randomness request to the oracle and track it locally
    pub fn submit_request(ctx: Context<SubmitRequest>, tag: [u8; 32], fee: u64) -> Result<()> {
        submit_request::handler(ctx, tag, fee)
    }

    /// Ingest the two base operands without usage grants (anti-pattern)
    pub fn ingest_unsafe(
        ctx: Context<IngestUnsafe>,
        ciphertext_a: Vec<u8>,
        ciphertext_b: Vec<u8>,
        input_type: u8,
    ) -> Result<()> {
        ingest_unsafe::handler(ctx, ciphertext_a, ciphertext_b, input_type)
    }

    /// Ingest the two base operands and grant usage on both
    /// Pass 2 allowance PDAs via remaining_accounts
    pub fn ingest_safe<'info>(
        ctx: Context<'_, '_, '_, 'info, IngestSafe<'info>>,
        ciphertext_a: Vec<u8>,
        ciphertext_b: Vec<u8>,
        input_type: u8,
    ) -> Result<()> {
        ingest_safe::handler(ctx, ciphertext_a, ciphertext_b, input_type)
    }

    /// Combine the two base operands; grants the output before storing it
    pub fn combine(ctx: Context<Combine>) -> Result<()> {
        combine::handler(ctx)
    }

    /// Fold fulfilled oracle randomness into the combine without grants (anti-pattern)
    pub fn combine_with_randomness_unsafe(
        ctx: Context<CombineWithRandomnessUnsafe>,
        request_id: u64,
    ) -> Result<()> {
        combine_with_randomness_unsafe::handler(ctx, request_id)
    }

    /// Fold fulfilled oracle randomness into the combine with full grants
    /// Pass 3 allowance PDAs via remaining_accounts
    pub fn combine_with_randomness_safe<'info>(
        ctx: Context<'_, '_, '_, 'info, CombineWithRandomnessSafe<'info>>,
        request_id: u64,
    ) -> Result<()> {
        combine_with_randomness_safe::handler(ctx, request_id)
    }
}

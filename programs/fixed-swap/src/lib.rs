use anchor_lang::prelude::*;

pub mod state;
pub mod instructions;
pub mod error;
pub mod events;

pub use instructions::*;

declare_id!("7GFXgchPpNAaysNviqMjDFD9kE4YbW1DAEaVCMoRnTCU");

#[program]
pub mod fixed_swap {
    use super::*;

    pub fn create_pool(ctx: Context<CreatePool>, rate: u64) -> Result<()> {
        ctx.accounts.process(rate)
    }

    pub fn swap(ctx: Context<Swap>, amount: u64) -> Result<()> {
        ctx.accounts.process(ctx.bumps.pool_authority, amount)
    }
}

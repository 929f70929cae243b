//! 链下事件记录

use anchor_lang::prelude::*;


/// 池子创建
#[event]
pub struct PoolCreatedEvent {
    pub pool: Pubkey,
    pub initializer: Pubkey,
    pub token_mint: Pubkey,
    pub escrow_token_account: Pubkey,
    pub payout_wallet: Pubkey,
    pub rate: u64,
}


/// 兑换事件
#[event]
pub struct SwapEvent {
    pub taker: Pubkey,
    pub pool: Pubkey,
    pub escrow_token_account: Pubkey,
    pub taker_receive_token_account: Pubkey,
    pub payout_wallet: Pubkey,
    pub lamports_in: u64,
    pub tokens_out: u64,
}

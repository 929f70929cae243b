//! 固定汇率兑换

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{error::SwapError, events::SwapEvent, state::Pool};

use super::shared::{calculate_release_amount, transfer_lamports, transfer_tokens};


#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(mut)]
    pub taker: Signer<'info>,

    #[account(
        seeds = [
            Pool::POOL_SEEDS,
            escrow_token_account.key().as_ref()
        ],
        bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        address = pool.token_mint
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        address = pool.escrow_token_account,
        token::authority = pool_authority
    )]
    pub escrow_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        token::mint = token_mint
    )]
    pub taker_receive_token_account: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        address = pool.payout_wallet
    )]
    pub payout_wallet: SystemAccount<'info>,

    /// CHECK: 派生权限账户, 只作为托管账户的签名者, 不存储数据
    #[account(
        seeds = [Pool::AUTHORITY_SEEDS],
        bump
    )]
    pub pool_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}


impl<'info> Swap<'info> {
    pub fn process(&self, bump_authority: u8, amount: u64) -> Result<()> {
        require_gt!(amount, 0, SwapError::ZeroSwapAmount);

        let released = calculate_release_amount(amount, self.pool.rate)
            .ok_or(SwapError::CalculationFailure)?;

        // 托管余额不足则整体拒绝, 不做部分释放
        if released > self.escrow_token_account.amount {
            return err!(SwapError::InsufficientEscrowBalance);
        }

        // SOL 支付
        transfer_lamports(
            self.taker.to_account_info(),
            self.payout_wallet.to_account_info(),
            amount,
            &self.system_program
        )?;
        msg!("兑换(SOL 支付): {}", amount);

        // 代币释放, 由派生权限账户签名
        transfer_tokens(
            &self.escrow_token_account,
            &self.taker_receive_token_account,
            released,
            &self.token_mint,
            self.pool_authority.to_account_info(),
            &self.token_program,
            Some(&[&[
                Pool::AUTHORITY_SEEDS,
                &[bump_authority]
            ]])
        )?;
        msg!("兑换(代币释放): {}", released);

        emit!(SwapEvent {
            taker: self.taker.key(),
            pool: self.pool.key(),
            escrow_token_account: self.escrow_token_account.key(),
            taker_receive_token_account: self.taker_receive_token_account.key(),
            payout_wallet: self.payout_wallet.key(),
            lamports_in: amount,
            tokens_out: released,
        });

        Ok(())
    }
}

//! 创建兑换池

use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::instruction::AuthorityType;
use anchor_spl::token_interface::{
    set_authority, Mint, SetAuthority, TokenAccount, TokenInterface,
};

use crate::{error::SwapError, events::PoolCreatedEvent, state::Pool};


#[derive(Accounts)]
pub struct CreatePool<'info> {
    #[account(mut)]
    pub initializer: Signer<'info>,

    #[account(
        address = deposit_token_account.mint
    )]
    pub token_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub deposit_token_account: InterfaceAccount<'info, TokenAccount>,

    pub payout_wallet: SystemAccount<'info>,

    #[account(
        init,
        payer = initializer,
        space = Pool::POOL_SPACE,
        seeds = [
            Pool::POOL_SEEDS,
            deposit_token_account.key().as_ref()
        ],
        bump
    )]
    pub pool: Account<'info, Pool>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}


impl<'info> CreatePool<'info> {
    pub fn process(&mut self, rate: u64) -> Result<()> {
        if self.deposit_token_account.owner != self.initializer.key() {
            return err!(SwapError::DepositOwnerMismatch);
        }

        require_gt!(
            self.deposit_token_account.amount,
            0,
            SwapError::EmptyDeposit
        );

        let (authority, _) = Pool::authority_address(&crate::ID)?;

        // 托管账户的所有权移交给派生权限账户, 余额不动
        set_authority(
            CpiContext::new(
                self.token_program.to_account_info(),
                SetAuthority {
                    account_or_mint: self.deposit_token_account.to_account_info(),
                    current_authority: self.initializer.to_account_info()
                }
            ),
            AuthorityType::AccountOwner,
            Some(authority)
        )?;
        msg!("建池(所有权移交): {}", authority);

        self.pool.set_inner(Pool {
            initializer: self.initializer.key(),
            token_mint: self.token_mint.key(),
            escrow_token_account: self.deposit_token_account.key(),
            payout_wallet: self.payout_wallet.key(),
            rate,
        });

        emit!(PoolCreatedEvent {
            pool: self.pool.key(),
            initializer: self.initializer.key(),
            token_mint: self.token_mint.key(),
            escrow_token_account: self.deposit_token_account.key(),
            payout_wallet: self.payout_wallet.key(),
            rate,
        });

        Ok(())
    }
}

use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::token_interface::{
    Mint,
    TokenAccount,
    TokenInterface,
    transfer_checked,
    TransferChecked
};


/// 按固定汇率计算应释放的代币数量, 溢出时返回 None
pub fn calculate_release_amount(amount: u64, rate: u64) -> Option<u64> {
    amount.checked_mul(rate)
}


pub fn transfer_tokens<'info>(
    from: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    amount: u64,
    mint: &InterfaceAccount<'info, Mint>,
    authority: AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    signer_seeds: Option<&[&[&[u8]]]>
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: from.to_account_info(),
        mint: mint.to_account_info(),
        to: to.to_account_info(),
        authority
    };

    let cpi_ctx = match signer_seeds {
        Some(seeds) => CpiContext::new_with_signer(
            token_program.to_account_info(),
            cpi_accounts,
            seeds
        ),
        None => CpiContext::new(token_program.to_account_info(), cpi_accounts),
    };

    transfer_checked(cpi_ctx, amount, mint.decimals)
}


pub fn transfer_lamports<'info>(
    from: AccountInfo<'info>,
    to: AccountInfo<'info>,
    amount: u64,
    system_program: &Program<'info, System>
) -> Result<()> {
    transfer(
        CpiContext::new(
            system_program.to_account_info(),
            Transfer { from, to }
        ),
        amount
    )
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_amount_follows_fixed_rate() {
        assert_eq!(calculate_release_amount(10, 10), Some(100));
        assert_eq!(calculate_release_amount(11, 10), Some(110));
        assert_eq!(calculate_release_amount(1, 1), Some(1));
    }

    #[test]
    fn release_amount_overflow_is_rejected() {
        assert_eq!(calculate_release_amount(u64::MAX, 2), None);
        assert_eq!(calculate_release_amount(u64::MAX / 2 + 1, 2), None);
        assert_eq!(calculate_release_amount(u64::MAX, 1), Some(u64::MAX));
    }

    #[test]
    fn zero_rate_releases_nothing() {
        assert_eq!(calculate_release_amount(42, 0), Some(0));
    }

    #[test]
    fn sequential_swaps_accumulate_against_escrow() {
        let rate = 10u64;
        let mut escrow = 500u64;
        let mut taker = 0u64;
        let mut payout = 0u64;

        for amount in [10u64, 11] {
            let released = calculate_release_amount(amount, rate).unwrap();
            assert!(released <= escrow);
            escrow -= released;
            taker += released;
            payout += amount;
        }

        assert_eq!(taker, 210);
        assert_eq!(escrow, 290);
        assert_eq!(payout, 21);

        // 超出托管余额的请求必须整体拒绝, 不做部分释放
        let released = calculate_release_amount(30, rate).unwrap();
        assert!(released > escrow);
    }
}

//! 兑换池全局账户

use anchor_lang::prelude::*;

use crate::error::SwapError;


#[account]
pub struct Pool {
    pub initializer: Pubkey,
    pub token_mint: Pubkey,
    pub escrow_token_account: Pubkey,
    pub payout_wallet: Pubkey,
    pub rate: u64,
}

impl Pool {
    pub const POOL_SPACE: usize = 144;
    pub const POOL_SEEDS: &'static [u8] = b"pool";
    pub const AUTHORITY_SEEDS: &'static [u8] = b"swap";

    /// 派生权限账户地址, 任何一方都可以从公开种子独立验证
    pub fn authority_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
        Pubkey::try_find_program_address(&[Self::AUTHORITY_SEEDS], program_id)
            .ok_or_else(|| error!(SwapError::AuthorityDerivationFailure))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_address_is_deterministic() {
        let first = Pool::authority_address(&crate::ID).unwrap();
        let second = Pool::authority_address(&crate::ID).unwrap();
        assert_eq!(first, second);
        assert_ne!(first.0, crate::ID);
    }

    #[test]
    fn authority_address_depends_on_program_id() {
        let ours = Pool::authority_address(&crate::ID).unwrap();
        let other = Pool::authority_address(&Pubkey::new_unique()).unwrap();
        assert_ne!(ours.0, other.0);
    }

    #[test]
    fn pool_space_covers_all_fields() {
        // 8 字节判别符 + 4 个 Pubkey + rate
        assert_eq!(Pool::POOL_SPACE, 8 + 32 * 4 + 8);
    }
}

use anchor_lang::prelude::*;


#[error_code]
pub enum SwapError {
    #[msg("Deposit token account is not owned by the initializer")]
    DepositOwnerMismatch,

    #[msg("Deposit token account balance must be greater than zero")]
    EmptyDeposit,

    #[msg("Swap amount must be greater than zero")]
    ZeroSwapAmount,

    #[msg("General calculation failure due to overflow or underflow")]
    CalculationFailure,

    #[msg("Escrow token balance is insufficient for the requested release")]
    InsufficientEscrowBalance,

    #[msg("No derived authority address exists for the program seeds")]
    AuthorityDerivationFailure,
}

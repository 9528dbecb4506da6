use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Cannot initialize, title too long.")]
    TitleTooLong,
    #[msg("Cannot initialize, description too long.")]
    DescriptionTooLong,
    #[msg("Cannot initialize, goal must be greater than zero.")]
    GoalMustBeGreaterThanZero,
    #[msg("Cannot initialize, expiry must be in the future.")]
    ExpiresAtMustBeGreaterThanNow,
    #[msg("Cannot contribute, amount must be greater than zero.")]
    AmountMustBeGreaterThanZero,
    #[msg("Cannot claim, goal not reached and deadline has not passed.")]
    TooEarlyToClaim,
    #[msg("Cannot claim, project balance does not cover the rent reserve.")]
    InsufficientFundsToClaim,
    #[msg("Project is already closed.")]
    AlreadyClosed,
    #[msg("Signer is not the project owner.")]
    Unauthorized,
    #[msg("A calculation resulted in a numeric overflow.")]
    NumericOverflow,
}

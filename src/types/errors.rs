use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: {0}")]
    Parse(#[from] rust_decimal::Error),
    #[error("Amount error: negative value [{0}]")]
    Negative(Decimal),
    #[error("Amount error: value [{0}] exceeds the maximum of [{max}]", max = super::amount::MAX_AMOUNT)]
    TooLarge(Decimal)
}

use thiserror::Error;

use crate::hub3::field::Hub3Field;

/// Reasons a slip is refused in strict mode. Truncate mode never fails.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum Hub3Error {
    #[error("Field {field} is {actual} characters long but only {max} fit")]
    FieldTooLong {
        field: Hub3Field,
        max: usize,
        actual: usize,
    },

    #[error("Field {0} contains a line break")]
    ContainsNewline(Hub3Field),

    #[error("Currency must be a three letter uppercase code, got {0:?}")]
    InvalidCurrency(String),

    #[error("Payment model must be HR followed by two digits, got {0:?}")]
    InvalidModel(String),

    #[error("Recipient IBAN is not a valid electronic-format IBAN")]
    InvalidIban,
}

impl Hub3Error {
    /// The field the error is about, used as a metric label.
    pub fn field(&self) -> Hub3Field {
        match self {
            Hub3Error::FieldTooLong { field, .. } => *field,
            Hub3Error::ContainsNewline(field) => *field,
            Hub3Error::InvalidCurrency(_) => Hub3Field::Currency,
            Hub3Error::InvalidModel(_) => Hub3Field::Model,
            Hub3Error::InvalidIban => Hub3Field::RecipientIban,
        }
    }
}

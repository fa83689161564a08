mod iban_checker;
mod oib_checksum;

pub use crate::secondary_validation::iban_checker::IbanChecker;
pub use crate::secondary_validation::oib_checksum::{validate_oib, Oib, OibChecksum, OibError};

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}

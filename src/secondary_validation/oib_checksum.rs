use std::fmt;
use std::str::FromStr;

use iso_iec_7064::{System, MOD_11_10};
use thiserror::Error;

use crate::secondary_validation::Validator;

const OIB_LENGTH: usize = 11;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum OibError {
    #[error("An OIB has exactly 11 digits, got {0} characters")]
    WrongLength(usize),

    #[error("An OIB may only contain ASCII digits")]
    NonDigit,

    #[error("The OIB check digit does not match")]
    ChecksumMismatch,
}

/// Croatian personal identification number, checked with ISO 7064 MOD 11-10.
pub struct OibChecksum;

impl Validator for OibChecksum {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        validate_oib(regex_match)
    }
}

/// Returns true if `oib` is 11 ASCII digits whose last digit is the
/// MOD 11-10 check digit of the first ten.
pub fn validate_oib(oib: &str) -> bool {
    check_oib(oib).is_ok()
}

fn check_oib(oib: &str) -> Result<(), OibError> {
    let bytes = oib.as_bytes();
    if bytes.len() != OIB_LENGTH {
        return Err(OibError::WrongLength(oib.chars().count()));
    }
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Err(OibError::NonDigit);
    }

    if !MOD_11_10.validate_string(oib) {
        return Err(OibError::ChecksumMismatch);
    }
    Ok(())
}

/// An OIB that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Oib(String);

impl Oib {
    pub fn parse(input: &str) -> Result<Self, OibError> {
        check_oib(input)?;
        Ok(Oib(input.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Oib {
    type Err = OibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Oib::parse(s)
    }
}

impl TryFrom<&str> for Oib {
    type Error = OibError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Oib::parse(value)
    }
}

impl fmt::Display for Oib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

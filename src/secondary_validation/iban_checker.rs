use crate::secondary_validation::Validator;
use iban::Iban;

/// Accepts IBANs in either electronic or print form, ignoring separators.
pub struct IbanChecker;

impl Validator for IbanChecker {
    fn is_valid_match(&self, regex_match: &str) -> bool {
        let iban_candidate: String = regex_match
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        iban_candidate.parse::<Iban>().is_ok()
    }
}

impl IbanChecker {
    /// Only the electronic form is accepted: no separators, no lowercase.
    pub fn is_valid_electronic(&self, candidate: &str) -> bool {
        candidate
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
            && candidate.parse::<Iban>().is_ok()
    }
}

use serde::{Deserialize, Serialize};

use crate::amount::{format_hub3_amount, Hub3Amount};
use crate::hub3::field::Hub3Field;
use std::borrow::Cow;

pub const DEFAULT_CURRENCY: &str = "EUR";

/// A single payment slip ("uplatnica"). Field names follow the JSON shape
/// used by the invoicing front end.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSlip {
    pub amount: Hub3Amount,
    pub payer_name: String,
    pub payer_address: String,
    pub payer_city: String,
    pub recipient_name: String,
    pub recipient_address: String,
    pub recipient_city: String,
    #[serde(rename = "recipientIBAN", alias = "recipientIban")]
    pub recipient_iban: String,
    pub model: String,
    pub reference: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl PaymentSlip {
    pub fn new(amount: Hub3Amount) -> Self {
        Self {
            amount,
            payer_name: String::new(),
            payer_address: String::new(),
            payer_city: String::new(),
            recipient_name: String::new(),
            recipient_address: String::new(),
            recipient_city: String::new(),
            recipient_iban: String::new(),
            model: String::new(),
            reference: String::new(),
            description: String::new(),
            currency: None,
        }
    }

    pub fn payer(&self, name: &str, address: &str, city: &str) -> Self {
        self.mutate_clone(|x| {
            x.payer_name = name.to_owned();
            x.payer_address = address.to_owned();
            x.payer_city = city.to_owned();
        })
    }

    pub fn recipient(&self, name: &str, address: &str, city: &str) -> Self {
        self.mutate_clone(|x| {
            x.recipient_name = name.to_owned();
            x.recipient_address = address.to_owned();
            x.recipient_city = city.to_owned();
        })
    }

    pub fn recipient_iban(&self, iban: &str) -> Self {
        self.mutate_clone(|x| x.recipient_iban = iban.to_owned())
    }

    pub fn model(&self, model: &str) -> Self {
        self.mutate_clone(|x| x.model = model.to_owned())
    }

    pub fn reference(&self, reference: &str) -> Self {
        self.mutate_clone(|x| x.reference = reference.to_owned())
    }

    pub fn description(&self, description: &str) -> Self {
        self.mutate_clone(|x| x.description = description.to_owned())
    }

    pub fn currency(&self, currency: &str) -> Self {
        self.mutate_clone(|x| x.currency = Some(currency.to_owned()))
    }

    pub fn currency_code(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY)
    }

    /// The unpadded text of a field as the encoder sees it.
    pub fn value(&self, field: Hub3Field) -> Cow<'_, str> {
        match field {
            Hub3Field::Currency => Cow::Borrowed(self.currency_code()),
            Hub3Field::Amount => Cow::Owned(format_hub3_amount(&self.amount)),
            Hub3Field::PayerName => Cow::Borrowed(&self.payer_name),
            Hub3Field::PayerAddress => Cow::Borrowed(&self.payer_address),
            Hub3Field::PayerCity => Cow::Borrowed(&self.payer_city),
            Hub3Field::RecipientName => Cow::Borrowed(&self.recipient_name),
            Hub3Field::RecipientAddress => Cow::Borrowed(&self.recipient_address),
            Hub3Field::RecipientCity => Cow::Borrowed(&self.recipient_city),
            Hub3Field::RecipientIban => Cow::Borrowed(&self.recipient_iban),
            Hub3Field::Model => Cow::Borrowed(&self.model),
            Hub3Field::Reference => Cow::Borrowed(&self.reference),
            Hub3Field::Description => Cow::Borrowed(&self.description),
        }
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

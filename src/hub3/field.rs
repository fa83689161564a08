use strum::{Display, EnumIter, IntoStaticStr};

/// The record fields carried by a HUB-3 payload. The header and the purpose
/// code are literals and have no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Hub3Field {
    Currency,
    Amount,
    PayerName,
    PayerAddress,
    PayerCity,
    RecipientName,
    RecipientAddress,
    RecipientCity,
    RecipientIban,
    Model,
    Reference,
    Description,
}

impl Hub3Field {
    /// Fixed width of the encoded field in characters. `None` for the
    /// currency, IBAN and model, which are written verbatim.
    pub const fn width(self) -> Option<usize> {
        match self {
            Hub3Field::Currency => None,
            Hub3Field::Amount => Some(crate::amount::AMOUNT_WIDTH),
            Hub3Field::PayerName => Some(30),
            Hub3Field::PayerAddress => Some(27),
            Hub3Field::PayerCity => Some(27),
            Hub3Field::RecipientName => Some(25),
            Hub3Field::RecipientAddress => Some(25),
            Hub3Field::RecipientCity => Some(27),
            Hub3Field::RecipientIban => None,
            Hub3Field::Model => None,
            Hub3Field::Reference => Some(22),
            Hub3Field::Description => Some(35),
        }
    }

    /// Whether the encoder truncates and space-pads this field.
    pub const fn is_padded(self) -> bool {
        !matches!(self, Hub3Field::Amount) && self.width().is_some()
    }
}

/// One line of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line {
    Literal(&'static str),
    Field(Hub3Field),
}

pub const HEADER: &str = "HRVHUB30";
pub const PURPOSE_CODE: &str = "COST";

pub(crate) const LAYOUT: [Line; 14] = [
    Line::Literal(HEADER),
    Line::Field(Hub3Field::Currency),
    Line::Field(Hub3Field::Amount),
    Line::Field(Hub3Field::PayerName),
    Line::Field(Hub3Field::PayerAddress),
    Line::Field(Hub3Field::PayerCity),
    Line::Field(Hub3Field::RecipientName),
    Line::Field(Hub3Field::RecipientAddress),
    Line::Field(Hub3Field::RecipientCity),
    Line::Field(Hub3Field::RecipientIban),
    Line::Field(Hub3Field::Model),
    Line::Field(Hub3Field::Reference),
    Line::Literal(PURPOSE_CODE),
    Line::Field(Hub3Field::Description),
];

// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod amount;
mod barcode;
mod hub3;
mod observability;
mod secondary_validation;
mod vat;

// This is the public API of the HUB-3 core library
pub use amount::{format_hub3_amount, AmountError, Hub3Amount, AMOUNT_WIDTH};
pub use barcode::{
    to_data_url, BarcodeRenderer, PaymentBarcode, PaymentBarcodeError, RenderError,
    RenderedBarcode,
};
pub use hub3::{
    generate_hub3_data, pad_field, EncodeMode, EncoderConfig, Hub3Encoder, Hub3Error, Hub3Field,
    Hub3Metrics, PaymentSlip, DEFAULT_CURRENCY, HEADER, LINE_COUNT, PURPOSE_CODE,
};
pub use observability::labels::Labels;
pub use secondary_validation::{validate_oib, IbanChecker, Oib, OibChecksum, OibError, Validator};
pub use vat::{
    invoice_totals, line_totals, round_to_cents, InvoiceLine, InvoiceTotals, LineTotals, VatRate,
};

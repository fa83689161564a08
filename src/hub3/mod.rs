//! Encoding of Croatian payment slips into the HUB-3 text payload that is
//! rendered as a PDF417 barcode.
//!
//! The payload is 14 newline separated lines. Free text fields occupy a fixed
//! number of characters: longer text is cut, shorter text is padded with
//! spaces on the right.

mod config;
mod error;
mod field;
mod metrics;
mod slip;

pub use config::{EncodeMode, EncoderConfig};
pub use error::Hub3Error;
pub use field::{Hub3Field, HEADER, PURPOSE_CODE};
pub use slip::{PaymentSlip, DEFAULT_CURRENCY};
// `self::` keeps the local module apart from the metrics crate
pub use self::metrics::Hub3Metrics;

use crate::secondary_validation::IbanChecker;
use field::{Line, LAYOUT};

/// Number of lines in every payload.
pub const LINE_COUNT: usize = LAYOUT.len();

/// Encodes a slip, truncating and padding every text field.
///
/// This never fails and produces the same bytes for the same slip.
pub fn generate_hub3_data(slip: &PaymentSlip) -> String {
    assemble(slip)
}

/// Truncates `value` to `width` characters and right-pads it with spaces.
/// Line breaks become spaces so the payload keeps its line structure.
pub fn pad_field(value: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut len = 0;
    for c in value.chars().take(width) {
        out.push(replace_line_break(c));
        len += 1;
    }
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

#[inline]
fn replace_line_break(c: char) -> char {
    if is_line_break(c) {
        ' '
    } else {
        c
    }
}

#[inline]
fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r')
}

fn encode_field(slip: &PaymentSlip, field: Hub3Field) -> String {
    let value = slip.value(field);
    match field.width() {
        Some(width) if field.is_padded() => pad_field(&value, width),
        _ => value.chars().map(replace_line_break).collect(),
    }
}

fn assemble(slip: &PaymentSlip) -> String {
    let lines: Vec<String> = LAYOUT
        .iter()
        .map(|line| match line {
            Line::Literal(text) => (*text).to_owned(),
            Line::Field(field) => encode_field(slip, *field),
        })
        .collect();
    lines.join("\n")
}

/// HUB-3 encoder with a configurable policy for fields that do not fit.
pub struct Hub3Encoder {
    config: EncoderConfig,
    metrics: Hub3Metrics,
}

impl Hub3Encoder {
    pub fn new(config: EncoderConfig) -> Self {
        let metrics = Hub3Metrics::new(&config.labels);
        Hub3Encoder { config, metrics }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn encode(&self, slip: &PaymentSlip) -> Result<String, Hub3Error> {
        match self.config.mode {
            EncodeMode::Truncate => self.record_truncations(slip),
            EncodeMode::Strict => {
                if let Err(err) = check_strict(slip) {
                    tracing::debug!(field = %err.field(), error = %err, "rejecting payment slip");
                    self.metrics.rejected(err.field());
                    return Err(err);
                }
            }
        }
        self.metrics.encoded();
        Ok(assemble(slip))
    }

    fn record_truncations(&self, slip: &PaymentSlip) {
        for field in padded_fields() {
            let (Some(width), actual) = (field.width(), slip.value(field).chars().count()) else {
                continue;
            };
            if actual > width {
                tracing::debug!(field = %field, width, actual, "truncating payment slip field");
                self.metrics.truncated(field);
            }
        }
    }
}

impl Default for Hub3Encoder {
    fn default() -> Self {
        Hub3Encoder::new(EncoderConfig::default())
    }
}

fn padded_fields() -> impl Iterator<Item = Hub3Field> {
    LAYOUT.into_iter().filter_map(|line| match line {
        Line::Field(field) if field.is_padded() => Some(field),
        _ => None,
    })
}

fn check_strict(slip: &PaymentSlip) -> Result<(), Hub3Error> {
    for line in LAYOUT {
        let Line::Field(field) = line else {
            continue;
        };
        let value = slip.value(field);
        if value.chars().any(is_line_break) {
            return Err(Hub3Error::ContainsNewline(field));
        }
        if let Some(max) = field.width().filter(|_| field.is_padded()) {
            let actual = value.chars().count();
            if actual > max {
                return Err(Hub3Error::FieldTooLong { field, max, actual });
            }
        }
    }

    let currency = slip.currency_code();
    if currency.len() != 3 || !currency.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(Hub3Error::InvalidCurrency(currency.to_owned()));
    }

    if !is_valid_model(&slip.model) {
        return Err(Hub3Error::InvalidModel(slip.model.clone()));
    }

    if !IbanChecker.is_valid_electronic(&slip.recipient_iban) {
        return Err(Hub3Error::InvalidIban);
    }

    Ok(())
}

fn is_valid_model(model: &str) -> bool {
    let bytes = model.as_bytes();
    bytes.len() == 4 && bytes.starts_with(b"HR") && bytes[2..].iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Hub3Amount;
    use crate::Labels;
    use ::metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::{CompositeKey, MetricKind};

    fn sample_slip() -> PaymentSlip {
        PaymentSlip::new(Hub3Amount::try_from(262.51).unwrap())
            .payer("Ivan Horvat", "Ilica 1", "10000 Zagreb")
            .recipient("HZZO", "Margaretska 3", "10000 Zagreb")
            .recipient_iban("HR6510010051550100001")
            .model("HR68")
            .reference("1234567890123-12345")
            .description("Doprinos za zdravstveno osiguranje")
    }

    #[test]
    fn pad_field_truncates_then_pads() {
        assert_eq!(pad_field("abc", 5), "abc  ");
        assert_eq!(pad_field("abcdefgh", 5), "abcde");
        assert_eq!(pad_field("", 3), "   ");
        assert_eq!(pad_field("abcde", 5), "abcde");
        assert_eq!(pad_field("a\nb", 4), "a b ");
    }

    #[test]
    fn pad_field_counts_characters_not_bytes() {
        let padded = pad_field("Čakovečka Đurđevac", 10);
        assert_eq!(padded, "Čakovečka ");
        assert_eq!(padded.chars().count(), 10);
        assert_eq!(pad_field("žž", 4), "žž  ");
    }

    #[test]
    fn payload_has_expected_lines() {
        let payload = generate_hub3_data(&sample_slip());
        let lines: Vec<&str> = payload.split('\n').collect();
        assert_eq!(lines.len(), LINE_COUNT);
        assert_eq!(lines[0], "HRVHUB30");
        assert_eq!(lines[1], "EUR");
        assert_eq!(lines[2], "000000000026251");
        assert_eq!(lines[3], format!("{:<30}", "Ivan Horvat"));
        assert_eq!(lines[4], format!("{:<27}", "Ilica 1"));
        assert_eq!(lines[5], format!("{:<27}", "10000 Zagreb"));
        assert_eq!(lines[6], format!("{:<25}", "HZZO"));
        assert_eq!(lines[7], format!("{:<25}", "Margaretska 3"));
        assert_eq!(lines[8], format!("{:<27}", "10000 Zagreb"));
        assert_eq!(lines[9], "HR6510010051550100001");
        assert_eq!(lines[10], "HR68");
        assert_eq!(lines[11], format!("{:<22}", "1234567890123-12345"));
        assert_eq!(lines[12], "COST");
        assert_eq!(lines[13], "Doprinos za zdravstveno osiguranje ");
    }

    #[test]
    fn long_fields_keep_their_width() {
        let long = "x".repeat(100);
        let slip = sample_slip()
            .payer(&long, &long, &long)
            .recipient(&long, &long, &long)
            .reference(&long)
            .description(&long);
        let payload = generate_hub3_data(&slip);
        let lines: Vec<&str> = payload.split('\n').collect();
        assert_eq!(lines.len(), LINE_COUNT);
        for (line, text) in LAYOUT.iter().zip(lines) {
            if let Line::Field(field) = line {
                if field.is_padded() {
                    assert_eq!(Some(text.chars().count()), field.width(), "{}", field);
                }
            }
        }
    }

    #[test]
    fn line_breaks_never_split_the_payload() {
        let slip = sample_slip()
            .description("first\nsecond")
            .model("HR\n68")
            .currency("E\rR");
        let payload = generate_hub3_data(&slip);
        assert_eq!(payload.split('\n').count(), LINE_COUNT);
        assert!(!payload.contains('\r'));
    }

    #[test]
    fn custom_currency_is_passed_through() {
        let payload = generate_hub3_data(&sample_slip().currency("HRK"));
        assert_eq!(payload.split('\n').nth(1), Some("HRK"));
    }

    #[test]
    fn truncate_mode_matches_free_function() {
        let slip = sample_slip().description(&"y".repeat(50));
        let encoder = Hub3Encoder::default();
        assert_eq!(encoder.encode(&slip).unwrap(), generate_hub3_data(&slip));
    }

    #[test]
    fn strict_mode_accepts_conforming_slip() {
        let encoder = EncoderConfig::new().mode(EncodeMode::Strict).build();
        let slip = sample_slip();
        assert_eq!(encoder.encode(&slip).unwrap(), generate_hub3_data(&slip));
    }

    #[test]
    fn strict_mode_rejects_bad_fields() {
        let encoder = EncoderConfig::new().mode(EncodeMode::Strict).build();

        let err = encoder
            .encode(&sample_slip().payer(&"a".repeat(31), "", ""))
            .unwrap_err();
        assert_eq!(
            err,
            Hub3Error::FieldTooLong {
                field: Hub3Field::PayerName,
                max: 30,
                actual: 31
            }
        );

        let err = encoder
            .encode(&sample_slip().description("a\nb"))
            .unwrap_err();
        assert_eq!(err, Hub3Error::ContainsNewline(Hub3Field::Description));

        let err = encoder.encode(&sample_slip().currency("eur")).unwrap_err();
        assert_eq!(err, Hub3Error::InvalidCurrency("eur".to_string()));

        let err = encoder.encode(&sample_slip().model("HR6")).unwrap_err();
        assert_eq!(err, Hub3Error::InvalidModel("HR6".to_string()));

        let err = encoder
            .encode(&sample_slip().recipient_iban("HR6610010051550100001"))
            .unwrap_err();
        assert_eq!(err, Hub3Error::InvalidIban);
        assert_eq!(err.field(), Hub3Field::RecipientIban);
    }

    #[test]
    fn strict_mode_width_counts_croatian_letters_once() {
        let encoder = EncoderConfig::new().mode(EncodeMode::Strict).build();
        let name = "č".repeat(30);
        assert!(encoder.encode(&sample_slip().payer(&name, "", "")).is_ok());
    }

    #[test]
    fn should_submit_encoding_metrics() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        ::metrics::with_local_recorder(&recorder, || {
            let encoder = EncoderConfig::new()
                .labels(Labels::new(&[("tenant", "acme")]))
                .build();
            encoder
                .encode(&sample_slip().description(&"z".repeat(40)))
                .unwrap();

            let strict = EncoderConfig::new().mode(EncodeMode::Strict).build();
            strict.encode(&sample_slip().model("99")).unwrap_err();
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let key = Key::from_parts("hub3.encoded", vec![Label::new("tenant", "acme")]);
        let metric_value = snapshot
            .get(&CompositeKey::new(MetricKind::Counter, key))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

        let key = Key::from_parts(
            "hub3.truncated_fields",
            vec![
                Label::new("tenant", "acme"),
                Label::new("field", "description"),
            ],
        );
        let metric_value = snapshot
            .get(&CompositeKey::new(MetricKind::Counter, key))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));

        let key = Key::from_parts("hub3.rejected", vec![Label::new("field", "model")]);
        let metric_value = snapshot
            .get(&CompositeKey::new(MetricKind::Counter, key))
            .expect("metric not found");
        assert_eq!(metric_value, &(None, None, DebugValue::Counter(1)));
    }
}

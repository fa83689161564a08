use afl::fuzz;
use hub3::{
    generate_hub3_data, validate_oib, EncodeMode, EncoderConfig, Hub3Amount, PaymentSlip,
    LINE_COUNT,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rust_decimal::Decimal;

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (text, rand_seed) = split_bytes_once(bytes)?;
    let text = std::str::from_utf8(text).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(text, rng);

    Some(())
}

/// Picks a random slice of `text` on char boundaries.
fn gen_text(text: &str, rng: &mut StdRng) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let start = rng.gen_range(0..chars.len());
    let end = rng.gen_range(start..=chars.len());
    chars[start..end].iter().collect()
}

fn gen_mode(rng: &mut StdRng) -> EncodeMode {
    if rng.gen_bool(0.5) {
        EncodeMode::Truncate
    } else {
        EncodeMode::Strict
    }
}

fn run_fuzz(text: &str, mut rng: StdRng) {
    // must never panic, whatever the shape
    let _ = validate_oib(text);

    let cents: u64 = rng.gen_range(0..=999_999_999_999_999);
    let amount = Hub3Amount::new(Decimal::new(cents as i64, 2))
        .expect("every 15 digit cent value is a valid amount");

    let slip = PaymentSlip::new(amount)
        .payer(
            &gen_text(text, &mut rng),
            &gen_text(text, &mut rng),
            &gen_text(text, &mut rng),
        )
        .recipient(
            &gen_text(text, &mut rng),
            &gen_text(text, &mut rng),
            &gen_text(text, &mut rng),
        )
        .recipient_iban(&gen_text(text, &mut rng))
        .model(&gen_text(text, &mut rng))
        .reference(&gen_text(text, &mut rng))
        .description(&gen_text(text, &mut rng));

    let mode = gen_mode(&mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Slip: {:?}", slip);
        println!("Mode: {:?}", mode);
    }

    let payload = generate_hub3_data(&slip);
    assert_eq!(payload.split('\n').count(), LINE_COUNT);
    assert!(payload.starts_with("HRVHUB30\n"));
    assert_eq!(
        payload.split('\n').nth(2).map(str::to_owned),
        Some(format!("{:015}", cents))
    );

    let encoder = EncoderConfig::new().mode(mode).build();
    match encoder.encode(&slip) {
        Ok(encoded) => assert_eq!(encoded, payload),
        Err(_) => assert_eq!(mode, EncodeMode::Strict),
    }
}

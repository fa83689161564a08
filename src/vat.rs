//! Invoice line arithmetic in exact decimals, rounded to cents.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::amount::{AmountError, Hub3Amount};

/// Croatian PDV (VAT) rates.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum VatRate {
    /// 25 %
    Standard,
    /// 13 %
    Reduced,
    /// 5 %
    SuperReduced,
    /// 0 %
    Exempt,
}

impl VatRate {
    pub fn percentage(self) -> Decimal {
        match self {
            VatRate::Standard => Decimal::from(25),
            VatRate::Reduced => Decimal::from(13),
            VatRate::SuperReduced => Decimal::from(5),
            VatRate::Exempt => Decimal::ZERO,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub vat_rate: VatRate,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineTotals {
    pub net: Decimal,
    pub vat: Decimal,
    pub gross: Decimal,
}

impl LineTotals {
    pub fn checked_add(self, other: LineTotals) -> Result<LineTotals, AmountError> {
        Ok(LineTotals {
            net: add(self.net, other.net)?,
            vat: add(self.vat, other.vat)?,
            gross: add(self.gross, other.gross)?,
        })
    }
}

fn add(a: Decimal, b: Decimal) -> Result<Decimal, AmountError> {
    a.checked_add(b).ok_or(AmountError::Overflow)
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct InvoiceTotals {
    pub total: LineTotals,
    pub by_rate: BTreeMap<VatRate, LineTotals>,
}

impl InvoiceTotals {
    /// The gross total as a slip amount. Fails for credit notes, whose total
    /// is negative.
    pub fn payable(&self) -> Result<Hub3Amount, AmountError> {
        Hub3Amount::new(self.total.gross)
    }
}

/// Rounds to two decimals, half away from zero.
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Fails with [AmountError::Overflow] when a product or sum leaves the
/// `Decimal` range.
pub fn line_totals(line: &InvoiceLine) -> Result<LineTotals, AmountError> {
    let net = line
        .quantity
        .checked_mul(line.unit_price)
        .map(round_to_cents)
        .ok_or(AmountError::Overflow)?;
    let vat = net
        .checked_mul(line.vat_rate.percentage())
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .map(round_to_cents)
        .ok_or(AmountError::Overflow)?;
    Ok(LineTotals {
        net,
        vat,
        gross: add(net, vat)?,
    })
}

/// Sums the rounded line values, so the totals always match what the
/// individual lines show.
pub fn invoice_totals(lines: &[InvoiceLine]) -> Result<InvoiceTotals, AmountError> {
    let mut totals = InvoiceTotals::default();
    for line in lines {
        let line_total = line_totals(line)?;
        totals.total = totals.total.checked_add(line_total)?;
        let by_rate = totals.by_rate.entry(line.vat_rate).or_default();
        *by_rate = by_rate.checked_add(line_total)?;
    }
    Ok(totals)
}

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Currency, Error, LimitPair, Money, Region, RegionalAmount};

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new("[0-9]+").expect("valid digit regex"));

const PLACEHOLDER: &str = "-";

// Only the integer run is kept: "1.000 EUR" yields "1".
fn first_digit_run(text: &str) -> Result<String, Error> {
    DIGITS
        .find(text)
        .map(|m| m.as_str().to_owned())
        .ok_or_else(|| Error::NumericParse(text.to_owned()))
}

pub fn parse_money(text: &str) -> Result<Money, Error> {
    let value = first_digit_run(text)?;
    let currencies = Currency::ALL
        .into_iter()
        .filter(|c| text.contains(c.code()))
        .collect();
    Ok(Money { value, currencies })
}

pub fn parse_regional(text: &str) -> Result<RegionalAmount, Error> {
    let value = first_digit_run(text)?;
    let seknok = Region::ALL
        .into_iter()
        .filter(|r| text.contains(r.code()))
        .collect();
    Ok(RegionalAmount { value, seknok })
}

fn has_any(text: &str, codes: &[&str]) -> bool {
    codes.iter().any(|c| text.contains(c))
}

/// Splits a limit cell such as `"10 EUR | 100 SEK"` into its international and
/// regional parts.
///
/// With two segments the first is always parsed as money and the second as a
/// regional amount, whatever they contain. A single segment is classified by
/// its currency tokens, and is dropped if it has none.
pub fn split_money_sek(text: &str) -> Result<LimitPair, Error> {
    let mut segments = text.split('|').map(str::trim);
    let first = segments.next().unwrap_or_default();
    let second = segments.next();
    if segments.next().is_some() {
        warn!("Ignoring extra segments in limit `{}`", text);
    }

    let is_placeholder = |s: &str| s.is_empty() || s == PLACEHOLDER;
    if is_placeholder(first) || second.map_or(false, is_placeholder) {
        return Ok(LimitPair::default());
    }

    let (money, seknok) = match second {
        Some(second) => (Some(first), Some(second)),
        None if has_any(first, &["EUR", "GBP"]) => (Some(first), None),
        None if has_any(first, &["SEK", "NOK"]) => (None, Some(first)),
        None => (None, None),
    };

    Ok(LimitPair {
        money: money.map(parse_money).transpose()?,
        seknok: seknok.map(parse_regional).transpose()?,
    })
}

//! Parsing and rendering of money amounts.

use rust_decimal::Decimal;

/// Most fractional digits a `Decimal` can carry.
const MAX_FRACTION_DIGITS: i64 = 28;

/// Why a string could not be turned into an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("not a number")]
    Invalid,
    #[error("number outside the representable range")]
    OutOfRange,
}

/// Parses user input into a decimal amount. Surrounding whitespace is ignored
/// and both plain (`12.50`) and scientific (`1e3`) notation are accepted.
/// Digit separators and more than 28 fractional digits are not numbers here;
/// well-formed numbers too large for a `Decimal` are `OutOfRange`.
/// The sign is kept; rejecting non-positive values is the caller's concern.
pub fn parse_amount(input: &str) -> Result<Decimal, AmountError> {
    let trimmed = input.trim();
    let literal = scan_literal(trimmed)?;
    if literal.fraction_digits > MAX_FRACTION_DIGITS {
        return Err(AmountError::Invalid);
    }

    let parsed = match literal.exponent {
        Some(exponent) => Decimal::from_scientific(&format!("{}e{exponent}", literal.mantissa)),
        None => literal.mantissa.parse::<Decimal>(),
    };
    parsed.map_err(|_| AmountError::OutOfRange)
}

/// A syntactically valid number, rewritten as `[-]digits[.digits]`.
struct AmountLiteral {
    mantissa: String,
    exponent: Option<i64>,
    fraction_digits: i64,
}

/// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa
/// digit; `1.` and `.5` are allowed.
fn scan_literal(text: &str) -> Result<AmountLiteral, AmountError> {
    let negative = text.starts_with('-');
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.len() + fraction.len() == 0 || !all_digits(whole) || !all_digits(fraction) {
        return Err(AmountError::Invalid);
    }

    let exponent = match exponent {
        None => None,
        Some(raw) => {
            let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
            if digits.is_empty() || !all_digits(digits) {
                return Err(AmountError::Invalid);
            }
            Some(raw.parse::<i64>().map_err(|_| AmountError::OutOfRange)?)
        }
    };

    let mut mantissa = String::with_capacity(mantissa.len() + 2);
    if negative {
        mantissa.push('-');
    }
    mantissa.push_str(if whole.is_empty() { "0" } else { whole });
    if !fraction.is_empty() {
        mantissa.push('.');
        mantissa.push_str(fraction);
    }

    Ok(AmountLiteral {
        mantissa,
        exponent,
        fraction_digits: (fraction.len() as i64).saturating_sub(exponent.unwrap_or(0)),
    })
}

/// Renders an amount without trailing zeros, keeping one decimal place for
/// whole values (`20` -> `20.0`, `12.50` -> `12.5`).
pub fn format_amount(amount: Decimal) -> String {
    if amount.is_zero() {
        return "0.0".into();
    }
    let normalized = amount.normalize();
    if normalized.scale() == 0 {
        format!("{normalized}.0")
    } else {
        normalized.to_string()
    }
}

/// Renders an amount prefixed with the currency symbol, e.g. `$-20.0`.
pub fn format_currency_value(amount: Decimal, symbol: &str) -> String {
    format!("{symbol}{}", format_amount(amount))
}

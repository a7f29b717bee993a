use std::collections::HashSet;
use std::sync::LazyLock;

use fraction::Fraction;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum QuantityParseError {
    #[error("not a recognizable quantity: {0}")]
    InvalidFormat(String),

    #[error("negative quantities are not allowed")]
    Negative,

    #[error("fraction denominator cannot be zero")]
    ZeroDenominator,
}

/// Quantity words that cannot be turned into a number.
static AMBIGUOUS_QUANTITIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "pinch",
        "a pinch",
        "dash",
        "a dash",
        "to taste",
        "taste",
        "handful",
        "a handful",
        "some",
        "sprinkle",
        "a sprinkle",
    ])
});

/// Check whether a quantity string is ambiguous ("a pinch", "to taste", ...)
/// rather than numeric. The line parser consults this when it finds no
/// leading number; such lines keep an unset quantity and the merge step
/// leaves them unsummed.
pub fn is_ambiguous_quantity(quantity: &str) -> bool {
    let normalized = quantity.trim().to_lowercase();

    if AMBIGUOUS_QUANTITIES.contains(normalized.as_str()) {
        return true;
    }
    if AMBIGUOUS_QUANTITIES
        .iter()
        .any(|keyword| normalized.starts_with(keyword) || normalized.ends_with(keyword))
    {
        return true;
    }

    // Anything without a digit, slash, or dot has no numeric reading.
    !normalized
        .chars()
        .any(|c| c.is_ascii_digit() || c == '/' || c == '.')
}

/// Parse a quantity string into a `Fraction`.
///
/// Accepted formats: whole numbers (`"2"`), decimals (`"0.5"`), pure
/// fractions (`"1/2"`), and mixed numbers (`"1 1/2"`).
pub fn parse_quantity(quantity: &str) -> Result<Fraction, QuantityParseError> {
    let trimmed = quantity.trim();

    // Mixed number: "1 1/2"
    if trimmed.contains(' ') && trimmed.contains('/') {
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(QuantityParseError::InvalidFormat(trimmed.to_string()));
        }
        let whole: i64 = parts[0]
            .parse()
            .map_err(|_| QuantityParseError::InvalidFormat(trimmed.to_string()))?;
        if whole < 0 {
            return Err(QuantityParseError::Negative);
        }
        let fractional = parse_pure_fraction(parts[1])?;
        return Ok(Fraction::new(whole as u64, 1u64) + fractional);
    }

    // Pure fraction: "1/2"
    if trimmed.contains('/') {
        return parse_pure_fraction(trimmed);
    }

    // Decimal or whole number
    let value: f64 = trimmed
        .parse()
        .map_err(|_| QuantityParseError::InvalidFormat(trimmed.to_string()))?;
    if value < 0.0 {
        return Err(QuantityParseError::Negative);
    }
    Ok(Fraction::from(value))
}

fn parse_pure_fraction(text: &str) -> Result<Fraction, QuantityParseError> {
    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 2 {
        return Err(QuantityParseError::InvalidFormat(text.to_string()));
    }
    let numerator: i64 = parts[0]
        .parse()
        .map_err(|_| QuantityParseError::InvalidFormat(text.to_string()))?;
    let denominator: i64 = parts[1]
        .parse()
        .map_err(|_| QuantityParseError::InvalidFormat(text.to_string()))?;
    if numerator < 0 || denominator < 0 {
        return Err(QuantityParseError::Negative);
    }
    if denominator == 0 {
        return Err(QuantityParseError::ZeroDenominator);
    }
    Ok(Fraction::new(numerator as u64, denominator as u64))
}

/// Lossy conversion for the float-based data model.
pub fn fraction_to_f64(quantity: &Fraction) -> f64 {
    match (quantity.numer(), quantity.denom()) {
        (Some(n), Some(d)) if *d != 0 => *n as f64 / *d as f64,
        _ => 0.0,
    }
}

/// Format a `Fraction` the way a cook would write it: `3/2` becomes
/// `"1 1/2"`, `4/2` becomes `"2"`, `1/2` stays `"1/2"`.
pub fn format_quantity(quantity: Fraction) -> String {
    let (Some(&numer), Some(&denom)) = (quantity.numer(), quantity.denom()) else {
        return String::new();
    };

    if denom == 1 {
        return format!("{}", numer);
    }

    if numer >= denom {
        let whole = numer / denom;
        let remainder = numer % denom;
        if remainder == 0 {
            format!("{}", whole)
        } else {
            format!("{} {}/{}", whole, remainder, denom)
        }
    } else {
        format!("{}/{}", numer, denom)
    }
}

/// Round a quantity to a practical cooking value: quarters/thirds/halves
/// below one, halves up to ten, whole numbers above that.
pub fn round_to_practical_value(quantity: Fraction) -> Fraction {
    let value = fraction_to_f64(&quantity);

    if value < 1.0 {
        let quarters = (value * 4.0).round();
        let thirds = (value * 3.0).round();
        let halves = (value * 2.0).round();

        let diff_quarters = (value - quarters / 4.0).abs();
        let diff_thirds = (value - thirds / 3.0).abs();
        let diff_halves = (value - halves / 2.0).abs();

        if diff_quarters <= diff_thirds && diff_quarters <= diff_halves {
            Fraction::new(quarters as u64, 4u64)
        } else if diff_thirds <= diff_halves {
            Fraction::new(thirds as u64, 3u64)
        } else {
            Fraction::new(halves as u64, 2u64)
        }
    } else if value < 10.0 {
        Fraction::new((value * 2.0).round() as u64, 2u64)
    } else {
        Fraction::new(value.round() as u64, 1u64)
    }
}

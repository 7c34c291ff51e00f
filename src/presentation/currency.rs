//! Currency formatting for display.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// The only supported display locale.
pub const SUPPORTED_LOCALE: &str = "fr-CA";

/// The only supported display currency.
pub const SUPPORTED_CURRENCY: &str = "CAD";

const NO_BREAK_SPACE: char = '\u{a0}';

/// Formats whole-dollar amounts for the display locale.
///
/// Amounts render with no fraction digits, a no-break space between digit
/// groups, and the symbol after the number: `10 000 $`.
///
/// # Example
///
/// ```
/// use celi_engine::presentation::CurrencyFormat;
/// use rust_decimal::Decimal;
///
/// let format = CurrencyFormat::from_tags("fr-CA", "CAD").unwrap();
/// assert_eq!(format.format(Decimal::from(102000)), "102\u{a0}000\u{a0}$");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    locale: String,
    currency: String,
}

impl CurrencyFormat {
    /// Creates a format for a locale tag and ISO currency code.
    ///
    /// Returns `UnsupportedDisplayFormat` for anything other than `fr-CA`
    /// with `CAD`. Tags are matched case-insensitively.
    pub fn from_tags(locale: &str, currency: &str) -> EngineResult<Self> {
        if locale.eq_ignore_ascii_case(SUPPORTED_LOCALE)
            && currency.eq_ignore_ascii_case(SUPPORTED_CURRENCY)
        {
            Ok(Self::default())
        } else {
            Err(EngineError::UnsupportedDisplayFormat {
                locale: locale.to_string(),
                currency: currency.to_string(),
            })
        }
    }

    /// The locale tag.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Formats an amount, rounding half away from zero to whole dollars.
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let digits = rounded.abs().trunc().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            grouped.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(NO_BREAK_SPACE);
            }
            grouped.push(ch);
        }
        grouped.push(NO_BREAK_SPACE);
        grouped.push('$');
        grouped
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            locale: SUPPORTED_LOCALE.to_string(),
            currency: SUPPORTED_CURRENCY.to_string(),
        }
    }
}

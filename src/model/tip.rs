use super::amount::parse_amount;
use super::currency::CurrencyFormat;

/// The effective inputs to a tip calculation, after text parsing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TipInputs {
    /// Bill total.
    pub total: f64,
    /// Tip as a percentage of the total; not limited to 0–100.
    pub percentage: f64,
    /// Round the tip up to the next whole currency unit.
    pub round_up: bool,
}

impl TipInputs {
    /// Builds inputs from raw field text; unparseable text counts as zero.
    pub fn parse(bill: &str, tip: &str, round_up: bool) -> Self {
        Self {
            total: parse_amount(bill),
            percentage: parse_amount(tip),
            round_up,
        }
    }

    /// The numeric tip for these inputs.
    pub fn tip_amount(&self) -> f64 {
        tip_amount(self.percentage, self.total, self.round_up)
    }

    /// The tip rendered with `format`.
    pub fn format_tip(&self, format: &CurrencyFormat) -> String {
        format.format(self.tip_amount())
    }
}

/// Computes `total * percentage / 100`, taking the ceiling when `is_rounded`.
pub fn tip_amount(percentage: f64, total: f64, is_rounded: bool) -> f64 {
    let tip = total * percentage / 100.0;
    if is_rounded { tip.ceil() } else { tip }
}

/// Computes the tip and formats it in the process locale's currency.
pub fn compute_tip(percentage: f64, total: f64, is_rounded: bool) -> String {
    compute_tip_with(&CurrencyFormat::active(), percentage, total, is_rounded)
}

/// Computes the tip and formats it with an explicit currency format.
pub fn compute_tip_with(
    format: &CurrencyFormat,
    percentage: f64,
    total: f64,
    is_rounded: bool,
) -> String {
    format.format(tip_amount(percentage, total, is_rounded))
}

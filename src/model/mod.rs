mod amount;
mod currency;
mod tip;

pub use amount::{parse_amount, parse_optional_amount};
pub use currency::CurrencyFormat;
pub use tip::{TipInputs, compute_tip, compute_tip_with, tip_amount};

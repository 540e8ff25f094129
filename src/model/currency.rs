use std::sync::LazyLock;

/// Environment variables consulted for the monetary locale, highest
/// precedence first.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MONETARY", "LANG"];

/// Currency rendering rules for one locale.
///
/// Values are rounded half-to-even to [`fraction_digits`](Self::fraction_digits)
/// places, integer digits are grouped in threes, and a negative sign is placed
/// in front of the whole string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    locale: &'static str,
    prefix: &'static str,
    suffix: &'static str,
    grouping: char,
    decimal: char,
    fraction_digits: usize,
}

const fn prefixed(
    locale: &'static str,
    prefix: &'static str,
    grouping: char,
    decimal: char,
    fraction_digits: usize,
) -> CurrencyFormat {
    CurrencyFormat {
        locale,
        prefix,
        suffix: "",
        grouping,
        decimal,
        fraction_digits,
    }
}

const fn suffixed(
    locale: &'static str,
    suffix: &'static str,
    grouping: char,
    decimal: char,
) -> CurrencyFormat {
    CurrencyFormat {
        locale,
        prefix: "",
        suffix,
        grouping,
        decimal,
        fraction_digits: 2,
    }
}

static LOCALES: &[CurrencyFormat] = &[
    prefixed("en_US", "$", ',', '.', 2),
    prefixed("en_CA", "$", ',', '.', 2),
    prefixed("en_AU", "$", ',', '.', 2),
    prefixed("en_GB", "£", ',', '.', 2),
    prefixed("en_IE", "€", ',', '.', 2),
    suffixed("de_DE", "\u{a0}€", '.', ','),
    suffixed("fr_FR", "\u{a0}€", '\u{202f}', ','),
    suffixed("it_IT", "\u{a0}€", '.', ','),
    prefixed("nl_NL", "€\u{a0}", '.', ',', 2),
    prefixed("pt_BR", "R$\u{a0}", '.', ',', 2),
    prefixed("de_CH", "CHF\u{a0}", '\u{2019}', '.', 2),
    prefixed("ja_JP", "￥", ',', '.', 0),
];

static ACTIVE: LazyLock<CurrencyFormat> =
    LazyLock::new(|| CurrencyFormat::from_locale_env(|name| std::env::var(name).ok()));

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::en_us()
    }
}

impl CurrencyFormat {
    /// US dollars: `$1,234.56`.
    pub fn en_us() -> Self {
        LOCALES[0]
    }

    /// Looks up the format for a locale tag.
    ///
    /// Accepts POSIX tags with codeset or modifier (`de_DE.UTF-8`,
    /// `fr_FR@euro`) and BCP-47 tags (`en-US`). Returns `None` for locales
    /// without a built-in entry, including `C` and `POSIX`.
    pub fn for_locale(tag: &str) -> Option<Self> {
        let base = tag.split(['.', '@']).next().unwrap_or_default();
        let normalized = base.replace('-', "_");
        LOCALES
            .iter()
            .find(|format| format.locale.eq_ignore_ascii_case(&normalized))
            .copied()
    }

    /// Resolves the format from locale environment variables.
    ///
    /// The first non-empty of `LC_ALL`, `LC_MONETARY`, `LANG` decides; an
    /// unknown or missing locale falls back to `en_US`.
    pub fn from_locale_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::env_locale(lookup)
            .and_then(|tag| Self::for_locale(&tag))
            .unwrap_or_else(Self::en_us)
    }

    /// Returns the first non-empty of `LC_ALL`, `LC_MONETARY`, `LANG`.
    pub fn env_locale(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        LOCALE_VARS
            .iter()
            .filter_map(|&name| lookup(name))
            .find(|value| !value.is_empty())
    }

    /// The format for the process locale, resolved once.
    pub fn active() -> Self {
        *ACTIVE
    }

    /// Returns the locale tag this format belongs to, e.g. `en_US`.
    pub fn locale(&self) -> &'static str {
        self.locale
    }

    /// Returns the number of digits shown after the decimal separator.
    pub fn fraction_digits(&self) -> usize {
        self.fraction_digits
    }

    /// Renders `value` as a currency string.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }

        let mut out = String::new();
        if value.is_infinite() {
            if value < 0.0 {
                out.push('-');
            }
            out.push_str(self.prefix);
            out.push('∞');
            out.push_str(self.suffix);
            return out;
        }

        let fixed = format!("{:.*}", self.fraction_digits, value.abs());
        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        // Negative values that round to zero print unsigned.
        let nonzero = fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
        if value.is_sign_negative() && nonzero {
            out.push('-');
        }
        out.push_str(self.prefix);
        push_grouped(&mut out, whole, self.grouping);
        if let Some(fraction) = fraction {
            out.push(self.decimal);
            out.push_str(fraction);
        }
        out.push_str(self.suffix);
        out
    }
}

fn push_grouped(out: &mut String, digits: &str, separator: char) {
    let len = digits.len();
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
}

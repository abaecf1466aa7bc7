use serde::{Deserialize, Serialize};

/// Magnitude scaling applied to numeric cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    #[default]
    Default,
    Thousand,
    Million,
    Billion,
}

impl ValueFormat {
    pub const ALL: [ValueFormat; 4] = [
        ValueFormat::Default,
        ValueFormat::Thousand,
        ValueFormat::Million,
        ValueFormat::Billion,
    ];

    /// Parse a persisted key. Unknown keys fall back to `Default`.
    pub fn from_key(key: &str) -> Self {
        Self::parse_key(key).unwrap_or_default()
    }

    /// Strict variant of `from_key`: `None` for anything unrecognized.
    pub fn parse_key(key: &str) -> Option<Self> {
        match key {
            "default" => Some(ValueFormat::Default),
            "thousand" => Some(ValueFormat::Thousand),
            "million" => Some(ValueFormat::Million),
            "billion" => Some(ValueFormat::Billion),
            _ => None,
        }
    }

    /// Key written back to the host's settings object
    pub fn key(&self) -> &'static str {
        match self {
            ValueFormat::Default => "default",
            ValueFormat::Thousand => "thousand",
            ValueFormat::Million => "million",
            ValueFormat::Billion => "billion",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ValueFormat::Default => "Default",
            ValueFormat::Thousand => "Thousand",
            ValueFormat::Million => "Million",
            ValueFormat::Billion => "Billion",
        }
    }

    /// Column header annotation, `None` when no scaling is active.
    pub fn span_label(&self) -> Option<&'static str> {
        match self {
            ValueFormat::Default => None,
            ValueFormat::Thousand => Some("In Thousand"),
            ValueFormat::Million => Some("In Million"),
            ValueFormat::Billion => Some("In Billion"),
        }
    }

    /// The number -> display string transform for this format
    pub fn formatter(&self) -> fn(f64) -> String {
        match self {
            ValueFormat::Default => format_default,
            ValueFormat::Thousand => format_thousand,
            ValueFormat::Million => format_million,
            ValueFormat::Billion => format_billion,
        }
    }

    pub fn format_value(&self, value: f64) -> String {
        (self.formatter())(value)
    }
}

impl std::fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One entry of the format selector
#[derive(Debug, Clone, Copy)]
pub struct FormatOption {
    pub value: ValueFormat,
    pub label: &'static str,
    pub format_value: fn(f64) -> String,
    pub span_label: Option<&'static str>,
}

impl FormatOption {
    pub fn key(&self) -> &'static str {
        self.value.key()
    }
}

pub const FORMAT_OPTIONS: [FormatOption; 4] = [
    FormatOption {
        value: ValueFormat::Default,
        label: "Default",
        format_value: format_default,
        span_label: None,
    },
    FormatOption {
        value: ValueFormat::Thousand,
        label: "Thousand",
        format_value: format_thousand,
        span_label: Some("In Thousand"),
    },
    FormatOption {
        value: ValueFormat::Million,
        label: "Million",
        format_value: format_million,
        span_label: Some("In Million"),
    },
    FormatOption {
        value: ValueFormat::Billion,
        label: "Billion",
        format_value: format_billion,
        span_label: Some("In Billion"),
    },
];

/// Look up the selector entry for a format
pub fn format_option(format: ValueFormat) -> &'static FormatOption {
    match format {
        ValueFormat::Default => &FORMAT_OPTIONS[0],
        ValueFormat::Thousand => &FORMAT_OPTIONS[1],
        ValueFormat::Million => &FORMAT_OPTIONS[2],
        ValueFormat::Billion => &FORMAT_OPTIONS[3],
    }
}

fn format_default(value: f64) -> String {
    number_to_string(value)
}

fn format_thousand(value: f64) -> String {
    format!("{}K", to_fixed(value / 1e3, 2))
}

fn format_million(value: f64) -> String {
    format!("{}M", to_fixed(value / 1e6, 2))
}

fn format_billion(value: f64) -> String {
    format!("{}B", to_fixed(value / 1e9, 2))
}

/// Shortest round-trip rendering of a number, switching to exponent
/// notation outside [1e-6, 1e21).
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers -0.0 as well
        return "0".to_string();
    }

    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }

    format!("{}", value)
}

/// Fixed-point rendering with `digits` decimals. Exact ties round away
/// from zero; magnitudes of 1e21 and above fall back to `number_to_string`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return number_to_string(value);
    }
    let value = if value == 0.0 { 0.0 } else { value };

    let scale = 10f64.powi(digits as i32);
    let scaled = value.abs() * scale;
    // Rust's formatter rounds ties to even
    if scaled < 4_503_599_627_370_496.0 && is_exact_tie(value.abs(), digits) {
        let sign = if value < 0.0 { "-" } else { "" };
        let rounded = (scaled.floor() + 1.0) / scale;
        return format!("{}{:.*}", sign, digits, rounded);
    }

    format!("{:.*}", digits, value)
}

/// True when the exact binary value of `abs` sits halfway between two
/// `digits`-decimal neighbours. The product `abs * 10^digits` can round onto
/// `.5` on its own, so the decision is made on the full decimal expansion.
fn is_exact_tie(abs: f64, digits: usize) -> bool {
    // An f64 has at most 1074 fractional decimal digits
    let exact = format!("{:.1100}", abs);
    let Some((_, fraction)) = exact.split_once('.') else {
        return false;
    };
    let mut tail = fraction.bytes().skip(digits);
    tail.next() == Some(b'5') && tail.all(|b| b == b'0')
}

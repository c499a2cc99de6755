/// Parsed form of a free-text IE or parameter range.
///
/// Accepted spellings:
/// - `lo..hi` (ASN.1 style, inclusive),
/// - `(lo, hi)` or `[lo, hi]` (measurement style, inclusive),
/// - `a | b | c` (enumeration list).
///
/// Anything else is [`RangeSpec::Unparsed`] and admits every value.
///
/// # Examples
/// ```
/// use gppcheck_core::compliance::RangeSpec;
///
/// assert_eq!(RangeSpec::parse("0..63").admits_number(64.0), Some(false));
/// assert_eq!(RangeSpec::parse("(-156, -31)").admits_number(-85.0), Some(true));
/// assert_eq!(RangeSpec::parse("see TS 38.331").admits_number(5.0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RangeSpec {
    Interval { low: f64, high: f64 },
    Enumeration(Vec<String>),
    Unparsed,
}

impl RangeSpec {
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Some(interval) = parse_dotted(text).or_else(|| parse_bracketed(text)) {
            return interval;
        }
        if text.contains('|') {
            let labels: Vec<String> = text
                .split('|')
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .collect();
            if !labels.is_empty() {
                return RangeSpec::Enumeration(labels);
            }
        }
        RangeSpec::Unparsed
    }

    /// `None` when the range does not describe numbers.
    pub fn admits_number(&self, value: f64) -> Option<bool> {
        match self {
            RangeSpec::Interval { low, high } => Some(value >= *low && value <= *high),
            _ => None,
        }
    }

    /// `None` when the range does not describe labels.
    pub fn admits_label(&self, value: &str) -> Option<bool> {
        match self {
            RangeSpec::Enumeration(labels) => Some(labels.iter().any(|label| label == value)),
            _ => None,
        }
    }
}

fn parse_dotted(text: &str) -> Option<RangeSpec> {
    let (low, high) = text.split_once("..")?;
    interval(low, high)
}

fn parse_bracketed(text: &str) -> Option<RangeSpec> {
    let inner = text
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .or_else(|| text.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')))?;
    let (low, high) = inner.split_once(',')?;
    interval(low, high)
}

fn interval(low: &str, high: &str) -> Option<RangeSpec> {
    let low: f64 = low.trim().parse().ok()?;
    let high: f64 = high.trim().parse().ok()?;
    if low > high {
        return None;
    }
    Some(RangeSpec::Interval { low, high })
}

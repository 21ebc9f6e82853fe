//! 显示格式
//!
//! 金额保留两位小数，时间使用本地时区 (es-EC 风格 `dd/mm/yyyy, HH:MM:SS`)。

use chrono::{DateTime, Local, TimeZone};
use rust_decimal::Decimal;
use shared::Timestamp;

/// Formatting helpers shared by every renderer
#[derive(Debug, Clone)]
pub struct Formatter {
    currency_symbol: String,
}

impl Formatter {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    /// `12.5` → `$12.50`
    pub fn currency(&self, amount: Decimal) -> String {
        format!("{}{:.2}", self.currency_symbol, amount.round_dp(2))
    }

    /// Local wall-clock time of day, `HH:MM`
    pub fn time(&self, timestamp: Timestamp) -> String {
        match local(timestamp) {
            Some(dt) => dt.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        }
    }

    /// Elapsed time since `since`, relative to `now`
    ///
    /// `< 1 min`, `45 min`, `1h 05m`
    pub fn elapsed(&self, since: Timestamp, now: Timestamp) -> String {
        let minutes = (now - since).max(0) / 60_000;
        match minutes {
            0 => "< 1 min".to_string(),
            m if m < 60 => format!("{m} min"),
            m => format!("{}h {:02}m", m / 60, m % 60),
        }
    }

    /// Full local date-time for the header clock
    pub fn date_time(&self, now: DateTime<Local>) -> String {
        now.format("%d/%m/%Y, %H:%M:%S").to_string()
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new("$")
    }
}

fn local(timestamp: Timestamp) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(timestamp).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        let fmt = Formatter::default();
        assert_eq!(fmt.currency(Decimal::new(125, 1)), "$12.50");
        assert_eq!(fmt.currency(Decimal::new(3, 0)), "$3.00");
        assert_eq!(Formatter::new("USD ").currency(Decimal::new(1999, 3)), "USD 2.00");
    }

    #[test]
    fn test_elapsed() {
        let fmt = Formatter::default();
        let start = 1_700_000_000_000;
        assert_eq!(fmt.elapsed(start, start + 30_000), "< 1 min");
        assert_eq!(fmt.elapsed(start, start + 45 * 60_000), "45 min");
        assert_eq!(fmt.elapsed(start, start + 65 * 60_000), "1h 05m");
        // Clock skew between contexts never shows negative time
        assert_eq!(fmt.elapsed(start, start - 5_000), "< 1 min");
    }

    #[test]
    fn test_time_shape() {
        let fmt = Formatter::default();
        let text = fmt.time(1_700_000_000_000);
        assert_eq!(text.len(), 5);
        assert_eq!(&text[2..3], ":");
    }

    #[test]
    fn test_date_time() {
        let fmt = Formatter::default();
        let dt = Local.with_ymd_and_hms(2026, 10, 17, 9, 5, 3).unwrap();
        assert_eq!(fmt.date_time(dt), "17/10/2026, 09:05:03");
    }
}

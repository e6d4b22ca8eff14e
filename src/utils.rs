use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime};

use crate::constants::WIRE_DATE_FORMAT;

/// Parse a strict `YYYY-MM-DD` date, the only format the backend accepts.
pub fn parse_wire_date(value: &str) -> Result<Date, String> {
    Date::parse(value.trim(), WIRE_DATE_FORMAT)
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", value))
}

pub fn format_wire_date(date: Date) -> String {
    // The format description is infallible for a valid Date.
    date.format(WIRE_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// RFC 3339 timestamp for `OrderData::payment_date`.
pub fn current_timestamp() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339)
        .unwrap_or_else(|_| now.unix_timestamp().to_string())
}

/// Thousands-separated rendering for display, e.g. `12,500`.
pub fn format_currency(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{}{}", sign, out)
}

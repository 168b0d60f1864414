//! Data parsing helpers.
//!
//! Holiday tables are embedded as ISO 8601 strings; these helpers split them
//! into numeric components without validating calendar ranges (that is the
//! job of the date type that consumes them).

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Surrounding whitespace is ignored.  Anything after the day component,
/// including a time-of-day, makes the string invalid.
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return None;
    }
    if ![y, m, d]
        .iter()
        .all(|p| p.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    Some((y.parse().ok()?, m.parse().ok()?, d.parse().ok()?))
}

use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse "YYYY-MM" into (year, month).
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let d = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()?;
    Some((d.year(), d.month()))
}

pub fn first_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// Inclusive date range covered by a period expression:
/// `YYYY-MM-DD`, `YYYY-MM`, `YYYY`.
pub fn range_from_period(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Some((y, m)) = parse_month(p)
        && let (Some(first), Some(last)) = (first_day_of_month(y, m), last_day_of_month(y, m))
    {
        return Ok((first, last));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}

/// `A:B` spans from the start of A to the end of B; anything else is a
/// single period.
pub fn resolve_range(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    if let Some((start, end)) = p.split_once(':') {
        let (from, _) = range_from_period(start)?;
        let (_, to) = range_from_period(end)?;
        if from > to {
            return Err(format!("Invalid range: {} is after {}", start, end));
        }
        return Ok((from, to));
    }
    range_from_period(p)
}

pub fn current_month_range() -> Result<(NaiveDate, NaiveDate), String> {
    let t = today();
    range_from_period(&format!("{:04}-{:02}", t.year(), t.month()))
}

//! Age calculation.

use chrono::{Local, NaiveDate};

use super::{RiskError, RiskResult};

/// Whole years elapsed between `birth_date` and `today`.
///
/// A birthday not yet reached in `today`'s year does not count. A 29 February
/// birthday is reached on 1 March in non-leap years.
pub fn age_on(birth_date: Option<NaiveDate>, today: NaiveDate) -> RiskResult<u32> {
    let birth_date =
        birth_date.ok_or_else(|| RiskError::InvalidDate("birth date is missing".into()))?;

    today.years_since(birth_date).ok_or_else(|| {
        RiskError::InvalidDate(format!(
            "birth date {} is after {}",
            birth_date, today
        ))
    })
}

/// Whole years elapsed between `birth_date` and the current local date.
pub fn age_today(birth_date: Option<NaiveDate>) -> RiskResult<u32> {
    age_on(birth_date, Local::now().date_naive())
}

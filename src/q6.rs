use crate::data::{Catalog, Title};
use chrono::{Months, NaiveDate};
use tracing::debug;

/// Titles added on or after `today` minus `years`. Rows without a readable
/// `date_added` are left out.
pub fn recent_additions(db: &Catalog, today: NaiveDate, years: u32) -> Vec<Title<'_>> {
    let cutoff = today
        .checked_sub_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MIN);

    let mut unparsable = 0;
    let res = db
        .titles
        .rows()
        .filter(|t| match t.added_on() {
            Ok(added) => added.is_some_and(|d| d >= cutoff),
            Err(issue) => {
                debug!(%issue, "excluded from recent_additions");
                unparsable += 1;
                false
            }
        })
        .collect();

    debug!(%cutoff, unparsable, "recent_additions");
    res
}

// SELECT *
// FROM netflix
// WHERE TO_DATE(date_added, 'Month DD, YYYY') >= CURRENT_DATE - INTERVAL '5 years';

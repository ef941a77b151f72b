use crate::data::{Catalog, Title, tokens};
use crate::error::{Result, require_text};
use chrono::{Datelike, NaiveDate};

/// Titles featuring `name` released within the last `within_years` years.
pub fn actor_appearances<'a>(
    db: &'a Catalog,
    name: &str,
    today: NaiveDate,
    within_years: u32,
) -> Result<Vec<Title<'a>>> {
    require_text("name", name)?;
    let name = name.trim();
    let since = i64::from(today.year()) - i64::from(within_years);

    Ok(db
        .titles
        .rows()
        .filter(|t| i64::from(t.release_year) > since)
        .filter(|t| tokens(t.cast).any(|actor| actor == name))
        .collect())
}

// SELECT *
// FROM netflix
// WHERE casts LIKE '%Salman Khan%'
//   AND release_year > EXTRACT(YEAR FROM CURRENT_DATE) - 10;

use crate::data::{Catalog, tokens};
use crate::error::{Result, require_count, require_text};
use crate::tally::Tally;

/// Actors appearing most often in titles produced solely in `country`.
pub fn top_actors_by_country<'a>(
    db: &'a Catalog,
    country: &str,
    n: usize,
) -> Result<Vec<(&'a str, usize)>> {
    require_text("country", country)?;
    require_count("n", n)?;
    let country = country.trim();

    let tally: Tally<&str> = db
        .titles
        .rows()
        .filter(|t| t.country == Some(country))
        .flat_map(|t| tokens(t.cast))
        .collect();

    Ok(tally.top(n))
}

// SELECT UNNEST(STRING_TO_ARRAY(casts, ',')) AS actor,
//        COUNT(*)
// FROM netflix
// WHERE country = 'India'
// GROUP BY actor
// ORDER BY COUNT(*) DESC
// LIMIT 10;

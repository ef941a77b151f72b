use crate::data::{Catalog, tokens};
use crate::error::{Result, require_count};
use crate::tally::Tally;

pub fn top_countries(db: &Catalog, n: usize) -> Result<Vec<(&str, usize)>> {
    require_count("n", n)?;

    let tally: Tally<&str> = db
        .titles
        .country
        .iter()
        .flat_map(|country| tokens(country.as_deref()))
        .collect();

    Ok(tally.top(n))
}

// SELECT UNNEST(STRING_TO_ARRAY(country, ',')) AS new_country,
//        COUNT(show_id) AS total_content
// FROM netflix
// GROUP BY 1
// ORDER BY 2 DESC
// LIMIT 5;

use crate::data::Catalog;
use crate::error::{Result, require_count, require_text};
use crate::tally::Tally;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearShare {
    pub year: i32,
    pub count: usize,
    /// Percentage of the country's titles, rounded to two decimals.
    pub share: f64,
}

/// Release years ranked by their share of one country's titles.
///
/// A title belongs to the country when its whole `country` field equals it,
/// so co-productions are not counted.
pub fn top_years_by_share(db: &Catalog, country: &str, n: usize) -> Result<Vec<YearShare>> {
    require_text("country", country)?;
    require_count("n", n)?;
    let country = country.trim();

    let tally: Tally<i32> = db
        .titles
        .rows()
        .filter(|t| t.country == Some(country))
        .map(|t| t.release_year)
        .collect();

    let total = tally.total();
    Ok(tally
        .top(n)
        .into_iter()
        .map(|(year, count)| YearShare {
            year,
            count,
            share: round2(count as f64 / total as f64 * 100.0),
        })
        .collect())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// SELECT country,
//        release_year,
//        COUNT(show_id) AS total_release,
//        ROUND(
//            COUNT(show_id)::numeric /
//            (SELECT COUNT(show_id) FROM netflix WHERE country = 'India')::numeric * 100, 2
//        ) AS avg_release
// FROM netflix
// WHERE country = 'India'
// GROUP BY country, release_year
// ORDER BY avg_release DESC
// LIMIT 5;

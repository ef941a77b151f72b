use crate::data::{Catalog, Title, tokens};
use crate::error::{Result, require_text};

/// Titles where `name` is one of the listed directors, matched exactly.
pub fn by_director<'a>(db: &'a Catalog, name: &str) -> Result<Vec<Title<'a>>> {
    require_text("name", name)?;
    let name = name.trim();

    Ok(db
        .titles
        .rows()
        .filter(|t| tokens(t.director).any(|d| d == name))
        .collect())
}

// SELECT *
// FROM (
//     SELECT *, UNNEST(STRING_TO_ARRAY(director, ',')) AS director_name
//     FROM netflix
// ) AS t
// WHERE director_name = 'Rajiv Chilaka';

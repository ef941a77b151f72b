use crate::data::{Catalog, tokens};
use crate::tally::Tally;

pub fn count_by_genre(db: &Catalog) -> Vec<(&str, usize)> {
    db.titles
        .listed_in
        .iter()
        .flat_map(|genres| tokens(genres.as_deref()))
        .collect::<Tally<&str>>()
        .ranked()
}

// SELECT UNNEST(STRING_TO_ARRAY(listed_in, ',')) AS genre,
//        COUNT(*) AS total_content
// FROM netflix
// GROUP BY 1;

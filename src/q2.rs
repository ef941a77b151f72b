use crate::data::{Catalog, Kind};
use crate::tally::Tally;
use rustc_hash::FxHashMap as HashMap;

/// Most frequent rating per type. Ties go to the rating seen first.
pub fn most_common_rating_by_type(db: &Catalog) -> Vec<(Kind, &str, usize)> {
    let mut kinds: Vec<Kind> = Vec::new();
    let mut by_kind: HashMap<Kind, Tally<&str>> = HashMap::default();

    for t in db.titles.rows() {
        let Some(rating) = t.rating else {
            continue;
        };
        by_kind
            .entry(t.kind)
            .or_insert_with(|| {
                kinds.push(t.kind);
                Tally::new()
            })
            .add(rating);
    }

    kinds
        .into_iter()
        .filter_map(|kind| {
            let tally = by_kind.remove(&kind)?;
            let (rating, count) = tally.top(1).into_iter().next()?;
            Some((kind, rating, count))
        })
        .collect()
}

// SELECT type, rating
// FROM (
//     SELECT type,
//            rating,
//            COUNT(*),
//            RANK() OVER (PARTITION BY type ORDER BY COUNT(*) DESC) AS ranking
//     FROM netflix
//     GROUP BY 1, 2
// ) AS t1
// WHERE ranking = 1;

use crate::data::{Catalog, Kind, Title};
use tracing::debug;

/// TV shows with strictly more than `min_seasons` seasons.
pub fn long_running_shows(db: &Catalog, min_seasons: u32) -> Vec<(Title<'_>, u32)> {
    let mut skipped = 0;
    let res = db
        .titles
        .rows()
        .filter(|t| t.kind == Kind::TvShow)
        .filter_map(|t| match t.duration_value() {
            Ok(seasons) => (seasons > min_seasons).then_some((t, seasons)),
            Err(issue) => {
                debug!(%issue, "excluded from long_running_shows");
                skipped += 1;
                None
            }
        })
        .collect();

    debug!(skipped, "long_running_shows");
    res
}

// SELECT *
// FROM netflix
// WHERE type = 'TV Show'
//   AND SPLIT_PART(duration, ' ', 1)::INT > 5;

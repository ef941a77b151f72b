use crate::data::{Catalog, Kind, Title};
use tracing::debug;

/// The movie with the largest duration in minutes. Movies whose duration has
/// no numeric prefix are left out; the first of equal lengths wins.
pub fn longest_movie(db: &Catalog) -> Option<(Title<'_>, u32)> {
    let mut skipped = 0;
    let mut res: Option<(Title<'_>, u32)> = None;

    for t in db.titles.rows().filter(|t| t.kind == Kind::Movie) {
        match t.duration_value() {
            Ok(minutes) => {
                if res.is_none_or(|(_, longest)| minutes > longest) {
                    res = Some((t, minutes));
                }
            }
            Err(issue) => {
                debug!(%issue, "excluded from longest_movie");
                skipped += 1;
            }
        }
    }

    debug!(skipped, "longest_movie");
    res
}

// SELECT *
// FROM netflix
// WHERE type = 'Movie'
// ORDER BY SPLIT_PART(duration, ' ', 1)::INT DESC;

use crate::data::{Catalog, Title};

const DOCUMENTARIES: &str = "Documentaries";

pub fn documentaries(db: &Catalog) -> Vec<Title<'_>> {
    db.titles
        .rows()
        .filter(|t| t.listed_in.is_some_and(|g| g.trim_end().ends_with(DOCUMENTARIES)))
        .collect()
}

// SELECT *
// FROM netflix
// WHERE listed_in LIKE '%Documentaries';

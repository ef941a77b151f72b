use crate::data::{Catalog, Title};

pub fn missing_director(db: &Catalog) -> Vec<Title<'_>> {
    db.titles.rows().filter(|t| t.director.is_none()).collect()
}

// SELECT *
// FROM netflix
// WHERE director IS NULL;

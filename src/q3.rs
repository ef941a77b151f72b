use crate::data::{Catalog, Title};

pub fn by_release_year(db: &Catalog, year: i32) -> Vec<Title<'_>> {
    db.titles
        .rows()
        .filter(|t| t.release_year == year)
        .collect()
}

// SELECT *
// FROM netflix
// WHERE release_year = 2020;

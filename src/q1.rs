use crate::data::{Catalog, Kind};
use crate::error::Result;
use polars::prelude::*;
use std::time::Instant;
use tracing::debug;

pub fn count_by_type(db: &Catalog) -> Result<Vec<(Kind, usize)>> {
    let start = Instant::now();

    let counts = db
        .frame
        .clone()
        .lazy()
        .group_by_stable([col("type")])
        .agg([len().alias("count")])
        .collect()?;

    let count = counts.column("count")?.cast(&DataType::UInt64)?;
    let res = counts
        .column("type")?
        .str()?
        .into_iter()
        .zip(count.u64()?)
        .filter_map(|(kind, count)| Some((Kind::from_label(kind?)?, count? as usize)))
        .collect();

    debug!(elapsed = ?start.elapsed(), "count_by_type");
    Ok(res)
}

// SELECT type, COUNT(*) AS total_content
// FROM netflix
// GROUP BY type;

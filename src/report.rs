//! Turns query results into frames for printing.

use crate::data::{Kind, LoadReport, Title};
use crate::error::Result;
use crate::q10::YearShare;
use crate::q15::Label;
use polars::prelude::*;

pub fn titles(rows: &[Title<'_>]) -> Result<DataFrame> {
    let frame = df!(
        "show_id" => rows.iter().map(|t| t.show_id).collect::<Vec<_>>(),
        "type" => rows.iter().map(|t| t.kind.as_str()).collect::<Vec<_>>(),
        "title" => rows.iter().map(|t| t.title).collect::<Vec<_>>(),
        "director" => rows.iter().map(|t| t.director).collect::<Vec<_>>(),
        "country" => rows.iter().map(|t| t.country).collect::<Vec<_>>(),
        "date_added" => rows.iter().map(|t| t.date_added).collect::<Vec<_>>(),
        "release_year" => rows.iter().map(|t| t.release_year).collect::<Vec<_>>(),
        "rating" => rows.iter().map(|t| t.rating).collect::<Vec<_>>(),
        "duration" => rows.iter().map(|t| t.duration).collect::<Vec<_>>(),
        "listed_in" => rows.iter().map(|t| t.listed_in).collect::<Vec<_>>()
    )?;
    Ok(frame)
}

/// Titles paired with their numeric duration prefix.
pub fn titles_with(rows: &[(Title<'_>, u32)], value: &str) -> Result<DataFrame> {
    let just_titles: Vec<Title<'_>> = rows.iter().map(|(t, _)| *t).collect();
    let mut frame = titles(&just_titles)?;
    let values: Vec<u32> = rows.iter().map(|(_, v)| *v).collect();
    frame.with_column(Column::new(value.into(), values))?;
    Ok(frame)
}

pub fn counts<S: AsRef<str>>(key: &str, rows: &[(S, usize)]) -> Result<DataFrame> {
    let keys: Vec<&str> = rows.iter().map(|(k, _)| k.as_ref()).collect();
    let values: Vec<u64> = rows.iter().map(|(_, c)| *c as u64).collect();
    Ok(DataFrame::new(vec![
        Column::new(key.into(), keys),
        Column::new("count".into(), values),
    ])?)
}

pub fn kinds(rows: &[(Kind, usize)]) -> Result<DataFrame> {
    let rows: Vec<(&str, usize)> = rows.iter().map(|(k, c)| (k.as_str(), *c)).collect();
    counts("type", &rows)
}

pub fn ratings(rows: &[(Kind, &str, usize)]) -> Result<DataFrame> {
    let frame = df!(
        "type" => rows.iter().map(|(k, _, _)| k.as_str()).collect::<Vec<_>>(),
        "rating" => rows.iter().map(|(_, r, _)| *r).collect::<Vec<_>>(),
        "count" => rows.iter().map(|(_, _, c)| *c as u64).collect::<Vec<_>>()
    )?;
    Ok(frame)
}

pub fn shares(country: &str, rows: &[YearShare]) -> Result<DataFrame> {
    let frame = df!(
        "country" => vec![country; rows.len()],
        "release_year" => rows.iter().map(|r| r.year).collect::<Vec<_>>(),
        "total_release" => rows.iter().map(|r| r.count as u64).collect::<Vec<_>>(),
        "share" => rows.iter().map(|r| r.share).collect::<Vec<_>>()
    )?;
    Ok(frame)
}

pub fn labels(rows: &[(Label, usize)]) -> Result<DataFrame> {
    let rows: Vec<(&str, usize)> = rows.iter().map(|(l, c)| (l.as_str(), *c)).collect();
    counts("category", &rows)
}

pub fn load_summary(report: &LoadReport) -> Result<DataFrame> {
    let frame = df!(
        "total_rows" => [report.total_rows as u64],
        "loaded" => [report.loaded as u64],
        "malformed" => [report.malformed.len() as u64]
    )?;
    Ok(frame)
}

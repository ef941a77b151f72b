use crate::error::{CatalogError, Result, RowIssue};
use ahash::HashSet;
use chrono::NaiveDate;
use polars::prelude::*;
use regex::Regex;
use std::fs::File;
use std::io::Cursor;
use std::path::Path;
use std::sync::LazyLock;
use std::time::Instant;
use tracing::{info, warn};

// CREATE TABLE netflix (
//     show_id      VARCHAR(6) PRIMARY KEY,
//     type         VARCHAR(10),
//     title        VARCHAR(150),
//     director     VARCHAR(208),
//     casts        VARCHAR(1000),
//     country      VARCHAR(150),
//     date_added   VARCHAR(50),
//     release_year INT,
//     rating       VARCHAR(10),
//     duration     VARCHAR(15),
//     listed_in    VARCHAR(100),
//     description  VARCHAR(250)
// );

const DATE_ADDED_FORMAT: &str = "%B %d, %Y";

static DURATION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)").expect("duration pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Movie,
    TvShow,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Movie => "Movie",
            Kind::TvShow => "TV Show",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Movie" => Some(Kind::Movie),
            "TV Show" => Some(Kind::TvShow),
            _ => None,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column vectors of every row that survived validation.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Titles {
    pub show_id: Vec<String>,
    pub kind: Vec<Kind>,
    pub title: Vec<String>,
    pub director: Vec<Option<String>>,
    pub cast: Vec<Option<String>>,
    pub country: Vec<Option<String>>,
    pub date_added: Vec<Option<String>>,
    pub release_year: Vec<i32>,
    pub rating: Vec<Option<String>>,
    pub duration: Vec<Option<String>>,
    pub listed_in: Vec<Option<String>>,
    pub description: Vec<Option<String>>,
}

/// Borrowed view of one row of [`Titles`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Title<'a> {
    pub show_id: &'a str,
    pub kind: Kind,
    pub title: &'a str,
    pub director: Option<&'a str>,
    pub cast: Option<&'a str>,
    pub country: Option<&'a str>,
    pub date_added: Option<&'a str>,
    pub release_year: i32,
    pub rating: Option<&'a str>,
    pub duration: Option<&'a str>,
    pub listed_in: Option<&'a str>,
    pub description: Option<&'a str>,
}

impl Titles {
    pub fn len(&self) -> usize {
        self.show_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.show_id.is_empty()
    }

    pub fn row(&self, i: usize) -> Title<'_> {
        Title {
            show_id: &self.show_id[i],
            kind: self.kind[i],
            title: &self.title[i],
            director: self.director[i].as_deref(),
            cast: self.cast[i].as_deref(),
            country: self.country[i].as_deref(),
            date_added: self.date_added[i].as_deref(),
            release_year: self.release_year[i],
            rating: self.rating[i].as_deref(),
            duration: self.duration[i].as_deref(),
            listed_in: self.listed_in[i].as_deref(),
            description: self.description[i].as_deref(),
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = Title<'_>> {
        (0..self.len()).map(|i| self.row(i))
    }
}

impl Title<'_> {
    /// Leading integer of `duration`: minutes for movies, seasons for shows.
    pub fn duration_value(&self) -> std::result::Result<u32, RowIssue> {
        let value = self.duration.unwrap_or_default();
        duration_prefix(value).ok_or_else(|| RowIssue::NonNumericDurationPrefix {
            show_id: self.show_id.to_string(),
            value: value.to_string(),
        })
    }

    /// `Ok(None)` when the date is absent.
    pub fn added_on(&self) -> std::result::Result<Option<NaiveDate>, RowIssue> {
        let Some(value) = self.date_added else {
            return Ok(None);
        };
        parse_date_added(value)
            .map(Some)
            .ok_or_else(|| RowIssue::UnparsableDate {
                show_id: self.show_id.to_string(),
                value: value.to_string(),
            })
    }
}

/// Splits a comma-delimited multi-value field into trimmed, non-empty tokens.
pub fn tokens(field: Option<&str>) -> impl Iterator<Item = &str> {
    field
        .into_iter()
        .flat_map(|f| f.split(','))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

pub fn duration_prefix(duration: &str) -> Option<u32> {
    DURATION_PREFIX
        .captures(duration)
        .and_then(|caps| caps[1].parse().ok())
}

pub fn parse_date_added(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_ADDED_FORMAT).ok()
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub loaded: usize,
    pub malformed: Vec<RowIssue>,
}

/// The loaded dataset: a cleaned frame for lazy queries plus its columns.
pub struct Catalog {
    pub frame: DataFrame,
    pub titles: Titles,
    pub report: LoadReport,
}

fn csv_options() -> CsvReadOptions {
    // Everything is read as text; typing happens during validation so a bad
    // release_year skips one row instead of failing the whole read.
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_truncate_ragged_lines(true))
}

impl Catalog {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let start = Instant::now();
        let raw = csv_options().into_reader_with_file_handle(file).finish()?;
        let db = Self::from_frame(&raw)?;
        info!(
            path = %path.display(),
            loaded = db.report.loaded,
            malformed = db.report.malformed.len(),
            elapsed = ?start.elapsed(),
            "catalog loaded"
        );
        Ok(db)
    }

    pub fn from_csv_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let raw = csv_options()
            .into_reader_with_file_handle(Cursor::new(bytes.into()))
            .finish()?;
        Self::from_frame(&raw)
    }

    /// Validates a raw all-text frame row by row.
    pub fn from_frame(raw: &DataFrame) -> Result<Self> {
        let show_id = text_column(raw, &["show_id"])?;
        let kind = text_column(raw, &["type"])?;
        let title = text_column(raw, &["title"])?;
        let director = text_column(raw, &["director"])?;
        let cast = text_column(raw, &["casts", "cast"])?;
        let country = text_column(raw, &["country"])?;
        let date_added = text_column(raw, &["date_added"])?;
        let release_year = text_column(raw, &["release_year"])?;
        let rating = text_column(raw, &["rating"])?;
        let duration = text_column(raw, &["duration"])?;
        let listed_in = text_column(raw, &["listed_in"])?;
        let description = text_column(raw, &["description"])?;

        let mut titles = Titles::default();
        let mut malformed = Vec::new();
        let mut seen: HashSet<&str> = HashSet::default();

        for i in 0..raw.height() {
            let checked = check_row(
                i + 1,
                [show_id[i], kind[i], title[i], release_year[i]],
                &mut seen,
            );

            match checked {
                Ok((id, k, t, year)) => {
                    titles.show_id.push(id.to_string());
                    titles.kind.push(k);
                    titles.title.push(t.to_string());
                    titles.director.push(owned(director[i]));
                    titles.cast.push(owned(cast[i]));
                    titles.country.push(owned(country[i]));
                    titles.date_added.push(owned(date_added[i]));
                    titles.release_year.push(year);
                    titles.rating.push(owned(rating[i]));
                    titles.duration.push(owned(duration[i]));
                    titles.listed_in.push(owned(listed_in[i]));
                    titles.description.push(owned(description[i]));
                }
                Err(issue) => {
                    warn!(%issue, "skipping malformed row");
                    malformed.push(issue);
                }
            }
        }

        let frame = clean_frame(&titles)?;
        let report = LoadReport {
            total_rows: raw.height(),
            loaded: titles.len(),
            malformed,
        };

        Ok(Catalog {
            frame,
            titles,
            report,
        })
    }
}

/// Checks the required fields of one row: `[show_id, type, title, release_year]`.
fn check_row<'a>(
    row: usize,
    [show_id, kind, title, release_year]: [Option<&'a str>; 4],
    seen: &mut HashSet<&'a str>,
) -> std::result::Result<(&'a str, Kind, &'a str, i32), RowIssue> {
    let malformed = |reason: String| RowIssue::MalformedRow { row, reason };

    let id = show_id.ok_or_else(|| malformed("missing show_id".into()))?;
    let k = kind
        .and_then(Kind::from_label)
        .ok_or_else(|| malformed(format!("unknown type {kind:?}")))?;
    let t = title.ok_or_else(|| malformed("missing title".into()))?;
    let year = release_year
        .and_then(|y| y.parse::<i32>().ok())
        .ok_or_else(|| malformed(format!("invalid release_year {release_year:?}")))?;
    // Only a row that passed every other check claims its id.
    if !seen.insert(id) {
        return Err(malformed(format!("duplicate show_id {id}")));
    }
    Ok((id, k, t, year))
}

/// Collects a string column, treating blank cells as null. The first name
/// present in the frame wins.
fn text_column<'a>(raw: &'a DataFrame, names: &[&str]) -> Result<Vec<Option<&'a str>>> {
    let column = names
        .iter()
        .find_map(|name| raw.column(name).ok())
        .ok_or_else(|| CatalogError::MissingColumn(names[0].to_string()))?;

    Ok(column
        .str()?
        .into_iter()
        .map(|value| value.map(str::trim).filter(|v| !v.is_empty()))
        .collect())
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

fn clean_frame(titles: &Titles) -> Result<DataFrame> {
    let kind: Vec<&str> = titles.kind.iter().map(|k| k.as_str()).collect();
    let frame = df!(
        "show_id" => &titles.show_id,
        "type" => kind,
        "title" => &titles.title,
        "director" => &titles.director,
        "casts" => &titles.cast,
        "country" => &titles.country,
        "date_added" => &titles.date_added,
        "release_year" => &titles.release_year,
        "rating" => &titles.rating,
        "duration" => &titles.duration,
        "listed_in" => &titles.listed_in,
        "description" => &titles.description
    )?;
    Ok(frame)
}

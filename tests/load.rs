use nfq::{Catalog, CatalogError, Kind, RowIssue, q1, q4, q7, q9, q10, q15};
use std::io::Write;
use tempfile::NamedTempFile;

const CSV: &str = r#"show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,Chhota Bheem,"Rajiv Chilaka, Anita Iyer",Vatsal Dubey,India,"July 22, 2021",2020,TV-Y7,64 min,Children & Family Movies,A villain wants to kill the king.
s2,TV Show,Kota Factory,,"Mayur More, Jitendra Kumar",India,"September 24, 2021",2021,TV-MA,2 Seasons,"International TV Shows, TV Comedies",Students navigate campus life.
s3,Movie,Broken Row,,,India,,not-a-year,TV-MA,90 min,Dramas,Skipped.
s4,Documentary,Odd Type,,,India,,2020,TV-MA,90 min,Documentaries,Skipped.
s5,Movie,The Irishman,Martin Scorsese,"Robert De Niro, Al Pacino",United States,"November 27, 2019",2019,R,209 min,Dramas,A hit man looks back.
"#;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn loads_valid_rows_and_reports_malformed_ones() -> Result<(), CatalogError> {
    let file = write_csv(CSV);
    let db = Catalog::from_path(file.path())?;

    assert_eq!(db.report.total_rows, 5);
    assert_eq!(db.report.loaded, 3);
    assert_eq!(db.report.malformed.len(), 2);
    assert!(matches!(
        &db.report.malformed[0],
        RowIssue::MalformedRow { row: 3, .. }
    ));

    let counts = q1::count_by_type(&db)?;
    assert_eq!(counts, vec![(Kind::Movie, 2), (Kind::TvShow, 1)]);
    Ok(())
}

#[test]
fn reloading_gives_identical_results() -> Result<(), CatalogError> {
    let file = write_csv(CSV);
    let first = Catalog::from_path(file.path())?;
    let second = Catalog::from_path(file.path())?;

    assert_eq!(first.titles, second.titles);
    assert_eq!(first.report, second.report);
    assert_eq!(q1::count_by_type(&first)?, q1::count_by_type(&second)?);
    assert_eq!(q4::top_countries(&first, 5)?, q4::top_countries(&second, 5)?);
    assert_eq!(q9::count_by_genre(&first), q9::count_by_genre(&second));
    assert_eq!(
        q10::top_years_by_share(&first, "India", 5)?,
        q10::top_years_by_share(&second, "India", 5)?
    );
    assert_eq!(
        q15::categorize_by_keywords(&first, &q15::DEFAULT_KEYWORDS)?,
        q15::categorize_by_keywords(&second, &q15::DEFAULT_KEYWORDS)?
    );
    Ok(())
}

#[test]
fn director_match_is_token_exact() -> Result<(), CatalogError> {
    let file = write_csv(CSV);
    let db = Catalog::from_path(file.path())?;

    let res = q7::by_director(&db, "Rajiv Chilaka")?;
    assert_eq!(res.len(), 1);
    assert_eq!(res[0].show_id, "s1");
    assert!(q7::by_director(&db, "Rajiv")?.is_empty());
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let res = Catalog::from_path("does/not/exist.csv");
    assert!(matches!(res, Err(CatalogError::Io { .. })));
}

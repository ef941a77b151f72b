use crate::data::Catalog;
use crate::error::{CatalogError, Result};
use memchr::memmem;

pub const DEFAULT_KEYWORDS: [&str; 2] = ["kill", "violence"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Bad,
    Good,
}

impl Label {
    pub fn as_str(self) -> &'static str {
        match self {
            Label::Bad => "Bad",
            Label::Good => "Good",
        }
    }
}

/// Labels every title "Bad" when its description mentions any keyword
/// (case-insensitive), "Good" otherwise. Both labels are always reported.
pub fn categorize_by_keywords<S: AsRef<str>>(
    db: &Catalog,
    keywords: &[S],
) -> Result<Vec<(Label, usize)>> {
    if keywords.is_empty() {
        return Err(CatalogError::invalid("keywords", "at least one keyword is required"));
    }
    let keywords: Vec<String> = keywords
        .iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .collect();
    if keywords.iter().any(String::is_empty) {
        return Err(CatalogError::invalid("keywords", "keywords must not be blank"));
    }
    let finders: Vec<memmem::Finder<'_>> = keywords.iter().map(memmem::Finder::new).collect();

    let mut bad = 0;
    for description in db.titles.description.iter().flatten() {
        let description = description.to_lowercase();
        if finders
            .iter()
            .any(|f| f.find(description.as_bytes()).is_some())
        {
            bad += 1;
        }
    }

    Ok(vec![
        (Label::Bad, bad),
        (Label::Good, db.titles.len() - bad),
    ])
}

// SELECT category, COUNT(*) AS content_count
// FROM (
//     SELECT CASE
//                WHEN description ILIKE '%kill%' OR description ILIKE '%violence%' THEN 'Bad'
//                ELSE 'Good'
//            END AS category
//     FROM netflix
// ) AS categorized_content
// GROUP BY category;

#[cfg(test)]
mod test_q15 {
    use super::*;
    use crate::fixture;

    #[test]
    fn test_categorize_by_keywords() -> Result<()> {
        let db = fixture::catalog()?;
        let res = categorize_by_keywords(&db, &DEFAULT_KEYWORDS)?;

        // s3 "skilled thief", s5 "kill the king", s8 "Violence erupts",
        // s16 "A story of a kill".
        assert_eq!(res, vec![(Label::Bad, 4), (Label::Good, 12)]);
        let total: usize = res.iter().map(|(_, c)| c).sum();
        assert_eq!(total, db.titles.len());
        Ok(())
    }

    #[test]
    fn test_keyword_matches_inside_words() -> Result<()> {
        let csv = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,TV Show,Ganglands,,,,,2021,TV-MA,1 Season,Crime TV Shows,A skilled thief plans one last job.
s2,Movie,Quiet,,,,,2021,PG,90 min,Dramas,A calm afternoon.
";
        let db = Catalog::from_csv_bytes(csv)?;
        let res = categorize_by_keywords(&db, &["kill"])?;
        assert_eq!(res, vec![(Label::Bad, 1), (Label::Good, 1)]);
        Ok(())
    }

    #[test]
    fn test_custom_keywords() -> Result<()> {
        let db = fixture::catalog()?;
        let res = categorize_by_keywords(&db, &["CRIME"])?;
        assert_eq!(res, vec![(Label::Bad, 2), (Label::Good, 14)]);
        Ok(())
    }

    #[test]
    fn test_invalid_keywords() -> Result<()> {
        let db = fixture::catalog()?;
        let none: [&str; 0] = [];
        assert!(categorize_by_keywords(&db, &none).is_err());
        assert!(categorize_by_keywords(&db, &["kill", " "]).is_err());
        Ok(())
    }
}

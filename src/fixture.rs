//! Sixteen hand-picked titles shared by the query tests.

use crate::data::Catalog;
use crate::error::Result;
use chrono::NaiveDate;

pub const CSV: &str = r#"show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,"September 25, 2021",2020,PG-13,90 min,Documentaries,"As her father nears the end of his life, filmmaker Kirsten Johnson stages his death in inventive and comical ways."
s2,TV Show,Blood & Water,,"Ama Qamata, Khosi Ngema, Gail Mabalane",South Africa,"September 24, 2021",2021,TV-MA,2 Seasons,"International TV Shows, TV Dramas, TV Mysteries","After crossing paths at a party, a Cape Town teen sets out to prove whether a private-school swimming star is her sister."
s3,TV Show,Ganglands,Julien Leclercq,"Sami Bouajila, Tracy Gotoas","France, Belgium","September 24, 2021",2021,TV-MA,1 Season,"Crime TV Shows, International TV Shows, TV Action & Adventure","To protect his family from a powerful drug lord, skilled thief Mehdi and his team are pulled into a deadly turf war."
s4,TV Show,Kota Factory,,"Mayur More, Jitendra Kumar, Ranjan Raj",India,"September 24, 2021",2021,TV-MA,2 Seasons,"International TV Shows, Romantic TV Shows, TV Comedies","In a city of coaching centers, an earnest but unexceptional student and his friends navigate campus life."
s5,Movie,Chhota Bheem,"Rajiv Chilaka, Anita Iyer","Vatsal Dubey, Julie Tejwani",India,"July 22, 2021",2020,TV-Y7,64 min,Children & Family Movies,Bheem and his friends set out to stop a villain who wants to kill the king.
s6,Movie,Chhota Bheem & Krishna,Rajiv Chilaka Sr.,"Vatsal Dubey, Rupa Bhimani",India,"July 22, 2021",2019,TV-Y7,71 min,Children & Family Movies,Two heroes team up to save Dholakpur.
s7,Movie,Jaane Tu,Abbas Tyrewala,"Imran Khan, Genelia D'Souza, Jitendra Kumar",India,"January 1, 2020",2012,TV-14,155 min,"Comedies, Romantic Movies",A group of friends reminisce about a romance.
s8,Movie,Mumbai Nights,Anita Iyer,Mayur More,India,"March 3, 2020",2019,TV-MA,118 min,"Dramas, International Movies",Violence erupts in a Mumbai neighbourhood.
s9,TV Show,Delhi Crime,,"Shefali Shah, Rasika Dugal",India,"August 1, 2019",2019,TV-MA,6 Seasons,"Crime TV Shows, International TV Shows",Investigators track the attackers behind a brutal crime.
s10,Movie,Monsoon Wedding Redux,Mira Nair,"Naseeruddin Shah, Rasika Dugal",India,"June 5, 2018",2018,TV-14,114 min,"Dramas, International Movies",A family gathers for a chaotic wedding.
s11,Movie,Himalaya Diaries,Anand Patwardhan,,India,"",2018,TV-PG,95 min,"Documentaries, International Movies",A trek through the mountains.
s12,TV Show,Bengaluru Days,,Mayur More,India,not a date,2015,TV-PG,3 Seasons,"International TV Shows, Documentaries",Startup founders chase their dreams.
s13,Movie,Old Bombay,Shyam Benegal,Naseeruddin Shah,India,"May 1, 2021",2020,TV-MA,unknown,Dramas,A city remembers its past.
s14,Movie,The Irishman,Martin Scorsese,"Robert De Niro, Al Pacino, Joe Pesci",United States,"November 27, 2019",2019,R,209 min,Dramas,Hit man Frank Sheeran looks back at the secrets he kept as a loyal member of the Bufalino crime family.
s15,TV Show,Grey's Anatomy,,"Ellen Pompeo, Sandra Oh",United States,"July 3, 2020",2020,TV-14,17 Seasons,"TV Dramas, Romantic TV Shows",Intern Meredith Grey finds herself caught up in personal and professional passions.
s16,Movie,Revenge Road,,Uma Thurman,,"  October 1, 2022",2022,R,111 min,Action & Adventure,A story of a kill
"#;

pub fn catalog() -> Result<Catalog> {
    Catalog::from_csv_bytes(CSV)
}

/// Fixed "current date" so date-relative queries are reproducible.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

pub fn show_ids<'a>(rows: impl IntoIterator<Item = crate::data::Title<'a>>) -> Vec<&'a str> {
    rows.into_iter().map(|t| t.show_id).collect()
}

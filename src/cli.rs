use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Analytical queries over a streaming catalog CSV
#[derive(Parser)]
#[command(name = "nfq")]
#[command(about = "Run fixed analytical queries over a titles CSV", long_about = None)]
pub struct Cli {
    /// Path to the titles CSV
    #[arg(long, env = "CATALOG_DATA", default_value = "data/netflix_titles.csv")]
    pub data: PathBuf,

    /// Date treated as today by date-relative queries (YYYY-MM-DD)
    #[arg(long, env = "CATALOG_TODAY")]
    pub today: Option<NaiveDate>,

    /// Maximum rows printed per result table
    #[arg(long, env = "CATALOG_MAX_ROWS", default_value_t = 25)]
    pub max_rows: usize,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rows read, loaded and skipped
    Summary,
    /// Number of movies and TV shows
    CountByType,
    /// Most common rating for movies and TV shows
    MostCommonRating,
    /// Titles released in a given year
    ReleaseYear { year: i32 },
    /// Countries with the most titles
    TopCountries {
        #[arg(short, long, default_value_t = 5)]
        n: usize,
    },
    /// The longest movie
    LongestMovie,
    /// Titles added in the last few years
    RecentAdditions {
        #[arg(short, long, default_value_t = 5)]
        years: u32,
    },
    /// Titles by a director
    Director { name: String },
    /// TV shows with more than a number of seasons
    LongRunningShows {
        #[arg(short, long, default_value_t = 5)]
        min_seasons: u32,
    },
    /// Number of titles per genre
    CountByGenre,
    /// Release years with the highest share of a country's titles
    TopYearsByShare {
        #[arg(short, long, default_value = "India")]
        country: String,
        #[arg(short, long, default_value_t = 5)]
        n: usize,
    },
    /// Titles listed as documentaries
    Documentaries,
    /// Titles without a director
    MissingDirector,
    /// Recent titles featuring an actor
    Actor {
        name: String,
        #[arg(short, long, default_value_t = 10)]
        within_years: u32,
    },
    /// Actors appearing in the most titles from a country
    TopActors {
        #[arg(short, long, default_value = "India")]
        country: String,
        #[arg(short, long, default_value_t = 10)]
        n: usize,
    },
    /// Count titles whose description mentions any keyword
    Categorize {
        #[arg(short, long, value_delimiter = ',', default_values = ["kill", "violence"])]
        keywords: Vec<String>,
    },
    /// Every query with its default parameters
    All {
        /// Director for the director query
        #[arg(long, default_value = "Rajiv Chilaka")]
        director: String,
        /// Actor for the actor query
        #[arg(long, default_value = "Salman Khan")]
        actor: String,
        /// Year for the release-year query
        #[arg(long, default_value_t = 2020)]
        year: i32,
    },
}

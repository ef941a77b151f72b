mod cli;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use cli::{Cli, Commands};
use nfq::*;
use polars::prelude::DataFrame;
use std::env;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn print(name: &str, frame: DataFrame) {
    println!("{name}\n{frame}\n");
}

fn run(db: &Catalog, command: Commands, today: NaiveDate) -> Result<()> {
    let start = Instant::now();

    match command {
        Commands::Summary => {
            print("summary", report::load_summary(&db.report)?);
            for issue in &db.report.malformed {
                println!("{issue}");
            }
        }
        Commands::CountByType => print("count_by_type", report::kinds(&q1::count_by_type(db)?)?),
        Commands::MostCommonRating => print(
            "most_common_rating_by_type",
            report::ratings(&q2::most_common_rating_by_type(db))?,
        ),
        Commands::ReleaseYear { year } => print(
            "by_release_year",
            report::titles(&q3::by_release_year(db, year))?,
        ),
        Commands::TopCountries { n } => print(
            "top_countries",
            report::counts("country", &q4::top_countries(db, n)?)?,
        ),
        Commands::LongestMovie => {
            let longest: Vec<_> = q5::longest_movie(db).into_iter().collect();
            print("longest_movie", report::titles_with(&longest, "minutes")?);
        }
        Commands::RecentAdditions { years } => print(
            "recent_additions",
            report::titles(&q6::recent_additions(db, today, years))?,
        ),
        Commands::Director { name } => print(
            "by_director",
            report::titles(&q7::by_director(db, &name)?)?,
        ),
        Commands::LongRunningShows { min_seasons } => print(
            "long_running_shows",
            report::titles_with(&q8::long_running_shows(db, min_seasons), "seasons")?,
        ),
        Commands::CountByGenre => print(
            "count_by_genre",
            report::counts("genre", &q9::count_by_genre(db))?,
        ),
        Commands::TopYearsByShare { country, n } => print(
            "top_years_by_share",
            report::shares(&country, &q10::top_years_by_share(db, &country, n)?)?,
        ),
        Commands::Documentaries => {
            print("documentaries", report::titles(&q11::documentaries(db))?)
        }
        Commands::MissingDirector => print(
            "missing_director",
            report::titles(&q12::missing_director(db))?,
        ),
        Commands::Actor { name, within_years } => print(
            "actor_appearances",
            report::titles(&q13::actor_appearances(db, &name, today, within_years)?)?,
        ),
        Commands::TopActors { country, n } => print(
            "top_actors_by_country",
            report::counts("actor", &q14::top_actors_by_country(db, &country, n)?)?,
        ),
        Commands::Categorize { keywords } => print(
            "categorize_by_keywords",
            report::labels(&q15::categorize_by_keywords(db, &keywords)?)?,
        ),
        Commands::All {
            director,
            actor,
            year,
        } => {
            let country = String::from("India");
            let keywords = q15::DEFAULT_KEYWORDS.map(String::from).to_vec();
            let commands = [
                Commands::CountByType,
                Commands::MostCommonRating,
                Commands::ReleaseYear { year },
                Commands::TopCountries { n: 5 },
                Commands::LongestMovie,
                Commands::RecentAdditions { years: 5 },
                Commands::Director { name: director },
                Commands::LongRunningShows { min_seasons: 5 },
                Commands::CountByGenre,
                Commands::TopYearsByShare {
                    country: country.clone(),
                    n: 5,
                },
                Commands::Documentaries,
                Commands::MissingDirector,
                Commands::Actor {
                    name: actor,
                    within_years: 10,
                },
                Commands::TopActors { country, n: 10 },
                Commands::Categorize { keywords },
            ];
            for command in commands {
                run(db, command, today)?;
            }
        }
    }

    debug!(elapsed = ?start.elapsed(), "query finished");
    Ok(())
}

fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    init_tracing();
    match dotenv {
        Ok(path) => debug!("loaded environment from {:?}", path),
        Err(e) => debug!("no .env file loaded ({e})"),
    }

    let cli = Cli::parse();

    // One worker thread, and result tables long enough to read.
    unsafe {
        env::set_var("POLARS_MAX_THREADS", "1");
        if env::var_os("POLARS_FMT_MAX_ROWS").is_none() {
            env::set_var("POLARS_FMT_MAX_ROWS", cli.max_rows.to_string());
        }
    }

    let today = cli.today();
    let db = Catalog::from_path(&cli.data)
        .with_context(|| format!("failed to load catalog from {}", cli.data.display()))?;
    info!(%today, titles = db.titles.len(), "running query");

    run(&db, cli.command, today)
}

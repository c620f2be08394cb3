use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tripplanner::{
    Catalog, TripMatcher, TripPlannerConfig, TripPlannerError,
    api::AppState,
    logging,
    planner::{
        ConsoleNotifier, LogNotifier, PlannerSession, ResultsView, SearchForm, TripDetailsView,
        book_trip,
    },
    web,
};

#[derive(Parser)]
#[command(name = "tripplanner", version)]
#[command(about = "TripPlanner - find curated trip packages that fit your budget, group and schedule")]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging and configuration details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the destinations offered by the search form
    Destinations,
    /// Search the catalog
    Search {
        #[arg(short, long)]
        destination: String,
        /// Budget per person in USD
        #[arg(short, long)]
        budget: String,
        /// Number of travelers
        #[arg(short, long)]
        people: String,
        /// Trip length in days
        #[arg(long)]
        duration: String,
        /// Departure date, YYYY-MM-DD
        #[arg(long)]
        start_date: Option<String>,
        /// Open the details of this trip from the results
        #[arg(long)]
        select: Option<String>,
        /// Book the selected trip
        #[arg(long, requires = "select")]
        book: bool,
    },
    /// Show the full page for one trip
    Show { id: String },
    /// Book a trip by id
    Book { id: String },
    /// Serve the JSON API
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = e
                .downcast_ref::<TripPlannerError>()
                .map_or_else(|| format!("{e:#}"), TripPlannerError::user_message);
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        verbose,
        command,
    } = cli;

    let config = TripPlannerConfig::load_from_path(config_path.clone())?;
    logging::init(&config.logging, verbose)?;

    let catalog = Arc::new(Catalog::load(config.catalog.path.as_deref())?);
    let matcher = TripMatcher::new(catalog.clone())
        .with_duration_tolerance(config.search.duration_tolerance_days);

    let Some(command) = command else {
        print_overview(config_path, verbose, &config, &catalog);
        return Ok(());
    };

    match command {
        Commands::Destinations => {
            for destination in catalog.destinations() {
                println!("{destination}");
            }
        }
        Commands::Search {
            destination,
            budget,
            people,
            duration,
            start_date,
            select,
            book,
        } => {
            let mut form = SearchForm::new(destination, budget, people, duration);
            if let Some(date) = start_date {
                form = form.with_start_date(date);
            }

            let mut session = PlannerSession::new(
                matcher,
                Arc::new(ConsoleNotifier),
                config.search.simulated_latency(),
            );

            eprintln!("🔍 Finding perfect trips...");
            let results = session.submit(&form).await?;
            print!("{}", ResultsView::new(results));

            if let Some(id) = select {
                let trip = session.select(&id)?;
                println!("{}", TripDetailsView::new(trip));
                if book {
                    session.book()?;
                }
            }
        }
        Commands::Show { id } => {
            let trip = catalog
                .get(&id)
                .ok_or_else(|| TripPlannerError::not_found(id.as_str()))?;
            println!("{}", TripDetailsView::new(trip));
        }
        Commands::Book { id } => {
            let trip = catalog
                .get(&id)
                .ok_or_else(|| TripPlannerError::not_found(id.as_str()))?;
            book_trip(trip, &ConsoleNotifier);
        }
        Commands::Serve { port } => {
            let mut web_config = config.web.clone();
            if let Some(port) = port {
                web_config.port = port;
            }
            let state = AppState::new(matcher, Arc::new(LogNotifier));
            web::run(&web_config, state).await?;
        }
    }

    Ok(())
}

fn print_overview(
    config_path: Option<PathBuf>,
    verbose: bool,
    config: &TripPlannerConfig,
    catalog: &Catalog,
) {
    println!("TripPlanner v{}", tripplanner::VERSION);
    println!(
        "{} trips across {} destinations. Try `tripplanner search --help`.",
        catalog.len(),
        catalog.destinations().len()
    );

    if verbose {
        let config_path = config_path
            .or_else(TripPlannerConfig::get_config_path)
            .map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
        println!("Using config from: {config_path}");
        match &config.catalog.path {
            Some(path) => println!("Catalog: {}", path.display()),
            None => println!("Catalog: built-in seed"),
        }
        println!("Simulated latency: {}ms", config.search.simulated_latency_ms);
        println!("Log level: {}", config.logging.level);
    }
}

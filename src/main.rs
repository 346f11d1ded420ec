//! PropertyPulse CLI
//!
//! A command-line front end over the pricing library: predicts property
//! prices from the bundled demo artifacts, projects investment value, and
//! prints the synthetic environmental profile for a location.

use anyhow::Result;
use clap::{Parser, Subcommand};
use property_pulse::{
    format_inr, format_inr_compact, project_value, EnvironmentSource, ModelHandle, PricingEngine,
    ProjectionConfig, PropertyQuery, SyntheticEnvironment,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "property-pulse")]
#[command(about = "Property price prediction and investment analytics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the model artifact
    #[arg(long, default_value = "data/model.json")]
    model: String,

    /// Path to the column schema file
    #[arg(long, default_value = "data/columns.json")]
    columns: String,

    /// Verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the price of a property
    Predict {
        /// Total area in square feet
        #[arg(short, long, default_value = "1000.0")]
        area: f64,

        /// Number of bathrooms
        #[arg(long, default_value = "2")]
        bathrooms: u32,

        /// Number of bedrooms
        #[arg(long, default_value = "2")]
        bedrooms: u32,

        /// Location (must be in the trained vocabulary)
        #[arg(short, long)]
        location: String,

        /// Annual appreciation rate for the ROI projection
        #[arg(long, default_value = "0.07")]
        growth_rate: f64,
    },

    /// Compare baseline price per sq ft across locations
    Compare {
        /// Locations to compare; defaults to every known location
        locations: Vec<String>,
    },

    /// Show the synthetic environmental profile for a location
    Environment {
        /// Location name
        #[arg(short, long)]
        location: String,
    },

    /// List the locations the model knows about
    Locations,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // A load failure is fatal: no serving without a consistent model.
    let handle = ModelHandle::load(&cli.model, &cli.columns)?;
    let (model, schema) = handle.into_parts();
    let engine = PricingEngine::new(model, schema);

    match cli.command {
        Commands::Predict {
            area,
            bathrooms,
            bedrooms,
            location,
            growth_rate,
        } => {
            let query = PropertyQuery::new(area, bathrooms, bedrooms, location.clone())?;
            let prediction = engine.predict_price(&query)?;

            println!("Estimated price for {location}:");
            println!(
                "  {}  ({})",
                format_inr(prediction.total_price),
                format_inr_compact(prediction.total_price)
            );
            println!(
                "  Price per sq ft: {}",
                format_inr(prediction.price_per_sqft)
            );

            let config = ProjectionConfig {
                annual_growth_rate: growth_rate,
                ..ProjectionConfig::default()
            };
            println!("\nProjected value ({:.1}% annual growth):", growth_rate * 100.0);
            for proj in project_value(prediction.total_price, &config) {
                println!(
                    "  {:>2} years: {}  (+{:.1}%)",
                    proj.years_ahead,
                    format_inr_compact(proj.projected_price),
                    proj.percent_gain
                );
            }

            let profile = SyntheticEnvironment::new().profile(query.location());
            println!("\nEnvironmental profile (synthetic demo data):");
            println!(
                "  Air quality index: {} ({})",
                profile.air_quality_index,
                profile.air_quality_band()
            );
            println!(
                "  Noise level:       {} dB ({})",
                profile.noise_level_db,
                profile.noise_band()
            );
            println!(
                "  Green space:       {}% ({})",
                profile.green_space_percent,
                profile.green_space_band()
            );
        }

        Commands::Compare { locations } => {
            let names: Vec<String> = if locations.is_empty() {
                engine.schema().locations().map(str::to_owned).collect()
            } else {
                locations
            };
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();

            println!("Baseline price per sq ft (1000 sqft, 2 bath, 2 bhk):");
            for baseline in engine.compare_locations(&refs) {
                println!(
                    "  {:<20} {}",
                    baseline.location,
                    format_inr(baseline.price_per_sqft)
                );
            }
        }

        Commands::Environment { location } => {
            let profile = SyntheticEnvironment::new().profile(&location);
            println!("Environmental profile for {location} (synthetic demo data):");
            println!(
                "  Air quality index: {} ({})",
                profile.air_quality_index,
                profile.air_quality_band()
            );
            println!(
                "  Noise level:       {} dB ({})",
                profile.noise_level_db,
                profile.noise_band()
            );
            println!(
                "  Green space:       {}% ({})",
                profile.green_space_percent,
                profile.green_space_band()
            );
        }

        Commands::Locations => {
            println!("Known locations:");
            for location in engine.schema().locations() {
                println!("  {location}");
            }
        }
    }

    Ok(())
}

//! CLI command definitions and dispatch.

pub mod availability;
pub mod book;
pub mod bookings;
pub mod cancel;
pub mod migrate;
pub mod venues;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use quickcourt_core::config::AppConfig;
use quickcourt_core::error::AppError;
use quickcourt_database::connection::DatabasePool;
use quickcourt_database::repositories::{BookingRepository, PgAvailabilityStore, VenueRepository};
use quickcourt_service::booking::BookingService;
use quickcourt_service::payment::StubPaymentGateway;
use quickcourt_service::reservation::ReservationService;
use quickcourt_service::venue::VenueService;

use crate::output::OutputFormat;

/// QuickCourt — venue booking operations
#[derive(Debug, Parser)]
#[command(name = "quickcourt", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (reads config/default plus config/{env})
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search venues
    Venues(venues::VenuesArgs),
    /// Show a venue's slot availability for a date
    Availability(availability::AvailabilityArgs),
    /// Reserve slots at a venue
    Book(book::BookArgs),
    /// Cancel a booking by reference
    Cancel(cancel::CancelArgs),
    /// List a user's bookings
    Bookings(bookings::BookingsArgs),
    /// Run database migrations
    Migrate(migrate::MigrateArgs),
}

impl Cli {
    /// Execute the CLI command.
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Venues(args) => venues::execute(args, config, self.format).await,
            Commands::Availability(args) => availability::execute(args, config, self.format).await,
            Commands::Book(args) => book::execute(args, config, self.format).await,
            Commands::Cancel(args) => cancel::execute(args, config).await,
            Commands::Bookings(args) => bookings::execute(args, config, self.format).await,
            Commands::Migrate(args) => migrate::execute(args, config).await,
        }
    }
}

/// The wired-up services all commands share.
pub struct Services {
    /// The reservation coordinator.
    pub reservations: ReservationService,
    /// Booking reads and administration.
    pub bookings: BookingService,
    /// Venue browsing.
    pub venues: VenueService,
}

/// Connect to PostgreSQL and wire the services.
pub async fn connect_services(config: &AppConfig) -> Result<Services, AppError> {
    let pool = DatabasePool::connect(&config.database).await?.into_pool();

    let venue_repo = Arc::new(VenueRepository::new(pool.clone()));
    let availability = Arc::new(PgAvailabilityStore::new(pool.clone()));
    let booking_repo = Arc::new(BookingRepository::new(pool));

    let reservations = ReservationService::new(
        venue_repo.clone(),
        availability,
        booking_repo.clone(),
        Arc::new(StubPaymentGateway::new()),
        &config.booking,
    )?;

    Ok(Services {
        reservations,
        bookings: BookingService::new(booking_repo),
        venues: VenueService::new(venue_repo),
    })
}

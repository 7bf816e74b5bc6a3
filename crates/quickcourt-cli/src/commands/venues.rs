//! Venue search command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use quickcourt_core::config::AppConfig;
use quickcourt_core::error::AppError;
use quickcourt_core::types::pagination::PageRequest;
use quickcourt_entity::venue::filter::{VenueFilter, VenueSort};
use quickcourt_entity::venue::model::Venue;

use crate::output::{self, OutputFormat};

/// Arguments for venue search.
#[derive(Debug, Args)]
pub struct VenuesArgs {
    /// Free-text search over name and location
    #[arg(short, long)]
    pub query: Option<String>,

    /// Only venues offering this sport
    #[arg(short, long)]
    pub sport: Option<String>,

    /// Minimum price per hour
    #[arg(long)]
    pub min_price: Option<i64>,

    /// Maximum price per hour
    #[arg(long)]
    pub max_price: Option<i64>,

    /// Minimum rating
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Sort order: rating, price-asc, or price-desc
    #[arg(long, default_value = "rating")]
    pub sort: String,

    /// Page number
    #[arg(long, default_value_t = 1)]
    pub page: u64,

    /// Page size
    #[arg(long, default_value_t = 25)]
    pub page_size: u64,
}

#[derive(Debug, Serialize, Tabled)]
struct VenueRow {
    id: String,
    name: String,
    location: String,
    price_per_hour: i64,
    rating: f64,
    sports: String,
}

impl From<&Venue> for VenueRow {
    fn from(venue: &Venue) -> Self {
        Self {
            id: venue.id.to_string(),
            name: venue.name.clone(),
            location: venue.location.clone(),
            price_per_hour: venue.price_per_hour,
            rating: venue.rating,
            sports: venue.sports.join(", "),
        }
    }
}

/// Execute the venues command.
pub async fn execute(
    args: &VenuesArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let services = super::connect_services(config).await?;

    let sort = match args.sort.as_str() {
        "rating" => VenueSort::RatingDesc,
        "price-asc" => VenueSort::PriceAsc,
        "price-desc" => VenueSort::PriceDesc,
        other => {
            return Err(AppError::validation(format!(
                "unknown sort '{other}'. Expected rating, price-asc, or price-desc"
            )));
        }
    };

    let filter = VenueFilter {
        query: args.query.clone(),
        sport: args.sport.clone(),
        min_price: args.min_price,
        max_price: args.max_price,
        min_rating: args.min_rating,
        sort,
    };

    let result = services
        .venues
        .search(&filter, &PageRequest::new(args.page, args.page_size))
        .await?;

    let rows: Vec<VenueRow> = result.items.iter().map(VenueRow::from).collect();
    output::print_list(&rows, format);
    if format == OutputFormat::Table {
        println!(
            "Page {}/{} ({} venues)",
            result.page, result.total_pages, result.total_items
        );
    }
    Ok(())
}

//! Slot availability command.

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use quickcourt_core::config::AppConfig;
use quickcourt_core::error::AppError;
use quickcourt_core::types::id::VenueId;
use quickcourt_entity::availability::model::SlotState;

use crate::output::{self, OutputFormat};

/// Arguments for the availability command.
#[derive(Debug, Args)]
pub struct AvailabilityArgs {
    /// Venue ID
    pub venue: Uuid,

    /// Date (YYYY-MM-DD)
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, Tabled)]
struct SlotRow {
    slot: String,
    state: String,
}

/// Execute the availability command.
pub async fn execute(
    args: &AvailabilityArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let services = super::connect_services(config).await?;

    let availability = services
        .reservations
        .check_availability(VenueId::from_uuid(args.venue), args.date)
        .await?;

    let rows: Vec<SlotRow> = availability
        .slots
        .iter()
        .map(|(slot, state)| SlotRow {
            slot: slot.to_string(),
            state: match state {
                SlotState::Free => "free".to_string(),
                SlotState::Taken => "taken".to_string(),
            },
        })
        .collect();

    output::print_list(&rows, format);
    Ok(())
}

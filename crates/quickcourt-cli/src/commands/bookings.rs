//! Booking history command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use uuid::Uuid;

use quickcourt_core::config::AppConfig;
use quickcourt_core::error::AppError;
use quickcourt_core::types::id::UserId;
use quickcourt_entity::booking::model::Booking;
use quickcourt_entity::user::UserRole;
use quickcourt_service::context::RequestContext;

use crate::output::{self, OutputFormat};

/// Arguments for the bookings command.
#[derive(Debug, Args)]
pub struct BookingsArgs {
    /// User whose bookings to list
    pub user: Uuid,
}

#[derive(Debug, Serialize, Tabled)]
struct BookingRow {
    reference: String,
    date: String,
    slots: String,
    sport: String,
    status: String,
    amount: i64,
}

impl From<&Booking> for BookingRow {
    fn from(booking: &Booking) -> Self {
        Self {
            reference: booking.reference.to_string(),
            date: booking.booking_date.to_string(),
            slots: booking
                .time_slots
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            sport: booking.sport.clone(),
            status: booking.status.to_string(),
            amount: booking.final_amount,
        }
    }
}

/// Execute the bookings command.
pub async fn execute(
    args: &BookingsArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let services = super::connect_services(config).await?;

    let ctx = RequestContext::new(UserId::from_uuid(args.user), UserRole::User);
    let history = services.bookings.history(&ctx).await?;

    for (title, bookings) in [
        ("Upcoming", &history.upcoming),
        ("Past", &history.past),
        ("Cancelled", &history.cancelled),
    ] {
        if format == OutputFormat::Table {
            println!("{title} ({})", bookings.len());
        }
        let rows: Vec<BookingRow> = bookings.iter().map(BookingRow::from).collect();
        output::print_list(&rows, format);
    }
    Ok(())
}

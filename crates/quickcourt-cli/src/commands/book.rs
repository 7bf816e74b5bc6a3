//! Booking command.

use chrono::NaiveDate;
use clap::Args;
use uuid::Uuid;

use quickcourt_core::config::AppConfig;
use quickcourt_core::error::AppError;
use quickcourt_core::types::id::{UserId, VenueId};
use quickcourt_core::types::slot::SlotLabel;
use quickcourt_entity::booking::model::ContactDetails;
use quickcourt_entity::user::UserRole;
use quickcourt_service::context::RequestContext;
use quickcourt_service::reservation::ReserveRequest;

use crate::output::{self, OutputFormat};

/// Arguments for the book command.
#[derive(Debug, Args)]
pub struct BookArgs {
    /// Venue ID
    pub venue: Uuid,

    /// Date (YYYY-MM-DD)
    pub date: NaiveDate,

    /// Slot labels, e.g. 14:00 15:00
    #[arg(required = true)]
    pub slots: Vec<String>,

    /// Sport to play
    #[arg(short, long)]
    pub sport: String,

    /// Number of players
    #[arg(short, long, default_value_t = 2)]
    pub players: u32,

    /// Acting user ID
    #[arg(short, long)]
    pub user: Uuid,

    /// Contact name
    #[arg(long)]
    pub name: Option<String>,

    /// Contact phone
    #[arg(long)]
    pub phone: Option<String>,

    /// Contact email
    #[arg(long)]
    pub email: Option<String>,

    /// Free-text notes for the venue
    #[arg(long)]
    pub notes: Option<String>,
}

/// Execute the book command.
pub async fn execute(
    args: &BookArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let services = super::connect_services(config).await?;

    let slots = args
        .slots
        .iter()
        .map(|label| SlotLabel::parse(label))
        .collect::<Result<Vec<_>, _>>()?;

    let ctx = RequestContext::new(UserId::from_uuid(args.user), UserRole::User);
    let request = ReserveRequest {
        venue_id: VenueId::from_uuid(args.venue),
        date: args.date,
        slots,
        sport: args.sport.clone(),
        player_count: args.players,
        contact: ContactDetails {
            name: args.name.clone(),
            phone: args.phone.clone(),
            email: args.email.clone(),
        },
        notes: args.notes.clone(),
    };

    let booking = services.reservations.reserve(&ctx, request).await?;

    output::print_success(&format!(
        "Booking {} confirmed: {} slot(s) on {} for {}",
        booking.reference,
        booking.time_slots.len(),
        booking.booking_date,
        booking.final_amount
    ));
    output::print_item(&booking, format);
    Ok(())
}

//! Booking cancellation command.

use clap::Args;
use dialoguer::Confirm;
use uuid::Uuid;

use quickcourt_core::config::AppConfig;
use quickcourt_core::error::AppError;
use quickcourt_core::types::booking_ref::BookingRef;
use quickcourt_core::types::id::UserId;
use quickcourt_entity::user::UserRole;
use quickcourt_service::context::RequestContext;

use crate::output;

/// Arguments for the cancel command.
#[derive(Debug, Args)]
pub struct CancelArgs {
    /// Booking reference (e.g. QC000417)
    pub reference: String,

    /// Acting user ID
    #[arg(short, long)]
    pub user: Uuid,

    /// Act with admin privileges
    #[arg(long)]
    pub admin: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Execute the cancel command.
pub async fn execute(args: &CancelArgs, config: &AppConfig) -> Result<(), AppError> {
    let services = super::connect_services(config).await?;

    let role = if args.admin {
        UserRole::Admin
    } else {
        UserRole::User
    };
    let ctx = RequestContext::new(UserId::from_uuid(args.user), role);

    let reference = BookingRef::parse(&args.reference)?;
    let booking = services.bookings.find_by_reference(&ctx, &reference).await?;

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Cancel booking {} ({} on {})?",
                booking.reference, booking.sport, booking.booking_date
            ))
            .default(false)
            .interact()
            .map_err(|e| AppError::validation(format!("confirmation prompt failed: {e}")))?;
        if !confirmed {
            output::print_warning("Cancellation aborted");
            return Ok(());
        }
    }

    services.reservations.cancel(&ctx, booking.id).await?;
    output::print_success(&format!("Booking {} cancelled", booking.reference));
    Ok(())
}

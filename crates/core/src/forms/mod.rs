//! Server-side validation for the site's contact, newsletter and
//! trip-planner forms.

mod contact;
mod newsletter;
mod trip_planner;
mod validation;

pub use contact::{submit_contact, ContactForm};
pub use newsletter::{submit_newsletter, NewsletterForm};
pub use trip_planner::{plan_trip, required_stops, TripPlan, TripPlannerForm};
pub use validation::{is_valid_email, FormStatus, ValidationError};

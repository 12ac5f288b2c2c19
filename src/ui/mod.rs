//! Form driven client for the people API.
//!
//! [`app::PeopleApp`] keeps the loaded list and the form, runs the shared
//! validation rules before any request, and refreshes the whole list after
//! every successful mutation.

pub mod api;
pub mod app;
#[cfg(test)]
pub(crate) mod fake;
pub mod form;

pub use api::{ApiError, HttpPeopleApi, PeopleApi};
pub use app::{PeopleApp, SubmitOutcome};
pub use form::{FormField, PersonForm};

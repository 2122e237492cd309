//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod facility;
mod occupation;
mod token;

pub use facility::{FacilityId, ResourcePath};
pub use occupation::{CapacitySnapshot, CombinedOccupation, OccupationSnapshot};
pub use token::{AccessToken, TOKEN_EXPIRY_SAFETY_MARGIN_SECONDS};

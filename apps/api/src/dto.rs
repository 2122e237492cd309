mod common;
mod facilities;

pub use common::HealthResponse;
pub use facilities::CombinedOccupationResponse;

//! Application services and ports.

#![forbid(unsafe_code)]

mod access_token_service;
mod facility_service;
mod parking_api_client;
mod parking_ports;

pub use access_token_service::AccessTokenService;
pub use facility_service::FacilityService;
pub use parking_api_client::ParkingApiClient;
pub use parking_ports::{AccessTokenIssuer, IssuedToken, ParkingApiGateway};

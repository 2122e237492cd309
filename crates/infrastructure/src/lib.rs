//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_client_credentials_issuer;
mod http_parking_api_gateway;

pub use http_client_credentials_issuer::{ClientCredentialsConfig, HttpClientCredentialsIssuer};
pub use http_parking_api_gateway::HttpParkingApiGateway;

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parkwatch_application::{AccessTokenIssuer, IssuedToken, ParkingApiGateway};
use parkwatch_core::{AppError, AppResult};
use parkwatch_domain::ResourcePath;
use serde_json::{Value, json};

use crate::api_services::state_from_ports;
use crate::state::AppState;

pub struct FakeIssuer {
    fail: bool,
    calls: AtomicUsize,
}

impl FakeIssuer {
    pub fn succeeding() -> Self {
        Self {
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccessTokenIssuer for FakeIssuer {
    async fn issue_token(&self) -> AppResult<IssuedToken> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::Authentication(
                "token endpoint returned status 401 Unauthorized".to_owned(),
            ));
        }

        Ok(IssuedToken {
            access_token: "token-1".to_owned(),
            expires_in_seconds: 3600,
        })
    }
}

#[derive(Default)]
pub struct FakeGateway {
    routes: HashMap<String, Result<Value, (u16, String)>>,
}

impl FakeGateway {
    /// Facility `P-1` with occupation 5/2/7 and capacity 20.
    pub fn with_facility() -> Self {
        Self::default()
            .respond("/facilities", json!([{ "id": "P-1", "name": "Station" }]))
            .respond(
                "/facilities/P-1/occupation",
                json!({
                    "subscriberOccupation": 5,
                    "transientOccupation": 2,
                    "totalOccupation": 7,
                }),
            )
            .respond(
                "/facilities/P-1/capacity",
                json!({ "totalCapacity": 20, "facilityId": "P-1" }),
            )
    }

    pub fn respond(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(path.to_owned(), Ok(body));
        self
    }

    pub fn fail(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes.insert(path.to_owned(), Err((status, body.to_owned())));
        self
    }
}

#[async_trait]
impl ParkingApiGateway for FakeGateway {
    async fn get_json(&self, path: &ResourcePath, _bearer_token: &str) -> AppResult<Value> {
        match self.routes.get(&path.to_string()) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err((status, body))) => Err(AppError::Upstream {
                status: Some(*status),
                body: body.clone(),
            }),
            None => Err(AppError::Upstream {
                status: Some(404),
                body: "not found".to_owned(),
            }),
        }
    }
}

pub fn app_state(issuer: Arc<FakeIssuer>, gateway: FakeGateway) -> AppState {
    state_from_ports(issuer, Arc::new(gateway))
}

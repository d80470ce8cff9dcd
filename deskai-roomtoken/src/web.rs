use rocket::http::{Header, Status};
use rocket::response::status::Custom;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::{
    Build, Request, Response, Rocket, State,
    fairing::{Fairing, Info, Kind},
    get, post, routes,
};
use tracing::{error, info};

use crate::config::ServiceConfig;
use crate::token::mint_video_token;

/// Adds CORS headers scoped to the single configured origin.
pub struct Cors {
    allowed_origin: String,
}

impl Cors {
    pub fn new(allowed_origin: impl Into<String>) -> Self {
        Self {
            allowed_origin: allowed_origin.into(),
        }
    }
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new(
            "Access-Control-Allow-Origin",
            self.allowed_origin.clone(),
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[derive(Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct TokenRequest {
    pub identity: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TokenResponse {
    pub token: String,
    pub room: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: &'static str,
}

// Liveness only; deliberately ignores configuration state.
#[get("/health")]
pub fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[post("/video/token", data = "<request>")]
pub fn video_token(
    request: Json<TokenRequest>,
    config: &State<ServiceConfig>,
) -> Result<Json<TokenResponse>, Custom<Json<ErrorDetail>>> {
    let secrets = match config.secrets() {
        Ok(secrets) => secrets,
        Err(e) => {
            error!("token request rejected: {e}");
            return Err(Custom(
                Status::InternalServerError,
                Json(ErrorDetail {
                    detail: e.to_string(),
                }),
            ));
        }
    };

    match mint_video_token(secrets, &request.identity, &config.room_name) {
        Ok(token) => {
            info!(
                "issued video token for identity {:?} (room: {})",
                request.identity, config.room_name
            );
            Ok(Json(TokenResponse {
                token,
                room: config.room_name.clone(),
            }))
        }
        Err(e) => {
            error!("failed to sign video token: {e}");
            Err(Custom(
                Status::InternalServerError,
                Json(ErrorDetail {
                    detail: e.to_string(),
                }),
            ))
        }
    }
}

// Handle OPTIONS requests for CORS preflight
#[rocket::options("/<_..>")]
pub fn options() -> Status {
    Status::Ok
}

pub fn rocket(config: ServiceConfig) -> Rocket<Build> {
    rocket::build()
        .attach(Cors::new(config.allowed_origin.clone()))
        .manage(config)
        .mount("/", routes![health, video_token, options])
}

use anyhow::Context;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::ProviderSecrets;

/// Twilio expects this content type on video access tokens.
pub const TOKEN_CONTENT_TYPE: &str = "twilio-fpa;v=1";
pub const TOKEN_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    pub jti: String,
    pub iss: String,
    pub sub: String,
    pub iat: u64,
    pub exp: u64,
    pub grants: TokenGrants,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrants {
    pub identity: String,
    pub video: VideoGrant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoGrant {
    pub room: String,
}

/// Mints a signed access token authorizing `identity` to join `room`.
///
/// The identity is caller-supplied and deliberately unconstrained; the
/// token itself is the only artifact, nothing is recorded.
pub fn mint_video_token(
    secrets: &ProviderSecrets,
    identity: &str,
    room: &str,
) -> anyhow::Result<String> {
    let iat = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("system clock before unix epoch")?
        .as_secs();

    let claims = AccessTokenClaims {
        jti: format!("{}-{}", secrets.api_key, iat),
        iss: secrets.api_key.clone(),
        sub: secrets.account_sid.clone(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
        grants: TokenGrants {
            identity: identity.to_string(),
            video: VideoGrant {
                room: room.to_string(),
            },
        },
    };

    let mut header = Header::new(Algorithm::HS256);
    header.cty = Some(TOKEN_CONTENT_TYPE.into());

    encode(
        &header,
        &claims,
        &EncodingKey::from_secret(secrets.api_secret.as_bytes()),
    )
    .context("sign access token")
}

use crate::auth::JWT_SIGNING_KEY;
use jwt::VerifyWithKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct JwtPayload {
    pub public_id: String,
    pub private_id: String,
    #[serde(default)]
    pub is_admin: bool,
}

pub fn decode(passcode: &str) -> Result<JwtPayload, ()> {
    passcode
        .verify_with_key(
            JWT_SIGNING_KEY
                .get()
                .expect("`JWT_SIGNING_KEY` was not initialized."),
        )
        .map_err(|_err| ())
}

#[cfg(test)]
pub fn encode(payload: &JwtPayload) -> String {
    use jwt::SignWithKey;

    payload
        .sign_with_key(
            JWT_SIGNING_KEY
                .get()
                .expect("`JWT_SIGNING_KEY` was not initialized."),
        )
        .expect("Failed to sign a passcode.")
}

//! Identity payload exchanged for a session token.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of the token-issue request: the identity to sign.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Identity {
    #[validate(email)]
    pub email: String,
}

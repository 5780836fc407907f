use chrono::Utc;
use rand::rngs::OsRng;
use rand::RngCore;

use super::domain::ApplicationId;

/// Fixed prefix carried by every issued application ID.
pub const ID_PREFIX: &str = "MLRN";

impl ApplicationId {
    /// Issue a fresh application ID: `MLRN`, six uppercase hex characters
    /// from three cryptographically random bytes, and the last five digits
    /// of the millisecond clock.
    ///
    /// Collisions are not handled here; a duplicate would surface as a
    /// uniqueness conflict at insert time.
    pub fn generate() -> Self {
        let mut entropy = [0u8; 3];
        OsRng.fill_bytes(&mut entropy);
        Self::compose(entropy, Utc::now().timestamp_millis())
    }

    /// Deterministic composition used by `generate` and by tests.
    pub fn compose(entropy: [u8; 3], unix_millis: i64) -> Self {
        let time_slice = unix_millis.rem_euclid(100_000);
        ApplicationId(format!(
            "{ID_PREFIX}{:02X}{:02X}{:02X}{time_slice:05}",
            entropy[0], entropy[1], entropy[2]
        ))
    }
}

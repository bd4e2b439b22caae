use super::*;

use rand::{thread_rng, Rng};

impl ScoreId {
    /// Generates a new random (version 4) UUID.
    pub fn generate() -> Self {
        let bytes: [u8; 16] = thread_rng().gen();
        let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();

        Self(uuid.hyphenated().to_string())
    }
}

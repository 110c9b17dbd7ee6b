use bcrypt::{hash, verify};

use crate::error::AppError;

/// Adaptive hashing cost. Ten rounds of bcrypt, matching the stored hashes.
const BCRYPT_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(hash(password, BCRYPT_COST)?)
}

pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    Ok(verify(password, hashed_password)?)
}

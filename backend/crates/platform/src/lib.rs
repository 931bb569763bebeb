//! Platform Infrastructure
//!
//! Cross-cutting technical concerns shared by the domain crates:
//! - `password` - Argon2id hashing and verification with zeroized buffers
//! - `bearer` - Authorization header parsing

pub mod bearer;
pub mod password;

//! Platform - security primitives shared across domain crates
//!
//! Contains infrastructure-level building blocks with no domain
//! knowledge:
//! - `password` - Argon2id password hashing and verification
//! - `token` - signed bearer token (JWT) issuance and validation

pub mod password;
pub mod token;

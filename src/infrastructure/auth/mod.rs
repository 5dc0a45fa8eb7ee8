//! Authentication infrastructure module
//!
//! This module provides JWT issuance for registered and logged-in users.

mod jwt;

pub use jwt::{JwtClaims, JwtConfig, JwtTokenIssuer};

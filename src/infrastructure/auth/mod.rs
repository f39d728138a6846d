//! Authentication infrastructure module
//!
//! Bearer tokens are resolved into a caller identity at the HTTP edge.

mod jwt;

pub use jwt::{JwtClaims, JwtConfig, JwtGenerator, JwtService, MAX_TOKEN_HOURS};

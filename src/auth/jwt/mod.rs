//! JWT token handling
//!
//! Stateless bearer tokens: a token is issued, then expires on its own.

mod handler;
pub mod types;
mod utils;


pub use types::{Claims, IssuedToken, JwtHandler};

pub mod error;
pub mod signature;
pub mod verification;

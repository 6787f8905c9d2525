pub mod blob;
pub mod credential;
pub mod reconciliation;
pub mod signature;

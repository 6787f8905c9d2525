pub mod backend_client;
pub mod signing_plugin;

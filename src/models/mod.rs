pub mod api_response;
pub mod contact;
pub mod intent;
pub mod network_config;
pub mod token;

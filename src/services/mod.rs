pub mod address;
pub mod contacts_service;
pub mod network_config;
pub mod parser;
pub mod resolver;
pub mod session;
pub mod token_registry;
pub mod wallet_service;

pub mod action_executor;
pub mod config;
pub mod contract;
pub mod filter;
pub mod fixture;
pub mod logging;
pub mod model;
pub mod palette_service;
pub mod runtime;
pub mod state;
pub mod transport;
pub mod view;

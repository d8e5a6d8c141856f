pub mod config;
pub mod constants;
pub mod controllers;
pub mod error;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod structs;
pub mod templates;
pub mod utils;

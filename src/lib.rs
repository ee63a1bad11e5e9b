pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod credentials;
pub mod error;
pub mod models;
pub mod utils;
pub mod view;


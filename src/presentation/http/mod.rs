// src/presentation/http/mod.rs
pub mod controllers;
pub mod error;
pub mod request;
pub mod routes;
pub mod state;
pub mod views;

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod markup;
pub mod models;
pub mod table;

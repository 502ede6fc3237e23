pub mod db;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod session;

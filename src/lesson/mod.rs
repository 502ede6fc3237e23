pub mod db;
pub mod fallback;
pub mod handlers;
pub mod models;

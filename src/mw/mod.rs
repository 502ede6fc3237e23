pub mod auth_mw;

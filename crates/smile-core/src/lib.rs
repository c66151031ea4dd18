pub mod config;
pub mod logging;

pub mod controller;
pub mod error;
pub mod host;
pub mod icon;
pub mod policy;
pub mod request;
pub mod session;
pub mod state;
pub mod url_model;

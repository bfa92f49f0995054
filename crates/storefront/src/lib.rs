pub mod abstract_trait;
pub mod config;
pub mod di;
pub mod domain;
pub mod service;
pub mod state;
pub mod view;

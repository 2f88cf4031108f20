//! dealer-core: vehicle price configurator and contact-form lead desk.

pub mod catalog;
pub mod command;
pub mod config;
pub mod configurator;
pub mod contact;
pub mod error;
pub mod event;
pub mod grouping;
pub mod mailer;
pub mod price_engine;
pub mod selection;
pub mod store;
pub mod types;

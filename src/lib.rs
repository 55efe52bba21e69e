#![allow(non_snake_case)]

pub mod clients;
pub mod config;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod locales;
pub mod models;
pub mod runtime;
pub mod service;
pub mod state;
pub mod view;

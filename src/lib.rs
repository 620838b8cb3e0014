#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

pub mod capture_queue;
pub mod capture_service;
pub mod config;
pub mod directions;
pub mod export_data;
pub mod logs;
pub mod media_kind;
pub mod polyline;
pub mod route_vector;
pub mod speech_processor;
pub mod utils;

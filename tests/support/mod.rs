#![allow(dead_code)]

pub mod config;
pub mod line;
pub mod server;

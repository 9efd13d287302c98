//! Route handlers

pub mod time;

//! API request handlers

pub mod chat;

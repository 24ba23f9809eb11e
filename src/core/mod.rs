//! Core connection logic: server catalog and the connection controller.

pub mod catalog;
pub mod controller;

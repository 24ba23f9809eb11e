//! Reusable dashboard widgets

pub mod footer;

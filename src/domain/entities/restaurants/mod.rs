//! Restaurants Entity Module

pub mod restaurant;

// Service module exports

pub mod controller;
pub mod countdown;
pub mod display;
pub mod holiday;
pub mod settings;

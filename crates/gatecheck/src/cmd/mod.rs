//! Command implementations for the gatecheck CLI

pub mod check;
pub mod rules;

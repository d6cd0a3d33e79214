#![no_std]

pub mod edge_timer;
pub mod pin_bank;

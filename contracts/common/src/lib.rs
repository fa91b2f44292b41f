#![no_std]

pub mod clock;
pub mod counter;
pub mod ttl;

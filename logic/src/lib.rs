#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod errors;
pub mod hal_ext;
pub mod implementations;
pub mod services;

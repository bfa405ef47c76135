use std::time::Instant;

use mimalloc::MiMalloc;
use once_cell::sync::Lazy;

pub mod aggregate;
pub mod config;
pub mod generator;
pub mod io;
pub mod surface;
pub mod sweep;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc; //more efficient allocator

pub static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

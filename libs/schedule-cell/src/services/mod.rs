pub mod controller;
pub mod filter;
pub mod projection;
pub mod stats;

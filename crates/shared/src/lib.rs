pub mod geo;
mod mail;

pub use mail::*;

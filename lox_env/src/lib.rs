#![deny(clippy::all)]

pub mod stdio;

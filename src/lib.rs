//! Hosting shim for the PagePilot engine: argument parsing, telemetry
//! setup, a seeded in-memory demo page and the progress printers the
//! `pagepilot` binary wires together.

pub mod cli;

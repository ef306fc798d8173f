//! Stop departures board server.
//!
//! Polls the Gdańsk public-transit departures API for a fixed set of
//! stops and renders the result as an auto-refreshing HTML page.
//! Two front ends share this library: a plain-text board and a table
//! board with snapshot-to-file support.

pub mod board;
pub mod config;
pub mod snapshot;
pub mod web;
pub mod ztm;

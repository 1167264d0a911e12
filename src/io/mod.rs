//! Route input

pub mod route_reader;

pub use route_reader::RouteReader;

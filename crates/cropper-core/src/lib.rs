pub mod config;
pub mod consts;
pub mod error;
pub mod export;
pub mod gate;
pub mod geometry;
pub mod io;
pub mod resample;
pub mod selection;
pub mod session;
pub mod source;
pub mod transform;

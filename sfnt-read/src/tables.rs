//! The various font tables

pub mod cmap;
pub mod glyf;
pub mod head;
pub mod hvhea;
pub mod hvmtx;
pub mod loca;
pub mod maxp;

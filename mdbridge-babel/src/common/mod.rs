//! Line and inline passes shared by both transcoding directions.

pub mod blocks;
pub mod entities;
pub mod indent;
pub mod links;
pub mod percent;
pub mod resolve;

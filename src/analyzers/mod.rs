//! Case data aggregation.
//!
//! Turns normalized case records into the date- and region-keyed count
//! tables the charts read, the derived series built on top of them, and the
//! region lookup plus severity ladder the map colors with.

pub mod aggregate;
pub mod regions;
pub mod series;
pub mod severity;
pub mod types;
pub mod utility;

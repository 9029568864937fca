//! Common imports for fieldconfigs users
//!
//! ```rust
//! use fieldconfigs::prelude::*;
//! ```

pub use crate::{
    // Cell and table types
    CellValue,
    ConfigTable,
    // Conversion
    ConversionReport,
    Converter,
    DuplicateNames,
    // Error types
    Error,
    LoadOptions,
    Locations,
    Result,
    Settings,
    SheetSelector,
    TransposedTable,
};

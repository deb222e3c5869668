#![deny(unsafe_code)]

pub mod cell;
pub mod name;
pub mod table;

pub use cell::{Cell, format_numeric};
pub use name::{canonical_name, canonical_names};
pub use table::{Column, ColumnKind, Table};

//! Document parsing utilities
//!
//! This module contains the conversions from the docx-rs object model and
//! the raw package parts into our document model.

pub(crate) mod properties;
pub(crate) mod relationships;
pub(crate) mod table;
pub(crate) mod text;

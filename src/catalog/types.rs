//! Core types for the catalog view state.
//!
//! This module contains the sort specification types and the [`Event`]
//! enum consumed by [`Model::dispatch`](super::Model::dispatch).

use std::fmt;
use std::str::FromStr;

/// Product attribute the view can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// Numeric comparison of `price`.
    Price,
    /// Case-insensitive comparison of `title`.
    Title,
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    Descending,
}

/// A (field, order) pair selecting how the view is sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortSpec {
    /// Attribute to sort by.
    pub field: SortField,
    /// Sort direction.
    pub order: SortOrder,
}

impl SortSpec {
    /// Creates a sort spec.
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Price => write!(f, "price"),
            SortField::Title => write!(f, "title"),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(SortField::Price),
            "title" | "name" => Ok(SortField::Title),
            other => Err(format!("unknown sort field: {other}")),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// A user interaction that mutates the view state.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// New raw search box contents.
    Search(String),
    /// New page size.
    SetPageSize(usize),
    /// Sort by the given field and order.
    Sort(SortField, SortOrder),
    /// Navigate to the given 1-indexed page.
    GoToPage(usize),
}

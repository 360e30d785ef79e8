#![doc(html_root_url = "https://docs.rs/catalog-view/")]

//! # catalog-view
//!
//! A product catalog viewer built on [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//! The product list is fetched once from a JSON endpoint; search, sorting and
//! pagination then run entirely on the client.
//!
//! ## Overview
//!
//! State lives in an explicit [`catalog::Model`]: the immutable source list,
//! the derived view (search and sort applied) and a pagination cursor. Input
//! is translated into [`catalog::Event`]s by [`handlers::InputHandlers`] and
//! applied with [`catalog::Model::dispatch`]. Rendering is a pure projection
//! of the state into a [`render::ViewModel`], formatted by one of two
//! surfaces:
//!
//! - [`render::html`]: markup fragments and a standalone page
//! - [`render::terminal`]: lipgloss-styled text, driven by the
//!   interactive [`app::CatalogApp`]
//!
//! ## Quick Start
//!
//! ```rust
//! use catalog_view::prelude::*;
//!
//! let products = vec![
//!     Product::new(1, "Smartphone X", 699.0),
//!     Product::new(2, "Laptop", 1299.0),
//!     Product::new(3, "Phone charger", 25.0),
//! ];
//! let mut catalog = Catalog::new(products, 10);
//! let mut handlers = InputHandlers::default();
//!
//! handlers.on_search(&mut catalog, "phone");
//! handlers.on_sort(&mut catalog, SortControl::PriceAsc);
//!
//! let view = ViewModel::from_state(&catalog);
//! assert_eq!(view.caption, "Showing 1-2 of 2 products");
//! assert_eq!(view.rows[0].title, "Phone charger");
//! ```

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod key;
pub mod logging;
pub mod paginator;
pub mod product;
pub mod render;
pub mod repository;

pub use catalog::Model as Catalog;
pub use error::{ConfigError, RepositoryError};
pub use paginator::Model as Paginator;
pub use product::Product;

/// Common imports for working with the catalog.
pub mod prelude {
    pub use crate::app::{CatalogApp, ProductsLoadedMsg};
    pub use crate::catalog::{dispatch, Event, Model as Catalog, SortField, SortOrder, SortSpec};
    pub use crate::config::Settings;
    pub use crate::handlers::{InitialInput, InputHandlers, SortControl};
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::paginator::{Model as Paginator, PageWindow};
    pub use crate::product::{Category, Product};
    pub use crate::render::{PageControl, PaginationStrip, ProductRow, ViewModel};
    pub use crate::repository::{
        load_products, HttpProductRepository, ProductRepository, StaticProductRepository,
    };
}

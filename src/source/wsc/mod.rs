//! World Spider Catalog data source
//!
//! Scrapes the family listing and per-family genus listings from wsc.nmbe.ch.

mod cache;
mod catalog;
mod fetcher;
mod parser;

pub(crate) use catalog::{CatalogOptions, WscCatalog};

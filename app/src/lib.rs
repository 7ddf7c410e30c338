#![recursion_limit = "256"]

pub mod address;
pub mod api;
pub mod cascade;
pub mod components;
pub mod components_impl;
pub mod error;
pub mod summary;

#[cfg(feature = "ssr")]
pub mod api_impl;
#[cfg(feature = "ssr")]
pub mod cache;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod db;
#[cfg(feature = "ssr")]
pub mod entities;
#[cfg(feature = "ssr")]
pub mod repositories;

//! Horizontally paged onboarding carousel rendered with raylib.
//!
//! A single scroll offset drives every animated property: slide image scale,
//! text slide-in and fade, background accent circles and the category ticker.

pub mod accent;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod interpolate;
pub mod layer;
pub mod logo;
pub mod pager;
pub mod pagination;
pub mod screen;
pub mod scroll;
pub mod slide;
pub mod texture_loader;
pub mod ticker;

//! Scroll-driven parallax: vertical wheel input scrolls the page's main region
//! horizontally and tagged elements drift relative to the viewport center.

pub mod controller;
pub mod dom;
pub mod geometry;

pub use dom::activate;

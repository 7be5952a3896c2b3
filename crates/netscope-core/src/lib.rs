//! Netscope Core Types and Definitions
//!
//! This crate provides the foundational types for Netscope topology diagrams.
//! It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Layered SVG drawing primitives ([`draw`] module)
//! - **Topology**: The monitored-component model ([`topology`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod topology;

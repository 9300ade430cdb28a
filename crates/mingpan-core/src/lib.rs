//! Mingpan Core Types and Definitions
//!
//! This crate provides the foundational value types shared by every stage of
//! report card rendering. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types in device pixels ([`geometry`] module)
//! - **Draw**: Font, stroke and shadow definitions used by the drawing context
//!   ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;

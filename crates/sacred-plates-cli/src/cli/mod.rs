//! CLI command implementations.
//!
//! This module contains the implementations for the various CLI subcommands:
//! - `plates` - List catalog plates
//! - `render` - Render one plate as SVG (optionally PNG)
//! - `lineset` - Export a plate's 3-D curves as JSON
//! - `sheet` - Contact sheet of every plate

pub mod common;
pub mod lineset;
pub mod plates;
pub mod render;
pub mod sheet;

//! # iro-render
//!
//! Turns enriched colors into static site assets.
//!
//! - [`layout`] - where the labels go on a card, given the name lengths
//! - [`svg`] - writes one standalone SVG card per color
//! - [`index`] - writes the Markdown index, generating cards on the way
//!
//! ```text
//! nippon_colors.json --> index::generate_index --+--> images/<romanji>.svg
//!                                                +--> README.md
//! ```

#![warn(missing_docs)]

mod error;
pub mod index;
pub mod layout;
pub mod svg;

pub use error::{RenderError, RenderResult};
pub use index::{generate_index, markdown_line, write_index, IndexOptions, DEFAULT_BASE_URL, DEFAULT_IMAGES_DIR};
pub use layout::{CardLayout, Label, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use svg::{render_card, write_card_to, ImageGenerator};

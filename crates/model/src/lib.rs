//! QReatify Model
//!
//! Defines the data contracts shared by the renderer, the session layer,
//! and both front-ends:
//! - **Color:** validated `#rrggbb` values and the filtered color text box
//! - **Request:** the ephemeral generation request rebuilt on every render
//! - **Logo:** uploaded images carried as self-contained data URIs
//! - **Theme:** the persisted light/dark/system preference
//! - **Filename:** export file naming

pub mod color;
pub mod filename;
pub mod logo;
pub mod request;
pub mod theme;

pub use color::*;
pub use filename::*;
pub use logo::*;
pub use request::*;
pub use theme::*;

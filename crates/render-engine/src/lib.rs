//! QReatify Render Engine
//!
//! Turns a generation request into a PNG file.
//!
//! # Pipeline Architecture
//!
//! ```text
//! payload + colors ──► QrRenderer ──► QR bitmap (size × size)
//!                                          │
//! logo (data URI) ──► decode ──────────────┤
//!                                          ├── composite (centered overlay)
//!                                          │
//!                                          ▼
//!                                     PNG bytes ──► <stem>_qr.png
//! ```
//!
//! [`compositor`] is pure and needs no drawing surface; [`export`] is the
//! thin async shell that decodes the logo and writes the file.

pub mod compositor;
pub mod export;
pub mod qr;

pub use compositor::*;
pub use export::*;
pub use qr::*;

//! QReatify Session
//!
//! State owned by a running front-end:
//! - [`theme::ThemeController`] resolves the light/dark/system preference
//!   and follows the environment's color scheme while in system mode
//! - [`preference`] persists the preference
//! - [`signal::ColorSchemeSignal`] is the injectable environment signal
//! - [`logo::LogoSlot`] keeps the newest logo upload and drops stale reads
//! - [`generator::GeneratorState`] is the generator form itself

pub mod generator;
pub mod logo;
pub mod preference;
pub mod signal;
pub mod theme;

pub use generator::*;
pub use logo::*;
pub use preference::*;
pub use signal::*;
pub use theme::*;

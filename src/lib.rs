//! termreg - Convert terminal color themes into Windows console registry
//! imports.
//!
//! The library turns a theme byte stream (a Gogh shell-script export or a
//! Konsole colorscheme) into a 16-slot console color table and renders it as
//! a `.reg` file targeting `HKEY_CURRENT_USER\Console`. The binary wires the
//! pipeline to files, URLs, and stdout.

pub mod codec;
pub mod color_table;
pub mod error;
pub mod extract;
pub mod logging;
pub mod registry;
pub mod source;

//! Renders a [`ColorTable`] into the Windows registry import format.
//!
//! The layout is fixed: the `REGEDIT` header, the `HKEY_CURRENT_USER\Console`
//! section, the sixteen `ColorTableNN` values in two groups of eight, then
//! `ScreenColors` and `PopupColors`. Unset slots render as an empty value
//! after `dword:`, deliberately not zero-filled.

use std::fmt::Write;

use crate::color_table::{ColorTable, SLOT_COUNT};

const HEADER: &str = "Windows Registry Editor Version 5.00\n\
                      ; generated file\n\
                      [HKEY_CURRENT_USER\\Console]\n";

/// Render the registry import text for a populated color table.
pub fn render(table: &ColorTable) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str(HEADER);

    for index in 0..SLOT_COUNT {
        if index == 8 {
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "\"{}\"=dword:{}",
            ColorTable::field_key(index),
            table.slot(index).unwrap_or("")
        );
    }

    let _ = write!(
        out,
        "\n\"ScreenColors\"=dword:{}\n\"PopupColors\"=dword:{}",
        table.screen_colors, table.popup_colors
    );
    out
}

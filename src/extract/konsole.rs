//! Section/key parser for Konsole colorscheme exports.
//!
//! A Konsole scheme holds sections `Color0`..`Color7` plus their `Intense`
//! variants, and `Foreground`/`Background`, each with a `Color` key carrying
//! a decimal `R,G,B` triple. Unlike the Gogh format, a missing section or
//! key fails the whole theme.

use std::collections::HashMap;
use std::io::BufRead;

use crate::codec::{dword_from_hex, pad_left};
use crate::color_table::{ColorTable, SLOT_COUNT};
use crate::error::{ExtractError, Result};

use super::Extract;

pub struct KonsoleExtractor;

impl Extract for KonsoleExtractor {
    fn extract(
        &self,
        input: &mut dyn BufRead,
        fg_index: usize,
        bg_index: usize,
    ) -> Result<ColorTable> {
        let doc = IniDocument::parse(input)?;
        let mut table = ColorTable::new();

        for i in 0..8 {
            for (suffix, offset) in [("", 0), ("Intense", 8)] {
                let section = format!("Color{i}{suffix}");
                let triple = doc.value(&section, "Color")?;
                table.set_slot(i + offset, rgb_dword(triple));
            }
        }

        // Foreground/background are written straight into their slots; this
        // format never tries to resolve them against the indexed palette.
        table.set_slot(fg_index, rgb_dword(doc.value("Foreground", "Color")?));
        table.set_slot(bg_index, rgb_dword(doc.value("Background", "Color")?));

        let fg_digit = format!("{:x}", fg_index % SLOT_COUNT);
        let bg_digit = format!("{:x}", bg_index % SLOT_COUNT);
        table.screen_colors = pad_left(&format!("{bg_digit}{fg_digit}"), '0', 8);
        table.popup_colors = pad_left(&format!("{fg_digit}{bg_digit}"), '0', 8);

        Ok(table)
    }
}

/// Convert a decimal `R,G,B` triple into the registry dword form.
///
/// Missing or malformed components default to 0; out-of-range values wrap to
/// a byte, matching the upstream converter's integer truncation.
fn rgb_dword(triple: &str) -> String {
    let mut parts = triple.split(',');
    let mut component = || {
        parts
            .next()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(0) as u8
    };
    let rgb = [component(), component(), component()];
    dword_from_hex(&hex::encode(rgb))
}

/// Minimal forward-only INI reader: `[Section]` headers and `key=value`
/// lines. Later duplicates win; comments and anything else are ignored.
struct IniDocument {
    sections: HashMap<String, HashMap<String, String>>,
}

impl IniDocument {
    fn parse(input: &mut dyn BufRead) -> Result<Self> {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current: Option<String> = None;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|r| r.strip_suffix(']')) {
                let name = name.trim().to_string();
                sections.entry(name.clone()).or_default();
                current = Some(name);
                continue;
            }
            if let (Some(section), Some((key, value))) = (&current, line.split_once('=')) {
                sections
                    .entry(section.clone())
                    .or_default()
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Ok(IniDocument { sections })
    }

    fn value(&self, section: &str, key: &str) -> Result<&str> {
        let entries = self
            .sections
            .get(section)
            .ok_or_else(|| ExtractError::MissingSection(section.to_string()))?;
        entries
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ExtractError::MissingKey {
                section: section.to_string(),
                key: key.to_string(),
            })
    }
}

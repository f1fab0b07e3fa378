//! Line-oriented parser for Gogh shell-script theme exports.
//!
//! A Gogh theme is a shell script assigning `COLOR_01`..`COLOR_16`,
//! `FOREGROUND_COLOR`, and `BACKGROUND_COLOR` variables. The parser makes a
//! single forward pass over the lines; anything that matches none of the
//! three patterns is skipped.

use std::io::BufRead;

use regex::Regex;
use tracing::debug;

use crate::codec::{dword_from_hex, pad_left};
use crate::color_table::{ColorTable, SLOT_COUNT};
use crate::error::Result;

use super::Extract;

pub struct GoghExtractor;

impl Extract for GoghExtractor {
    fn extract(
        &self,
        input: &mut dyn BufRead,
        fg_index: usize,
        bg_index: usize,
    ) -> Result<ColorTable> {
        let color_re = Regex::new(r##"COLOR_(\d{2})="#(\w{6})"##).expect("invalid color pattern");
        let fg_re =
            Regex::new(r##"FOREGROUND_COLOR="#(\w{6})""##).expect("invalid foreground pattern");
        let bg_re =
            Regex::new(r##"BACKGROUND_COLOR="#(\w{6})""##).expect("invalid background pattern");

        let mut table = ColorTable::new();
        let mut fg_raw: Option<String> = None;
        let mut bg_raw: Option<String> = None;

        for line in input.lines() {
            let line = line?;
            if let Some(caps) = color_re.captures(&line) {
                // The source index is 1-based; COLOR_01 fills slot 0.
                let source_index: usize = caps[1].parse().unwrap_or(0);
                let Some(index) = source_index.checked_sub(1) else {
                    debug!(line = %line, "skipping zero-indexed color line");
                    continue;
                };
                table.set_slot(index, dword_from_hex(&caps[2]));
            }
            if let Some(caps) = fg_re.captures(&line) {
                fg_raw = Some(caps[1].to_string());
            }
            if let Some(caps) = bg_re.captures(&line) {
                bg_raw = Some(caps[1].to_string());
            }
        }

        // Foreground: look for an existing slot holding the captured value.
        // The comparison is raw source hex against stored dwords, faithful to
        // the upstream converter; in practice it only matches degenerate
        // themes, and the fallback below carries the real work.
        let mut fg_digit: Option<String> = None;
        if let Some(raw) = &fg_raw {
            for i in 0..SLOT_COUNT {
                if table.slot(i) == Some(raw.as_str()) {
                    fg_digit = Some(format!("{:x}", i));
                    break;
                }
            }
        }
        let fg_digit = match fg_digit {
            Some(digit) => digit,
            None => {
                let dword = fg_raw.as_deref().map(dword_from_hex).unwrap_or_default();
                debug!(slot = fg_index, dword = %dword, "foreground falls back to fixed slot");
                table.set_slot(fg_index, dword);
                format!("{:x}", fg_index % SLOT_COUNT)
            }
        };

        // Background: upstream searches existing slots under a key spelling
        // that is never written, so the match branch is unreachable there.
        // Kept observable behavior: background always lands in the fallback
        // slot.
        let bg_dword = bg_raw.as_deref().map(dword_from_hex).unwrap_or_default();
        table.set_slot(bg_index, bg_dword);
        let bg_digit = format!("{:x}", bg_index % SLOT_COUNT);

        table.screen_colors = pad_left(&format!("{bg_digit}{fg_digit}"), '0', 8);
        table.popup_colors = pad_left(&format!("{fg_digit}{bg_digit}"), '0', 8);

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn extract(input: &str) -> ColorTable {
        GoghExtractor
            .extract(&mut Cursor::new(input), 1, 4)
            .unwrap()
    }

    #[test]
    fn indexed_color_line_fills_zero_based_slot() {
        let table = extract("COLOR_01=\"#112233\n");
        assert_eq!(table.slot(0), Some("00332211"));
        assert_eq!(table.slot(1), Some("")); // fg fallback, nothing captured
    }

    #[test]
    fn unrecognized_lines_are_skipped() {
        let table = extract("#!/bin/bash\nexport TERM=xterm\nCOLOR_03=\"#aabbcc\n");
        assert_eq!(table.slot(2), Some("00CCBBAA"));
        assert_eq!(table.slot(5), None);
    }

    #[test]
    fn missing_foreground_falls_back_to_default_slot_with_empty_value() {
        let table = extract("COLOR_01=\"#112233\n");
        assert_eq!(table.slot(1), Some(""));
        // bg index 4, fg index 1, packed bg-then-fg
        assert_eq!(table.screen_colors, "00000041");
    }

    #[test]
    fn foreground_without_matching_slot_is_written_to_fallback_slot() {
        let table = extract("FOREGROUND_COLOR=\"#AABBCC\"\n");
        assert_eq!(table.slot(1), Some("00CCBBAA"));
        assert_eq!(table.screen_colors, "00000041");
        assert_eq!(table.popup_colors, "00000014");
    }

    #[test]
    fn background_always_takes_the_fallback_slot() {
        // Even when a slot was filled from the same source color, background
        // resolution lands in the fallback slot.
        let input = "COLOR_01=\"#112233\nBACKGROUND_COLOR=\"#112233\"\n";
        let table = extract(input);
        assert_eq!(table.slot(4), Some("00332211"));
        assert_eq!(table.screen_colors, "00000041");
    }

    #[test]
    fn fallback_indices_wrap_into_single_nibbles() {
        // Slot writes and packed nibbles agree for out-of-range indices:
        // 17 wraps to slot 1 and packs as nibble 1, never as "11".
        let mut input = Cursor::new("FOREGROUND_COLOR=\"#AABBCC\"\n");
        let table = GoghExtractor.extract(&mut input, 17, 4).unwrap();
        assert_eq!(table.slot(1), Some("00CCBBAA"));
        assert_eq!(table.screen_colors, "00000041");
        assert_eq!(table.popup_colors, "00000014");
    }

    #[test]
    fn last_foreground_line_wins() {
        let input = "FOREGROUND_COLOR=\"#000000\"\nFOREGROUND_COLOR=\"#AABBCC\"\n";
        let table = extract(input);
        assert_eq!(table.slot(1), Some("00CCBBAA"));
    }

    #[test]
    fn full_scenario_resolves_both_fallbacks() {
        let input = concat!(
            "FOREGROUND_COLOR=\"#AABBCC\"\n",
            "BACKGROUND_COLOR=\"#112233\"\n",
            "COLOR_01=\"#000000\n",
        );
        let table = extract(input);
        assert_eq!(table.slot(0), Some("00000000"));
        assert_eq!(table.slot(1), Some("00CCBBAA"));
        assert_eq!(table.slot(4), Some("00332211"));
        assert_eq!(table.screen_colors, "00000041");
        assert_eq!(table.popup_colors, "00000014");
    }

    #[test]
    fn sixteen_colors_fill_every_slot() {
        let mut input = String::new();
        for i in 1..=16 {
            input.push_str(&format!("COLOR_{:02}=\"#0000{:02x}\n", i, i));
        }
        let table = extract(&input);
        for i in 0..16 {
            if i == 1 || i == 4 {
                // No fg/bg lines captured, so the fallbacks overwrite these
                // slots with empty values after the scan.
                assert_eq!(table.slot(i), Some(""));
            } else {
                assert_eq!(table.slot(i), Some(format!("00{:02X}0000", i + 1).as_str()));
            }
        }
    }
}

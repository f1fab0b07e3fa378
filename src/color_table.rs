//! The 16-slot console color table populated by the extractors and rendered
//! by the registry serializer.
//!
//! The registry addresses slots by decimal two-digit field names
//! (`ColorTable00`..`ColorTable15`); internally this is a plain indexed
//! array. One table is built per conversion run, filled by exactly one
//! extractor call, and read once by the serializer.

/// Number of indexed color slots in the console color table.
pub const SLOT_COUNT: usize = 16;

/// A populated (or partially populated) console color table.
///
/// Each slot holds an 8-hex-digit dword color string, or `None` when the
/// source theme never assigned it. `screen_colors` and `popup_colors` pack a
/// background-slot nibble and a foreground-slot nibble into padded 8-digit
/// fields (the two differ in nibble order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorTable {
    slots: [Option<String>; SLOT_COUNT],
    pub screen_colors: String,
    pub popup_colors: String,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a dword color string at `index`. Indices are taken modulo 16.
    pub fn set_slot(&mut self, index: usize, dword: String) {
        self.slots[index % SLOT_COUNT] = Some(dword);
    }

    /// The dword stored at `index`, if any. Indices are taken modulo 16.
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots[index % SLOT_COUNT].as_deref()
    }

    /// Registry field name for a slot: `ColorTable00`..`ColorTable15`
    /// (decimal two-digit numbering, not hex).
    pub fn field_key(index: usize) -> String {
        format!("ColorTable{:02}", index % SLOT_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_start_unset() {
        let table = ColorTable::new();
        for i in 0..SLOT_COUNT {
            assert_eq!(table.slot(i), None);
        }
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut table = ColorTable::new();
        table.set_slot(3, "00332211".to_string());
        assert_eq!(table.slot(3), Some("00332211"));
        assert_eq!(table.slot(4), None);
    }

    #[test]
    fn indices_wrap_modulo_16() {
        let mut table = ColorTable::new();
        table.set_slot(16, "00000001".to_string());
        assert_eq!(table.slot(0), Some("00000001"));
        assert_eq!(table.slot(16), Some("00000001"));
    }

    #[test]
    fn field_keys_use_two_digit_decimal_numbering() {
        assert_eq!(ColorTable::field_key(0), "ColorTable00");
        assert_eq!(ColorTable::field_key(9), "ColorTable09");
        // Decimal, not hex: slot 15 is ColorTable15, never ColorTable0F.
        assert_eq!(ColorTable::field_key(15), "ColorTable15");
    }
}

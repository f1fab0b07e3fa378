//! Conversion between RGB hex text and the registry dword color format.
//!
//! Windows console registry values encode a 24-bit color as an 8-hex-digit
//! little-endian dword: `00BBGGRR`. Theme sources ship colors as `RRGGBB`,
//! so the byte pairs get reversed and a zero high byte prepended.

/// Convert a 6-hex-digit `RRGGBB` string into the `00BBGGRR` dword form,
/// uppercased.
///
/// Contract: `hex6` must hold at least 6 hex digits. Shorter input is a
/// caller bug and panics on slicing; callers in this crate only pass
/// regex-captured 6-digit strings or `hex::encode` output.
pub fn dword_from_hex(hex6: &str) -> String {
    let dword = format!("00{}{}{}", &hex6[4..6], &hex6[2..4], &hex6[0..2]);
    dword.to_uppercase()
}

/// Left-pad `value` with `pad` up to `width`, then keep exactly the first
/// `width` characters.
///
/// Input longer than `width` is silently right-truncated: `pad_left("abcde",
/// '0', 4)` is `"abcd"`. Callers rely on that for the packed index fields.
pub fn pad_left(value: &str, pad: char, width: usize) -> String {
    let mut out = String::with_capacity(width.max(value.len()));
    for _ in value.len()..width {
        out.push(pad);
    }
    out.push_str(value);
    out.truncate(width);
    out
}

//! Tests for palette colour parsing and formatting

#[cfg(test)]
mod tests {
    use texsynth::params::color::Rgb;

    // Tests packed literal unpacking
    // Verified by swapping red and blue shifts
    #[test]
    fn test_from_u32_channel_order() {
        assert_eq!(Rgb::from_u32(0x8B_4513), Rgb([0x8B, 0x45, 0x13]));
    }

    // Tests hex parsing with and without leading hash
    // Verified by not trimming the hash
    #[test]
    fn test_from_hex_accepts_optional_hash() {
        assert_eq!(Rgb::from_hex("#D2691E"), Rgb([0xD2, 0x69, 0x1E]));
        assert_eq!(Rgb::from_hex("d2691e"), Rgb([0xD2, 0x69, 0x1E]));
    }

    // Tests invalid channels read as zero without affecting the others
    // Verified by failing the whole colour on one bad channel
    #[test]
    fn test_from_hex_invalid_channel_is_zero() {
        assert_eq!(Rgb::from_hex("#zz8000"), Rgb([0, 0x80, 0]));
        assert_eq!(Rgb::from_hex("#12"), Rgb([0x12, 0, 0]));
        assert_eq!(Rgb::from_hex(""), Rgb([0, 0, 0]));
    }

    // Tests partly valid channels keep their leading hex digits
    // Verified by zeroing any channel containing a non-hex character
    #[test]
    fn test_from_hex_leading_digits() {
        assert_eq!(Rgb::from_hex("#1G2233"), Rgb([0x01, 0x22, 0x33]));
        assert_eq!(Rgb::from_hex("#FFF"), Rgb([0xFF, 0x0F, 0]));
        assert_eq!(Rgb::from_hex("#12345"), Rgb([0x12, 0x34, 0x05]));
    }

    // Tests non-ASCII input is split by character without panicking
    // Verified by slicing on byte offsets
    #[test]
    fn test_from_hex_non_ascii() {
        assert_eq!(Rgb::from_hex("#é12345"), Rgb([0, 0x23, 0x45]));
    }

    // Tests display uses upper-case hex with hash
    // Verified by dropping zero padding
    #[test]
    fn test_display_round_trip_format() {
        assert_eq!(Rgb([0x06, 0x64, 0x00]).to_string(), "#066400");
    }

    // Tests conversion to opaque pixel
    // Verified by leaving alpha at zero
    #[test]
    fn test_to_rgba_is_opaque() {
        assert_eq!(Rgb([1, 2, 3]).to_rgba().0, [1, 2, 3, 255]);
    }
}

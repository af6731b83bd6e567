use crate::domain::model::NumberBase;

/// Renders `value` in `base` with no padding. Hex digits are uppercase and
/// negative values are written as their 64-bit two's complement, so `-1`
/// becomes `FFFFFFFFFFFFFFFF`. Decimal keeps the sign.
pub fn render(value: i64, base: NumberBase) -> String {
    match base {
        NumberBase::Decimal => value.to_string(),
        NumberBase::Hexadecimal => format!("{:X}", value as u64),
    }
}

/// Renders `value` left-padded with `'0'` to `width` characters.
///
/// Never truncates: a representation longer than `width` is returned whole.
pub fn format_padded(value: i64, width: usize, base: NumberBase) -> String {
    let digits = render(value, base);
    match digits.strip_prefix('-') {
        Some(magnitude) => format!("-{:0>width$}", magnitude, width = width.saturating_sub(1)),
        None => format!("{:0>width$}", digits, width = width),
    }
}

/// Parses `text` as an integer in `base`. Hex input is case-insensitive; an
/// optional sign is accepted, surrounding whitespace is not.
pub fn parse(text: &str, base: NumberBase) -> Option<i64> {
    i64::from_str_radix(text, base.radix()).ok()
}

/// `radix^width`, or `None` when it does not fit in an `i64`.
pub fn upper_bound(base: NumberBase, width: u32) -> Option<i64> {
    i64::from(base.radix()).checked_pow(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_padded_pads_with_zeros() {
        assert_eq!(format_padded(7, 3, NumberBase::Decimal), "007");
        assert_eq!(format_padded(255, 4, NumberBase::Hexadecimal), "00FF");
        assert_eq!(format_padded(0, 1, NumberBase::Decimal), "0");
    }

    #[test]
    fn test_format_padded_never_truncates() {
        assert_eq!(format_padded(12345, 2, NumberBase::Decimal), "12345");
        assert_eq!(format_padded(0xABC, 1, NumberBase::Hexadecimal), "ABC");
    }

    #[test]
    fn test_render_is_unpadded_uppercase() {
        assert_eq!(render(0, NumberBase::Hexadecimal), "0");
        assert_eq!(render(48879, NumberBase::Hexadecimal), "BEEF");
        assert_eq!(render(-255, NumberBase::Hexadecimal), "FFFFFFFFFFFFFF01");
        assert_eq!(render(-1, NumberBase::Hexadecimal), "FFFFFFFFFFFFFFFF");
        assert_eq!(render(-42, NumberBase::Decimal), "-42");
        assert_eq!(render(i64::MIN, NumberBase::Decimal), i64::MIN.to_string());
    }

    #[test]
    fn test_parse_is_case_insensitive_for_hex() {
        assert_eq!(parse("ff", NumberBase::Hexadecimal), Some(255));
        assert_eq!(parse("FF", NumberBase::Hexadecimal), Some(255));
        assert_eq!(parse("FF", NumberBase::Decimal), None);
        assert_eq!(parse("", NumberBase::Decimal), None);
        assert_eq!(parse(" 12", NumberBase::Decimal), None);
        assert_eq!(parse("99999999999999999999", NumberBase::Decimal), None);
    }

    #[test]
    fn test_upper_bound_limits() {
        assert_eq!(upper_bound(NumberBase::Decimal, 3), Some(1000));
        assert_eq!(upper_bound(NumberBase::Decimal, 18), Some(1_000_000_000_000_000_000));
        assert_eq!(upper_bound(NumberBase::Decimal, 19), None);
        assert_eq!(upper_bound(NumberBase::Hexadecimal, 15), Some(1 << 60));
        assert_eq!(upper_bound(NumberBase::Hexadecimal, 16), None);
    }
}

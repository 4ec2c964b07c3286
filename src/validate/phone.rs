// ABOUTME: Phone number and segment-prefix syntax checks
//
// A full number is exactly 11 digits. A segment prefix is 3-7 digits, starts
// with 1, and has 3-9 as its second digit, matching national mobile prefix
// allocation.

/// True when `number` is a syntactically valid 11-digit phone number
pub fn is_valid_number(number: &str) -> bool {
    number.len() == 11 && number.bytes().all(|b| b.is_ascii_digit())
}

/// True when `segment` is a syntactically valid generation prefix
pub fn is_valid_segment(segment: &str) -> bool {
    if !(3..=7).contains(&segment.len()) {
        return false;
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let bytes = segment.as_bytes();
    bytes[0] == b'1' && (b'3'..=b'9').contains(&bytes[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(is_valid_number("13800000000"));
        assert!(is_valid_number("19999999999"));
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(!is_valid_number("1380000000")); // 10 digits
        assert!(!is_valid_number("138000000000")); // 12 digits
        assert!(!is_valid_number("1380000000a"));
        assert!(!is_valid_number("138 0000000"));
        assert!(!is_valid_number(""));
    }

    #[test]
    fn test_valid_segments() {
        assert!(is_valid_segment("138"));
        assert!(is_valid_segment("1380000")); // 7 digits max
        assert!(is_valid_segment("199"));
    }

    #[test]
    fn test_invalid_segments() {
        assert!(!is_valid_segment("13")); // too short
        assert!(!is_valid_segment("13800000")); // too long
        assert!(!is_valid_segment("238")); // must start with 1
        assert!(!is_valid_segment("120")); // second digit below 3
        assert!(!is_valid_segment("1a8"));
    }
}

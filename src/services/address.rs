/// Check whether a string is a syntactically valid account address:
/// a `0x` prefix followed by exactly 40 hex digits, case-insensitive.
/// Pure and total; any malformed input returns false.
pub fn is_valid_address(s: &str) -> bool {
    match s.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_addresses() {
        assert!(is_valid_address(
            "0x742d35Cc6634C0532925a3b8D4bC5DbFADbE7c72"
        ));
        assert!(is_valid_address(
            "0x0000000000000000000000000000000000000000"
        ));
        assert!(is_valid_address(
            "0xABCDEFabcdef0123456789ABCDEFabcdef012345"
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid_address("0x742d35Cc6634C0532925a3b8D4bC5DbFADbE7c7"));
        assert!(!is_valid_address(
            "0x742d35Cc6634C0532925a3b8D4bC5DbFADbE7c721"
        ));
        assert!(!is_valid_address("0x"));
        assert!(!is_valid_address(""));
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(!is_valid_address(
            "742d35Cc6634C0532925a3b8D4bC5DbFADbE7c7212"
        ));
        assert!(!is_valid_address("not-an-address"));
    }

    #[test]
    fn rejects_non_hex_characters() {
        // 'H' is not a hex digit, even though the length checks out
        assert!(!is_valid_address(
            "0x8ba1f109551bD432803012645Hac136c91DCF43F"
        ));
        assert!(!is_valid_address(
            "0x742d35Cc6634C0532925a3b8D4bC5DbFADbE7c7g"
        ));
    }
}

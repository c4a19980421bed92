//! Behavioral tests for the boolean RUT validator
use rut_validator::{is_valid_rut, Rut};

/// Candidates with every possible check character appended
fn with_every_check_char(body: &str) -> Vec<String> {
    "0123456789Kk"
        .chars()
        .map(|dv| format!("{}-{}", body, dv))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        assert!(is_valid_rut("12345678-5"));
        assert!(!is_valid_rut("12345678-9"));
    }

    #[test]
    fn test_k_is_case_insensitive() {
        assert_eq!(is_valid_rut("7896683-K"), is_valid_rut("7896683-k"));
        assert!(!is_valid_rut("7896683-K"));
        assert!(is_valid_rut("7896683-1"));

        assert!(is_valid_rut("6000000-K"));
        assert!(is_valid_rut("6000000-k"));
    }

    #[test]
    fn test_idempotent() {
        for input in ["12345678-5", "12345678-9", "garbage", ""] {
            assert_eq!(is_valid_rut(input), is_valid_rut(input));
        }
    }

    #[test]
    fn test_body_length_boundaries() {
        // 7 and 8 digit bodies reach the checksum
        assert!(is_valid_rut("1234567-4"));
        assert!(is_valid_rut("12345678-5"));

        // 6 and 9 digit bodies fail regardless of the check character
        for candidate in with_every_check_char("123456")
            .into_iter()
            .chain(with_every_check_char("123456789"))
        {
            assert!(!is_valid_rut(&candidate), "{} must be rejected", candidate);
        }
    }

    #[test]
    fn test_remainder_eleven_accepts_only_zero() {
        // Weighted sum of 10000004 is 11
        let accepted: Vec<String> = with_every_check_char("10000004")
            .into_iter()
            .filter(|c| is_valid_rut(c))
            .collect();
        assert_eq!(accepted, vec!["10000004-0".to_string()]);
    }

    #[test]
    fn test_remainder_ten_accepts_only_k() {
        // Weighted sum of 10000013 is 12
        let accepted: Vec<String> = with_every_check_char("10000013")
            .into_iter()
            .filter(|c| is_valid_rut(c))
            .collect();
        assert_eq!(
            accepted,
            vec!["10000013-K".to_string(), "10000013-k".to_string()]
        );
    }

    #[test]
    fn test_exactly_one_check_char_per_body() {
        for body in ["1000000", "9999999", "11111111", "76086428", "00000000"] {
            let accepted: Vec<String> = with_every_check_char(body)
                .into_iter()
                .filter(|c| is_valid_rut(c))
                .filter(|c| !c.ends_with('k'))
                .collect();
            assert_eq!(accepted.len(), 1, "body {} accepted {:?}", body, accepted);
        }
    }

    #[test]
    fn test_leading_zeros() {
        assert!(is_valid_rut("00000000-0"));
        assert!(is_valid_rut("01000000-9"));
        assert!(is_valid_rut("1000000-9"));
    }

    #[test]
    fn test_malformed_inputs_are_false() {
        for input in [
            "",
            "-",
            "12345678",
            "12345678-",
            "12.345.678-5",
            "12345678 - 5",
            "12345678-5-5",
            "12345678--5",
            "abcdefgh-5",
            "12345678-x",
            "12345678-KK",
            "+2345678-5",
        ] {
            assert!(!is_valid_rut(input), "{:?} must be rejected", input);
        }
    }

    #[test]
    fn test_parse_matches_boolean_contract() {
        let mut inputs: Vec<String> = Vec::new();
        for body in ["1234567", "12345678", "123456", "10000013", "7896683"] {
            inputs.extend(with_every_check_char(body));
        }
        inputs.extend(["", "x", "12345678_5", " 12345678-5"].map(String::from));

        for input in &inputs {
            assert_eq!(
                is_valid_rut(input),
                Rut::parse(input).is_ok(),
                "disagreement on {:?}",
                input
            );
        }
    }
}

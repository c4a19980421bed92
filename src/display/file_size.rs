//! Human-readable file sizes for upload previews

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: u64 = 1024;

/// Format a byte count as `"<value> <unit>"` with at most two decimals.
///
/// Units step by 1024. Sizes of a terabyte and above stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut index = 0;
    let mut divisor = 1u64;
    while index + 1 < UNITS.len() && bytes / divisor >= STEP {
        divisor *= STEP;
        index += 1;
    }

    let value = (bytes as f64 / divisor as f64 * 100.0).round() / 100.0;
    format!("{} {}", value, UNITS[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn test_unit_boundaries() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1024 * 1024), "1 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn test_two_decimal_rounding() {
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
        assert_eq!(format_file_size(1025), "1 KB");
    }

    #[test]
    fn test_terabytes_clamp_to_gb() {
        assert_eq!(format_file_size(1024u64.pow(4)), "1024 GB");
    }
}

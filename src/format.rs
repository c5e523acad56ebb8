/// Human-readable formatting helpers
///
/// Byte counts shown in the upload result card go through the same
/// formatter the server-side listing uses: binary units, two decimals,
/// trailing zeros trimmed (1536 -> "1.5 KB").

/// Unit table; anything at or above 1024 GB is still reported in GB
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count for display
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    // floor(log1024(bytes)), computed exactly
    let exponent = (bytes.ilog2() / 10).min(SIZE_UNITS.len() as u32 - 1) as usize;
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);

    format!("{} {}", trim_decimals(value), SIZE_UNITS[exponent])
}

/// Round to two decimal places and drop trailing zeros
/// ("1.50" -> "1.5", "1.00" -> "1")
fn trim_decimals(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn stays_in_bytes_below_one_kilobyte() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(999), "999 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn whole_units_drop_decimals() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(1024 * 1024 * 1024), "1 GB");
    }

    #[test]
    fn fractional_values_keep_up_to_two_decimals() {
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1_258_291), "1.2 MB");
        assert_eq!(format_file_size(1127), "1.1 KB");
    }

    #[test]
    fn clamps_to_gigabytes() {
        // 5 TB still reports in GB rather than running off the unit table
        assert_eq!(format_file_size(5 * 1024_u64.pow(4)), "5120 GB");
    }
}

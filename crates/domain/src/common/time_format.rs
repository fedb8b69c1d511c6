//! Clock-style duration formatting.

/// Formats seconds as `HH:MM:SS`; hours grow past two digits when needed.
///
/// # Examples
///
/// ```
/// use rlrpg_domain::common::format_hms;
///
/// assert_eq!(format_hms(0), "00:00:00");
/// assert_eq!(format_hms(3_725), "01:02:05");
/// ```
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_each_component() {
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(60), "00:01:00");
        assert_eq!(format_hms(3_599), "00:59:59");
    }

    #[test]
    fn hours_are_not_wrapped() {
        assert_eq!(format_hms(100 * 3_600 + 1), "100:00:01");
    }
}

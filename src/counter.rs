//! Gallery counter label.

/// Format the `"current / total"` label shown next to a carousel.
///
/// `index` is zero-based; the label shows it one-based. Both numbers are
/// zero-padded to at least two digits and keep their natural width beyond
/// that.
///
/// ```
/// # use grete_ui::counter::format_counter;
/// assert_eq!(format_counter(0, 7), "01 / 07");
/// assert_eq!(format_counter(11, 12), "12 / 12");
/// assert_eq!(format_counter(99, 120), "100 / 120");
/// ```
pub fn format_counter(index: usize, total: usize) -> String {
    format!("{:02} / {:02}", index + 1, total)
}

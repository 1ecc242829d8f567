//! Rating label lookup shared by the widget and the submission preview.

/// Human-readable caption for a committed rating. 0 (unset) shows nothing.
pub fn rating_label(rating: u8) -> Option<&'static str> {
    match rating {
        1 => Some("Poor"),
        2 => Some("Fair"),
        3 => Some("Good"),
        4 => Some("Very Good"),
        5 => Some("Excellent"),
        _ => None,
    }
}

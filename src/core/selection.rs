//! Cursor arithmetic shared by the todo list, the reminder popup and the
//! popup's button row. All of it wraps around and treats an empty list as
//! "cursor parked at 0".

/// Next index, wrapping from the last item back to the first.
pub fn next(index: usize, len: usize) -> usize {
    if len == 0 || index + 1 >= len {
        0
    } else {
        index + 1
    }
}

/// Previous index, wrapping from the first item to the last.
pub fn prev(index: usize, len: usize) -> usize {
    match len {
        0 => 0,
        _ if index == 0 => len - 1,
        _ => (index - 1).min(len - 1),
    }
}

/// Keeps `index` if it still points into the list, otherwise resets to 0.
pub fn clamp_or_reset(index: usize, len: usize) -> usize {
    if index < len { index } else { 0 }
}

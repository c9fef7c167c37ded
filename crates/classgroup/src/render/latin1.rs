use std::borrow::Cow;

/// Replacement for characters the builtin PDF fonts cannot encode.
pub const REPLACEMENT_CHAR: char = '?';

/// Replaces every character above U+00FF with [`REPLACEMENT_CHAR`].
///
/// Borrows when `text` is already representable.
///
/// ```
/// use classgroup::to_latin1_lossy;
///
/// assert_eq!(to_latin1_lossy("José"), "José");
/// assert_eq!(to_latin1_lossy("Łukasz 李"), "?ukasz ?");
/// ```
pub fn to_latin1_lossy(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_latin1) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if is_latin1(c) { c } else { REPLACEMENT_CHAR })
            .collect(),
    )
}

fn is_latin1(c: char) -> bool {
    u32::from(c) <= 0xFF
}

use crate::DurationError;

/// Parses a course metadata fragment into a total number of minutes
///
/// The duration is read from the text between the first `(` and the last `)`.
/// When that fragment mentions `hr`, everything before the first comma holds
/// the hours and everything after it holds the minutes. Otherwise the whole
/// fragment holds the minutes.
///
/// Within each part every non-digit character is dropped and the remaining
/// digits are read as one number, so `"(12 hrs, 34 min)"` is 12 hours and 34
/// minutes.
///
/// # Examples
///
/// ```
/// use path_hours::parse_duration;
///
/// assert_eq!(parse_duration("Video Course (45 min)").unwrap(), 45);
/// assert_eq!(parse_duration("Video Course (1 hr, 5 min)").unwrap(), 65);
/// assert!(parse_duration("45 min").is_err());
/// ```
pub fn parse_duration(metadata: &str) -> Result<u32, DurationError> {
    let fragment = parenthesized(metadata)
        .ok_or_else(|| DurationError::MissingParentheses(metadata.to_string()))?;

    let (hours, minutes) = if fragment.contains("hr") {
        let (hours_part, minutes_part) = fragment
            .split_once(',')
            .ok_or_else(|| DurationError::MissingMinutes(fragment.to_string()))?;
        (digits_to_number(hours_part)?, digits_to_number(minutes_part)?)
    } else {
        (0, digits_to_number(fragment)?)
    };

    hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(|| DurationError::Overflow(fragment.to_string()))
}

/// Returns the text from the first `(` through the last `)`
fn parenthesized(text: &str) -> Option<&str> {
    let start = text.find('(')?;
    let end = text.rfind(')')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Concatenates every ASCII digit of `part` and reads the result as a number
fn digits_to_number(part: &str) -> Result<u32, DurationError> {
    let digits: String = part.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return Err(DurationError::NoDigits(part.to_string()));
    }

    digits
        .parse::<u32>()
        .map_err(|_| DurationError::Overflow(part.to_string()))
}

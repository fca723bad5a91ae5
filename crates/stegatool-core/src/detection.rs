//! Decides whether an extracted window carries a watermark.
//!
//! The carrier does not store the length of the hidden message. A message is taken to be
//! the longest prefix of ASCII alphanumeric or whitespace bytes, the first other byte
//! (usually the 0 sentinel) terminates it. Random LSB noise of an unmarked image can
//! decode to a few printable bytes as well, and a message with a non printable byte is cut
//! at that byte.

/// Outcome of scanning an extracted window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    Watermark(String),
    NoWatermark,
}

impl Detection {
    pub fn found(&self) -> bool {
        matches!(self, Detection::Watermark(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Detection::Watermark(text) => Some(text.as_str()),
            Detection::NoWatermark => None,
        }
    }

    /// the message, if any, and whether one was found
    pub fn into_parts(self) -> (Option<String>, bool) {
        match self {
            Detection::Watermark(text) => (Some(text), true),
            Detection::NoWatermark => (None, false),
        }
    }
}

/// bytes that can be part of a watermark, C locale `isalnum` and `isspace`
pub fn is_watermark_byte(b: u8) -> bool {
    // `is_ascii_whitespace` leaves out the vertical tab
    b.is_ascii_alphanumeric() || b.is_ascii_whitespace() || b == 0x0b
}

/// the leading run of watermark bytes
pub fn printable_prefix(raw: &[u8]) -> &[u8] {
    let end = raw
        .iter()
        .position(|b| !is_watermark_byte(*b))
        .unwrap_or(raw.len());

    &raw[..end]
}

pub fn detect(raw: &[u8]) -> Detection {
    let prefix = printable_prefix(raw);
    if prefix.is_empty() {
        return Detection::NoWatermark;
    }

    // only ASCII bytes make it into the prefix
    Detection::Watermark(prefix.iter().map(|b| *b as char).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_stop_at_the_sentinel() {
        assert_eq!(
            detect(b"alice\0garbage"),
            Detection::Watermark("alice".to_string())
        );
    }

    #[test]
    fn should_keep_whitespace_inside_a_message() {
        assert_eq!(
            detect(b"Jane Doe\tAcme\r\n\0"),
            Detection::Watermark("Jane Doe\tAcme\r\n".to_string())
        );
    }

    #[test]
    fn should_stop_at_punctuation_and_high_bytes() {
        assert_eq!(
            detect(b"jane.doe@example.com"),
            Detection::Watermark("jane".to_string())
        );
        assert_eq!(detect(b"ab\xc3\xa4cd"), Detection::Watermark("ab".to_string()));
    }

    #[test]
    fn should_report_no_watermark_for_a_zero_window() {
        let detection = detect(&[0; 1024]);

        assert_eq!(detection, Detection::NoWatermark);
        assert_eq!(detection.into_parts(), (None, false));
    }

    #[test]
    fn should_report_no_watermark_for_a_leading_non_printable_byte() {
        assert!(!detect(b"\x01alice").found());
        assert!(!detect(b"").found());
    }

    #[test]
    fn should_take_the_whole_window_when_there_is_no_terminator() {
        let raw = [b'a'; 16];

        assert_eq!(detect(&raw).message(), Some("aaaaaaaaaaaaaaaa"));
    }

    #[test]
    fn should_treat_vertical_tab_as_whitespace() {
        assert_eq!(printable_prefix(b"a\x0bb\x7f"), b"a\x0bb");
    }
}

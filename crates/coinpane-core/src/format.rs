//! Table format descriptors and the cell formatter.

use crate::constants::PLACEHOLDER;

/// Colour class of a formatted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Not a comparable field.
    Neutral,
    /// Comparable field whose text reads as non-negative.
    Positive,
    /// Comparable field whose text reads as negative.
    Negative,
}

/// Display preferences for one field of the price payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFormat {
    /// Key of the field inside `DISPLAY[from][to]`.
    pub key: &'static str,
    /// Label shown in the first table column.
    pub display_name: &'static str,
    /// Whether the value is coloured by sign.
    pub comparable: bool,
    /// Whether a percent glyph is appended.
    pub percentage: bool,
}

impl TableFormat {
    const fn new(
        key: &'static str,
        display_name: &'static str,
        comparable: bool,
        percentage: bool,
    ) -> Self {
        Self {
            key,
            display_name,
            comparable,
            percentage,
        }
    }

    /// Format a raw display string according to this descriptor.
    ///
    /// The sign test runs on the raw text: anything containing `" -"` or
    /// starting with `-` is negative. It is a substring test, not a numeric one,
    /// so text such as `"$ -"` used as a dash separator also reads as negative.
    #[must_use]
    pub fn format(&self, raw: &str) -> FormattedCell {
        let mut text = raw.to_string();
        if self.percentage {
            text.push_str(" %");
        }

        let tone = if !self.comparable {
            Tone::Neutral
        } else if !raw.contains(" -") && !raw.starts_with('-') {
            Tone::Positive
        } else {
            Tone::Negative
        };

        FormattedCell { text, tone }
    }
}

/// Fields rendered in the info table, in row order.
pub const TABLE_FORMATS: [TableFormat; 7] = [
    TableFormat::new("PRICE", "Price", false, false),
    TableFormat::new("OPEN24HOUR", "24hr Open Price", false, false),
    TableFormat::new("CHANGEPCT24HOUR", "24hr % Change", true, true),
    TableFormat::new("CHANGE24HOUR", "24hr Change", true, false),
    TableFormat::new("HIGH24HOUR", "24hr High", false, false),
    TableFormat::new("LOW24HOUR", "24hr Low", false, false),
    TableFormat::new("TOTALVOLUME24HTO", "Total 24hr Volume", false, false),
];

/// A value ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedCell {
    pub text: String,
    pub tone: Tone,
}

impl FormattedCell {
    /// The cell shown when there is no data.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            text: PLACEHOLDER.to_string(),
            tone: Tone::Neutral,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.text == PLACEHOLDER && self.tone == Tone::Neutral
    }
}

/// Look up the descriptor for `key`.
#[must_use]
pub fn table_format(key: &str) -> Option<&'static TableFormat> {
    TABLE_FORMATS.iter().find(|f| f.key == key)
}

/// Format `raw` for the field `key`.
///
/// Unknown keys format as plain neutral text.
#[must_use]
pub fn format_cell(key: &str, raw: &str) -> FormattedCell {
    match table_format(key) {
        Some(fmt) => fmt.format(raw),
        None => FormattedCell {
            text: raw.to_string(),
            tone: Tone::Neutral,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_appends_glyph() {
        let cell = format_cell("CHANGEPCT24HOUR", "1.25");
        assert_eq!(cell.text, "1.25 %");
        assert_eq!(cell.tone, Tone::Positive);
    }

    #[test]
    fn non_comparable_is_neutral_even_when_negative() {
        let cell = format_cell("PRICE", "-3");
        assert_eq!(cell.text, "-3");
        assert_eq!(cell.tone, Tone::Neutral);
    }

    #[test]
    fn leading_minus_is_negative() {
        assert_eq!(format_cell("CHANGE24HOUR", "-12.5").tone, Tone::Negative);
    }

    #[test]
    fn spaced_minus_is_negative() {
        assert_eq!(format_cell("CHANGE24HOUR", "$ -120.40").tone, Tone::Negative);
    }

    #[test]
    fn hyphen_without_space_is_positive() {
        // Only " -" and a leading '-' count.
        assert_eq!(format_cell("CHANGE24HOUR", "$1-2").tone, Tone::Positive);
    }

    #[test]
    fn sign_test_ignores_appended_glyph() {
        let cell = format_cell("CHANGEPCT24HOUR", "-0.42");
        assert_eq!(cell.text, "-0.42 %");
        assert_eq!(cell.tone, Tone::Negative);
    }

    #[test]
    fn unknown_key_is_plain() {
        let cell = format_cell("MKTCAP", "$ 1.2 B");
        assert_eq!(cell.text, "$ 1.2 B");
        assert_eq!(cell.tone, Tone::Neutral);
    }

    #[test]
    fn descriptor_keys_are_unique() {
        for (i, a) in TABLE_FORMATS.iter().enumerate() {
            for b in &TABLE_FORMATS[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn placeholder_cell() {
        let cell = FormattedCell::placeholder();
        assert_eq!(cell.text, "-");
        assert!(cell.is_placeholder());
    }
}

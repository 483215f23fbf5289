//! Conversion field binding.
//!
//! Two editable fields, each with an exchange rate and an optional link to the
//! other field. Committing a field writes `rate * value` into its linked field.
//! Rates can be overwritten at any time without touching the linked value until
//! the next commit; [`Converter::set_rates`] is the one place that recomputes
//! eagerly.

use crate::constants::NAN_MARKER;

/// One of the two converter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldSide {
    From,
    To,
}

impl FieldSide {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            FieldSide::From => FieldSide::To,
            FieldSide::To => FieldSide::From,
        }
    }
}

/// An editable numeric field.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionField {
    label: String,
    text: String,
    rate: f64,
    linked: Option<FieldSide>,
}

impl ConversionField {
    fn new(label: &str, text: &str) -> Self {
        Self {
            label: label.to_string(),
            text: text.to_string(),
            rate: 1.0,
            linked: None,
        }
    }

    /// The currency symbol labelling this field.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Raw text as typed or as last written by a commit.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    #[must_use]
    pub fn linked(&self) -> Option<FieldSide> {
        self.linked
    }

    /// The field's value as a number, if it holds one.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        parse_number(&self.text)
    }
}

/// Parse field text as a number.
///
/// Empty text and words other than `Infinity` are not numbers; `NaN` parses
/// to NaN. Blank text is not treated as zero, so committing a blank field
/// turns it into `NaN` as well instead of leaving it blank.
#[must_use]
pub fn parse_number(text: &str) -> Option<f64> {
    let t = text.trim();
    match t {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        "NaN" => return Some(f64::NAN),
        _ => {}
    }
    if t.chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return None;
    }
    t.parse().ok()
}

/// Render a number for a field.
///
/// Magnitudes of `1e21` and above or below `1e-6` use exponent notation with
/// an explicit sign, such as `1e+300` or `2.5e-7`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        NAN_MARKER.to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let text = format!("{value:e}");
        match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        }
    } else {
        format!("{value}")
    }
}

/// The from/to field pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    from: ConversionField,
    to: ConversionField,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Both fields tied to each other, from-field holding `1`.
    #[must_use]
    pub fn new() -> Self {
        let mut converter = Self::detached();
        converter.tie(FieldSide::From, FieldSide::To);
        converter.tie(FieldSide::To, FieldSide::From);
        converter
    }

    /// Fields with no links; commits do nothing until [`Converter::tie`] is called.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            from: ConversionField::new("", "1"),
            to: ConversionField::new("", ""),
        }
    }

    /// Link `field` to `target` with a rate of 1.
    ///
    /// This is one-directional; tie both ways for a bidirectional pair.
    pub fn tie(&mut self, field: FieldSide, target: FieldSide) {
        let f = self.field_mut(field);
        f.rate = 1.0;
        f.linked = Some(target);
    }

    #[must_use]
    pub fn field(&self, side: FieldSide) -> &ConversionField {
        match side {
            FieldSide::From => &self.from,
            FieldSide::To => &self.to,
        }
    }

    fn field_mut(&mut self, side: FieldSide) -> &mut ConversionField {
        match side {
            FieldSide::From => &mut self.from,
            FieldSide::To => &mut self.to,
        }
    }

    /// Replace the text of a field without synchronising.
    pub fn set_text(&mut self, side: FieldSide, text: impl Into<String>) {
        self.field_mut(side).text = text.into();
    }

    /// Override one field's rate. The linked value is left stale.
    pub fn set_rate(&mut self, side: FieldSide, rate: f64) {
        self.field_mut(side).rate = rate;
    }

    /// Set the currency labels of both fields.
    pub fn set_labels(&mut self, from: &str, to: &str) {
        from.clone_into(&mut self.from.label);
        to.clone_into(&mut self.to.label);
    }

    /// Confirm a field's value and push it through the link.
    ///
    /// A non-numeric value turns both the field and its linked field into the
    /// `NaN` marker. An untied field is left as it is.
    pub fn commit(&mut self, side: FieldSide) {
        let field = self.field(side);
        let Some(target) = field.linked else {
            return;
        };
        match field.value() {
            Some(value) => {
                let out = field.rate * value;
                self.field_mut(target).text = format_number(out);
            }
            None => {
                self.field_mut(side).text = NAN_MARKER.to_string();
                self.field_mut(target).text = NAN_MARKER.to_string();
            }
        }
    }

    /// Install the rates from a new price and recompute the to-field.
    ///
    /// The to-rate is the reciprocal of `from_rate`; a zero price gives an
    /// infinite reciprocal.
    pub fn set_rates(&mut self, from_rate: f64) {
        self.from.rate = from_rate;
        self.to.rate = 1.0 / from_rate;
        let value = self.from.value().unwrap_or(f64::NAN);
        self.to.text = format_number(value * self.from.rate);
    }

    /// `"<FROM> <fromValue> = <TO> <toValue>"`, as written to the log.
    #[must_use]
    pub fn conversion_text(&self) -> String {
        format!(
            "{} {} = {} {}",
            self.from.label, self.from.text, self.to.label, self.to.text
        )
    }
}

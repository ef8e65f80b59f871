//! Phone numbers are stored as one delimited string and edited as three
//! independently validated segments.

pub const PHONE_SEPARATOR: char = '-';

/// The three edit segments of a stored phone number: area code, exchange,
/// subscriber number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneSegments {
    pub area: String,
    pub exchange: String,
    pub subscriber: String,
}

impl PhoneSegments {
    pub fn new(
        area: impl Into<String>,
        exchange: impl Into<String>,
        subscriber: impl Into<String>,
    ) -> Self {
        Self {
            area: area.into(),
            exchange: exchange.into(),
            subscriber: subscriber.into(),
        }
    }

    /// Best-effort split of a stored phone string.
    ///
    /// Missing segments come back empty; anything past the third segment
    /// is dropped. Not schema-enforced at read time — a canonical
    /// `"A-B-C"` string round-trips exactly, everything else degrades.
    pub fn split(stored: &str) -> Self {
        let mut parts = stored.split(PHONE_SEPARATOR);
        Self {
            area: parts.next().unwrap_or_default().to_owned(),
            exchange: parts.next().unwrap_or_default().to_owned(),
            subscriber: parts.next().unwrap_or_default().to_owned(),
        }
    }

    /// Join the segments back into the stored representation.
    pub fn join(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.area,
            self.exchange,
            self.subscriber,
            sep = PHONE_SEPARATOR
        )
    }
}

//! Data snapshots received from the phone
//!
//! Text fields are bounded copies of whatever the phone sent. Anything longer
//! than [`MAX_FIELD_LEN`] bytes is cut at the last character boundary that
//! fits; the layout engine deals with the rest.

use heapless::String;

/// Capacity of a single text field in bytes
pub const MAX_FIELD_LEN: usize = 160;

/// Bounded text field
pub type FieldText = String<MAX_FIELD_LEN>;

/// Side length of the square navigation icon in pixels
pub const NAV_ICON_SIZE: u16 = 32;

/// Bytes in a 1-bpp navigation icon
pub const NAV_ICON_BYTES: usize = (NAV_ICON_SIZE as usize / 8) * NAV_ICON_SIZE as usize;

/// Copy `src` into a bounded field, dropping whatever does not fit
pub fn field_text(src: &str) -> FieldText {
    let mut out = FieldText::new();
    for ch in src.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// A notification accepted from the phone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NotificationRecord {
    /// Source application name
    pub app: FieldText,
    /// Title line
    pub title: FieldText,
    /// Message body
    pub body: FieldText,
}

impl NotificationRecord {
    pub fn new(app: &str, title: &str, body: &str) -> Self {
        Self {
            app: field_text(app),
            title: field_text(title),
            body: field_text(body),
        }
    }

    /// A record is worth showing if any field carries text
    pub fn is_valid(&self) -> bool {
        !(self.app.is_empty() && self.title.is_empty() && self.body.is_empty())
    }
}

/// 32x32 1-bpp turn icon, row-major, MSB first
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavIcon {
    data: [u8; NAV_ICON_BYTES],
}

impl NavIcon {
    /// Build an icon from raw bitmap bytes
    ///
    /// Returns `None` unless `bytes` is exactly one icon long.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let data = bytes.try_into().ok()?;
        Some(Self { data })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Navigation state as last reported by the phone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavigationSnapshot {
    /// Phone is actively navigating
    pub active: bool,
    /// Short title, usually the distance to the next manoeuvre
    pub title: FieldText,
    /// Instruction text
    pub directions: FieldText,
    /// ETA / remaining duration text
    pub duration: FieldText,
    /// Turn icon, if one was sent
    pub icon: Option<NavIcon>,
}

impl NavigationSnapshot {
    /// Whether a turn icon is present
    pub fn has_icon(&self) -> bool {
        self.icon.is_some()
    }
}

/// One weather forecast entry in whole degrees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherSnapshot {
    pub temp: i16,
    pub high: i16,
    pub low: i16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_is_invalid() {
        assert!(!NotificationRecord::new("", "", "").is_valid());
        assert!(!NotificationRecord::default().is_valid());
    }

    #[test]
    fn test_any_field_makes_record_valid() {
        assert!(NotificationRecord::new("Mail", "", "").is_valid());
        assert!(NotificationRecord::new("", "Hi", "").is_valid());
        assert!(NotificationRecord::new("", "", "body").is_valid());
    }

    #[test]
    fn test_field_text_cuts_on_char_boundary() {
        // 'é' is two bytes; 100 of them do not fit in 160 bytes
        let long: std::string::String = core::iter::repeat('é').take(100).collect();
        let field = field_text(&long);
        assert_eq!(field.len(), MAX_FIELD_LEN);
        assert_eq!(field.chars().count(), MAX_FIELD_LEN / 2);
    }

    #[test]
    fn test_field_text_keeps_short_input() {
        assert_eq!(field_text("Turn left").as_str(), "Turn left");
    }

    #[test]
    fn test_icon_requires_exact_size() {
        assert!(NavIcon::from_bytes(&[0u8; NAV_ICON_BYTES]).is_some());
        assert!(NavIcon::from_bytes(&[0u8; NAV_ICON_BYTES - 1]).is_none());
        assert!(NavIcon::from_bytes(&[]).is_none());
    }
}

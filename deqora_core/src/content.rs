//! Builders for the structured payloads a code can carry.
//!
//! Each builder validates its inputs and returns the exact string to hand to
//! the QR encoder. Validation happens here, once, so callers never embed a
//! payload they could not have built.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in the WhatsApp message parameter. Alphanumerics
/// plus the unreserved set and `/`, matching common URL-quoting defaults.
const MESSAGE_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Maximum SSID length in bytes, per IEEE 802.11.
const MAX_SSID_LEN: usize = 32;

/// Minimum digits for a phone number in international form.
const MIN_PHONE_DIGITS: usize = 6;

/// Wi-Fi authentication type carried in the payload's `T:` field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WifiEncryption {
    /// WPA/WPA2 personal.
    #[default]
    Wpa,
    /// Legacy WEP.
    Wep,
    /// Open network, no password.
    Nopass,
}

impl WifiEncryption {
    /// Get the token used in the `WIFI:` payload.
    pub fn token(&self) -> &'static str {
        match self {
            WifiEncryption::Wpa => "WPA",
            WifiEncryption::Wep => "WEP",
            WifiEncryption::Nopass => "nopass",
        }
    }
}

impl FromStr for WifiEncryption {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wpa" | "wpa2" => Ok(WifiEncryption::Wpa),
            "wep" => Ok(WifiEncryption::Wep),
            "nopass" | "none" => Ok(WifiEncryption::Nopass),
            _ => Err(ContentError::UnknownEncryption(s.to_string())),
        }
    }
}

impl fmt::Display for WifiEncryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Build a `WIFI:` network payload.
///
/// The SSID must be non-empty and at most 32 bytes. WPA networks require a
/// password of at least 8 characters, WEP of exactly 5 or 13; open networks
/// carry an empty `P:` field regardless of `password`.
/// # Example
/// ```
/// use deqora_core::content::{wifi, WifiEncryption};
/// let payload = wifi("HomeNet", "hunter2hunter2", WifiEncryption::Wpa, false).unwrap();
/// assert_eq!(payload, "WIFI:T:WPA;S:HomeNet;P:hunter2hunter2;H:false;;");
/// ```
pub fn wifi(
    ssid: &str,
    password: &str,
    encryption: WifiEncryption,
    hidden: bool,
) -> Result<String, ContentError> {
    let ssid = ssid.trim();
    if ssid.is_empty() {
        return Err(ContentError::MissingSsid);
    }
    if ssid.len() > MAX_SSID_LEN {
        return Err(ContentError::SsidTooLong(ssid.len()));
    }
    // Password limits are in characters, not bytes.
    let password_chars = password.chars().count();
    match encryption {
        WifiEncryption::Wpa | WifiEncryption::Wep if password.is_empty() => {
            return Err(ContentError::MissingPassword)
        }
        WifiEncryption::Wpa if password_chars < 8 => return Err(ContentError::ShortWpaPassword),
        WifiEncryption::Wep if !matches!(password_chars, 5 | 13) => {
            return Err(ContentError::BadWepPassword(password_chars))
        }
        _ => {}
    }
    let hidden = if hidden { "true" } else { "false" };
    let payload = match encryption {
        WifiEncryption::Nopass => format!("WIFI:T:nopass;S:{ssid};P:;H:{hidden};;"),
        protected => format!(
            "WIFI:T:{};S:{ssid};P:{password};H:{hidden};;",
            protected.token()
        ),
    };
    Ok(payload)
}

/// Build a `https://wa.me/` chat link.
///
/// The phone number must be digits only (international form, no `+`) and at
/// least 6 digits long. A non-empty message is appended percent-encoded as
/// the `text` parameter.
/// # Example
/// ```
/// use deqora_core::content::whatsapp;
/// let link = whatsapp("5215512345678", Some("hello there")).unwrap();
/// assert_eq!(link, "https://wa.me/5215512345678?text=hello%20there");
/// ```
pub fn whatsapp(phone: &str, message: Option<&str>) -> Result<String, ContentError> {
    let phone = phone.trim();
    if phone.len() < MIN_PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ContentError::InvalidPhone(phone.to_string()));
    }
    match message.map(str::trim).filter(|message| !message.is_empty()) {
        Some(message) => Ok(format!(
            "https://wa.me/{phone}?text={}",
            utf8_percent_encode(message, MESSAGE_SAFE)
        )),
        None => Ok(format!("https://wa.me/{phone}")),
    }
}

/// Check that `url` is an encodable web address: an explicit http(s) scheme
/// followed by something with at least one dot in it.
/// # Example
/// ```
/// use deqora_core::content::validate_url;
/// assert!(validate_url("https://example.com/page").is_ok());
/// assert!(validate_url("example.com").is_err());
/// ```
pub fn validate_url(url: &str) -> Result<(), ContentError> {
    let url = url.trim();
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| ContentError::MissingScheme(url.to_string()))?;
    if !rest.contains('.') {
        return Err(ContentError::NotADomain(url.to_string()));
    }
    Ok(())
}

/// An error in the inputs of a payload builder.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// The network name is empty.
    #[error("a network name (SSID) is required")]
    MissingSsid,
    /// The network name exceeds 32 bytes.
    #[error("network name is {0} bytes long but SSIDs cannot exceed 32")]
    SsidTooLong(usize),
    /// A protected network was given no password.
    #[error("a password is required for protected networks")]
    MissingPassword,
    /// A WPA password shorter than 8 characters.
    #[error("WPA passwords must be at least 8 characters")]
    ShortWpaPassword,
    /// A WEP password that is not 5 or 13 characters.
    #[error("WEP passwords must be exactly 5 or 13 characters, got {0}")]
    BadWepPassword(usize),
    /// An unrecognized encryption name.
    #[error("unknown encryption '{0}': expected wpa, wep or nopass")]
    UnknownEncryption(String),
    /// A phone number that is not digits-only or is too short.
    #[error("invalid phone number '{0}': expected at least 6 digits, without '+' or separators")]
    InvalidPhone(String),
    /// A URL without an http(s) scheme.
    #[error("invalid URL '{0}': it must start with http:// or https://")]
    MissingScheme(String),
    /// A URL with no dot after the scheme.
    #[error("invalid URL '{0}': it has no domain")]
    NotADomain(String),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_wifi_wpa_payload() {
        let payload = wifi("CoffeeShop", "espresso99", WifiEncryption::Wpa, false).unwrap();
        assert_eq!(payload, "WIFI:T:WPA;S:CoffeeShop;P:espresso99;H:false;;");
    }

    #[test]
    fn test_wifi_hidden_network() {
        let payload = wifi("Lair", "secretsecret", WifiEncryption::Wpa, true).unwrap();
        assert_eq!(payload, "WIFI:T:WPA;S:Lair;P:secretsecret;H:true;;");
    }

    #[test]
    fn test_wifi_open_network_drops_password() {
        let payload = wifi("Library", "ignored", WifiEncryption::Nopass, false).unwrap();
        assert_eq!(payload, "WIFI:T:nopass;S:Library;P:;H:false;;");
    }

    #[test]
    fn test_wifi_trims_ssid() {
        let payload = wifi("  Garage  ", "12345", WifiEncryption::Wep, false).unwrap();
        assert_eq!(payload, "WIFI:T:WEP;S:Garage;P:12345;H:false;;");
    }

    #[test]
    fn test_wifi_ssid_validation() {
        assert_eq!(
            wifi("", "password1", WifiEncryption::Wpa, false),
            Err(ContentError::MissingSsid)
        );
        assert_eq!(
            wifi("   ", "password1", WifiEncryption::Wpa, false),
            Err(ContentError::MissingSsid)
        );
        let long = "x".repeat(33);
        assert_eq!(
            wifi(&long, "password1", WifiEncryption::Wpa, false),
            Err(ContentError::SsidTooLong(33))
        );
    }

    #[test]
    fn test_wifi_password_validation() {
        assert_eq!(
            wifi("Net", "", WifiEncryption::Wpa, false),
            Err(ContentError::MissingPassword)
        );
        assert_eq!(
            wifi("Net", "short", WifiEncryption::Wpa, false),
            Err(ContentError::ShortWpaPassword)
        );
        assert_eq!(
            wifi("Net", "1234", WifiEncryption::Wep, false),
            Err(ContentError::BadWepPassword(4))
        );
        assert!(wifi("Net", "1234567890123", WifiEncryption::Wep, false).is_ok());
    }

    #[test]
    fn test_password_limits_count_characters() {
        // "óóóóó" is 5 characters but 10 bytes; it is a valid WEP key.
        let payload = wifi("Net", "óóóóó", WifiEncryption::Wep, false).unwrap();
        assert_eq!(payload, "WIFI:T:WEP;S:Net;P:óóóóó;H:false;;");
        // Two emoji are 8 bytes but only 2 characters, below the WPA minimum.
        assert_eq!(
            wifi("Net", "🔑🔑", WifiEncryption::Wpa, false),
            Err(ContentError::ShortWpaPassword)
        );
    }

    #[test]
    fn test_encryption_from_str() {
        assert_eq!("wpa".parse(), Ok(WifiEncryption::Wpa));
        assert_eq!("WPA2".parse(), Ok(WifiEncryption::Wpa));
        assert_eq!("wep".parse(), Ok(WifiEncryption::Wep));
        assert_eq!("nopass".parse(), Ok(WifiEncryption::Nopass));
        assert_eq!(
            "psk".parse::<WifiEncryption>(),
            Err(ContentError::UnknownEncryption("psk".to_string()))
        );
    }

    #[test]
    fn test_whatsapp_without_message() {
        assert_eq!(
            whatsapp("5215512345678", None),
            Ok("https://wa.me/5215512345678".to_string())
        );
        // A blank message is the same as none.
        assert_eq!(
            whatsapp("5215512345678", Some("  ")),
            Ok("https://wa.me/5215512345678".to_string())
        );
    }

    #[test]
    fn test_whatsapp_encodes_message() {
        assert_eq!(
            whatsapp("34600111222", Some("Hola, ¿qué tal?")),
            Ok("https://wa.me/34600111222?text=Hola%2C%20%C2%BFqu%C3%A9%20tal%3F".to_string())
        );
    }

    #[test]
    fn test_whatsapp_keeps_safe_characters() {
        assert_eq!(
            whatsapp("123456", Some("a-b.c_d~e/f")),
            Ok("https://wa.me/123456?text=a-b.c_d~e/f".to_string())
        );
    }

    #[test]
    fn test_whatsapp_phone_validation() {
        assert_eq!(
            whatsapp("12345", None),
            Err(ContentError::InvalidPhone("12345".to_string()))
        );
        assert_eq!(
            whatsapp("+5215512345678", None),
            Err(ContentError::InvalidPhone("+5215512345678".to_string()))
        );
        assert_eq!(
            whatsapp("55 1234 5678", None),
            Err(ContentError::InvalidPhone("55 1234 5678".to_string()))
        );
    }

    #[test]
    fn test_url_validation() {
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("http://sub.domain.org/path?q=1").is_ok());
        assert!(validate_url("  https://example.com  ").is_ok());
        assert_eq!(
            validate_url("ftp://example.com"),
            Err(ContentError::MissingScheme("ftp://example.com".to_string()))
        );
        assert_eq!(
            validate_url("example.com"),
            Err(ContentError::MissingScheme("example.com".to_string()))
        );
        assert_eq!(
            validate_url("https://localhost"),
            Err(ContentError::NotADomain("https://localhost".to_string()))
        );
    }
}

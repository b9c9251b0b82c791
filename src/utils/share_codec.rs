use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::errors::DecodeError;
use crate::models::payment::PaymentIntent;
use crate::models::theme::{ThemeColors, ThemeSpec, find_theme};

/// The wire format embedded in a shareable URL: everything a second party
/// needs to rebuild the QR code, with the theme reduced to its id. The
/// payload is unsigned and carries no expiry; anyone holding the link can
/// read or forge it, which is acceptable because nothing here moves money.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    pub upi_id: String,
    pub name: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default = "default_theme_id")]
    pub theme: String,
    #[serde(default = "default_colors")]
    pub colors: ThemeColors,
}

fn default_theme_id() -> String {
    "classic".to_string()
}

fn default_colors() -> ThemeColors {
    ThemeSpec::classic().colors
}

impl SharePayload {
    pub fn intent(&self) -> PaymentIntent {
        PaymentIntent::new(self.upi_id.clone(), self.name.clone(), self.amount.clone())
    }

    /// Rebuild a rendering-ready theme from the payload's id and colors.
    /// Unknown ids keep the raw id as the label rather than being rejected.
    pub fn theme_spec(&self) -> ThemeSpec {
        match find_theme(&self.theme) {
            Some(mut theme) => {
                theme.colors = self.colors.clone();
                theme
            }
            None => ThemeSpec {
                id: self.theme.clone(),
                name: self.theme.clone(),
                colors: self.colors.clone(),
            },
        }
    }
}

/// Serialize the QR state as Base64(JSON) and append it as the single `qr`
/// query parameter on `base_url`.
pub fn encode_shareable(intent: &PaymentIntent, theme: &ThemeSpec, base_url: &str) -> String {
    let payload = serde_json::json!({
        "upiId": &intent.upi_id,
        "name": &intent.name,
        "amount": &intent.amount,
        "theme": &theme.id,
        "colors": &theme.colors,
    });

    format!("{}?qr={}", base_url, STANDARD.encode(payload.to_string()))
}

/// Reverse `encode_shareable`: Base64-decode, then parse the JSON payload.
/// Fails when the input is not Base64, not UTF-8 JSON, or is missing the
/// required `upiId`/`name` fields.
pub fn decode_shareable(encoded: &str) -> Result<SharePayload, DecodeError> {
    let bytes = STANDARD.decode(encoded)?;
    let json = String::from_utf8(bytes)?;
    let payload = serde_json::from_str(&json)?;
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::theme::resolve_theme;

    fn encoded_part(url: &str) -> &str {
        url.split_once("?qr=").expect("missing qr parameter").1
    }

    #[test]
    fn round_trips_intent_and_theme() {
        let intent = PaymentIntent::new("alice@bank".into(), "Alice Doe".into(), "250.50".into());
        let theme = resolve_theme(Some("blue"), None, None);

        let url = encode_shareable(&intent, &theme, "http://localhost:8080/view");
        assert!(url.starts_with("http://localhost:8080/view?qr="));

        let payload = decode_shareable(encoded_part(&url)).unwrap();
        assert_eq!(payload.upi_id, "alice@bank");
        assert_eq!(payload.name, "Alice Doe");
        assert_eq!(payload.amount, "250.50");
        assert_eq!(payload.theme, "blue");
        assert_eq!(payload.colors, theme.colors);
    }

    #[test]
    fn round_trips_custom_colors_and_unicode() {
        let intent = PaymentIntent::new("chai@upi".into(), "चाय वाला".into(), String::new());
        let theme = resolve_theme(Some("classic"), Some("#123456"), Some("#abcdef"));

        let url = encode_shareable(&intent, &theme, "https://example.com/view");
        let payload = decode_shareable(encoded_part(&url)).unwrap();

        assert_eq!(payload.name, "चाय वाला");
        assert_eq!(payload.amount, "");
        assert_eq!(payload.colors.foreground, "#123456");
        assert_eq!(payload.colors.background, "#abcdef");
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode_shareable("not-base64!!").unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn rejects_non_json_payload() {
        let encoded = STANDARD.encode("not json");
        let err = decode_shareable(&encoded).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn rejects_missing_required_fields() {
        let encoded = STANDARD.encode(r#"{"amount":"100"}"#);
        let err = decode_shareable(&encoded).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let encoded = STANDARD.encode(r#"{"upiId":"x@y","name":"X"}"#);
        let payload = decode_shareable(&encoded).unwrap();
        assert_eq!(payload.amount, "");
        assert_eq!(payload.theme, "classic");
        assert_eq!(payload.colors, ThemeSpec::classic().colors);
    }

    #[test]
    fn unknown_theme_id_survives_as_label() {
        let encoded = STANDARD.encode(
            r##"{"upiId":"x@y","name":"X","theme":"neon","colors":{"foreground":"#0f0","background":"#000"}}"##,
        );
        let payload = decode_shareable(&encoded).unwrap();
        let theme = payload.theme_spec();
        assert_eq!(theme.id, "neon");
        assert_eq!(theme.colors.foreground, "#0f0");
    }
}

use chrono::SecondsFormat;
use nanoid::nanoid;
use serde::{Deserialize, Serialize};

use crate::models::payment::PaymentIntent;
use crate::models::theme::ThemeSpec;

/// One saved QR code. The deep link is stored verbatim so re-rendering a
/// gallery entry never recomputes it, and the theme keeps its resolved
/// colors rather than just an id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GalleryRecord {
    pub id: String,
    pub payment_intent: PaymentIntent,
    pub theme: ThemeSpec,
    pub qr_value: String,
    pub created_at: String,
}

impl GalleryRecord {
    pub fn new(payment_intent: PaymentIntent, theme: ThemeSpec, qr_value: String) -> Self {
        Self {
            id: nanoid!(10),
            payment_intent,
            theme,
            qr_value,
            created_at: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::theme::ThemeSpec;

    fn sample() -> GalleryRecord {
        GalleryRecord::new(
            PaymentIntent::new("alice@bank".into(), "Alice Doe".into(), "100".into()),
            ThemeSpec::classic(),
            "upi://pay?pa=alice@bank&pn=Alice%20Doe&am=100".into(),
        )
    }

    #[test]
    fn records_get_distinct_ids() {
        let a = sample();
        let b = sample();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("paymentIntent").is_some());
        assert!(value.get("qrValue").is_some());
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["paymentIntent"]["upiId"], "alice@bank");
    }

    #[test]
    fn created_at_is_rfc3339() {
        let record = sample();
        assert!(chrono::DateTime::parse_from_rfc3339(&record.created_at).is_ok());
    }
}

use serde::{Deserialize, Serialize};

/// Payment details captured from the caller. The amount stays text end to
/// end; an empty string means "any amount".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub upi_id: String,
    pub name: String,
    #[serde(default)]
    pub amount: String,
}

impl PaymentIntent {
    pub fn new(upi_id: String, name: String, amount: String) -> Self {
        Self {
            upi_id,
            name,
            amount,
        }
    }

    /// Generation is only offered once both the UPI handle and the display
    /// name are filled in. The codec itself never enforces this.
    pub fn is_complete(&self) -> bool {
        !self.upi_id.is_empty() && !self.name.is_empty()
    }
}

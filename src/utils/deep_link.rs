use crate::models::payment::PaymentIntent;

/// Format a `upi://pay` deep link for a payment intent.
///
/// The handle goes in verbatim: UPI handles are URL-safe by convention, and
/// over-encoding them breaks some payment apps. Only the display name is
/// percent-encoded. An empty amount produces `am=` with no value, which UPI
/// apps treat as an open-amount payment.
///
/// This is a pure formatter, not a validator: empty fields still produce a
/// link. Callers gate generation with `PaymentIntent::is_complete`.
pub fn build_deep_link(intent: &PaymentIntent) -> String {
    format!(
        "upi://pay?pa={}&pn={}&am={}",
        intent.upi_id,
        urlencoding::encode(&intent.name),
        intent.amount
    )
}

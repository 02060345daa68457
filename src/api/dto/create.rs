//! DTOs for the create endpoint.

use serde::Deserialize;

/// Input for creating a short code.
///
/// The field is named `longURL` on the wire, whether it arrives as a query
/// parameter, a form field, or a JSON property.
#[derive(Debug, Default, Deserialize)]
pub struct CreateParams {
    #[serde(rename = "longURL")]
    pub long_url: Option<String>,
}

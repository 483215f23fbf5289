//! Request URL construction.

use coinpane_core::constants::{FROM_QUERY_KEY, TO_QUERY_KEY};

/// `<endpoint>?fsyms=<FROM>&tsyms=<TO>`.
///
/// Symbols are validated upstream to `A`-`Z`, so no escaping is needed.
#[must_use]
pub fn price_url(endpoint: &str, from: &str, to: &str) -> String {
    let sep = if endpoint.contains('?') { '&' } else { '?' };
    format!("{endpoint}{sep}{FROM_QUERY_KEY}={from}&{TO_QUERY_KEY}={to}")
}

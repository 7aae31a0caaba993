//! Session bootstrap: the initial authenticated call that establishes a
//! usable session and fetches the remote profile.

use serde_json::json;

use vigil_types::AccountRecord;

use crate::client::ApiClient;
use crate::endpoints::Endpoints;

/// Try to establish a session for `account`, walking its proxy list in
/// order. Returns `true` once a session endpoint responds with a zero
/// status code and a profile carrying a non-empty `uid`; remaining proxies
/// are not tried.
///
/// Exhausting the list abandons the account for the rest of the run — it
/// never enters the ping loop and is not retried later.
pub async fn bootstrap(
    client: &ApiClient,
    endpoints: &Endpoints,
    account: &mut AccountRecord,
) -> bool {
    let label = account.token_label();

    for proxy in account.proxies.clone() {
        match client.call(&endpoints.session, &json!({}), &account.token).await {
            Ok(response) => {
                if response.get("code").and_then(|c| c.as_i64()) == Some(0) {
                    let data = response
                        .get("data")
                        .cloned()
                        .unwrap_or_else(|| json!({}));
                    account.profile = data;
                    if account.has_session() {
                        tracing::info!(
                            "[Session] Session established for token {} via proxy {}",
                            label,
                            proxy
                        );
                        return true;
                    }
                    // Zero code without a uid is as useless as a failure
                    tracing::warn!(
                        "[Session] Profile without uid for token {} using proxy {}",
                        label,
                        proxy
                    );
                    account.profile = json!({});
                } else {
                    tracing::warn!(
                        "[Session] Session failed for token {} using proxy {}",
                        label,
                        proxy
                    );
                }
            }
            Err(e) => {
                tracing::error!(
                    "[Session] Bootstrap error for token {} using proxy {}: {}",
                    label,
                    proxy,
                    e
                );
            }
        }
    }

    tracing::error!("[Session] All proxies failed for token {}", label);
    false
}

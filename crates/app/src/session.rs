use dioxus::prelude::*;
use shared_types::SessionVault;

use crate::routes::Route;

/// Hook to access the session vault.
pub fn use_vault() -> SessionVault {
    use_context::<SessionVault>()
}

/// The stored username, read once when the view mounts.
///
/// Storage is never watched; a login in another tab is picked up on the
/// next navigation.
pub fn use_signed_in_username() -> Option<String> {
    let vault = use_vault();
    use_hook(move || vault.username())
}

/// Clear both storage scopes and return to the login page.
///
/// Navigation happens even if a scope refused to clear.
pub fn sign_out(vault: &SessionVault) {
    match vault.sign_out() {
        Ok(()) => tracing::info!("Signed out"),
        Err(e) => tracing::error!(error = %e, "Sign-out could not clear storage"),
    }
    navigator().push(Route::Login {});
}

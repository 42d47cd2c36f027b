//! Session commands: login, logout, whoami.

use retail_admin_dashboard::AppState;

/// Resolve the email against the fetched user list and persist the match.
pub async fn login(state: &mut AppState, email: &str) -> Result<(), Box<dyn std::error::Error>> {
    let user = state.session.login(email, &state.gateway).await?;
    println!("Logged in as {} <{}>", user.name, user.email);
    Ok(())
}

/// Clear the session and its persisted record.
pub fn logout(state: &mut AppState) {
    state.session.logout();
    println!("Logged out");
}

/// Show the logged-in operator, if any.
pub fn whoami(state: &AppState) {
    match state.session.current_user() {
        Some(user) => println!("{} <{}> (customer #{})", user.name, user.email, user.id),
        None => println!("Not logged in"),
    }
}

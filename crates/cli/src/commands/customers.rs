//! Customer record commands.
//!
//! All mutations commit to the local ledger first; the matching gateway
//! call is best-effort because the mock backend does not persist writes.
//! A failed call is reported as a warning, never as a command failure.

use retail_admin_core::{CustomerId, Email};
use retail_admin_dashboard::models::CustomerDraft;
use retail_admin_dashboard::AppState;

/// Fields collected by `customers add`.
pub struct AddArgs {
    pub name: String,
    pub email: String,
    pub username: String,
    pub phone: String,
    pub website: String,
    pub company: String,
}

/// List all customer records, most recently created first.
pub async fn list(state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
    state.require_login()?;
    state.hydrate_customers().await?;

    println!("{:>5}  {:<24} EMAIL", "ID", "NAME");
    for customer in state.customers.customers() {
        println!("{:>5}  {:<24} {}", customer.id, customer.name, customer.email);
    }
    Ok(())
}

/// Show one record, falling back to a direct fetch when the ledger has
/// not been hydrated with it.
pub async fn show(state: &mut AppState, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    state.require_login()?;
    state.hydrate_customers().await?;

    let id = CustomerId::new(id);
    let customer = match state.customers.get(id) {
        Some(customer) => customer.clone(),
        None => state.gateway.get_user(id).await?,
    };

    println!("Customer #{}", customer.id);
    println!("  name:    {}", customer.name);
    println!("  email:   {}", customer.email);
    println!("  phone:   {}", customer.phone);
    println!("  website: {}", customer.website);
    println!("  company: {}", customer.company.name);
    Ok(())
}

/// Create a record in the ledger and submit it to the mock backend.
pub async fn add(state: &mut AppState, args: AddArgs) -> Result<(), Box<dyn std::error::Error>> {
    state.require_login()?;
    state.hydrate_customers().await?;

    let draft = CustomerDraft {
        name: args.name,
        username: args.username,
        email: Email::parse(&args.email)?,
        phone: args.phone,
        website: args.website,
        company_name: args.company,
    };

    let customer = state.customers.create(draft.clone());
    if let Err(e) = state.gateway.create_user(&draft).await {
        tracing::warn!("mock backend create failed (record kept locally): {e}");
    }
    println!("Created customer #{}: {}", customer.id, customer.name);
    Ok(())
}

/// Apply field updates to an existing record.
pub async fn update(
    state: &mut AppState,
    id: i64,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    state.require_login()?;
    state.hydrate_customers().await?;

    let id = CustomerId::new(id);
    let Some(mut record) = state.customers.get(id).cloned() else {
        println!("No customer with id {id}");
        return Ok(());
    };

    if let Some(name) = name {
        record.name = name;
    }
    if let Some(email) = email {
        record.email = Email::parse(&email)?;
    }
    if let Some(phone) = phone {
        record.phone = phone;
    }

    state.customers.update(record.clone());
    if let Err(e) = state.gateway.update_user(&record).await {
        tracing::warn!("mock backend update failed (record kept locally): {e}");
    }
    println!("Updated customer #{}", record.id);
    Ok(())
}

/// Remove a record from the ledger and the mock backend.
pub async fn remove(state: &mut AppState, id: i64) -> Result<(), Box<dyn std::error::Error>> {
    state.require_login()?;
    state.hydrate_customers().await?;

    let id = CustomerId::new(id);
    state.customers.remove(id);
    if let Err(e) = state.gateway.delete_user(id).await {
        tracing::warn!("mock backend delete failed (record removed locally): {e}");
    }
    println!("Removed customer #{id}");
    Ok(())
}

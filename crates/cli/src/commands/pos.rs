//! Interactive point-of-sale loop.
//!
//! One command per line; every state transition runs to completion before
//! the next line is read, which is the whole concurrency story of the
//! dashboard. Stock refusals and checkout rejections are printed and leave
//! all state untouched.

use std::io::{BufRead, Write};

use retail_admin_core::{OrderStatus, ProductId};
use retail_admin_dashboard::AppState;

const HELP: &str = "\
commands:
  add <product-id>        add one unit to the cart
  qty <product-id> <n>    set a cart line to n units (0 removes it)
  remove <product-id>     remove a cart line
  cart                    show cart lines and the running total
  clear                   abandon the cart, releasing reserved stock
  customer <id>           choose the customer for this sale
  checkout                place the order
  orders                  list this session's orders
  retry                   re-submit orders whose sync failed
  help                    show this help
  quit                    leave the loop";

/// Run the POS loop until `quit` or end of input.
pub async fn run(state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
    state.require_login()?;
    state.hydrate_customers().await?;
    state.hydrate_catalog().await?;

    println!(
        "Point of sale ready: {} products, {} customers. Type `help` for commands.",
        state.catalog.products().len(),
        state.customers.customers().len()
    );

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("pos> ");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit" | "exit"] => break,
            ["help"] => println!("{HELP}"),
            ["add", id] => add(state, id),
            ["qty", id, n] => set_quantity(state, id, n),
            ["remove", id] => remove(state, id),
            ["cart"] => show_cart(state),
            ["clear"] => {
                state.commerce.clear_cart(&mut state.catalog);
                println!("Cart cleared");
            }
            ["customer", id] => choose_customer(state, id),
            ["checkout"] => checkout(state).await,
            ["orders"] => show_orders(state),
            ["retry"] => {
                let confirmed = state.retry_sync().await;
                println!("{confirmed} order(s) confirmed");
            }
            _ => println!("Unrecognized command; type `help`"),
        }
    }

    Ok(())
}

fn parse_id(raw: &str) -> Option<ProductId> {
    match raw.parse::<i64>() {
        Ok(id) => Some(ProductId::new(id)),
        Err(_) => {
            println!("`{raw}` is not a product id");
            None
        }
    }
}

fn add(state: &mut AppState, raw_id: &str) {
    let Some(id) = parse_id(raw_id) else { return };
    match state.commerce.add_to_cart(&mut state.catalog, id) {
        Ok(()) => show_cart(state),
        Err(e) => println!("{e}"),
    }
}

fn set_quantity(state: &mut AppState, raw_id: &str, raw_quantity: &str) {
    let Some(id) = parse_id(raw_id) else { return };
    let Ok(quantity) = raw_quantity.parse::<u32>() else {
        println!("`{raw_quantity}` is not a quantity");
        return;
    };
    match state.commerce.set_quantity(&mut state.catalog, id, quantity) {
        Ok(()) => show_cart(state),
        Err(e) => println!("{e}"),
    }
}

fn remove(state: &mut AppState, raw_id: &str) {
    let Some(id) = parse_id(raw_id) else { return };
    state.commerce.remove_from_cart(&mut state.catalog, id);
    show_cart(state);
}

fn choose_customer(state: &mut AppState, raw_id: &str) {
    let Ok(id) = raw_id.parse::<i64>() else {
        println!("`{raw_id}` is not a customer id");
        return;
    };
    let customer = state
        .customers
        .get(retail_admin_core::CustomerId::new(id))
        .cloned();
    match customer {
        Some(customer) => {
            println!("Customer for this sale: {} <{}>", customer.name, customer.email);
            state.commerce.set_customer(Some(customer));
        }
        None => println!("No customer with id {id}"),
    }
}

fn show_cart(state: &AppState) {
    if state.commerce.cart().is_empty() {
        println!("Cart is empty");
    } else {
        for item in state.commerce.cart() {
            println!(
                "  {:>3} x {:<40} {:>8}",
                item.quantity,
                item.product.title,
                item.line_total().to_string()
            );
        }
        println!(
            "  {} item(s), total {}",
            state.commerce.cart_item_count(),
            state.commerce.cart_total()
        );
    }
    match state.commerce.selected_customer() {
        Some(customer) => println!("  customer: {}", customer.name),
        None => println!("  customer: (none selected)"),
    }
}

async fn checkout(state: &mut AppState) {
    match state.place_order().await {
        Ok(order) => {
            println!("Order #{} placed, total {}", order.id, order.total);
            if order.status == OrderStatus::FailedNeedsRetry {
                println!("Remote sync failed; the order is saved locally (use `retry`)");
            }
        }
        Err(e) => println!("{e}"),
    }
}

fn show_orders(state: &AppState) {
    if state.commerce.orders().is_empty() {
        println!("No orders this session");
        return;
    }
    for order in state.commerce.orders() {
        println!(
            "  #{:<3} {:<24} {:>8}  {:?}  {}",
            order.id,
            order.customer_name,
            order.total.to_string(),
            order.status,
            order.created_at.format("%Y-%m-%d %H:%M:%S")
        );
    }
}

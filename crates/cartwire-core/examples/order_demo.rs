//! Walks an order through both directions of the pipeline: a REST response
//! body into a typed model, and the model back into a request body.
//!
//! Run with: cargo run --example order_demo

use cartwire_core::transformers::order_transformer;
use cartwire_core::{bag, Model, Order, Result};
use serde_json::json;

fn main() -> Result<()> {
    let transformer = order_transformer()?;

    let response = bag::as_bag(json!({
        "id": 93,
        "status": "processing",
        "currency": "USD",
        "date_created": "2023-07-21T14:56:44",
        "discount_total": "5.00",
        "total": "29.35",
        "customer_id": 26,
        "billing": {
            "first_name": "John",
            "last_name": "Doe",
            "city": "San Francisco",
            "postcode": "94103",
            "email": "john.doe@example.com"
        },
        "line_items": [
            { "name": "Woo Single #1", "product_id": 93, "quantity": 2, "price": 3, "total": "6.00" }
        ],
    }))
    .expect("response bodies are objects");

    let order: Order = transformer.to_model(response)?;
    println!("order #{:?}: {:?}, {} line item(s)", order.id, order.status, order.line_items.len());
    println!(
        "billed to {} <{}>",
        order.billing.as_ref().map(|b| b.address.first_name.as_str()).unwrap_or("?"),
        order.billing.as_ref().map(|b| b.email.as_str()).unwrap_or("?"),
    );

    let request = transformer.from_model(order.to_bag()?)?;
    println!(
        "request body: {}",
        serde_json::to_string_pretty(&request).expect("bags serialize")
    );

    Ok(())
}

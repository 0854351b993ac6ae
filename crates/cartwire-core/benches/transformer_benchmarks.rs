//! Benchmarks for the order transformation pipeline
//!
//! These measure the full pipeline over a representative order payload in
//! both directions, plus the individual transformation kinds.

use cartwire_core::transformers::order_transformer;
use cartwire_core::{bag, Bag, KeyChange, Model, Order, PropertyType, PropertyTypes, Transformation};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

fn sample_response() -> Bag {
    let line_items: Vec<_> = (0..10)
        .map(|i| {
            json!({
                "name": format!("Item {}", i),
                "product_id": 100 + i,
                "variation_id": 0,
                "quantity": 2,
                "subtotal": "6.00",
                "subtotal_tax": "0.45",
                "total": "6.00",
                "total_tax": "0.45",
                "taxes": [{ "total": "0.45", "subtotal": "0.45" }],
                "sku": format!("SKU-{}", i),
                "price": 3
            })
        })
        .collect();

    bag::as_bag(json!({
        "id": 727,
        "status": "processing",
        "currency": "USD",
        "discount_total": "0.00",
        "total": "60.00",
        "total_tax": "4.50",
        "prices_include_tax": false,
        "customer_id": 26,
        "billing": {
            "first_name": "John",
            "last_name": "Doe",
            "address_1": "969 Market",
            "city": "San Francisco",
            "state": "CA",
            "postcode": "94103",
            "country": "US",
            "email": "john.doe@example.com"
        },
        "line_items": line_items,
        "tax_lines": [
            { "rate_code": "US-CA-STATE TAX", "rate_id": 2, "compound": false, "rate_percent": 7 }
        ],
    }))
    .unwrap()
}

fn bench_to_model(c: &mut Criterion) {
    let transformer = order_transformer().unwrap();
    let response = sample_response();

    c.bench_function("order_to_model", |b| {
        b.iter(|| {
            let order: Order = transformer.to_model(black_box(response.clone())).unwrap();
            black_box(order)
        })
    });
}

fn bench_from_model(c: &mut Criterion) {
    let transformer = order_transformer().unwrap();
    let order: Order = transformer.to_model(sample_response()).unwrap();
    let properties = order.to_bag().unwrap();

    c.bench_function("order_from_model", |b| {
        b.iter(|| black_box(transformer.from_model(black_box(properties.clone())).unwrap()))
    });
}

fn bench_key_change(c: &mut Criterion) {
    let change = KeyChange::new([
        ("discountTotal", "discount_total"),
        ("customerId", "customer_id"),
        ("lineItems", "line_items"),
    ]);
    let properties = bag::as_bag(json!({
        "discountTotal": "0.00",
        "customerId": 26,
        "lineItems": [],
        "currency": "USD",
    }))
    .unwrap();

    c.bench_function("key_change", |b| {
        b.iter(|| black_box(change.from_model(black_box(properties.clone())).unwrap()))
    });
}

fn bench_property_types(c: &mut Criterion) {
    let types = PropertyTypes::new([
        ("customerId", PropertyType::Integer),
        ("pricesIncludeTax", PropertyType::Boolean),
        ("total", PropertyType::String),
    ]);
    let properties = bag::as_bag(json!({
        "customerId": "26",
        "pricesIncludeTax": "false",
        "total": 60,
    }))
    .unwrap();

    c.bench_function("property_types", |b| {
        b.iter(|| black_box(types.from_model(black_box(properties.clone())).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_to_model,
    bench_from_model,
    bench_key_change,
    bench_property_types
);

criterion_main!(benches);

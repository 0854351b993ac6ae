//! Property-based tests for the transformation pipeline
//!
//! These verify the round-trip invariant: any order flattened to its wire
//! form and rebuilt through the reverse pipeline must come back identical,
//! ignorable fields aside.

use cartwire_core::transformers::order_transformer;
use cartwire_core::{
    BillingAddress, KeyChange, MetaData, Model, ModelTransformer, Order, OrderAddress,
    OrderCouponLine, OrderFeeLine, OrderItemTax, OrderLineItem, OrderRefundLine,
    OrderShippingLine, OrderStatus, OrderTaxRate, TaxStatus, Transformation,
};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use serde_json::{json, Value};

// Strategy functions for property testing

/// Strategy for monetary amounts; they travel as strings.
fn money_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,4}\\.[0-9]{2}"
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z ]{1,16}"
}

fn order_status_strategy() -> impl Strategy<Value = OrderStatus> {
    prop_oneof![
        Just(OrderStatus::Pending),
        Just(OrderStatus::Processing),
        Just(OrderStatus::OnHold),
        Just(OrderStatus::Completed),
        Just(OrderStatus::Cancelled),
        Just(OrderStatus::Refunded),
        Just(OrderStatus::Failed),
        Just(OrderStatus::Trash),
    ]
}

fn tax_status_strategy() -> impl Strategy<Value = TaxStatus> {
    prop_oneof![Just(TaxStatus::Taxable), Just(TaxStatus::None)]
}

/// Metadata with no server-assigned id; the id is ignorable on the way out
/// and would not survive a round trip.
fn meta_data_strategy() -> impl Strategy<Value = MetaData> {
    (
        "[a-z_]{1,10}",
        "[a-zA-Z0-9 ]{0,12}",
        option::of("[a-zA-Z ]{1,12}"),
    )
        .prop_map(|(key, value, display_key)| MetaData {
            id: None,
            key,
            value: Value::String(value),
            display_key,
            display_value: None,
        })
}

fn item_tax_strategy() -> impl Strategy<Value = OrderItemTax> {
    (money_strategy(), money_strategy()).prop_map(|(total, subtotal)| OrderItemTax {
        total,
        subtotal,
    })
}

fn tax_rate_strategy() -> impl Strategy<Value = OrderTaxRate> {
    (
        "[A-Z-]{2,10}",
        0..10_000i64,
        name_strategy(),
        any::<bool>(),
        money_strategy(),
        money_strategy(),
        0..100i64,
    )
        .prop_map(
            |(rate_code, rate_id, label, compound_rate, tax_total, shipping_tax_total, rate_percent)| {
                OrderTaxRate {
                    rate_code,
                    rate_id,
                    label,
                    compound_rate,
                    tax_total,
                    shipping_tax_total,
                    rate_percent,
                }
            },
        )
}

fn refund_line_strategy() -> impl Strategy<Value = OrderRefundLine> {
    (name_strategy(), money_strategy()).prop_map(|(reason, total)| OrderRefundLine {
        reason,
        total,
    })
}

fn coupon_line_strategy() -> impl Strategy<Value = OrderCouponLine> {
    (
        "[a-z0-9]{1,10}",
        money_strategy(),
        money_strategy(),
        vec(meta_data_strategy(), 0..2),
    )
        .prop_map(|(code, discount, discount_tax, meta_data)| OrderCouponLine {
            code,
            discount,
            discount_tax,
            meta_data,
        })
}

fn fee_line_strategy() -> impl Strategy<Value = OrderFeeLine> {
    (
        name_strategy(),
        "[a-z-]{0,8}",
        tax_status_strategy(),
        money_strategy(),
        money_strategy(),
        money_strategy(),
        vec(item_tax_strategy(), 0..2),
        vec(meta_data_strategy(), 0..2),
    )
        .prop_map(
            |(name, tax_class, tax_status, amount, total, total_tax, taxes, meta_data)| {
                OrderFeeLine {
                    name,
                    tax_class,
                    tax_status,
                    amount,
                    total,
                    total_tax,
                    taxes,
                    meta_data,
                }
            },
        )
}

fn line_item_strategy() -> impl Strategy<Value = OrderLineItem> {
    (
        (
            name_strategy(),
            1..10_000i64,
            0..100i64,
            1..20i64,
            "[a-z-]{0,8}",
        ),
        (
            money_strategy(),
            money_strategy(),
            money_strategy(),
            money_strategy(),
            vec(item_tax_strategy(), 0..3),
            "[A-Z0-9]{0,8}",
            1..500i64,
            option::of(name_strategy()),
            vec(meta_data_strategy(), 0..2),
        ),
    )
        .prop_map(
            |(
                (name, product_id, variation_id, quantity, tax_class),
                (subtotal, subtotal_tax, total, total_tax, taxes, sku, price, parent_name, meta_data),
            )| {
                OrderLineItem {
                    name,
                    product_id,
                    variation_id,
                    quantity,
                    tax_class,
                    subtotal,
                    subtotal_tax,
                    total,
                    total_tax,
                    taxes,
                    sku,
                    price,
                    parent_name,
                    meta_data,
                }
            },
        )
}

fn shipping_line_strategy() -> impl Strategy<Value = OrderShippingLine> {
    (
        name_strategy(),
        option::of(1..50i64),
        "[0-9]{0,3}",
        money_strategy(),
        money_strategy(),
        vec(item_tax_strategy(), 0..2),
        vec(meta_data_strategy(), 0..2),
    )
        .prop_map(
            |(method_title, method_id, instance_id, total, total_tax, taxes, meta_data)| {
                OrderShippingLine {
                    method_title,
                    method_id,
                    instance_id,
                    total,
                    total_tax,
                    taxes,
                    meta_data,
                }
            },
        )
}

fn address_strategy() -> impl Strategy<Value = OrderAddress> {
    (
        name_strategy(),
        name_strategy(),
        "[a-zA-Z ]{0,12}",
        "[0-9]{1,4} [a-zA-Z ]{1,12}",
        "[a-zA-Z0-9 ]{0,8}",
        name_strategy(),
        "[A-Z]{2}",
        "[0-9]{5}",
        "[A-Z]{2}",
    )
        .prop_map(
            |(first_name, last_name, company, address_1, address_2, city, state, post_code, country)| {
                OrderAddress {
                    first_name,
                    last_name,
                    company,
                    address_1,
                    address_2,
                    city,
                    state,
                    post_code,
                    country,
                }
            },
        )
}

fn billing_address_strategy() -> impl Strategy<Value = BillingAddress> {
    (
        address_strategy(),
        "[a-z]{1,8}@[a-z]{3,6}\\.com",
        "[0-9-]{0,10}",
    )
        .prop_map(|(address, email, phone)| BillingAddress {
            address,
            email,
            phone,
        })
}

fn order_strategy() -> impl Strategy<Value = Order> {
    (
        (
            option::of(1u64..100_000),
            order_status_strategy(),
            "[A-Z]{3}",
            money_strategy(),
            money_strategy(),
            money_strategy(),
            money_strategy(),
            money_strategy(),
            money_strategy(),
            money_strategy(),
        ),
        (
            any::<bool>(),
            0..10_000i64,
            "[a-zA-Z ]{0,20}",
            "[a-z_]{0,10}",
            "[a-z0-9]{0,12}",
            any::<bool>(),
        ),
        (
            option::of(billing_address_strategy()),
            option::of(address_strategy()),
            vec(tax_rate_strategy(), 0..2),
            vec(refund_line_strategy(), 0..2),
            vec(coupon_line_strategy(), 0..2),
            vec(fee_line_strategy(), 0..2),
            vec(line_item_strategy(), 0..3),
            vec(shipping_line_strategy(), 0..2),
            vec(meta_data_strategy(), 0..2),
        ),
    )
        .prop_map(
            |(
                (
                    id,
                    status,
                    currency,
                    discount_total,
                    discount_tax,
                    shipping_total,
                    shipping_tax,
                    cart_tax,
                    total,
                    total_tax,
                ),
                (prices_include_tax, customer_id, customer_note, payment_method, transaction_id, set_paid),
                (
                    billing,
                    shipping,
                    tax_lines,
                    refunds,
                    coupon_lines,
                    fee_lines,
                    line_items,
                    shipping_lines,
                    meta_data,
                ),
            )| {
                Order {
                    id,
                    status,
                    currency,
                    discount_total,
                    discount_tax,
                    shipping_total,
                    shipping_tax,
                    cart_tax,
                    total,
                    total_tax,
                    prices_include_tax,
                    customer_id,
                    customer_note,
                    payment_method,
                    transaction_id,
                    set_paid,
                    billing,
                    shipping,
                    tax_lines,
                    refunds,
                    coupon_lines,
                    fee_lines,
                    line_items,
                    shipping_lines,
                    meta_data,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn order_round_trips_through_wire_format(order in order_strategy()) {
        let transformer = order_transformer().expect("the order transformer configuration is valid");

        let wire = transformer.from_model(order.to_bag().unwrap()).unwrap();
        let rebuilt: Order = transformer.to_model(wire).unwrap();

        prop_assert_eq!(rebuilt, order);
    }

    #[test]
    fn key_renaming_is_total_and_reversible(value in "[a-zA-Z0-9 ]{0,24}") {
        let change = KeyChange::new([("discountTotal", "discount_total")]);

        let mut properties = cartwire_core::Bag::new();
        properties.insert("discountTotal".to_string(), json!(value.clone()));

        let wire = change.from_model(properties).unwrap();
        prop_assert_eq!(wire["discount_total"].clone(), json!(value.clone()));
        prop_assert!(!wire.contains_key("discountTotal"));

        let back = change.to_model(wire).unwrap();
        prop_assert_eq!(back["discountTotal"].clone(), json!(value));
    }

    #[test]
    fn wire_bags_never_gain_fabricated_keys(total in money_strategy()) {
        let transformer = order_transformer().expect("the order transformer configuration is valid");

        let mut properties = cartwire_core::Bag::new();
        properties.insert("total".to_string(), json!(total));

        let wire = transformer.from_model(properties).unwrap();
        prop_assert_eq!(wire.len(), 1);
        prop_assert!(wire.contains_key("total"));
    }
}

// Keep the plain unit assertion close to the property: an empty transformer
// leaves a bag byte-for-byte alone.
#[test]
fn empty_pipeline_is_identity() {
    let transformer = ModelTransformer::new(vec![]);
    let mut properties = cartwire_core::Bag::new();
    properties.insert("anything".to_string(), json!(1));
    let out = transformer.from_model(properties.clone()).unwrap();
    assert_eq!(out, properties);
}

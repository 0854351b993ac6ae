//! Transformers for order resources
//!
//! The declared property types mirror the REST API's order schema exactly.
//! Several monetary fields travel as strings while `ratePercent`, `price`,
//! and `methodId` are integers; that split is the schema's, not ours, and
//! the tables reproduce it as-is.

use crate::error::Result;
use crate::models::orders::{
    BillingAddress, OrderAddress, OrderCouponLine, OrderFeeLine, OrderItemTax, OrderLineItem,
    OrderRefundLine, OrderShippingLine, OrderTaxRate,
};
use crate::models::shared::MetaData;
use crate::transform::{
    IgnoreProperties, KeyChange, ModelTransformer, NestedModel, PropertyType, PropertyTypes,
};
use crate::transformers::shared::meta_data_transformer;

/// Creates a transformer for an order.
pub fn order_transformer() -> Result<ModelTransformer> {
    Ok(ModelTransformer::new(vec![
        Box::new(IgnoreProperties::new(["date_created", "date_modified"])),
        Box::new(NestedModel::<BillingAddress>::single(
            "billing",
            billing_address_transformer(),
        )?),
        Box::new(NestedModel::<OrderAddress>::single(
            "shipping",
            shipping_address_transformer(),
        )?),
        Box::new(NestedModel::<OrderTaxRate>::list(
            "taxLines",
            order_tax_rate_transformer(),
        )?),
        Box::new(NestedModel::<OrderRefundLine>::list(
            "refunds",
            order_refund_line_transformer(),
        )?),
        Box::new(NestedModel::<OrderCouponLine>::list(
            "couponLines",
            order_coupon_line_transformer()?,
        )?),
        Box::new(NestedModel::<OrderFeeLine>::list(
            "feeLines",
            order_fee_line_transformer()?,
        )?),
        Box::new(NestedModel::<OrderLineItem>::list(
            "lineItems",
            order_line_item_transformer()?,
        )?),
        Box::new(NestedModel::<OrderShippingLine>::list(
            "shippingLines",
            order_shipping_line_transformer()?,
        )?),
        Box::new(NestedModel::<MetaData>::list(
            "metaData",
            meta_data_transformer(),
        )?),
        Box::new(PropertyTypes::new([
            ("status", PropertyType::String),
            ("currency", PropertyType::String),
            ("discountTotal", PropertyType::String),
            ("discountTax", PropertyType::String),
            ("shippingTotal", PropertyType::String),
            ("shippingTax", PropertyType::String),
            ("cartTax", PropertyType::String),
            ("total", PropertyType::String),
            ("totalTax", PropertyType::String),
            ("pricesIncludeTax", PropertyType::Boolean),
            ("customerId", PropertyType::Integer),
            ("customerNote", PropertyType::String),
            ("paymentMethod", PropertyType::String),
            ("transactionId", PropertyType::String),
            ("setPaid", PropertyType::Boolean),
        ])),
        Box::new(KeyChange::new([
            ("discountTotal", "discount_total"),
            ("discountTax", "discount_tax"),
            ("shippingTotal", "shipping_total"),
            ("shippingTax", "shipping_tax"),
            ("cartTax", "cart_tax"),
            ("totalTax", "total_tax"),
            ("pricesIncludeTax", "prices_include_tax"),
            ("customerId", "customer_id"),
            ("customerNote", "customer_note"),
            ("paymentMethod", "payment_method"),
            ("transactionId", "transaction_id"),
            ("setPaid", "set_paid"),
            ("lineItems", "line_items"),
            ("taxLines", "tax_lines"),
            ("shippingLines", "shipping_lines"),
            ("feeLines", "fee_lines"),
            ("couponLines", "coupon_lines"),
            ("metaData", "meta_data"),
        ])),
    ]))
}

/// Creates a transformer for a billing address.
pub fn billing_address_transformer() -> ModelTransformer {
    ModelTransformer::new(vec![
        Box::new(PropertyTypes::new([
            ("firstName", PropertyType::String),
            ("lastName", PropertyType::String),
            ("company", PropertyType::String),
            ("address1", PropertyType::String),
            ("address2", PropertyType::String),
            ("city", PropertyType::String),
            ("state", PropertyType::String),
            ("postCode", PropertyType::String),
            ("country", PropertyType::String),
            ("phone", PropertyType::String),
            ("email", PropertyType::String),
        ])),
        Box::new(KeyChange::new([
            ("firstName", "first_name"),
            ("lastName", "last_name"),
            ("address1", "address_1"),
            ("address2", "address_2"),
            ("postCode", "postcode"),
        ])),
    ])
}

/// Creates a transformer for a shipping address.
pub fn shipping_address_transformer() -> ModelTransformer {
    ModelTransformer::new(vec![
        Box::new(PropertyTypes::new([
            ("firstName", PropertyType::String),
            ("lastName", PropertyType::String),
            ("company", PropertyType::String),
            ("address1", PropertyType::String),
            ("address2", PropertyType::String),
            ("city", PropertyType::String),
            ("state", PropertyType::String),
            ("postCode", PropertyType::String),
            ("country", PropertyType::String),
        ])),
        Box::new(KeyChange::new([
            ("firstName", "first_name"),
            ("lastName", "last_name"),
            ("address1", "address_1"),
            ("address2", "address_2"),
            ("postCode", "postcode"),
        ])),
    ])
}

/// Creates a transformer for an order tax rate.
fn order_tax_rate_transformer() -> ModelTransformer {
    ModelTransformer::new(vec![
        Box::new(PropertyTypes::new([
            ("rateCode", PropertyType::String),
            ("rateId", PropertyType::Integer),
            ("label", PropertyType::String),
            ("compoundRate", PropertyType::Boolean),
            ("taxTotal", PropertyType::String),
            ("shippingTaxTotal", PropertyType::String),
            ("ratePercent", PropertyType::Integer),
        ])),
        Box::new(KeyChange::new([
            ("rateCode", "rate_code"),
            ("ratePercent", "rate_percent"),
            ("rateId", "rate_id"),
            ("compoundRate", "compound"),
            ("taxTotal", "tax_total"),
            ("shippingTaxTotal", "shipping_tax_total"),
        ])),
    ])
}

/// Creates a transformer for an order refund line.
fn order_refund_line_transformer() -> ModelTransformer {
    ModelTransformer::new(vec![Box::new(PropertyTypes::new([
        ("reason", PropertyType::String),
        ("total", PropertyType::String),
    ]))])
}

/// Creates a transformer for an order coupon line.
fn order_coupon_line_transformer() -> Result<ModelTransformer> {
    Ok(ModelTransformer::new(vec![
        Box::new(NestedModel::<MetaData>::list(
            "metaData",
            meta_data_transformer(),
        )?),
        Box::new(PropertyTypes::new([
            ("code", PropertyType::String),
            ("discount", PropertyType::String),
            ("discountTax", PropertyType::String),
        ])),
        Box::new(KeyChange::new([
            ("discountTax", "discount_tax"),
            ("metaData", "meta_data"),
        ])),
    ]))
}

/// Creates a transformer for an order fee line.
fn order_fee_line_transformer() -> Result<ModelTransformer> {
    Ok(ModelTransformer::new(vec![
        Box::new(NestedModel::<OrderItemTax>::list(
            "taxes",
            order_tax_rate_transformer(),
        )?),
        Box::new(PropertyTypes::new([
            ("name", PropertyType::String),
            ("taxClass", PropertyType::String),
            ("taxStatus", PropertyType::String),
            ("total", PropertyType::String),
            ("totalTax", PropertyType::String),
        ])),
        Box::new(KeyChange::new([
            ("taxClass", "tax_class"),
            ("taxStatus", "tax_status"),
            ("totalTax", "total_tax"),
        ])),
    ]))
}

/// Creates a transformer for an order line item.
fn order_line_item_transformer() -> Result<ModelTransformer> {
    Ok(ModelTransformer::new(vec![
        Box::new(NestedModel::<OrderItemTax>::list(
            "taxes",
            order_tax_rate_transformer(),
        )?),
        Box::new(PropertyTypes::new([
            ("name", PropertyType::String),
            ("productId", PropertyType::Integer),
            ("variationId", PropertyType::Integer),
            ("quantity", PropertyType::Integer),
            ("taxClass", PropertyType::String),
            ("subtotal", PropertyType::String),
            ("subtotalTax", PropertyType::String),
            ("total", PropertyType::String),
            ("totalTax", PropertyType::String),
            ("sku", PropertyType::String),
            ("price", PropertyType::Integer),
            ("parentName", PropertyType::String),
        ])),
        Box::new(KeyChange::new([
            ("productId", "product_id"),
            ("variationId", "variation_id"),
            ("taxClass", "tax_class"),
            ("subtotalTax", "subtotal_tax"),
            ("totalTax", "total_tax"),
        ])),
    ]))
}

/// Creates a transformer for an order shipping line.
fn order_shipping_line_transformer() -> Result<ModelTransformer> {
    Ok(ModelTransformer::new(vec![
        Box::new(NestedModel::<OrderItemTax>::list(
            "taxes",
            order_tax_rate_transformer(),
        )?),
        Box::new(PropertyTypes::new([
            ("methodTitle", PropertyType::String),
            ("methodId", PropertyType::Integer),
            ("total", PropertyType::String),
            ("totalTax", PropertyType::String),
        ])),
        Box::new(KeyChange::new([
            ("methodTitle", "method_title"),
            ("methodId", "method_id"),
            ("totalTax", "total_tax"),
        ])),
    ]))
}

//! The order model family
//!
//! Field defaults mirror the REST schema's documented defaults, including the
//! sentinel `-1` values for identifiers and quantities that have not been
//! assigned yet.

use serde::{Deserialize, Serialize};

use crate::model::Model;
use crate::models::shared::MetaData;

/// Lifecycle states the REST API reports for an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    OnHold,
    Completed,
    Cancelled,
    Refunded,
    Failed,
    Trash,
}

/// Tax treatment for a fee line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxStatus {
    #[default]
    Taxable,
    None,
}

/// A physical address attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderAddress {
    /// The first name of the person at the address.
    pub first_name: String,

    /// The last name of the person at the address.
    pub last_name: String,

    /// The company name at the address.
    pub company: String,

    /// The first address line.
    pub address_1: String,

    /// The second address line.
    pub address_2: String,

    /// The city.
    pub city: String,

    /// The state or province.
    pub state: String,

    /// The postal code.
    pub post_code: String,

    /// The country code.
    pub country: String,
}

impl Model for OrderAddress {
    const NAME: &'static str = "OrderAddress";
}

/// A billing address: the base address plus contact details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BillingAddress {
    /// The base address fields, flattened into the same bag.
    #[serde(flatten)]
    pub address: OrderAddress,

    /// The email address of the person at the address.
    pub email: String,

    /// The phone number of the person at the address.
    pub phone: String,
}

impl Model for BillingAddress {
    const NAME: &'static str = "BillingAddress";
}

/// Per-rate tax totals attached to an order item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderItemTax {
    /// The total tax for this rate on this item.
    pub total: String,

    /// The subtotal tax for this rate on this item.
    pub subtotal: String,
}

impl Model for OrderItemTax {
    const NAME: &'static str = "OrderItemTax";
}

/// A tax rate applied to an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderTaxRate {
    /// The tax rate code.
    pub rate_code: String,

    /// The tax rate id.
    pub rate_id: i64,

    /// The tax label.
    pub label: String,

    /// Whether this is a compound tax rate.
    pub compound_rate: bool,

    /// The total tax for this rate code.
    pub tax_total: String,

    /// The total shipping tax for this rate code.
    pub shipping_tax_total: String,

    /// The tax rate as a percentage.
    pub rate_percent: i64,
}

impl Model for OrderTaxRate {
    const NAME: &'static str = "OrderTaxRate";
}

/// A product line on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderLineItem {
    /// The name of the product.
    pub name: String,

    /// The ID of the product.
    pub product_id: i64,

    /// The ID of the product variation.
    pub variation_id: i64,

    /// The quantity ordered.
    pub quantity: i64,

    /// The tax class for the product.
    pub tax_class: String,

    /// The subtotal for the product.
    pub subtotal: String,

    /// The subtotal tax for the product.
    pub subtotal_tax: String,

    /// The total including adjustments.
    pub total: String,

    /// The total tax including adjustments.
    pub total_tax: String,

    /// The taxes applied to the product.
    pub taxes: Vec<OrderItemTax>,

    /// The product SKU.
    pub sku: String,

    /// The unit price of the product.
    pub price: i64,

    /// The name of the parent product, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,

    /// Metadata attached to the line.
    pub meta_data: Vec<MetaData>,
}

impl Default for OrderLineItem {
    fn default() -> Self {
        Self {
            name: String::new(),
            product_id: -1,
            variation_id: 0,
            quantity: -1,
            tax_class: String::new(),
            subtotal: String::new(),
            subtotal_tax: String::new(),
            total: String::new(),
            total_tax: String::new(),
            taxes: Vec::new(),
            sku: String::new(),
            price: -1,
            parent_name: None,
            meta_data: Vec::new(),
        }
    }
}

impl Model for OrderLineItem {
    const NAME: &'static str = "OrderLineItem";
}

/// A shipping method line on an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderShippingLine {
    /// The shipping method title.
    pub method_title: String,

    /// The shipping method id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_id: Option<i64>,

    /// The shipping method instance id.
    pub instance_id: String,

    /// The total shipping amount for this method.
    pub total: String,

    /// The total tax amount for this method.
    pub total_tax: String,

    /// The taxes applied to this method.
    pub taxes: Vec<OrderItemTax>,

    /// Metadata attached to the line.
    pub meta_data: Vec<MetaData>,
}

impl Model for OrderShippingLine {
    const NAME: &'static str = "OrderShippingLine";
}

/// A fee line on an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderFeeLine {
    /// The name of the fee.
    pub name: String,

    /// The tax class of the fee.
    pub tax_class: String,

    /// The tax status of the fee.
    pub tax_status: TaxStatus,

    /// The amount charged.
    pub amount: String,

    /// The display total for the fee.
    pub total: String,

    /// The total tax for the fee.
    pub total_tax: String,

    /// The taxes applied to the fee.
    pub taxes: Vec<OrderItemTax>,

    /// Metadata attached to the line.
    pub meta_data: Vec<MetaData>,
}

impl Model for OrderFeeLine {
    const NAME: &'static str = "OrderFeeLine";
}

/// A coupon applied to an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderCouponLine {
    /// The coupon code.
    pub code: String,

    /// The discount amount.
    pub discount: String,

    /// The discount tax.
    pub discount_tax: String,

    /// Metadata attached to the line.
    pub meta_data: Vec<MetaData>,
}

impl Model for OrderCouponLine {
    const NAME: &'static str = "OrderCouponLine";
}

/// A refund issued against an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderRefundLine {
    /// The reason for the refund.
    pub reason: String,

    /// The total amount refunded.
    pub total: String,
}

impl Model for OrderRefundLine {
    const NAME: &'static str = "OrderRefundLine";
}

/// A customer order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    /// Server-assigned identifier; read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The order status.
    pub status: OrderStatus,

    /// The currency the order was placed in.
    pub currency: String,

    /// The total discount across all items.
    pub discount_total: String,

    /// The tax on the total discount.
    pub discount_tax: String,

    /// The total shipping cost.
    pub shipping_total: String,

    /// The tax on shipping.
    pub shipping_tax: String,

    /// The tax on the cart contents.
    pub cart_tax: String,

    /// The grand total.
    pub total: String,

    /// The total tax.
    pub total_tax: String,

    /// Whether the listed prices include tax.
    pub prices_include_tax: bool,

    /// The id of the customer who placed the order.
    pub customer_id: i64,

    /// A note the customer left on the order.
    pub customer_note: String,

    /// The payment method identifier.
    pub payment_method: String,

    /// The payment transaction id.
    pub transaction_id: String,

    /// Whether the order should be marked paid on submission.
    pub set_paid: bool,

    /// The billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<BillingAddress>,

    /// The shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<OrderAddress>,

    /// The tax rates applied to the order.
    pub tax_lines: Vec<OrderTaxRate>,

    /// Refunds issued against the order.
    pub refunds: Vec<OrderRefundLine>,

    /// Coupons applied to the order.
    pub coupon_lines: Vec<OrderCouponLine>,

    /// Fee lines on the order.
    pub fee_lines: Vec<OrderFeeLine>,

    /// Product lines on the order.
    pub line_items: Vec<OrderLineItem>,

    /// Shipping method lines on the order.
    pub shipping_lines: Vec<OrderShippingLine>,

    /// Metadata attached to the order.
    pub meta_data: Vec<MetaData>,
}

impl Model for Order {
    const NAME: &'static str = "Order";
}

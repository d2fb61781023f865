//! Shipping label document assembly.
//!
//! Builds one printable HTML document from a list of order records, one
//! label block per order. The operator opens the document and prints it from
//! there; page layout beyond plain HTML/CSS is the browser's business.

use std::sync::OnceLock;

use minijinja::Environment;
use serde::Serialize;

use crate::error::AppError;
use crate::models::Order;

static ENVIRONMENT: OnceLock<Environment<'static>> = OnceLock::new();

const LABEL_TEMPLATE_NAME: &str = "labels.html";

const LABEL_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Shipping labels</title>
<style>
  body { font-family: sans-serif; margin: 0; }
  .label { border: 1px solid #000; padding: 12px 16px; margin: 8px; page-break-inside: avoid; }
  .number { font-size: 18px; font-weight: bold; }
  .row { margin-top: 4px; }
  .total { margin-top: 8px; font-weight: bold; }
</style>
</head>
<body>
{%- for order in orders %}
<div class="label">
  <div class="number">{{ order.number }}</div>
  <div class="row">{{ order.customer_name }} &mdash; {{ order.phone }}</div>
  <div class="row">{{ order.address }}, {{ order.city }}</div>
  {%- if order.note %}
  <div class="row">Note: {{ order.note }}</div>
  {%- endif %}
  <div class="row">{{ order.items | length }} line(s), {{ order.item_count }} item(s)</div>
  <div class="total">COD: {{ order.total }}</div>
</div>
{%- endfor %}
</body>
</html>
"#;

#[derive(Serialize)]
struct LabelEntry<'a> {
    #[serde(flatten)]
    order: &'a Order,
    item_count: u32,
}

fn environment() -> &'static Environment<'static> {
    ENVIRONMENT.get_or_init(|| {
        let mut environment = Environment::new();
        environment
            .add_template(LABEL_TEMPLATE_NAME, LABEL_TEMPLATE)
            .expect("label template is valid");
        environment
    })
}

/// Render the label document for the given orders, in the order given.
/// An empty slice yields a document with no label blocks.
pub fn render_labels(orders: &[Order]) -> Result<String, AppError> {
    let entries: Vec<LabelEntry<'_>> = orders
        .iter()
        .map(|order| LabelEntry {
            order,
            item_count: order.item_count(),
        })
        .collect();

    let template = environment().get_template(LABEL_TEMPLATE_NAME)?;
    let rendered = template.render(minijinja::context! { orders => entries })?;
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderItem, OrderStatus};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn order(number: &str) -> Order {
        Order {
            id: 1,
            number: number.to_string(),
            customer_name: "Rahim Uddin".to_string(),
            phone: "01700000000".to_string(),
            address: "12 Lake Road".to_string(),
            city: "Dhaka".to_string(),
            note: Some("call before delivery".to_string()),
            status: OrderStatus::Processing,
            shipping_approved: true,
            items: vec![OrderItem {
                id: 1,
                product_id: 7,
                name: "Linen shirt".to_string(),
                quantity: 2,
                unit_price: Decimal::new(14950, 2),
                size: Some("L".to_string()),
                variant: None,
            }],
            subtotal: Decimal::new(29900, 2),
            shipping_fee: Decimal::new(6000, 2),
            total: Decimal::new(35900, 2),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn renders_one_block_per_order() {
        let document = render_labels(&[order("SO-1001"), order("SO-1002")]).unwrap();
        assert_eq!(document.matches("class=\"label\"").count(), 2);
        assert!(document.contains("SO-1001"));
        assert!(document.contains("SO-1002"));
    }

    #[test]
    fn label_carries_customer_and_totals() {
        let document = render_labels(&[order("SO-1001")]).unwrap();
        assert!(document.contains("Rahim Uddin"));
        assert!(document.contains("01700000000"));
        assert!(document.contains("12 Lake Road, Dhaka"));
        assert!(document.contains("call before delivery"));
        assert!(document.contains("2 item(s)"));
        assert!(document.contains("COD: 359"));
    }

    #[test]
    fn empty_order_list_renders_empty_document() {
        let document = render_labels(&[]).unwrap();
        assert!(!document.contains("class=\"label\""));
        assert!(document.contains("<title>Shipping labels</title>"));
    }
}

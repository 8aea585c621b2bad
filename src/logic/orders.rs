use crate::logic::ids;
use crate::model::{NewOrder, Order, OrderCustomer, OrderItem, OrderStatus, OrderUpdate};
use crate::store::{Store, StoreError, StoreResult};
use chrono::Utc;

const KIND: &str = "order";
const MISSING_CUSTOMER: &str = "Missing required customer information";

pub fn order_total(items: &[OrderItem]) -> i64 {
    items.iter().map(|i| i.price * i.quantity).sum()
}

fn require(field: Option<String>) -> StoreResult<String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(StoreError::validation(MISSING_CUSTOMER)),
    }
}

/// Validates a checkout payload and assembles the stored order: generated
/// `ORD-` identifier, computed total, status `pending`. Validation happens
/// before any storage I/O, so a rejected payload never touches disk.
pub fn build_order(new: NewOrder) -> StoreResult<Order> {
    if new.items.is_empty() {
        return Err(StoreError::validation("Order must contain at least one item"));
    }
    let customer = new
        .customer
        .ok_or_else(|| StoreError::validation(MISSING_CUSTOMER))?;
    let full_name = require(customer.full_name)?;
    let email = require(customer.email)?;
    let phone = require(customer.phone)?;
    let address = require(customer.address)?;

    let total = order_total(&new.items);
    Ok(Order {
        order_id: ids::generate_order_id(),
        items: new.items,
        customer: OrderCustomer {
            full_name,
            email,
            phone,
            address,
            city: customer.city,
            zip_code: customer.zip_code,
            country: customer.country,
        },
        note: customer.note.unwrap_or_default(),
        total,
        status: OrderStatus::Pending,
        paid: None,
        cancelled: None,
        created_at: Utc::now(),
    })
}

pub async fn submit_order<S: Store>(store: &S, new: NewOrder) -> StoreResult<Order> {
    let order = build_order(new)?;
    store.append_order(order.clone()).await?;
    log::info!("order {} stored, total {}", order.order_id, order.total);
    Ok(order)
}

/// Orders in reverse chronological order (newest first).
pub async fn list_orders<S: Store>(store: &S) -> StoreResult<Vec<Order>> {
    let mut orders = store.load_orders().await?;
    orders.reverse();
    Ok(orders)
}

pub async fn get_order<S: Store>(store: &S, key: &str) -> StoreResult<Order> {
    let orders = store.load_orders().await?;
    orders
        .into_iter()
        .find(|o| o.order_id == key)
        .ok_or_else(|| StoreError::not_found(KIND, key))
}

/// Applies any subset of `{status, paid, cancelled}`. Cancelling an order
/// also forces its status to `cancelled`.
pub async fn update_order<S: Store>(
    store: &S,
    key: &str,
    update: OrderUpdate,
) -> StoreResult<Order> {
    let key = key.to_string();
    store
        .update_orders(move |mut orders| {
            let index = orders
                .iter()
                .position(|o| o.order_id == key)
                .ok_or_else(|| StoreError::not_found(KIND, key.clone()))?;
            let order = &mut orders[index];
            if let Some(status) = update.status {
                order.status = status;
            }
            if let Some(paid) = update.paid {
                order.paid = Some(paid);
            }
            if let Some(cancelled) = update.cancelled {
                order.cancelled = Some(cancelled);
                if cancelled {
                    order.status = OrderStatus::Cancelled;
                }
            }
            let updated = order.clone();
            Ok((orders, updated))
        })
        .await
}

pub async fn delete_order<S: Store>(store: &S, key: &str) -> StoreResult<()> {
    let key = key.to_string();
    store
        .update_orders(move |orders| {
            let before = orders.len();
            let remaining: Vec<Order> =
                orders.into_iter().filter(|o| o.order_id != key).collect();
            if remaining.len() == before {
                return Err(StoreError::not_found(KIND, key.clone()));
            }
            Ok((remaining, ()))
        })
        .await
}

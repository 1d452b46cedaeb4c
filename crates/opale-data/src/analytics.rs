//! Back-office sales roll-up.

use opale_commerce::checkout::{OrderRecord, OrderStatus};
use opale_commerce::money::Money;
use serde::{Deserialize, Serialize};

/// Aggregates for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SalesSummary {
    /// Total number of orders.
    pub order_count: usize,
    /// Revenue over non-cancelled orders.
    pub revenue: Money,
    /// Orders awaiting the confirmation call.
    pub pending: usize,
    /// Delivered orders.
    pub delivered: usize,
    /// Cancelled orders.
    pub cancelled: usize,
}

/// Roll up a list of orders into dashboard figures.
///
/// Cancelled orders count toward `order_count` but not revenue.
pub fn sales_summary(orders: &[OrderRecord]) -> SalesSummary {
    let mut summary = SalesSummary {
        order_count: orders.len(),
        ..SalesSummary::default()
    };

    for record in orders {
        match record.order.status {
            OrderStatus::Pending => summary.pending += 1,
            OrderStatus::Delivered => summary.delivered += 1,
            OrderStatus::Cancelled => summary.cancelled += 1,
        }
        if record.order.status != OrderStatus::Cancelled {
            summary.revenue = summary.revenue + record.order.order_total;
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use opale_commerce::checkout::{price_checkout, CustomerInfo, DraftOrder};
    use opale_commerce::ids::OrderId;
    use opale_commerce::shipping::DeliveryMethod;

    fn record(n: u64, subtotal: i64, status: OrderStatus) -> OrderRecord {
        let pricing =
            price_checkout(Money::new(subtotal), Some("Alger"), DeliveryMethod::Bureau).unwrap();
        let mut order = DraftOrder::build(
            &CustomerInfo::new("Client", "0550000000"),
            "Alger",
            DeliveryMethod::Bureau,
            &[],
            &pricing,
        );
        order.status = status;
        OrderRecord {
            id: OrderId::new(format!("ord-{n}")),
            order,
            created_at: n as i64,
        }
    }

    #[test]
    fn test_empty_summary() {
        let summary = sales_summary(&[]);
        assert_eq!(summary.order_count, 0);
        assert_eq!(summary.revenue, Money::zero());
    }

    #[test]
    fn test_cancelled_excluded_from_revenue() {
        let orders = vec![
            record(1, 2000, OrderStatus::Pending),
            record(2, 1000, OrderStatus::Delivered),
            record(3, 5000, OrderStatus::Cancelled),
        ];

        let summary = sales_summary(&orders);
        assert_eq!(summary.order_count, 3);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.delivered, 1);
        assert_eq!(summary.cancelled, 1);
        // 2000 + 350 shipping + 1000 + 350 shipping
        assert_eq!(summary.revenue, Money::new(3700));
    }
}

pub mod api;
pub mod ui;

use contracts::domain::billing::{InvoiceDetail, InvoiceListItem};

use crate::shared::crud::{Cell, DetailBlock, ExtraAction, FormState, Resource};
use crate::shared::date_utils::{format_date_or, format_datetime};
use crate::shared::error::ApiError;
use crate::shared::status::{invoice_number, reservation_number, title_case};

pub const INVOICE_STATUSES: &[(&str, &str)] = &[
    ("unpaid", "Unpaid"),
    ("partial", "Partially Paid"),
    ("paid", "Paid"),
    ("cancelled", "Cancelled"),
];

/// Row action key that opens the payment modal.
pub const PAY_ACTION: &str = "pay";

fn method_label(method: &str) -> String {
    api::PAYMENT_METHODS
        .iter()
        .find(|(value, _)| *value == method)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| title_case(&method.replace('_', " ")))
}

/// Invoices are produced by "Generate Bill" and settled by payments; the
/// panel itself only lists and shows them.
pub struct Billing;

impl Resource for Billing {
    const KEY: &'static str = "billing";
    const TITLE: &'static str = "Invoices";
    const SINGULAR: &'static str = "Invoice";
    const ENDPOINT: &'static str = "/api/billing";
    const SEARCH_PARAM: Option<&'static str> = Some("search");
    const FILTER_PARAM: Option<&'static str> = Some("status");
    const CAN_CREATE: bool = false;
    const CAN_EDIT: bool = false;
    const CAN_DELETE: bool = false;
    const CAN_VIEW: bool = true;

    type Item = InvoiceListItem;
    type Detail = InvoiceDetail;
    type Payload = ();

    fn columns() -> Vec<&'static str> {
        vec!["Invoice", "Reservation", "Guest", "Total", "Paid", "Status", "Date"]
    }

    fn cells(i: &InvoiceListItem) -> Vec<Cell> {
        vec![
            Cell::Strong(invoice_number(i.id)),
            Cell::text(reservation_number(i.reservation_id)),
            Cell::text_or_dash(i.guest_name.as_deref().unwrap_or_default()),
            Cell::Amount(i.total),
            Cell::Amount(i.paid_amount.unwrap_or(0.0)),
            Cell::Status(i.status.clone()),
            Cell::text(format_date_or(i.created_at.as_deref(), "-")),
        ]
    }

    fn item_id(i: &InvoiceListItem) -> i64 {
        i.id
    }

    fn filter_options() -> Vec<(&'static str, &'static str)> {
        let mut options = vec![("all", "All Invoices")];
        options.extend_from_slice(INVOICE_STATUSES);
        options
    }

    fn form_from_detail(i: &InvoiceDetail) -> FormState {
        FormState::for_id(i.id)
    }

    fn payload(_form: &FormState) -> Result<(), ApiError> {
        Err(ApiError::Validation("Invoices cannot be edited".to_string()))
    }

    fn details(i: &InvoiceDetail) -> Vec<DetailBlock> {
        let payments = i
            .payments
            .iter()
            .map(|p| {
                vec![
                    Cell::text(p.paid_at.as_deref().map(format_datetime).unwrap_or_default()),
                    Cell::text(method_label(&p.method)),
                    Cell::text_or_dash(p.reference.as_deref().unwrap_or_default()),
                    Cell::Amount(p.amount),
                ]
            })
            .collect();
        vec![
            DetailBlock::Fields(vec![
                ("Invoice", Cell::Strong(invoice_number(i.id))),
                ("Reservation", Cell::text(reservation_number(i.reservation_id))),
                ("Guest", Cell::text_or_dash(i.guest_name.as_deref().unwrap_or_default())),
                ("Status", Cell::Status(i.status.clone())),
                ("Subtotal", Cell::Amount(i.subtotal)),
                ("Tax", Cell::Amount(i.tax)),
                ("Total", Cell::Amount(i.total)),
                ("Paid", Cell::Amount(i.paid())),
                ("Balance Due", Cell::Amount(i.balance())),
            ]),
            DetailBlock::Table {
                title: "Payments",
                headers: vec!["Date", "Method", "Reference", "Amount"],
                rows: payments,
                empty: "No payments recorded",
            },
        ]
    }

    fn extra_actions() -> Vec<ExtraAction> {
        vec![ExtraAction {
            key: PAY_ACTION,
            title: "Record Payment",
            icon: "credit-card",
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::ops::list_path;
    use crate::shared::crud::resource::{column_count, has_actions};
    use serde_json::json;

    #[test]
    fn test_read_only_panel_keeps_action_column() {
        assert!(has_actions::<Billing>());
        assert_eq!(column_count::<Billing>(), 8);
        assert!(Billing::payload(&FormState::default()).is_err());
    }

    #[test]
    fn test_list_query() {
        assert_eq!(
            list_path::<Billing>("Smith", "unpaid"),
            "/api/billing?search=Smith&status=unpaid"
        );
    }

    #[test]
    fn test_details_show_balance_and_payments() {
        let inv: InvoiceDetail = serde_json::from_value(json!({
            "id": 3, "reservation_id": 12, "guest_name": "Ann Lee",
            "subtotal": "200.00", "tax": "20.00", "total": "220.00", "status": "partial",
            "payments": [{"id": 1, "amount": "100.00", "method": "credit_card", "reference": "AUTH-1"}]
        }))
        .unwrap();
        let blocks = Billing::details(&inv);
        match &blocks[0] {
            DetailBlock::Fields(rows) => {
                let balance = rows.iter().find(|(l, _)| *l == "Balance Due").map(|(_, c)| c.display());
                assert_eq!(balance.as_deref(), Some("$120.00"));
            }
            other => panic!("unexpected block {:?}", other),
        }
        match &blocks[1] {
            DetailBlock::Table { rows, .. } => assert_eq!(rows[0][1].display(), "Credit Card"),
            other => panic!("unexpected block {:?}", other),
        }
    }
}

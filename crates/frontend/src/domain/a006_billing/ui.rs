use contracts::domain::billing::InvoiceDetail;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use super::api::{generate_bill, payment_fields, record_payment};
use super::{Billing, PAY_ACTION};
use crate::shared::components::ui::Input;
use crate::shared::crud::ops::fetch_detail;
use crate::shared::crud::{CrudPanel, FormFields, FormState};
use crate::shared::http::GlooClient;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notifier::use_notifier;
use crate::shared::number_format::format_currency;
use crate::shared::status::invoice_number;

#[component]
pub fn BillingPage() -> impl IntoView {
    let refresh = RwSignal::new(0u32);
    let paying: RwSignal<Option<i64>> = RwSignal::new(None);
    let generating = RwSignal::new(false);
    let reload = move || refresh.update(|n| *n += 1);

    view! {
        <div class="billing">
            <div class="billing__toolbar">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| generating.set(true)>
                    {icon("invoices")}
                    " Generate Bill"
                </Button>
            </div>

            <CrudPanel<Billing>
                refresh=refresh
                on_action=Callback::new(move |(key, id): (&'static str, i64)| {
                    if key == PAY_ACTION {
                        paying.set(Some(id));
                    }
                })
            />

            {move || paying.get().map(|invoice_id| view! {
                <PaymentModal
                    invoice_id=invoice_id
                    on_close=Callback::new(move |_| paying.set(None))
                    on_saved=Callback::new(move |_| {
                        paying.set(None);
                        reload();
                    })
                />
            })}

            {move || generating.get().then(|| view! {
                <GenerateBillModal
                    on_close=Callback::new(move |_| generating.set(false))
                    on_saved=Callback::new(move |_| {
                        generating.set(false);
                        reload();
                    })
                />
            })}
        </div>
    }
}

#[component]
fn PaymentModal(invoice_id: i64, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let notifier = use_notifier();
    let form = RwSignal::new(FormState::blank(&payment_fields()));
    let invoice: RwSignal<Option<InvoiceDetail>> = RwSignal::new(None);
    let saving = RwSignal::new(false);

    // Prefill the amount with the outstanding balance.
    spawn_local(async move {
        match fetch_detail::<Billing, _>(&GlooClient, invoice_id).await {
            Ok(detail) => {
                let balance = detail.balance();
                if balance > 0.0 {
                    form.update(|f| f.set("amount", format!("{:.2}", balance)));
                }
                invoice.set(Some(detail));
            }
            Err(e) => log::warn!("billing: GET {} failed: {}", invoice_id, e),
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let current = form.get_untracked();
        spawn_local(async move {
            let result = record_payment(&GlooClient, invoice_id, &current).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    notifier.success("Payment recorded successfully");
                    on_saved.run(());
                }
                Err(e) => {
                    if !e.is_validation() {
                        log::warn!("billing: payment for {} failed: {}", invoice_id, e);
                    }
                    notifier.error(e.user_message("Failed to record payment"));
                }
            }
        });
    };

    let summary = move || {
        invoice.get().map(|inv| view! {
            <div class="payment-summary">
                <span>"Total: " {format_currency(inv.total)}</span>
                <span>"Paid: " {format_currency(inv.paid())}</span>
                <strong>"Balance: " {format_currency(inv.balance())}</strong>
            </div>
        })
    };

    view! {
        <ModalFrame title=format!("Record Payment - {}", invoice_number(invoice_id)) on_close=on_close>
            <form on:submit=on_submit>
                <div class="modal-body">
                    {summary}
                    <FormFields fields=payment_fields() form=form disabled=saving />
                </div>
                <div class="modal-footer">
                    <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Record Payment" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}

#[component]
fn GenerateBillModal(on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let notifier = use_notifier();
    let reservation = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let text = reservation.get_untracked();
        spawn_local(async move {
            let result = generate_bill(&GlooClient, &text).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    notifier.success("Bill generated successfully");
                    on_saved.run(());
                }
                Err(e) => {
                    if !e.is_validation() {
                        log::warn!("billing: generate for {:?} failed: {}", text, e);
                    }
                    notifier.error(e.user_message("Failed to generate bill"));
                }
            }
        });
    };

    view! {
        <ModalFrame title="Generate Bill" on_close=on_close>
            <form on:submit=on_submit>
                <div class="modal-body">
                    <Input
                        label="Reservation"
                        value=reservation
                        on_input=Callback::new(move |v: String| reservation.set(v))
                        placeholder="RES-0001"
                        required=true
                        id="generate-bill-reservation"
                    />
                </div>
                <div class="modal-footer">
                    <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Generating..." } else { "Generate" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}

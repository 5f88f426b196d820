use std::marker::PhantomData;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{
    Badge, Button, ButtonAppearance, Flex, FlexAlign, FlexGap, Table, TableBody, TableCell,
    TableHeader, TableHeaderCell, TableRow,
};

use super::form::{FieldKind, FieldSpec, FormState, SelectSource};
use super::lookups::{use_lookups, LookupStore};
use super::ops::{
    delete_confirmed, delete_failed_message, deleted_message, detail_failed_message,
    fetch_detail, load_failed_message, load_with_dependencies, save_failed_message, submit,
    DeleteOutcome,
};
use super::resource::{column_count, empty_message, has_actions, Cell, DetailBlock, Resource};
use super::state::{ModalState, PanelState};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Checkbox, Input, Select, StatusBadge, Textarea};
use crate::shared::http::GlooClient;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::notifier::use_notifier;
use crate::shared::number_format::format_currency;

fn confirm_dialog(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn render_cell(cell: Cell) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <span>{text}</span> }.into_any(),
        Cell::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
        Cell::Muted(text) => view! { <span class="text-muted">{text}</span> }.into_any(),
        Cell::Status(token) => view! { <StatusBadge status=token /> }.into_any(),
        Cell::Amount(amount) => {
            view! { <span class="amount">{format_currency(amount)}</span> }.into_any()
        }
    }
}

fn render_block(block: DetailBlock) -> AnyView {
    match block {
        DetailBlock::Fields(rows) => view! {
            <dl class="detail-list">
                {rows
                    .into_iter()
                    .map(|(label, cell)| view! {
                        <dt class="detail-list__label">{label}</dt>
                        <dd class="detail-list__value">{render_cell(cell)}</dd>
                    })
                    .collect_view()}
            </dl>
        }
        .into_any(),
        DetailBlock::Table { title, headers, rows, empty } => {
            let colspan = headers.len().max(1).to_string();
            let body = if rows.is_empty() {
                view! {
                    <tr>
                        <td class="table__empty" colspan=colspan>{empty}</td>
                    </tr>
                }
                .into_any()
            } else {
                rows.into_iter()
                    .map(|row| view! {
                        <tr>
                            {row.into_iter().map(|c| view! { <td>{render_cell(c)}</td> }).collect_view()}
                        </tr>
                    })
                    .collect_view()
                    .into_any()
            };
            view! {
                <div class="detail-section">
                    <h3 class="detail-section__title">{title}</h3>
                    <table class="detail-table">
                        <thead>
                            <tr>{headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}</tr>
                        </thead>
                        <tbody>{body}</tbody>
                    </table>
                </div>
            }
            .into_any()
        }
    }
}

fn field_view(
    spec: FieldSpec,
    form: RwSignal<FormState>,
    editing: bool,
    disabled: Signal<bool>,
    lookups: LookupStore,
) -> AnyView {
    let name = spec.name;
    let locked = editing && spec.locked_on_edit;
    let is_disabled = Signal::derive(move || locked || disabled.get());
    let value = Signal::derive(move || form.with(|f| f.get(name).to_string()));
    let set_value = Callback::new(move |v: String| form.update(|f| f.set(name, v)));
    let id = format!("field-{}", name);

    match spec.kind {
        FieldKind::TextArea => view! {
            <Textarea
                label=spec.label
                value=value
                on_input=set_value
                disabled=is_disabled
                id=id
            />
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <Checkbox
                label=spec.label
                checked=Signal::derive(move || form.with(|f| f.flag(name)))
                on_change=Callback::new(move |checked: bool| form.update(|f| f.set_flag(name, checked)))
                disabled=is_disabled
                id=id
            />
        }
        .into_any(),
        FieldKind::Select(source) => {
            let options = match source {
                SelectSource::Static(list) => Signal::derive(move || {
                    list.iter()
                        .map(|(v, l)| (v.to_string(), l.to_string()))
                        .collect::<Vec<_>>()
                }),
                SelectSource::Lookup(lookup) => Signal::derive(move || lookups.options(lookup)),
            };
            view! {
                <Select
                    label=spec.label
                    value=value
                    on_change=set_value
                    options=options
                    placeholder=format!("Select {}", spec.label.to_lowercase())
                    disabled=is_disabled
                    required=spec.required
                    id=id
                />
            }
            .into_any()
        }
        kind => view! {
            <Input
                label=spec.label
                value=value
                on_input=set_value
                input_type=kind.input_type()
                step=kind.step()
                disabled=is_disabled
                required=spec.required
                id=id
            />
        }
        .into_any(),
    }
}

/// Inputs for `fields`, bound to `form`.
///
/// While `editing`, `create_only` fields are hidden and `locked_on_edit`
/// fields are disabled.
#[component]
pub fn FormFields(
    fields: Vec<FieldSpec>,
    form: RwSignal<FormState>,
    #[prop(optional)]
    editing: bool,
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let lookups = use_lookups();
    let inputs = fields
        .into_iter()
        .filter(|f| f.is_active(editing))
        .map(|spec| field_view(spec, form, editing, disabled, lookups))
        .collect_view();

    view! { <div class="form__fields">{inputs}</div> }
}

/// List, search, filter, create/edit modal, view modal and delete for one resource.
///
/// Mounting the panel triggers its first load (after the lookups it
/// depends on); later loads are user-triggered.
#[component]
pub fn CrudPanel<R: Resource>(
    /// Bumped by the host page to force a reload
    #[prop(optional)]
    refresh: Option<RwSignal<u32>>,
    /// Handler for extra row actions: `(action key, row id)`
    #[prop(optional)]
    on_action: Option<Callback<(&'static str, i64)>>,
    #[prop(optional)]
    _resource: PhantomData<R>,
) -> impl IntoView {
    let notifier = use_notifier();
    let lookups = use_lookups();
    let state = RwSignal::new(PanelState::<R::Item, R::Detail>::default());
    let form = RwSignal::new(FormState::default());
    let search = RwSignal::new(String::new());
    let filter = RwSignal::new("all".to_string());

    let load = move || {
        let mut ticket = 0;
        state.update(|s| ticket = s.begin_load());
        let search_text = search.get_untracked();
        let filter_value = filter.get_untracked();
        spawn_local(async move {
            let result =
                load_with_dependencies::<R, _, _>(&GlooClient, &lookups, &search_text, &filter_value)
                    .await;
            match result {
                Ok(items) => state.update(|s| {
                    if !s.apply_items(ticket, items) {
                        log::debug!("{}: dropped stale list response", R::KEY);
                    }
                }),
                Err(e) => {
                    log::warn!("{}: load failed: {}", R::KEY, e);
                    let mut current = false;
                    state.update(|s| current = s.fail_load(ticket));
                    if current {
                        notifier.error(load_failed_message::<R>());
                    }
                }
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded || s.loading) {
            load();
        }
    });

    if let Some(refresh) = refresh {
        Effect::new(move |prev: Option<u32>| {
            let current = refresh.get();
            if prev.is_some() {
                load();
            }
            current
        });
    }

    let close = move || state.update(|s| s.close_modal());

    let open_create = move || {
        form.set(FormState::blank(&R::fields()));
        state.update(|s| s.open_create());
    };

    let open_edit = move |id: i64| {
        let mut ticket = 0;
        state.update(|s| ticket = s.begin_detail());
        spawn_local(async move {
            match fetch_detail::<R, _>(&GlooClient, id).await {
                Ok(detail) => {
                    if state.with_untracked(|s| s.detail_is_current(ticket)) {
                        form.set(R::form_from_detail(&detail));
                        state.update(|s| {
                            s.open_edit(ticket, id);
                        });
                    }
                }
                Err(e) => {
                    log::warn!("{}: GET {} failed: {}", R::KEY, id, e);
                    if state.with_untracked(|s| s.fail_detail(ticket)) {
                        notifier.error(e.user_message(&detail_failed_message::<R>()));
                    }
                }
            }
        });
    };

    let open_view = move |id: i64| {
        let mut ticket = 0;
        state.update(|s| ticket = s.begin_detail());
        spawn_local(async move {
            match fetch_detail::<R, _>(&GlooClient, id).await {
                Ok(detail) => state.update(|s| {
                    s.open_view(ticket, detail);
                }),
                Err(e) => {
                    log::warn!("{}: GET {} failed: {}", R::KEY, id, e);
                    if state.with_untracked(|s| s.fail_detail(ticket)) {
                        notifier.error(e.user_message(&detail_failed_message::<R>()));
                    }
                }
            }
        });
    };

    let delete = move |id: i64| {
        spawn_local(async move {
            let client = GlooClient;
            match delete_confirmed::<R, _>(&client, id, confirm_dialog).await {
                Ok(DeleteOutcome::Deleted) => {
                    if let Some(lookup) = R::invalidates() {
                        lookups.refresh(&client, lookup).await;
                    }
                    notifier.success(deleted_message::<R>());
                    load();
                }
                Ok(DeleteOutcome::Cancelled) => {}
                Err(e) => {
                    log::warn!("{}: DELETE {} failed: {}", R::KEY, id, e);
                    notifier.error(e.user_message(&delete_failed_message::<R>()));
                }
            }
        });
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut started = None;
        state.update(|s| started = s.begin_save());
        let Some(submitted) = started else {
            return;
        };
        let current = form.get_untracked();
        spawn_local(async move {
            let client = GlooClient;
            let result = submit::<R, _>(&client, &current).await;
            state.update(|s| s.finish_save());
            match result {
                Ok(outcome) => {
                    state.update(|s| {
                        if !s.close_saved(submitted) {
                            log::debug!("{}: modal changed during save, left open", R::KEY);
                        }
                    });
                    if let Some(lookup) = R::invalidates() {
                        lookups.refresh(&client, lookup).await;
                    }
                    notifier.success(outcome.message::<R>());
                    load();
                }
                Err(e) => {
                    if !e.is_validation() {
                        log::warn!("{}: save failed: {}", R::KEY, e);
                    }
                    notifier.error(e.user_message(&save_failed_message::<R>()));
                }
            }
        });
    };

    let modal = Memo::new(move |_| state.with(|s| s.modal));
    let view_open = Memo::new(move |_| state.with(|s| s.viewing.is_some()));
    let saving = Signal::derive(move || state.with(|s| s.saving));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let row_count = Signal::derive(move || state.with(|s| s.items.len()));
    let colspan = column_count::<R>().to_string();
    let with_actions = has_actions::<R>();

    let render_row = move |item: R::Item| {
        let id = R::item_id(&item);
        let cells = R::cells(&item)
            .into_iter()
            .map(|cell| view! { <TableCell>{render_cell(cell)}</TableCell> })
            .collect_view();
        let extra = R::extra_actions()
            .into_iter()
            .map(|action| view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        if let Some(handler) = on_action {
                            handler.run((action.key, id));
                        }
                    }
                    attr:title=action.title
                >
                    {icon(action.icon)}
                </Button>
            })
            .collect_view();
        view! {
            <TableRow>
                {cells}
                {with_actions.then(|| view! {
                    <TableCell>
                        <div class="table__actions">
                            {R::CAN_VIEW.then(|| view! {
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| open_view(id)
                                    attr:title="View"
                                >
                                    {icon("eye")}
                                </Button>
                            })}
                            {R::CAN_EDIT.then(|| view! {
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| open_edit(id)
                                    attr:title="Edit"
                                >
                                    {icon("edit")}
                                </Button>
                            })}
                            {extra}
                            {R::CAN_DELETE.then(|| view! {
                                <Button
                                    appearance=ButtonAppearance::Subtle
                                    on_click=move |_| delete(id)
                                    attr:title="Delete"
                                >
                                    {icon("trash")}
                                </Button>
                            })}
                        </div>
                    </TableCell>
                })}
            </TableRow>
        }
    };

    let table_body = move || {
        let (items, is_loaded) = state.with(|s| (s.items.clone(), s.is_loaded));
        if items.is_empty() {
            let message = if is_loaded {
                empty_message::<R>()
            } else {
                "Loading...".to_string()
            };
            view! {
                <tr>
                    <td class="table__empty" colspan=colspan.clone()>{message}</td>
                </tr>
            }
            .into_any()
        } else {
            items.into_iter().map(render_row).collect_view().into_any()
        }
    };

    let filter_options: Vec<(String, String)> = R::filter_options()
        .into_iter()
        .map(|(v, l)| (v.to_string(), l.to_string()))
        .collect();
    let has_filter = !filter_options.is_empty();

    let toolbar = view! {
        <div class="panel__toolbar">
            <Flex gap=FlexGap::Small align=FlexAlign::End>
                {R::SEARCH_PARAM.map(|_| view! {
                    <form
                        class="panel__search"
                        on:submit=move |ev: SubmitEvent| {
                            ev.prevent_default();
                            load();
                        }
                    >
                        <Input
                            value=search
                            on_input=Callback::new(move |v: String| search.set(v))
                            placeholder=format!("Search {}...", R::TITLE.to_lowercase())
                            id=format!("{}-search", R::KEY)
                        />
                        <button type="submit" class="button button--secondary">
                            {icon("search")}
                            " Search"
                        </button>
                    </form>
                })}
                {has_filter.then(|| view! {
                    <div class="panel__filter">
                        <Select
                            value=filter
                            on_change=Callback::new(move |v: String| {
                                filter.set(v);
                                load();
                            })
                            options=filter_options
                            id=format!("{}-filter", R::KEY)
                        />
                    </div>
                })}
            </Flex>
        </div>
    };

    view! {
        <section class="panel" id=format!("panel-{}", R::KEY)>
            <PageHeader title=R::TITLE>
                <Badge>{move || row_count.get().to_string()}</Badge>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Loading..." } else { " Refresh" }}
                </Button>
                {R::CAN_CREATE.then(|| view! {
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| open_create()>
                        {icon("plus")}
                        {format!(" Add {}", R::SINGULAR)}
                    </Button>
                })}
            </PageHeader>

            {toolbar}

            <div class="table-wrapper">
                <Table attr:id=format!("{}-table", R::KEY) attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {R::columns()
                                .into_iter()
                                .map(|title| view! { <TableHeaderCell>{title}</TableHeaderCell> })
                                .collect_view()}
                            {with_actions.then(|| view! { <TableHeaderCell>"Actions"</TableHeaderCell> })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>{table_body}</TableBody>
                </Table>
            </div>

            {move || {
                let editing = match modal.get() {
                    ModalState::Closed => return None,
                    ModalState::Creating => false,
                    ModalState::Editing { .. } => true,
                };
                let title = if editing {
                    format!("Edit {}", R::SINGULAR)
                } else {
                    format!("New {}", R::SINGULAR)
                };
                Some(view! {
                    <ModalFrame title=title on_close=Callback::new(move |_| close())>
                        <form on:submit=on_submit>
                            <div class="modal-body">
                                <FormFields fields=R::fields() form=form editing=editing disabled=saving />
                            </div>
                            <div class="modal-footer">
                                <button
                                    type="button"
                                    class="button button--secondary"
                                    on:click=move |_| close()
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="submit"
                                    class="button button--primary"
                                    disabled=move || saving.get()
                                >
                                    {move || if saving.get() { "Saving..." } else { "Save" }}
                                </button>
                            </div>
                        </form>
                    </ModalFrame>
                })
            }}

            {move || {
                if !view_open.get() {
                    return None;
                }
                let blocks = state.with_untracked(|s| s.viewing.as_ref().map(|d| R::details(d)))?;
                Some(view! {
                    <ModalFrame
                        title=format!("{} Details", R::SINGULAR)
                        on_close=Callback::new(move |_| close())
                        modal_class="modal--wide"
                    >
                        <div class="modal-body">
                            {blocks.into_iter().map(render_block).collect_view()}
                        </div>
                        <div class="modal-footer">
                            <button
                                type="button"
                                class="button button--secondary"
                                on:click=move |_| close()
                            >
                                "Close"
                            </button>
                        </div>
                    </ModalFrame>
                })
            }}
        </section>
    }
}

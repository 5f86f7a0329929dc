use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaEllipsisVertical, FaSort, FaSortDown, FaSortUp},
    Icon,
};

use crate::{
    client::store::{
        format::{format_install_date, status_text},
        server_table::{SelectAllState, ServerRow, ServerTable, SortDirection, SortField},
    },
    model::server::ServerStatus,
};

#[cfg(feature = "web")]
use crate::client::browser;

const SELECT_ALL_ID: &str = "select-all-servers";

/// Row menu entries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RowAction {
    RunScript,
    Edit,
    Reboot,
    Delete,
}

#[component]
pub fn ServersTable(
    mut table: Signal<ServerTable>,
    on_row_action: EventHandler<(RowAction, String)>,
) -> Element {
    let select_all = table.read().select_all_state();
    let sort = table.read().sort();
    let rows: Vec<ServerRow> = table.read().visible().into_iter().cloned().collect();

    // `indeterminate` only exists as a DOM property.
    #[cfg(feature = "web")]
    use_effect(use_reactive!(|select_all| {
        let partial = select_all == SelectAllState::Partial;
        browser::run_script(format!(
            "const el = document.getElementById('{}'); if (el) el.indeterminate = {};",
            SELECT_ALL_ID, partial
        ));
    }));

    let header = move |field: SortField, label: &'static str| {
        let icon = if sort.field != field {
            rsx!(Icon { width: 12, height: 12, class: "opacity-30", icon: FaSort })
        } else if sort.direction == SortDirection::Asc {
            rsx!(Icon { width: 12, height: 12, icon: FaSortUp })
        } else {
            rsx!(Icon { width: 12, height: 12, icon: FaSortDown })
        };

        rsx!(
            th {
                class: "cursor-pointer select-none",
                onclick: move |_| table.write().sort_by(field),
                span {
                    class: "inline-flex items-center gap-1",
                    "{label}"
                    {icon}
                }
            }
        )
    };

    if rows.is_empty() {
        return rsx!(
            div {
                class: "flex flex-col items-center justify-center gap-2 py-16 opacity-70",
                p { class: "text-lg", "No servers found" }
                p { class: "text-sm", "Add servers or change the search query." }
            }
        );
    }

    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table",
                thead {
                    tr {
                        th {
                            class: "w-10",
                            input {
                                id: SELECT_ALL_ID,
                                r#type: "checkbox",
                                class: "checkbox checkbox-sm",
                                checked: select_all == SelectAllState::Checked,
                                onchange: move |evt| {
                                    if evt.checked() {
                                        table.write().select_all_visible();
                                    } else {
                                        table.write().clear_selection();
                                    }
                                },
                            }
                        }
                        {header(SortField::Ip, "IP address")}
                        {header(SortField::InboundTag, "Inbound")}
                        {header(SortField::Status, "Status")}
                        {header(SortField::InstallDate, "Installed")}
                        th { class: "w-10" }
                    }
                }
                tbody {
                    for row in rows {
                        ServerTableRow {
                            key: "{row.ip}",
                            selected: table.read().is_selected(&row.ip),
                            row,
                            table,
                            on_row_action,
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ServerTableRow(
    row: ServerRow,
    selected: bool,
    mut table: Signal<ServerTable>,
    on_row_action: EventHandler<(RowAction, String)>,
) -> Element {
    let status_class = match row.status {
        ServerStatus::Online => "badge-success",
        ServerStatus::Offline => "badge-error",
        ServerStatus::Unknown => "badge-ghost",
    };
    let installed = format_install_date(row.install_date);
    let status = status_text(row.status);
    let tag = if row.inbound_tag.is_empty() {
        "N/A".to_string()
    } else {
        row.inbound_tag.clone()
    };

    let ip = row.ip.clone();
    let menu_item = move |action: RowAction, label: &'static str, class: &'static str| {
        let ip = ip.clone();
        rsx!(
            li {
                button {
                    class,
                    onclick: move |_| on_row_action.call((action, ip.clone())),
                    "{label}"
                }
            }
        )
    };

    rsx!(
        tr {
            class: if selected { "bg-base-200" } else { "" },
            td {
                input {
                    r#type: "checkbox",
                    class: "checkbox checkbox-sm",
                    checked: selected,
                    onchange: {
                        let ip = row.ip.clone();
                        move |evt: FormEvent| table.write().toggle(&ip, evt.checked())
                    },
                }
            }
            td { class: "font-mono", "{row.ip}" }
            td { "{tag}" }
            td {
                span { class: "badge badge-sm {status_class}", "{status}" }
            }
            td { class: "whitespace-nowrap", "{installed}" }
            td {
                div {
                    class: "dropdown dropdown-end",
                    div {
                        tabindex: "0",
                        role: "button",
                        aria_label: "Actions for {row.ip}",
                        class: "btn btn-ghost btn-sm btn-square",
                        Icon { width: 14, height: 14, icon: FaEllipsisVertical }
                    }
                    ul {
                        tabindex: "0",
                        class: "dropdown-content menu bg-base-100 rounded-box z-10 w-44 p-2 shadow",
                        {menu_item(RowAction::RunScript, "Run script", "")}
                        {menu_item(RowAction::Edit, "Edit", "")}
                        {menu_item(RowAction::Reboot, "Reboot", "text-warning")}
                        {menu_item(RowAction::Delete, "Delete", "text-error")}
                    }
                }
            }
        }
    )
}

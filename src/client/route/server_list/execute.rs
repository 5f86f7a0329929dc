//! Runs confirmed server list actions against the API and reports the outcome.

use dioxus::prelude::*;
use dioxus_logger::tracing;
use futures::future::join_all;

use crate::{
    client::{
        api::{
            script::{reboot_servers, run_scripts},
            server::{delete_server, edit_server},
        },
        component::ToastContext,
        store::{
            bulk::BulkOutcome,
            server_table::ServerTable,
            toast::{delete_progress_ms, ToastKind},
        },
    },
    model::server::{EditServerDto, OperationResultDto},
};

const PROGRESS_TOAST_MS: u32 = 5000;

/// Signals the actions write back to.
#[derive(Clone, Copy)]
pub struct ActionTargets {
    pub table: Signal<ServerTable>,
    pub toasts: ToastContext,
    pub reload: Signal<u32>,
}

pub async fn run_script(mut targets: ActionTargets, ips: Vec<String>, script: String) {
    targets.toasts.push_for(
        format!("Running \"{}\" on {} server(s)...", script, ips.len()),
        ToastKind::Info,
        PROGRESS_TOAST_MS,
    );

    match run_scripts(ips, script.clone()).await {
        Ok(data) => {
            let outcome = BulkOutcome::from_results(&data.results);
            report(&mut targets, &outcome, &format!("Script \"{}\"", script));
        }
        Err(err) => {
            tracing::error!("Failed to run script {}: {}", script, err);
            targets.toasts.push_error("Failed to run script", &err);
        }
    }
}

pub async fn reboot(mut targets: ActionTargets, ips: Vec<String>) {
    targets.toasts.push_for(
        format!("Rebooting {} server(s)...", ips.len()),
        ToastKind::Info,
        PROGRESS_TOAST_MS,
    );

    match reboot_servers(ips).await {
        Ok(data) => {
            let outcome = BulkOutcome::from_results(&data.results);
            report(&mut targets, &outcome, "Reboot");
        }
        Err(err) => {
            tracing::error!("Failed to reboot servers: {}", err);
            targets.toasts.push_error("Failed to reboot", &err);
        }
    }
}

fn report(targets: &mut ActionTargets, outcome: &BulkOutcome, action: &str) {
    targets.toasts.push_for(
        outcome.summary(action),
        outcome.toast_kind(),
        outcome.toast_duration_ms(),
    );
    if outcome.should_clear_selection() {
        targets.table.write().clear_selection();
    }
}

/// One request per server in parallel; only the servers that were actually deleted
/// leave the table.
pub async fn delete(mut targets: ActionTargets, ips: Vec<String>) {
    targets.toasts.push_for(
        format!("Deleting {} server(s)...", ips.len()),
        ToastKind::Info,
        delete_progress_ms(ips.len()),
    );

    let results: Vec<OperationResultDto> = join_all(ips.into_iter().map(|ip| async move {
        match delete_server(ip.clone()).await {
            Ok(operation) => OperationResultDto {
                ip,
                success: operation.success,
                message: operation.message,
            },
            Err(err) => OperationResultDto {
                ip,
                success: false,
                message: err.message,
            },
        }
    }))
    .await;

    let deleted: Vec<String> = results
        .iter()
        .filter(|result| result.success)
        .map(|result| result.ip.clone())
        .collect();
    targets.table.write().remove(&deleted);

    let outcome = BulkOutcome::from_results(&results);
    targets.toasts.push_for(
        outcome.summary("Delete"),
        outcome.toast_kind(),
        outcome.toast_duration_ms(),
    );
}

pub async fn edit(mut targets: ActionTargets, payload: EditServerDto) {
    match edit_server(payload).await {
        Ok(operation) => {
            targets.toasts.push(operation.message, ToastKind::Success);
            targets.reload += 1;
        }
        Err(err) => {
            tracing::error!("Failed to edit server: {}", err);
            targets.toasts.push_error("Failed to update server", &err);
        }
    }
}

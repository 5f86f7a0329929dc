use std::{cmp::Ordering, collections::BTreeSet};

use chrono::{DateTime, Utc};

use crate::{
    client::store::format::{format_install_date, status_text},
    model::server::{ServerDto, ServerStatus, ServerStatusesDto},
};

#[derive(Clone, Debug, PartialEq)]
pub struct ServerRow {
    pub ip: String,
    pub inbound_tag: String,
    pub install_date: Option<DateTime<Utc>>,
    pub status: ServerStatus,
}

impl ServerRow {
    fn matches(&self, needle: &str) -> bool {
        self.ip.to_lowercase().contains(needle)
            || self.inbound_tag.to_lowercase().contains(needle)
            || format_install_date(self.install_date)
                .to_lowercase()
                .contains(needle)
            || status_text(self.status).to_lowercase().contains(needle)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Ip,
    InboundTag,
    Status,
    InstallDate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            field: SortField::InstallDate,
            direction: SortDirection::Desc,
        }
    }
}

impl Sort {
    fn compare(&self, a: &ServerRow, b: &ServerRow) -> Ordering {
        let ordering = match self.field {
            SortField::Ip => a.ip.to_lowercase().cmp(&b.ip.to_lowercase()),
            SortField::InboundTag => a
                .inbound_tag
                .to_lowercase()
                .cmp(&b.inbound_tag.to_lowercase()),
            SortField::Status => status_text(a.status).cmp(status_text(b.status)),
            // `None` sorts before any date
            SortField::InstallDate => a.install_date.cmp(&b.install_date),
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// State of the header checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectAllState {
    Unchecked,
    Checked,
    Partial,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ServerStats {
    pub total: usize,
    pub online: usize,
    pub selected: usize,
}

/// Rows, filter, sort order and selection of the server list page.
///
/// The selection never holds an IP that is not among the loaded rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServerTable {
    rows: Vec<ServerRow>,
    query: String,
    sort: Sort,
    selection: BTreeSet<String>,
}

impl ServerTable {
    pub fn from_parts(servers: Vec<ServerDto>, statuses: &ServerStatusesDto) -> Self {
        let mut table = Self::default();
        table.set_rows(join_statuses(servers, statuses));
        table
    }

    pub fn set_rows(&mut self, rows: Vec<ServerRow>) {
        self.rows = rows;
        let rows = &self.rows;
        self.selection.retain(|ip| rows.iter().any(|row| &row.ip == ip));
    }

    pub fn rows(&self) -> &[ServerRow] {
        &self.rows
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Sort {
        self.sort
    }

    /// Clicking the active ascending column flips it; anything else sorts ascending.
    pub fn sort_by(&mut self, field: SortField) {
        let direction =
            if self.sort.field == field && self.sort.direction == SortDirection::Asc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
        self.sort = Sort { field, direction };
    }

    pub fn visible(&self) -> Vec<&ServerRow> {
        let needle = self.query.trim().to_lowercase();
        let mut rows: Vec<&ServerRow> = self
            .rows
            .iter()
            .filter(|row| needle.is_empty() || row.matches(&needle))
            .collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));
        rows
    }

    pub fn is_selected(&self, ip: &str) -> bool {
        self.selection.contains(ip)
    }

    pub fn toggle(&mut self, ip: &str, checked: bool) {
        if !checked {
            self.selection.remove(ip);
        } else if self.rows.iter().any(|row| row.ip == ip) {
            self.selection.insert(ip.to_string());
        }
    }

    pub fn select_all_visible(&mut self) {
        let ips: Vec<String> = self.visible().iter().map(|row| row.ip.clone()).collect();
        self.selection.extend(ips);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Ctrl/Cmd+A: clear when every visible row is already selected, otherwise select them.
    pub fn toggle_select_all(&mut self) {
        let visible = self.visible();
        let all_selected =
            !visible.is_empty() && visible.iter().all(|row| self.selection.contains(&row.ip));

        if all_selected {
            self.clear_selection();
        } else {
            self.select_all_visible();
        }
    }

    pub fn select_all_state(&self) -> SelectAllState {
        let visible = self.visible();
        let selected = visible
            .iter()
            .filter(|row| self.selection.contains(&row.ip))
            .count();

        if visible.is_empty() || selected == 0 {
            SelectAllState::Unchecked
        } else if selected == visible.len() {
            SelectAllState::Checked
        } else {
            SelectAllState::Partial
        }
    }

    pub fn remove(&mut self, ips: &[String]) {
        self.rows.retain(|row| !ips.contains(&row.ip));
        for ip in ips {
            self.selection.remove(ip);
        }
    }

    pub fn stats(&self) -> ServerStats {
        ServerStats {
            total: self.rows.len(),
            online: self
                .rows
                .iter()
                .filter(|row| row.status == ServerStatus::Online)
                .count(),
            selected: self.selection.len(),
        }
    }

    pub fn selected_ips(&self) -> Vec<String> {
        self.selection.iter().cloned().collect()
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }
}

pub fn join_statuses(servers: Vec<ServerDto>, statuses: &ServerStatusesDto) -> Vec<ServerRow> {
    servers
        .into_iter()
        .map(|server| ServerRow {
            status: statuses
                .statuses
                .get(&server.ip)
                .copied()
                .unwrap_or_default(),
            ip: server.ip,
            inbound_tag: server.inbound_tag,
            install_date: server.install_date,
        })
        .collect()
}

/// Action waiting for confirmation in the server list modal.
#[derive(Clone, Debug, PartialEq)]
pub enum PendingAction {
    /// `script` is preselected when started from the actions bar.
    RunScript {
        ips: Vec<String>,
        script: Option<String>,
    },
    Edit {
        ip: String,
    },
    Delete {
        ips: Vec<String>,
    },
    Reboot {
        ips: Vec<String>,
    },
}

impl PendingAction {
    pub fn title(&self) -> String {
        match self {
            PendingAction::RunScript { .. } => "Run script".to_string(),
            PendingAction::Edit { .. } => "Edit server".to_string(),
            PendingAction::Delete { ips } if ips.len() == 1 => "Delete server".to_string(),
            PendingAction::Delete { .. } => "Delete servers".to_string(),
            PendingAction::Reboot { ips } if ips.len() == 1 => "Reboot server".to_string(),
            PendingAction::Reboot { .. } => "Bulk reboot".to_string(),
        }
    }

    pub fn description(&self) -> String {
        match self {
            PendingAction::RunScript { ips, .. } => {
                format!("Choose a script to run on {}.", targets(ips))
            }
            PendingAction::Edit { ip } => format!("Change the address or inbound of {}.", ip),
            PendingAction::Delete { ips } => {
                format!("Delete {}? This cannot be undone.", targets(ips))
            }
            PendingAction::Reboot { ips } => format!("Reboot {}?", targets(ips)),
        }
    }

    pub fn confirm_label(&self) -> &'static str {
        match self {
            PendingAction::RunScript { .. } => "Run",
            PendingAction::Edit { .. } => "Save",
            PendingAction::Delete { .. } => "Delete",
            PendingAction::Reboot { ips } if ips.len() > 1 => "Reboot all",
            PendingAction::Reboot { .. } => "Reboot",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            PendingAction::Delete { .. } | PendingAction::Reboot { .. }
        )
    }

    /// Checks the modal can be confirmed; the error is shown as a toast and the modal stays.
    pub fn ready(&self) -> Result<(), &'static str> {
        match self {
            PendingAction::RunScript { script, .. }
                if script.as_deref().is_none_or(str::is_empty) =>
            {
                Err("Please select a script.")
            }
            _ => Ok(()),
        }
    }
}

fn targets(ips: &[String]) -> String {
    match ips {
        [ip] => format!("server {}", ip),
        ips => format!("{} selected servers", ips.len()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    CloseOverlays,
    DeleteSelected,
    ToggleSelectAll,
}

/// Keyboard shortcuts of the server list. Only Escape works while typing in a field.
pub fn shortcut_for(
    key: &str,
    ctrl_or_meta: bool,
    typing_in_field: bool,
    has_selection: bool,
) -> Option<Shortcut> {
    if key == "Escape" {
        return Some(Shortcut::CloseOverlays);
    }
    if typing_in_field {
        return None;
    }

    match key {
        "Delete" if has_selection => Some(Shortcut::DeleteSelected),
        "a" | "A" if ctrl_or_meta => Some(Shortcut::ToggleSelectAll),
        _ => None,
    }
}

use std::net::IpAddr;

/// Which form the input belongs to. Only the setup form checks the address, and it
/// accepts exactly what the setup endpoint parses: a bare IPv4 or IPv6 address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IpTagMode {
    Manual,
    Setup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagRejection {
    Empty,
    Duplicate,
    InvalidFormat,
}

impl TagRejection {
    pub fn message(&self, value: &str) -> String {
        match self {
            TagRejection::Empty => "Enter an IP address".to_string(),
            TagRejection::Duplicate => format!("{} is already in the list", value),
            TagRejection::InvalidFormat => format!("{} is not a valid IP address", value),
        }
    }
}

/// What a key press in the tag input should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKeyAction {
    Commit,
    RemoveLast,
    Ignore,
}

pub fn key_action(key: &str, buffer_empty: bool) -> TagKeyAction {
    match key {
        "Enter" | " " | "," => TagKeyAction::Commit,
        "Backspace" if buffer_empty => TagKeyAction::RemoveLast,
        _ => TagKeyAction::Ignore,
    }
}

/// Splits a typed or pasted buffer into complete entries and the unfinished tail.
///
/// `"1.1.1.1, 2.2.2.2 3.3"` yields `["1.1.1.1", "2.2.2.2"]` with `"3.3"` left in the input.
pub fn split_pending(input: &str) -> (Vec<String>, String) {
    let ends_with_separator = input
        .chars()
        .last()
        .is_some_and(|c| c.is_whitespace() || c == ',');

    let mut parts: Vec<String> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();

    let rest = if ends_with_separator {
        String::new()
    } else {
        parts.pop().unwrap_or_default()
    };

    (parts, rest)
}

/// Ordered, duplicate-free list of addresses entered into a tag input.
#[derive(Clone, Debug, PartialEq)]
pub struct IpTags {
    mode: IpTagMode,
    items: Vec<String>,
}

impl IpTags {
    pub fn new(mode: IpTagMode) -> Self {
        Self {
            mode,
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, raw: &str) -> Result<(), TagRejection> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(TagRejection::Empty);
        }
        if self.items.iter().any(|item| item == value) {
            return Err(TagRejection::Duplicate);
        }
        if self.mode == IpTagMode::Setup && !is_address(value) {
            return Err(TagRejection::InvalidFormat);
        }

        self.items.push(value.to_string());
        Ok(())
    }

    /// Adds every entry, returning the ones that were rejected.
    pub fn add_all<I, S>(&mut self, values: I) -> Vec<(String, TagRejection)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .filter_map(|value| {
                let value = value.as_ref();
                self.add(value).err().map(|e| (value.trim().to_string(), e))
            })
            .collect()
    }

    pub fn remove(&mut self, ip: &str) {
        self.items.retain(|item| item != ip);
    }

    pub fn pop_last(&mut self) -> Option<String> {
        self.items.pop()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn submit_label(&self) -> String {
        let count = self.items.len();
        let verb = match self.mode {
            IpTagMode::Manual => "Add",
            IpTagMode::Setup => "Set up",
        };

        match count {
            0 => format!("{} servers", verb),
            1 => format!("{} 1 server", verb),
            n => format!("{} {} servers", verb, n),
        }
    }
}

fn is_address(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}

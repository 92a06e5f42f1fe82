//! Built-in navigation routes and quick actions.

use serde::{Deserialize, Serialize};

/// Page route offered by the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub path: String,
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Domain action offered by the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionEntry {
    pub action_id: String,
    pub label: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

pub const ACTION_NEW_PROJECT: &str = "new-project";
pub const ACTION_NEW_CLIENT: &str = "new-client";
pub const ACTION_NEW_INVOICE: &str = "new-invoice";
pub const ACTION_NEW_NOTE: &str = "new-note";

const NAVIGATION: &[(&str, &str, &[&str])] = &[
    ("/", "Dashboard", &["home", "overview"]),
    ("/projects", "Projects", &["work", "tasks"]),
    ("/documents", "Documents", &["files", "contracts", "sign"]),
    ("/ideas", "Ideas", &["notes", "thoughts"]),
    ("/payments", "Payments", &["invoices", "money", "billing"]),
    ("/clients", "Clients", &["customers", "contacts"]),
    ("/settings", "Settings", &["preferences", "config"]),
];

const ACTIONS: &[(&str, &str, &[&str])] = &[
    (ACTION_NEW_PROJECT, "Create New Project", &["add"]),
    (ACTION_NEW_CLIENT, "Add New Client", &["add"]),
    (ACTION_NEW_INVOICE, "Create Invoice", &["add", "bill"]),
    (ACTION_NEW_NOTE, "Create New Note", &["add", "idea"]),
];

/// Dashboard pages in sidebar order.
pub fn default_navigation() -> Vec<NavigationEntry> {
    NAVIGATION
        .iter()
        .map(|(path, label, keywords)| NavigationEntry {
            path: (*path).to_string(),
            label: (*label).to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        })
        .collect()
}

/// Quick actions in menu order.
pub fn default_actions() -> Vec<ActionEntry> {
    ACTIONS
        .iter()
        .map(|(action_id, label, keywords)| ActionEntry {
            action_id: (*action_id).to_string(),
            label: (*label).to_string(),
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
        })
        .collect()
}

//! Seed data mirroring the dashboard's first-run stores.
//!
//! Used by the CLI, the UI binding and tests so every surface searches the
//! same records.

use crate::catalog::builder::DashboardData;
use crate::model::entity::{BlockKind, Client, Document, Note, NoteBlock, Project};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn project(id: u64, name: &str, client: &str, status: &str, tag_values: &[&str]) -> Project {
    Project {
        id,
        name: name.to_string(),
        description: String::new(),
        client: client.to_string(),
        status: status.to_string(),
        tags: tags(tag_values),
    }
}

fn client(
    id: u64,
    name: &str,
    contact: &str,
    email: &str,
    starred: bool,
    tag_values: &[&str],
) -> Client {
    Client {
        id,
        name: name.to_string(),
        contact_name: contact.to_string(),
        email: email.to_string(),
        starred,
        tags: tags(tag_values),
    }
}

fn document(id: u64, name: &str, doc_type: &str, client: &str, status: &str) -> Document {
    Document {
        id,
        name: name.to_string(),
        doc_type: doc_type.to_string(),
        client: client.to_string(),
        status: status.to_string(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            1,
            "E-commerce Platform Redesign",
            "TechCorp Inc.",
            "in-progress",
            &["Web Design", "E-commerce", "React"],
        ),
        project(
            2,
            "Mobile App Development",
            "StartupXYZ",
            "review",
            &["Mobile", "iOS", "Android"],
        ),
        project(
            3,
            "Brand Identity System",
            "Creative Studios",
            "in-progress",
            &["Branding", "Design System"],
        ),
        project(
            4,
            "API Integration Suite",
            "Enterprise Corp",
            "planning",
            &["Backend", "API", "Integration"],
        ),
        project(
            5,
            "Analytics Dashboard",
            "DataFlow Inc.",
            "completed",
            &["Dashboard", "Data Viz", "React"],
        ),
    ]
}

pub fn clients() -> Vec<Client> {
    vec![
        client(
            1,
            "TechCorp Inc.",
            "John Smith",
            "john@techcorp.com",
            true,
            &["enterprise", "tech"],
        ),
        client(
            2,
            "StartupXYZ",
            "Sarah Johnson",
            "sarah@startupxyz.io",
            true,
            &["startup", "mobile"],
        ),
        client(
            3,
            "Creative Studios",
            "Mike Davis",
            "mike@creativestudios.co",
            false,
            &["design", "branding"],
        ),
        client(
            4,
            "Enterprise Corp",
            "Lisa Chen",
            "lchen@enterprisecorp.com",
            false,
            &["enterprise", "api"],
        ),
        client(
            5,
            "DataFlow Inc.",
            "Alex Turner",
            "alex@dataflow.io",
            false,
            &["data", "analytics"],
        ),
    ]
}

pub fn notes() -> Vec<Note> {
    vec![
        Note {
            id: 1,
            title: "Project Architecture Ideas".to_string(),
            starred: true,
            tags: tags(&["development", "architecture"]),
            blocks: vec![
                NoteBlock::new("b1", BlockKind::Heading1, "Microservices Architecture"),
                NoteBlock::new(
                    "b2",
                    BlockKind::Text,
                    "Consider breaking down the monolith into smaller, manageable services.",
                ),
                NoteBlock::checklist("b3", "API Gateway setup", true),
                NoteBlock::checklist("b4", "Service mesh implementation", false),
                NoteBlock::checklist("b5", "Database per service pattern", false),
                NoteBlock::new(
                    "b6",
                    BlockKind::Quote,
                    "Start with a modular monolith, evolve to microservices when needed.",
                ),
            ],
        },
        Note {
            id: 2,
            title: "Client Meeting Notes - TechCorp".to_string(),
            starred: false,
            tags: tags(&["meeting", "client"]),
            blocks: vec![
                NoteBlock::new("b1", BlockKind::Heading1, "Meeting Summary"),
                NoteBlock::new("b2", BlockKind::Heading2, "Key Requirements"),
                NoteBlock::new("b3", BlockKind::List, "Real-time inventory management"),
                NoteBlock::new("b4", BlockKind::List, "Multi-currency support"),
            ],
        },
        Note {
            id: 3,
            title: "Design System Components".to_string(),
            starred: true,
            tags: tags(&["design", "components"]),
            blocks: vec![
                NoteBlock::new("b1", BlockKind::Heading1, "Core Components"),
                NoteBlock::checklist("b2", "Button variants", true),
                NoteBlock::checklist("b3", "Toast notifications", false),
                NoteBlock::new(
                    "b4",
                    BlockKind::Code,
                    "const Button = ({ variant = \"primary\" }) => ...",
                ),
            ],
        },
        Note {
            id: 4,
            title: "Q1 2025 Goals".to_string(),
            starred: false,
            tags: tags(&["planning", "goals"]),
            blocks: vec![
                NoteBlock::new("b1", BlockKind::Heading1, "Business Goals"),
                NoteBlock::checklist("b2", "Onboard 5 new clients", false),
                NoteBlock::checklist("b3", "Learn Rust basics", false),
            ],
        },
    ]
}

pub fn documents() -> Vec<Document> {
    vec![
        document(
            1,
            "Service Agreement - TechCorp",
            "contract",
            "TechCorp Inc.",
            "signed",
        ),
        document(
            2,
            "Project Proposal - E-commerce Redesign",
            "proposal",
            "TechCorp Inc.",
            "pending",
        ),
        document(3, "NDA - StartupXYZ", "nda", "StartupXYZ", "awaiting"),
        document(
            4,
            "Invoice #2024-047",
            "invoice",
            "Creative Studios",
            "signed",
        ),
        document(
            5,
            "Scope of Work - Mobile App",
            "contract",
            "StartupXYZ",
            "draft",
        ),
        document(
            6,
            "Privacy Policy Template",
            "template",
            "Internal",
            "signed",
        ),
    ]
}

/// Full first-run dashboard snapshot.
pub fn dashboard() -> DashboardData {
    DashboardData {
        projects: projects(),
        clients: clients(),
        notes: notes(),
        documents: documents(),
    }
}

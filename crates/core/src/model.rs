use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Pending,
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 3] = [
        ProjectStatus::Pending,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Pending => "pending",
            ProjectStatus::InProgress => "in-progress",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Result<Self, ProjectStatusError> {
        match value.trim() {
            "pending" => Ok(ProjectStatus::Pending),
            "in-progress" => Ok(ProjectStatus::InProgress),
            "completed" => Ok(ProjectStatus::Completed),
            other => Err(ProjectStatusError::Unknown {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProjectStatusError {
    Unknown { value: String },
}

impl fmt::Display for ProjectStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { value } => {
                write!(
                    f,
                    "unknown project status '{value}' (expected pending, in-progress or completed)"
                )
            }
        }
    }
}

impl std::error::Error for ProjectStatusError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Unpaid => "unpaid",
        }
    }

    pub fn parse(value: &str) -> Result<Self, PaymentStatusError> {
        match value.trim() {
            "paid" => Ok(PaymentStatus::Paid),
            "unpaid" => Ok(PaymentStatus::Unpaid),
            other => Err(PaymentStatusError::Unknown {
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentStatusError {
    Unknown { value: String },
}

impl fmt::Display for PaymentStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { value } => {
                write!(f, "unknown payment status '{value}' (expected paid or unpaid)")
            }
        }
    }
}

impl std::error::Error for PaymentStatusError {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    /// May reference a client that does not exist; lookups tolerate the miss.
    pub client_id: String,
    pub title: String,
    pub budget: f64,
    pub status: ProjectStatus,
    pub payment_status: PaymentStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// May reference a project that does not exist; lookups tolerate the miss.
    pub project_id: String,
    pub amount: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// Derived summary; recomputed from the collections, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_projects: usize,
    pub paid_projects: usize,
    pub unpaid_projects: usize,
    pub total_clients: usize,
    pub total_revenue: f64,
}

/// The full dashboard state. Each collection sits behind its own `Arc` so a
/// transition rebuilds only the path it touches and consumers can detect
/// change with `Arc::ptr_eq`.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub clients: Arc<Vec<Client>>,
    pub projects: Arc<Vec<Project>>,
    pub payments: Arc<Vec<Payment>>,
}

impl DashboardState {
    pub fn new(clients: Vec<Client>, projects: Vec<Project>, payments: Vec<Payment>) -> Self {
        Self {
            clients: Arc::new(clients),
            projects: Arc::new(projects),
            payments: Arc::new(payments),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }

    /// True when every collection is pointer-identical to `other`'s, i.e. no
    /// transition touched anything in between.
    pub fn same_collections(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.clients, &other.clients)
            && Arc::ptr_eq(&self.projects, &other.projects)
            && Arc::ptr_eq(&self.payments, &other.payments)
    }
}

/// Closed set of state transitions. An unhandled kind is a compile error in
/// the reducer, not a silent runtime fallback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    MarkProjectPaid { project_id: String },
    AddPayment { payment: Payment },
    UpdateProjectStatus { project_id: String, status: ProjectStatus },
    AddProject { project: Project },
    AddClient { client: Client },
}

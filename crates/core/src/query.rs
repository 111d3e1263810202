use crate::model::{Client, DashboardStats, Payment, PaymentStatus, Project, ProjectStatus};
use std::fmt;
use time::OffsetDateTime;

pub const NO_EMAIL_PLACEHOLDER: &str = "No email provided";

/// First client carrying `client_id`, if any. Linear scan; references are
/// never validated at write time, so a miss is an expected outcome.
pub fn find_client_by_id<'a>(clients: &'a [Client], client_id: &str) -> Option<&'a Client> {
    clients.iter().find(|client| client.id == client_id)
}

/// First project carrying `project_id`, if any.
pub fn find_project_by_id<'a>(projects: &'a [Project], project_id: &str) -> Option<&'a Project> {
    projects.iter().find(|project| project.id == project_id)
}

/// Case-insensitive substring match on the client name. The empty-term
/// convention (show everything) belongs to the caller, not here.
pub fn search_clients_by_name<'a>(clients: &'a [Client], term: &str) -> Vec<&'a Client> {
    let term = term.to_lowercase();
    clients
        .iter()
        .filter(|client| client.name.to_lowercase().contains(&term))
        .collect()
}

/// Case-insensitive substring match on the project title.
pub fn search_projects_by_title<'a>(projects: &'a [Project], term: &str) -> Vec<&'a Project> {
    let term = term.to_lowercase();
    projects
        .iter()
        .filter(|project| project.title.to_lowercase().contains(&term))
        .collect()
}

pub fn filter_projects_by_status(projects: &[Project], status: ProjectStatus) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| project.status == status)
        .collect()
}

pub fn filter_projects_by_payment_status(
    projects: &[Project],
    payment_status: PaymentStatus,
) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| project.payment_status == payment_status)
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaymentStatusCounts {
    pub paid: usize,
    pub unpaid: usize,
}

/// Single pass; `paid + unpaid` always equals the collection length.
pub fn count_projects_by_payment_status(projects: &[Project]) -> PaymentStatusCounts {
    let mut counts = PaymentStatusCounts { paid: 0, unpaid: 0 };
    for project in projects {
        match project.payment_status {
            PaymentStatus::Paid => counts.paid += 1,
            PaymentStatus::Unpaid => counts.unpaid += 1,
        }
    }
    counts
}

/// Recomputes the summary from the three collections. An empty payment
/// sequence yields zero revenue.
pub fn dashboard_stats(
    clients: &[Client],
    projects: &[Project],
    payments: &[Payment],
) -> DashboardStats {
    let counts = count_projects_by_payment_status(projects);
    let total_revenue = payments.iter().map(|payment| payment.amount).sum();

    DashboardStats {
        total_projects: projects.len(),
        paid_projects: counts.paid,
        unpaid_projects: counts.unpaid,
        total_clients: clients.len(),
        total_revenue,
    }
}

/// The client's email, or the display placeholder when none was recorded.
pub fn client_email(client: &Client) -> &str {
    client.email.as_deref().unwrap_or(NO_EMAIL_PLACEHOLDER)
}

#[derive(Clone, Debug, PartialEq)]
pub enum PaymentError {
    NonPositiveAmount { amount: f64 },
}

impl fmt::Display for PaymentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount { amount } => {
                write!(f, "payment amount must be positive (got {amount})")
            }
        }
    }
}

impl std::error::Error for PaymentError {}

/// Validated payment constructor, the only fallible entry point in this
/// layer. Stamps the current instant when no date is given. Note that the
/// AddPayment action appends whatever it is handed; validation happens here
/// or not at all.
pub fn create_payment(
    project_id: impl Into<String>,
    amount: f64,
    date: Option<OffsetDateTime>,
) -> Result<Payment, PaymentError> {
    if amount <= 0.0 {
        return Err(PaymentError::NonPositiveAmount { amount });
    }

    Ok(Payment {
        project_id: project_id.into(),
        amount,
        date: date.unwrap_or_else(OffsetDateTime::now_utc),
    })
}

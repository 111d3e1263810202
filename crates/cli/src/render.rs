use fd_core::{
    Client, DashboardStats, Payment, PaymentStatus, Project, ProjectStatus, client_email,
    find_client_by_id, find_project_by_id,
};
use serde_json::{Value, json};
use time::{Month, OffsetDateTime};

pub const CLIENT_NOT_FOUND: &str = "Client not found";
pub const PROJECT_NOT_FOUND: &str = "Project not found";

pub fn status_label(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Pending => "Pending",
        ProjectStatus::InProgress => "In Progress",
        ProjectStatus::Completed => "Completed",
    }
}

pub fn payment_status_label(payment_status: PaymentStatus) -> &'static str {
    match payment_status {
        PaymentStatus::Paid => "Paid",
        PaymentStatus::Unpaid => "Unpaid",
    }
}

/// USD with two decimals and thousands separators, e.g. `$12,000.00`.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{fraction:02}")
}

/// Short human date, e.g. `Jan 15, 2025`.
pub fn format_date(date: &OffsetDateTime) -> String {
    let month = match date.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    };
    format!("{month} {}, {}", date.day(), date.year())
}

pub fn stats_text(stats: &DashboardStats) -> String {
    format!(
        "Clients:       {}\nProjects:      {} ({} paid / {} unpaid)\nTotal revenue: {}",
        stats.total_clients,
        stats.total_projects,
        stats.paid_projects,
        stats.unpaid_projects,
        format_currency(stats.total_revenue),
    )
}

pub fn client_line(client: &Client) -> String {
    format!(
        "{}  ({})  {}",
        client.name,
        client.country,
        client_email(client)
    )
}

pub fn project_line(project: &Project, clients: &[Client]) -> String {
    let client_name = find_client_by_id(clients, &project.client_id)
        .map(|client| client.name.as_str())
        .unwrap_or(CLIENT_NOT_FOUND);

    format!(
        "{}  [{} / {}]  client: {}  budget: {}",
        project.title,
        status_label(project.status),
        payment_status_label(project.payment_status),
        client_name,
        format_currency(project.budget),
    )
}

pub fn payment_line(payment: &Payment, projects: &[Project]) -> String {
    let title = find_project_by_id(projects, &payment.project_id)
        .map(|project| project.title.as_str())
        .unwrap_or(PROJECT_NOT_FOUND);

    format!(
        "{}  {}  {}",
        title,
        format_currency(payment.amount),
        format_date(&payment.date),
    )
}

pub fn client_json(client: &Client) -> Value {
    serde_json::to_value(client).unwrap_or(Value::Null)
}

pub fn project_json(project: &Project, clients: &[Client]) -> Value {
    let client_name = find_client_by_id(clients, &project.client_id)
        .map(|client| client.name.as_str())
        .unwrap_or(CLIENT_NOT_FOUND);

    let mut value = serde_json::to_value(project).unwrap_or(Value::Null);
    if let Value::Object(map) = &mut value {
        map.insert("clientName".to_string(), json!(client_name));
    }
    value
}

pub fn payment_json(payment: &Payment, projects: &[Project]) -> Value {
    let title = find_project_by_id(projects, &payment.project_id)
        .map(|project| project.title.as_str())
        .unwrap_or(PROJECT_NOT_FOUND);

    let mut value = serde_json::to_value(payment).unwrap_or(Value::Null);
    if let Value::Object(map) = &mut value {
        map.insert("projectTitle".to_string(), json!(title));
    }
    value
}

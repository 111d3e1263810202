use fd_core::{Client, DashboardState, Payment, PaymentStatus, Project, ProjectStatus};
use time::macros::datetime;

// Fixed dataset loaded at process start. Demo content and fixture baseline
// in one: 3 clients (one without an email), 4 projects (2 paid / 2 unpaid),
// 2 payments totaling 20000.

pub fn seed_clients() -> Vec<Client> {
    vec![
        Client {
            id: "client-1".to_string(),
            name: "Tech Startup Inc".to_string(),
            country: "United States".to_string(),
            email: Some("contact@techstartup.com".to_string()),
        },
        Client {
            id: "client-2".to_string(),
            name: "Design Studio".to_string(),
            country: "United Kingdom".to_string(),
            email: None,
        },
        Client {
            id: "client-3".to_string(),
            name: "E-commerce Solutions".to_string(),
            country: "Canada".to_string(),
            email: Some("hello@ecommerce.com".to_string()),
        },
    ]
}

pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: "project-1".to_string(),
            client_id: "client-1".to_string(),
            title: "Mobile App Development".to_string(),
            budget: 15000.0,
            status: ProjectStatus::InProgress,
            payment_status: PaymentStatus::Unpaid,
        },
        Project {
            id: "project-2".to_string(),
            client_id: "client-2".to_string(),
            title: "Website Redesign".to_string(),
            budget: 8000.0,
            status: ProjectStatus::Completed,
            payment_status: PaymentStatus::Paid,
        },
        Project {
            id: "project-3".to_string(),
            client_id: "client-1".to_string(),
            title: "API Integration".to_string(),
            budget: 5000.0,
            status: ProjectStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
        },
        Project {
            id: "project-4".to_string(),
            client_id: "client-3".to_string(),
            title: "Online Store Setup".to_string(),
            budget: 12000.0,
            status: ProjectStatus::Completed,
            payment_status: PaymentStatus::Paid,
        },
    ]
}

pub fn seed_payments() -> Vec<Payment> {
    vec![
        Payment {
            project_id: "project-2".to_string(),
            amount: 8000.0,
            date: datetime!(2025-01-15 10:00 UTC),
        },
        Payment {
            project_id: "project-4".to_string(),
            amount: 12000.0,
            date: datetime!(2025-01-20 14:30 UTC),
        },
    ]
}

pub fn seed_state() -> DashboardState {
    DashboardState::new(seed_clients(), seed_projects(), seed_payments())
}

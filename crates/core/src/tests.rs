use super::*;
use serde_json::json;
use std::sync::Arc;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::datetime;

fn client(id: &str, name: &str, email: Option<&str>) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        country: "United States".to_string(),
        email: email.map(str::to_string),
    }
}

fn project(id: &str, title: &str, status: ProjectStatus, payment_status: PaymentStatus) -> Project {
    Project {
        id: id.to_string(),
        client_id: "client-1".to_string(),
        title: title.to_string(),
        budget: 1000.0,
        status,
        payment_status,
    }
}

fn payment(project_id: &str, amount: f64) -> Payment {
    Payment {
        project_id: project_id.to_string(),
        amount,
        date: datetime!(2025-01-15 10:00 UTC),
    }
}

fn sample_state() -> DashboardState {
    DashboardState::new(
        vec![
            client("client-1", "Tech Startup Inc", Some("contact@techstartup.com")),
            client("client-2", "Design Studio", None),
        ],
        vec![
            project(
                "project-1",
                "Mobile App Development",
                ProjectStatus::InProgress,
                PaymentStatus::Unpaid,
            ),
            project(
                "project-2",
                "Website Redesign",
                ProjectStatus::Completed,
                PaymentStatus::Paid,
            ),
        ],
        vec![payment("project-2", 8000.0)],
    )
}

#[test]
fn payment_status_counts_sum_to_length() {
    let projects = vec![
        project("p1", "A", ProjectStatus::Pending, PaymentStatus::Unpaid),
        project("p2", "B", ProjectStatus::Completed, PaymentStatus::Paid),
        project("p3", "C", ProjectStatus::InProgress, PaymentStatus::Unpaid),
        project("p4", "D", ProjectStatus::Completed, PaymentStatus::Paid),
        project("p5", "E", ProjectStatus::Pending, PaymentStatus::Unpaid),
    ];
    let counts = count_projects_by_payment_status(&projects);
    assert_eq!(counts.paid, 2);
    assert_eq!(counts.unpaid, 3);
    assert_eq!(counts.paid + counts.unpaid, projects.len());

    assert_eq!(
        count_projects_by_payment_status(&[]),
        PaymentStatusCounts { paid: 0, unpaid: 0 }
    );
}

#[test]
fn stats_revenue_is_sum_of_amounts() {
    let payments = vec![payment("p1", 8000.0), payment("p2", 12000.0)];
    let stats = dashboard_stats(&[], &[], &payments);
    assert_eq!(stats.total_revenue, 20000.0);

    let empty = dashboard_stats(&[], &[], &[]);
    assert_eq!(empty.total_revenue, 0.0);
    assert_eq!(empty.total_projects, 0);
    assert_eq!(empty.total_clients, 0);
}

#[test]
fn mark_project_paid_is_idempotent() {
    let state = sample_state();
    let once = apply(
        &state,
        Action::MarkProjectPaid {
            project_id: "project-1".to_string(),
        },
    );
    let twice = apply(
        &once,
        Action::MarkProjectPaid {
            project_id: "project-1".to_string(),
        },
    );

    assert_eq!(once.projects[0].payment_status, PaymentStatus::Paid);
    assert_eq!(once, twice);
}

#[test]
fn mark_project_paid_on_missing_id_is_a_no_op() {
    let state = sample_state();
    let next = apply(
        &state,
        Action::MarkProjectPaid {
            project_id: "project-999".to_string(),
        },
    );

    assert_eq!(state, next);
    // Identity too, not just value equality: nothing was rebuilt.
    assert!(next.same_collections(&state));
}

#[test]
fn mark_project_paid_does_not_create_a_payment() {
    let state = sample_state();
    let next = apply(
        &state,
        Action::MarkProjectPaid {
            project_id: "project-1".to_string(),
        },
    );
    assert!(Arc::ptr_eq(&state.payments, &next.payments));
}

#[test]
fn mark_project_paid_rewrites_every_duplicate() {
    let state = DashboardState::new(
        Vec::new(),
        vec![
            project("p1", "First", ProjectStatus::Pending, PaymentStatus::Unpaid),
            project("p1", "Second", ProjectStatus::Pending, PaymentStatus::Unpaid),
        ],
        Vec::new(),
    );
    let next = apply(
        &state,
        Action::MarkProjectPaid {
            project_id: "p1".to_string(),
        },
    );
    assert!(
        next.projects
            .iter()
            .all(|p| p.payment_status == PaymentStatus::Paid)
    );
}

#[test]
fn update_project_status_touches_only_the_match() {
    let state = sample_state();
    let next = apply(
        &state,
        Action::UpdateProjectStatus {
            project_id: "project-1".to_string(),
            status: ProjectStatus::Completed,
        },
    );

    assert_eq!(next.projects[0].status, ProjectStatus::Completed);
    assert_eq!(next.projects[1], state.projects[1]);
    assert!(Arc::ptr_eq(&state.clients, &next.clients));
    assert!(Arc::ptr_eq(&state.payments, &next.payments));
}

#[test]
fn add_then_mark_paid_shares_untouched_collections() {
    let state = sample_state();
    let added = apply(
        &state,
        Action::AddProject {
            project: project(
                "project-3",
                "API Integration",
                ProjectStatus::Pending,
                PaymentStatus::Unpaid,
            ),
        },
    );
    assert!(Arc::ptr_eq(&state.clients, &added.clients));
    assert!(Arc::ptr_eq(&state.payments, &added.payments));
    assert!(!Arc::ptr_eq(&state.projects, &added.projects));

    let paid = apply(
        &added,
        Action::MarkProjectPaid {
            project_id: "project-3".to_string(),
        },
    );
    assert!(Arc::ptr_eq(&added.clients, &paid.clients));
    assert!(Arc::ptr_eq(&added.payments, &paid.payments));
    assert_eq!(paid.projects[2].payment_status, PaymentStatus::Paid);
    // Everything else is untouched.
    assert_eq!(paid.projects[..2], added.projects[..2]);
}

#[test]
fn add_payment_appends_without_validation() {
    let state = sample_state();
    // The reducer does not re-check amounts; only create_payment does.
    let next = apply(
        &state,
        Action::AddPayment {
            payment: payment("project-1", -5.0),
        },
    );
    assert_eq!(next.payments.len(), 2);
    assert_eq!(next.payments[1].amount, -5.0);
    assert!(Arc::ptr_eq(&state.clients, &next.clients));
    assert!(Arc::ptr_eq(&state.projects, &next.projects));
}

#[test]
fn add_client_appends() {
    let state = sample_state();
    let next = apply(
        &state,
        Action::AddClient {
            client: client("client-3", "E-commerce Solutions", Some("hello@ecommerce.com")),
        },
    );
    assert_eq!(next.clients.len(), 3);
    assert!(Arc::ptr_eq(&state.projects, &next.projects));
    assert!(Arc::ptr_eq(&state.payments, &next.payments));
}

#[test]
fn create_payment_rejects_non_positive_amounts() {
    assert_eq!(
        create_payment("project-1", 0.0, None).unwrap_err(),
        PaymentError::NonPositiveAmount { amount: 0.0 }
    );
    assert_eq!(
        create_payment("project-1", -5.0, None).unwrap_err(),
        PaymentError::NonPositiveAmount { amount: -5.0 }
    );
}

#[test]
fn create_payment_stamps_a_valid_date_when_omitted() {
    let payment = create_payment("project-1", 100.0, None).unwrap();
    assert_eq!(payment.amount, 100.0);
    let formatted = payment.date.format(&Rfc3339).unwrap();
    assert!(OffsetDateTime::parse(&formatted, &Rfc3339).is_ok());
}

#[test]
fn create_payment_keeps_an_explicit_date() {
    let date = datetime!(2025-01-20 14:30 UTC);
    let payment = create_payment("project-4", 12000.0, Some(date)).unwrap();
    assert_eq!(payment.date, date);
}

#[test]
fn search_is_case_insensitive_substring() {
    let clients = vec![client("client-1", "Tech Startup Inc", None)];
    let hits = search_clients_by_name(&clients, "startup");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "client-1");

    let projects = vec![project(
        "project-1",
        "Mobile App Development",
        ProjectStatus::Pending,
        PaymentStatus::Unpaid,
    )];
    assert_eq!(search_projects_by_title(&projects, "MOBILE app").len(), 1);
    assert!(search_projects_by_title(&projects, "zzz").is_empty());
}

#[test]
fn filters_preserve_order_and_return_empty_on_no_match() {
    let projects = vec![
        project("p1", "A", ProjectStatus::Completed, PaymentStatus::Paid),
        project("p2", "B", ProjectStatus::Pending, PaymentStatus::Unpaid),
        project("p3", "C", ProjectStatus::Completed, PaymentStatus::Unpaid),
    ];

    let completed = filter_projects_by_status(&projects, ProjectStatus::Completed);
    assert_eq!(
        completed.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        vec!["p1", "p3"]
    );
    assert!(filter_projects_by_status(&projects, ProjectStatus::InProgress).is_empty());

    let unpaid = filter_projects_by_payment_status(&projects, PaymentStatus::Unpaid);
    assert_eq!(
        unpaid.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        vec!["p2", "p3"]
    );
}

#[test]
fn lookups_return_first_match_and_tolerate_misses() {
    let clients = vec![
        client("c1", "First", None),
        client("c1", "Second", None),
    ];
    assert_eq!(find_client_by_id(&clients, "c1").unwrap().name, "First");
    assert!(find_client_by_id(&clients, "missing").is_none());
    assert!(find_project_by_id(&[], "p1").is_none());
}

#[test]
fn client_email_falls_back_to_placeholder() {
    let with = client("c1", "A", Some("a@example.com"));
    let without = client("c2", "B", None);
    assert_eq!(client_email(&with), "a@example.com");
    assert_eq!(client_email(&without), NO_EMAIL_PLACEHOLDER);
}

#[test]
fn status_parsing_round_trips_and_rejects_unknown_values() {
    for status in ProjectStatus::ALL {
        assert_eq!(ProjectStatus::parse(status.as_str()).unwrap(), status);
    }
    assert_eq!(
        ProjectStatus::parse("done").unwrap_err(),
        ProjectStatusError::Unknown {
            value: "done".to_string()
        }
    );
    assert_eq!(PaymentStatus::parse(" paid ").unwrap(), PaymentStatus::Paid);
    assert!(PaymentStatus::parse("overdue").is_err());
}

#[test]
fn records_serialize_with_camel_case_field_names() {
    let value = serde_json::to_value(project(
        "project-1",
        "Mobile App Development",
        ProjectStatus::InProgress,
        PaymentStatus::Unpaid,
    ))
    .unwrap();
    assert_eq!(
        value,
        json!({
            "id": "project-1",
            "clientId": "client-1",
            "title": "Mobile App Development",
            "budget": 1000.0,
            "status": "in-progress",
            "paymentStatus": "unpaid",
        })
    );

    let value = serde_json::to_value(client("client-2", "Design Studio", None)).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "client-2",
            "name": "Design Studio",
            "country": "United States",
        })
    );

    let value = serde_json::to_value(payment("project-2", 8000.0)).unwrap();
    assert_eq!(value["date"], json!("2025-01-15T10:00:00Z"));
}

#[test]
fn actions_serialize_with_screaming_snake_tags() {
    let value = serde_json::to_value(Action::MarkProjectPaid {
        project_id: "project-1".to_string(),
    })
    .unwrap();
    assert_eq!(
        value,
        json!({ "type": "MARK_PROJECT_PAID", "projectId": "project-1" })
    );

    let action: Action = serde_json::from_value(json!({
        "type": "UPDATE_PROJECT_STATUS",
        "projectId": "project-2",
        "status": "completed",
    }))
    .unwrap();
    assert_eq!(
        action,
        Action::UpdateProjectStatus {
            project_id: "project-2".to_string(),
            status: ProjectStatus::Completed,
        }
    );
}

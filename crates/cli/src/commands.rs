use crate::render;
use fd_core::{
    Action, PaymentError, PaymentStatus, ProjectStatus, ProjectStatusError, create_payment,
    find_project_by_id, search_clients_by_name, search_projects_by_title,
};
use fd_state::Dashboard;
use serde_json::{Value, json};
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Stats,
    Clients {
        term: Option<String>,
    },
    Projects {
        term: Option<String>,
        status: Option<ProjectStatus>,
        payment_status: Option<PaymentStatus>,
    },
    Payments,
    Pay {
        project_id: String,
    },
    SetStatus {
        project_id: String,
        status: ProjectStatus,
    },
    RecordPayment {
        project_id: String,
        amount: f64,
    },
    Help,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CommandError {
    Empty,
    Unknown { command: String },
    MissingArgument { command: &'static str, argument: &'static str },
    UnknownFlag { flag: String },
    InvalidAmount { value: String },
    InvalidStatus(ProjectStatusError),
    RejectedPayment(PaymentError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "no command given"),
            Self::Unknown { command } => write!(f, "unknown command '{command}'"),
            Self::MissingArgument { command, argument } => {
                write!(f, "{command}: missing <{argument}>")
            }
            Self::UnknownFlag { flag } => write!(f, "unknown flag '{flag}'"),
            Self::InvalidAmount { value } => write!(f, "invalid amount '{value}'"),
            Self::InvalidStatus(err) => write!(f, "{err}"),
            Self::RejectedPayment(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<ProjectStatusError> for CommandError {
    fn from(value: ProjectStatusError) -> Self {
        Self::InvalidStatus(value)
    }
}

impl From<PaymentError> for CommandError {
    fn from(value: PaymentError) -> Self {
        Self::RejectedPayment(value)
    }
}

pub fn usage() -> &'static str {
    "usage: freedash [--json] <command>\n\
     \n\
     commands:\n\
     \x20 stats                                  dashboard summary\n\
     \x20 clients [term]                         list clients, optionally name-searched\n\
     \x20 projects [term] [--status S] [--paid|--unpaid]\n\
     \x20                                        list projects with search and filters\n\
     \x20 payments                               list recorded payments\n\
     \x20 pay <project-id>                       mark a project as paid\n\
     \x20 set-status <project-id> <status>       pending | in-progress | completed\n\
     \x20 record-payment <project-id> <amount>   validate and record a payment\n\
     \x20 help                                   this text"
}

/// Strips a `--json` token (anywhere) and returns the remaining arguments.
pub fn split_json_flag(args: &[String]) -> (bool, Vec<String>) {
    let json = args.iter().any(|arg| arg == "--json");
    let rest = args.iter().filter(|arg| *arg != "--json").cloned().collect();
    (json, rest)
}

pub fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    let Some((name, rest)) = args.split_first() else {
        return Err(CommandError::Empty);
    };

    match name.as_str() {
        "stats" => Ok(Command::Stats),
        "help" => Ok(Command::Help),
        "payments" => Ok(Command::Payments),
        "clients" => Ok(Command::Clients {
            term: rest.first().cloned(),
        }),
        "projects" => parse_projects(rest),
        "pay" => Ok(Command::Pay {
            project_id: required(rest, 0, "pay", "project-id")?,
        }),
        "set-status" => {
            let project_id = required(rest, 0, "set-status", "project-id")?;
            let status = ProjectStatus::parse(&required(rest, 1, "set-status", "status")?)?;
            Ok(Command::SetStatus { project_id, status })
        }
        "record-payment" => {
            let project_id = required(rest, 0, "record-payment", "project-id")?;
            let raw = required(rest, 1, "record-payment", "amount")?;
            let amount = raw
                .parse::<f64>()
                .map_err(|_| CommandError::InvalidAmount { value: raw })?;
            Ok(Command::RecordPayment { project_id, amount })
        }
        other => Err(CommandError::Unknown {
            command: other.to_string(),
        }),
    }
}

fn required(args: &[String], index: usize, command: &'static str, argument: &'static str) -> Result<String, CommandError> {
    args.get(index)
        .cloned()
        .ok_or(CommandError::MissingArgument { command, argument })
}

fn parse_projects(args: &[String]) -> Result<Command, CommandError> {
    let mut term = None;
    let mut status = None;
    let mut payment_status = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--paid" => payment_status = Some(PaymentStatus::Paid),
            "--unpaid" => payment_status = Some(PaymentStatus::Unpaid),
            "--status" => {
                let value = iter.next().ok_or(CommandError::MissingArgument {
                    command: "projects",
                    argument: "status",
                })?;
                status = Some(ProjectStatus::parse(value)?);
            }
            flag if flag.starts_with("--") => {
                return Err(CommandError::UnknownFlag {
                    flag: flag.to_string(),
                });
            }
            text => {
                if term.is_none() {
                    term = Some(text.to_string());
                }
            }
        }
    }

    Ok(Command::Projects {
        term,
        status,
        payment_status,
    })
}

/// Runs one command against the container and returns the rendered output.
/// Search and filters compose: title search first, then the status filter,
/// then the payment-status filter.
pub fn run_command(
    dashboard: &mut Dashboard,
    command: &Command,
    json: bool,
) -> Result<String, CommandError> {
    match command {
        Command::Help => Ok(usage().to_string()),

        Command::Stats => {
            let stats = dashboard.stats();
            if json {
                Ok(pretty(&serde_json::to_value(stats).unwrap_or(Value::Null)))
            } else {
                Ok(render::stats_text(&stats))
            }
        }

        Command::Clients { term } => {
            let state = dashboard.state().clone();
            let rows: Vec<&fd_core::Client> = match term {
                Some(term) => search_clients_by_name(&state.clients, term),
                None => state.clients.iter().collect(),
            };
            if json {
                let values: Vec<Value> = rows.iter().map(|c| render::client_json(c)).collect();
                Ok(pretty(&Value::Array(values)))
            } else if rows.is_empty() {
                Ok("no clients found".to_string())
            } else {
                Ok(rows
                    .iter()
                    .map(|c| render::client_line(c))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }

        Command::Projects {
            term,
            status,
            payment_status,
        } => {
            let state = dashboard.state().clone();
            let mut rows: Vec<&fd_core::Project> = match term {
                Some(term) => search_projects_by_title(&state.projects, term),
                None => state.projects.iter().collect(),
            };
            if let Some(status) = status {
                rows.retain(|project| project.status == *status);
            }
            if let Some(payment_status) = payment_status {
                rows.retain(|project| project.payment_status == *payment_status);
            }
            if json {
                let values: Vec<Value> = rows
                    .iter()
                    .map(|p| render::project_json(p, &state.clients))
                    .collect();
                Ok(pretty(&Value::Array(values)))
            } else if rows.is_empty() {
                Ok("no projects found".to_string())
            } else {
                Ok(rows
                    .iter()
                    .map(|p| render::project_line(p, &state.clients))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }

        Command::Payments => {
            let state = dashboard.state().clone();
            if json {
                let values: Vec<Value> = state
                    .payments
                    .iter()
                    .map(|payment| render::payment_json(payment, &state.projects))
                    .collect();
                Ok(pretty(&Value::Array(values)))
            } else if state.payments.is_empty() {
                Ok("no payments recorded".to_string())
            } else {
                Ok(state
                    .payments
                    .iter()
                    .map(|payment| render::payment_line(payment, &state.projects))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }

        Command::Pay { project_id } => {
            let found = find_project_by_id(&dashboard.state().projects, project_id).is_some();
            dashboard.dispatch(Action::MarkProjectPaid {
                project_id: project_id.clone(),
            });
            mutation_output(json, found, project_id, "marked as paid")
        }

        Command::SetStatus { project_id, status } => {
            let found = find_project_by_id(&dashboard.state().projects, project_id).is_some();
            dashboard.dispatch(Action::UpdateProjectStatus {
                project_id: project_id.clone(),
                status: *status,
            });
            let detail = format!("status set to {}", render::status_label(*status));
            mutation_output(json, found, project_id, &detail)
        }

        Command::RecordPayment { project_id, amount } => {
            // The only user-visible validation failure: a non-positive amount
            // is reported, nothing is dispatched.
            let payment = create_payment(project_id.clone(), *amount, None)?;
            dashboard.dispatch(Action::AddPayment { payment });
            let detail = format!("recorded {}", render::format_currency(*amount));
            mutation_output(json, true, project_id, &detail)
        }
    }
}

fn mutation_output(
    json: bool,
    found: bool,
    project_id: &str,
    detail: &str,
) -> Result<String, CommandError> {
    if json {
        return Ok(pretty(&json!({
            "ok": found,
            "projectId": project_id,
            "detail": if found { detail } else { "project not found, state unchanged" },
        })));
    }
    if found {
        Ok(format!("{project_id}: {detail}"))
    } else {
        Ok(format!("no project with id '{project_id}' (state unchanged)"))
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

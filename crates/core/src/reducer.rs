use crate::model::{Action, DashboardState, PaymentStatus, Project};
use std::sync::Arc;

/// Applies one action to the state and returns the next state. Pure and
/// total: a transition that finds nothing to change hands back a state whose
/// collections are all pointer-identical to the input's.
pub fn apply(state: &DashboardState, action: Action) -> DashboardState {
    match action {
        Action::MarkProjectPaid { project_id } => update_projects(state, &project_id, |project| {
            project.payment_status = PaymentStatus::Paid;
        }),
        Action::AddPayment { payment } => {
            let mut payments = state.payments.as_ref().clone();
            payments.push(payment);
            DashboardState {
                clients: Arc::clone(&state.clients),
                projects: Arc::clone(&state.projects),
                payments: Arc::new(payments),
            }
        }
        Action::UpdateProjectStatus { project_id, status } => {
            update_projects(state, &project_id, |project| {
                project.status = status;
            })
        }
        Action::AddProject { project } => {
            let mut projects = state.projects.as_ref().clone();
            projects.push(project);
            DashboardState {
                clients: Arc::clone(&state.clients),
                projects: Arc::new(projects),
                payments: Arc::clone(&state.payments),
            }
        }
        Action::AddClient { client } => {
            let mut clients = state.clients.as_ref().clone();
            clients.push(client);
            DashboardState {
                clients: Arc::new(clients),
                projects: Arc::clone(&state.projects),
                payments: Arc::clone(&state.payments),
            }
        }
    }
}

/// Rewrites every project carrying `project_id` (duplicate ids are not
/// rejected anywhere, so all of them move together). No match: no-op.
fn update_projects<F>(state: &DashboardState, project_id: &str, update: F) -> DashboardState
where
    F: Fn(&mut Project),
{
    if !state.projects.iter().any(|p| p.id == project_id) {
        return state.clone();
    }

    let mut projects = state.projects.as_ref().clone();
    for project in projects.iter_mut().filter(|p| p.id == project_id) {
        update(project);
    }

    DashboardState {
        clients: Arc::clone(&state.clients),
        projects: Arc::new(projects),
        payments: Arc::clone(&state.payments),
    }
}

use leptos::prelude::*;

use crate::patient::PatientStatus;

#[component]
pub fn StatusBadge(
    /// The patient's current status
    status: PatientStatus,
) -> impl IntoView {
    let class = match status {
        PatientStatus::Active => "status-badge status-active",
        PatientStatus::Inactive => "status-badge status-inactive",
    };

    view! {
        <span class=class>{status.as_str()}</span>
    }
}

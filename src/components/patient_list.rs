use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::patient::{Patient, PatientStatus};

/// List of patients with a "View Details" action per row.
///
/// The row whose id matches `selected_id` is highlighted and inactive
/// patients are dimmed. With `selectable` off the action buttons are hidden.
#[component]
pub fn PatientList(
    patients: Vec<Patient>,
    /// Id of the patient whose details are open.
    #[prop(into)]
    selected_id: Signal<Option<String>>,
    /// Invoked with the patient id when "View Details" is clicked.
    on_select: Callback<String>,
    #[prop(default = true)] selectable: bool,
) -> impl IntoView {
    let empty = patients.is_empty();

    view! {
        <section class="card patient-list">
            <h2 class="card-title">"My Patients"</h2>
            {empty.then(|| view! { <p class="patient-list-empty">"No patients to show."</p> })}
            <div class="patient-rows">
                {patients.into_iter().map(|patient| {
                    let id = patient.id.clone();
                    let row_id = patient.id.clone();
                    let inactive = patient.status == PatientStatus::Inactive;
                    let row_class = move || {
                        let mut class = String::from("patient-row");
                        if selected_id.get().as_deref() == Some(row_id.as_str()) {
                            class.push_str(" patient-row-selected");
                        }
                        if inactive {
                            class.push_str(" patient-row-inactive");
                        }
                        class
                    };
                    view! {
                        <div class=row_class>
                            <div class="patient-row-info">
                                <div class="patient-name">{patient.name.clone()}</div>
                                <div class="patient-last-session">
                                    {format!("Last Session: {}", patient.last_session)}
                                </div>
                            </div>
                            <div class="patient-row-actions">
                                <StatusBadge status=patient.status />
                                {selectable.then(move || view! {
                                    <button
                                        class="btn btn-outline btn-small"
                                        on:click=move |_| on_select.run(id.clone())
                                    >
                                        "View Details"
                                    </button>
                                })}
                            </div>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

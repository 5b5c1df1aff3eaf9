use leptos::prelude::*;

use crate::chart::chart_points;
use crate::components::metrics_chart::MetricsChart;
use crate::patient::Patient;

#[component]
pub fn PatientDetail(patient: Patient) -> impl IntoView {
    let has_sessions = !patient.metrics.is_empty();
    let points = chart_points(&patient);
    let observations = patient.observations();

    view! {
        <section class="card patient-detail">
            <h2 class="card-title">{format!("Patient Summary: {}", patient.name)}</h2>
            <div class="detail-grid">
                <div class="detail-summary">
                    <h3>"Progress Summary"</h3>
                    <p class="summary-text">{patient.summary_text.clone()}</p>

                    <div class="observations">
                        <h4>"Key Observations:"</h4>
                        <ul>
                            {observations
                                .into_iter()
                                .map(|o| view! { <li>{o.to_string()}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>

                <div class="detail-chart">
                    <h3>"Mental Health Metrics"</h3>
                    {if has_sessions {
                        view! { <MetricsChart points=points /> }.into_any()
                    } else {
                        view! { <p class="chart-empty">"No sessions recorded yet."</p> }.into_any()
                    }}
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::pages::dashboard::DashboardPage;
use crate::provider::PatientSource;

#[component]
pub fn App() -> impl IntoView {
    let (source, set_source) = signal::<Option<PatientSource>>(None);

    // Resolve the patient source once on mount; the dashboard mounts after it
    Effect::new(move |_| {
        spawn_local(async move {
            let resolved = match commands::get_dashboard_config().await {
                Ok(config) => {
                    web_sys::console::log_1(
                        &format!(
                            "Patient source: {:?} (journal service at {})",
                            config.source, config.api_base_url
                        )
                        .into(),
                    );
                    config.source
                }
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("Dashboard config unavailable, showing roster: {}", e).into(),
                    );
                    PatientSource::Roster
                }
            };
            set_source.set(Some(resolved));
        });
    });

    view! {
        <main class="container">
            <h1 class="page-title">"Therapist Dashboard"</h1>
            {move || match source.get() {
                Some(source) => view! { <DashboardPage source=source /> }.into_any(),
                None => view! { <p class="dashboard-loading">"Loading..."</p> }.into_any(),
            }}
        </main>
    }
}

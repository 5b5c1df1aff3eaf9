use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::patient_detail::PatientDetail;
use crate::components::patient_list::PatientList;
use crate::provider::{PatientProvider, PatientSource};
use crate::state::{FetchGuard, FetchState, Selection};

#[component]
pub fn DashboardPage(source: PatientSource) -> impl IntoView {
    let fetch_state = RwSignal::new(FetchState::Loading);
    let selection = RwSignal::new(Selection::default());

    // One fetch per mount; results arriving after teardown are dropped
    let guard = FetchGuard::new();
    let ticket = guard.issue();
    on_cleanup(move || guard.invalidate());

    spawn_local(async move {
        let result = source.get_patients().await;
        if !ticket.is_current() {
            web_sys::console::warn_1(
                &"Discarding patient data for a dashboard that is no longer mounted".into(),
            );
            return;
        }
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Failed to load patients: {}", e).into());
        }
        fetch_state.update(|state| {
            state.resolve(result);
        });

        if source.auto_selects() {
            fetch_state.with_untracked(|state| {
                if let Some(first) = state.patients().first() {
                    let id = first.id.clone();
                    selection.update(|s| {
                        s.select(state.patients(), &id);
                    });
                }
            });
        }
    });

    view! {
        <div class="dashboard">
            <style>{include_str!("dashboard.css")}</style>
            {move || {
                let state = fetch_state.get();
                if let Some(message) = state.banner() {
                    let class = if matches!(state, FetchState::Errored) {
                        "dashboard-error"
                    } else {
                        "dashboard-loading"
                    };
                    return view! { <p class=class>{message}</p> }.into_any();
                }

                let patients = state.patients().to_vec();
                let detail_patients = patients.clone();
                let on_select = Callback::new(move |id: String| {
                    fetch_state.with_untracked(|state| {
                        selection.update(|s| {
                            if !s.select(state.patients(), &id) {
                                web_sys::console::log_1(
                                    &format!("Ignoring selection of unknown patient {}", id).into(),
                                );
                            }
                        });
                    });
                });
                let selectable = !source.auto_selects();
                let selected_id = Signal::derive(move || {
                    selection.with(|s| s.id().map(str::to_string))
                });

                view! {
                    <div class="dashboard-grid">
                        <PatientList
                            patients=patients
                            selected_id=selected_id
                            on_select=on_select
                            selectable=selectable
                        />
                        {move || {
                            selection
                                .with(|s| s.selected(&detail_patients).cloned())
                                .map(|patient| view! { <PatientDetail patient=patient /> })
                        }}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

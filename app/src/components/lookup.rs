use crate::address::AddressTable;
use crate::api::{StationDetailDto, get_station_addresses, get_station_detail, refresh_data};
use crate::cascade::{Choice, Level, Selection};
use crate::components_impl::{area_heading, detail_fields, select_placeholder};
use leptos::prelude::*;

#[component]
pub fn StationLookupPage() -> impl IntoView {
    let addresses = Resource::new(|| (), |()| async { get_station_addresses().await });
    let (refreshing, set_refreshing) = signal(false);

    let on_refresh = move |_| {
        set_refreshing.set(true);
        leptos::task::spawn_local(async move {
            if refresh_data().await.is_ok() {
                addresses.refetch();
            }
            set_refreshing.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"Stations by neighborhood"</h1>
                    <p class="page-subtitle">
                        "Narrow down by city, district and neighborhood, then pick a station"
                    </p>
                </div>
                <button
                    class="btn-primary"
                    disabled=move || refreshing.get()
                    on:click=on_refresh
                >
                    {move || if refreshing.get() { "Refreshing..." } else { "Refresh data" }}
                </button>
            </div>

            <Suspense fallback=move || view! { <p class="loading">"Loading stations..."</p> }>
                {move || {
                    addresses
                        .get()
                        .map(|result| match result {
                            Ok(rows) => {
                                view! { <StationDrillDown table=AddressTable::new(rows)/> }.into_any()
                            }
                            Err(e) => {
                                view! { <p class="text-danger">"Error loading stations: " {e.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn StationDrillDown(table: AddressTable) -> impl IntoView {
    let table = StoredValue::new(table);
    let (selection, set_selection) = signal(Selection::default());

    // An empty value clears the level and everything below it.
    let on_pick = move |level: Level, value: String| {
        set_selection.update(|current| {
            *current = if value.is_empty() {
                current.truncate(level)
            } else {
                table
                    .with_value(|t| current.select(t, level, &value))
                    .unwrap_or_else(|_| current.truncate(level))
            };
        });
    };

    let station_id = Signal::derive(move || selection.with(|s| s.station_id().map(str::to_owned)));

    view! {
        <div class="card filter-grid">
            {Level::ALL
                .into_iter()
                .map(|level| {
                    view! {
                        <ChoiceSelect
                            level=level
                            choices=Signal::derive(move || {
                                selection.with(|s| table.with_value(|t| s.choices(t, level)))
                            })
                            selected=Signal::derive(move || {
                                selection.with(|s| s.value(level).map(str::to_owned))
                            })
                            on_pick=move |value| on_pick(level, value)
                        />
                    }
                })
                .collect_view()}
        </div>

        {move || {
            selection
                .with(|s| table.with_value(|t| area_heading(s, t)))
                .map(|heading| view! { <h2 class="section-title">{heading}</h2> })
        }}

        <StationDetail station_id=station_id/>
    }
}

#[component]
fn ChoiceSelect(
    level: Level,
    #[prop(into)] choices: Signal<Vec<Choice>>,
    #[prop(into)] selected: Signal<Option<String>>,
    on_pick: impl Fn(String) + 'static + Copy,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{level.label()}</span>
            <select
                class="form-select"
                disabled=move || choices.with(Vec::is_empty)
                on:change=move |ev| on_pick(event_target_value(&ev))
            >
                <option value="" selected=move || selected.with(Option::is_none)>
                    {select_placeholder(level)}
                </option>
                {move || {
                    choices
                        .get()
                        .into_iter()
                        .map(|choice| {
                            let value = choice.value.clone();
                            view! {
                                <option
                                    value=choice.value
                                    selected=move || selected.with(|s| s.as_deref() == Some(value.as_str()))
                                >
                                    {choice.label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

#[component]
fn StationDetail(#[prop(into)] station_id: Signal<Option<String>>) -> impl IntoView {
    let detail = Resource::new(
        move || station_id.get(),
        |id| async move {
            match id {
                Some(id) => get_station_detail(id).await,
                None => Ok(None),
            }
        },
    );

    view! {
        <Show when=move || station_id.with(Option::is_some)>
            <Suspense fallback=move || view! { <p class="loading">"Loading station..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|result| match result {
                            Ok(Some(dto)) => view! { <DetailPanel detail=dto/> }.into_any(),
                            Ok(None) => {
                                view! { <p class="notice">"No station matches the selected identifier."</p> }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="text-danger">"Error loading station: " {e.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </Show>
    }
}

#[component]
fn DetailPanel(detail: StationDetailDto) -> impl IntoView {
    view! {
        <section class="card">
            <h2 class="card-title">"Station details"</h2>
            <dl class="detail-list">
                {detail_fields(&detail)
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <dt class="detail-label">{label}</dt>
                            <dd class="detail-value">{value}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
        </section>
    }
}

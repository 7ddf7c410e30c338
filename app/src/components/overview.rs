use crate::api::{SummaryDto, get_region_summary, refresh_data};
use crate::components_impl::{
    Bar, RANKING_SIZE, SUMMARY_COLUMNS, bar_style, column_label, format_count, format_loaded_at,
    format_percentage, next_sort, penetration_bars, sort_indicator, sorted_rows,
    station_count_bars,
};
use crate::summary::{
    RegionSummary, SortColumn, SortDirection, bottom_by_penetration, top_by_penetration,
};
use leptos::prelude::*;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let summary = Resource::new(|| (), |()| async { get_region_summary().await });
    let (refreshing, set_refreshing) = signal(false);

    let on_refresh = move |_| {
        set_refreshing.set(true);
        leptos::task::spawn_local(async move {
            if refresh_data().await.is_ok() {
                summary.refetch();
            }
            set_refreshing.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <div class="page-header">
                <div>
                    <h1 class="page-title">"EV Charging Station Dashboard"</h1>
                    <p class="page-subtitle">
                        "Charging stations per region and their coverage of registered electric vehicles"
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

            <Suspense fallback=move || view! { <p class="loading">"Loading regions..."</p> }>
                {move || {
                    summary
                        .get()
                        .map(|result| match result {
                            Ok(dto) => view! { <SummaryView summary=dto/> }.into_any(),
                            Err(e) => {
                                view! { <p class="text-danger">"Error loading summary: " {e.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn SummaryView(summary: SummaryDto) -> impl IntoView {
    let SummaryDto {
        target_year,
        loaded_at,
        regions,
    } = summary;

    if regions.is_empty() {
        return view! {
            <div class="card empty-state">
                <h3>"No data"</h3>
                <p>"No region has both stations and vehicle registrations for " {target_year} "."</p>
            </div>
        }
        .into_any();
    }

    let station_bars = station_count_bars(&regions);
    let coverage_bars = penetration_bars(&regions);
    let top = top_by_penetration(&regions, RANKING_SIZE);
    let bottom = bottom_by_penetration(&regions, RANKING_SIZE);
    let loaded = format_loaded_at(&loaded_at);

    view! {
        <p class="meta">
            "Vehicle registrations for " {target_year} ". Loaded at " {loaded} "."
        </p>

        <section class="card">
            <h2 class="card-title">"Stations per region"</h2>
            <BarChart bars=station_bars/>
        </section>

        <div class="grid-2">
            <section class="card">
                <h2 class="card-title">"Highest coverage"</h2>
                <RankingTable rows=top/>
            </section>
            <section class="card">
                <h2 class="card-title">"Lowest coverage"</h2>
                <RankingTable rows=bottom/>
            </section>
        </div>

        <section class="card">
            <h2 class="card-title">"Coverage by region"</h2>
            <BarChart bars=coverage_bars/>
        </section>

        <section class="card">
            <h2 class="card-title">"All regions"</h2>
            <SummaryTable rows=regions/>
        </section>
    }
    .into_any()
}

#[component]
fn BarChart(bars: Vec<Bar>) -> impl IntoView {
    view! {
        <div class="bar-chart">
            {bars
                .into_iter()
                .map(|bar| {
                    let style = bar_style(&bar);
                    view! {
                        <div class="bar-row">
                            <span class="bar-label">{bar.label}</span>
                            <div class="bar-track">
                                <div class="bar-fill" style=style></div>
                            </div>
                            <span class="bar-value">{bar.display}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SummaryRow(row: RegionSummary) -> impl IntoView {
    view! {
        <tr class="table-row">
            <td class="table-cell">{row.region}</td>
            <td class="table-cell text-right">{format_count(row.station_count)}</td>
            <td class="table-cell text-right">{format_count(row.vehicle_count)}</td>
            <td class="table-cell text-right">{format_percentage(row.penetration_pct)}</td>
        </tr>
    }
}

#[component]
fn RankingTable(rows: Vec<RegionSummary>) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="table">
                <thead class="table-header">
                    <tr>
                        {SUMMARY_COLUMNS
                            .into_iter()
                            .map(|column| view! { <th class="table-header-cell">{column_label(column)}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="table-body">
                    {rows.into_iter().map(|row| view! { <SummaryRow row=row/> }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn SummaryTable(rows: Vec<RegionSummary>) -> impl IntoView {
    let rows = StoredValue::new(rows);
    let (sort, set_sort) = signal((SortColumn::Region, SortDirection::Ascending));

    view! {
        <div class="table-container">
            <table class="table">
                <thead class="table-header">
                    <tr>
                        {SUMMARY_COLUMNS
                            .into_iter()
                            .map(|column| {
                                view! {
                                    <th
                                        class="table-header-cell sortable"
                                        on:click=move |_| set_sort.update(|s| *s = next_sort(*s, column))
                                    >
                                        {column_label(column)}
                                        " "
                                        {move || sort_indicator(sort.get(), column)}
                                    </th>
                                }
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody class="table-body">
                    {move || {
                        let (column, direction) = sort.get();
                        rows.with_value(|r| sorted_rows(r, column, direction))
                            .into_iter()
                            .map(|row| view! { <SummaryRow row=row/> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

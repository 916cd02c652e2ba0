use chrono::Local;
use common::{ChartBuffer, ChartSample, LatestReading, PredictedReading, metric_text};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use super::chart::TemperatureChart;
use crate::Route;
use crate::api_client::weather;
use crate::auth::AuthContext;
use crate::components::layout::navbar::Navbar;
use crate::scheduler::PollScheduler;
use crate::settings;
use crate::status::FetchStatus;

/// Chart-axis label for a station timestamp, falling back to the raw
/// string when it is not RFC 3339.
fn time_label(time: Option<&str>) -> String {
    match time {
        Some(raw) => chrono::DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
            .unwrap_or_else(|_| raw.to_string()),
        None => Local::now().format("%H:%M:%S").to_string(),
    }
}

fn metric_card(title: &'static str, value: String, unit: &'static str) -> Html {
    html! {
        <div class="stats shadow bg-base-100">
            <div class="stat">
                <div class="stat-title">{title}</div>
                <div class="stat-value text-primary">{value}</div>
                <div class="stat-desc">{unit}</div>
            </div>
        </div>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_context::<AuthContext>().unwrap();
    let logged_in = auth.is_logged_in();

    let latest = use_state(|| None::<LatestReading>);
    let prediction = use_state(|| None::<PredictedReading>);
    let status = use_state(FetchStatus::default);
    let chart = use_state(ChartBuffer::new);
    let clock = use_state(|| (String::new(), String::new()));

    let scheduler = use_mut_ref(PollScheduler::new);

    {
        let latest = latest.clone();
        let prediction = prediction.clone();
        let status = status.clone();
        let chart = chart.clone();
        let clock = clock.clone();
        let scheduler = scheduler.clone();

        use_effect_with(logged_in, move |logged_in| {
            if *logged_in {
                let generation = scheduler.borrow().generation();

                let clock_cb = move || {
                    let now = Local::now();
                    clock.set((
                        now.format("%H:%M:%S").to_string(),
                        now.format("%a, %b %e, %Y").to_string(),
                    ));
                };

                let weather_cb = {
                    let latest = latest.clone();
                    let status = status.clone();
                    let chart = chart.clone();
                    let generation = generation.clone();
                    move || {
                        let latest = latest.clone();
                        let status = status.clone();
                        let chart = chart.clone();
                        let generation = generation.clone();
                        let observed = generation.current();
                        spawn_local(async move {
                            let result = weather::fetch_latest().await;
                            // The session may have ended while the fetch
                            // was in flight.
                            if !generation.is_current(observed) {
                                log::debug!("Dropping weather response from a closed session");
                                return;
                            }
                            match result {
                                Ok(reading) => {
                                    let mut samples = (*chart).clone();
                                    samples.push(ChartSample {
                                        label: time_label(reading.time.as_deref()),
                                        value: reading.temperature,
                                    });
                                    chart.set(samples);
                                    latest.set(Some(reading));
                                    status.set(FetchStatus::Live);
                                }
                                Err(err) => {
                                    log::error!("Weather fetch failed: {}", err);
                                    status.set(FetchStatus::Error);
                                }
                            }
                        });
                    }
                };

                let prediction_cb = {
                    let prediction = prediction.clone();
                    let generation = generation.clone();
                    move || {
                        let prediction = prediction.clone();
                        let generation = generation.clone();
                        let observed = generation.current();
                        spawn_local(async move {
                            let result = weather::fetch_prediction().await;
                            if !generation.is_current(observed) {
                                log::debug!("Dropping prediction response from a closed session");
                                return;
                            }
                            match result {
                                Ok(forecast) => prediction.set(Some(forecast)),
                                // The badge tracks the live feed only;
                                // prediction failures just log.
                                Err(err) => log::error!("Prediction fetch failed: {}", err),
                            }
                        });
                    }
                };

                scheduler
                    .borrow_mut()
                    .start(clock_cb, weather_cb, prediction_cb);
            }

            move || scheduler.borrow_mut().stop_all()
        });
    }

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_| auth.logout())
    };

    let Some(user) = auth.current_user.clone() else {
        return html! { <Redirect<Route> to={Route::Login} /> };
    };

    let reading = (*latest).clone().unwrap_or_default();
    let forecast = (*prediction).clone().unwrap_or_default();
    let status_now = *status;
    let (time_text, date_text) = (*clock).clone();
    let timezone = settings::get_settings().timezone;

    html! {
        <div class="min-h-screen bg-base-200">
            <Navbar user_name={user.name.clone()} on_logout={on_logout} />
            <main class="p-6 space-y-6">
                <div class="flex flex-wrap items-center justify-between gap-4">
                    <div>
                        <h2 class="text-2xl font-bold">{"Live Weather"}</h2>
                        <p class="text-sm opacity-70">{format!("{} · {}", date_text, timezone)}</p>
                    </div>
                    <div class="flex items-center gap-4">
                        <span class="font-mono text-xl">{time_text}</span>
                        <div class="flex items-center gap-2">
                            <span class={classes!(
                                "inline-block", "w-3", "h-3", "rounded-full",
                                status_now.dot_class()
                            )}></span>
                            <span class="text-sm">{status_now.label()}</span>
                        </div>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 lg:grid-cols-5 gap-4">
                    {metric_card("Temperature", metric_text(reading.temperature), "°C")}
                    {metric_card("Humidity", metric_text(reading.humidity), "%")}
                    {metric_card("Pressure", metric_text(reading.pressure), "hPa")}
                    {metric_card("Wind Speed", metric_text(reading.wind_speed), "km/h")}
                    {metric_card("Wind Direction", metric_text(reading.wind_direction), "°")}
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="card bg-base-100 shadow lg:col-span-2">
                        <div class="card-body">
                            <h2 class="card-title">{"Temperature Trend"}</h2>
                            <TemperatureChart labels={(*chart).labels()} values={(*chart).values()} />
                        </div>
                    </div>
                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title">{"Next 30 Minutes"}</h2>
                            <div class="stats stats-vertical shadow">
                                <div class="stat">
                                    <div class="stat-title">{"Temperature"}</div>
                                    <div class="stat-value text-secondary">
                                        {metric_text(forecast.temperature)}
                                    </div>
                                    <div class="stat-desc">{"°C"}</div>
                                </div>
                                <div class="stat">
                                    <div class="stat-title">{"Humidity"}</div>
                                    <div class="stat-value text-secondary">
                                        {metric_text(forecast.humidity)}
                                    </div>
                                    <div class="stat-desc">{"%"}</div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}

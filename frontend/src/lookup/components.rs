use crate::charts::components::ChartsPanel;
use crate::lookup::api::HttpRelay;
use crate::lookup::flow::{lookup_channel, ChannelLookup, LookupError, LookupPhase, LookupScreen};
use crate::revenue::format_revenue;
use crate::utils::or_na;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub loading: bool,
    pub on_search: Callback<String>,
}

#[derive(Properties, PartialEq)]
pub struct AnalyticsGridProps {
    pub lookup: ChannelLookup,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let current_input = use_state(String::new);

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_search.emit((*current_input).clone());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex mb-4">
            <input
                id="channelInput"
                type="text"
                class="flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="Enter a YouTube channel name or URL..."
                value={(*current_input).clone()}
                oninput={on_input}
                disabled={props.loading}
            />
            <button
                id="searchButton"
                type="submit"
                class="bg-blue-600 text-white p-3 rounded-r-lg hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:opacity-50"
                disabled={props.loading}
            >
                { if props.loading { "Analyzing..." } else { "Analyze" } }
            </button>
        </form>
    }
}

#[function_component(AnalyticsGrid)]
pub fn analytics_grid(props: &AnalyticsGridProps) -> Html {
    let record = &props.lookup.record;
    let revenue = or_na(props.lookup.revenue.map(format_revenue));

    html! {
        <div id="analyticsGrid" class="grid grid-cols-1 md:grid-cols-2 gap-3 bg-white rounded-lg shadow p-4 text-sm">
            { for record.display_rows().into_iter().map(|(label, value)| html! {
                <div><strong>{format!("{label}: ")}</strong>{value}</div>
            })}
            <div>
                <strong>{"Profile Picture: "}</strong>
                { match &record.thumbnail_url {
                    Some(url) => html! { <img src={url.clone()} alt="Profile Picture" class="inline-block w-16 h-16 rounded-full" /> },
                    None => html! { {or_na(None)} },
                }}
            </div>
            <div class="revenue-block md:col-span-2 text-lg font-bold text-green-700">
                {format!("Total Revenue: {revenue}")}
            </div>
        </div>
    }
}

fn show_alert(message: &str) {
    web_sys::console::error_1(&message.into());
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

impl Reducible for LookupScreen {
    type Action = Result<ChannelLookup, LookupError>;

    fn reduce(self: Rc<Self>, outcome: Self::Action) -> Rc<Self> {
        Rc::new(self.settle(&outcome))
    }
}

/// The lookup page. Each lookup runs on its own; whichever finishes last owns the display.
#[function_component(LookupApp)]
pub fn lookup_app() -> Html {
    let phase = use_state(|| LookupPhase::Idle);
    let screen = use_reducer(LookupScreen::default);

    let on_search = {
        let phase = phase.clone();
        let screen = screen.dispatcher();
        Callback::from(move |query: String| {
            let phase = phase.clone();
            let screen = screen.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let relay = HttpRelay::default();
                let on_phase = {
                    let phase = phase.clone();
                    move |next: LookupPhase| phase.set(next)
                };
                let outcome = lookup_channel(&relay, &query, on_phase).await;
                match &outcome {
                    Ok(result) => log::info!("Rendered channel {:?}", result.record.id),
                    Err(e) => show_alert(&e.to_string()),
                }
                screen.dispatch(outcome);
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-100 p-6">
            <div class="max-w-5xl mx-auto">
                <h1 class="text-3xl font-bold text-gray-800 mb-6">{"YouTube Channel Analytics"}</h1>
                <SearchBar loading={phase.is_busy()} on_search={on_search} />
                {
                    match *phase {
                        LookupPhase::Searching => html! { <p class="text-gray-600">{"Searching for channel..."}</p> },
                        LookupPhase::FetchingDetails => html! { <p class="text-gray-600">{"Loading channel details..."}</p> },
                        LookupPhase::Idle | LookupPhase::Rendered => html! {},
                    }
                }
                { if let Some(result) = &screen.lookup {
                    html! { <AnalyticsGrid lookup={result.clone()} /> }
                } else {
                    html! {}
                }}
                { if let Some(bundle) = &screen.charts {
                    html! { <ChartsPanel charts={bundle.clone()} /> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}

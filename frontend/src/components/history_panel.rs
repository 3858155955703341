use shared::draw::SpinResult;
use shared::question::level_color;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct HistoryPanelProps {
    pub results: Vec<SpinResult>,
    /// Re-opens a past result without spinning again.
    pub on_select: Callback<SpinResult>,
    pub on_clear: Callback<()>,
}

/// Grid of previous spins, newest first.
#[function_component(HistoryPanel)]
pub fn history_panel(props: &HistoryPanelProps) -> Html {
    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_| on_clear.emit(()))
    };

    html! {
        <div class={styles::HISTORY_PANEL}>
            <div class="flex items-center justify-between mb-3">
                <h3 class="text-base font-semibold text-gray-100">
                    {"Your Previous Results"}
                </h3>
                <button onclick={on_clear} class={styles::CLEAR_HISTORY}>
                    <svg xmlns="http://www.w3.org/2000/svg" class="w-4 h-4" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <polyline points="3 6 5 6 21 6" />
                        <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" />
                    </svg>
                    {"Clear All"}
                </button>
            </div>
            <div class={styles::HISTORY_GRID}>
                { for props.results.iter().enumerate().map(|(index, entry)| {
                    let color = level_color(&entry.level);
                    let on_select = props.on_select.clone();
                    let selected = entry.clone();
                    let onclick = Callback::from(move |_| on_select.emit(selected.clone()));
                    html! {
                        <button
                            key={format!("{}-{}", entry.level, entry.timestamp)}
                            {onclick}
                            class={styles::HISTORY_ENTRY}
                            style={format!("animation-delay: {}ms; border-color: {}30;", index * 100, color)}
                        >
                            <div
                                class="text-xs uppercase tracking-wide mb-1 font-semibold"
                                style={format!("color: {color}")}
                            >
                                { &entry.level }
                            </div>
                            <div class="font-semibold text-sm text-gray-100 group-hover:text-white transition-colors">
                                { &entry.question.title }
                            </div>
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

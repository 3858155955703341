use shared::draw::{DrawState, SpinResult};
use shared::question::{Level, Question};
use yew::prelude::*;

use crate::catalog::CATALOG;
use crate::components::{GdgLogo, HistoryPanel, LevelSelector, QuestionResult, SpinningWheel};
use crate::storage::LocalResultStore;
use crate::styles;

/// The lucky draw page. Owns the selection controller state and the local
/// result store; every user action flows through here.
#[function_component(Home)]
pub fn home() -> Html {
    let draw = use_state(DrawState::new);

    // Load persisted results once on mount
    {
        let draw = draw.clone();
        use_effect_with((), move |_| {
            let mut next = (*draw).clone();
            next.load_history(&LocalResultStore);
            draw.set(next);
            || ()
        });
    }

    let on_level_select = {
        let draw = draw.clone();
        Callback::from(move |level: Level| {
            let mut next = (*draw).clone();
            next.select_level(level, None);
            draw.set(next);
        })
    };

    let on_history_select = {
        let draw = draw.clone();
        Callback::from(move |entry: SpinResult| {
            let Some(level) = Level::from_key(&entry.level) else {
                log::warn!("Ignoring history entry with unknown level tag {:?}", entry.level);
                return;
            };
            let mut next = (*draw).clone();
            next.select_level(level, Some(entry.question));
            draw.set(next);
        })
    };

    let on_spin_complete = {
        let draw = draw.clone();
        Callback::from(move |question: Question| {
            let Some(level) = draw.level else {
                return;
            };
            let mut next = (*draw).clone();
            next.record_spin(level, question, js_sys::Date::now(), &LocalResultStore);
            draw.set(next);
        })
    };

    let on_reset = {
        let draw = draw.clone();
        Callback::from(move |_: ()| {
            let mut next = (*draw).clone();
            next.reset();
            draw.set(next);
        })
    };

    let on_toggle_history = {
        let draw = draw.clone();
        Callback::from(move |_| {
            let mut next = (*draw).clone();
            next.toggle_history();
            draw.set(next);
        })
    };

    let on_clear_history = {
        let draw = draw.clone();
        Callback::from(move |_: ()| {
            let mut next = (*draw).clone();
            next.clear_history(&LocalResultStore);
            draw.set(next);
        })
    };

    let back_button = {
        let on_reset = on_reset.clone();
        let onclick = Callback::from(move |_| on_reset.emit(()));
        html! {
            <button {onclick} class={styles::BACK_BUTTON}>
                <svg xmlns="http://www.w3.org/2000/svg" class="w-4 h-4" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <line x1="19" y1="12" x2="5" y2="12" />
                    <polyline points="12 19 5 12 12 5" />
                </svg>
                <span>{"Back to levels"}</span>
            </button>
        }
    };

    html! {
        <main class={styles::MAIN}>
            // Ambient background orbs
            <div class="fixed inset-0 pointer-events-none">
                <div
                    class="absolute w-[500px] h-[500px] rounded-full blur-[120px] animate-bg-float"
                    style="background: rgba(66, 133, 244, 0.08); top: -10%; left: -10%;"
                />
                <div
                    class="absolute w-[400px] h-[400px] rounded-full blur-[100px] animate-bg-float-delayed"
                    style="background: rgba(234, 67, 53, 0.06); bottom: -5%; right: -5%;"
                />
                <div
                    class="absolute w-[300px] h-[300px] rounded-full blur-[80px] animate-bg-float"
                    style="background: rgba(52, 168, 83, 0.06); top: 40%; right: 20%; animation-delay: 2s;"
                />
            </div>

            <header class={styles::HEADER}>
                <div class={styles::HEADER_INNER}>
                    <GdgLogo class="h-10 animate-fade-in" />
                    <div class="flex items-center gap-2">
                        if !draw.history.is_empty() {
                            <button
                                onclick={on_toggle_history}
                                class={if draw.show_history { styles::HISTORY_TOGGLE_OPEN } else { styles::HISTORY_TOGGLE }}
                            >
                                <svg xmlns="http://www.w3.org/2000/svg" class="w-4 h-4" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                    <path d="M3 3v5h5" />
                                    <path d="M3.05 13A9 9 0 1 0 6 5.3L3 8" />
                                    <path d="M12 7v5l4 2" />
                                </svg>
                                <span class="hidden sm:inline">
                                    { format!("History ({})", draw.history.len()) }
                                </span>
                            </button>
                        }
                    </div>
                </div>
            </header>

            <div class={styles::CONTENT}>
                <div class={styles::CONTENT_INNER}>
                    if draw.show_history && !draw.history.is_empty() {
                        <HistoryPanel
                            results={draw.history.clone()}
                            on_select={on_history_select}
                            on_clear={on_clear_history}
                        />
                    }

                    if draw.level.is_none() {
                        <div class="text-center mb-8 animate-fade-in">
                            <h1 class={styles::TITLE}>
                                <span class="inline-block animate-letter" style="animation-delay: 0ms; color: #4285F4">{"D"}</span>
                                <span class="inline-block animate-letter" style="animation-delay: 100ms; color: #EA4335">{"S"}</span>
                                <span class="inline-block animate-letter" style="animation-delay: 200ms; color: #FBBC05">{"A"}</span>
                                <span class="text-gray-100">{" Lucky Draw"}</span>
                            </h1>
                            <p class={styles::SUBTITLE}>
                                {"Spin the wheel and get a random DSA challenge! Choose your difficulty level and test your coding skills."}
                            </p>
                        </div>
                    }

                    <div class="w-full flex flex-col items-center justify-center">
                        {
                            match (draw.level, draw.result.clone()) {
                                (None, _) => html! {
                                    <div class="space-y-8 w-full">
                                        <h2 class={styles::SECTION_HEADING}>
                                            {"Select Your Difficulty Level"}
                                        </h2>
                                        <LevelSelector on_select={on_level_select} />
                                    </div>
                                },
                                (Some(level), Some(result)) => html! {
                                    <div class="space-y-8 animate-fade-in w-full max-w-3xl flex flex-col items-center">
                                        <div class="w-full flex justify-start">
                                            { back_button.clone() }
                                        </div>
                                        <div class="w-full">
                                            <QuestionResult
                                                key={result.id.clone()}
                                                question={result.clone()}
                                                {level}
                                                on_reset={on_reset.clone()}
                                                is_new_result={draw.new_result}
                                            />
                                        </div>
                                    </div>
                                },
                                (Some(level), None) => html! {
                                    <div class="space-y-8 animate-fade-in w-full flex flex-col items-center">
                                        <div class="w-full max-w-3xl flex justify-start">
                                            { back_button.clone() }
                                        </div>
                                        <div class="text-center">
                                            <span
                                                class="inline-block px-6 py-2 rounded-full text-base font-semibold mb-6 animate-pulse-subtle"
                                                style={format!(
                                                    "background-color: {c}20; color: {c}; box-shadow: 0 0 20px {c}30;",
                                                    c = level.color()
                                                )}
                                            >
                                                { format!("{} Level", level.label()) }
                                            </span>
                                        </div>
                                        <div class="w-full flex justify-center">
                                            <SpinningWheel
                                                questions={CATALOG.questions_for(level).to_vec()}
                                                on_spin_complete={on_spin_complete.clone()}
                                            />
                                        </div>
                                    </div>
                                },
                            }
                        }
                    </div>
                </div>
            </div>

            <footer class={styles::FOOTER}>
                <div class={styles::FOOTER_INNER}>
                    <p class="flex items-center justify-center gap-2">
                        <span
                            class="inline-block w-2 h-2 rounded-full animate-pulse"
                            style="background-color: #34A853"
                        />
                        {"Powered by "}
                        <span class="font-semibold text-gray-100">{"Google Developer Groups"}</span>
                        {" SOE CUSAT"}
                    </p>
                </div>
            </footer>
        </main>
    }
}

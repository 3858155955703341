use shared::question::Level;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct LevelSelectorProps {
    pub on_select: Callback<Level>,
}

fn level_icon(level: Level) -> Html {
    // Small line icons in the spirit of the lucide set
    match level {
        Level::Basic => html! {
            <svg xmlns="http://www.w3.org/2000/svg" class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M12 3l1.9 5.8L20 10l-6.1 1.2L12 17l-1.9-5.8L4 10l6.1-1.2L12 3z" />
                <path d="M19 17l.7 2.3L22 20l-2.3.7L19 23l-.7-2.3L16 20l2.3-.7L19 17z" />
            </svg>
        },
        Level::Medium => html! {
            <svg xmlns="http://www.w3.org/2000/svg" class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" />
            </svg>
        },
        Level::Advanced => html! {
            <svg xmlns="http://www.w3.org/2000/svg" class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z" />
                <path d="M12 15l-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z" />
            </svg>
        },
        Level::Pro => html! {
            <svg xmlns="http://www.w3.org/2000/svg" class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M8.5 14.5A2.5 2.5 0 0 0 11 12c0-1.38-.5-2-1-3-1.072-2.143-.224-4.054 2-6 .5 2.5 2 4.9 4 6.5 2 1.6 3 3.5 3 5.5a7 7 0 1 1-14 0c0-1.153.433-2.294 1-3a2.5 2.5 0 0 0 2.5 2.5z" />
            </svg>
        },
    }
}

/// The four difficulty cards shown before a level is chosen.
#[function_component(LevelSelector)]
pub fn level_selector(props: &LevelSelectorProps) -> Html {
    html! {
        <div class={styles::LEVEL_GRID}>
            { for Level::ALL.iter().enumerate().map(|(index, level)| {
                let level = *level;
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_| on_select.emit(level));
                html! {
                    <button
                        key={level.key()}
                        {onclick}
                        class="group relative p-4 rounded-2xl border-2 border-transparent hover:border-white/30 transition-all duration-500 hover:scale-105 animate-fade-in-up bg-white/5"
                        style={format!("animation-delay: {}ms", index * 100)}
                    >
                        <div
                            class="absolute inset-0 rounded-2xl opacity-0 group-hover:opacity-100 transition-opacity duration-500 blur-xl"
                            style={format!("background: radial-gradient(circle at center, {}30, transparent)", level.color())}
                        />
                        <div class="relative flex flex-col items-center gap-2">
                            <div
                                class="p-2 rounded-xl transition-all duration-300 group-hover:scale-110 group-hover:rotate-6"
                                style={format!("background-color: {}20; color: {}", level.color(), level.color())}
                            >
                                { level_icon(level) }
                            </div>
                            <span
                                class="text-lg font-bold transition-all duration-300 group-hover:tracking-wide"
                                style={format!("color: {}", level.color())}
                            >
                                { level.label() }
                            </span>
                            <span class="text-xs text-gray-400 text-center transition-all duration-300 group-hover:text-gray-200">
                                { level.description() }
                            </span>
                        </div>
                    </button>
                }
            }) }
        </div>
    }
}

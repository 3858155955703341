use gloo_timers::callback::Timeout;
use rand::Rng;
use shared::question::{Level, Question};
use yew::prelude::*;

use crate::styles;

const CONFETTI_COLORS: [&str; 4] = ["#4285F4", "#EA4335", "#FBBC05", "#34A853"];
const CONFETTI_COUNT: usize = 50;
const CONFETTI_LIFETIME_MS: u32 = 3000;

#[derive(Clone, PartialEq)]
struct ConfettiParticle {
    x: f64,
    color: &'static str,
    delay: f64,
}

fn burst() -> Vec<ConfettiParticle> {
    let mut rng = rand::thread_rng();
    (0..CONFETTI_COUNT)
        .map(|_| ConfettiParticle {
            x: rng.gen_range(0.0..100.0),
            color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
            delay: rng.gen_range(0.0..0.5),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct QuestionResultProps {
    pub question: Question,
    pub level: Level,
    pub on_reset: Callback<()>,
    /// True only for a freshly completed spin; triggers the confetti burst.
    #[prop_or_default]
    pub is_new_result: bool,
}

#[function_component(QuestionResult)]
pub fn question_result(props: &QuestionResultProps) -> Html {
    let level_color = props.level.color();
    let confetti = use_state(Vec::<ConfettiParticle>::new);

    {
        let confetti = confetti.clone();
        use_effect_with((props.is_new_result, props.question.id.clone()), move |&(is_new, _)| {
            let timer = if is_new {
                confetti.set(burst());
                let confetti = confetti.clone();
                Some(Timeout::new(CONFETTI_LIFETIME_MS, move || {
                    confetti.set(Vec::new());
                }))
            } else {
                None
            };
            move || drop(timer)
        });
    }

    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_| on_reset.emit(()))
    };

    html! {
        <div class="w-full max-w-2xl mx-auto">
            <div
                class={styles::RESULT_CARD}
                style={format!(
                    "background: linear-gradient(135deg, {c}10, rgba(0,0,0,0.5)); box-shadow: 0 0 60px {c}20;",
                    c = level_color
                )}
            >
                if !confetti.is_empty() {
                    <div class="absolute inset-0 pointer-events-none overflow-hidden">
                        { for confetti.iter().enumerate().map(|(i, particle)| html! {
                            <div
                                key={i}
                                class="absolute w-2 h-2 rounded-full animate-confetti"
                                style={format!(
                                    "left: {}%; top: -10px; background-color: {}; animation-delay: {}s;",
                                    particle.x, particle.color, particle.delay
                                )}
                            />
                        }) }
                    </div>
                }

                // Soft background orbs in the level color
                <div class="absolute inset-0 overflow-hidden pointer-events-none">
                    <div
                        class="absolute w-64 h-64 rounded-full blur-3xl animate-float"
                        style={format!("background: {}15; top: -20%; left: -10%;", level_color)}
                    />
                    <div
                        class="absolute w-48 h-48 rounded-full blur-3xl animate-float-delayed"
                        style={format!("background: {}10; bottom: -10%; right: -10%;", level_color)}
                    />
                </div>

                <div class="relative flex flex-col gap-4">
                    <div class="text-center">
                        <h2 class={styles::RESULT_EYEBROW}>
                            { if props.is_new_result { "Your challenge awaits!" } else { "Your DSA Challenge:" } }
                        </h2>
                        <h1 class={styles::RESULT_TITLE}>
                            { &props.question.title }
                        </h1>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-3 justify-center mt-2">
                        <a
                            href={props.question.link.clone()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class={styles::SOLVE_LINK}
                            style={format!(
                                "background: linear-gradient(135deg, {c}, {c}cc); box-shadow: 0 4px 20px {c}40;",
                                c = level_color
                            )}
                        >
                            <span>{"Solve Challenge"}</span>
                            <svg xmlns="http://www.w3.org/2000/svg" class="w-4 h-4" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" />
                                <polyline points="15 3 21 3 21 9" />
                                <line x1="10" y1="14" x2="21" y2="3" />
                            </svg>
                        </a>
                        <button onclick={on_reset} class={styles::RESET_BUTTON}>
                            <svg xmlns="http://www.w3.org/2000/svg" class="w-4 h-4" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <polyline points="1 4 1 10 7 10" />
                                <path d="M3.51 15a9 9 0 1 0 2.13-9.36L1 10" />
                            </svg>
                            <span>{"Try Another Level"}</span>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

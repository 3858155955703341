pub mod catalog;
pub mod components;
pub mod pages;
pub mod storage;
pub mod styles;

use yew::prelude::*;

use crate::pages::home::Home;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <div class="min-h-screen w-full">
            <Home />
        </div>
    }
}

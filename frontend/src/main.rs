mod components;
mod layout;
mod motion;
mod playback_state;

use common::Direction;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{board::Board, controls::Controls, progress::Progress};
use crate::layout::Geometry;
use crate::playback_state::{PlaybackAction, PlaybackState};

/// How much of the delay between two steps the lift, carry and drop of a
/// disk take up together.
const TRANSITION_FRACTION: f64 = 0.99;

#[function_component]
fn App() -> Html {
    let state = use_reducer(PlaybackState::default);
    let display_scale = use_state(|| 1.0);
    let div_ref = use_node_ref();

    let geometry = Geometry::for_disks(state.nr_disks());

    {
        let dispatcher = state.dispatcher();
        let millis = if state.playing { state.speed_ms } else { 0 };
        use_interval(move || dispatcher.dispatch(PlaybackAction::Tick), millis);
    }

    let reset = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(PlaybackAction::Reset))
    };
    let step = |dir: Direction| {
        if !state.can_step(dir) {
            return None;
        }
        let dispatcher = state.dispatcher();
        Some(Callback::from(move |()| {
            dispatcher.dispatch(PlaybackAction::Step { dir })
        }))
    };
    let toggle_play = {
        let dispatcher = state.dispatcher();
        let playing = state.playing;
        Callback::from(move |()| {
            dispatcher.dispatch(if playing {
                PlaybackAction::Pause
            } else {
                PlaybackAction::Play
            })
        })
    };
    let set_disk_count = {
        let dispatcher = state.dispatcher();
        Callback::from(move |n| dispatcher.dispatch(PlaybackAction::SetDiskCount { n }))
    };
    let set_speed = {
        let dispatcher = state.dispatcher();
        Callback::from(move |speed_ms| dispatcher.dispatch(PlaybackAction::SetSpeed { speed_ms }))
    };
    let seek = {
        let dispatcher = state.dispatcher();
        Callback::from(move |position| dispatcher.dispatch(PlaybackAction::Seek { position }))
    };

    let window_size = use_window_size();
    let debounced_size_update = {
        let display_scale = display_scale.clone();
        let div_ref = div_ref.clone();
        use_debounce(
            move || {
                let Some(div) = div_ref.cast::<HtmlElement>() else {
                    return;
                };

                let new_scale = (window_size.0 / div.client_width() as f64)
                    .min(window_size.1 / div.client_height() as f64)
                    * 0.9;
                display_scale.set(new_scale);
            },
            200,
        )
    };
    {
        // the scene gets larger when disks are added, so rescale on both
        let nr_disks = state.nr_disks();
        use_memo((window_size, nr_disks), |_| {
            debounced_size_update.run();
            || {}
        });
    }

    let transition_ms = (state.speed_ms as f64 * TRANSITION_FRACTION) as u32;
    let playback = state.playback();

    html! {
        <ContextProvider<Geometry> context={geometry}>
            <div ref={div_ref} class="scaling-container" style={format!("transform: scale({})", *display_scale)}>
                <Controls
                    playing={state.playing}
                    nr_disks={state.nr_disks()}
                    speed_ms={state.speed_ms}
                    {reset}
                    step_back={step(Direction::Backward)}
                    step_forward={step(Direction::Forward)}
                    {toggle_play}
                    {set_disk_count}
                    {set_speed}
                />
                <Board
                    towers={playback.towers().clone()}
                    last_step={state.last_step}
                    {transition_ms}
                />
                <Progress
                    position={playback.position()}
                    len={playback.len()}
                    next_move={playback.next_move()}
                    {seek}
                />
            </div>
        </ContextProvider<Geometry>>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}

use common::MAX_DISKS;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::components::b2f;
use crate::playback_state::SPEEDS_MS;

#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub playing: bool,
    pub nr_disks: u8,
    pub speed_ms: u32,
    pub reset: Callback<()>,
    /// `None` if there is no move to step back over.
    pub step_back: Option<Callback<()>>,
    pub step_forward: Option<Callback<()>>,
    pub toggle_play: Callback<()>,
    pub set_disk_count: Callback<u8>,
    pub set_speed: Callback<u32>,
}

/// Buttons for stepping through the solution, plus the puzzle settings.
#[function_component]
pub fn Controls(
    ControlsProps {
        playing,
        nr_disks,
        speed_ms,
        reset,
        step_back,
        step_forward,
        toggle_play,
        set_disk_count,
        set_speed,
    }: &ControlsProps,
) -> Html {
    let can_reset = step_back.is_some();
    let reset = {
        let reset = reset.clone();
        move |_| reset.emit(())
    };
    let can_step_back = step_back.is_some();
    let step_back = {
        let step_back = step_back.clone();
        move |_| {
            if let Some(cb) = step_back.as_ref() {
                cb.emit(());
            }
        }
    };
    let can_step_forward = step_forward.is_some();
    let step_forward = {
        let step_forward = step_forward.clone();
        move |_| {
            if let Some(cb) = step_forward.as_ref() {
                cb.emit(());
            }
        }
    };
    let toggle_play = {
        let toggle_play = toggle_play.clone();
        move |_| toggle_play.emit(())
    };
    let on_disk_count = {
        let set_disk_count = set_disk_count.clone();
        move |ev: Event| {
            let input: HtmlInputElement = ev.target_unchecked_into();
            match input.value().parse::<u8>() {
                Ok(n) => set_disk_count.emit(n),
                Err(e) => log::warn!("invalid disk count {:?}: {e}", input.value()),
            }
        }
    };
    let on_speed = {
        let set_speed = set_speed.clone();
        move |ev: Event| {
            let select: HtmlSelectElement = ev.target_unchecked_into();
            match select.value().parse::<u32>() {
                Ok(ms) => set_speed.emit(ms),
                Err(e) => log::warn!("invalid speed {:?}: {e}", select.value()),
            }
        }
    };

    html! {
        <div class="controls">
            <button style={format!("opacity: {};", b2f(can_reset))} onclick={reset}>
                {"reset"}
            </button>
            <button style={format!("opacity: {};", b2f(can_step_back))} onclick={step_back}>
                <Icon icon_id={IconId::LucideUndo2} class="icon"/>
            </button>
            <button onclick={toggle_play}>
                <Icon icon_id={if *playing { IconId::LucidePause } else { IconId::LucidePlay }} class="icon"/>
            </button>
            <button style={format!("opacity: {};", b2f(can_step_forward))} onclick={step_forward}>
                <Icon icon_id={IconId::LucideRedo2} class="icon"/>
            </button>

            <label>
                {format!("disks: {nr_disks}")}
                <input
                    type="range"
                    min="1"
                    max={MAX_DISKS.to_string()}
                    value={nr_disks.to_string()}
                    onchange={on_disk_count}
                />
            </label>

            <label>
                {"delay: "}
                <select onchange={on_speed}>
                    { for SPEEDS_MS.iter().map(|&ms| html! {
                        <option value={ms.to_string()} selected={ms == *speed_ms}>
                            {format!("{ms} ms")}
                        </option>
                    }) }
                </select>
            </label>
        </div>
    }
}

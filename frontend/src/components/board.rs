use common::{Disk, PegId, playback::Step, towers::Towers};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::layout::Geometry;
use crate::motion::{self, Phase};

#[rustfmt::skip]
const DISK_COLORS: [&str; 10] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231",
    "#911eb4", "#46f0f0", "#f032e6", "#bcf60c", "#fabebe",
];

#[derive(Properties, PartialEq)]
pub struct BoardProps {
    pub towers: Towers,
    /// The move that led to `towers`, animated when it changes. Disks jump
    /// without animation when this is `None`.
    pub last_step: Option<Step>,
    /// Duration of a whole move, split evenly over its phases.
    pub transition_ms: u32,
}

/// Render the three pegs and all disks. Disks are absolutely positioned and
/// keyed by their id, so a move only changes the position of one element and
/// the CSS transition animates it from waypoint to waypoint.
#[function_component]
pub fn Board(
    BoardProps {
        towers,
        last_step,
        transition_ms,
    }: &BoardProps,
) -> Html {
    let geometry = use_context::<Geometry>().unwrap_or_else(|| {
        log::warn!("no geometry context, falling back to default");
        Geometry::for_disks(towers.nr_disks())
    });
    let motion_state = use_state(|| None::<(Step, Phase)>);

    {
        let motion_state = motion_state.clone();
        use_effect_with(
            (*last_step, *transition_ms),
            move |&(last_step, transition_ms)| {
                let mut timeouts = Vec::new();
                if let Some(step) = last_step {
                    motion_state.set(Some((step, Phase::Lift)));
                    let leg_ms = motion::phase_duration_ms(transition_ms);
                    let mut phase = Phase::Lift;
                    let mut delay_ms = 0;
                    while let Some(next) = phase.next() {
                        delay_ms += leg_ms;
                        let motion_state = motion_state.clone();
                        timeouts.push(Timeout::new(delay_ms, move || {
                            motion_state.set(Some((step, next)))
                        }));
                        phase = next;
                    }
                }
                // dropping the timeouts cancels the phases of an interrupted move
                move || drop(timeouts)
            },
        );
    }

    // A new step is rendered lifted straight away, before the effect above
    // had a chance to record it.
    let moving = last_step.map(|step| match *motion_state {
        Some((current, phase)) if current == step => (step, phase),
        _ => (step, Phase::Lift),
    });
    let leg_ms = motion::phase_duration_ms(*transition_ms);

    // Keep the DOM order of the disks fixed, reordering the elements would
    // restart their transitions.
    let mut disks: Vec<_> = towers.disks().collect();
    disks.sort_by_key(|&(_, _, disk)| disk);

    html! {
        <div
            class="hanoi-board"
            style={format!("width: {}px; height: {}px;", geometry.width(), geometry.height())}
        >
            <div class="base" style={geometry.base_rect().style()}/>

            { for PegId::all().into_iter().map(|peg| html! {
                <div
                    class="rod"
                    key={format!("rod{peg}")}
                    style={geometry.rod_rect(peg).style()}
                />
            }) }

            { for disks.into_iter().map(|(peg, level, disk)| {
                let mut classes = classes!("disk");
                let (rect, duration_ms) = match moving {
                    Some((step, phase)) if step.disk == disk => {
                        classes.push("moving");
                        (motion::waypoint(&geometry, &step, phase), leg_ms)
                    }
                    _ => (geometry.disk_rect(peg, level, disk), 0),
                };
                html! {
                    <div
                        class={classes}
                        key={format!("disk{}", disk.0)}
                        style={format!(
                            "{} background-color: {}; transition-duration: {duration_ms}ms;",
                            rect.style(),
                            disk_color(disk),
                        )}
                    />
                }
            }) }
        </div>
    }
}

fn disk_color(disk: Disk) -> &'static str {
    DISK_COLORS[disk.0 as usize % DISK_COLORS.len()]
}

use common::Move;
use web_sys::HtmlElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressProps {
    pub position: usize,
    pub len: usize,
    pub next_move: Option<Move>,
    pub seek: Callback<usize>,
}

/// Show how far along the solution we are. Clicking the bar jumps to the
/// corresponding move.
#[function_component]
pub fn Progress(
    ProgressProps {
        position,
        len,
        next_move,
        seek,
    }: &ProgressProps,
) -> Html {
    let div_ref = use_node_ref();

    let onclick = {
        let seek = seek.clone();
        let div_ref = div_ref.clone();
        let len = *len;
        Callback::from(move |ev: MouseEvent| {
            let Some(div) = div_ref.cast::<HtmlElement>() else {
                return;
            };
            seek.emit(seek_position(ev.offset_x(), div.client_width(), len));
        })
    };

    let fraction = if *len == 0 {
        1.0
    } else {
        *position as f64 / *len as f64
    };

    let next = match next_move {
        Some(mv) => format!("next: peg {} → peg {}", mv.src, mv.dst),
        None => "solved".to_string(),
    };

    html! {
        <div class="progress">
            <div ref={div_ref} class="progress-bar clickable" {onclick}>
                <div class="progress-fill" style={format!("width: {:.2}%", fraction * 100.0)}/>
            </div>
            <div class="progress-label">
                <span>{format!("move {position} / {len}")}</span>
                <span>{next}</span>
            </div>
        </div>
    }
}

/// Map a click at `offset_x` on a bar that is `width` pixels wide to a
/// position in a sequence of `len` moves.
fn seek_position(offset_x: i32, width: i32, len: usize) -> usize {
    if width <= 0 {
        return 0;
    }
    let fraction = (offset_x as f64 / width as f64).clamp(0.0, 1.0);
    (fraction * len as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_position() {
        assert_eq!(seek_position(0, 100, 255), 0);
        assert_eq!(seek_position(100, 100, 255), 255);
        assert_eq!(seek_position(50, 100, 7), 4);
        assert_eq!(seek_position(-5, 100, 7), 0);
        assert_eq!(seek_position(130, 100, 7), 7);
        assert_eq!(seek_position(10, 0, 7), 0);
    }
}

use colored::Colorize;
use common::{Disk, PegId, towers::Towers};

/// Render the pegs as ascii art, one line per level. The disk given in
/// `highlight` is drawn in color.
pub fn draw(towers: &Towers, highlight: Option<Disk>) -> String {
    let n = towers.nr_disks() as usize;
    let column = 2 * n + 1;
    let mut out = String::new();

    for level in (0..n).rev() {
        for peg in PegId::all() {
            out.push(' ');
            match towers.stack(peg).get(level) {
                Some(&disk) => {
                    let width = 2 * disk.0 as usize + 1;
                    let pad = " ".repeat((column - width) / 2);
                    let body = "=".repeat(width);
                    out.push_str(&pad);
                    if highlight == Some(disk) {
                        out.push_str(&body.on_red().to_string());
                    } else {
                        out.push_str(&body);
                    }
                    out.push_str(&pad);
                }
                None => {
                    let pad = " ".repeat(n);
                    out.push_str(&pad);
                    out.push('|');
                    out.push_str(&pad);
                }
            }
        }
        out.push('\n');
    }

    for peg in PegId::all() {
        out.push(' ');
        out.push_str(&format!("{:^column$}", peg.label()));
    }
    out.push('\n');
    out
}

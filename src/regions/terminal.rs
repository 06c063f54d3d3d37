//! Integrated terminal, including the 16-color ANSI table.
//!
//! Black and white are synthesized from the base tones: on a dark theme black
//! sits with the background and white with the foreground, and the reverse on
//! a light theme. Bright variants move one tonal step away from the
//! background.

use super::Fragment;
use crate::{colors::TONAL_STEP, context::PolarityContext};

pub(super) fn terminal(ctx: &PolarityContext) -> Fragment {
    let a = &ctx.accents;
    let bright = |color| ctx.emphasize(color, TONAL_STEP);
    let (black, white) = if ctx.is_dark {
        (ctx.bg, ctx.fg)
    } else {
        (ctx.fg, ctx.bg)
    };

    vec![
        ("terminal.background", ctx.bg),
        ("terminal.foreground", ctx.fg),
        ("terminal.border", ctx.border),
        (
            "terminal.selectionBackground",
            ctx.overlay(ctx.selection, 0.35, 0.85),
        ),
        ("terminalCursor.foreground", ctx.fg),
        ("terminalCursor.background", ctx.bg),
        ("terminal.ansiBlack", black),
        ("terminal.ansiRed", a.red),
        ("terminal.ansiGreen", a.green),
        ("terminal.ansiYellow", a.yellow),
        ("terminal.ansiBlue", a.blue),
        ("terminal.ansiMagenta", a.purple),
        ("terminal.ansiCyan", a.aqua),
        ("terminal.ansiWhite", white),
        ("terminal.ansiBrightBlack", ctx.dim),
        ("terminal.ansiBrightRed", bright(a.red)),
        ("terminal.ansiBrightGreen", bright(a.green)),
        ("terminal.ansiBrightYellow", bright(a.yellow)),
        ("terminal.ansiBrightBlue", bright(a.blue)),
        ("terminal.ansiBrightMagenta", bright(a.purple)),
        ("terminal.ansiBrightCyan", bright(a.aqua)),
        ("terminal.ansiBrightWhite", bright(white)),
    ]
}

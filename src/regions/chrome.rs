//! Window chrome: title bar, activity bar, side bar and status bar.

use super::Fragment;
use crate::{colors::TONAL_STEP, context::PolarityContext};

pub(super) fn title_bar(ctx: &PolarityContext) -> Fragment {
    vec![
        ("titleBar.activeBackground", ctx.panel),
        ("titleBar.activeForeground", ctx.fg),
        ("titleBar.inactiveBackground", ctx.recede(ctx.panel, 0.04)),
        ("titleBar.inactiveForeground", ctx.dim),
        ("titleBar.border", ctx.border),
    ]
}

pub(super) fn activity_bar(ctx: &PolarityContext) -> Fragment {
    let orange = ctx.accents.orange;
    vec![
        ("activityBar.background", ctx.panel),
        ("activityBar.foreground", ctx.fg),
        ("activityBar.inactiveForeground", ctx.dim),
        ("activityBar.border", ctx.border),
        ("activityBar.activeBorder", orange),
        ("activityBarBadge.background", orange),
        ("activityBarBadge.foreground", ctx.contrast_text()),
    ]
}

pub(super) fn side_bar(ctx: &PolarityContext) -> Fragment {
    vec![
        ("sideBar.background", ctx.panel),
        ("sideBar.foreground", ctx.fg),
        ("sideBar.border", ctx.border),
        ("sideBarTitle.foreground", ctx.fg),
        ("sideBarSectionHeader.background", ctx.panel),
        ("sideBarSectionHeader.foreground", ctx.fg),
        ("sideBarSectionHeader.border", ctx.border),
    ]
}

pub(super) fn status_bar(ctx: &PolarityContext) -> Fragment {
    let a = &ctx.accents;
    let text = ctx.contrast_text();
    vec![
        ("statusBar.background", a.brown),
        ("statusBar.foreground", text),
        ("statusBar.border", ctx.border),
        ("statusBar.noFolderBackground", a.purple),
        ("statusBar.noFolderForeground", text),
        ("statusBar.debuggingBackground", a.orange),
        ("statusBar.debuggingForeground", text),
        (
            "statusBarItem.hoverBackground",
            ctx.emphasize(a.brown, TONAL_STEP),
        ),
        ("statusBarItem.remoteBackground", a.aqua),
        ("statusBarItem.remoteForeground", text),
    ]
}

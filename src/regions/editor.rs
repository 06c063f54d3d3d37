//! The editor surface and everything drawn around it: minimap, tab strip,
//! breadcrumbs and diff highlighting.

use super::Fragment;
use crate::context::PolarityContext;

pub(super) fn editor(ctx: &PolarityContext) -> Fragment {
    let a = &ctx.accents;
    vec![
        ("editor.background", ctx.bg),
        ("editor.foreground", ctx.fg),
        ("editorCursor.foreground", ctx.fg),
        ("editorLineNumber.foreground", ctx.dim),
        ("editorLineNumber.activeForeground", ctx.fg),
        (
            "editor.selectionBackground",
            ctx.overlay(ctx.selection, 0.35, 0.85),
        ),
        (
            "editor.inactiveSelectionBackground",
            ctx.overlay(ctx.selection, 0.22, 0.55),
        ),
        (
            "editor.selectionHighlightBackground",
            ctx.overlay(ctx.selection, 0.18, 0.45),
        ),
        (
            "editor.wordHighlightBackground",
            ctx.overlay(a.blue, 0.22, 0.18),
        ),
        (
            "editor.wordHighlightStrongBackground",
            ctx.overlay(a.blue, 0.30, 0.25),
        ),
        (
            "editor.lineHighlightBackground",
            ctx.overlay(ctx.selection, 0.25, 0.45),
        ),
        (
            "editor.findMatchBackground",
            ctx.overlay(a.orange, 0.40, 0.35),
        ),
        (
            "editor.findMatchHighlightBackground",
            ctx.overlay(a.yellow, 0.22, 0.25),
        ),
        (
            "editor.rangeHighlightBackground",
            ctx.overlay(a.blue, 0.10, 0.08),
        ),
        ("editorWhitespace.foreground", ctx.dim.with_opacity(0.4)),
        ("editorIndentGuide.background1", ctx.dim.with_opacity(0.25)),
        ("editorIndentGuide.activeBackground1", ctx.dim),
        ("editorRuler.foreground", ctx.dim.with_opacity(0.25)),
        (
            "editorBracketMatch.background",
            ctx.overlay(a.aqua, 0.20, 0.18),
        ),
        ("editorBracketMatch.border", a.aqua),
        ("editorGutter.background", ctx.bg),
        ("editorGutter.addedBackground", a.green),
        ("editorGutter.modifiedBackground", a.blue),
        ("editorGutter.deletedBackground", a.red),
        ("editorWidget.background", ctx.panel),
        ("editorWidget.foreground", ctx.fg),
        ("editorWidget.border", ctx.border),
        ("editorError.foreground", a.red),
        ("editorWarning.foreground", a.yellow),
        ("editorInfo.foreground", a.blue),
    ]
}

pub(super) fn minimap(ctx: &PolarityContext) -> Fragment {
    let a = &ctx.accents;
    vec![
        ("minimap.background", ctx.bg),
        (
            "minimap.selectionHighlight",
            ctx.overlay(ctx.selection, 0.55, 0.85),
        ),
        (
            "minimap.findMatchHighlight",
            ctx.overlay(a.orange, 0.60, 0.50),
        ),
        ("minimap.errorHighlight", ctx.overlay(a.red, 0.70, 0.60)),
        (
            "minimap.warningHighlight",
            ctx.overlay(a.yellow, 0.70, 0.60),
        ),
        ("minimapGutter.addedBackground", a.green),
        ("minimapGutter.modifiedBackground", a.blue),
        ("minimapGutter.deletedBackground", a.red),
        ("minimapSlider.background", ctx.overlay(ctx.dim, 0.20, 0.25)),
        (
            "minimapSlider.hoverBackground",
            ctx.overlay(ctx.dim, 0.30, 0.35),
        ),
        (
            "minimapSlider.activeBackground",
            ctx.overlay(ctx.dim, 0.40, 0.45),
        ),
    ]
}

pub(super) fn groups_and_tabs(ctx: &PolarityContext) -> Fragment {
    let a = &ctx.accents;
    vec![
        ("editorGroup.border", ctx.border),
        (
            "editorGroup.dropBackground",
            ctx.overlay(a.blue, 0.18, 0.14),
        ),
        ("editorGroupHeader.tabsBackground", ctx.panel),
        ("editorGroupHeader.tabsBorder", ctx.border),
        ("tab.activeBackground", ctx.panel),
        ("tab.activeForeground", ctx.fg),
        ("tab.inactiveBackground", ctx.inactive_tab_bg),
        ("tab.inactiveForeground", ctx.dim),
        ("tab.unfocusedActiveForeground", ctx.dim),
        ("tab.border", ctx.panel),
        ("tab.activeBorderTop", a.brown),
        ("tab.hoverBackground", ctx.hover_bg),
    ]
}

pub(super) fn breadcrumbs(ctx: &PolarityContext) -> Fragment {
    vec![
        ("breadcrumb.background", ctx.panel),
        ("breadcrumb.foreground", ctx.dim),
        ("breadcrumb.focusForeground", ctx.fg),
        ("breadcrumb.activeSelectionForeground", ctx.accents.blue),
        ("breadcrumbPicker.background", ctx.panel),
    ]
}

pub(super) fn diff(ctx: &PolarityContext) -> Fragment {
    let a = &ctx.accents;
    vec![
        (
            "diffEditor.insertedTextBackground",
            ctx.overlay(a.green, 0.18, 0.20),
        ),
        (
            "diffEditor.removedTextBackground",
            ctx.overlay(a.red, 0.18, 0.20),
        ),
        (
            "diffEditor.insertedLineBackground",
            ctx.overlay(a.green, 0.10, 0.12),
        ),
        (
            "diffEditor.removedLineBackground",
            ctx.overlay(a.red, 0.10, 0.12),
        ),
        ("diffEditor.diagonalFill", ctx.overlay(ctx.dim, 0.20, 0.25)),
        ("diffEditor.border", ctx.border),
    ]
}

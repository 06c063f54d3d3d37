//! Lists and trees: selection, focus, hover, drag-and-drop and the type
//! filter widget.

use super::Fragment;
use crate::{colors::Color, context::PolarityContext};

pub(super) fn lists(ctx: &PolarityContext) -> Fragment {
    let a = &ctx.accents;
    vec![
        // focused list selection
        ("list.activeSelectionBackground", ctx.selection),
        ("list.activeSelectionForeground", ctx.fg),
        ("list.activeSelectionIconForeground", a.brown),
        ("list.dropBackground", ctx.overlay(a.blue, 0.25, 0.20)),
        ("list.dropBetweenBackground", a.blue),
        ("list.focusBackground", ctx.overlay(a.blue, 0.18, 0.14)),
        ("list.focusForeground", ctx.fg),
        ("list.focusHighlightForeground", a.orange),
        ("list.focusOutline", a.blue),
        (
            "list.focusAndSelectionOutline",
            a.blue.darken(if ctx.is_dark { 0.04 } else { 0.08 }),
        ),
        ("list.highlightForeground", a.orange),
        ("list.hoverBackground", ctx.hover_bg),
        ("list.hoverForeground", ctx.fg),
        // unfocused list
        (
            "list.inactiveSelectionBackground",
            ctx.overlay(ctx.selection, 0.22, 0.55),
        ),
        ("list.inactiveSelectionForeground", ctx.fg),
        ("list.inactiveSelectionIconForeground", ctx.dim),
        (
            "list.inactiveFocusBackground",
            ctx.overlay(a.blue, 0.10, 0.08),
        ),
        (
            "list.inactiveFocusOutline",
            a.blue.lighten(if ctx.is_dark { 0.12 } else { 0.06 }),
        ),
        ("list.invalidItemForeground", a.red),
        ("list.errorForeground", a.red),
        ("list.warningForeground", a.yellow),
        ("list.deemphasizedForeground", ctx.dim),
        (
            "listFilterWidget.background",
            ctx.overlay(a.blue, 0.25, 0.15),
        ),
        ("listFilterWidget.outline", a.blue),
        ("listFilterWidget.noMatchesOutline", a.red),
        (
            "listFilterWidget.shadow",
            ctx.overlay(Color::BLACK, 0.35, 0.15),
        ),
        (
            "list.filterMatchBackground",
            ctx.overlay(a.yellow, 0.22, 0.25),
        ),
        ("list.filterMatchBorder", a.orange),
        ("tree.indentGuidesStroke", ctx.dim),
        ("tree.inactiveIndentGuidesStroke", ctx.dim.with_opacity(0.6)),
        ("tree.tableColumnsBorder", ctx.border),
        ("tree.tableOddRowsBackground", ctx.recede(ctx.panel, 0.03)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        palette::{gruvalized_dark, gruvalized_light},
        regions::lookup,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hover_matches_context() {
        for palette in [gruvalized_light(), gruvalized_dark()] {
            let ctx = PolarityContext::new(&palette);
            assert_eq!(lookup(&lists(&ctx), "list.hoverBackground"), ctx.hover_bg);
        }
    }

    #[test]
    fn test_outlines_shift_blue_by_polarity() {
        let dark = PolarityContext::new(&gruvalized_dark());
        let fragment = lists(&dark);
        assert_eq!(
            lookup(&fragment, "list.focusAndSelectionOutline"),
            dark.accents.blue.darken(0.04)
        );
        assert_eq!(
            lookup(&fragment, "list.inactiveFocusOutline"),
            dark.accents.blue.lighten(0.12)
        );

        let light = PolarityContext::new(&gruvalized_light());
        let fragment = lists(&light);
        assert_eq!(
            lookup(&fragment, "list.focusAndSelectionOutline"),
            light.accents.blue.darken(0.08)
        );
        assert_eq!(
            lookup(&fragment, "list.inactiveFocusOutline"),
            light.accents.blue.lighten(0.06)
        );
    }

    #[test]
    fn test_filter_widget_shadow() {
        let dark = PolarityContext::new(&gruvalized_dark());
        assert_eq!(
            lookup(&lists(&dark), "listFilterWidget.shadow").to_hex(),
            "#00000059"
        );

        let light = PolarityContext::new(&gruvalized_light());
        assert_eq!(
            lookup(&lists(&light), "listFilterWidget.shadow").to_hex(),
            "#00000026"
        );
    }

    #[test]
    fn test_odd_rows_recede_from_panel() {
        let dark = PolarityContext::new(&gruvalized_dark());
        let odd = lookup(&lists(&dark), "tree.tableOddRowsBackground");
        assert!(odd.lightness() < dark.panel.lightness());
    }
}

//! Buttons and notification toasts.

use super::Fragment;
use crate::{
    colors::{Color, TONAL_STEP},
    context::PolarityContext,
};

pub(super) fn buttons(ctx: &PolarityContext) -> Fragment {
    let orange = ctx.accents.orange;
    vec![
        ("button.background", orange),
        ("button.foreground", ctx.contrast_text()),
        ("button.hoverBackground", ctx.emphasize(orange, TONAL_STEP)),
        ("button.separator", ctx.contrast_text().with_opacity(0.4)),
        ("button.secondaryBackground", ctx.panel),
        ("button.secondaryForeground", ctx.fg),
        ("button.secondaryHoverBackground", ctx.hover_bg),
    ]
}

pub(super) fn notifications(ctx: &PolarityContext) -> Fragment {
    let a = &ctx.accents;
    vec![
        ("notifications.background", ctx.panel),
        ("notifications.foreground", ctx.fg),
        ("notifications.border", ctx.border),
        ("notificationCenterHeader.background", ctx.panel),
        ("notificationCenterHeader.foreground", ctx.fg),
        ("notificationToast.border", ctx.border),
        ("notificationLink.foreground", a.blue),
        ("notificationsErrorIcon.foreground", a.red),
        ("notificationsWarningIcon.foreground", a.yellow),
        ("notificationsInfoIcon.foreground", a.blue),
        ("widget.shadow", ctx.overlay(Color::BLACK, 0.35, 0.15)),
    ]
}

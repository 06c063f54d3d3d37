//! Region builders.
//!
//! Each [`Region`] turns a [`PolarityContext`] into the flat color entries for
//! one area of the workbench. A region owns a fixed set of key namespaces (the
//! part of a key before the first `.`), and no two regions share a namespace.

mod chrome;
mod controls;
mod editor;
mod lists;
mod terminal;

use crate::{colors::Color, context::PolarityContext};

/// The entries one region contributes, in emission order
pub type Fragment = Vec<(&'static str, Color)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    TitleBar,
    ActivityBar,
    SideBar,
    Minimap,
    Editor,
    Tabs,
    Breadcrumbs,
    StatusBar,
    Terminal,
    Lists,
    Buttons,
    Notifications,
    Diff,
}

impl Region {
    /// Every region, in the order the composer merges them
    pub const ALL: [Region; 13] = [
        Region::TitleBar,
        Region::ActivityBar,
        Region::SideBar,
        Region::Minimap,
        Region::Editor,
        Region::Tabs,
        Region::Breadcrumbs,
        Region::StatusBar,
        Region::Terminal,
        Region::Lists,
        Region::Buttons,
        Region::Notifications,
        Region::Diff,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Region::TitleBar => "TitleBar",
            Region::ActivityBar => "ActivityBar",
            Region::SideBar => "SideBar",
            Region::Minimap => "Minimap",
            Region::Editor => "Editor",
            Region::Tabs => "Tabs",
            Region::Breadcrumbs => "Breadcrumbs",
            Region::StatusBar => "StatusBar",
            Region::Terminal => "Terminal",
            Region::Lists => "Lists",
            Region::Buttons => "Buttons",
            Region::Notifications => "Notifications",
            Region::Diff => "Diff",
        }
    }

    /// Key namespaces this region is allowed to emit
    pub const fn namespaces(self) -> &'static [&'static str] {
        match self {
            Region::TitleBar => &["titleBar"],
            Region::ActivityBar => &["activityBar", "activityBarBadge"],
            Region::SideBar => &["sideBar", "sideBarTitle", "sideBarSectionHeader"],
            Region::Minimap => &["minimap", "minimapGutter", "minimapSlider"],
            Region::Editor => &[
                "editor",
                "editorCursor",
                "editorLineNumber",
                "editorWhitespace",
                "editorIndentGuide",
                "editorRuler",
                "editorBracketMatch",
                "editorGutter",
                "editorWidget",
                "editorError",
                "editorWarning",
                "editorInfo",
            ],
            Region::Tabs => &["editorGroup", "editorGroupHeader", "tab"],
            Region::Breadcrumbs => &["breadcrumb", "breadcrumbPicker"],
            Region::StatusBar => &["statusBar", "statusBarItem"],
            Region::Terminal => &["terminal", "terminalCursor"],
            Region::Lists => &["list", "listFilterWidget", "tree"],
            Region::Buttons => &["button"],
            Region::Notifications => &[
                "notifications",
                "notificationCenterHeader",
                "notificationToast",
                "notificationLink",
                "notificationsErrorIcon",
                "notificationsWarningIcon",
                "notificationsInfoIcon",
                "widget",
            ],
            Region::Diff => &["diffEditor"],
        }
    }

    /// Whether `key` falls inside one of this region's namespaces
    pub fn owns(self, key: &str) -> bool {
        let ns = namespace(key);
        self.namespaces().iter().any(|owned| *owned == ns)
    }

    pub fn build(self, ctx: &PolarityContext) -> Fragment {
        match self {
            Region::TitleBar => chrome::title_bar(ctx),
            Region::ActivityBar => chrome::activity_bar(ctx),
            Region::SideBar => chrome::side_bar(ctx),
            Region::Minimap => editor::minimap(ctx),
            Region::Editor => editor::editor(ctx),
            Region::Tabs => editor::groups_and_tabs(ctx),
            Region::Breadcrumbs => editor::breadcrumbs(ctx),
            Region::StatusBar => chrome::status_bar(ctx),
            Region::Terminal => terminal::terminal(ctx),
            Region::Lists => lists::lists(ctx),
            Region::Buttons => controls::buttons(ctx),
            Region::Notifications => controls::notifications(ctx),
            Region::Diff => editor::diff(ctx),
        }
    }
}

/// The segment of a dotted key before its first `.`
pub fn namespace(key: &str) -> &str {
    key.split_once('.').map_or(key, |(ns, _)| ns)
}

#[cfg(test)]
pub(crate) fn lookup(fragment: &Fragment, key: &str) -> Color {
    fragment
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, c)| *c)
        .unwrap_or_else(|| panic!("missing key {}", key))
}

use crate::domain::entities::board::Priority;
use crate::domain::entities::settings::Theme;
use crate::domain::rules::deliverable::DeliverableTier;
use crate::ui::state::app_state::NoticeLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            background: "#f7f7f8",
            surface: "#ffffff",
            text: "#1f2328",
            muted: "#6b7280",
            border: "#e5e7eb",
            accent: "#eef4ff",
        },
        Theme::Dark => Palette {
            background: "#111827",
            surface: "#1f2937",
            text: "#f3f4f6",
            muted: "#9ca3af",
            border: "#374151",
            accent: "#1e3a8a",
        },
    }
}

pub fn root_container_style(theme: Theme) -> String {
    let p = palette(theme);
    format!(
        "height: 100vh; display: flex; flex-direction: row; overflow: hidden; background: {}; color: {}; font-family: system-ui, sans-serif;",
        p.background, p.text
    )
}

pub fn content_column_style() -> &'static str {
    "flex: 1; min-width: 0; display: flex; flex-direction: column; overflow: auto;"
}

pub fn sidebar_style(theme: Theme) -> String {
    let p = palette(theme);
    format!(
        "width: 64px; display: flex; flex-direction: column; align-items: center; gap: 20px; padding: 28px 0; background: {}; border-right: 1px solid {};",
        p.surface, p.border
    )
}

pub fn sidebar_button_style(theme: Theme, active: bool) -> String {
    let p = palette(theme);
    let background = if active { p.accent } else { "transparent" };
    format!(
        "width: 36px; height: 36px; border: none; border-radius: 8px; cursor: pointer; font-size: 18px; color: {}; background: {background};",
        p.text
    )
}

pub fn card_style(theme: Theme, open: bool) -> String {
    let p = palette(theme);
    let shadow = if open {
        "0 6px 18px rgba(0,0,0,0.08)"
    } else {
        "none"
    };
    format!(
        "background: {}; border: 1px solid {}; border-radius: 10px; padding: 14px 18px; box-shadow: {shadow};",
        p.surface, p.border
    )
}

pub fn priority_badge_style(priority: Priority) -> String {
    let (background, color) = match priority {
        Priority::Critical => ("#fee2e2", "#b91c1c"),
        Priority::High => ("#ffedd5", "#c2410c"),
        Priority::Medium => ("#fef9c3", "#a16207"),
        Priority::Low => ("#dcfce7", "#15803d"),
        Priority::Unknown => ("#e5e7eb", "#374151"),
    };
    format!(
        "display: inline-block; padding: 2px 10px; border-radius: 999px; font-size: 12px; font-weight: 600; background: {background}; color: {color};"
    )
}

/// Indentation per tier; deeper levels keep stepping by the same width.
pub fn deliverable_line_style(tier: DeliverableTier) -> String {
    match tier {
        DeliverableTier::Plain => String::new(),
        DeliverableTier::Header => "font-weight: 600; margin-top: 10px;".to_string(),
        DeliverableTier::Level1 => "padding-left: 16px;".to_string(),
        DeliverableTier::Level2 => "padding-left: 32px; font-size: 0.95em;".to_string(),
        DeliverableTier::Scaled(dots) => {
            format!("padding-left: {}px; font-size: 0.9em;", dots * 16)
        }
    }
}

pub fn notice_style(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => {
            "display: flex; justify-content: space-between; gap: 12px; padding: 10px 14px; border-radius: 8px; background: #dcfce7; color: #14532d;"
        }
        NoticeLevel::Error => {
            "display: flex; justify-content: space-between; gap: 12px; padding: 10px 14px; border-radius: 8px; background: #fee2e2; color: #7f1d1d;"
        }
    }
}

pub fn modal_backdrop_style() -> &'static str {
    "position: fixed; inset: 0; background: rgba(0,0,0,0.35); display: flex; align-items: center; justify-content: center; z-index: 1200;"
}

pub fn modal_panel_style(theme: Theme) -> String {
    let p = palette(theme);
    format!(
        "background: {}; color: {}; padding: 16px; border: 1px solid {}; border-radius: 10px; min-width: 420px; max-width: 640px;",
        p.surface, p.text, p.border
    )
}

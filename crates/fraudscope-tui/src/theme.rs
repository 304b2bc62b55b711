//! Fixed color lookups

use fraudscope_dashboard::{ActivityKind, CardTone};
use fraudscope_types::ThreatLevel;
use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Cyan;

pub fn threat_color(level: ThreatLevel) -> Color {
    match level {
        ThreatLevel::Critical => Color::Red,
        ThreatLevel::High => Color::LightRed,
        ThreatLevel::Elevated => Color::Yellow,
        ThreatLevel::Low => Color::Green,
        ThreatLevel::Unknown => Color::Gray,
    }
}

pub fn tone_color(tone: CardTone) -> Color {
    match tone {
        CardTone::Neutral => ACCENT,
        CardTone::Warning => Color::Yellow,
        CardTone::Danger => Color::Red,
    }
}

pub fn activity_color(kind: ActivityKind) -> Color {
    match kind {
        ActivityKind::Alert => Color::Red,
        ActivityKind::Info => ACCENT,
        ActivityKind::Success => Color::Green,
    }
}

/// Risk scores are 0-100
pub fn risk_color(score: f64) -> Color {
    if score >= 80.0 {
        Color::Red
    } else if score >= 60.0 {
        Color::LightRed
    } else if score >= 40.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}

pub fn header_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn selected_style() -> Style {
    Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threat_palette_is_distinct() {
        let colors = [
            threat_color(ThreatLevel::Critical),
            threat_color(ThreatLevel::High),
            threat_color(ThreatLevel::Elevated),
            threat_color(ThreatLevel::Low),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_risk_bands() {
        assert_eq!(risk_color(92.0), Color::Red);
        assert_eq!(risk_color(61.0), Color::LightRed);
        assert_eq!(risk_color(12.0), Color::Green);
    }
}

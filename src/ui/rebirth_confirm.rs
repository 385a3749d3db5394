use heropath::character::prestige::rebirth_bonuses;
use heropath::core::constants::REBIRTH_SOUL_STONES;
use heropath::core::game_state::GameState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn percent(bonus: f64) -> String {
    format!("+{:.0}%", (bonus - 1.0) * 100.0)
}

/// Draws the rebirth confirmation dialog as an overlay
pub fn draw_rebirth_confirm(frame: &mut Frame, state: &GameState) {
    let size = frame.size();

    let dialog_width = 48.min(size.width.saturating_sub(4));
    let dialog_height = 16.min(size.height.saturating_sub(4));
    let x = (size.width.saturating_sub(dialog_width)) / 2;
    let y = (size.height.saturating_sub(dialog_height)) / 2;
    let dialog_area = Rect::new(x, y, dialog_width, dialog_height);

    frame.render_widget(Clear, dialog_area);

    let (damage, defense, experience, gold) = rebirth_bonuses();
    let bonus = Style::default().fg(Color::Green);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Rebirth will reset:",
            Style::default().fg(Color::Red),
        )),
        Line::from(format!("  - Level {} back to 1", state.player.level)),
        Line::from("  - Experience"),
        Line::from(""),
        Line::from(Span::styled("You keep gold and equipment, and gain:", bonus)),
        Line::from(format!("  - Damage {}", percent(damage))),
        Line::from(format!("  - Defense {}", percent(defense))),
        Line::from(format!("  - Experience {}", percent(experience))),
        Line::from(format!("  - Gold {}", percent(gold))),
        Line::from(format!("  - {} soul stone", REBIRTH_SOUL_STONES)),
        Line::from(""),
        Line::from(vec![
            Span::raw("      "),
            Span::styled(
                "[Y] Be reborn",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                "[N] Not yet",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                " Rebirth ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(paragraph, dialog_area);
}

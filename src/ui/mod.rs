pub mod app;
mod rebirth_confirm;

use app::App;
use heropath::build_info;
use heropath::character::prestige::required_level;
use heropath::core::game_state::GameState;
use heropath::economy::{Affordability, ShopKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Main UI drawing function
pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.size();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(size);

    draw_title(frame, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(6),
        ])
        .split(columns[0]);
    let state = app.engine.state();
    draw_health(frame, left[0], state);
    draw_player(frame, left[1], state);
    draw_enemy(frame, left[2], state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);
    draw_shop(frame, right[0], app);
    draw_log(frame, right[1], app);

    draw_footer(frame, rows[2], app);

    if app.confirm_rebirth {
        rebirth_confirm::draw_rebirth_confirm(frame, state);
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Hero's Path ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            build_info::version_line("heropath"),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(title, area);
}

fn draw_health(frame: &mut Frame, area: Rect, state: &GameState) {
    let player = &state.player;
    let ratio = if player.max_health == 0 {
        0.0
    } else {
        (player.health as f64 / player.max_health as f64).clamp(0.0, 1.0)
    };
    let color = if ratio > 0.5 {
        Color::Green
    } else if ratio > 0.25 {
        Color::Yellow
    } else {
        Color::Red
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Health "))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{}/{}", player.health, player.max_health));
    frame.render_widget(gauge, area);
}

fn draw_player(frame: &mut Frame, area: Rect, state: &GameState) {
    let player = &state.player;
    let m = &player.multipliers;
    let weapon = player
        .weapon
        .as_ref()
        .map(|w| format!("{} ({})", w.name, w.damage))
        .unwrap_or_else(|| format!("Bare hands ({})", player.damage_range()));
    let armor = player
        .armor
        .as_ref()
        .map(|a| format!("{} (+{})", a.name, a.defense))
        .unwrap_or_else(|| "None".to_string());
    let special = if player.special_ready {
        Span::styled("READY", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            format!("{}s", player.special_cooldown),
            Style::default().fg(Color::DarkGray),
        )
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("Level {}", player.level),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "   XP {}/{}",
                player.experience, player.max_experience
            )),
        ]),
        Line::from(vec![
            Span::styled(
                format!("{} gold", player.gold),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("   "),
            Span::styled(
                format!("{} soul stones", player.soul_stones),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(format!("Weapon: {}", weapon)),
        Line::from(format!("Armor:  {}  Defense {}", armor, player.defense())),
        Line::from(vec![Span::raw("Heal [s]: "), special]),
        Line::from(""),
        Line::from(format!(
            "Multipliers  dmg {:.2}x  def {:.2}x  xp {:.2}x  gold {:.2}x",
            m.damage, m.defense, m.experience, m.gold
        )),
        Line::from(format!(
            "Rebirths {}   next at level {}",
            player.rebirth_count,
            required_level(player.rebirth_count)
        )),
        Line::from(format!(
            "Kills {}   Deaths {}   Achievements {}",
            player.stats.enemies_killed,
            player.stats.deaths,
            state.unlocked_achievements.len()
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Hero ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}

fn draw_enemy(frame: &mut Frame, area: Rect, state: &GameState) {
    let lines = match &state.current_enemy {
        Some(enemy) if enemy.is_alive() => vec![
            Line::from(Span::styled(
                format!("{} (Level {})", enemy.name, enemy.level),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("HP {}/{}", enemy.health, enemy.max_health)),
            Line::from(format!(
                "Damage {}   Reward {} gold, {} XP",
                enemy.damage, enemy.gold_reward, enemy.exp_reward
            )),
        ],
        _ => vec![Line::from(Span::styled(
            "Waiting for the next enemy...",
            Style::default().fg(Color::DarkGray),
        ))],
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Enemy [a] attack ")
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(paragraph, area);
}

fn draw_shop(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.engine.shop_view();
    let shop = view.active;
    let current = view.category(shop);

    let mut tabs = Vec::new();
    for category in shop.categories() {
        let style = if *category == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        tabs.push(Span::styled(format!(" {} ", category.name()), style));
        tabs.push(Span::raw(" "));
    }

    let unit = match shop {
        ShopKind::Gold => "gold",
        ShopKind::Soul => "stones",
    };
    let mut lines = vec![Line::from(tabs), Line::from("")];
    for (idx, row) in app.engine.shop_listing().iter().enumerate() {
        let color = match row.affordability {
            Affordability::Unaffordable => Color::DarkGray,
            Affordability::Affordable => Color::White,
            Affordability::Comfortable => Color::Green,
        };
        let marker = if idx == app.selected_item { "> " } else { "  " };
        let mut style = Style::default().fg(color);
        if idx == app.selected_item {
            style = style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{}{:<18}", marker, row.item.name), style),
            Span::styled(format!("{:>7} {}", row.item.cost, unit), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", row.item.description),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let title = format!(" {} [tab] ", shop.name());
    let border = match shop {
        ShopKind::Gold => Color::Yellow,
        ShopKind::Soul => Color::Magenta,
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(paragraph, area);
}

fn draw_log(frame: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(2) as usize;
    let entries: Vec<&str> = app.engine.log().collect();
    let start = entries.len().saturating_sub(visible);
    let lines: Vec<Line> = entries[start..]
        .iter()
        .map(|entry| Line::from(entry.to_string()))
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Log "))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let help = Line::from(Span::styled(
        "[a] attack  [s] heal  [Up/Down] select  [Enter] buy  [tab] shop  [ [ ] ] category  [R] rebirth  [q] quit",
        Style::default().fg(Color::DarkGray),
    ));
    let notice = match &app.notice {
        Some(text) => Line::from(Span::styled(text.clone(), Style::default().fg(Color::Red))),
        None => Line::from(""),
    };
    frame.render_widget(
        Paragraph::new(vec![notice, help]).alignment(Alignment::Left),
        area,
    );
}

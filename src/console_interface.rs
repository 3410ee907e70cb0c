use crate::core::{Cell, Direction, Level, Spike, UserAction, Vec2};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Wall => '#',
        Cell::Rock => 'R',
        Cell::Undead => 'U',
        Cell::Girl => 'G',
        Cell::Helltaker => 'H',
        Cell::Key => 'K',
        Cell::Lock => 'L',
        Cell::CodeUnderRock => 'C',
        Cell::Code => 'D',
        Cell::KeyUnderRock => 'Y',
    }
}

pub fn spike_char(spike: Spike) -> char {
    match spike {
        Spike::None => '.',
        Spike::Up => 'S',
        Spike::Down => 's',
        Spike::Always => 'T',
    }
}

pub fn render_level_to_string(level: &Level) -> String {
    let mut result = String::new();
    for row in &level.grid {
        for &cell in row {
            result.push(cell_char(cell));
        }
        result.push('\n');
    }
    result
}

pub fn render_spikes_to_string(level: &Level) -> String {
    let mut result = String::new();
    for row in &level.spikes {
        for &spike in row {
            result.push(spike_char(spike));
        }
        result.push('\n');
    }
    result
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let game_paragraph = Paragraph::new(level_text(&state.game))
            .block(Block::default().borders(Borders::ALL).title("Helltaker"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instructions = if state.won {
            "You made it! Press any key to quit.".to_string()
        } else if state.out_of_moves {
            "Out of moves. Press any key to quit.".to_string()
        } else {
            format!(
                "Moves left: {} | key: {} | code: {} | WASD or arrows, Q to quit",
                state.game.moves_left, state.game.has_key, state.game.has_code
            )
        };

        let instructions = if let Some(err) = &state.error {
            format!("{} | Illegal: {}", instructions, err)
        } else {
            instructions
        };

        let instructions = if let Some(change_type) = &state.last_change {
            format!("{} | Last: {:?}", instructions, change_type)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

// Spike cells tint the board: red where stepping costs an extra move this
// turn, green where the spikes are currently down.
fn level_text(level: &Level) -> Text<'static> {
    let mut lines = Vec::new();
    for (i, row) in level.grid.iter().enumerate() {
        let mut spans = Vec::new();
        for (j, &cell) in row.iter().enumerate() {
            let pos = Vec2 {
                i: i as i32,
                j: j as i32,
            };
            let style = match level.spike(pos) {
                Spike::Up | Spike::Always => Style::default().fg(Color::Red),
                Spike::Down => Style::default().fg(Color::Green),
                Spike::None => Style::default(),
            };
            spans.push(Span::styled(cell_char(cell).to_string(), style));
        }
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

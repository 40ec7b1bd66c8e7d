//! UI rendering - fetch button, breed grid, and status bar

use ratatui::{prelude::*, widgets::*};

use crate::constants::GRID_COLUMNS;
use crate::messages::RenderState;

/// Draw the whole screen
pub fn draw(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Fetch button
            Constraint::Min(0),     // Breed grid
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_fetch_button(f, state, chunks[0]);
    draw_breed_grid(f, state, chunks[1]);
    draw_status_bar(f, state, chunks[2]);
}

fn draw_fetch_button(f: &mut Frame, state: &RenderState, area: Rect) {
    let border_style = if state.is_loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let label = if state.is_loading {
        " Fetch Dog Breeds [...] "
    } else {
        " Fetch Dog Breeds "
    };

    let button = Paragraph::new(label)
        .style(Style::default().bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    f.render_widget(button, area);
}

fn draw_breed_grid(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = if state.breeds.is_empty() {
        String::from(" Breeds ")
    } else {
        format!(" Breeds ({}) ", state.breeds.len())
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = grid_rows(&state.breeds, GRID_COLUMNS);
    let visible = rows
        .iter()
        .skip(state.grid_scroll as usize)
        .take(inner.height as usize);

    for (i, row) in visible.enumerate() {
        let row_area = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(row_area);

        for (cell, name) in cells.iter().zip(row.iter()) {
            let label = Paragraph::new(name.as_str())
                .style(Style::default().bold())
                .alignment(Alignment::Center);
            f.render_widget(label, *cell);
        }
    }
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_loading {
        " Loading... "
    } else {
        " f/Enter:fetch | ^/v:scroll | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

/// Split the breed list into grid rows of `columns` cells
pub fn grid_rows(breeds: &[String], columns: usize) -> Vec<&[String]> {
    if columns == 0 {
        return Vec::new();
    }
    breeds.chunks(columns).collect()
}

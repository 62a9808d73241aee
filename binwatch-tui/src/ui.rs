use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use binwatch_core::{
    format::collection_label,
    model::{CategoryColor, ScheduleRecord},
};

use crate::app::{App, Screen};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    // Title / header
    let header = Paragraph::new("binwatch – North Lanarkshire bin collections")
        .block(Block::default().borders(Borders::ALL).title("Binwatch"));
    frame.render_widget(header, *header_area);

    // Main screen
    match app.screen {
        Screen::AddressSelect => draw_address_select(frame, app, *content_area),
        Screen::ScheduleView => draw_schedule_view(frame, app, *content_area),
    }

    // Status bar
    let nav_hint = match app.screen {
        Screen::AddressSelect => "↑/↓ move · Enter select address · t simulate · q/Ctrl-C quit",
        Screen::ScheduleView => "r reload · t simulate · Esc/←/b back · q/Ctrl-C quit",
    };

    let mode_hint = if app.simulate {
        "Simulation mode · "
    } else {
        ""
    };

    let status_text = if app.is_loading {
        format!("Loading… · {mode_hint}{nav_hint}")
    } else if let Some(msg) = &app.error_message {
        format!("{msg} · {mode_hint}{nav_hint}")
    } else {
        format!("{mode_hint}{nav_hint}")
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else if app.simulate {
        Style::default().fg(Color::Magenta)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_address_select(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = app
        .addresses
        .iter()
        .enumerate()
        .map(|(idx, address)| {
            let prefix = if idx == app.address_list_index {
                "> "
            } else {
                "  "
            };
            ListItem::new(format!("{prefix}{}", address.label))
        })
        .collect::<Vec<ListItem<'_>>>();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Select address (↑/↓, Enter)"),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.addresses.is_empty() {
        state.select(Some(app.address_list_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_schedule_view(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let address_label = app
        .selected_address
        .as_ref()
        .map_or("<address>", |address| address.label.as_str());

    let title = format!("Bin collections for {address_label}");

    if app.is_loading && app.snapshot.is_none() {
        let paragraph = Paragraph::new("Loading schedule…")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let Some(snapshot) = &app.snapshot else {
        let paragraph = Paragraph::new("No schedule loaded yet.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    };

    let reference = App::reference_day();

    let rows = snapshot.records.iter().map(|record| {
        let (status, style) = record_row(record, reference);
        Row::new(vec![
            Cell::from(record.display_name.clone()),
            Cell::from(status),
        ])
        .style(style)
    });

    let column_widths = [Constraint::Length(38), Constraint::Min(24)];

    let table = Table::new(rows, column_widths)
        .header(
            Row::new(vec!["Bin", "Collection"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{title} · {}", snapshot.today)),
        )
        .column_spacing(1);

    frame.render_widget(table, area);
}

/// One table row per category: due bins get their colour and the collection
/// day, the rest are dimmed with their next collection.
fn record_row(record: &ScheduleRecord, reference: chrono::NaiveDate) -> (String, Style) {
    if record.due_tomorrow {
        let label = collection_label(&record.collection_day, reference);
        let status = format!("Collection day: {label}");
        let style = Style::default()
            .fg(category_color(record.color))
            .add_modifier(Modifier::BOLD);
        (status, style)
    } else {
        let label = collection_label(&record.next_collection, reference);
        let status = if label.is_empty() {
            "Next collection: none scheduled".to_owned()
        } else {
            format!("Next collection: {label}")
        };
        (status, Style::default().fg(Color::DarkGray))
    }
}

fn category_color(color: CategoryColor) -> Color {
    match color {
        CategoryColor::Green => Color::Green,
        CategoryColor::Blue => Color::Blue,
        CategoryColor::Brown => Color::Yellow,
        CategoryColor::Grey => Color::Gray,
    }
}

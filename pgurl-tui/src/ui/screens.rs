use pgurl_core::FieldKind;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;

use super::components::types::FORMAT_HINT;
use super::{UIRenderer, UrlBuilderUI};

const KEY_BINDINGS: [(&str, &str); 9] = [
    ("Up/Down, Enter", "move between fields"),
    ("Tab/Shift+Tab", "cycle through fields"),
    ("Backspace", "delete last character"),
    ("Ctrl+U", "clear the field"),
    ("Ctrl+C", "copy connection string"),
    ("Ctrl+R", "restore starting values"),
    ("F1", "show this help"),
    ("Esc", "quit"),
    ("", "Nothing you type leaves this machine."),
];

impl UIRenderer for UrlBuilderUI {
    async fn render_connection_form_screen<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> io::Result<()> {
        terminal.draw(|f| self.draw_connection_form(f))?;
        Ok(())
    }

    async fn render_help_popup<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> io::Result<()> {
        terminal.draw(|f| {
            let size = f.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(
                    [
                        Constraint::Percentage(20),
                        Constraint::Percentage(50),
                        Constraint::Percentage(20),
                        Constraint::Percentage(10),
                    ]
                    .as_ref(),
                )
                .split(size);

            let popup_area = centered_rect(50, chunks[1]);

            let block = Block::default()
                .title("Help")
                .borders(Borders::ALL)
                .title_alignment(Alignment::Center);

            let lines: Vec<Line> = KEY_BINDINGS
                .iter()
                .map(|(keys, action)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{:<16}", keys),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(*action),
                    ])
                })
                .collect();

            let help = Paragraph::new(lines)
                .block(block)
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: false });

            f.render_widget(Clear, popup_area);
            f.render_widget(help, popup_area);

            let footer = Paragraph::new("Press any key to return.")
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center);

            f.render_widget(footer, chunks[2]);
        })?;

        Ok(())
    }
}

impl UrlBuilderUI {
    fn draw_connection_form(&self, f: &mut Frame) {
        let area = centered_rect(80, f.area());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(3),
                    Constraint::Length(FieldKind::ALL.len() as u16 + 2),
                    Constraint::Length(3),
                    Constraint::Length(1),
                    Constraint::Length(3),
                    Constraint::Min(0),
                    Constraint::Length(1),
                ]
                .as_ref(),
            )
            .split(area);

        f.render_widget(self.header(), chunks[0]);
        f.render_widget(self.form(), chunks[1]);
        f.render_widget(self.output(), chunks[2]);
        f.render_widget(self.copy_status(), chunks[3]);
        f.render_widget(self.format_note(), chunks[4]);
        f.render_widget(help_line(), chunks[6]);
    }

    fn header(&self) -> Paragraph<'static> {
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    " PostgreSQL ",
                    Style::default()
                        .bg(Color::Blue)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    "Connection URL Builder",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "Generate connection strings for your PostgreSQL database",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        Paragraph::new(lines).alignment(Alignment::Center)
    }

    fn form(&self) -> Paragraph<'_> {
        let input = &self.connection_input;
        let lines: Vec<Line> = FieldKind::ALL
            .iter()
            .map(|kind| {
                let focused = *kind == input.current_field;
                let label_style = if focused {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                let mut spans = vec![Span::styled(
                    format!("{:<10}", format!("{}:", kind.as_str())),
                    label_style,
                )];

                let value = input.fields.get(*kind);
                if value.is_empty() {
                    if let Some(placeholder) = kind.placeholder() {
                        spans.push(Span::styled(
                            placeholder,
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                } else {
                    spans.push(Span::raw(value));
                }

                if kind.is_optional() {
                    spans.push(Span::styled(
                        " (optional)",
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                if focused {
                    spans.push(Span::styled(" <", Style::default().fg(Color::Yellow)));
                }

                Line::from(spans)
            })
            .collect();

        let block = Block::default()
            .title("Database Configuration")
            .borders(Borders::ALL)
            .title_alignment(Alignment::Center);

        Paragraph::new(lines).block(block)
    }

    fn output(&self) -> Paragraph<'_> {
        let block = Block::default()
            .title(format!(
                "Connection String ({} characters)",
                self.connection_string.char_count()
            ))
            .borders(Borders::ALL);

        Paragraph::new(self.connection_string.as_str())
            .block(block)
            .style(Style::default().fg(Color::Cyan))
    }

    fn copy_status(&self) -> Paragraph<'static> {
        let status = if self.copy_feedback.is_copied() {
            Span::styled(
                "[ Copied ]",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("[ Copy ]", Style::default().fg(Color::White))
        };

        Paragraph::new(Line::from(vec![
            status,
            Span::styled(" Ctrl+C", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right)
    }

    fn format_note(&self) -> Paragraph<'static> {
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Format: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(FORMAT_HINT, Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(Span::styled(
                "All data stays on this machine. Nothing is sent to any server.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .wrap(Wrap { trim: true })
    }
}

fn help_line() -> Paragraph<'static> {
    let help_message = vec![Line::from(vec![
        Span::styled(
            "Up/Down",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to navigate, "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to copy, "),
        Span::styled(
            "F1",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" for help, "),
        Span::styled(
            "Esc",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to quit"),
    ])];

    Paragraph::new(help_message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
}

fn centered_rect(percent_x: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ]
            .as_ref(),
        )
        .split(r);

    popup_layout[1]
}

#[cfg(test)]
mod tests {
    use pgurl_core::{errors::ClipboardError, ClipboardWriter, ConnectionFields};
    use ratatui::backend::TestBackend;

    use super::*;

    struct NullClipboard;

    impl ClipboardWriter for NullClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    fn builder() -> UrlBuilderUI {
        UrlBuilderUI::with_clipboard(
            ConnectionFields::default(),
            Box::new(NullClipboard),
        )
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(120, 32)).expect("test terminal")
    }

    #[tokio::test]
    async fn form_shows_fields_output_and_length() {
        let mut ui = builder();
        let mut terminal = terminal();

        ui.render_connection_form_screen(&mut terminal)
            .await
            .expect("render");
        let text = screen_text(&terminal);

        assert!(text.contains("Connection URL Builder"));
        assert!(text.contains("Host:     localhost <"));
        assert!(text.contains("Database: mydb"));
        assert!(text.contains("postgresql://postgres@localhost:5432/mydb"));
        assert!(text.contains("Connection String (41 characters)"));
        assert!(text.contains("[ Copy ]"));
        assert!(text.contains(FORMAT_HINT));
    }

    #[tokio::test]
    async fn empty_schema_shows_placeholder_and_optional_marker() {
        let mut ui = builder();
        let mut terminal = terminal();

        ui.render_connection_form_screen(&mut terminal)
            .await
            .expect("render");
        let text = screen_text(&terminal);

        assert!(text.contains("Schema:   public (optional)"));
        assert!(!text.contains("search_path=public"));
    }

    #[tokio::test]
    async fn copied_indicator_is_rendered_after_copy() {
        let mut ui = builder();
        let mut terminal = terminal();

        ui.copy_connection_string();
        ui.render_connection_form_screen(&mut terminal)
            .await
            .expect("render");

        assert!(screen_text(&terminal).contains("[ Copied ]"));
    }

    #[tokio::test]
    async fn help_popup_lists_key_bindings() {
        let mut ui = builder();
        let mut terminal = terminal();

        ui.render_help_popup(&mut terminal).await.expect("render");
        let text = screen_text(&terminal);

        assert!(text.contains("Help"));
        assert!(text.contains("copy connection string"));
        assert!(text.contains("Press any key to return."));
    }

    #[test]
    fn centered_rect_keeps_requested_width() {
        let area = centered_rect(50, Rect::new(0, 0, 100, 10));
        assert_eq!(area.width, 50);
        assert_eq!(area.x, 25);
        assert_eq!(area.height, 10);
    }
}

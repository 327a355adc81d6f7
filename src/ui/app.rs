use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Flex, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, BorderType, Cell, Chart, Clear, Dataset, GraphType, HighlightSpacing,
        Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table, TableState, Wrap,
    },
};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::app::{FetchCommand, FetchEvent};
use crate::config::{
    CURRENCY_SYMBOL, ITEM_HEIGHT, PALETTES, POLL_DURATION_MS, SEARCH_DEBOUNCE_MS, VS_CURRENCY,
};
use crate::detail::DetailLoader;
use crate::i18n::{Key, Lang, no_results, t};
use crate::store::{CoinStore, pipeline};
use crate::theme::{self, Theme};
use crate::ui::TableColors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    List,
    Detail,
}

pub struct TuiApp {
    commands: mpsc::UnboundedSender<FetchCommand>,
    store: CoinStore,
    detail: DetailLoader,
    view: View,
    theme: Theme,
    lang: Lang,
    table_state: TableState,
    scroll_state: ScrollbarState,
    colors: TableColors,
    color_index: usize,
    search_open: bool,
    search_input: String,
    search_deadline: Option<Instant>,
}

impl TuiApp {
    pub fn new(commands: mpsc::UnboundedSender<FetchCommand>) -> Self {
        let theme = theme::load();
        let mut app = Self {
            commands,
            store: CoinStore::new(),
            detail: DetailLoader::new(),
            view: View::List,
            theme,
            lang: Lang::default(),
            table_state: TableState::default().with_selected(0),
            scroll_state: ScrollbarState::new(0),
            colors: TableColors::new(&PALETTES[0], theme),
            color_index: 0,
            search_open: false,
            search_input: String::new(),
            search_deadline: None,
        };
        app.request_markets();
        app
    }

    fn request_markets(&mut self) {
        let seq = self.store.begin_fetch();
        let _ = self.commands.send(FetchCommand::Markets {
            seq,
            sort_by: self.store.query.sort_by,
        });
    }

    fn open_detail(&mut self, id: String) {
        let range = self.detail.time_range();
        let seq = self.detail.begin(id.clone(), range);
        let _ = self.commands.send(FetchCommand::Detail { seq, id, range });
        self.view = View::Detail;
    }

    fn cycle_time_range(&mut self) {
        let Some(id) = self.detail.coin_id().map(str::to_string) else {
            return;
        };
        let range = self.detail.time_range().cycle();
        let seq = self.detail.begin(id.clone(), range);
        let _ = self.commands.send(FetchCommand::Detail { seq, id, range });
    }

    fn apply(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Markets { seq, result } => {
                self.store.commit(seq, result);
                self.clamp_selection();
            }
            FetchEvent::Detail { seq, result } => self.detail.commit(seq, result),
        }
    }

    /// Arm (or re-arm) the debounce timer; the pending commit is replaced by
    /// every keystroke, so at most one commit happens per quiet period.
    fn schedule_search_commit(&mut self) {
        self.search_deadline = Some(Instant::now() + Duration::from_millis(SEARCH_DEBOUNCE_MS));
    }

    fn commit_search(&mut self) {
        self.search_deadline = None;
        self.store.query.set_search(self.search_input.clone());
        self.clamp_selection();
    }

    fn flush_search_debounce(&mut self) {
        if let Some(deadline) = self.search_deadline {
            if Instant::now() >= deadline {
                self.commit_search();
            }
        }
    }

    fn page_len(&self) -> usize {
        let filtered = self.store.filtered();
        pipeline::page_slice(&filtered, self.store.query.page).len()
    }

    fn clamp_selection(&mut self) {
        let len = self.page_len();
        let selected = self.table_state.selected().unwrap_or(0);
        if len == 0 || selected >= len {
            self.table_state.select(Some(0));
            self.scroll_state = self.scroll_state.position(0);
        }
        self.scroll_state = self
            .scroll_state
            .content_length(len.saturating_sub(1) * ITEM_HEIGHT);
    }

    fn next_row(&mut self) {
        let len = self.page_len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.table_state.select(Some(i));
        self.scroll_state = self.scroll_state.position(i * ITEM_HEIGHT);
    }

    fn previous_row(&mut self) {
        let i = match self.table_state.selected() {
            Some(0) | None => 0,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
        self.scroll_state = self.scroll_state.position(i * ITEM_HEIGHT);
    }

    fn next_page(&mut self) {
        let total = pipeline::total_pages(self.store.filtered().len());
        self.store.query.next_page(total);
        self.clamp_selection();
    }

    fn previous_page(&mut self) {
        self.store.query.previous_page();
        self.clamp_selection();
    }

    fn cycle_sort(&mut self) {
        let next = self.store.query.sort_by.cycle();
        if self.store.query.set_sort(next) {
            self.request_markets();
        }
    }

    fn cycle_filter(&mut self) {
        let next = self.store.query.filter_by.cycle();
        self.store.query.set_filter(next);
        self.clamp_selection();
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        theme::store(self.theme);
    }

    fn next_color(&mut self) {
        self.color_index = (self.color_index + 1) % PALETTES.len();
    }

    fn previous_color(&mut self) {
        let count = PALETTES.len();
        self.color_index = (self.color_index + count - 1) % count;
    }

    fn set_colors(&mut self) {
        self.colors = TableColors::new(&PALETTES[self.color_index], self.theme);
    }

    fn selected_coin_id(&self) -> Option<String> {
        let filtered = self.store.filtered();
        let page = pipeline::page_slice(&filtered, self.store.query.page);
        let i = self.table_state.selected()?;
        page.get(i).map(|coin| coin.id.clone())
    }

    pub fn run(
        mut self,
        mut terminal: DefaultTerminal,
        mut rx: mpsc::UnboundedReceiver<FetchEvent>,
    ) -> Result<()> {
        loop {
            // Drain fetch completions
            while let Ok(event) = rx.try_recv() {
                self.apply(event);
            }
            self.flush_search_debounce();

            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(POLL_DURATION_MS))? {
                // Drain ALL events, not just one
                while event::poll(Duration::from_millis(0))? {
                    match event::read()? {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if self.handle_key(key.code, key.modifiers) {
                                return Ok(());
                            }
                        }
                        Event::Mouse(_)
                        | Event::Resize(_, _)
                        | Event::FocusGained
                        | Event::FocusLost
                        | Event::Paste(_) => {}
                        _ => {}
                    }
                }
            }
        }
    }

    /// Returns true when the app should quit.
    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let shift = modifiers.contains(KeyModifiers::SHIFT);
        if self.search_open {
            match code {
                KeyCode::Char('/') | KeyCode::Esc => self.search_open = false,
                KeyCode::Enter => {
                    self.commit_search();
                    self.search_open = false;
                }
                KeyCode::Backspace => {
                    let _ = self.search_input.pop();
                    self.schedule_search_commit();
                }
                KeyCode::Char(c) => {
                    self.search_input.push(c);
                    self.schedule_search_commit();
                }
                _ => {}
            }
            return false;
        }
        match self.view {
            View::List => match code {
                KeyCode::Char('q') | KeyCode::Esc => return true,
                KeyCode::Char('j') | KeyCode::Down => self.next_row(),
                KeyCode::Char('k') | KeyCode::Up => self.previous_row(),
                KeyCode::Char('l') | KeyCode::Right if shift => self.next_color(),
                KeyCode::Char('h') | KeyCode::Left if shift => self.previous_color(),
                KeyCode::Char('l') | KeyCode::Right => self.next_page(),
                KeyCode::Char('h') | KeyCode::Left => self.previous_page(),
                KeyCode::Char('s') => self.cycle_sort(),
                KeyCode::Char('f') => self.cycle_filter(),
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char('i') => self.lang = self.lang.toggle(),
                KeyCode::Char('/') => {
                    self.search_input = self.store.query.search.clone();
                    self.search_open = true;
                }
                KeyCode::Enter => {
                    if let Some(id) = self.selected_coin_id() {
                        self.open_detail(id);
                    }
                }
                _ => {}
            },
            View::Detail => match code {
                KeyCode::Char('q') => return true,
                KeyCode::Esc | KeyCode::Backspace => {
                    self.detail.close();
                    self.view = View::List;
                }
                KeyCode::Char('r') => self.cycle_time_range(),
                KeyCode::Char('t') => self.toggle_theme(),
                KeyCode::Char('i') => self.lang = self.lang.toggle(),
                KeyCode::Char('l') | KeyCode::Right if shift => self.next_color(),
                KeyCode::Char('h') | KeyCode::Left if shift => self.previous_color(),
                _ => {}
            },
        }
        false
    }

    fn draw(&mut self, frame: &mut Frame) {
        self.set_colors();
        match self.view {
            View::List => self.draw_list(frame),
            View::Detail => self.draw_detail(frame),
        }
        if self.search_open {
            self.render_search_popup(frame);
        }
    }

    fn draw_list(&mut self, frame: &mut Frame) {
        let vertical = &Layout::vertical([Constraint::Min(5), Constraint::Length(5)]);
        let rects = vertical.split(frame.area());

        if self.store.is_loading() && self.store.coins().is_empty() {
            self.render_message(frame, rects[0], t(self.lang, Key::Loading), self.colors.accent);
        } else if self.store.coins().is_empty() {
            if let Some(error) = self.store.error() {
                let error = error.to_string();
                self.render_message(frame, rects[0], &error, ratatui::style::Color::Red);
            } else {
                self.render_message(frame, rects[0], "", self.colors.row_fg);
            }
        } else if self.store.filtered().is_empty() && !self.store.query.search.is_empty() {
            let message = no_results(self.lang, &self.store.query.search);
            self.render_message(frame, rects[0], &message, self.colors.accent);
        } else {
            self.render_table(frame, rects[0]);
            self.render_scrollbar(frame, rects[0]);
        }
        self.render_list_footer(frame, rects[1]);
    }

    fn render_message(&self, frame: &mut Frame, area: Rect, text: &str, color: ratatui::style::Color) {
        let paragraph = Paragraph::new(text)
            .style(Style::new().fg(color).bg(self.colors.buffer_bg))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::new().bg(self.colors.buffer_bg));
        frame.render_widget(paragraph, area);
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect) {
        let header_style = Style::default()
            .fg(self.colors.header_fg)
            .bg(self.colors.header_bg);
        let selected_row_style = Style::default()
            .add_modifier(Modifier::REVERSED)
            .fg(self.colors.selected_row_style_fg);

        let header: Row<'_> = [
            t(self.lang, Key::Coin),
            t(self.lang, Key::Symbol),
            t(self.lang, Key::Price),
            t(self.lang, Key::MarketCap),
            t(self.lang, Key::Change24h),
        ]
        .into_iter()
        .map(Cell::from)
        .collect::<Row>()
        .style(header_style);

        let filtered = self.store.filtered();
        let page = pipeline::page_slice(&filtered, self.store.query.page);

        let rows = page.iter().enumerate().map(|(i, coin)| {
            let bg = if i % 2 == 0 {
                self.colors.normal_row_color
            } else {
                self.colors.alt_row_color
            };
            let change = coin.price_change_percentage_24h;
            Row::new(vec![
                Cell::from(coin.name.clone()),
                Cell::from(coin.symbol.to_uppercase()),
                Cell::from(format!("{CURRENCY_SYMBOL}{:.2}", coin.current_price)),
                Cell::from(format_compact(coin.market_cap)),
                Cell::from(format!("{change:.2}%"))
                    .style(Style::new().fg(self.colors.change_color(change))),
            ])
            .style(Style::new().fg(self.colors.row_fg).bg(bg))
        });

        let table = Table::new(
            rows,
            [
                Constraint::Fill(2),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Fill(1),
                Constraint::Fill(1),
            ],
        )
        .header(header)
        .row_highlight_style(selected_row_style)
        .highlight_spacing(HighlightSpacing::Always)
        .bg(self.colors.buffer_bg);

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_scrollbar(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_stateful_widget(
            Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            area.inner(Margin {
                vertical: 1,
                horizontal: 1,
            }),
            &mut self.scroll_state,
        );
    }

    fn sort_label(&self) -> &'static str {
        use crate::store::SortBy;
        let key = match self.store.query.sort_by {
            SortBy::MarketCapDesc => Key::MarketCapDesc,
            SortBy::MarketCapAsc => Key::MarketCapAsc,
            SortBy::PriceDesc => Key::PriceDesc,
            SortBy::PriceAsc => Key::PriceAsc,
            SortBy::Change24hDesc => Key::Change24hDesc,
        };
        t(self.lang, key)
    }

    fn filter_label(&self) -> &'static str {
        use crate::store::FilterBy;
        let key = match self.store.query.filter_by {
            FilterBy::All => Key::AllCoins,
            FilterBy::Gainers => Key::Gainers,
            FilterBy::Losers => Key::Losers,
        };
        t(self.lang, key)
    }

    fn render_list_footer(&self, frame: &mut Frame, area: Rect) {
        let total = pipeline::total_pages(self.store.filtered().len());
        let mut status = format!(
            "{}: {} | {}: {} | {} {} / {}",
            t(self.lang, Key::SortLabel),
            self.sort_label(),
            t(self.lang, Key::FilterLabel),
            self.filter_label(),
            t(self.lang, Key::Page),
            self.store.query.page,
            total,
        );
        if !self.store.query.search.is_empty() {
            status.push_str(&format!(
                " | {}: {}",
                t(self.lang, Key::Search),
                self.store.query.search
            ));
        }

        let mut lines: Vec<Line> = vec![
            Line::from(t(self.lang, Key::HelpListNav)),
            Line::from(t(self.lang, Key::HelpListControls)),
        ];
        if let Some(error) = self.store.error() {
            lines.push(Line::from(Span::styled(
                error.to_string(),
                Style::new().fg(ratatui::style::Color::Red),
            )));
        } else {
            lines.push(Line::from(status));
        }

        let footer = Paragraph::new(lines)
            .style(
                Style::new()
                    .fg(self.colors.row_fg)
                    .bg(self.colors.buffer_bg),
            )
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::new().fg(self.colors.footer_border_color)),
            );
        frame.render_widget(footer, area);
    }

    fn render_search_popup(&mut self, frame: &mut Frame) {
        let area = popup_area(frame.area(), 60, 40);
        frame.render_widget(Clear, area);

        let mut lines = vec![Line::from(self.search_input.as_str())];
        let suggestions = pipeline::suggestions(self.store.coins(), &self.search_input);
        for coin in suggestions {
            lines.push(Line::from(Span::styled(
                format!("{} ({})", coin.name, coin.symbol.to_uppercase()),
                Style::new().fg(self.colors.accent),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(t(self.lang, Key::Search))
                    .border_style(Style::new().fg(self.colors.footer_border_color)),
            )
            .style(
                Style::new()
                    .fg(self.colors.row_fg)
                    .bg(self.colors.buffer_bg),
            )
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }

    fn draw_detail(&mut self, frame: &mut Frame) {
        let vertical = &Layout::vertical([Constraint::Min(5), Constraint::Length(3)]);
        let rects = vertical.split(frame.area());

        if self.detail.is_loading() {
            self.render_message(frame, rects[0], t(self.lang, Key::Loading), self.colors.accent);
        } else if let Some(error) = self.detail.error() {
            let error = error.to_string();
            self.render_message(frame, rects[0], &error, ratatui::style::Color::Red);
        } else if self.detail.view().is_some() {
            self.render_detail_panels(frame, rects[0]);
        }
        self.render_detail_footer(frame, rects[1]);
    }

    fn render_detail_panels(&mut self, frame: &mut Frame, area: Rect) {
        let Some(view) = self.detail.view() else {
            return;
        };
        let detail = &view.detail;
        let market = &detail.market_data;
        let change = market.price_change_percentage_24h;

        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Min(8),
        ])
        .split(area);
        let panels =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(rows[1]);

        let title = Paragraph::new(format!(
            "{} ({})",
            detail.name,
            detail.symbol.to_uppercase()
        ))
        .style(
            Style::new()
                .fg(self.colors.accent)
                .bg(self.colors.buffer_bg)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::bordered().border_style(Style::new().fg(self.colors.footer_border_color)));
        frame.render_widget(title, rows[0]);

        let mut market_lines = vec![
            Line::from(format!(
                "{}: {CURRENCY_SYMBOL}{:.2}",
                t(self.lang, Key::Price),
                market.price_in(VS_CURRENCY)
            )),
            Line::from(Span::styled(
                format!("{}: {change:.2}%", t(self.lang, Key::Change24h)),
                Style::new().fg(self.colors.change_color(change)),
            )),
            Line::from(format!(
                "{}: {}",
                t(self.lang, Key::MarketCap),
                format_compact(market.market_cap_in(VS_CURRENCY))
            )),
        ];
        if let Some(homepage) = detail.homepage() {
            market_lines.push(Line::from(format!(
                "{}: {homepage}",
                t(self.lang, Key::VisitWebsite)
            )));
        }
        let market_panel = Paragraph::new(market_lines)
            .style(
                Style::new()
                    .fg(self.colors.row_fg)
                    .bg(self.colors.buffer_bg),
            )
            .block(
                Block::bordered()
                    .title(t(self.lang, Key::MarketData))
                    .border_style(Style::new().fg(self.colors.footer_border_color)),
            );
        frame.render_widget(market_panel, panels[0]);

        let description = Paragraph::new(detail.description_text())
            .style(
                Style::new()
                    .fg(self.colors.row_fg)
                    .bg(self.colors.buffer_bg),
            )
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(t(self.lang, Key::Description))
                    .border_style(Style::new().fg(self.colors.footer_border_color)),
            );
        frame.render_widget(description, panels[1]);

        self.render_chart(frame, rows[2]);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect) {
        let Some(view) = self.detail.view() else {
            return;
        };
        let series = &view.series;
        if series.is_empty() {
            return;
        }

        let points: Vec<(f64, f64)> = series
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.price))
            .collect();
        let (min, max) = series.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| {
            (lo.min(p.price), hi.max(p.price))
        });
        // Flat series still needs a non-zero y span to render.
        let pad = ((max - min) * 0.05).max(max.abs() * 0.001).max(1e-9);

        let range_key = match self.detail.time_range() {
            crate::detail::TimeRange::Day => Key::OneDay,
            crate::detail::TimeRange::Week => Key::SevenDays,
            crate::detail::TimeRange::Month => Key::ThirtyDays,
        };
        let title = format!(
            "{} ({})",
            t(self.lang, Key::PriceHistory),
            t(self.lang, range_key)
        );

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::new().fg(self.colors.accent))
            .data(&points);

        let x_labels = vec![
            Line::from(series.first().map(|p| p.label.clone()).unwrap_or_default()),
            Line::from(series.last().map(|p| p.label.clone()).unwrap_or_default()),
        ];
        let y_labels = vec![
            Line::from(format!("{CURRENCY_SYMBOL}{:.2}", min - pad)),
            Line::from(format!("{CURRENCY_SYMBOL}{:.2}", max + pad)),
        ];

        let chart = Chart::new(vec![dataset])
            .block(
                Block::bordered()
                    .title(title)
                    .border_style(Style::new().fg(self.colors.footer_border_color)),
            )
            .style(Style::new().bg(self.colors.buffer_bg))
            .x_axis(
                Axis::default()
                    .style(Style::new().fg(self.colors.row_fg))
                    .bounds([0.0, (points.len().saturating_sub(1)).max(1) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::new().fg(self.colors.row_fg))
                    .bounds([min - pad, max + pad])
                    .labels(y_labels),
            );
        frame.render_widget(chart, area);
    }

    fn render_detail_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Paragraph::new(detail_help_line(self.lang))
            .style(
                Style::new()
                    .fg(self.colors.row_fg)
                    .bg(self.colors.buffer_bg),
            )
            .centered()
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(Style::new().fg(self.colors.footer_border_color)),
            );
        frame.render_widget(footer, area);
    }
}

fn detail_help_line(lang: Lang) -> String {
    format!(
        "(Esc) {} | (r) {} | (t) {} | (i) {}",
        t(lang, Key::BackToList),
        t(lang, Key::TimeRange),
        t(lang, Key::ThemeLabel),
        t(lang, Key::LanguageLabel),
    )
}

fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000_000.0 {
        format!("{CURRENCY_SYMBOL}{:.2}T", value / 1_000_000_000_000.0)
    } else if abs >= 1_000_000_000.0 {
        format!("{CURRENCY_SYMBOL}{:.2}B", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{CURRENCY_SYMBOL}{:.2}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{CURRENCY_SYMBOL}{:.2}K", value / 1_000.0)
    } else {
        format!("{CURRENCY_SYMBOL}{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::{detail_help_line, format_compact};
    use crate::i18n::{Key, Lang, t};

    #[test]
    fn compact_amounts_pick_the_right_suffix() {
        assert_eq!(format_compact(950.0), "₹950.00");
        assert_eq!(format_compact(12_500.0), "₹12.50K");
        assert_eq!(format_compact(3_400_000.0), "₹3.40M");
        assert_eq!(format_compact(98_000_000_000.0), "₹98.00B");
        assert_eq!(format_compact(2_100_000_000_000.0), "₹2.10T");
    }

    #[test]
    fn detail_footer_is_localized_and_names_the_way_back() {
        let en = detail_help_line(Lang::En);
        let hi = detail_help_line(Lang::Hi);
        assert!(en.contains(t(Lang::En, Key::BackToList)));
        assert!(hi.contains(t(Lang::Hi, Key::BackToList)));
        assert_ne!(en, hi);
    }
}

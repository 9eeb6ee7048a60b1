//! Terminal presentation surface.

use comfy_table::{Cell, Table};

use roster_core::model::Record;
use roster_core::notice::{Notice, NoticeBoard};
use roster_core::statistics::Statistics;
use roster_core::view::{RosterView, Surface, EMPTY_PLACEHOLDER};
use roster_report::text::render_statistics;

/// Prints the roster to stdout and keeps the statistics panel state.
pub struct TerminalSurface {
    board: NoticeBoard,
    statistics: Option<Statistics>,
}

impl TerminalSurface {
    pub fn new(board: NoticeBoard) -> Self {
        Self {
            board,
            statistics: None,
        }
    }

    /// Statistics currently on the panel, if it is shown.
    pub fn statistics(&self) -> Option<&Statistics> {
        self.statistics.as_ref()
    }

    pub fn current_notice(&self) -> Option<Notice> {
        self.board.current()
    }
}

impl Surface for TerminalSurface {
    fn render_list(&mut self, view: &RosterView) {
        match view {
            RosterView::Empty => println!("{EMPTY_PLACEHOLDER}"),
            RosterView::Records(items) => {
                let mut table = Table::new();
                table.set_header(vec!["#", "Name", "Grade", "Band", "Message"]);
                for item in items {
                    table.add_row(vec![
                        Cell::new(item.position),
                        Cell::new(&item.name),
                        Cell::new(format!("{}%", item.score)),
                        Cell::new(item.band.label()),
                        Cell::new(&item.message),
                    ]);
                }
                println!("{table}");
            }
        }
    }

    fn show_statistics(&mut self, stats: &Statistics) {
        println!("{}", render_statistics(stats));
        self.statistics = Some(stats.clone());
    }

    fn hide_statistics(&mut self) {
        tracing::debug!("statistics panel hidden");
        self.statistics = None;
    }

    fn notify(&mut self, notice: Notice) {
        println!("{notice}");
        self.board.post(notice);
    }

    fn clear_inputs(&mut self) {}
}

/// Table of records, as printed by range queries.
pub fn records_table(records: &[Record]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Grade", "Band", "Message"]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.name()),
            Cell::new(format!("{}%", record.score())),
            Cell::new(record.band().label()),
            Cell::new(record.message()),
        ]);
    }
    table
}

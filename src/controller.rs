use crate::client::SearchClient;
use crate::error::SearchError;
use crate::form::FormData;
use crate::markup::parse_line;
use crate::models::{QueryParameters, SearchResponse, SearchResult};
use crate::table::{Cell, ResultsTable, Row};

/// Connects a search form to the backend and paints the answer into a table.
///
/// Both collaborators are handed in at construction; the controller keeps no
/// state of its own between submissions; whatever the table shows is derived
/// from the last response rendered.
pub struct FormController<T: ResultsTable> {
    client: SearchClient,
    table: T,
}

impl<T: ResultsTable> FormController<T> {
    pub fn new(client: SearchClient, table: T) -> Self {
        Self { client, table }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn into_table(self) -> T {
        self.table
    }

    /// Handles one form submission. On failure the table keeps its previous
    /// content and the error is handed back to the caller.
    pub async fn on_submit(&mut self, form: &FormData) -> Result<(), SearchError> {
        let params = QueryParameters::from_form(form);
        tracing::info!(query = %params.query, page = %params.page, limit = %params.limit, "search submitted");

        let results = self.client.search(&params).await.inspect_err(|e| {
            tracing::error!("search failed, error: {:#}", e);
        })?;
        self.render(&results);
        Ok(())
    }

    /// Replaces the table content with `results`: a summary row, then a
    /// range row and a text row per result.
    pub fn render(&mut self, results: &SearchResponse) {
        self.table.clear();

        let mut index = 0;
        add_row(&mut self.table, index, summary_cell(results));
        index += 1;

        for result in &results.search_results {
            add_row(&mut self.table, index, range_cell(result));
            index += 1;
            add_row(&mut self.table, index, lines_cell(result));
            index += 1;
        }
        tracing::debug!(rows = index, "rendered search results");
    }
}

/// Inserts a single-cell row at `index`.
pub fn add_row<T: ResultsTable + ?Sized>(table: &mut T, index: usize, content: Cell) {
    table.insert_row(index, Row::single(content));
}

fn summary_cell(results: &SearchResponse) -> Cell {
    Cell::text(format!("Total results: {}", results.total_quantity))
        .push_break()
        .push_text(format!("Page results: {}", results.page_quantity))
}

fn range_cell(result: &SearchResult) -> Cell {
    Cell::text(format!("Lines: {} to {}", result.from_line, result.to_line))
}

fn lines_cell(result: &SearchResult) -> Cell {
    result
        .lines_text
        .iter()
        .fold(Cell::new(), |cell, line| cell.push_inlines(parse_line(line)).push_break())
}

use anyhow::{Context, Result};
use html2text::from_read;
use html5ever::serialize::{Serialize, SerializeOpts, Serializer, TraversalScope, serialize};
use html5ever::{LocalName, Namespace, QualName};
use std::io;

use crate::markup::Inline;

pub const TABLE_BODY_ID: &str = "table-body";

const HTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// One piece of a cell. Text parts are always emitted as text nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellPart {
    Text(String),
    Bold(String),
    LineBreak,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    parts: Vec<CellPart>,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new().push_text(text)
    }

    pub fn push_text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(CellPart::Text(text.into()));
        self
    }

    pub fn push_bold(mut self, text: impl Into<String>) -> Self {
        self.parts.push(CellPart::Bold(text.into()));
        self
    }

    pub fn push_break(mut self) -> Self {
        self.parts.push(CellPart::LineBreak);
        self
    }

    pub fn push_inlines(self, inlines: impl IntoIterator<Item = Inline>) -> Self {
        inlines.into_iter().fold(self, |cell, inline| match inline {
            Inline::Text(t) => cell.push_text(t),
            Inline::Bold(t) => cell.push_bold(t),
        })
    }

    pub fn parts(&self) -> &[CellPart] {
        &self.parts
    }

    /// Cell content as it reads on screen, line breaks as `\n`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                CellPart::Text(t) | CellPart::Bold(t) => out.push_str(t),
                CellPart::LineBreak => out.push('\n'),
            }
        }
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn single(cell: Cell) -> Self {
        Self { cells: vec![cell] }
    }

    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(Cell::plain_text)
            .collect::<Vec<String>>()
            .join("\t")
    }
}

/// Where rendered search results go.
pub trait ResultsTable {
    fn clear(&mut self);

    /// Inserts `row` so it ends up at `index`. An index past the end appends.
    fn insert_row(&mut self, index: usize, row: Row);

    fn rows(&self) -> &[Row];

    fn row_count(&self) -> usize {
        self.rows().len()
    }
}

/// In-memory `<tbody>` that can be written out as HTML or terminal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBody {
    id: String,
    rows: Vec<Row>,
}

impl Default for TableBody {
    fn default() -> Self {
        Self::new(TABLE_BODY_ID)
    }
}

impl TableBody {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rows: Vec::new(),
        }
    }

    pub fn write_html<W: io::Write>(&self, writer: W) -> io::Result<()> {
        let opts = SerializeOpts {
            traversal_scope: TraversalScope::IncludeNode,
            ..Default::default()
        };
        serialize(writer, self, opts)
    }

    pub fn to_html(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_html(&mut buf)
            .context("Failed to serialize table body")?;
        String::from_utf8(buf).context("Serialized table body is not utf-8")
    }

    /// Renders the table for a terminal, wrapped at `width` columns.
    pub fn to_text(&self, width: usize) -> Result<String> {
        // html2text only lays out rows inside a table element
        let html = format!("<table>{}</table>", self.to_html()?);
        let text = from_read(html.as_bytes(), width).context("Failed to render table as text")?;
        Ok(text)
    }
}

impl ResultsTable for TableBody {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn insert_row(&mut self, index: usize, row: Row) {
        let index = index.min(self.rows.len());
        self.rows.insert(index, row);
    }

    fn rows(&self) -> &[Row] {
        &self.rows
    }
}

fn html_name(local: &str) -> QualName {
    QualName::new(None, Namespace::from(HTML_NS), LocalName::from(local))
}

fn write_cell<S: Serializer>(serializer: &mut S, cell: &Cell) -> io::Result<()> {
    let td = html_name("td");
    serializer.start_elem(td.clone(), std::iter::empty())?;
    for part in cell.parts() {
        match part {
            CellPart::Text(t) => serializer.write_text(t)?,
            CellPart::Bold(t) => {
                let b = html_name("b");
                serializer.start_elem(b.clone(), std::iter::empty())?;
                serializer.write_text(t)?;
                serializer.end_elem(b)?;
            }
            CellPart::LineBreak => {
                let br = html_name("br");
                serializer.start_elem(br.clone(), std::iter::empty())?;
                serializer.end_elem(br)?;
            }
        }
    }
    serializer.end_elem(td)
}

impl Serialize for TableBody {
    fn serialize<S>(&self, serializer: &mut S, traversal_scope: TraversalScope) -> io::Result<()>
    where
        S: Serializer,
    {
        let tbody = html_name("tbody");
        let id_attr = QualName::new(None, Namespace::from(""), LocalName::from("id"));
        let include_node = matches!(traversal_scope, TraversalScope::IncludeNode);

        if include_node {
            serializer.start_elem(
                tbody.clone(),
                std::iter::once((&id_attr, self.id.as_str())),
            )?;
        }
        for row in &self.rows {
            let tr = html_name("tr");
            serializer.start_elem(tr.clone(), std::iter::empty())?;
            for cell in &row.cells {
                write_cell(serializer, cell)?;
            }
            serializer.end_elem(tr)?;
        }
        if include_node {
            serializer.end_elem(tbody)?;
        }
        Ok(())
    }
}

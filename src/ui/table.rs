use crate::category::Category;
use crate::snippet::Snippet;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stats_table(stats: &[(&str, &str)]) -> String {
    let mut builder = TableBuilder::new();
    for (label, value) in stats {
        builder.add_row(label, value);
    }
    builder.build()
}

#[derive(Tabled)]
struct SnippetRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Language")]
    language: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Version")]
    version: String,
    #[tabled(rename = "Origin")]
    origin: &'static str,
}

/// One row per snippet, without the code
pub fn snippet_table(snippets: &[Snippet]) -> String {
    let rows: Vec<SnippetRow> = snippets
        .iter()
        .map(|s| SnippetRow {
            id: s.id,
            title: s.title.clone(),
            language: s.language.to_uppercase(),
            category: s.category_name.clone(),
            version: s.version.clone(),
            origin: s.origin_label(),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "")]
    icon: String,
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Snippets")]
    count: usize,
}

/// Categories with their snippet counts
pub fn category_table(categories: &[(Category, usize)]) -> String {
    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|(c, count)| CategoryRow {
            icon: c.icon.clone(),
            name: c.name.clone(),
            count: *count,
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

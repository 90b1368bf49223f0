/// Plain-text table, each column as wide as its widest cell.
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

const GUTTER: &str = "  ";

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let header: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        std::iter::once(&header)
            .chain(self.rows.iter())
            .map(|cells| line(cells, &widths))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn line(cells: &[String], widths: &[usize]) -> String {
    widths
        .iter()
        .enumerate()
        .map(|(i, width)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(GUTTER)
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_align_columns_by_char_width() {
        let mut table = Table::new(&["NAME", "DAYS"]);
        table.row(vec!["Milk".to_string(), "—".to_string()]);
        table.row(vec!["Basmati rice".to_string(), "12".to_string()]);

        assert_eq!(
            table.render(),
            "NAME          DAYS\nMilk          —\nBasmati rice  12"
        );
    }

    #[test]
    fn should_render_header_only_when_empty() {
        let table = Table::new(&["ID", "QUERY"]);

        assert!(table.is_empty());
        assert_eq!(table.render(), "ID  QUERY");
    }
}

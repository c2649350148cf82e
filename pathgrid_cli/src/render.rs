use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use pathgrid_core::{AdjacencyMatrix, FormatOptions, format::DEFAULT_CELL_WIDTH, format_with};

#[derive(Args)]
pub struct RenderArgs {
    /// Width of a cell in plain text output
    #[arg(long, env = "PATHGRID_CELL_WIDTH", default_value_t = DEFAULT_CELL_WIDTH)]
    pub cell_width: usize,

    /// Draw matrices as tables with a header row and column
    #[arg(long)]
    pub table: bool,
}

impl Default for RenderArgs {
    fn default() -> Self {
        RenderArgs {
            cell_width: DEFAULT_CELL_WIDTH,
            table: false,
        }
    }
}

pub fn render_table(matrix: &AdjacencyMatrix) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header = vec![String::new()];
    header.extend(matrix.vertices().map(|vertex| vertex.to_string()));
    table.set_header(header);

    for (from, row) in matrix.vertices().zip(matrix.rows()) {
        let mut cells = vec![from.to_string()];
        cells.extend(row.iter().map(|weight| weight.to_string()));
        table.add_row(cells);
    }

    table
}

pub fn render(matrix: &AdjacencyMatrix, args: &RenderArgs) -> String {
    if args.table {
        render_table(matrix).to_string()
    } else {
        let options = FormatOptions {
            cell_width: args.cell_width,
            ..FormatOptions::default()
        };
        format_with(matrix, &options)
    }
}

pub fn print_matrix(title: &str, matrix: &AdjacencyMatrix, args: &RenderArgs) {
    println!("{title}");
    let text = render(matrix, args);
    if text.ends_with('\n') {
        print!("{text}");
    } else {
        println!("{text}");
    }
}

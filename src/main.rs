use std::fs::File;
use std::io;
use std::io::Read;
use std::process::exit;

use structopt::StructOpt;

use blockview::demo;
use blockview::HighlightOptions;
use blockview::NestingColors;
use blockview::Style;

#[derive(Debug, StructOpt)]
#[structopt(name = "blockview", about = "Color code lines by block nesting depth")]
struct OptMain {
    #[structopt(short, long, default_value = "blocks", help = "Rendering style: blocks or indent")]
    style: Style,

    #[structopt(short = "N", long, help = "Do not prefix lines with line numbers")]
    no_line_numbers: bool,

    #[structopt(short, long, help = "Spaces per indent level (skips auto-detection)")]
    unit: Option<usize>,

    #[structopt(short, long, default_value = "0", help = "Columns a leading tab counts for")]
    tab_columns: usize,

    #[structopt(short, long, help = "Keep cycling palette colors past six open blocks")]
    cycle_colors: bool,

    #[structopt(name = "FILE", help = "File to highlight, - for stdin; omit to run the demo")]
    file: Option<String>,
}

fn main() {
    let opt = OptMain::from_args();

    let path = match opt.file {
        Some(x) => x,
        None => {
            demo::run();
            return;
        }
    };

    let code = match read_input(&path) {
        Ok(x) => x,
        Err(e) => {
            eprintln!("blockview: {}: {}", path, e);
            exit(1);
        }
    };

    let opts = HighlightOptions {
        show_line_numbers: !opt.no_line_numbers,
        indent_unit: opt.unit,
        tab_columns: opt.tab_columns,
        nesting_colors: if opt.cycle_colors {
            NestingColors::Cycled
        } else {
            NestingColors::Legacy
        },
        ..HighlightOptions::default()
    };

    let output = match opt.style {
        Style::Indent => blockview::highlight_by_indent_with_options(&code, &opts),
        Style::Blocks => blockview::highlight_by_blocks_with_options(&code, &opts),
    };
    println!("{}", output);
}

fn read_input(path: &str) -> io::Result<String> {
    let mut text = String::new();
    if path == "-" {
        io::stdin().read_to_string(&mut text)?;
    } else {
        let mut file = File::open(path)?;
        file.read_to_string(&mut text)?;
    }
    Ok(text)
}

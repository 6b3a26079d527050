//! Built-in teaching examples, shown when the binary runs without a file.

use crate::highlight;
use crate::libs::term_size;
use crate::render;
use crate::Style;

const GAME_CODE: &str = "\
while(corn_collects_all == true):
    if(block != 'chickens'):
        move_forward(1)
        turn_north()
        move_forward(1)
        turn_east()";

const FACTORIAL_CODE: &str = "\
def factorial(n):
    if n <= 1:
        return 1
    else:
        return n * factorial(n-1)

result = factorial(5)
print(result)";

const LOOP_CODE: &str = "\
for i in range(3):
    print(f\"Outer loop {i}\")
    for j in range(2):
        print(f\"  Inner loop {j}\")
        if j == 1:
            print(\"    Deepest level!\")";

fn rule_width() -> usize {
    match term_size::columns() {
        Some(x) => x,
        None => render::DEFAULT_WIDTH,
    }
}

fn print_header(title: &str, width: usize) {
    println!("{}", "=".repeat(width));
    println!("{}", title);
    println!("{}", "=".repeat(width));
}

/// Walk through the bundled snippets in both styles and close with a
/// few tips for whoever is teaching with the tool.
pub fn run() {
    let width = rule_width();

    print_header("CODE BLOCK HIGHLIGHTER - Demo", width);
    println!();

    println!("Example 1: Simple nested blocks (with line numbers)");
    println!("{}", "-".repeat(width));
    highlight(GAME_CODE, Style::Indent, true);
    println!();

    println!("Example 2: Function with conditional (block indicators)");
    println!("{}", "-".repeat(width));
    highlight(FACTORIAL_CODE, Style::Blocks, false);
    println!();

    println!("Example 3: Deeply nested loops (with line numbers)");
    println!("{}", "-".repeat(width));
    highlight(LOOP_CODE, Style::Indent, true);
    println!();

    print_header("Tips for Teaching:", width);
    println!(
        "
1. Each color represents a different level of indentation
2. Code at the same color level \"belongs together\"
3. Darker/first color = main code (not indented)
4. Each new indent = entering a new \"block\" of code
5. Code inside blocks only runs when the condition above it is true

Try modifying the examples above to see how the colors change!
"
    );
}

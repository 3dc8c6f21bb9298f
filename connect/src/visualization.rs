use crate::{Board, Cell};

/// Renders the board as text, top row first, with the column numbers on top.
///
/// Cells listed in `highlight` (e.g. a [winning run](crate::winning_run)) are
/// drawn as `#`.
pub fn visualize_board(board: &Board, highlight: &[(usize, usize)]) -> String {
    let size = board.size();

    // Column numbers and the top of the box
    let mut result = String::from("     ");
    for column in 0..size {
        result += &format!("{:>3}", column);
    }
    result += "\n    ╭";
    for _ in 0..size {
        result += "───";
    }
    result += "─╮\n";

    for (row, cells) in board.rows().enumerate().rev() {
        result += &format!("{:>3} │", row);
        for (column, cell) in cells.iter().enumerate() {
            let symbol = if highlight.contains(&(row, column)) {
                '#'
            } else {
                match cell {
                    Cell::Empty => '·',
                    Cell::Human => 'X',
                    Cell::Computer => 'O',
                }
            };
            result += &format!("  {}", symbol);
        }
        result += " │\n";
    }

    // Draw the bottom of the box
    result += "    ╰";
    for _ in 0..size {
        result += "───";
    }
    result += "─╯";
    result
}

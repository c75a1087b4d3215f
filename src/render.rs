use crate::constants::Direction;
use crate::grid::Dimensions;
use crate::passage::Passage;

/// Draws every floor as a bordered grid, lowest floor first.
///
/// `+` marks room corners, `-` and `|` the remaining walls. A room with a way up
/// shows `U`, a way down `D`, and both `B`.
pub fn render(dimensions: Dimensions, passages: &[Passage]) -> String {
    let mut wall_row = vec![b'+'];
    let mut room_row = vec![b'|'];
    for _ in 0..dimensions.length {
        wall_row.extend_from_slice(b"-+");
        room_row.extend_from_slice(b" |");
    }

    let mut canvas: Vec<Vec<Vec<u8>>> = (0..dimensions.height)
        .map(|_| {
            (0..2 * dimensions.width + 1)
                .map(|line| {
                    if line % 2 == 0 {
                        wall_row.clone()
                    } else {
                        room_row.clone()
                    }
                })
                .collect()
        })
        .collect();

    for passage in passages {
        let from = passage.from();
        let to = passage.to();
        match passage.direction() {
            Direction::South | Direction::North => {
                let row = from.row.max(to.row);
                canvas[from.floor][2 * row][2 * from.column + 1] = b' ';
            }
            Direction::East | Direction::West => {
                let column = from.column.max(to.column);
                canvas[from.floor][2 * from.row + 1][2 * column] = b' ';
            }
            Direction::Up | Direction::Down => {
                let (lower, upper) = if from.floor < to.floor {
                    (from, to)
                } else {
                    (to, from)
                };
                mark_stair(
                    &mut canvas[lower.floor][2 * lower.row + 1][2 * lower.column + 1],
                    b'U',
                );
                mark_stair(
                    &mut canvas[upper.floor][2 * upper.row + 1][2 * upper.column + 1],
                    b'D',
                );
            }
        }
    }

    let mut out = String::new();
    for floor in canvas {
        for line in floor {
            out.push_str(&String::from_utf8_lossy(&line));
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

fn mark_stair(cell: &mut u8, stair: u8) {
    *cell = match *cell {
        b' ' => stair,
        current if current == stair => stair,
        _ => b'B',
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Position;

    #[test]
    fn test_single_cell() {
        let text = render(Dimensions::new(1, 1, 1).unwrap(), &[]);
        insta::assert_snapshot!(text, @r"
        +-+
        | |
        +-+
        ");
    }

    #[test]
    fn test_two_floors() {
        let passages = vec![
            Passage::east(Position::new(0, 0, 0)),
            Passage::south(Position::new(0, 1, 0)),
            Passage::south(Position::new(0, 0, 0)),
            Passage::up(Position::new(1, 1, 0)),
            Passage::east(Position::new(0, 0, 1)),
            Passage::south(Position::new(0, 0, 1)),
            Passage::east(Position::new(1, 0, 1)),
        ];
        let text = render(Dimensions::new(2, 2, 2).unwrap(), &passages);
        insta::assert_snapshot!(text, @r"
        +-+-+
        |   |
        + + +
        | |U|
        +-+-+

        +-+-+
        |   |
        + +-+
        |  D|
        +-+-+
        ");
    }

    #[test]
    fn test_stairs_both_ways() {
        let passages = vec![
            Passage::up(Position::new(0, 0, 0)),
            Passage::up(Position::new(0, 0, 1)),
        ];
        let text = render(Dimensions::new(1, 1, 3).unwrap(), &passages);
        let rooms = text
            .lines()
            .filter(|line| line.starts_with('|'))
            .collect::<Vec<_>>();
        assert_eq!(rooms, vec!["|U|", "|B|", "|D|"]);
    }
}

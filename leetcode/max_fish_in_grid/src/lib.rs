const DIRS: [(isize, isize); 4] = [(1, 0), (0, 1), (0, -1), (-1, 0)];

/// Most fish a fisher can catch starting from the best water cell.
///
/// Water cells hold a positive fish count, land is 0. The catch from a cell is
/// the total over its 4-connected water region. Rows may differ in length, a
/// missing cell counts as land.
pub fn find_max_fish(grid: &[Vec<i32>]) -> i32 {
    let mut visited: Vec<Vec<bool>> = grid.iter().map(|row| vec![false; row.len()]).collect();
    let mut max_fish = 0;

    for (r, row) in grid.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if cell == 0 || visited[r][c] {
                continue;
            }

            let mut fish = 0;
            let mut stack = vec![(r, c)];
            visited[r][c] = true;

            while let Some((r, c)) = stack.pop() {
                fish += grid[r][c];

                for (dr, dc) in DIRS {
                    let (Some(nr), Some(nc)) = (r.checked_add_signed(dr), c.checked_add_signed(dc)) else {
                        continue;
                    };
                    let water = grid.get(nr).and_then(|row| row.get(nc)).is_some_and(|&count| count != 0);
                    if water && !visited[nr][nc] {
                        visited[nr][nc] = true;
                        stack.push((nr, nc));
                    }
                }
            }

            tracing::trace!(r, c, fish, "region");
            max_fish = max_fish.max(fish);
        }
    }

    max_fish
}

#[cfg(test)]
mod tests {
    use super::find_max_fish;

    #[test]
    fn test_find_max_fish() {
        let grid = vec![vec![0, 2, 1, 0], vec![4, 0, 0, 3], vec![1, 0, 0, 4], vec![0, 3, 2, 0]];
        assert_eq!(find_max_fish(&grid), 7);

        let grid = vec![vec![1, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 1]];
        assert_eq!(find_max_fish(&grid), 1);
    }

    #[test]
    fn test_degenerate_grids() {
        assert_eq!(find_max_fish(&[]), 0);
        assert_eq!(find_max_fish(&[vec![5]]), 5);
        assert_eq!(find_max_fish(&[vec![0, 0]]), 0);
    }

    #[test]
    fn test_ragged_rows() {
        let grid = vec![vec![1, 2, 3], vec![4], vec![0, 5, 6, 7]];
        assert_eq!(find_max_fish(&grid), 18);

        let grid = vec![vec![1], vec![2, 3, 4], vec![]];
        assert_eq!(find_max_fish(&grid), 10);
    }
}

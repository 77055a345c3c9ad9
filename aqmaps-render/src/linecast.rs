/// Visits every pixel on the line from `start` to `end`, both ends included,
/// using a supercover Bresenham traversal. Diagonal steps also visit the two
/// orthogonal neighbours so the drawn line has no corner gaps.
pub fn supercover_line<F>(start: (i32, i32), end: (i32, i32), mut visit: F)
where
    F: FnMut(i32, i32),
{
    let (mut x0, mut y0) = start;
    let (x1, y1) = end;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = (x1 - x0).signum();
    let sy = (y1 - y0).signum();

    let mut err = dx - dy;

    loop {
        visit(x0, y0);
        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = err.saturating_mul(2);
        let mut step_x = false;
        let mut step_y = false;

        if e2 > -dy {
            err -= dy;
            x0 += sx;
            step_x = true;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
            step_y = true;
        }

        if step_x && step_y {
            visit(x0 - sx, y0);
            visit(x0, y0 - sy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(start: (i32, i32), end: (i32, i32)) -> Vec<(i32, i32)> {
        let mut pixels = Vec::new();
        supercover_line(start, end, |x, y| pixels.push((x, y)));
        pixels
    }

    #[test]
    fn single_point() {
        assert_eq!(collect((3, 4), (3, 4)), vec![(3, 4)]);
    }

    #[test]
    fn horizontal_line_includes_both_ends() {
        assert_eq!(collect((0, 0), (3, 0)), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(collect((2, 1), (0, 1)), vec![(2, 1), (1, 1), (0, 1)]);
    }

    #[test]
    fn diagonal_fills_corners() {
        let pixels = collect((0, 0), (2, 2));
        assert_eq!(pixels.first(), Some(&(0, 0)));
        assert_eq!(pixels.last(), Some(&(2, 2)));
        assert!(pixels.contains(&(0, 1)));
        assert!(pixels.contains(&(1, 0)));
        assert!(pixels.contains(&(1, 1)));
    }
}
